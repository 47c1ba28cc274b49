// Product routing pipeline
//
// intent -> template -> SQL generation -> execution -> row shaping.
// All failures come back as RouteError; the engine converts them to payloads
// at the boundary.

use crate::db::QueryExecutor;
use crate::intent;
use crate::oracle::{strip_code_fences, CompletionOracle};
use crate::payload::{PayloadKind, ResponsePayload};
use crate::prompts;

use super::engine::EngineSettings;
use super::error::RouteError;
use super::select::{select_template, QueryKind};
use super::shape::{OrderRow, PriceQuantityRow, PriceRow, ProductRow};

pub(crate) async fn handle_product(
    oracle: &dyn CompletionOracle,
    executor: &dyn QueryExecutor,
    settings: &EngineSettings,
    message: &str,
    customer_id: &str,
) -> Result<ResponsePayload, RouteError> {
    let signal = intent::classify(message, settings.similarity_threshold);
    let kind = QueryKind::resolve(signal);
    let prompt = select_template(kind, message, customer_id);

    tracing::info!(kind = prompt.kind.as_str(), "routing product query");

    let raw = oracle
        .complete(prompt.system, &prompt.human)
        .await
        .map_err(RouteError::Oracle)?;

    let sql = strip_code_fences(&raw);
    if sql.is_empty() {
        return Err(RouteError::EmptyQuery);
    }

    let rows = executor
        .execute(&sql)
        .await
        .map_err(RouteError::Execution)?
        .unwrap_or_default();

    let Some(first) = rows.first() else {
        return Err(RouteError::NoResults { kind });
    };

    match kind {
        QueryKind::OrderLookup => {
            let row = OrderRow::from_row(first)?;
            let title = row.title.replace(' ', "");

            let human = format!(
                "{message} | {title} | {} | {} | {} | {}",
                row.order_id, row.total_price, row.product_id, row.status
            );
            let reply = oracle
                .complete(prompts::RESPOND_ORDER, &human)
                .await
                .map_err(RouteError::Oracle)?;

            let order_link = format!(
                "{}/pages/product-view?orderId={}",
                settings.domain_fe, row.order_id
            );
            tracing::debug!(
                product_link = %format!(
                    "{}/product-details/{}-{title}",
                    settings.domain_fe, row.product_id
                ),
                "order shaped"
            );

            Ok(ResponsePayload {
                kind: PayloadKind::Order,
                message: reply,
                link: Some(order_link),
                image: Some(row.image_url),
                has_answer: None,
            })
        }
        QueryKind::PriceLookup => {
            let row = PriceRow::from_row(first)?;

            let human = format!(
                "{message} | {} | {} | {} | {}",
                row.title, row.price, row.quantity, row.product_id
            );
            let reply = oracle
                .complete(prompts::RESPOND_PRICE, &human)
                .await
                .map_err(RouteError::Oracle)?;

            Ok(ResponsePayload {
                kind: PayloadKind::Price,
                message: reply,
                link: None,
                image: Some(row.image_url),
                has_answer: None,
            })
        }
        QueryKind::PriceWithQuantity => {
            // Fixed message, no second oracle call on this path
            let row = PriceQuantityRow::from_row(first)?;

            Ok(ResponsePayload {
                kind: PayloadKind::Product,
                message: format!(
                    "The price for the product Matching your criteria is {}",
                    row.price
                ),
                link: None,
                image: None,
                has_answer: None,
            })
        }
        QueryKind::ProductFilter => {
            let row = ProductRow::from_row(first)?;
            let title = row.title.replace(' ', "");

            let human = format!("{message} | {title} | {}", row.product_id);
            let reply = oracle
                .complete(prompts::RESPOND_PRODUCT, &human)
                .await
                .map_err(RouteError::Oracle)?;

            Ok(ResponsePayload {
                kind: PayloadKind::Product,
                message: reply,
                link: Some(format!(
                    "{}/product-details/{}-{title}",
                    settings.domain_fe, row.product_id
                )),
                image: Some(row.image_url),
                has_answer: None,
            })
        }
    }
}
