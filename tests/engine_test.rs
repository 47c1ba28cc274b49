// Integration tests for the routing engine with scripted collaborators

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use strapline::db::{QueryExecutor, Row};
use strapline::faq::{FaqAnswer, FaqSearch, NoFaq};
use strapline::oracle::CompletionOracle;
use strapline::payload::PayloadKind;
use strapline::prompts;
use strapline::router::{Engine, EngineSettings};

const DOMAIN: &str = "https://shop.example.com";

/// Oracle that pops one scripted reply per call and records every call.
struct ScriptedOracle {
    replies: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<(String, String)>>,
}

impl ScriptedOracle {
    fn new(replies: Vec<Result<&str, &str>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(
                replies
                    .into_iter()
                    .map(|r| r.map(str::to_string).map_err(str::to_string))
                    .collect(),
            ),
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl CompletionOracle for ScriptedOracle {
    async fn complete(&self, system: &str, human: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((system.to_string(), human.to_string()));
        match self.replies.lock().unwrap().pop_front() {
            Some(Ok(reply)) => Ok(reply),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            None => Err(anyhow::anyhow!("no scripted reply left")),
        }
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

enum Outcome {
    Rows(Option<Vec<Row>>),
    Fail,
}

/// Executor that returns the same scripted outcome on every call.
struct ScriptedExecutor {
    outcome: Outcome,
    calls: AtomicUsize,
    last_sql: Mutex<Option<String>>,
}

impl ScriptedExecutor {
    fn rows(rows: Vec<Row>) -> Arc<Self> {
        Self::with_outcome(Outcome::Rows(Some(rows)))
    }

    fn no_result_set() -> Arc<Self> {
        Self::with_outcome(Outcome::Rows(None))
    }

    fn failing() -> Arc<Self> {
        Self::with_outcome(Outcome::Fail)
    }

    fn with_outcome(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            last_sql: Mutex::new(None),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last_sql(&self) -> Option<String> {
        self.last_sql.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryExecutor for ScriptedExecutor {
    async fn execute(&self, sql: &str) -> Result<Option<Vec<Row>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_sql.lock().unwrap() = Some(sql.to_string());
        match &self.outcome {
            Outcome::Rows(rows) => Ok(rows.clone()),
            Outcome::Fail => Err(anyhow::anyhow!("relation \"order\" does not exist")),
        }
    }
}

/// FAQ stub that always answers.
struct FaqHit;

#[async_trait]
impl FaqSearch for FaqHit {
    async fn lookup(&self, _message: &str) -> Result<FaqAnswer> {
        Ok(FaqAnswer {
            message: "Shipping takes 3-5 business days.".to_string(),
            has_answer: true,
            link: None,
            image: None,
        })
    }
}

fn engine(
    oracle: Arc<ScriptedOracle>,
    executor: Arc<ScriptedExecutor>,
    faq: Arc<dyn FaqSearch>,
) -> Engine {
    Engine::new(
        oracle,
        executor,
        faq,
        EngineSettings {
            domain_fe: DOMAIN.to_string(),
            similarity_threshold: 80,
        },
    )
}

fn order_row() -> Row {
    let mut row = Row::new();
    row.insert("title".into(), json!("Custom Lanyard"));
    row.insert("id".into(), json!(42));
    row.insert("product_id".into(), json!(7));
    row.insert("status".into(), json!("shipped"));
    row.insert("total_price".into(), json!("19.99"));
    row.insert("color_name".into(), json!("red"));
    row.insert("product_image_url".into(), json!("http://img/lanyard.png"));
    row
}

#[tokio::test]
async fn test_greeting_short_circuits_all_collaborators() {
    let oracle = ScriptedOracle::new(vec![]);
    let executor = ScriptedExecutor::rows(vec![]);
    let engine = engine(oracle.clone(), executor.clone(), Arc::new(NoFaq));

    let payload = engine.answer("hello", None).await;

    assert_eq!(payload.kind, PayloadKind::Text);
    assert_eq!(payload.message, "Hello! How can I assist you today?");
    assert_eq!(oracle.call_count(), 0);
    assert_eq!(executor.call_count(), 0);
}

#[tokio::test]
async fn test_last_order_scenario() {
    let oracle = ScriptedOracle::new(vec![
        Ok("Product"),
        Ok("```sql\nSELECT o.id, p.title FROM \"order\" o\n```"),
        Ok("Your last order of Custom Lanyard has shipped."),
    ]);
    let executor = ScriptedExecutor::rows(vec![order_row()]);
    let engine = engine(oracle.clone(), executor.clone(), Arc::new(NoFaq));

    let payload = engine.answer("what is my last order", Some("777")).await;

    let calls = oracle.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[1].0, prompts::SQL_ORDER);
    assert_eq!(calls[1].1, "what is my last order | 777");
    assert_eq!(calls[2].0, prompts::RESPOND_ORDER);
    assert!(calls[2].1.contains("CustomLanyard"), "title loses its spaces");
    assert!(calls[2].1.contains("19.99"));

    // Fences stripped before execution
    assert_eq!(
        executor.last_sql().unwrap(),
        "SELECT o.id, p.title FROM \"order\" o"
    );

    assert_eq!(payload.kind, PayloadKind::Order);
    assert_eq!(
        payload.link.as_deref(),
        Some("https://shop.example.com/pages/product-view?orderId=42")
    );
    assert_eq!(payload.image.as_deref(), Some("http://img/lanyard.png"));
}

#[tokio::test]
async fn test_price_lookup_scenario() {
    let oracle = ScriptedOracle::new(vec![
        Ok("Product"),
        Ok("SELECT p.title, pp.price_chart, i.url FROM product p"),
        Ok("A nylon lanyard starts at 0.55 for 100 units."),
    ]);

    let mut row = Row::new();
    row.insert("title".into(), json!("Nylon Lanyard"));
    row.insert("id".into(), json!(3));
    row.insert("url".into(), json!("http://img/nylon.png"));
    row.insert(
        "price_chart".into(),
        json!([{"price": "0.55", "quantity": 100}]),
    );
    let executor = ScriptedExecutor::rows(vec![row]);
    let engine = engine(oracle.clone(), executor.clone(), Arc::new(NoFaq));

    let payload = engine
        .answer("what is the price of nylon lanyard", None)
        .await;

    let calls = oracle.calls();
    assert_eq!(calls[1].0, prompts::SQL_PRICE);
    assert_eq!(calls[2].0, prompts::RESPOND_PRICE);
    assert!(calls[2].1.contains("0.55"));
    assert!(calls[2].1.contains("100"));

    assert_eq!(payload.kind, PayloadKind::Price);
    assert!(payload.link.is_none());
    assert_eq!(payload.image.as_deref(), Some("http://img/nylon.png"));
}

#[tokio::test]
async fn test_price_with_quantity_skips_second_oracle_call() {
    let oracle = ScriptedOracle::new(vec![
        Ok("Product"),
        Ok("SELECT q->>'price' AS price FROM product_price"),
    ]);

    let mut row = Row::new();
    row.insert("product_id".into(), json!(3));
    row.insert("price".into(), json!("0.45"));
    let executor = ScriptedExecutor::rows(vec![row]);
    let engine = engine(oracle.clone(), executor.clone(), Arc::new(NoFaq));

    let payload = engine
        .answer("item pone width 20 clip quantity of 500", None)
        .await;

    assert_eq!(oracle.call_count(), 2);
    assert_eq!(payload.kind, PayloadKind::Product);
    assert_eq!(
        payload.message,
        "The price for the product Matching your criteria is 0.45"
    );
    assert!(payload.link.is_none());
}

#[tokio::test]
async fn test_faq_miss_points_to_faq_section() {
    let oracle = ScriptedOracle::new(vec![Ok("FAQ")]);
    let executor = ScriptedExecutor::rows(vec![]);
    let engine = engine(oracle.clone(), executor.clone(), Arc::new(NoFaq));

    let payload = engine.answer("can you tell me about returns", None).await;

    assert_eq!(payload.kind, PayloadKind::Text);
    assert_eq!(payload.message, "I'm sorry, I don’t have that info right now.");
    assert_eq!(
        payload.link.as_deref(),
        Some("https://shop.example.com#faqSection")
    );
    assert_eq!(payload.has_answer, Some(false));
    assert_eq!(executor.call_count(), 0);
}

#[tokio::test]
async fn test_faq_answer_passes_through_with_empty_link() {
    let oracle = ScriptedOracle::new(vec![Ok("FAQ")]);
    let executor = ScriptedExecutor::rows(vec![]);
    let engine = engine(oracle, executor, Arc::new(FaqHit));

    let payload = engine.answer("can you tell me about delivery", None).await;

    assert_eq!(payload.kind, PayloadKind::Text);
    assert_eq!(payload.message, "Shipping takes 3-5 business days.");
    assert_eq!(payload.link.as_deref(), Some(""));
    assert_eq!(payload.has_answer, Some(true));
}

#[tokio::test]
async fn test_sql_error_yields_fixed_text_payload() {
    let oracle = ScriptedOracle::new(vec![
        Ok("Product"),
        Ok("SELECT broken FROM nowhere"),
    ]);
    let executor = ScriptedExecutor::failing();
    let engine = engine(oracle.clone(), executor.clone(), Arc::new(NoFaq));

    let payload = engine.answer("find red lanyards under 1 dollar", None).await;

    // No response-shaping call after an execution failure
    assert_eq!(oracle.call_count(), 2);
    assert_eq!(payload.kind, PayloadKind::Text);
    assert_eq!(
        payload.message,
        "Sorry, there was an error processing your query."
    );
}

#[tokio::test]
async fn test_no_recent_orders_message() {
    let oracle = ScriptedOracle::new(vec![
        Ok("Product"),
        Ok("SELECT o.id FROM \"order\" o WHERE o.customer_id = 777"),
    ]);
    let executor = ScriptedExecutor::rows(vec![]);
    let engine = engine(oracle, executor, Arc::new(NoFaq));

    let payload = engine.answer("what is my last order", Some("777")).await;

    assert_eq!(payload.kind, PayloadKind::Text);
    assert_eq!(payload.message, "Sorry, no recent orders found.");
}

#[tokio::test]
async fn test_statement_without_result_set_counts_as_no_results() {
    let oracle = ScriptedOracle::new(vec![Ok("Product"), Ok("SELECT 1")]);
    let executor = ScriptedExecutor::no_result_set();
    let engine = engine(oracle, executor, Arc::new(NoFaq));

    let payload = engine.answer("find red lanyards under 1 dollar", None).await;

    assert_eq!(payload.kind, PayloadKind::Text);
    assert_eq!(payload.message, "Sorry, no results found based on your query.");
}

#[tokio::test]
async fn test_empty_generated_sql_is_reported() {
    let oracle = ScriptedOracle::new(vec![Ok("Product"), Ok("```sql\n```")]);
    let executor = ScriptedExecutor::rows(vec![order_row()]);
    let engine = engine(oracle, executor.clone(), Arc::new(NoFaq));

    let payload = engine.answer("find red lanyards under 1 dollar", None).await;

    assert_eq!(executor.call_count(), 0);
    assert_eq!(payload.message, "Generated query was empty or invalid.");
}

#[tokio::test]
async fn test_classifier_failure_recovers_with_greeting() {
    let oracle = ScriptedOracle::new(vec![Err("connection reset")]);
    let executor = ScriptedExecutor::rows(vec![]);
    let engine = engine(oracle, executor.clone(), Arc::new(NoFaq));

    let payload = engine.answer("find red lanyards", None).await;

    assert_eq!(payload.message, "Hello! How can I assist you today?");
    assert_eq!(executor.call_count(), 0);
}

#[tokio::test]
async fn test_unrecognized_label_recovers_with_greeting() {
    let oracle = ScriptedOracle::new(vec![Ok("Weather")]);
    let executor = ScriptedExecutor::rows(vec![]);
    let engine = engine(oracle, executor, Arc::new(NoFaq));

    let payload = engine.answer("find red lanyards", None).await;

    assert_eq!(payload.kind, PayloadKind::Text);
    assert_eq!(payload.message, "Hello! How can I assist you today?");
}

#[tokio::test]
async fn test_oracle_failure_in_pipeline_points_to_catalog() {
    let oracle = ScriptedOracle::new(vec![Ok("Product"), Err("deadline exceeded")]);
    let executor = ScriptedExecutor::rows(vec![]);
    let engine = engine(oracle, executor, Arc::new(NoFaq));

    let payload = engine.answer("find red lanyards", None).await;

    assert_eq!(payload.kind, PayloadKind::Product);
    assert_eq!(
        payload.link.as_deref(),
        Some("https://shop.example.com/collections/no-sidebar")
    );
}

#[tokio::test]
async fn test_answer_is_deterministic_for_identical_scripts() {
    let mut payloads = Vec::new();
    for _ in 0..2 {
        let oracle = ScriptedOracle::new(vec![
            Ok("Product"),
            Ok("SELECT o.id FROM \"order\" o"),
            Ok("Your last order has shipped."),
        ]);
        let executor = ScriptedExecutor::rows(vec![order_row()]);
        let engine = engine(oracle, executor, Arc::new(NoFaq));
        payloads.push(engine.answer("what is my last order", Some("777")).await);
    }

    assert_eq!(payloads[0], payloads[1]);
}
