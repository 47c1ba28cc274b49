// Prompt template catalog
//
// Every instruction body lives in src/prompts/text/ as a versioned text
// resource. The completion oracle is extremely sensitive to drift in the
// schema descriptions, so the bodies are never assembled programmatically:
// routing code only appends the live human turn. Edit the .txt files, not
// code, when prompt content changes.

/// Top-level message classification (closed label set FAQ/Product/Greeting).
pub const CLASSIFY_MESSAGE: &str = include_str!("text/classify_message.txt");

/// SQL generation: generic product filter over product/product_images/image.
pub const SQL_PRODUCT: &str = include_str!("text/sql_product.txt");

/// SQL generation: customer order lookup across the order tables.
pub const SQL_ORDER: &str = include_str!("text/sql_order.txt");

/// SQL generation: price-chart lookup for a product.
pub const SQL_PRICE: &str = include_str!("text/sql_price.txt");

/// SQL generation: exact price row by width/attachment/nearest quantity.
pub const SQL_PRICE_QUANTITY: &str = include_str!("text/sql_price_quantity.txt");

/// Response shaping for the order path (second oracle call).
pub const RESPOND_ORDER: &str = include_str!("text/respond_order.txt");

/// Response shaping for the generic product path.
pub const RESPOND_PRODUCT: &str = include_str!("text/respond_product.txt");

/// Response shaping for the price path.
pub const RESPOND_PRICE: &str = include_str!("text/respond_price.txt");
