// Curated phrase catalogs for fuzzy intent detection.
//
// These are tuning data, not code: entries are compared against the incoming
// message with `similarity::ratio` and a configurable threshold. Keep them
// short, lower-case, and representative of real customer phrasings.

/// Phrasings that indicate an order-history lookup.
pub const ORDER_PHRASES: &[&str] = &[
    "show me my recent order",
    "show me order",
    "show me the last order",
    "show me the first order",
    "show me the recent order",
    "show me my first order",
    "show my recent orders",
    "give me my latest order",
    "display my last order",
    "tell me about my last order",
    "show me recent orders",
    "show my orders",
    "what is my last order",
    "what i ordered last",
    "order price for",
    "price of the last order",
    "show me the details of my order with number",
    "show me the details of my order with id",
    "show me the order details of",
    "price of my last order",
    "what is the price of the last order",
    "price of my first order",
    "what is the price of the first order",
    "show me orders from last week.",
    "show me orders from this week.",
    "show me order status",
    "what is my order status",
    "what is the status of my last order",
    "what is the status of my order",
    "show the status of my order",
    "show the status of last order",
    "what's status of order",
];

/// Phrasings that indicate a price-chart lookup.
pub const PRICE_PHRASES: &[&str] = &[
    "calculate price for",
    "what is the price for",
    "what is the price of pone with attachment",
    "price of lanyard",
    "what is the price of nylon lanyard",
    "what's the price of nylon lanyard",
    "show me price for nylon lanyard",
    "show me price of nylon lanyard",
    "get me price for nylon lanyard",
    "get me price of nylon lanyard",
    "find price of nylon lanyard",
    "find price for nylon lanyard",
];
