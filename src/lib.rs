// Strapline - storefront support chatbot routing engine
// Library exports

// Core modules
pub mod config;
pub mod db;
pub mod faq;
pub mod intent;
pub mod oracle;
pub mod payload;
pub mod prompts;
pub mod router;
pub mod server;
