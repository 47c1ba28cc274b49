// Configuration
// Settings structs and the TOML/environment loader

mod loader;
mod settings;

pub use loader::load_settings;
pub use settings::{GeminiSettings, ServerSettings, Settings};
