// Completion oracle abstraction
//
// The SQL generator, the response shapers, and the top-level classifier all
// talk to a text-completion service through this trait, allowing tests to
// substitute scripted stubs for the live Gemini API.

use anyhow::Result;
use async_trait::async_trait;

mod gemini;

pub use gemini::GeminiOracle;

/// Black-box text completion: fixed system instructions plus one human turn.
#[async_trait]
pub trait CompletionOracle: Send + Sync {
    async fn complete(&self, system: &str, human: &str) -> Result<String>;

    /// Oracle name for logging.
    fn name(&self) -> &str;
}

/// Strip markdown code-fence markers from a raw completion.
///
/// The oracle frequently wraps generated SQL in ```sql fences; removing the
/// markers is the router's responsibility, not the oracle's. Leading and
/// trailing whitespace is trimmed from the result.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```sql", "").replace("```", "").trim().to_string()
}
