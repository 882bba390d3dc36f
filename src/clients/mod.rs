pub mod llm_client;
pub mod parse_client;

pub use llm_client::LlmClient;
pub use parse_client::ParseClient;
