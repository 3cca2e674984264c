pub mod analysis;
pub mod api;
pub mod llm;
pub mod logging;
pub mod prompts;
pub mod render;

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_LLM_REQUEST: &str = "llm_request";
