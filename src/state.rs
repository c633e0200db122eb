use std::sync::Arc;

use crate::config::Config;
use crate::llm::{CompletionInterface, OpenAICompatibleClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub llm: Arc<dyn CompletionInterface>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let llm: Arc<dyn CompletionInterface> =
            Arc::new(OpenAICompatibleClient::new(&config.llm)?);

        Ok(Self { config, llm })
    }
}
