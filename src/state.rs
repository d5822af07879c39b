use anyhow::Result;
use std::sync::Arc;

use crate::config::Config;
use crate::translator::{OllamaClient, Translator};

#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let backend = Arc::new(OllamaClient::new(config.generate_url())?);
        let translator = Arc::new(Translator::new(backend, config.default_model.clone()));

        Ok(Self { translator })
    }
}
