mod drivers;
mod service;
mod traits;

pub use drivers::echo::EchoProcessor;
pub use drivers::identity::IdentityProcessor;
pub use service::CommentService;
pub use traits::ContentProcessor;

use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub enum ProcessorConfig {
    Echo { text: String },
    Identity,
}

pub fn build_processor(config: ProcessorConfig) -> Arc<dyn ContentProcessor> {
    match config {
        ProcessorConfig::Echo { text } => {
            info!("Initializing processor in ECHO mode...");
            Arc::new(EchoProcessor::new(text))
        }
        ProcessorConfig::Identity => {
            info!("Initializing processor in IDENTITY mode...");
            Arc::new(IdentityProcessor)
        }
    }
}
