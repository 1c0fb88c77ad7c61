//! Handler registered for the score topic.

use async_trait::async_trait;

use crate::listener::MessageHandler;

/// Receives score messages. Processing is currently limited to logging.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreMessageConsumer;

#[async_trait]
impl MessageHandler for ScoreMessageConsumer {
    async fn process(&self, message: &str) {
        tracing::info!(payload = message, "Score message received");
    }
}
