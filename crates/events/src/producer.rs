//! Outbound side of the messaging adapter.

use std::sync::Arc;

use crate::bus::{Message, MessageBroker};
use crate::MessagingError;

/// Sends string payloads to a topic on a shared [`MessageBroker`].
#[derive(Clone)]
pub struct MessageProducer {
    broker: Arc<MessageBroker>,
}

impl MessageProducer {
    pub fn new(broker: Arc<MessageBroker>) -> Self {
        Self { broker }
    }

    /// Publish `payload` unchanged on `topic`.
    pub fn send(&self, topic: &str, payload: impl Into<String>) -> Result<(), MessagingError> {
        if topic.trim().is_empty() {
            return Err(MessagingError::EmptyTopic);
        }

        let delivered = self.broker.publish(Message::new(topic, payload))?;
        tracing::debug!(topic, subscribers = delivered, "Message published");
        Ok(())
    }
}
