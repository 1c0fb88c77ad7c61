//! Inbound side of the messaging adapter.
//!
//! A [`TopicListener`] owns a broker subscription and forwards each payload
//! on its topic, unchanged and once, to a [`MessageHandler`]. It runs until
//! cancelled or until the broker is dropped.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio_util::sync::CancellationToken;

use crate::bus::Message;

/// Receives payloads from a [`TopicListener`].
#[async_trait]
pub trait MessageHandler: Send + Sync {
    async fn process(&self, message: &str);
}

pub struct TopicListener {
    id: String,
    topic: String,
    handler: Arc<dyn MessageHandler>,
}

impl TopicListener {
    pub fn new(
        id: impl Into<String>,
        topic: impl Into<String>,
        handler: Arc<dyn MessageHandler>,
    ) -> Self {
        Self {
            id: id.into(),
            topic: topic.into(),
            handler,
        }
    }

    /// Forward messages from `receiver` until `cancel` fires or the channel
    /// closes.
    ///
    /// Intended to be spawned with `tokio::spawn`. A lagged receiver logs
    /// how many messages it skipped and keeps going.
    pub async fn run(self, mut receiver: broadcast::Receiver<Message>, cancel: CancellationToken) {
        tracing::info!(listener_id = %self.id, topic = %self.topic, "Topic listener started");

        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    tracing::info!(listener_id = %self.id, "Topic listener cancelled");
                    break;
                }
                received = receiver.recv() => match received {
                    Ok(message) => {
                        if message.topic == self.topic {
                            tracing::debug!(
                                listener_id = %self.id,
                                published_at = %message.timestamp,
                                delay_ms = message.age().num_milliseconds(),
                                "Forwarding message",
                            );
                            self.handler.process(&message.payload).await;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(listener_id = %self.id, skipped, "Topic listener lagged");
                    }
                    Err(RecvError::Closed) => {
                        tracing::info!(
                            listener_id = %self.id,
                            "Broker closed, topic listener stopping",
                        );
                        break;
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
