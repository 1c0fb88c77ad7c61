//! In-process messaging for the scoreboard service.
//!
//! - [`MessageBroker`] — named-topic publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`MessageProducer`] — sends string payloads to a topic.
//! - [`TopicListener`] — background task forwarding one topic's payloads to
//!   a [`MessageHandler`].
//! - [`ScoreMessageConsumer`] — the handler registered for score messages.

pub mod bus;
pub mod consumer;
pub mod listener;
pub mod producer;

pub use bus::{Message, MessageBroker};
pub use consumer::ScoreMessageConsumer;
pub use listener::{MessageHandler, TopicListener};
pub use producer::MessageProducer;

/// Default topic carrying score messages.
pub const DEFAULT_TOPIC: &str = "score-topic";

#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    #[error("No listener is subscribed to the broker")]
    Closed,

    #[error("Topic name must not be empty")]
    EmptyTopic,
}
