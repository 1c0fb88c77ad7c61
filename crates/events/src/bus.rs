//! Named-topic broker backed by a `tokio::sync::broadcast` channel.
//!
//! [`MessageBroker`] is shared via `Arc<MessageBroker>`. Every subscriber
//! sees every message; listeners filter by [`Message::topic`].

use chrono::{DateTime, Duration, Utc};
use tokio::sync::broadcast;

use crate::MessagingError;

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// An opaque string payload addressed to a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub topic: String,
    pub payload: String,
    /// When the message was published (UTC).
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(topic: impl Into<String>, payload: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            payload: payload.into(),
            timestamp: Utc::now(),
        }
    }

    /// Time elapsed since the message was published.
    pub fn age(&self) -> Duration {
        Utc::now() - self.timestamp
    }
}

// ---------------------------------------------------------------------------
// MessageBroker
// ---------------------------------------------------------------------------

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

pub struct MessageBroker {
    sender: broadcast::Sender<Message>,
}

impl MessageBroker {
    /// Create a broker with a specific channel capacity.
    ///
    /// When the buffer is full the oldest unread messages are dropped and
    /// slow receivers observe `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish a message, returning how many subscribers will see it.
    ///
    /// Unlike a fire-and-forget event bus, a send with zero subscribers is
    /// an error: the payload would be lost.
    pub fn publish(&self, message: Message) -> Result<usize, MessagingError> {
        self.sender.send(message).map_err(|_| MessagingError::Closed)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for MessageBroker {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
