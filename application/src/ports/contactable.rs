//! Contactable port
//!
//! A contactable is one participant's bidirectional messaging endpoint.
//! The session speaks to it and listens to whatever the participant sends
//! back. Transports (terminal, chat services, scripted replies) live in
//! the infrastructure layer.

use async_trait::async_trait;
use foreach_domain::DomainError;
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors raised by contactable endpoints
#[derive(Error, Debug)]
pub enum ContactableError {
    #[error("Contactable {0} is already being listened to")]
    AlreadyListening(String),

    #[error("Contactable {0} is closed")]
    Closed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid participant configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Stream of inbound messages from one participant, in arrival order
pub struct Inbox {
    receiver: mpsc::UnboundedReceiver<String>,
}

impl Inbox {
    pub fn new(receiver: mpsc::UnboundedReceiver<String>) -> Self {
        Self { receiver }
    }

    /// Create a connected sender/inbox pair
    pub fn channel() -> (mpsc::UnboundedSender<String>, Inbox) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Inbox::new(rx))
    }

    /// Next message, or `None` once the participant's transport is gone
    pub async fn recv(&mut self) -> Option<String> {
        self.receiver.recv().await
    }
}

/// One participant's messaging endpoint
///
/// # Contract
///
/// - `speak` sends only to this participant.
/// - `listen` hands out the inbound stream once; later calls fail with
///   [`ContactableError::AlreadyListening`].
#[async_trait]
pub trait Contactable: Send + Sync {
    /// Participant id, stamped on every recorded response
    fn id(&self) -> &str;

    /// Send a message to the participant
    async fn speak(&self, text: &str) -> Result<(), ContactableError>;

    /// Take the stream of messages the participant sends
    fn listen(&self) -> Result<Inbox, ContactableError>;
}
