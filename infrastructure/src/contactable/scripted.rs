//! Scripted contactable
//!
//! Sends a fixed list of replies, in order, once listened to. Everything
//! spoken to it is only logged.

use async_trait::async_trait;
use foreach_application::{Contactable, ContactableError, Inbox};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::debug;

pub struct ScriptedContactable {
    id: String,
    replies: Vec<String>,
    reply_delay: Duration,
    listening: AtomicBool,
}

impl ScriptedContactable {
    pub fn new(id: impl Into<String>, replies: Vec<String>) -> Self {
        Self {
            id: id.into(),
            replies,
            reply_delay: Duration::ZERO,
            listening: AtomicBool::new(false),
        }
    }

    pub fn with_reply_delay(mut self, delay: Duration) -> Self {
        self.reply_delay = delay;
        self
    }
}

#[async_trait]
impl Contactable for ScriptedContactable {
    fn id(&self) -> &str {
        &self.id
    }

    async fn speak(&self, text: &str) -> Result<(), ContactableError> {
        debug!("[{}] <- {}", self.id, text);
        Ok(())
    }

    /// Must be called within a tokio runtime; replies are fed from a task
    fn listen(&self) -> Result<Inbox, ContactableError> {
        if self.listening.swap(true, Ordering::SeqCst) {
            return Err(ContactableError::AlreadyListening(self.id.clone()));
        }

        let (sender, inbox) = Inbox::channel();
        let replies = self.replies.clone();
        let delay = self.reply_delay;
        let id = self.id.clone();

        tokio::spawn(async move {
            for reply in replies {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                debug!("[{}] -> {}", id, reply);
                if sender.send(reply).is_err() {
                    break;
                }
            }
            debug!("Script for {} finished", id);
        });

        Ok(inbox)
    }
}
