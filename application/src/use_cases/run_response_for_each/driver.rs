//! Conversation driver
//!
//! One task per participant. Feeds inbound text through the domain state
//! machine and performs the resulting effects: speaking goes straight to
//! the participant, everything else is reported to the coordinator.

use super::coordinator::CoordinatorEvent;
use crate::ports::contactable::Contactable;
use crate::ports::transcript_logger::{TranscriptEvent, TranscriptLogger};
use foreach_domain::session::response::current_timestamp;
use foreach_domain::{Conversation, ConversationEffect, Poll};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

pub(super) struct ConversationDriver {
    contactable: Arc<dyn Contactable>,
    poll: Arc<Poll>,
    conversation: Conversation,
    events: mpsc::UnboundedSender<CoordinatorEvent>,
    logger: Arc<dyn TranscriptLogger>,
}

impl ConversationDriver {
    pub(super) fn new(
        contactable: Arc<dyn Contactable>,
        poll: Arc<Poll>,
        events: mpsc::UnboundedSender<CoordinatorEvent>,
        logger: Arc<dyn TranscriptLogger>,
    ) -> Self {
        let conversation = Conversation::new(contactable.id());
        Self {
            contactable,
            poll,
            conversation,
            events,
            logger,
        }
    }

    /// Run until the participant's transport closes or the session completes
    pub(super) async fn run(mut self, cancel: CancellationToken) {
        let id = self.contactable.id().to_string();

        let mut inbox = match self.contactable.listen() {
            Ok(inbox) => inbox,
            Err(e) => {
                warn!("Cannot listen to participant {}: {}", id, e);
                return;
            }
        };

        let greeting = self.conversation.start(&self.poll);
        self.perform(greeting).await;

        loop {
            let text = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("Conversation with {} stopped by session completion", id);
                    break;
                }
                message = inbox.recv() => match message {
                    Some(text) => text,
                    None => {
                        debug!("Participant {} closed their connection", id);
                        break;
                    }
                },
            };

            trace!("Heard from {}: {:?}", id, text);
            self.logger.log(TranscriptEvent::hear(&id, &text));

            let effects = self
                .conversation
                .handle(&self.poll, &text, current_timestamp());
            self.perform(effects).await;
        }
    }

    /// Speak in order, then report to the coordinator
    ///
    /// Reports go out after speaking so a participant hears their own
    /// follow-up before any completion announcement it may cause.
    async fn perform(&self, effects: Vec<ConversationEffect>) {
        let id = self.contactable.id();
        let mut reports = Vec::new();

        for effect in effects {
            match effect {
                ConversationEffect::Speak(text) => self.speak(&text).await,
                ConversationEffect::Record(response) => {
                    debug!(
                        "Participant {} answered {:?} with {:?} ({}/{})",
                        id,
                        response.statement.text,
                        response.response,
                        self.conversation.progress(&self.poll),
                        self.poll.statements.len()
                    );
                    reports.push(CoordinatorEvent::Recorded(response));
                }
                ConversationEffect::Rejected(text) => {
                    debug!("Participant {} sent an invalid response", id);
                    reports.push(CoordinatorEvent::Rejected {
                        participant: id.to_string(),
                        text,
                    });
                }
                ConversationEffect::Finished => {
                    reports.push(CoordinatorEvent::Finished {
                        participant: id.to_string(),
                    });
                }
            }
        }

        for report in reports {
            // Receiver gone means the session already completed
            if self.events.send(report).is_err() {
                trace!("Session already complete; dropping report from {}", id);
            }
        }
    }

    async fn speak(&self, text: &str) {
        let id = self.contactable.id();
        self.logger.log(TranscriptEvent::speak(id, text));
        if let Err(e) = self.contactable.speak(text).await {
            warn!("Failed to speak to {}: {}", id, e);
        }
    }
}
