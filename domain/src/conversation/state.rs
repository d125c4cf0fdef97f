//! Conversation state machine

use super::messages::{
    INVALID_RESPONSE_TEXT, MAX_RESPONSES_TEXT, options_text, prompt_text, rules_text,
};
use crate::poll::{Poll, is_valid};
use crate::session::Response;

/// Where one participant is in the statement list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationState {
    /// Not started; nothing has been said yet
    Greeting,
    /// Waiting for an answer to statement `k`
    AwaitingResponse(usize),
    /// Every statement answered (terminal for this participant)
    AllAnswered,
}

/// Side effect requested by the state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationEffect {
    /// Say this to the participant
    Speak(String),
    /// Append this response to the session results
    Record(Response),
    /// Text matched no option; progress unchanged
    Rejected(String),
    /// The participant just answered the last statement
    Finished,
}

/// One participant's walk through the statements
#[derive(Debug, Clone)]
pub struct Conversation {
    participant_id: String,
    state: ConversationState,
}

impl Conversation {
    pub fn new(participant_id: impl Into<String>) -> Self {
        Self {
            participant_id: participant_id.into(),
            state: ConversationState::Greeting,
        }
    }

    pub fn state(&self) -> ConversationState {
        self.state
    }

    /// Number of statements answered so far
    pub fn progress(&self, poll: &Poll) -> usize {
        match self.state {
            ConversationState::Greeting => 0,
            ConversationState::AwaitingResponse(k) => k,
            ConversationState::AllAnswered => poll.statements.len(),
        }
    }

    /// Leave `Greeting`: rules, options summary, then the first prompt
    ///
    /// With no statements there is nothing to prompt; the participant is
    /// told they are done instead. Calling this twice is a no-op.
    pub fn start(&mut self, poll: &Poll) -> Vec<ConversationEffect> {
        if self.state != ConversationState::Greeting {
            return Vec::new();
        }

        let mut effects = vec![
            ConversationEffect::Speak(rules_text(poll.max_time)),
            ConversationEffect::Speak(options_text(&poll.options)),
        ];
        effects.extend(self.advance_to(0, poll));
        effects
    }

    /// Apply one inbound message
    ///
    /// `now` is the capture time stamped on a recorded response. Messages
    /// arriving before [`start`](Self::start) are ignored.
    pub fn handle(&mut self, poll: &Poll, text: &str, now: u64) -> Vec<ConversationEffect> {
        match self.state {
            ConversationState::Greeting => Vec::new(),
            ConversationState::AllAnswered => {
                vec![ConversationEffect::Speak(MAX_RESPONSES_TEXT.to_string())]
            }
            ConversationState::AwaitingResponse(k) => {
                if is_valid(&poll.options, text).is_none() {
                    return vec![
                        ConversationEffect::Rejected(text.to_string()),
                        ConversationEffect::Speak(INVALID_RESPONSE_TEXT.to_string()),
                    ];
                }

                let response = Response::at(
                    poll.statements[k].clone(),
                    text,
                    self.participant_id.clone(),
                    now,
                );
                let mut effects = vec![ConversationEffect::Record(response)];
                effects.extend(self.advance_to(k + 1, poll));
                effects
            }
        }
    }

    fn advance_to(&mut self, next: usize, poll: &Poll) -> Vec<ConversationEffect> {
        if next >= poll.statements.len() {
            self.state = ConversationState::AllAnswered;
            vec![
                ConversationEffect::Speak(MAX_RESPONSES_TEXT.to_string()),
                ConversationEffect::Finished,
            ]
        } else {
            self.state = ConversationState::AwaitingResponse(next);
            vec![ConversationEffect::Speak(prompt_text(&poll.statements, next))]
        }
    }
}
