use std::time::Duration;

use crate::Effect;

pub type MessageId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: MessageId,
    pub text: String,
    pub kind: StatusKind,
}

/// Single-slot mailbox for the transient status line.
///
/// Every posted message gets a fresh id. An expiry only clears the slot
/// when it names the message currently shown, so a timer left over from
/// an earlier message never wipes a newer one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    current: Option<StatusMessage>,
    last_id: MessageId,
}

impl Feedback {
    pub fn current(&self) -> Option<&StatusMessage> {
        self.current.as_ref()
    }

    /// Replaces whatever is shown and returns the expiry to schedule.
    pub fn post(&mut self, text: impl Into<String>, kind: StatusKind, lifetime: Duration) -> Effect {
        self.last_id += 1;
        let id = self.last_id;
        self.current = Some(StatusMessage {
            id,
            text: text.into(),
            kind,
        });
        Effect::ScheduleStatusExpiry {
            id,
            after: lifetime,
        }
    }

    /// Returns true if the slot was cleared.
    pub fn expire(&mut self, id: MessageId) -> bool {
        match &self.current {
            Some(message) if message.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    /// Clears the slot immediately. Pending expiries become stale.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }
}
