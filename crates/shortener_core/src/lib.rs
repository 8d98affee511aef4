//! Shortener core: pure state machine for the link list view.
mod effect;
mod feedback;
mod link;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use feedback::{Feedback, MessageId, StatusKind, StatusMessage};
pub use link::{FailureKind, LinkRecord};
pub use msg::Msg;
pub use state::{AppState, Consistency, Generation, ListRequestId};
pub use update::{texts, update, CONFIRM_DELETE_PROMPT};
pub use view_model::{AppViewModel, LinkRowView, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};
