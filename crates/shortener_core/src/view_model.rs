use crate::{Consistency, StatusMessage};

pub const SUBMIT_LABEL_IDLE: &str = "Shorten";
pub const SUBMIT_LABEL_BUSY: &str = "Shortening...";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub rows: Vec<LinkRowView>,
    pub input: String,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub status: Option<StatusMessage>,
    /// A delete is waiting for the user's yes/no answer.
    pub confirm_prompt: bool,
    pub consistency: Consistency,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRowView {
    /// 1-based display position.
    pub number: usize,
    pub id: String,
    pub original_url: String,
    pub short_url: String,
    pub short_code: Option<String>,
}
