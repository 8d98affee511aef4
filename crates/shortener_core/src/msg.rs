use crate::{FailureKind, Generation, LinkRecord, ListRequestId, MessageId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The view was mounted; start from an empty list and load.
    Activated,
    /// The view is going away; later outcomes must be dropped.
    TornDown,
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input for shortening.
    SubmitClicked,
    /// User clicked Copy on a row.
    CopyClicked { short_url: String },
    /// User clicked Delete on a row. The code may be missing.
    DeleteClicked { short_code: Option<String> },
    /// User accepted the pending delete prompt.
    DeleteConfirmed,
    /// User declined the pending delete prompt.
    DeleteCancelled,
    /// Gateway outcome for a list request.
    ListLoaded {
        generation: Generation,
        request: ListRequestId,
        result: Result<Vec<LinkRecord>, FailureKind>,
    },
    /// Gateway outcome for a create request.
    CreateFinished {
        generation: Generation,
        result: Result<(), FailureKind>,
    },
    /// Gateway outcome for a delete request.
    DeleteFinished {
        generation: Generation,
        short_code: String,
        result: Result<(), FailureKind>,
    },
    /// A status message reached the end of its lifetime.
    StatusExpired { id: MessageId },
}
