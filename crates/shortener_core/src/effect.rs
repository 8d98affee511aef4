use std::time::Duration;

use crate::{Generation, ListRequestId, MessageId};

/// Work the host must perform on behalf of the state machine.
///
/// Gateway effects carry the generation they were issued under; the host
/// echoes it back in the matching outcome message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ListAll {
        generation: Generation,
        request: ListRequestId,
    },
    Create {
        generation: Generation,
        original_url: String,
    },
    Delete {
        generation: Generation,
        short_code: String,
    },
    CopyToClipboard { text: String },
    ScheduleStatusExpiry { id: MessageId, after: Duration },
}
