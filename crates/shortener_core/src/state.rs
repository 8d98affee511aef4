use crate::view_model::{AppViewModel, LinkRowView, SUBMIT_LABEL_BUSY, SUBMIT_LABEL_IDLE};
use crate::{Effect, Feedback, LinkRecord, StatusMessage};

/// Bumped on every mount and teardown. Outcomes tagged with an older value
/// belong to a view that no longer exists.
pub type Generation = u64;

/// Monotonic number of a list request within one generation.
pub type ListRequestId = u64;

/// Whether the local list matches the last authoritative server list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Consistency {
    #[default]
    Settled,
    /// An optimistic removal has been applied and no list has confirmed it yet.
    Tentative,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    active: bool,
    generation: Generation,
    links: Vec<LinkRecord>,
    consistency: Consistency,
    last_list_request: ListRequestId,
    last_applied_list: ListRequestId,
    input: String,
    submitting: bool,
    pending_delete: Option<String>,
    feedback: Feedback,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            rows: self
                .links
                .iter()
                .enumerate()
                .map(|(index, link)| LinkRowView {
                    number: index + 1,
                    id: link.id.clone(),
                    original_url: link.original_url.clone(),
                    short_url: link.short_url.clone(),
                    short_code: (!link.short_code.is_empty()).then(|| link.short_code.clone()),
                })
                .collect(),
            input: self.input.clone(),
            submit_enabled: !self.submitting,
            submit_label: if self.submitting {
                SUBMIT_LABEL_BUSY
            } else {
                SUBMIT_LABEL_IDLE
            },
            status: self.feedback.current().cloned(),
            confirm_prompt: self.pending_delete.is_some(),
            consistency: self.consistency,
        }
    }

    pub fn links(&self) -> &[LinkRecord] {
        &self.links
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.feedback.current()
    }

    pub fn consistency(&self) -> Consistency {
        self.consistency
    }

    pub fn generation(&self) -> Generation {
        self.generation
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    /// Returns whether a render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn activate(&mut self) {
        self.generation += 1;
        self.active = true;
        self.links.clear();
        self.consistency = Consistency::Settled;
        self.last_list_request = 0;
        self.last_applied_list = 0;
        self.input.clear();
        self.submitting = false;
        self.pending_delete = None;
        self.feedback.clear();
        self.mark_dirty();
    }

    pub(crate) fn tear_down(&mut self) {
        self.generation += 1;
        self.active = false;
        self.submitting = false;
        self.pending_delete = None;
    }

    /// True if an outcome issued under `generation` may still be applied.
    pub(crate) fn accepts(&self, generation: Generation) -> bool {
        self.active && self.generation == generation
    }

    pub(crate) fn begin_list(&mut self) -> Effect {
        self.last_list_request += 1;
        Effect::ListAll {
            generation: self.generation,
            request: self.last_list_request,
        }
    }

    /// Lists requested before a confirmed mutation can no longer apply.
    pub(crate) fn fence_older_lists(&mut self) {
        self.last_applied_list = self.last_list_request;
    }

    /// Authoritative replace. Returns false for a list at or below the fence.
    pub(crate) fn replace_links(&mut self, request: ListRequestId, links: Vec<LinkRecord>) -> bool {
        if request <= self.last_applied_list {
            return false;
        }
        self.last_applied_list = request;
        self.links = links;
        self.consistency = Consistency::Settled;
        self.mark_dirty();
        true
    }

    /// Tentative removal ahead of the reconciling list.
    pub(crate) fn remove_tentatively(&mut self, short_code: &str) {
        self.fence_older_lists();
        self.links.retain(|link| link.short_code != short_code);
        self.consistency = Consistency::Tentative;
        self.mark_dirty();
    }

    pub(crate) fn set_input(&mut self, input: String) {
        if self.input != input {
            self.input = input;
            self.mark_dirty();
        }
    }

    pub(crate) fn clear_input(&mut self) {
        self.set_input(String::new());
    }

    pub(crate) fn set_submitting(&mut self, submitting: bool) {
        if self.submitting != submitting {
            self.submitting = submitting;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_pending_delete(&mut self, short_code: Option<String>) {
        self.pending_delete = short_code;
        self.mark_dirty();
    }

    pub(crate) fn take_pending_delete(&mut self) -> Option<String> {
        let taken = self.pending_delete.take();
        if taken.is_some() {
            self.mark_dirty();
        }
        taken
    }

    pub(crate) fn feedback_mut(&mut self) -> &mut Feedback {
        self.mark_dirty();
        &mut self.feedback
    }

    pub(crate) fn expire_status(&mut self, id: crate::MessageId) {
        if self.feedback.expire(id) {
            self.mark_dirty();
        }
    }
}
