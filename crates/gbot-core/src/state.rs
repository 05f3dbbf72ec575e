use std::{collections::HashMap, sync::Mutex};

use crate::domain::UserId;

/// Where a user is in the "suggest an article" flow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    AwaitingLink,
}

#[derive(Clone, Copy, Debug, Default)]
struct UserFlow {
    submission: SubmissionState,
    came_from_suggest: bool,
}

/// Per-user conversation state: the suggestion-flow state machine plus the
/// "re-render the menu on return" flag.
///
/// Mutation is not atomic across an update: two messages from the same user
/// racing through their handlers can interleave at await points. Accepted at
/// expected per-user message rates.
///
/// Known quirk, kept deliberately: nothing resets `AwaitingLink` when the
/// user abandons the flow with an unrelated command, so their next plain
/// text message is still read as a link attempt.
#[derive(Default)]
pub struct ConversationStore {
    inner: Mutex<HashMap<UserId, UserFlow>>,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submission(&self, user: UserId) -> SubmissionState {
        self.inner
            .lock()
            .expect("conversation store lock poisoned")
            .get(&user)
            .map(|f| f.submission)
            .unwrap_or_default()
    }

    /// Enter the suggestion flow: await a link and arm the return flag.
    pub fn begin_submission(&self, user: UserId) {
        let mut map = self.inner.lock().expect("conversation store lock poisoned");
        let flow = map.entry(user).or_default();
        flow.submission = SubmissionState::AwaitingLink;
        flow.came_from_suggest = true;
    }

    /// A valid link came in: back to idle. The return flag stays armed so
    /// the "return to menu" button on the confirmation re-renders the menu.
    pub fn complete_submission(&self, user: UserId) {
        let mut map = self.inner.lock().expect("conversation store lock poisoned");
        map.entry(user).or_default().submission = SubmissionState::Idle;
    }

    /// Read and clear the return flag.
    pub fn take_return_flag(&self, user: UserId) -> bool {
        let mut map = self.inner.lock().expect("conversation store lock poisoned");
        let Some(flow) = map.get_mut(&user) else {
            return false;
        };
        std::mem::take(&mut flow.came_from_suggest)
    }

    pub fn came_from_suggest(&self, user: UserId) -> bool {
        self.inner
            .lock()
            .expect("conversation store lock poisoned")
            .get(&user)
            .map(|f| f.came_from_suggest)
            .unwrap_or(false)
    }

    /// Users currently awaiting a link (for the debug report).
    pub fn awaiting_count(&self) -> usize {
        self.inner
            .lock()
            .expect("conversation store lock poisoned")
            .values()
            .filter(|f| f.submission == SubmissionState::AwaitingLink)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_start_idle_with_no_flag() {
        let store = ConversationStore::new();
        assert_eq!(store.submission(UserId(1)), SubmissionState::Idle);
        assert!(!store.came_from_suggest(UserId(1)));
    }

    #[test]
    fn begin_awaits_link_and_arms_the_flag() {
        let store = ConversationStore::new();
        store.begin_submission(UserId(1));
        assert_eq!(store.submission(UserId(1)), SubmissionState::AwaitingLink);
        assert!(store.came_from_suggest(UserId(1)));
        assert_eq!(store.awaiting_count(), 1);
    }

    #[test]
    fn complete_returns_to_idle_but_keeps_the_flag() {
        let store = ConversationStore::new();
        store.begin_submission(UserId(1));
        store.complete_submission(UserId(1));
        assert_eq!(store.submission(UserId(1)), SubmissionState::Idle);
        assert!(store.came_from_suggest(UserId(1)));
    }

    #[test]
    fn take_return_flag_reads_once() {
        let store = ConversationStore::new();
        store.begin_submission(UserId(1));
        assert!(store.take_return_flag(UserId(1)));
        assert!(!store.take_return_flag(UserId(1)));
    }

    #[test]
    fn users_are_tracked_independently() {
        let store = ConversationStore::new();
        store.begin_submission(UserId(1));
        assert_eq!(store.submission(UserId(2)), SubmissionState::Idle);
        assert!(!store.take_return_flag(UserId(2)));
        assert_eq!(store.awaiting_count(), 1);
    }
}
