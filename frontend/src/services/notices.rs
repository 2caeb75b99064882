//! Toast notices shared through the Leptos context.

use leptos::*;

use crate::{AppError, Notice, NoticeLevel, TOAST_DURATION};
use prepfoundry::Acknowledgment;

/// Handle to the list of visible toasts.
///
/// Provided once by [`crate::App`]; components fetch it with
/// [`NoticeBoard::use_board`].
#[derive(Clone, Copy)]
pub struct NoticeBoard {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl NoticeBoard {
    /// Create a board and put it in context.
    pub fn provide() -> Self {
        let board = Self::new();
        provide_context(board);
        board
    }

    fn new() -> Self {
        Self {
            notices: create_rw_signal(Vec::new()),
            next_id: store_value(1),
        }
    }

    pub fn use_board() -> Self {
        expect_context::<NoticeBoard>()
    }

    pub fn notices(&self) -> ReadSignal<Vec<Notice>> {
        self.notices.read_only()
    }

    /// Show a notice and schedule its dismissal.
    pub fn push(&self, notice: Notice) -> u64 {
        let id = self.insert(notice);

        let board = *self;
        spawn_local(async move {
            gloo_timers::future::sleep(TOAST_DURATION).await;
            board.dismiss(id);
        });
        id
    }

    /// Number the notice and append it to the visible list.
    fn insert(&self, mut notice: Notice) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        notice.id = id;

        match notice.level {
            NoticeLevel::Destructive => log::warn!("{}: {}", notice.title, notice.description),
            NoticeLevel::Info => log::info!("{}: {}", notice.title, notice.description),
        }
        self.notices.update(|list| list.push(notice));
        id
    }

    pub fn acknowledge(&self, ack: Acknowledgment) {
        self.push(Notice::from_ack(ack));
    }

    /// Show the user-facing notice for an error, or just log it.
    pub fn report(&self, err: &AppError) {
        match Notice::from_error(err) {
            Some(notice) => {
                self.push(notice);
            }
            None => log::warn!("{}", err),
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|list| list.retain(|n| n.id != id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prepfoundry::{RECOMMENDATIONS_COPIED, RESULTS_SHARED};

    fn titles(board: &NoticeBoard) -> Vec<String> {
        board
            .notices()
            .with_untracked(|list| list.iter().map(|n| n.title.clone()).collect())
    }

    #[test]
    fn test_ids_increase_from_one() {
        let runtime = create_runtime();
        let board = NoticeBoard::new();

        let first = board.insert(Notice::from_ack(RECOMMENDATIONS_COPIED));
        let second = board.insert(Notice::from_ack(RESULTS_SHARED));
        assert_eq!((first, second), (1, 2));

        let ids: Vec<u64> = board
            .notices()
            .with_untracked(|list| list.iter().map(|n| n.id).collect());
        assert_eq!(ids, vec![1, 2]);

        runtime.dispose();
    }

    #[test]
    fn test_dismiss_removes_only_that_notice() {
        let runtime = create_runtime();
        let board = NoticeBoard::new();

        let copied = board.insert(Notice::from_ack(RECOMMENDATIONS_COPIED));
        board.insert(Notice::from_ack(RESULTS_SHARED));

        board.dismiss(copied);
        assert_eq!(titles(&board), vec!["Share link generated!"]);

        board.dismiss(copied);
        assert_eq!(titles(&board).len(), 1);

        let next = board.insert(Notice::from_ack(RECOMMENDATIONS_COPIED));
        assert_eq!(next, 3);

        runtime.dispose();
    }
}
