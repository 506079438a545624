//! Selected item and its detail panel.
//!
//! Secondary fetches started for a selection carry a [`SelectionTicket`];
//! results arriving after the panel closed or moved to another item are
//! dropped.

use std::future::Future;

use contracts::shared::Identified;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::error::AppError;
use crate::shared::notifications::{use_notifications, Notifications};

/// Result slot of one secondary fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailSlot<V> {
    #[default]
    Idle,
    Loading,
    Ready(V),
    Failed(String),
}

impl<V> DetailSlot<V> {
    pub fn ready(&self) -> Option<&V> {
        match self {
            DetailSlot::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailSlot::Loading)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionTicket {
    generation: u64,
    id: i64,
}

impl SelectionTicket {
    pub fn id(&self) -> i64 {
        self.id
    }
}

/// `T` is the list item, `D` the secondary state derived from it.
#[derive(Debug, Clone)]
pub struct SelectionController<T, D> {
    selected: Option<T>,
    detail: D,
    generation: u64,
}

impl<T, D: Default> Default for SelectionController<T, D> {
    fn default() -> Self {
        Self {
            selected: None,
            detail: D::default(),
            generation: 0,
        }
    }
}

impl<T: Identified + Clone, D: Default> SelectionController<T, D> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the panel on `item` and resets all derived state.
    pub fn select(&mut self, item: T) -> SelectionTicket {
        self.generation += 1;
        let id = item.record_id();
        self.selected = Some(item);
        self.detail = D::default();
        SelectionTicket {
            generation: self.generation,
            id,
        }
    }

    pub fn close(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.detail = D::default();
    }

    /// Ticket for a new secondary fetch on the open selection, e.g. to
    /// reload one slot after a mutation.
    pub fn current_ticket(&self) -> Option<SelectionTicket> {
        self.selected.as_ref().map(|item| SelectionTicket {
            generation: self.generation,
            id: item.record_id(),
        })
    }

    pub fn is_current(&self, ticket: SelectionTicket) -> bool {
        ticket.generation == self.generation
            && self
                .selected
                .as_ref()
                .is_some_and(|s| s.record_id() == ticket.id)
    }

    /// Applies `update` to the detail state only when `ticket` still
    /// describes the open selection.
    pub fn accept(&mut self, ticket: SelectionTicket, update: impl FnOnce(&mut D)) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        update(&mut self.detail);
        true
    }

    /// Provisional local change after a successful mutation; the next list
    /// refetch overwrites it.
    pub fn patch(&mut self, update: impl FnOnce(&mut T)) {
        if let Some(item) = self.selected.as_mut() {
            update(item);
        }
    }

    /// Syncs the selection with freshly applied list data. The selection takes
    /// the server's version of the item; after an invalidation refetch an item
    /// that left the list closes the panel.
    pub fn reconcile(&mut self, items: &[T], refreshed: bool) {
        let Some(id) = self.selected.as_ref().map(Identified::record_id) else {
            return;
        };
        match items.iter().find(|item| item.record_id() == id) {
            Some(fresh) => self.selected = Some(fresh.clone()),
            None if refreshed => self.close(),
            None => {}
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn selected_id(&self) -> Option<i64> {
        self.selected.as_ref().map(Identified::record_id)
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn detail(&self) -> &D {
        &self.detail
    }
}

/// Reactive selection for a screen.
pub struct SelectionHandle<T: 'static, D: 'static> {
    pub state: RwSignal<SelectionController<T, D>>,
    notifications: Notifications,
}

impl<T: 'static, D: 'static> Clone for SelectionHandle<T, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static, D: 'static> Copy for SelectionHandle<T, D> {}

pub fn use_selection<T, D>() -> SelectionHandle<T, D>
where
    T: Identified + Clone + Send + Sync + 'static,
    D: Default + Send + Sync + 'static,
{
    SelectionHandle {
        state: RwSignal::new(SelectionController::new()),
        notifications: use_notifications(),
    }
}

impl<T, D> SelectionHandle<T, D>
where
    T: Identified + Clone + Send + Sync + 'static,
    D: Default + Send + Sync + 'static,
{
    pub fn select(&self, item: T) -> SelectionTicket {
        self.state
            .try_update(|s| s.select(item))
            .unwrap_or(SelectionTicket { generation: 0, id: 0 })
    }

    pub fn close(&self) {
        self.state.update(|s| s.close());
    }

    pub fn patch(&self, update: impl FnOnce(&mut T)) {
        self.state.update(|s| s.patch(update));
    }

    pub fn reconcile(&self, items: &[T], refreshed: bool) {
        self.state.update(|s| s.reconcile(items, refreshed));
    }

    pub fn selected(&self) -> Option<T> {
        self.state.with(|s| s.selected().cloned())
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    pub fn current_ticket(&self) -> Option<SelectionTicket> {
        self.state.with_untracked(|s| s.current_ticket())
    }

    /// Runs one secondary fetch into the slot chosen by `slot`.
    pub fn load<V, Fut>(
        &self,
        ticket: SelectionTicket,
        slot: fn(&mut D) -> &mut DetailSlot<V>,
        context: &'static str,
        fetch: Fut,
    ) where
        V: 'static,
        Fut: Future<Output = Result<V, AppError>> + 'static,
    {
        self.state.update(|s| {
            s.accept(ticket, |d| *slot(d) = DetailSlot::Loading);
        });
        let state = self.state;
        let notifications = self.notifications;
        spawn_local(async move {
            let result = fetch.await;
            let _ = state.try_update(|s| match result {
                Ok(value) => {
                    s.accept(ticket, |d| *slot(d) = DetailSlot::Ready(value));
                }
                Err(err) => {
                    let message = err.user_message();
                    if s.accept(ticket, |d| *slot(d) = DetailSlot::Failed(message)) {
                        notifications.report(&err, context);
                    }
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        active: bool,
    }

    impl Identified for Item {
        fn record_id(&self) -> i64 {
            self.id
        }
    }

    #[derive(Debug, Default)]
    struct Detail {
        wallet: DetailSlot<u32>,
        history: DetailSlot<Vec<u32>>,
    }

    fn item(id: i64) -> Item {
        Item { id, active: true }
    }

    #[test]
    fn test_results_for_previous_selection_are_dropped() {
        let mut selection: SelectionController<Item, Detail> = SelectionController::new();
        let first = selection.select(item(1));
        let second = selection.select(item(2));

        assert!(!selection.accept(first, |d| d.wallet = DetailSlot::Ready(100)));
        assert!(selection.accept(second, |d| d.wallet = DetailSlot::Ready(200)));
        assert_eq!(selection.detail().wallet, DetailSlot::Ready(200));
    }

    #[test]
    fn test_reselecting_same_item_invalidates_old_ticket() {
        let mut selection: SelectionController<Item, Detail> = SelectionController::new();
        let old = selection.select(item(1));
        let _ = selection.select(item(1));
        assert!(!selection.is_current(old));
    }

    #[test]
    fn test_parallel_slots_are_isolated() {
        let mut selection: SelectionController<Item, Detail> = SelectionController::new();
        let ticket = selection.select(item(5));
        selection.accept(ticket, |d| d.wallet = DetailSlot::Loading);
        selection.accept(ticket, |d| d.history = DetailSlot::Failed("boom".into()));
        selection.accept(ticket, |d| d.wallet = DetailSlot::Ready(10));

        assert_eq!(selection.detail().wallet.ready(), Some(&10));
        assert_eq!(selection.detail().history, DetailSlot::Failed("boom".into()));
    }

    #[test]
    fn test_close_clears_everything() {
        let mut selection: SelectionController<Item, Detail> = SelectionController::new();
        let ticket = selection.select(item(3));
        selection.accept(ticket, |d| d.wallet = DetailSlot::Ready(1));
        selection.close();

        assert!(!selection.is_open());
        assert_eq!(selection.detail().wallet, DetailSlot::Idle);
        assert!(!selection.accept(ticket, |d| d.wallet = DetailSlot::Ready(2)));
    }

    #[test]
    fn test_refetch_overwrites_provisional_patch() {
        let mut selection: SelectionController<Item, Detail> = SelectionController::new();
        selection.select(item(4));
        selection.patch(|i| i.active = false);
        assert!(!selection.selected().unwrap().active);

        selection.reconcile(&[item(4)], true);
        assert!(selection.selected().unwrap().active);
    }

    #[test]
    fn test_item_gone_after_invalidation_closes_panel() {
        let mut selection: SelectionController<Item, Detail> = SelectionController::new();
        selection.select(item(9));

        selection.reconcile(&[item(1), item(2)], false);
        assert!(selection.is_open());

        selection.reconcile(&[item(1), item(2)], true);
        assert!(!selection.is_open());
    }

    #[test]
    fn test_current_ticket_survives_reconcile_but_not_close() {
        let mut selection: SelectionController<Item, Detail> = SelectionController::new();
        assert!(selection.current_ticket().is_none());

        let opened = selection.select(item(6));
        selection.reconcile(&[item(6)], true);
        let reload = selection.current_ticket().unwrap();
        assert_eq!(reload, opened);
        assert!(selection.accept(reload, |d| d.history = DetailSlot::Ready(vec![1])));

        selection.close();
        assert!(selection.current_ticket().is_none());
        assert!(!selection.is_current(reload));
    }
}
