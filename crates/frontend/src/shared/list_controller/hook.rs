use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use contracts::shared::pagination::Paginated;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::client_pager::paginate_locally;
use super::controller::{FetchOutcome, FetchTicket, ListController, ListQuery};
use super::filters::Filterable;
use crate::shared::error::AppError;
use crate::shared::list_utils::Searchable;
use crate::shared::notifications::use_notifications;

/// Reactive list state of one screen.
pub struct ListHandle<T: 'static> {
    pub state: RwSignal<ListController<T>>,
}

impl<T: 'static> Clone for ListHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListHandle<T> {}

/// Server-paginated list: `fetch` is called with the current query whenever
/// it changes or the list is invalidated.
pub fn use_list<T, F, Fut>(controller: ListController<T>, context: &'static str, fetch: F) -> ListHandle<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(ListQuery) -> Fut + 'static,
    Fut: Future<Output = Result<Paginated<T>, AppError>> + 'static,
{
    use_list_with(controller, context, move |ticket: &FetchTicket| fetch(ticket.query().clone()))
}

/// List over an endpoint that returns the whole collection as an array. The
/// array is fetched once and re-fetched on invalidation; searching, filtering
/// and paging happen locally.
pub fn use_local_list<T, F, Fut>(controller: ListController<T>, context: &'static str, fetch_all: F) -> ListHandle<T>
where
    T: Clone + Searchable + Filterable + Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<Vec<T>, AppError>> + 'static,
{
    let cache: Rc<RefCell<Option<Vec<T>>>> = Rc::default();
    let fetch_all = Rc::new(fetch_all);

    use_list_with(controller, context, move |ticket: &FetchTicket| {
        let cache = Rc::clone(&cache);
        let fetch_all = Rc::clone(&fetch_all);
        let query = ticket.query().clone();
        let cached = if ticket.is_refresh() {
            None
        } else {
            cache.borrow().clone()
        };
        async move {
            let all = match cached {
                Some(all) => all,
                None => {
                    let all = fetch_all().await?;
                    *cache.borrow_mut() = Some(all.clone());
                    all
                }
            };
            Ok::<_, AppError>(paginate_locally(&all, &query))
        }
    })
}

fn use_list_with<T, F, Fut>(controller: ListController<T>, context: &'static str, fetch: F) -> ListHandle<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(&FetchTicket) -> Fut + 'static,
    Fut: Future<Output = Result<Paginated<T>, AppError>> + 'static,
{
    let state = RwSignal::new(controller);
    let notifications = use_notifications();
    let fetch = Rc::new(fetch);

    // Only a query change or an invalidation alters the key; loading flags do not.
    let fetch_key = Memo::new(move |_| state.with(|s| s.fetch_key()));

    Effect::new(move |_| {
        fetch_key.track();
        let Some(ticket) = state.try_update(|s| s.begin_fetch()) else {
            return;
        };
        let request = fetch(&ticket);
        spawn_local(async move {
            let result = request.await;
            match state.try_update(|s| s.complete(ticket, result)) {
                Some(FetchOutcome::Failed(err)) => notifications.report(&err, context),
                Some(FetchOutcome::Applied { clamped: true, .. }) => {
                    log::debug!("{}: page past the end, moved to the last page", context);
                }
                _ => {}
            }
        });
    });

    ListHandle { state }
}

impl<T: Clone + Send + Sync + 'static> ListHandle<T> {
    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.items().to_vec())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn count(&self) -> u64 {
        self.state.with(|s| s.count())
    }

    pub fn set_page(&self, page: u32) {
        self.state.update(|s| {
            s.set_page(page);
        });
    }

    pub fn apply_search(&self, search: String) {
        self.state.update(|s| {
            s.apply_search(&search);
        });
    }

    pub fn set_filter(&self, name: &str, value: String) {
        self.state.update(|s| {
            s.set_filter(name, &value);
        });
    }

    pub fn filter_value(&self, name: &'static str) -> String {
        self.state.with(|s| s.query().filters.get(name).to_string())
    }

    pub fn set_page_size(&self, page_size: u32) {
        self.state.update(|s| {
            s.set_page_size(page_size);
        });
    }

    /// Refetches the current query; used after mutations and by the refresh button.
    pub fn invalidate(&self) {
        self.state.update(|s| s.invalidate());
    }

    /// Calls `apply` with the fresh items every time a page lands, with
    /// whether that page came from an invalidation.
    pub fn on_applied(&self, apply: impl Fn(&[T], bool) + 'static) {
        let state = self.state;
        let applied = Memo::new(move |_| state.with(|s| s.applied()));
        Effect::new(move |_| {
            if applied.get() == 0 {
                return;
            }
            state.with_untracked(|s| apply(s.items(), s.last_refreshed()));
        });
    }
}
