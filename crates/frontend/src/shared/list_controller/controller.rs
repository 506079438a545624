use super::filters::FilterSet;
use super::page_window::{page_window, PageToken};
use contracts::shared::pagination::Paginated;

/// Everything that determines which page of a list is shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based
    pub page: u32,
    pub page_size: u32,
    pub search: String,
    pub filters: FilterSet,
}

impl ListQuery {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            search: String::new(),
            filters: FilterSet::new(),
        }
    }

    /// Query-string parameters understood by the paginated endpoints.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("page".to_string(), self.page.to_string()),
            ("page_size".to_string(), self.page_size.to_string()),
        ];
        let search = self.search.trim();
        if !search.is_empty() {
            params.push(("search".to_string(), search.to_string()));
        }
        params.extend(self.filters.to_params());
        params
    }
}

/// Issued by [`ListController::begin_fetch`]; hand it back with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    seq: u64,
    refresh: bool,
    query: ListQuery,
}

impl FetchTicket {
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// The fetch was triggered by an invalidation after a mutation.
    pub fn is_refresh(&self) -> bool {
        self.refresh
    }
}

#[derive(Debug, PartialEq)]
pub enum FetchOutcome<E> {
    /// The page replaced the visible data. `clamped` means the requested page
    /// was past the end and the query moved back to the last page.
    Applied { refreshed: bool, clamped: bool },
    /// A newer fetch was issued meanwhile; the result was dropped.
    Stale,
    /// The latest fetch failed; the previous data stays visible.
    Failed(E),
}

/// State of one paginated list screen: the query, the last good page and the
/// bookkeeping that lets only the latest request land.
#[derive(Debug, Clone)]
pub struct ListController<T> {
    query: ListQuery,
    data: Paginated<T>,
    loading: bool,
    failed: bool,
    issued: u64,
    revision: u64,
    refresh_pending: bool,
    applied: u64,
    last_refreshed: bool,
}

impl<T> ListController<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            query: ListQuery::new(page_size),
            data: Paginated::default(),
            loading: false,
            failed: false,
            issued: 0,
            revision: 0,
            refresh_pending: false,
            applied: 0,
            last_refreshed: false,
        }
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.query.filters = filters;
        self
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Changes whenever a new fetch is required: a query change or an invalidation.
    pub fn fetch_key(&self) -> (ListQuery, u64) {
        (self.query.clone(), self.revision)
    }

    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        if self.query.page == page {
            return false;
        }
        self.query.page = page;
        true
    }

    /// Applies a stabilized search string; any change returns to page 1.
    pub fn apply_search(&mut self, search: &str) -> bool {
        if self.query.search == search {
            return false;
        }
        self.query.search = search.to_string();
        self.query.page = 1;
        true
    }

    /// Any change returns to page 1.
    pub fn set_filter(&mut self, name: &str, value: &str) -> bool {
        if !self.query.filters.set(name, value) {
            return false;
        }
        self.query.page = 1;
        true
    }

    pub fn set_page_size(&mut self, page_size: u32) -> bool {
        let page_size = page_size.max(1);
        if self.query.page_size == page_size {
            return false;
        }
        self.query.page_size = page_size;
        self.query.page = 1;
        true
    }

    /// Marks the current data as outdated; the next fetch is a refresh.
    pub fn invalidate(&mut self) {
        self.revision += 1;
        self.refresh_pending = true;
    }

    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        self.loading = true;
        let refresh = std::mem::take(&mut self.refresh_pending);
        FetchTicket {
            seq: self.issued,
            refresh,
            query: self.query.clone(),
        }
    }

    pub fn complete<E>(&mut self, ticket: FetchTicket, result: Result<Paginated<T>, E>) -> FetchOutcome<E> {
        if ticket.seq != self.issued {
            return FetchOutcome::Stale;
        }
        self.loading = false;

        let page = match result {
            Ok(page) => page,
            Err(err) => {
                self.failed = true;
                return FetchOutcome::Failed(err);
            }
        };

        // An empty result still has a first page.
        let last_page = page.page_count(ticket.query.page_size).max(1);
        let clamped = ticket.query.page > last_page;
        if clamped {
            self.query.page = last_page;
        }

        self.failed = false;
        self.data = page;
        self.applied += 1;
        self.last_refreshed = ticket.refresh;
        FetchOutcome::Applied {
            refreshed: ticket.refresh,
            clamped,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.data.results
    }

    pub fn count(&self) -> u64 {
        self.data.count
    }

    pub fn total_pages(&self) -> u32 {
        self.data.page_count(self.query.page_size)
    }

    pub fn current_page(&self) -> u32 {
        self.query.page
    }

    pub fn page_window(&self) -> Vec<PageToken> {
        page_window(self.query.page, self.total_pages())
    }

    pub fn has_previous(&self) -> bool {
        self.query.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.query.page < self.total_pages()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn last_fetch_failed(&self) -> bool {
        self.failed
    }

    /// Number of pages applied so far.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// The last applied page came from an invalidation refetch.
    pub fn last_refreshed(&self) -> bool {
        self.last_refreshed
    }

    pub fn is_empty(&self) -> bool {
        self.data.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_recharge::aggregate::RechargeRequest;
    use contracts::shared::review::{ReviewDecision, ReviewStatus};

    fn page_of(ids: &[i64], count: u64) -> Paginated<i64> {
        Paginated {
            count,
            results: ids.to_vec(),
            ..Paginated::default()
        }
    }

    fn recharge(id: i64, status: ReviewStatus) -> RechargeRequest {
        RechargeRequest {
            id,
            user: 7,
            user_email: Some("awa@example.com".into()),
            user_name: None,
            amount: 5000.0,
            payment_method: Some("orange_money".into()),
            payment_reference: None,
            proof_image: None,
            status,
            admin_notes: None,
            created_at: "2025-03-01T10:00:00Z".into(),
            reviewed_at: None,
        }
    }

    #[test]
    fn test_params_include_only_restricting_filters() {
        let mut list: ListController<i64> = ListController::new(20);
        list.set_filter("status", "all");
        list.apply_search("  jean ");
        let params = list.query().to_params();
        assert_eq!(
            params,
            vec![
                ("page".to_string(), "1".to_string()),
                ("page_size".to_string(), "20".to_string()),
                ("search".to_string(), "jean".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut list: ListController<i64> = ListController::new(10);
        list.set_page(4);
        assert!(list.set_filter("status", "pending"));
        assert_eq!(list.current_page(), 1);

        list.set_page(3);
        assert!(!list.set_filter("status", "pending"));
        assert_eq!(list.current_page(), 3);
    }

    #[test]
    fn test_search_and_page_size_reset_page() {
        let mut list: ListController<i64> = ListController::new(10);
        list.set_page(5);
        assert!(list.apply_search("abc"));
        assert_eq!(list.current_page(), 1);

        list.set_page(2);
        assert!(list.set_page_size(50));
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut list: ListController<i64> = ListController::new(10);
        let first = list.begin_fetch();
        list.apply_search("x");
        let second = list.begin_fetch();

        let outcome = list.complete::<()>(second, Ok(page_of(&[2], 1)));
        assert_eq!(outcome, FetchOutcome::Applied { refreshed: false, clamped: false });

        let outcome = list.complete::<()>(first, Ok(page_of(&[1, 1, 1], 3)));
        assert_eq!(outcome, FetchOutcome::Stale);
        assert_eq!(list.items(), &[2]);
        assert_eq!(list.applied(), 1);
    }

    #[test]
    fn test_failure_keeps_last_good_data() {
        let mut list: ListController<i64> = ListController::new(10);
        let ticket = list.begin_fetch();
        list.complete::<()>(ticket, Ok(page_of(&[1, 2], 2)));

        let ticket = list.begin_fetch();
        assert!(list.is_loading());
        let outcome = list.complete(ticket, Err("boom"));
        assert_eq!(outcome, FetchOutcome::Failed("boom"));
        assert!(!list.is_loading());
        assert!(list.last_fetch_failed());
        assert_eq!(list.items(), &[1, 2]);
    }

    #[test]
    fn test_page_past_the_end_is_clamped() {
        let mut list: ListController<i64> = ListController::new(10);
        list.set_page(4);
        let ticket = list.begin_fetch();
        let outcome = list.complete::<()>(ticket, Ok(page_of(&[], 25)));
        assert_eq!(outcome, FetchOutcome::Applied { refreshed: false, clamped: true });
        assert_eq!(list.current_page(), 3);
        assert_eq!(list.total_pages(), 3);
        assert!(!list.has_next());
    }

    #[test]
    fn test_empty_result_returns_to_first_page() {
        let mut list: ListController<i64> = ListController::new(10);
        list.set_page(4);
        let key = list.fetch_key();
        let ticket = list.begin_fetch();
        let outcome = list.complete::<()>(ticket, Ok(page_of(&[], 0)));
        assert_eq!(outcome, FetchOutcome::Applied { refreshed: false, clamped: true });
        assert_eq!(list.current_page(), 1);
        assert!(!list.has_previous());
        assert!(!list.has_next());
        assert_ne!(list.fetch_key(), key);

        // The refetch of page 1 is empty too and settles.
        let ticket = list.begin_fetch();
        let outcome = list.complete::<()>(ticket, Ok(page_of(&[], 0)));
        assert_eq!(outcome, FetchOutcome::Applied { refreshed: false, clamped: false });
        assert_eq!(list.current_page(), 1);
    }

    #[test]
    fn test_invalidate_changes_fetch_key_and_flags_refresh() {
        let mut list: ListController<i64> = ListController::new(10);
        let key = list.fetch_key();
        list.invalidate();
        assert_ne!(list.fetch_key(), key);

        let ticket = list.begin_fetch();
        assert!(ticket.is_refresh());
        list.complete::<()>(ticket, Ok(page_of(&[1], 1)));
        assert!(list.last_refreshed());

        let ticket = list.begin_fetch();
        assert!(!ticket.is_refresh());
    }

    #[test]
    fn test_refetch_after_approve_clears_action_required() {
        let mut list: ListController<RechargeRequest> = ListController::new(10);
        let ticket = list.begin_fetch();
        list.complete::<()>(
            ticket,
            Ok(Paginated {
                count: 2,
                results: vec![recharge(1, ReviewStatus::Pending), recharge(2, ReviewStatus::Pending)],
                ..Paginated::default()
            }),
        );
        assert!(list.items().iter().all(|r| r.status.requires_action()));

        list.invalidate();
        let ticket = list.begin_fetch();
        let approved = ReviewDecision::Approve.resulting_status();
        list.complete::<()>(
            ticket,
            Ok(Paginated {
                count: 2,
                results: vec![recharge(1, approved), recharge(2, ReviewStatus::Pending)],
                ..Paginated::default()
            }),
        );
        let first = list.items().iter().find(|r| r.id == 1).unwrap();
        assert!(!first.status.requires_action());
    }

    #[test]
    fn test_page_window_follows_query() {
        let mut list: ListController<i64> = ListController::new(10);
        list.set_page(5);
        let ticket = list.begin_fetch();
        list.complete::<()>(ticket, Ok(page_of(&[1], 100)));
        assert_eq!(list.page_window().len(), 7);
        assert!(list.has_previous());
        assert!(list.has_next());
    }
}
