//! Filter and slice an unpaginated array into the same envelope the server
//! returns, for the few endpoints that send everything at once.

use super::controller::ListQuery;
use super::filters::Filterable;
use crate::shared::list_utils::Searchable;
use contracts::shared::pagination::{page_count, Paginated};

pub fn paginate_locally<T>(items: &[T], query: &ListQuery) -> Paginated<T>
where
    T: Clone + Searchable + Filterable,
{
    let search = query.search.trim();
    let matching: Vec<&T> = items
        .iter()
        .filter(|item| search.is_empty() || item.matches_filter(search))
        .filter(|item| query.filters.matches(*item))
        .collect();

    let page_size = query.page_size.max(1);
    let count = matching.len() as u64;
    let total_pages = page_count(count, page_size);
    let current_page = query.page.clamp(1, total_pages.max(1));
    let start = ((current_page - 1) * page_size) as usize;

    let results = matching
        .into_iter()
        .skip(start)
        .take(page_size as usize)
        .cloned()
        .collect();

    Paginated {
        count,
        next: (current_page < total_pages).then_some(current_page + 1),
        previous: (current_page > 1).then_some(current_page - 1),
        page_size,
        current_page,
        total_pages,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Config {
        platform: &'static str,
        active: bool,
    }

    impl Searchable for Config {
        fn matches_filter(&self, filter: &str) -> bool {
            self.platform.to_lowercase().contains(&filter.to_lowercase())
        }
    }

    impl Filterable for Config {
        fn field_value(&self, name: &str) -> Option<String> {
            match name {
                "is_active" => Some(self.active.to_string()),
                _ => None,
            }
        }
    }

    fn configs() -> Vec<Config> {
        ["1xBet", "Melbet", "Betwinner", "1win", "Linebet", "Paripulse", "888starz"]
            .iter()
            .enumerate()
            .map(|(i, platform)| Config {
                platform: *platform,
                active: i % 2 == 0,
            })
            .collect()
    }

    #[test]
    fn test_slices_pages() {
        let mut query = ListQuery::new(3);
        let page = paginate_locally(&configs(), &query);
        assert_eq!(page.count, 7);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.results.len(), 3);
        assert_eq!(page.next, Some(2));
        assert_eq!(page.previous, None);

        query.page = 3;
        let page = paginate_locally(&configs(), &query);
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.results[0].platform, "888starz");
        assert_eq!(page.next, None);
    }

    #[test]
    fn test_search_and_filters_combine() {
        let mut query = ListQuery::new(10);
        query.search = "BET".into();
        let page = paginate_locally(&configs(), &query);
        assert_eq!(page.count, 4);

        query.filters.set("is_active", "true");
        let page = paginate_locally(&configs(), &query);
        let names: Vec<_> = page.results.iter().map(|c| c.platform).collect();
        assert_eq!(names, vec!["1xBet", "Betwinner", "Linebet"]);
    }

    #[test]
    fn test_out_of_range_page_and_empty_input() {
        let mut query = ListQuery::new(5);
        query.page = 9;
        let page = paginate_locally(&configs(), &query);
        assert_eq!(page.current_page, 2);
        assert_eq!(page.results.len(), 2);

        let page = paginate_locally::<Config>(&[], &query);
        assert_eq!(page.count, 0);
        assert_eq!(page.total_pages, 0);
        assert!(page.results.is_empty());
    }
}
