use serde::{Deserialize, Deserializer, Serialize};

/// Pagination envelope returned by every list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub count: u64,
    /// Next page number. Some endpoints still send the full URL, the page
    /// number is extracted from its `page` parameter.
    #[serde(default, deserialize_with = "de_page_ref")]
    pub next: Option<u32>,
    #[serde(default, deserialize_with = "de_page_ref")]
    pub previous: Option<u32>,
    #[serde(default)]
    pub page_size: u32,
    #[serde(default)]
    pub current_page: u32,
    #[serde(default)]
    pub total_pages: u32,
    pub results: Vec<T>,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            count: 0,
            next: None,
            previous: None,
            page_size: 0,
            current_page: 1,
            total_pages: 0,
            results: Vec::new(),
        }
    }
}

impl<T> Paginated<T> {
    /// Page size to use for page arithmetic; the requested size wins when the
    /// server left the field out.
    pub fn effective_page_size(&self, requested: u32) -> u32 {
        if self.page_size > 0 {
            self.page_size
        } else {
            requested.max(1)
        }
    }

    /// Number of pages, computed from `count` so it stays consistent even when
    /// the server omits `total_pages`.
    pub fn page_count(&self, requested_page_size: u32) -> u32 {
        page_count(self.count, self.effective_page_size(requested_page_size))
    }
}

/// `ceil(count / page_size)`; zero items means zero pages.
pub fn page_count(count: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let size = page_size as u64;
    ((count + size - 1) / size).min(u32::MAX as u64) as u32
}

/// Body of the nested collections (`users/{id}/transactions/`, ...), which
/// come either as a pagination envelope or as a bare array.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Page(Paginated<T>),
    Items(Vec<T>),
}

impl<T> ListPayload<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListPayload::Page(page) => page.results,
            ListPayload::Items(items) => items,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PageRef {
    Number(u32),
    Url(String),
}

fn de_page_ref<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<PageRef> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => None,
        Some(PageRef::Number(n)) => Some(n),
        // A URL without `page=` is the first page in DRF's page-number pagination.
        Some(PageRef::Url(url)) => Some(page_param(&url).unwrap_or(1)),
    })
}

fn page_param(url: &str) -> Option<u32> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_decode_full_envelope() {
        let json = r#"{
            "count": 23,
            "next": 3,
            "previous": 1,
            "page_size": 10,
            "current_page": 2,
            "total_pages": 3,
            "results": [1, 2, 3]
        }"#;
        let page: Paginated<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 23);
        assert_eq!(page.next, Some(3));
        assert_eq!(page.previous, Some(1));
        assert_eq!(page.page_count(50), 3);
        assert_eq!(page.results, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_url_links_and_missing_fields() {
        let json = r#"{
            "count": 45,
            "next": "https://api.example.com/api/items/?page=3&search=abc",
            "previous": "https://api.example.com/api/items/?search=abc",
            "results": []
        }"#;
        let page: Paginated<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.next, Some(3));
        assert_eq!(page.previous, Some(1));
        assert_eq!(page.page_size, 0);
        assert_eq!(page.effective_page_size(20), 20);
        assert_eq!(page.page_count(20), 3);
    }

    #[test]
    fn test_decode_null_links() {
        let json = r#"{"count": 0, "next": null, "previous": null, "results": []}"#;
        let page: Paginated<i32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.next, None);
        assert_eq!(page.previous, None);
        assert_eq!(page.page_count(10), 0);
    }

    #[test]
    fn test_list_payload_accepts_both_shapes() {
        let page: ListPayload<i32> =
            serde_json::from_str(r#"{"count": 2, "results": [4, 5]}"#).unwrap();
        assert_eq!(page.into_items(), vec![4, 5]);

        let bare: ListPayload<i32> = serde_json::from_str("[7]").unwrap();
        assert_eq!(bare.into_items(), vec![7]);
    }
}
