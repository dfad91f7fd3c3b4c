// src/utils/pagination.rs

use serde::{Deserialize, Deserializer};

/// Fixed number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Query parameters accepted by paginated endpoints.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    #[serde(default, deserialize_with = "lenient_page")]
    pub page: Option<usize>,
}

/// `?page=abc`, `?page=` and `?page=-1` fall back to the default page.
fn lenient_page<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(|raw| raw.trim().parse().ok()))
}

impl PageParams {
    /// The requested 1-based page, defaulting to the first.
    pub fn page(&self) -> usize {
        self.page.unwrap_or(1)
    }
}

/// Returns the items on `page` (1-based).
///
/// Page 0 and pages past the end are empty; callers decide whether that is an error.
pub fn paginate<T: Clone>(items: &[T], page: usize) -> Vec<T> {
    let Some(start) = page
        .checked_sub(1)
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE))
    else {
        return Vec::new();
    };

    items
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn first_page_holds_ten() {
        let page = paginate(&numbers(25), 1);
        assert_eq!(page, numbers(10));
    }

    #[test]
    fn last_page_is_partial() {
        let page = paginate(&numbers(25), 3);
        assert_eq!(page, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn beyond_data_is_empty() {
        assert!(paginate(&numbers(25), 4).is_empty());
        assert!(paginate(&numbers(25), 1000).is_empty());
    }

    #[test]
    fn page_zero_is_empty() {
        assert!(paginate(&numbers(5), 0).is_empty());
    }

    #[test]
    fn huge_page_does_not_overflow() {
        assert!(paginate(&numbers(5), usize::MAX).is_empty());
    }

    fn params(query: &str) -> PageParams {
        serde_json::from_value(serde_json::json!({ "page": query })).unwrap()
    }

    #[test]
    fn unparsable_page_falls_back_to_first() {
        assert_eq!(params("abc").page(), 1);
        assert_eq!(params("").page(), 1);
        assert_eq!(params("-1").page(), 1);
        assert_eq!(params("3").page(), 3);
    }

    #[test]
    fn default_page_is_one() {
        assert_eq!(PageParams::default().page(), 1);
        assert_eq!(PageParams { page: Some(3) }.page(), 3);
    }
}
