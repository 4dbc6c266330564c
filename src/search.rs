use crate::model::SearchResultItem;

/// Current search: query, results in API order and the selected page
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    pub query: String,
    pub result: Vec<SearchResultItem>,
    pub results_per_page: usize,
    /// 1-based
    pub page: usize,
}

impl SearchState {
    pub fn new(results_per_page: usize) -> Self {
        Self {
            query: String::new(),
            result: Vec::new(),
            results_per_page,
            page: 1,
        }
    }

    /// Replace query and results after a successful search and go back to the first page
    pub fn replace(&mut self, query: impl Into<String>, result: Vec<SearchResultItem>) {
        self.query = query.into();
        self.result = result;
        self.page = 1;
    }

    /// Return the results of one page.
    ///
    /// Passing a page number also selects that page. Pages past the end yield an empty slice.
    pub fn page(&mut self, page_number: Option<usize>) -> &[SearchResultItem] {
        if let Some(page) = page_number {
            self.page = page;
        }

        let len = self.result.len();
        let start = self.page.saturating_sub(1).saturating_mul(self.results_per_page);
        let end = self.page.saturating_mul(self.results_per_page);
        &self.result[start.min(len)..end.min(len)]
    }

    /// Number of pages needed to show every result
    pub fn num_pages(&self) -> usize {
        self.result.len().div_ceil(self.results_per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<SearchResultItem> {
        (0..n)
            .map(|i| SearchResultItem {
                id: format!("id-{i}"),
                title: format!("Recipe {i}"),
                publisher: "Pub".to_string(),
                image: String::new(),
                source: String::new(),
                key: None,
            })
            .collect()
    }

    #[test]
    fn test_twenty_three_items_in_pages_of_ten() {
        let all = items(23);
        let mut state = SearchState::new(10);
        state.replace("pizza", all.clone());

        assert_eq!(state.page(Some(1)), &all[0..10]);
        assert_eq!(state.page(Some(3)), &all[20..23]);
        assert_eq!(state.page(Some(3)).len(), 3);
        assert!(state.page(Some(4)).is_empty());
        assert_eq!(state.page, 4);
        assert_eq!(state.num_pages(), 3);
    }

    #[test]
    fn test_omitted_page_rerenders_current() {
        let all = items(15);
        let mut state = SearchState::new(10);
        state.replace("x", all.clone());
        state.page(Some(2));

        assert_eq!(state.page(None), &all[10..15]);
        assert_eq!(state.page, 2);
    }

    #[test]
    fn test_pages_reconstruct_results() {
        for per_page in 1..=7 {
            for n in 0..=20 {
                let all = items(n);
                let mut state = SearchState::new(per_page);
                state.replace("q", all.clone());

                let mut joined = Vec::new();
                for p in 1..=state.num_pages() {
                    joined.extend_from_slice(state.page(Some(p)));
                }
                assert_eq!(joined, all, "per_page={per_page} n={n}");
                let past = state.num_pages() + 1;
                assert!(state.page(Some(past)).is_empty());
            }
        }
    }

    #[test]
    fn test_huge_page_number_is_empty() {
        let mut state = SearchState::new(10);
        state.replace("q", items(23));

        assert!(state.page(Some(usize::MAX)).is_empty());
        assert!(state.page(Some(usize::MAX / 2)).is_empty());
        assert_eq!(state.page, usize::MAX / 2);

        let mut empty = SearchState::new(10);
        empty.replace("q", Vec::new());
        assert!(empty.page(Some(usize::MAX / 2)).is_empty());
    }

    #[test]
    fn test_replace_resets_page() {
        let mut state = SearchState::new(10);
        state.replace("a", items(30));
        state.page(Some(3));
        state.replace("b", items(5));

        assert_eq!(state.page, 1);
        assert_eq!(state.query, "b");
        assert_eq!(state.result.len(), 5);
    }
}
