use super::{PreviewView, Surface, View};
use crate::model::SearchResultItem;

/// Current page of search results
pub struct ResultsView {
    preview: Surface<PreviewView>,
}

impl ResultsView {
    pub fn new() -> Self {
        Self {
            preview: Surface::detached(PreviewView::default()),
        }
    }

    pub fn set_active(&mut self, id: Option<String>) {
        self.preview.view_mut().set_active(id);
    }
}

impl Default for ResultsView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ResultsView {
    type Data = Vec<SearchResultItem>;

    fn generate_markup(&mut self, results: &Self::Data) -> String {
        results
            .iter()
            .filter_map(|item| self.preview.render(Some(item.clone()), false))
            .collect()
    }

    fn error_message(&self) -> &str {
        "No recipe found for your query"
    }

    fn is_empty(results: &Self::Data) -> bool {
        results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> SearchResultItem {
        SearchResultItem {
            id: id.to_string(),
            title: format!("Title {id}"),
            publisher: "Pub".to_string(),
            image: String::new(),
            source: String::new(),
            key: None,
        }
    }

    #[test]
    fn test_renders_one_preview_per_result() {
        let mut surface = Surface::new(ResultsView::new(), ".results");
        surface.render(Some(vec![item("a"), item("b"), item("c")]), true);

        let titles: Vec<String> = surface
            .mount()
            .find_by_class("preview__title")
            .iter()
            .map(|e| e.text_content())
            .collect();
        assert_eq!(titles, ["Title a", "Title b", "Title c"]);
    }

    #[test]
    fn test_no_results_message() {
        let mut surface = Surface::new(ResultsView::new(), ".results");
        surface.render(Some(Vec::new()), true);
        assert_eq!(
            surface.mount().text_content(),
            "No recipe found for your query"
        );
    }

    #[test]
    fn test_update_moves_active_marker() {
        let mut surface = Surface::new(ResultsView::new(), ".results");
        let page = vec![item("a"), item("b")];
        surface.view_mut().set_active(Some("a".to_string()));
        surface.render(Some(page.clone()), true);

        surface.view_mut().set_active(Some("b".to_string()));
        surface.update(page);

        let links = surface.mount().find_by_class("preview__link");
        assert!(!links[0].has_class("preview__link--active"));
        assert!(links[1].has_class("preview__link--active"));
    }
}
