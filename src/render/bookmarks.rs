use super::{PreviewView, Surface, View};
use crate::model::{Recipe, SearchResultItem};

/// Bookmarked recipes, in bookmarking order
pub struct BookmarksView {
    preview: Surface<PreviewView>,
}

impl BookmarksView {
    pub fn new() -> Self {
        Self {
            preview: Surface::detached(PreviewView::default()),
        }
    }

    pub fn set_active(&mut self, id: Option<String>) {
        self.preview.view_mut().set_active(id);
    }
}

impl Default for BookmarksView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for BookmarksView {
    type Data = Vec<Recipe>;

    fn generate_markup(&mut self, bookmarks: &Self::Data) -> String {
        bookmarks
            .iter()
            .filter_map(|recipe| {
                self.preview
                    .render(Some(SearchResultItem::from(recipe)), false)
            })
            .collect()
    }

    fn error_message(&self) -> &str {
        "No Bookmarks Yet"
    }

    fn is_empty(bookmarks: &Self::Data) -> bool {
        bookmarks.is_empty()
    }
}
