pub mod markup;

mod add_recipe;
mod bookmarks;
mod events;
mod pagination;
mod preview;
mod recipe;
mod results;
mod surface;

pub use add_recipe::AddRecipeView;
pub use bookmarks::BookmarksView;
pub use events::{EventKind, UiEvent};
pub use markup::{Element, Node};
pub use pagination::{PageInfo, PaginationView};
pub use preview::PreviewView;
pub use recipe::{format_quantity, RecipeView};
pub use results::ResultsView;
pub use surface::{Surface, SurfaceStatus, View};

/// Sprite sheet referenced by every icon
pub const ICONS: &str = "img/icons.svg";

/// A fixed insertion point that owns the nodes currently displayed in it
#[derive(Debug, Clone, Default)]
pub struct Mount {
    name: String,
    children: Vec<Node>,
}

impl Mount {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Parse `html` and insert it before the current content
    pub fn insert_markup(&mut self, html: &str) {
        let existing = std::mem::take(&mut self.children);
        self.children = markup::parse_fragment(html);
        self.children.extend(existing);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Node] {
        &mut self.children
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn to_html(&self) -> String {
        markup::to_html(&self.children)
    }

    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Every element in document order
    pub fn elements(&self) -> Vec<&Element> {
        markup::elements(&self.children)
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.elements()
            .into_iter()
            .filter(|element| element.has_class(class))
            .collect()
    }

    pub fn first_by_class(&self, class: &str) -> Option<&Element> {
        self.elements()
            .into_iter()
            .find(|element| element.has_class(class))
    }
}

/// Fixed loading indicator
pub(crate) fn spinner_markup() -> String {
    format!(
        r#"<div class="spinner"><svg><use href="{ICONS}#icon-loader"></use></svg></div>"#
    )
}

pub(crate) fn message_markup(message: &str) -> String {
    notice_markup("message", "icon-smile", message)
}

pub(crate) fn error_markup(message: &str) -> String {
    notice_markup("error", "icon-alert-triangle", message)
}

fn notice_markup(class: &str, icon: &str, message: &str) -> String {
    format!(
        r#"<div class="{class}"><div><svg><use href="{ICONS}#{icon}"></use></svg></div><p>{}</p></div>"#,
        html_escape::encode_text(message)
    )
}
