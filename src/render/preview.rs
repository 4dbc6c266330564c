use super::{View, ICONS};
use crate::model::SearchResultItem;
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};

/// Compact list entry shared by search results and bookmarks
#[derive(Debug, Default)]
pub struct PreviewView {
    active_id: Option<String>,
}

impl PreviewView {
    /// Mark the entry for `id` as the one currently displayed
    pub fn set_active(&mut self, id: Option<String>) {
        self.active_id = id;
    }
}

impl View for PreviewView {
    type Data = SearchResultItem;

    fn generate_markup(&mut self, item: &SearchResultItem) -> String {
        let link_class = if self.active_id.as_deref() == Some(item.id.as_str()) {
            "preview__link preview__link--active"
        } else {
            "preview__link"
        };
        let user_class = if item.key.is_some() {
            "preview__user-generated"
        } else {
            "preview__user-generated hidden"
        };

        format!(
            r##"<li class="preview">
  <a class="{link_class}" href="#{id}">
    <figure class="preview__fig"><img src="{image}" alt="{alt}" /></figure>
    <div class="preview__data">
      <h4 class="preview__title">{title}</h4>
      <p class="preview__publisher">{publisher}</p>
      <div class="{user_class}"><svg><use href="{ICONS}#icon-user"></use></svg></div>
    </div>
  </a>
</li>"##,
            id = attr(&item.id),
            image = attr(&item.image),
            alt = attr(&item.title),
            title = text(&item.title),
            publisher = text(&item.publisher),
        )
    }

    fn error_message(&self) -> &str {
        ""
    }
}
