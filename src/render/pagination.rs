use super::{View, ICONS};
use crate::search::SearchState;

/// Position within the search results
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub current: usize,
    pub pages: usize,
}

impl From<&SearchState> for PageInfo {
    fn from(search: &SearchState) -> Self {
        PageInfo {
            current: search.page,
            pages: search.num_pages(),
        }
    }
}

#[derive(Debug, Default)]
pub struct PaginationView;

fn button(direction: &str, page: usize, icon: &str) -> String {
    format!(
        r#"<button data-goto="{page}" class="btn--inline pagination__btn--{direction}"><span>Page {page}</span><svg class="search__icon"><use href="{ICONS}#{icon}"></use></svg></button>"#
    )
}

impl View for PaginationView {
    type Data = PageInfo;

    fn generate_markup(&mut self, info: &PageInfo) -> String {
        let PageInfo { current, pages } = *info;
        let prev = || button("prev", current - 1, "icon-arrow-left");
        let next = || button("next", current + 1, "icon-arrow-right");

        if current == 1 && pages > 1 {
            next()
        } else if current == pages && pages > 1 {
            prev()
        } else if current > 1 && current < pages {
            format!("{}{}", prev(), next())
        } else {
            String::new()
        }
    }

    fn error_message(&self) -> &str {
        ""
    }
}
