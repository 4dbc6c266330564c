use crate::upload::UploadForm;

/// User-triggered events a surface can forward to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Render,
    Search,
    UpdateServings,
    ToggleBookmark,
    PageClick,
    Upload,
    ToggleWindow,
}

#[derive(Debug, Clone)]
pub enum UiEvent {
    Render,
    Search(String),
    UpdateServings(u32),
    ToggleBookmark,
    PageClick(usize),
    Upload(UploadForm),
    ToggleWindow,
}

impl UiEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            UiEvent::Render => EventKind::Render,
            UiEvent::Search(_) => EventKind::Search,
            UiEvent::UpdateServings(_) => EventKind::UpdateServings,
            UiEvent::ToggleBookmark => EventKind::ToggleBookmark,
            UiEvent::PageClick(_) => EventKind::PageClick,
            UiEvent::Upload(_) => EventKind::Upload,
            UiEvent::ToggleWindow => EventKind::ToggleWindow,
        }
    }

    /// Servings must stay positive and pages are 1-based
    pub fn is_acceptable(&self) -> bool {
        match self {
            UiEvent::UpdateServings(servings) => *servings > 0,
            UiEvent::PageClick(page) => *page > 0,
            _ => true,
        }
    }
}
