use super::events::{EventKind, UiEvent};
use super::{error_markup, markup, message_markup, spinner_markup, Mount};
use log::{debug, warn};
use std::collections::HashMap;

/// A display surface: turns its data into markup
pub trait View {
    type Data: Clone;

    fn generate_markup(&mut self, data: &Self::Data) -> String;

    /// Fallback shown for absent or empty data
    fn error_message(&self) -> &str;

    fn message(&self) -> &str {
        ""
    }

    /// Whether `data` counts as "nothing to show"
    fn is_empty(_data: &Self::Data) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceStatus {
    Empty,
    Populated,
    ErrorShown,
}

type Handler = Box<dyn FnMut(&UiEvent)>;

/// Rendering operations shared by every [`View`], bound to one mount point
pub struct Surface<V: View> {
    view: V,
    mount: Mount,
    data: Option<V::Data>,
    status: SurfaceStatus,
    handlers: HashMap<EventKind, Handler>,
}

impl<V: View> Surface<V> {
    pub fn new(view: V, mount: impl Into<String>) -> Self {
        Self {
            view,
            mount: Mount::new(mount),
            data: None,
            status: SurfaceStatus::Empty,
            handlers: HashMap::new(),
        }
    }

    /// Surface without a mount of its own, used only to produce embeddable markup
    pub fn detached(view: V) -> Self {
        Self::new(view, "")
    }

    pub fn render_spinner(&mut self) {
        self.mount.clear();
        self.mount.insert_markup(&spinner_markup());
    }

    /// Render `data` from scratch.
    ///
    /// Absent or empty data shows the error fallback instead. With `attach` false the markup is
    /// returned and the mount is left alone, so list surfaces can embed item surfaces.
    pub fn render(&mut self, data: Option<V::Data>, attach: bool) -> Option<String> {
        let data = match data {
            Some(data) if !V::is_empty(&data) => data,
            _ => {
                self.render_error(None);
                return None;
            }
        };

        let markup = self.view.generate_markup(&data);
        self.data = Some(data);
        self.status = SurfaceStatus::Populated;

        if !attach {
            return Some(markup);
        }
        self.mount.clear();
        self.mount.insert_markup(&markup);
        None
    }

    pub fn render_message(&mut self, message: Option<&str>) {
        let markup = message_markup(message.unwrap_or(self.view.message()));
        self.mount.clear();
        self.mount.insert_markup(&markup);
    }

    pub fn render_error(&mut self, message: Option<&str>) {
        let markup = error_markup(message.unwrap_or(self.view.error_message()));
        self.mount.clear();
        self.mount.insert_markup(&markup);
        self.status = SurfaceStatus::ErrorShown;
    }

    /// Reconcile the mounted tree with markup generated from `data`.
    ///
    /// Nodes are paired purely by position (see [`markup::reconcile_positional`]), so this is
    /// only correct when the new markup has the same shape as what is mounted, e.g. a servings
    /// change or a bookmark flag flip. Lists that may reorder or change length need [`render`].
    ///
    /// [`render`]: Surface::render
    pub fn update(&mut self, data: V::Data) {
        let markup = self.view.generate_markup(&data);
        self.data = Some(data);
        self.status = SurfaceStatus::Populated;

        let new_nodes = markup::parse_fragment(&markup);
        let patched = markup::reconcile_positional(self.mount.children_mut(), &new_nodes);
        debug!("Patched {} nodes in {}", patched, self.mount.name());
    }

    /// Register the handler for `kind`, replacing any earlier one
    pub fn add_handler(&mut self, kind: EventKind, handler: impl FnMut(&UiEvent) + 'static) {
        self.handlers.insert(kind, Box::new(handler));
    }

    /// Forward `event` to its handler. Returns false when it was rejected or nobody listens.
    pub fn emit(&mut self, event: UiEvent) -> bool {
        if !event.is_acceptable() {
            warn!("Ignoring {:?} on {}", event, self.mount.name());
            return false;
        }
        match self.handlers.get_mut(&event.kind()) {
            Some(handler) => {
                handler(&event);
                true
            }
            None => false,
        }
    }

    pub fn mount(&self) -> &Mount {
        &self.mount
    }

    pub fn data(&self) -> Option<&V::Data> {
        self.data.as_ref()
    }

    pub fn status(&self) -> SurfaceStatus {
        self.status
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
