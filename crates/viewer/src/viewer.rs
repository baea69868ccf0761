use serde::Serialize;

use crate::domain::{wrap_decrement, wrap_increment, ViewCatalog, ViewKind};
use crate::error::{Result, ViewerError};

/// The page regions the controller drives.
///
/// Implementations resolve their elements up front. Rendering cannot fail;
/// hiding the overlay reports whether it took effect.
pub trait Surface {
    /// Hide the introductory overlay. Returns `false` if it is still shown.
    fn hide_overlay(&mut self) -> bool;

    /// Replace the whole container with a heading showing `heading`.
    fn replace_content(&mut self, heading: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PopupVisibility {
    Visible,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewerOptions {
    pub start_view: ViewKind,
    pub show_intro: bool,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            start_view: ViewKind::BubbleChart,
            show_intro: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewerSnapshot {
    pub index: usize,
    pub id: &'static str,
    pub label: &'static str,
    pub position: String,
    pub overlay: PopupVisibility,
}

/// Owns the cyclic view index and the intro popup state for one page.
#[derive(Debug)]
pub struct ViewerController<S: Surface> {
    surface: S,
    catalog: ViewCatalog,
    index: usize,
    popup: PopupVisibility,
    ready: bool,
}

impl<S: Surface> ViewerController<S> {
    pub fn new(surface: S) -> Self {
        Self::with_options(surface, ViewerOptions::default())
    }

    pub fn with_options(surface: S, options: ViewerOptions) -> Self {
        let catalog = ViewCatalog::new();
        let index = catalog.position(options.start_view).unwrap_or(0);

        let mut controller = Self {
            surface,
            catalog,
            index,
            popup: PopupVisibility::Visible,
            ready: false,
        };

        if !options.show_intro {
            controller.close_intro_popup();
        }

        controller
    }

    pub fn close_intro_popup(&mut self) {
        if self.popup == PopupVisibility::Hidden {
            return;
        }

        // Stay visible on failure so the next close retries
        if !self.surface.hide_overlay() {
            tracing::warn!("intro popup could not be hidden");
            return;
        }

        self.popup = PopupVisibility::Hidden;
        tracing::debug!("intro popup closed");
    }

    pub fn render_current_view(&mut self) -> Result<()> {
        let view = self.current_view()?;
        self.surface.replace_content(view.label());
        tracing::debug!(view = view.id(), index = self.index, "rendered view");
        Ok(())
    }

    pub fn show_previous_view(&mut self) -> Result<()> {
        self.index = wrap_decrement(self.index, self.catalog.len());
        self.render_current_view()
    }

    pub fn show_next_view(&mut self) -> Result<()> {
        self.index = wrap_increment(self.index, self.catalog.len());
        self.render_current_view()
    }

    /// Initial render. Only the first call has an effect.
    pub fn on_page_ready(&mut self) -> Result<()> {
        if self.ready {
            tracing::warn!("page ready signalled more than once, ignoring");
            return Ok(());
        }

        self.ready = true;
        self.render_current_view()
    }

    pub fn current_view(&self) -> Result<ViewKind> {
        self.catalog.get(self.index).ok_or_else(|| {
            tracing::error!(index = self.index, "no view at catalog position");
            ViewerError::UnknownViewKind(format!("catalog position {}", self.index))
        })
    }

    pub const fn current_index(&self) -> usize {
        self.index
    }

    pub const fn popup(&self) -> PopupVisibility {
        self.popup
    }

    pub const fn catalog(&self) -> &ViewCatalog {
        &self.catalog
    }

    pub const fn surface(&self) -> &S {
        &self.surface
    }

    pub fn snapshot(&self) -> Result<ViewerSnapshot> {
        let view = self.current_view()?;
        Ok(ViewerSnapshot {
            index: self.index,
            id: view.id(),
            label: view.label(),
            position: format!("{}/{}", self.index + 1, self.catalog.len()),
            overlay: self.popup,
        })
    }
}
