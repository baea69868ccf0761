use crate::viewer::Surface;

/// A surface that keeps its state in memory.
///
/// The terminal front-end draws from it, and headless runs and tests read
/// it back to see what a page would show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemorySurface {
    overlay_visible: bool,
    heading: Option<String>,
    renders: usize,
}

impl MemorySurface {
    pub const fn new() -> Self {
        Self {
            overlay_visible: true,
            heading: None,
            renders: 0,
        }
    }

    pub const fn overlay_visible(&self) -> bool {
        self.overlay_visible
    }

    /// The heading currently in the container, if anything was rendered.
    pub fn heading(&self) -> Option<&str> {
        self.heading.as_deref()
    }

    pub const fn render_count(&self) -> usize {
        self.renders
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for MemorySurface {
    fn hide_overlay(&mut self) -> bool {
        self.overlay_visible = false;
        true
    }

    fn replace_content(&mut self, heading: &str) {
        self.heading = Some(heading.to_string());
        self.renders += 1;
    }
}
