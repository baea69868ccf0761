use color_eyre::Result;
use viz_viewer::{MemorySurface, ViewerController, ViewerOptions};

use crate::app::ViewerAction;

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub viewer: ViewerController<MemorySurface>,
}

impl App {
    pub fn new(options: ViewerOptions) -> Self {
        Self {
            running: true,
            viewer: ViewerController::with_options(MemorySurface::new(), options),
        }
    }

    pub fn page_ready(&mut self) -> Result<()> {
        self.viewer.on_page_ready()?;
        Ok(())
    }

    pub fn perform(&mut self, action: ViewerAction) -> Result<()> {
        match action {
            ViewerAction::Close => self.viewer.close_intro_popup(),
            ViewerAction::Previous => self.viewer.show_previous_view()?,
            ViewerAction::Next => self.viewer.show_next_view()?,
        }
        Ok(())
    }

    /// Heading currently shown in the container.
    pub fn heading(&self) -> &str {
        self.viewer.surface().heading().unwrap_or_default()
    }

    pub fn intro_visible(&self) -> bool {
        self.viewer.surface().overlay_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viz_viewer::ViewKind;

    #[test]
    fn page_ready_shows_start_view() {
        let mut app = App::new(ViewerOptions::default());
        assert_eq!(app.heading(), "");

        app.page_ready().unwrap();
        assert_eq!(app.heading(), "Bubble Chart");
        assert!(app.intro_visible());
    }

    #[test]
    fn actions_drive_the_viewer() {
        let mut app = App::new(ViewerOptions::default());
        app.page_ready().unwrap();

        app.perform(ViewerAction::Previous).unwrap();
        assert_eq!(app.heading(), "Heatmap");

        app.perform(ViewerAction::Next).unwrap();
        app.perform(ViewerAction::Next).unwrap();
        assert_eq!(app.heading(), "Scatter Plot");

        app.perform(ViewerAction::Close).unwrap();
        assert!(!app.intro_visible());
    }

    #[test]
    fn options_are_passed_through() {
        let options = ViewerOptions {
            start_view: ViewKind::ScatterPlot,
            show_intro: false,
        };
        let mut app = App::new(options);
        app.page_ready().unwrap();
        assert_eq!(app.heading(), "Scatter Plot");
        assert!(!app.intro_visible());
    }
}
