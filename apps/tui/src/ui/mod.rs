// UI module for viz_carousel
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::viewer::render_viewer(app, f);

    if app.intro_visible() {
        widgets::popup::render_intro_popup(f);
    }
}
