// App module for viz_carousel
// Handles application state and key handling

pub mod actions;
pub mod input;
pub mod state;

pub use actions::ViewerAction;
pub use input::handle_input;
pub use state::App;
