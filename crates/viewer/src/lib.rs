// Shared core for the carousel front-ends: the view catalog, the
// controller that cycles through it and the surface it renders into.
pub mod domain;
pub mod error;
pub mod surface;
pub mod viewer;

pub use domain::{wrap_decrement, wrap_increment, ViewCatalog, ViewKind};
pub use error::ViewerError;
pub use surface::MemorySurface;
pub use viewer::{PopupVisibility, Surface, ViewerController, ViewerOptions, ViewerSnapshot};
