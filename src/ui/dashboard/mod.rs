//! HTML dashboard
//!
//! Split into the page state, the page renderer and the card components.

pub mod components;
pub mod renderer;
pub mod state;
pub mod utils;

// Re-export main types and functions for external use
pub use renderer::render_page;
pub use state::{Dashboard, PageState};
