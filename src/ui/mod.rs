pub mod ar_view;
pub mod gallery_view;
pub mod helpers;
pub mod popups;
pub mod profile_view;
pub mod render;

// Re-export the main render function
pub use render::render_ui;
