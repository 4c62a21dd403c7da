pub mod banner;
pub mod calendar_grid;
pub mod header;
pub mod media_viewer;
pub mod progress_bar;
