pub mod log;
pub mod popup;
