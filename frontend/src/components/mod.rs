pub mod footer;
pub mod nav;
pub mod status_badge;
