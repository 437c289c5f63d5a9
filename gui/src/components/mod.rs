// GUI components module
pub mod download_modal;
pub mod layer_publish_modal;
pub mod modal;
pub mod top_bar;

pub use top_bar::TopBar;
