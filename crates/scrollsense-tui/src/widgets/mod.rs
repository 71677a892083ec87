mod header;
mod page;
mod status_bar;

pub use header::HeaderWidget;
pub use page::PageWidget;
pub use status_bar::StatusBarWidget;
