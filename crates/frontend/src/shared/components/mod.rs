pub mod error_banner;
pub mod filter_panel;
pub mod page_header;
pub mod ui;

pub use error_banner::{ActionErrorBanner, ErrorBanner};
pub use filter_panel::FilterPanel;
pub use page_header::PageHeader;
