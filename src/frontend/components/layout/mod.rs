//! Layout frame components.

pub mod header;
pub mod main;
pub mod sidebar;

pub use header::Header;
pub use main::PageLayout;
pub use sidebar::Sidebar;
