//! Embedded static resources.

/// Application stylesheet, embedded at compile time.
pub const APP_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/styles.css"));
