//! Routing and access gating.

pub mod main;

pub use main::Route;
