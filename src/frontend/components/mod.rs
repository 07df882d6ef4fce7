//! Reusable UI components.

pub mod layout;
