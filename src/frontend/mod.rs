//! Frontend module for the CEPS desktop client.

pub mod app;
pub mod assets;
pub mod components;
pub mod pages;
pub mod services;
