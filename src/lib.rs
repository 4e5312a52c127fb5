//! picksite: static site generator for review and recommendation sites
//!
//! Site documents are read from a content store (HTTP or a local mirror),
//! normalized to camelCase, and rendered to static HTML by content type.

pub mod cli;
pub mod config;
pub mod render;
pub mod services;
pub mod types;
