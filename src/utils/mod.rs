//! Utility modules for the Treehole client.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Timestamp parsing and human-readable date formatting

pub mod datetime;
