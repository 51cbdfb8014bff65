//! Treehole - a terminal client for the Treehole anonymous forum
//!
//! This library provides routing, REST API access, and date formatting for
//! browsing and posting to a Treehole backend from the terminal.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - REST API client and wire models
//! * [`router`] - Route table, location matching, and navigation hooks
//! * [`views`] - Text rendering of each route
//! * [`utils`] - Date formatting and other helpers
//! * [`config`] - Application configuration management

/// Application wiring of router, API, and views
pub mod app;

/// REST API client and data models
pub mod api;

/// Command-line arguments
pub mod cli;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging setup
pub mod logger;

/// Client-side routing
pub mod router;

/// Utility functions for date/time handling
pub mod utils;

/// Text views for each route
pub mod views;
