//! DockDockGo: terminal front end for the DockDockGo search API.
//!
//! The query client lives in the `dockdockgo-search` crate. This crate adds
//! what sits around it:
//!
//! - **search**: the view-state controller (idle → loading → success/failure)
//!   that the search form and pagination drive
//! - **ui**: plain-text rendering of each view state
//! - **session**: parsing of interactive input lines
//! - **config**: TOML configuration and base URL resolution

pub mod config;
pub mod error;
pub mod search;
pub mod session;
pub mod ui;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use search::{SearchBackend, SearchController, SearchOutcome, ViewState};
