//! # Core
//!
//! Dashboard state that knows nothing about the terminal.
//!
//! ```text
//!   ┌──────────────┐   Loaded    ┌──────────────┐
//!   │  api fetch   │ ──────────▶ │  tui::App    │
//!   │  (tokio task)│             │  (reducer)   │
//!   └──────────────┘             └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`view`]: `ViewType` and `FocusArea`, the root model's dispatch keys
//! - [`loaded`]: `Loaded`, the one message every fetch produces
//! - [`config`]: profile/token resolution from file, env and CLI

pub mod config;
pub mod loaded;
pub mod view;
