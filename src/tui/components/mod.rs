//! # TUI Components
//!
//! Widgets shared across the dashboard.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `StatusBar`: bottom bar with view name, count and profile
//! - `DetailPanel`: label/value listing of one item
//! - `HelpOverlay`: keybinding reference
//!
//! ### Stateful Components
//!
//! - `Table`: rows, cursor and viewport for every resource list
//! - `Sidebar`: view selector
//! - `Spinner`: loading animation advanced by the event loop
//!
//! Each file holds the component's state, rendering and tests. Components
//! never reach into the root model; the parent pushes props in through setters.

pub mod detail_panel;
pub mod help;
pub mod sidebar;
pub mod spinner;
pub mod status_bar;
pub mod table;

pub use detail_panel::{DetailPanel, DetailRow};
pub use help::HelpOverlay;
pub use sidebar::{SIDEBAR_WIDTH, Sidebar};
pub use spinner::Spinner;
pub use status_bar::{STATUS_BAR_HEIGHT, StatusBar};
pub use table::{Column, Table, TableCell};
