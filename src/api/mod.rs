//! # MailerLite API
//!
//! The remote side of the dashboard: resource models, the HTTP client behind
//! the [`MailerLiteApi`] trait, and the generic pagination fetchers every view
//! uses to pull complete listings.

pub mod client;
pub mod paginate;
pub mod types;

pub use client::{ApiError, MailerLiteApi, MailerLiteClient};
pub use paginate::{CursorPage, OffsetPage, Page};
pub use types::{Automation, Campaign, Form, FormType, Group, Subscriber};
