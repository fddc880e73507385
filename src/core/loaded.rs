//! # Loaded Messages
//!
//! The result of one background fetch. Each dispatch produces exactly one
//! `Loaded`, stamped with the generation the owning view handed out, and the
//! root model forwards it to that view only.

use crate::api::{ApiError, Automation, Campaign, Form, Group, Subscriber};
use crate::core::view::ViewType;

/// Items from one fetch, or the error that ended it.
#[derive(Debug, Clone, PartialEq)]
pub struct Batch<T> {
    pub generation: u64,
    pub result: Result<Vec<T>, ApiError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    Subscribers(Batch<Subscriber>),
    Campaigns(Batch<Campaign>),
    Automations(Batch<Automation>),
    Groups(Batch<Group>),
    Forms(Batch<Form>),
}

impl Loaded {
    /// The view this message belongs to.
    pub fn view_type(&self) -> ViewType {
        match self {
            Loaded::Subscribers(_) => ViewType::Subscribers,
            Loaded::Campaigns(_) => ViewType::Campaigns,
            Loaded::Automations(_) => ViewType::Automations,
            Loaded::Groups(_) => ViewType::Groups,
            Loaded::Forms(_) => ViewType::Forms,
        }
    }
}
