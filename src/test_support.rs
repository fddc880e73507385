//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::{
    ApiError, Automation, Campaign, CursorPage, Form, FormType, Group, MailerLiteApi, Page,
    Subscriber,
};
use crate::core::view::ViewType;

/// In-memory API serving fixed data, page by page.
///
/// Every call is recorded as `"<resource> <continuation> <limit>"`, e.g.
/// `"forms embedded 1 25"`, so tests can assert on the request sequence.
#[derive(Default)]
pub struct FakeApi {
    pub subscribers: Vec<Subscriber>,
    pub campaigns: Vec<Campaign>,
    pub automations: Vec<Automation>,
    pub groups: Vec<Group>,
    pub forms: Vec<Form>,
    pub failing: Vec<(ViewType, ApiError)>,
    pub calls: Mutex<Vec<String>>,
    pub delay: Mutex<Option<Duration>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every request for `view` fail with `err`.
    pub fn failing(mut self, view: ViewType, err: ApiError) -> Self {
        self.failing.push((view, err));
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Hold every later response for `delay` before answering.
    pub fn set_delay(&self, delay: Duration) {
        if let Ok(mut d) = self.delay.lock() {
            *d = Some(delay);
        }
    }

    async fn respond(&self) {
        let delay = self.delay.lock().ok().and_then(|d| *d);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn record(&self, view: ViewType, call: String) -> Result<(), ApiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        match self.failing.iter().find(|(v, _)| *v == view) {
            Some((_, err)) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Page `page` (1-based) of `items`, `limit` per page.
fn page_of<T: Clone>(items: &[T], page: u32, limit: usize) -> Page<T> {
    let start = (page.saturating_sub(1) as usize).saturating_mul(limit);
    let end = start.saturating_add(limit).min(items.len());
    Page {
        items: items.get(start..end).map(<[T]>::to_vec).unwrap_or_default(),
        has_next: end < items.len(),
    }
}

#[async_trait]
impl MailerLiteApi for FakeApi {
    async fn list_subscribers(
        &self,
        cursor: &str,
        limit: usize,
    ) -> Result<CursorPage<Subscriber>, ApiError> {
        self.respond().await;
        self.record(ViewType::Subscribers, format!("subscribers '{cursor}' {limit}"))?;
        let start: usize = cursor.parse().unwrap_or(0);
        let end = start.saturating_add(limit).min(self.subscribers.len());
        let items = self
            .subscribers
            .get(start..end)
            .map(<[Subscriber]>::to_vec)
            .unwrap_or_default();
        let next_cursor = if end < self.subscribers.len() {
            end.to_string()
        } else {
            String::new()
        };
        Ok(CursorPage { items, next_cursor })
    }

    async fn list_campaigns(&self, page: u32, limit: usize) -> Result<Page<Campaign>, ApiError> {
        self.respond().await;
        self.record(ViewType::Campaigns, format!("campaigns {page} {limit}"))?;
        Ok(page_of(&self.campaigns, page, limit))
    }

    async fn list_automations(
        &self,
        page: u32,
        limit: usize,
    ) -> Result<Page<Automation>, ApiError> {
        self.respond().await;
        self.record(ViewType::Automations, format!("automations {page} {limit}"))?;
        Ok(page_of(&self.automations, page, limit))
    }

    async fn list_groups(&self, page: u32, limit: usize) -> Result<Page<Group>, ApiError> {
        self.respond().await;
        self.record(ViewType::Groups, format!("groups {page} {limit}"))?;
        Ok(page_of(&self.groups, page, limit))
    }

    async fn list_forms(
        &self,
        form_type: FormType,
        page: u32,
        limit: usize,
    ) -> Result<Page<Form>, ApiError> {
        self.respond().await;
        self.record(
            ViewType::Forms,
            format!("forms {} {page} {limit}", form_type.api_value()),
        )?;
        let matching: Vec<Form> = self
            .forms
            .iter()
            .filter(|f| f.form_type == form_type.api_value())
            .cloned()
            .collect();
        Ok(page_of(&matching, page, limit))
    }
}

/// The fake as the optional client every view takes.
pub fn client(api: &Arc<FakeApi>) -> Option<Arc<dyn MailerLiteApi>> {
    let api: Arc<dyn MailerLiteApi> = api.clone();
    Some(api)
}

pub fn subscriber(n: usize) -> Subscriber {
    Subscriber {
        id: n.to_string(),
        email: format!("user{n}@example.com"),
        status: "active".to_string(),
        source: "api".to_string(),
        subscribed_at: Some("2024-01-15 09:30:00".to_string()),
        ..Default::default()
    }
}

pub fn campaign(n: usize) -> Campaign {
    Campaign {
        id: n.to_string(),
        name: format!("Campaign {n}"),
        status: "sent".to_string(),
        type_for_humans: "Regular".to_string(),
        ..Default::default()
    }
}

pub fn automation(n: usize) -> Automation {
    Automation {
        id: n.to_string(),
        name: format!("Automation {n}"),
        enabled: n % 2 == 0,
        ..Default::default()
    }
}

pub fn group(n: usize) -> Group {
    Group {
        id: n.to_string(),
        name: format!("Group {n}"),
        ..Default::default()
    }
}

pub fn form(n: usize, form_type: FormType) -> Form {
    Form {
        id: n.to_string(),
        name: format!("Form {n}"),
        form_type: form_type.api_value().to_string(),
        ..Default::default()
    }
}
