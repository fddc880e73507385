//! Wire types for the MailerLite REST API.
//!
//! Only the fields the dashboard displays are modelled. Everything is
//! `#[serde(default)]` so a sparse or evolving payload still decodes, and
//! scalar fields read an explicit `null` as their zero value.

use serde::{Deserialize, Deserializer};
use std::fmt;

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A rate as the API reports it: both the raw fraction and a display string.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Rate {
    #[serde(deserialize_with = "null_as_default")]
    pub float: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub string: String,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Subscriber {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub source: String,
    #[serde(deserialize_with = "null_as_default")]
    pub opens_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub clicks_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub open_rate: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub click_rate: f64,
    pub subscribed_at: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct CampaignStats {
    #[serde(deserialize_with = "null_as_default")]
    pub sent: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub opens_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub clicks_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub open_rate: Rate,
    #[serde(deserialize_with = "null_as_default")]
    pub click_rate: Rate,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Campaign {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub type_for_humans: String,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: CampaignStats,
    pub created_at: Option<String>,
    pub scheduled_for: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AutomationStats {
    #[serde(deserialize_with = "null_as_default")]
    pub completed_subscribers_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub subscribers_in_queue_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sent: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub opens_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub clicks_count: u64,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Automation {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub enabled: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub emails_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub stats: AutomationStats,
    pub created_at: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Group {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub sent_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub opens_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub open_rate: Rate,
    #[serde(deserialize_with = "null_as_default")]
    pub clicks_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub click_rate: Rate,
    #[serde(deserialize_with = "null_as_default")]
    pub unsubscribed_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub bounced_count: u64,
    pub created_at: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Form {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde(deserialize_with = "null_as_default")]
    pub form_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub conversions_count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub conversions_rate: Rate,
    #[serde(deserialize_with = "null_as_default")]
    pub opens_count: u64,
    pub created_at: Option<String>,
}

/// The three form families the API lists separately.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormType {
    #[default]
    Popup,
    Embedded,
    Promotion,
}

impl FormType {
    pub const ALL: [FormType; 3] = [FormType::Popup, FormType::Embedded, FormType::Promotion];

    /// Path segment used by `GET /forms/{type}`.
    pub fn api_value(self) -> &'static str {
        match self {
            FormType::Popup => "popup",
            FormType::Embedded => "embedded",
            FormType::Promotion => "promotion",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormType::Popup => "Popup",
            FormType::Embedded => "Embedded",
            FormType::Promotion => "Promotion",
        }
    }

    /// Cycles Popup → Embedded → Promotion → Popup.
    pub fn next(self) -> Self {
        match self {
            FormType::Popup => FormType::Embedded,
            FormType::Embedded => FormType::Promotion,
            FormType::Promotion => FormType::Popup,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormType::Popup => FormType::Promotion,
            FormType::Embedded => FormType::Popup,
            FormType::Promotion => FormType::Embedded,
        }
    }
}

impl fmt::Display for FormType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Links {
    pub next: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Meta {
    pub next_cursor: Option<String>,
}

/// `{ "data": [...], "links": {...}, "meta": {...} }`
#[derive(Deserialize, Debug)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub meta: Meta,
}

/// Error body returned on 4xx/5xx responses.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_type_cycles_forward_and_back() {
        let mut t = FormType::Popup;
        t = t.next();
        assert_eq!(t, FormType::Embedded);
        t = t.next();
        assert_eq!(t, FormType::Promotion);
        t = t.next();
        assert_eq!(t, FormType::Popup);
        assert_eq!(FormType::Popup.prev(), FormType::Promotion);
    }

    #[test]
    fn test_subscriber_decodes_with_nulls() {
        let json = r#"{
            "id": "42",
            "email": "ann@example.com",
            "status": "active",
            "source": "api",
            "opens_count": 3,
            "clicks_count": 1,
            "open_rate": 75.5,
            "click_rate": 25,
            "subscribed_at": null,
            "fields": {"name": "Ann"}
        }"#;
        let sub: Subscriber = serde_json::from_str(json).unwrap();
        assert_eq!(sub.email, "ann@example.com");
        assert_eq!(sub.opens_count, 3);
        assert_eq!(sub.click_rate, 25.0);
        assert!(sub.subscribed_at.is_none());
    }

    #[test]
    fn test_form_type_field_is_renamed() {
        let json = r#"{"id": "7", "name": "Footer", "type": "embedded", "active": true,
            "conversions_rate": {"float": 0.1, "string": "10%"}}"#;
        let form: Form = serde_json::from_str(json).unwrap();
        assert_eq!(form.form_type, "embedded");
        assert_eq!(form.conversions_rate.string, "10%");
    }

    #[test]
    fn test_list_response_without_links_or_meta() {
        let json = r#"{"data": [{"id": "1", "name": "VIP"}]}"#;
        let resp: ListResponse<Group> = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert!(resp.links.next.is_none());
        assert!(resp.meta.next_cursor.is_none());
    }

    #[test]
    fn test_null_scalars_decode_as_zero_values() {
        let json = r#"{"data": [
            {"id": "1", "email": "a@b.c", "status": "active", "source": null,
             "opens_count": null, "open_rate": null, "subscribed_at": null}
        ]}"#;
        let resp: ListResponse<Subscriber> = serde_json::from_str(json).unwrap();
        let sub = &resp.data[0];
        assert_eq!(sub.email, "a@b.c");
        assert_eq!(sub.source, "");
        assert_eq!(sub.opens_count, 0);
        assert_eq!(sub.open_rate, 0.0);
    }

    #[test]
    fn test_null_nested_rate_and_names() {
        let json = r#"{"id": "3", "name": null, "type": null, "active": null,
            "conversions_rate": null}"#;
        let form: Form = serde_json::from_str(json).unwrap();
        assert_eq!(form.name, "");
        assert_eq!(form.form_type, "");
        assert!(!form.active);
        assert_eq!(form.conversions_rate, Rate::default());

        let json = r#"{"id": "9", "name": "Launch", "status": null, "type_for_humans": null,
            "stats": {"sent": 10, "open_rate": {"float": 0.5, "string": null}}}"#;
        let campaign: Campaign = serde_json::from_str(json).unwrap();
        assert_eq!(campaign.status, "");
        assert_eq!(campaign.stats.sent, 10);
        assert_eq!(campaign.stats.open_rate.string, "");
    }
}
