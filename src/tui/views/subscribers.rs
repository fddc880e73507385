use async_trait::async_trait;
use ratatui::style::{Color, Style};

use super::list::{ListView, Resource};
use super::{format_date, format_timestamp};
use crate::api::paginate::fetch_all_string_cursor;
use crate::api::{ApiError, MailerLiteApi, Subscriber};
use crate::core::loaded::{Batch, Loaded};
use crate::core::view::ViewType;
use crate::tui::components::{Column, DetailRow, TableCell};

pub type SubscribersView = ListView<Subscriber>;

/// Short, coloured form of a subscriber status. Unknown statuses pass through.
fn status_badge(status: &str) -> TableCell {
    let green = Style::default().fg(Color::Green);
    let red = Style::default().fg(Color::Red);
    match status {
        "active" => TableCell::styled("active", green),
        "unsubscribed" => TableCell::styled("unsub", red),
        "unconfirmed" => TableCell::styled("unconf", Style::default().fg(Color::DarkGray)),
        "bounced" => TableCell::styled("bounced", red),
        "junk" => TableCell::styled("junk", red),
        other => TableCell::from(other),
    }
}

#[async_trait]
impl Resource for Subscriber {
    type Filter = ();

    const VIEW: ViewType = ViewType::Subscribers;
    const EMPTY_MESSAGE: &'static str = "No subscribers found.";

    fn columns() -> Vec<Column> {
        vec![
            Column::new("EMAIL", 30),
            Column::new("STATUS", 10),
            Column::new("SOURCE", 12),
            Column::new("OPENS", 8),
            Column::new("CLICKS", 8),
            Column::new("SUBSCRIBED", 12),
        ]
    }

    fn row(&self) -> Vec<TableCell> {
        vec![
            self.email.as_str().into(),
            status_badge(&self.status),
            self.source.as_str().into(),
            self.opens_count.to_string().into(),
            self.clicks_count.to_string().into(),
            format_date(self.subscribed_at.as_deref()).into(),
        ]
    }

    fn detail_title(&self) -> String {
        format!("Subscriber: {}", self.email)
    }

    fn detail_rows(&self) -> Vec<DetailRow> {
        vec![
            DetailRow::new("ID", &self.id),
            DetailRow::new("Email", &self.email),
            DetailRow::new("Status", &self.status),
            DetailRow::new("Source", &self.source),
            DetailRow::new("Opens", self.opens_count.to_string()),
            DetailRow::new("Clicks", self.clicks_count.to_string()),
            DetailRow::new("Open Rate", format!("{:.1}%", self.open_rate)),
            DetailRow::new("Click Rate", format!("{:.1}%", self.click_rate)),
            DetailRow::new("Subscribed", format_timestamp(self.subscribed_at.as_deref())),
        ]
    }

    async fn fetch_all(
        api: &dyn MailerLiteApi,
        _filter: (),
        limit: usize,
    ) -> Result<Vec<Self>, ApiError> {
        fetch_all_string_cursor(
            move |cursor: String, per_page| async move {
                api.list_subscribers(&cursor, per_page).await
            },
            limit,
        )
        .await
    }

    fn into_loaded(batch: Batch<Self>) -> Loaded {
        Loaded::Subscribers(batch)
    }

    fn from_loaded(loaded: Loaded) -> Option<Batch<Self>> {
        match loaded {
            Loaded::Subscribers(batch) => Some(batch),
            _ => None,
        }
    }
}
