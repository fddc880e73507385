use async_trait::async_trait;

use super::format_timestamp;
use super::list::{ListView, Resource};
use crate::api::paginate::fetch_all;
use crate::api::{ApiError, Campaign, MailerLiteApi};
use crate::core::loaded::{Batch, Loaded};
use crate::core::view::ViewType;
use crate::tui::components::{Column, DetailRow, TableCell};

pub type CampaignsView = ListView<Campaign>;

#[async_trait]
impl Resource for Campaign {
    type Filter = ();

    const VIEW: ViewType = ViewType::Campaigns;
    const EMPTY_MESSAGE: &'static str = "No campaigns found.";

    fn columns() -> Vec<Column> {
        vec![
            Column::new("NAME", 28),
            Column::new("TYPE", 10),
            Column::new("STATUS", 12),
            Column::new("SENT", 8),
            Column::new("OPENS", 8),
            Column::new("CLICKS", 8),
        ]
    }

    fn row(&self) -> Vec<TableCell> {
        vec![
            self.name.as_str().into(),
            self.type_for_humans.as_str().into(),
            self.status.as_str().into(),
            self.stats.sent.to_string().into(),
            self.stats.opens_count.to_string().into(),
            self.stats.clicks_count.to_string().into(),
        ]
    }

    fn detail_title(&self) -> String {
        format!("Campaign: {}", self.name)
    }

    fn detail_rows(&self) -> Vec<DetailRow> {
        let mut rows = vec![
            DetailRow::new("ID", &self.id),
            DetailRow::new("Name", &self.name),
            DetailRow::new("Type", &self.type_for_humans),
            DetailRow::new("Status", &self.status),
            DetailRow::new("Sent", self.stats.sent.to_string()),
            DetailRow::new("Opens", self.stats.opens_count.to_string()),
            DetailRow::new("Clicks", self.stats.clicks_count.to_string()),
            DetailRow::new("Open Rate", &self.stats.open_rate.string),
            DetailRow::new("Click Rate", &self.stats.click_rate.string),
            DetailRow::new("Created", format_timestamp(self.created_at.as_deref())),
        ];
        if let Some(scheduled) = self.scheduled_for.as_deref().filter(|s| !s.is_empty()) {
            rows.push(DetailRow::new("Scheduled For", scheduled));
        }
        rows
    }

    async fn fetch_all(
        api: &dyn MailerLiteApi,
        _filter: (),
        limit: usize,
    ) -> Result<Vec<Self>, ApiError> {
        fetch_all(move |page, per_page| api.list_campaigns(page, per_page), limit).await
    }

    fn into_loaded(batch: Batch<Self>) -> Loaded {
        Loaded::Campaigns(batch)
    }

    fn from_loaded(loaded: Loaded) -> Option<Batch<Self>> {
        match loaded {
            Loaded::Campaigns(batch) => Some(batch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::test_support::{FakeApi, campaign, client};
    use crate::tui::views::View;

    #[test]
    fn test_scheduled_for_only_when_present() {
        let plain = campaign(1);
        assert!(!plain.detail_rows().iter().any(|r| r.label == "Scheduled For"));

        let scheduled = Campaign {
            scheduled_for: Some("2024-06-01 10:00:00".to_string()),
            ..campaign(2)
        };
        let rows = scheduled.detail_rows();
        assert_eq!(
            rows.last(),
            Some(&DetailRow::new("Scheduled For", "2024-06-01 10:00:00"))
        );
    }

    #[test]
    fn test_row_projection() {
        let mut c = campaign(4);
        c.stats.sent = 120;
        c.stats.opens_count = 60;
        c.stats.clicks_count = 7;
        let texts: Vec<String> = c.row().into_iter().map(|cell| cell.text).collect();
        assert_eq!(texts, vec!["Campaign 4", "Regular", "sent", "120", "60", "7"]);
    }

    #[tokio::test]
    async fn test_fetch_walks_pages() {
        let api = Arc::new(FakeApi {
            campaigns: (0..30).map(campaign).collect(),
            ..FakeApi::new()
        });
        let mut view = CampaignsView::new(client(&api), 100);

        let loaded = view.fetch().await;
        view.update(loaded);

        assert_eq!(view.item_count(), 30);
        assert_eq!(
            api.calls(),
            vec!["campaigns 1 25".to_string(), "campaigns 2 25".to_string()]
        );
    }
}
