use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HistoryKind {
    WasteItem,
    Report,
}

impl HistoryKind {
    /// Case-insensitive; accepts the legacy French names too
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "waste_item" | "wasteitem" | "waste_items" | "dechet" => Some(Self::WasteItem),
            "report" | "reports" | "signalement" => Some(Self::Report),
            _ => None,
        }
    }
}

/// Query parameters for the activity history
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct HistoryQuery {
    /// `WASTE_ITEM` or `REPORT`; anything else matches nothing
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Inclusive lower bound (YYYY-MM-DD)
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound (YYYY-MM-DD)
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WasteItemDetails {
    pub waste_type: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReportDetails {
    pub report_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum HistoryDetails {
    WasteItem(WasteItemDetails),
    Report(ReportDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HistoryEntryDto {
    pub id: i32,
    pub kind: HistoryKind,
    /// Current status of the record
    pub action: String,
    pub details: HistoryDetails,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HistoryResponseDto {
    pub total: usize,
    pub entries: Vec<HistoryEntryDto>,
}
