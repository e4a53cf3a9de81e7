use std::sync::Arc;

use chrono::{DateTime, NaiveTime, Utc};

use crate::core::error::Result;
use crate::features::history::dtos::{
    HistoryDetails, HistoryEntryDto, HistoryKind, HistoryQuery, ReportDetails, WasteItemDetails,
};
use crate::features::reports::models::Report;
use crate::features::reports::ReportService;
use crate::features::waste_items::models::WasteItem;
use crate::features::waste_items::WasteItemService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindFilter {
    All,
    Only(HistoryKind),
    /// An unrecognised `type` matches no entry
    Nothing,
}

/// Normalised history query. Date bounds are independent of each other.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryFilter {
    pub kind: KindFilter,
    pub from: Option<DateTime<Utc>>,
    pub until: Option<DateTime<Utc>>,
}

impl HistoryFilter {
    pub fn from_query(query: &HistoryQuery) -> Self {
        let kind = match query.kind.as_deref().map(str::trim) {
            None | Some("") => KindFilter::All,
            Some(raw) => HistoryKind::parse(raw).map_or(KindFilter::Nothing, KindFilter::Only),
        };

        Self {
            kind,
            from: query
                .start_date
                .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
            // end date is inclusive: everything before the next midnight
            until: query
                .end_date
                .and_then(|d| d.succ_opt())
                .map(|d| d.and_time(NaiveTime::MIN).and_utc()),
        }
    }

    fn accepts(&self, entry: &HistoryEntryDto) -> bool {
        let kind_ok = match self.kind {
            KindFilter::All => true,
            KindFilter::Only(kind) => entry.kind == kind,
            KindFilter::Nothing => false,
        };
        kind_ok
            && self.from.is_none_or(|from| entry.date >= from)
            && self.until.is_none_or(|until| entry.date < until)
    }
}

impl From<WasteItem> for HistoryEntryDto {
    fn from(w: WasteItem) -> Self {
        Self {
            id: w.id,
            kind: HistoryKind::WasteItem,
            action: w.status.to_string(),
            details: HistoryDetails::WasteItem(WasteItemDetails {
                waste_type: w.waste_type,
                quantity: w.quantity,
            }),
            date: w.created_at,
        }
    }
}

impl From<Report> for HistoryEntryDto {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            kind: HistoryKind::Report,
            action: r.status.to_string(),
            details: HistoryDetails::Report(ReportDetails {
                report_type: r.report_type,
            }),
            date: r.created_at,
        }
    }
}

/// Merge both record kinds, apply the filter and sort newest first
pub fn build_history(
    waste_items: Vec<WasteItem>,
    reports: Vec<Report>,
    filter: &HistoryFilter,
) -> Vec<HistoryEntryDto> {
    let mut entries: Vec<HistoryEntryDto> = waste_items
        .into_iter()
        .map(HistoryEntryDto::from)
        .chain(reports.into_iter().map(HistoryEntryDto::from))
        .filter(|entry| filter.accepts(entry))
        .collect();

    entries.sort_by(|a, b| b.date.cmp(&a.date));
    entries
}

/// Per-user activity history across waste items and reports
pub struct HistoryService {
    waste_items: Arc<WasteItemService>,
    reports: Arc<ReportService>,
}

impl HistoryService {
    pub fn new(waste_items: Arc<WasteItemService>, reports: Arc<ReportService>) -> Self {
        Self {
            waste_items,
            reports,
        }
    }

    pub async fn for_user(
        &self,
        user_id: i32,
        filter: &HistoryFilter,
    ) -> Result<Vec<HistoryEntryDto>> {
        let (waste_items, reports) = futures::try_join!(
            self.waste_items.list_by_user(user_id),
            self.reports.list_by_user(user_id)
        )?;

        Ok(build_history(waste_items, reports, filter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::models::ReportStatus;
    use crate::features::waste_items::models::WasteStatus;
    use chrono::{NaiveDate, TimeZone};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    fn waste_item(id: i32, day: u32) -> WasteItem {
        WasteItem {
            id,
            waste_type: "plastic".to_string(),
            quantity: 1.5,
            address: "Bonapriso".to_string(),
            city: "Douala".to_string(),
            latitude: None,
            longitude: None,
            photo: None,
            status: WasteStatus::Pending,
            user_id: 1,
            collected_by: None,
            collected_at: None,
            created_at: at(day),
            updated_at: at(day),
        }
    }

    fn report(id: i32, day: u32) -> Report {
        Report {
            id,
            report_type: "dump".to_string(),
            latitude: 4.05,
            longitude: 9.7,
            description: None,
            photo: None,
            status: ReportStatus::InProgress,
            user_id: 1,
            created_at: at(day),
            updated_at: at(day),
        }
    }

    fn all() -> HistoryFilter {
        HistoryFilter::from_query(&HistoryQuery::default())
    }

    #[test]
    fn test_merges_newest_first() {
        let entries = build_history(
            vec![waste_item(1, 3), waste_item(2, 10)],
            vec![report(7, 5)],
            &all(),
        );

        let ids: Vec<i32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 7, 1]);
        assert_eq!(entries[1].kind, HistoryKind::Report);
        assert_eq!(entries[1].action, "in_progress");
    }

    #[test]
    fn test_kind_filter() {
        let query = HistoryQuery {
            kind: Some("report".to_string()),
            ..Default::default()
        };
        let entries = build_history(
            vec![waste_item(1, 3)],
            vec![report(7, 5)],
            &HistoryFilter::from_query(&query),
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, HistoryKind::Report);
    }

    #[test]
    fn test_unknown_kind_matches_nothing() {
        let query = HistoryQuery {
            kind: Some("collections".to_string()),
            ..Default::default()
        };
        let filter = HistoryFilter::from_query(&query);
        assert_eq!(filter.kind, KindFilter::Nothing);
        assert!(build_history(vec![waste_item(1, 3)], vec![], &filter).is_empty());
    }

    #[test]
    fn test_date_bounds_are_inclusive_and_independent() {
        let query = HistoryQuery {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 5),
            ..Default::default()
        };
        let entries = build_history(
            vec![waste_item(1, 4), waste_item(2, 5)],
            vec![report(3, 20)],
            &HistoryFilter::from_query(&query),
        );
        let ids: Vec<i32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2]);

        let query = HistoryQuery {
            end_date: NaiveDate::from_ymd_opt(2024, 3, 5),
            ..Default::default()
        };
        let entries = build_history(
            vec![waste_item(1, 4), waste_item(2, 5)],
            vec![report(3, 20)],
            &HistoryFilter::from_query(&query),
        );
        let ids: Vec<i32> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
