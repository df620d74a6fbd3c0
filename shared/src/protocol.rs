//! Request / response payloads exchanged with the REST backend.
//!
//! Field names follow the backend wire format (camelCase JSON); the
//! domain entities themselves live in the crate root.

use crate::{AlertStatus, FaultType, Prediction, Role, Severity, User};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =========================================================
// Auth
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    pub first_name: String,
    pub last_name: String,
}

/// Successful login/register response: the user fields plus a bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    pub expires_at: Option<NaiveDateTime>,
    #[serde(flatten)]
    pub user: User,
}

// =========================================================
// Plants / Panels
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRequest {
    pub name: String,
    pub location: String,
    #[serde(rename = "capacityKW")]
    pub capacity_kw: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelRequest {
    /// 人工面板编号（如 "P001"），系统内唯一
    pub panel_id: String,
    pub plant_id: i64,
    pub installation_date: Option<NaiveDate>,
    pub capacity: f64,
    pub status: crate::PanelStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_technician_id: Option<i64>,
}

// =========================================================
// Prediction history
// =========================================================

/// Server-side filter and paging parameters for the history listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryQuery {
    pub page: u32,
    pub size: u32,
    pub fault_type: Option<FaultType>,
    pub severity: Option<Severity>,
}

impl HistoryQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size,
            fault_type: None,
            severity: None,
        }
    }

    /// Render as a URL query string (without the leading '?').
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&size={}", self.page, self.size);
        if let Some(fault) = self.fault_type {
            query.push_str("&faultType=");
            query.push_str(fault.as_str());
        }
        if let Some(severity) = self.severity {
            query.push_str("&severity=");
            query.push_str(severity.as_str());
        }
        query
    }
}

/// One page of a paginated listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub current_page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

/// The history endpoint answers either with a page envelope or a flat
/// array depending on backend version; the presence of the `content`
/// field decides which. `#[serde(untagged)]` tries the envelope first.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HistoryResponse {
    Paged(Page<Prediction>),
    Flat(Vec<Prediction>),
}

impl HistoryResponse {
    pub fn into_parts(self) -> (Vec<Prediction>, Pagination) {
        match self {
            HistoryResponse::Paged(page) => {
                let pagination = Pagination {
                    page: page.current_page,
                    size: page.size,
                    total_elements: page.total_elements,
                    total_pages: page.total_pages,
                };
                (page.content, pagination)
            }
            HistoryResponse::Flat(items) => {
                let pagination = Pagination {
                    page: 0,
                    size: items.len() as u32,
                    total_elements: items.len() as u64,
                    total_pages: 1,
                };
                (items, pagination)
            }
        }
    }
}

/// Client-side view of the current paging position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl Pagination {
    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }
}

// =========================================================
// Analytics / Dashboard
// =========================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_predictions: i64,
    #[serde(default)]
    pub fault_type_counts: BTreeMap<FaultType, i64>,
    #[serde(default)]
    pub severity_counts: BTreeMap<Severity, i64>,
    #[serde(default)]
    pub fault_type_percentages: BTreeMap<FaultType, f64>,
    #[serde(default)]
    pub severity_percentages: BTreeMap<Severity, f64>,
    pub most_common_fault: Option<FaultType>,
    pub most_common_severity: Option<Severity>,
    pub critical_faults: Option<i64>,
    pub normal_operations: Option<i64>,
    pub last_updated: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub total_count: i64,
    #[serde(default)]
    pub fault_type_counts: BTreeMap<FaultType, i64>,
    #[serde(default)]
    pub severity_counts: BTreeMap<Severity, i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsTrends {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub total_days: Option<u32>,
    #[serde(default)]
    pub daily_trends: Vec<TrendPoint>,
    pub total_predictions_in_period: Option<i64>,
    pub most_active_fault_type: Option<FaultType>,
    /// "INCREASING" / "DECREASING" / "STABLE"
    pub trend_direction: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_plants: i64,
    pub total_panels: i64,
    pub active_panels: i64,
    pub maintenance_panels: i64,
    pub offline_panels: i64,
    pub total_alerts: i64,
    pub open_alerts: i64,
    pub critical_alerts: i64,
    pub high_alerts: i64,
    pub medium_alerts: i64,
    pub low_alerts: i64,
    #[serde(default)]
    pub fault_distribution: BTreeMap<FaultType, i64>,
    #[serde(default)]
    pub alerts_by_status: BTreeMap<AlertStatus, i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_query_renders_filters() {
        let mut query = HistoryQuery::new(2, 20);
        assert_eq!(query.to_query_string(), "page=2&size=20");

        query.fault_type = Some(FaultType::Normal);
        query.severity = Some(Severity::High);
        assert_eq!(
            query.to_query_string(),
            "page=2&size=20&faultType=NORMAL&severity=HIGH"
        );
    }

    #[test]
    fn history_response_detects_page_envelope() {
        let paged = r#"{
            "content": [],
            "currentPage": 1,
            "size": 20,
            "totalElements": 45,
            "totalPages": 3
        }"#;
        let parsed: HistoryResponse = serde_json::from_str(paged).unwrap();
        let (items, pagination) = parsed.into_parts();
        assert!(items.is_empty());
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.total_pages, 3);
        assert!(pagination.has_prev());
        assert!(pagination.has_next());
    }

    #[test]
    fn history_response_accepts_flat_array() {
        let parsed: HistoryResponse = serde_json::from_str("[]").unwrap();
        let (items, pagination) = parsed.into_parts();
        assert!(items.is_empty());
        assert_eq!(pagination.page, 0);
        assert_eq!(pagination.total_pages, 1);
        assert!(!pagination.has_next());
    }

    #[test]
    fn plant_request_uses_backend_field_names() {
        let request = PlantRequest {
            name: "Solar Farm A".to_string(),
            location: "CA".to_string(),
            capacity_kw: 5000.0,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["capacityKW"], 5000.0);
        assert_eq!(json["name"], "Solar Farm A");
    }

    #[test]
    fn auth_response_flattens_user_fields() {
        let json = r#"{
            "token": "abc123",
            "tokenType": "Bearer",
            "expiresAt": null,
            "userId": 7,
            "username": "admin",
            "email": "admin@solarwatch.io",
            "role": "ADMIN",
            "firstName": "Admin",
            "lastName": "User"
        }"#;
        let parsed: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.token, "abc123");
        assert_eq!(parsed.user.user_id, 7);
        assert!(parsed.user.role.is_admin());
    }
}
