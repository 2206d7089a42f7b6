use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a listed property.
///
/// Closed set — the UI only ever constructs these through `<select>` options,
/// so an unrecognized wire value is a data problem, not a user-input problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    Flat,
    House,
    Villa,
    Plot,
    Commercial,
    /// Paying-guest / co-living accommodation. Wire value is `pg`.
    Pg,
}

/// All property types in the order the filter dropdown shows them.
pub const ALL_PROPERTY_TYPES: &[PropertyType] = &[
    PropertyType::Flat,
    PropertyType::House,
    PropertyType::Villa,
    PropertyType::Plot,
    PropertyType::Commercial,
    PropertyType::Pg,
];

impl PropertyType {
    /// Lowercase wire value sent to and received from the service.
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Flat => "flat",
            PropertyType::House => "house",
            PropertyType::Villa => "villa",
            PropertyType::Plot => "plot",
            PropertyType::Commercial => "commercial",
            PropertyType::Pg => "pg",
        }
    }

    /// Human-readable label for dropdowns and badges.
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Flat => "Flat",
            PropertyType::House => "House",
            PropertyType::Villa => "Villa",
            PropertyType::Plot => "Plot",
            PropertyType::Commercial => "Commercial",
            PropertyType::Pg => "PG/Co-living",
        }
    }

    /// Parse a wire value. Returns `None` for anything outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "flat" => Some(PropertyType::Flat),
            "house" => Some(PropertyType::House),
            "villa" => Some(PropertyType::Villa),
            "plot" => Some(PropertyType::Plot),
            "commercial" => Some(PropertyType::Commercial),
            "pg" => Some(PropertyType::Pg),
            _ => None,
        }
    }
}

/// Whether a property is listed for sale or for rent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Sale,
    Rent,
}

impl ListingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingStatus::Sale => "sale",
            ListingStatus::Rent => "rent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ListingStatus::Sale => "For Sale",
            ListingStatus::Rent => "For Rent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "sale" => Some(ListingStatus::Sale),
            "rent" => Some(ListingStatus::Rent),
            _ => None,
        }
    }
}

/// Structured location of a property. The service guarantees at least a city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyLocation {
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// A property listing as returned by the service.
///
/// Field renames follow the service's wire format (`_id`, `type`,
/// `createdAt`). The UI holds these as read-only snapshots — only the
/// remote service mutates property records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub status: ListingStatus,
    pub price: f64,
    pub location: PropertyLocation,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Filter state committed by the search bar, serialized into the list query.
///
/// A `None` field means "all" — and the wire contract is that such fields are
/// *omitted* from the query string entirely, never sent as a sentinel value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    /// Free-text location/title query. Sent as `location` (service wire name).
    pub query: Option<String>,
    pub property_type: Option<PropertyType>,
    pub status: Option<ListingStatus>,
}

impl PropertyFilter {
    /// Query parameters for `GET /properties`. Defaulted fields are absent.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(q) = &self.query {
            if !q.is_empty() {
                params.push(("location", q.clone()));
            }
        }
        if let Some(t) = self.property_type {
            params.push(("type", t.as_str().to_string()));
        }
        if let Some(s) = self.status {
            params.push(("status", s.as_str().to_string()));
        }
        params
    }

    /// Stable cache key for this filter, e.g. `properties?location=Mumbai&status=rent`.
    pub fn cache_key(&self) -> String {
        let params = self.to_query_params();
        if params.is_empty() {
            return "properties".to_string();
        }
        let joined = params
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        format!("properties?{joined}")
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_params().is_empty()
    }
}

/// Response from the bulk notify endpoint: the users who were notified about
/// the selected properties. The UI surfaces the count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyUsersResponse {
    #[serde(rename = "notifiedUsers")]
    pub notified_users: Vec<String>,
}

impl NotifyUsersResponse {
    pub fn count(&self) -> usize {
        self.notified_users.len()
    }
}

/// Request body for the bulk notify endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifyUsersRequest {
    #[serde(rename = "propertyIds")]
    pub property_ids: Vec<String>,
}
