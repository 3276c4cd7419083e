//! Frontend Models
//!
//! Data structures exchanged with the recommendation backend and shown on pages.

use serde::Serialize;

/// Travel type options offered by the search form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelType {
    Leisure,
    Adventure,
    Culture,
    Food,
    Shopping,
}

impl TravelType {
    /// All options in display order
    pub const ALL: [TravelType; 5] = [
        TravelType::Leisure,
        TravelType::Adventure,
        TravelType::Culture,
        TravelType::Food,
        TravelType::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TravelType::Leisure => "leisure",
            TravelType::Adventure => "adventure",
            TravelType::Culture => "culture",
            TravelType::Food => "food",
            TravelType::Shopping => "shopping",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TravelType::Leisure => "休閒度假",
            TravelType::Adventure => "冒險探索",
            TravelType::Culture => "文化體驗",
            TravelType::Food => "美食之旅",
            TravelType::Shopping => "購物行程",
        }
    }

    /// Parse a `<select>` value; anything unknown (including "") is no selection
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Search payload sent to the recommendation endpoint.
///
/// Field names on the wire are the ones the backend already accepts:
/// the start date travels as `season`, destination as `place` and
/// travel type as `purpose`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchQuery {
    #[serde(rename = "season")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
    /// Trip length in days, `null` when either date is missing
    #[serde(rename = "day")]
    pub days: Option<i64>,
    /// Raw budget input (TWD)
    pub budget: String,
    #[serde(rename = "place")]
    pub destination: String,
    #[serde(rename = "purpose")]
    pub travel_type: String,
}

/// Portfolio entry
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub name: String,
}

/// Fixed portfolio list shown on the portfolio page
pub fn showcase_projects() -> Vec<Project> {
    vec![
        Project { id: 1, name: "項目一".to_string() },
        Project { id: 2, name: "項目二".to_string() },
    ]
}
