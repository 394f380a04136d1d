//! Frontend Models
//!
//! Forum records as the data service returns them, plus the shapes of the
//! placeholder dashboard data.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Forum identifier (integer or UUID, depending on the table)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ForumId {
    Int(i64),
    Text(String),
}

impl fmt::Display for ForumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForumId::Int(id) => write!(f, "{}", id),
            ForumId::Text(id) => f.write_str(id),
        }
    }
}

/// Forum record (matches the `forums` table)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumRecord {
    pub id: ForumId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: String,
    /// Any other columns the service returns
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ForumRecord {
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Aggregate numbers shown in the dashboard tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_posts: u32,
    pub total_groups: u32,
    pub active_trades: u32,
    pub user_points: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSummary {
    pub id: u32,
    pub name: &'static str,
    pub members: u32,
    pub theme: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub earned: bool,
}

/// One "Learning Progress" row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressTrack {
    pub label: &'static str,
    pub percent: u8,
}
