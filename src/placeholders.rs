//! Placeholder Dashboard Data
//!
//! Fixed values the dashboard shows until engagement data comes from the
//! service. None of this is fetched or computed.

use crate::models::{Achievement, DashboardStats, GroupSummary, ProgressTrack};

pub const DASHBOARD_STATS: DashboardStats = DashboardStats {
    total_posts: 127,
    total_groups: 8,
    active_trades: 5,
    user_points: 2450,
};

/// Captions under each stat tile, in tile order
pub const POSTS_CAPTION: &str = "+12 this week";
pub const GROUPS_CAPTION: &str = "+2 joined recently";
pub const TRADES_CAPTION: &str = "3 pending offers";
pub const POINTS_CAPTION: &str = "+150 this week";

pub const LEARNER_LEVEL: &str = "Intermediate";
pub const BANNER_ACHIEVEMENT_COUNT: u32 = 5;

pub const ACTIVE_GROUPS: [GroupSummary; 3] = [
    GroupSummary { id: 1, name: "Grammar Masters", members: 245, theme: "Grammar" },
    GroupSummary { id: 2, name: "Conversation Club", members: 189, theme: "Speaking" },
    GroupSummary { id: 3, name: "Vocabulary Builders", members: 156, theme: "Vocabulary" },
];

pub const LEARNING_PROGRESS: [ProgressTrack; 3] = [
    ProgressTrack { label: "Grammar Mastery", percent: 75 },
    ProgressTrack { label: "Vocabulary Building", percent: 60 },
    ProgressTrack { label: "Speaking Practice", percent: 45 },
];

pub const ACHIEVEMENTS: [Achievement; 4] = [
    Achievement {
        id: 1,
        name: "First Post",
        description: "Made your first forum post",
        earned: true,
    },
    Achievement {
        id: 2,
        name: "Group Leader",
        description: "Created your first study group",
        earned: true,
    },
    Achievement {
        id: 3,
        name: "Helper",
        description: "Helped 10 community members",
        earned: false,
    },
    Achievement {
        id: 4,
        name: "Trader",
        description: "Completed 5 successful trades",
        earned: false,
    },
];
