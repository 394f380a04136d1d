//! UI Components
//!
//! Reusable Leptos components.

mod welcome_banner;
mod stat_tile;
mod tab_bar;
mod forum_preview;
mod progress_row;
mod group_card;
mod achievement_card;

pub use welcome_banner::WelcomeBanner;
pub use stat_tile::StatTile;
pub use tab_bar::{DashboardTab, TabBar};
pub use forum_preview::{ForumPreview, ForumStatusLine};
pub use progress_row::ProgressRow;
pub use group_card::GroupCard;
pub use achievement_card::AchievementCard;
