//! Stat Tile Component

use leptos::prelude::*;

/// Summary tile: title, big number, caption
///
/// # Arguments
/// * `accent` - colour family used for the tile class (e.g. "blue" -> "stat-tile-blue")
/// * `icon` - icon name, rendered as `icon icon-{name}`
#[component]
pub fn StatTile(
    title: &'static str,
    value: u32,
    caption: &'static str,
    accent: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-tile stat-tile-{}", accent)>
            <div class="stat-tile-header">
                <span class="stat-tile-title">{title}</span>
                <span class=format!("icon icon-{}", icon)></span>
            </div>
            <div class="stat-tile-value">{value}</div>
            <p class="stat-tile-caption">{caption}</p>
        </div>
    }
}
