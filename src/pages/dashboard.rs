//! Dashboard View
//!
//! Welcome banner, four stat tiles and the activity/groups/achievements tabs.
//! Only the forum preview is fetched; everything else is placeholder data.

use leptos::prelude::*;

use crate::components::{
    AchievementCard, DashboardTab, ForumPreview, ForumStatusLine, GroupCard, ProgressRow, StatTile,
    TabBar, WelcomeBanner,
};
use crate::hooks::use_recent_forums;
use crate::placeholders::{
    ACHIEVEMENTS, ACTIVE_GROUPS, BANNER_ACHIEVEMENT_COUNT, DASHBOARD_STATS, GROUPS_CAPTION,
    LEARNER_LEVEL, LEARNING_PROGRESS, POINTS_CAPTION, POSTS_CAPTION, TRADES_CAPTION,
};

#[component]
pub fn DashboardView() -> impl IntoView {
    let recent_forums = use_recent_forums();
    let (active_tab, set_active_tab) = signal(DashboardTab::default());
    let stats = DASHBOARD_STATS;

    view! {
        <div class="dashboard">
            <WelcomeBanner
                points=stats.user_points
                level=LEARNER_LEVEL
                achievement_count=BANNER_ACHIEVEMENT_COUNT
            />

            <div class="stat-grid">
                <StatTile title="Forum Posts" value=stats.total_posts caption=POSTS_CAPTION accent="blue" icon="message-square" />
                <StatTile title="Study Groups" value=stats.total_groups caption=GROUPS_CAPTION accent="green" icon="users" />
                <StatTile title="Active Trades" value=stats.active_trades caption=TRADES_CAPTION accent="orange" icon="trending-up" />
                <StatTile title="Learning Points" value=stats.user_points caption=POINTS_CAPTION accent="purple" icon="trophy" />
            </div>

            <div class="tabs">
                <TabBar active_tab=active_tab set_active_tab=set_active_tab />

                {move || match active_tab.get() {
                    DashboardTab::Activity => view! {
                        <div class="tab-content activity-grid">
                            <div class="card">
                                <div class="card-header">
                                    <h3 class="card-title">
                                        <span class="icon icon-message-square"></span>
                                        "Recent Forum Activity"
                                    </h3>
                                </div>
                                <div class="card-content">
                                    <ForumStatusLine status=recent_forums.status />
                                    <For
                                        each=move || recent_forums.records.get()
                                        key=|forum| forum.id.clone()
                                        children=move |forum| view! { <ForumPreview forum=forum /> }
                                    />
                                </div>
                            </div>

                            <div class="card">
                                <div class="card-header">
                                    <h3 class="card-title">
                                        <span class="icon icon-book-open"></span>
                                        "Learning Progress"
                                    </h3>
                                </div>
                                <div class="card-content">
                                    {LEARNING_PROGRESS
                                        .into_iter()
                                        .map(|track| view! { <ProgressRow track=track /> })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    }
                    .into_any(),
                    DashboardTab::Groups => view! {
                        <div class="tab-content group-grid">
                            {ACTIVE_GROUPS
                                .into_iter()
                                .map(|group| view! { <GroupCard group=group /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                    DashboardTab::Achievements => view! {
                        <div class="tab-content achievement-grid">
                            {ACHIEVEMENTS
                                .into_iter()
                                .map(|achievement| view! { <AchievementCard achievement=achievement /> })
                                .collect_view()}
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
