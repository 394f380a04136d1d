//! Welcome Banner Component
//!
//! Greeting strip at the top of the dashboard.

use leptos::prelude::*;

#[component]
pub fn WelcomeBanner(
    points: u32,
    level: &'static str,
    achievement_count: u32,
) -> impl IntoView {
    view! {
        <section class="welcome-banner">
            <h1>"Welcome back to EnglishOne!"</h1>
            <p class="muted">"Continue your English learning journey with our amazing community"</p>
            <div class="welcome-badges">
                <span class="welcome-badge">
                    <span class="icon icon-trophy"></span>
                    {format!("{} Points", points)}
                </span>
                <span class="welcome-badge">
                    <span class="icon icon-star"></span>
                    {format!("Level: {}", level)}
                </span>
                <span class="welcome-badge">
                    <span class="icon icon-award"></span>
                    {format!("{} Achievements", achievement_count)}
                </span>
            </div>
        </section>
    }
}
