//! Achievement Card Component
//!
//! Earned achievements are highlighted and carry an "Earned" badge.

use leptos::prelude::*;

use crate::models::Achievement;

#[component]
pub fn AchievementCard(achievement: Achievement) -> impl IntoView {
    let card_class = if achievement.earned { "card achievement-card earned" } else { "card achievement-card" };
    let icon_class = if achievement.earned { "icon icon-award accent" } else { "icon icon-award muted" };

    view! {
        <div class=card_class>
            <div class="card-header">
                <h3 class="card-title">
                    <span class=icon_class></span>
                    {achievement.name}
                    <Show when=move || achievement.earned>
                        <span class="badge badge-secondary">"Earned"</span>
                    </Show>
                </h3>
                <p class="card-description">{achievement.description}</p>
            </div>
        </div>
    }
}
