use leptos::prelude::*;

use crate::models::ProgressTrack;

#[component]
pub fn ProgressRow(track: ProgressTrack) -> impl IntoView {
    view! {
        <div class="progress-row">
            <div class="progress-row-label">
                <span>{track.label}</span>
                <span>{format!("{}%", track.percent)}</span>
            </div>
            <div class="progress" role="progressbar" aria-valuenow=track.percent.to_string()>
                <div class="progress-fill" style=format!("width: {}%", track.percent)></div>
            </div>
        </div>
    }
}
