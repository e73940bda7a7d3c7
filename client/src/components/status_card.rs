//! Card summarising one backend agent's phase and progress.

#[cfg(test)]
#[path = "status_card_test.rs"]
mod status_card_test;

use leptos::prelude::*;

use crate::components::progress_bar::{ProgressBar, ProgressSize};
use crate::net::types::{AgentPhase, AgentProgress};

#[component]
pub fn AgentStatusCard(
    title: &'static str,
    description: &'static str,
    #[prop(into)] progress: Signal<AgentProgress>,
) -> impl IntoView {
    let phase = move || progress.get().status;
    let percent = Signal::derive(move || progress.get().progress);

    view! {
        <div class=move || format!("status-card {}", phase_tone(phase()))>
            <div class="status-card__header">
                <span class="status-card__title">{title}</span>
                <span class="status-card__badge">{move || phase_label(phase())}</span>
            </div>
            <p class="status-card__description">{description}</p>
            <ProgressBar value=percent size=ProgressSize::Small show_label=true/>
        </div>
    }
}

/// Tone class for a phase.
pub fn phase_tone(phase: AgentPhase) -> &'static str {
    match phase {
        AgentPhase::Completed => "status-card--success",
        AgentPhase::InProgress => "status-card--active",
        AgentPhase::Error => "status-card--error",
        AgentPhase::Pending => "status-card--pending",
        AgentPhase::Idle => "status-card--idle",
    }
}

/// Human label for a phase.
pub fn phase_label(phase: AgentPhase) -> &'static str {
    match phase {
        AgentPhase::Completed => "Completed",
        AgentPhase::InProgress => "In Progress",
        AgentPhase::Error => "Error",
        AgentPhase::Pending => "Pending",
        AgentPhase::Idle => "Idle",
    }
}
