//! Horizontal progress bar with colour bands.

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

use leptos::prelude::*;

/// Bar thickness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProgressSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ProgressSize {
    fn class(self) -> &'static str {
        match self {
            Self::Small => "progress progress--sm",
            Self::Medium => "progress progress--md",
            Self::Large => "progress progress--lg",
        }
    }
}

#[component]
pub fn ProgressBar(
    #[prop(into)] value: Signal<f64>,
    #[prop(optional)] size: ProgressSize,
    #[prop(optional)] show_label: bool,
) -> impl IntoView {
    let percent = move || clamp_percent(value.get());

    view! {
        <div class="progress-row">
            <div class=size.class()>
                <div
                    class=move || format!("progress__fill {}", progress_tone(percent()))
                    style=move || format!("width: {:.0}%", percent())
                ></div>
            </div>
            <Show when=move || show_label>
                <span class="progress__label">{move || format!("{:.0}%", percent())}</span>
            </Show>
        </div>
    }
}

/// Clamp to `0..=100`, mapping NaN to 0.
pub fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

/// Fill class for a percentage.
pub fn progress_tone(percent: f64) -> &'static str {
    if percent >= 80.0 {
        "progress__fill--excellent"
    } else if percent >= 60.0 {
        "progress__fill--good"
    } else if percent >= 40.0 {
        "progress__fill--fair"
    } else if percent >= 20.0 {
        "progress__fill--low"
    } else {
        "progress__fill--minimal"
    }
}
