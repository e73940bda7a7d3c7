//! Simulated agent pipeline monitor with inline SVG trend charts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Metrics come from `state::monitoring`'s random walk, advanced every
//! `TICK_MS` by a poll loop that stops on unmount. Nothing is fetched.

#[cfg(test)]
#[path = "agent_monitoring_test.rs"]
mod agent_monitoring_test;

use std::ops::ControlFlow;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::state::monitoring::{
    AGENT_PROFILES, ERROR_SERIES, LATENCY_SERIES, MonitoringState, SERIES_LABELS, TICK_MS,
};
use crate::util::poll::spawn_poll;

const CHART_WIDTH: f64 = 320.0;
const CHART_HEIGHT: f64 = 120.0;

#[component]
pub fn AgentMonitoring() -> impl IntoView {
    let state = RwSignal::new(MonitoringState::default());

    let mut rng = SmallRng::seed_from_u64(rng_seed());
    let poll = spawn_poll(TICK_MS, move || {
        state.update(|s| s.tick(&mut rng));
        async { ControlFlow::Continue(()) }
    });
    on_cleanup(move || poll.stop());

    let health = move || state.get().health();

    view! {
        <section class="monitoring">
            <div class="monitoring__summary">
                <div class="stat-card">
                    <span class="stat-card__label">"System Health"</span>
                    <span class=move || health().class()>{move || health().label()}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Total Queue"</span>
                    <span class="stat-card__value">{move || state.get().total_queue()}</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__label">"Max Error Rate"</span>
                    <span class="stat-card__value">{move || format!("{:.1}%", state.get().max_error_rate())}</span>
                </div>
            </div>
            <table class="table monitoring__agents">
                <thead>
                    <tr>
                        <th>"Agent"</th>
                        <th>"Queue"</th>
                        <th>"Latency"</th>
                        <th>"Error Rate"</th>
                    </tr>
                </thead>
                <tbody>
                    {AGENT_PROFILES
                        .iter()
                        .enumerate()
                        .map(|(i, profile)| {
                            let metrics = move || state.get().agents[i];
                            view! {
                                <tr>
                                    <td>{profile.name}</td>
                                    <td>{move || metrics().queue}</td>
                                    <td>{move || format!("{} ms", metrics().latency_ms)}</td>
                                    <td>{move || format!("{:.1}%", metrics().error_rate)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
            <div class="monitoring__charts">
                <TrendChart title="Response Time (ms)" values=&LATENCY_SERIES[..] tone="chart__line--latency"/>
                <TrendChart title="Error Rate (%)" values=&ERROR_SERIES[..] tone="chart__line--errors"/>
            </div>
        </section>
    }
}

#[component]
fn TrendChart(title: &'static str, values: &'static [f64], tone: &'static str) -> impl IntoView {
    let max = series_max(values);
    let points = polyline_points(values, CHART_WIDTH, CHART_HEIGHT, max);
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");

    view! {
        <figure class="chart">
            <figcaption class="chart__title">{title}</figcaption>
            <svg class="chart__plot" viewBox=view_box preserveAspectRatio="none">
                <polyline class=format!("chart__line {tone}") fill="none" points=points/>
            </svg>
            <div class="chart__labels">
                {SERIES_LABELS.iter().map(|label| view! { <span>{*label}</span> }).collect_view()}
            </div>
        </figure>
    }
}

/// Largest value in a series with 10% headroom; `1.0` for empty or flat-zero data.
pub fn series_max(values: &[f64]) -> f64 {
    let max = values.iter().copied().fold(0.0, f64::max);
    if max > 0.0 { max * 1.1 } else { 1.0 }
}

/// SVG `points` for a series spread evenly across `width`, scaled to `max`.
pub fn polyline_points(values: &[f64], width: f64, height: f64, max: f64) -> String {
    if values.is_empty() {
        return String::new();
    }
    #[allow(clippy::cast_precision_loss)]
    let step = if values.len() > 1 { width / (values.len() - 1) as f64 } else { 0.0 };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            #[allow(clippy::cast_precision_loss)]
            let x = step * i as f64;
            let y = height - (v / max).clamp(0.0, 1.0) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn rng_seed() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let seed = js_sys::Date::now() as u64;
        seed
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}
