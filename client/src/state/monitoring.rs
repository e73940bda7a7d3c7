//! Simulated agent pipeline metrics for the monitoring view.
//!
//! Nothing here is measured: queue depths, latencies, and error rates take a
//! bounded random walk every [`TICK_MS`] so the widget has something to show.

#[cfg(test)]
#[path = "monitoring_test.rs"]
mod monitoring_test;

use rand::Rng;

/// Interval between simulated metric updates.
pub const TICK_MS: u64 = 5_000;

/// Hour labels shared by both charts.
pub const SERIES_LABELS: [&str; 7] = ["00:00", "01:00", "02:00", "03:00", "04:00", "05:00", "06:00"];
/// Static latency series (ms).
pub const LATENCY_SERIES: [f64; 7] = [450.0, 420.0, 480.0, 500.0, 460.0, 490.0, 470.0];
/// Static error-rate series (%).
pub const ERROR_SERIES: [f64; 7] = [0.2, 0.3, 0.1, 0.4, 0.2, 0.5, 0.3];

/// Bounds and centre for one agent's simulated metrics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentProfile {
    pub name: &'static str,
    pub queue_min: u32,
    pub queue_max: u32,
    pub latency_base: u32,
    pub latency_spread: u32,
    pub latency_min: u32,
    pub latency_max: u32,
    pub error_base: f64,
    pub error_spread: f64,
}

pub const AGENT_PROFILES: [AgentProfile; 3] = [
    AgentProfile {
        name: "Comparison Agent",
        queue_min: 1,
        queue_max: 5,
        latency_base: 450,
        latency_spread: 50,
        latency_min: 300,
        latency_max: 600,
        error_base: 0.2,
        error_spread: 0.1,
    },
    AgentProfile {
        name: "Ranking Agent",
        queue_min: 0,
        queue_max: 4,
        latency_base: 320,
        latency_spread: 50,
        latency_min: 250,
        latency_max: 400,
        error_base: 0.1,
        error_spread: 0.05,
    },
    AgentProfile {
        name: "Communication Agent",
        queue_min: 0,
        queue_max: 3,
        latency_base: 1200,
        latency_spread: 100,
        latency_min: 800,
        latency_max: 1500,
        error_base: 1.5,
        error_spread: 0.25,
    },
];

/// Current simulated reading for one agent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AgentMetrics {
    pub queue: u32,
    pub latency_ms: u32,
    pub error_rate: f64,
}

/// Overall pipeline health derived from the worst error rate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Health {
    Healthy,
    Degraded,
    Critical,
}

impl Health {
    #[must_use]
    pub fn from_error_rate(max_error_rate: f64) -> Self {
        if max_error_rate > 5.0 {
            Self::Critical
        } else if max_error_rate > 2.0 {
            Self::Degraded
        } else {
            Self::Healthy
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::Degraded => "Degraded",
            Self::Critical => "Critical",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Healthy => "health health--ok",
            Self::Degraded => "health health--warn",
            Self::Critical => "health health--critical",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonitoringState {
    pub agents: [AgentMetrics; 3],
}

impl Default for MonitoringState {
    fn default() -> Self {
        Self {
            agents: [
                AgentMetrics { queue: 3, latency_ms: 450, error_rate: 0.2 },
                AgentMetrics { queue: 2, latency_ms: 320, error_rate: 0.1 },
                AgentMetrics { queue: 1, latency_ms: 1200, error_rate: 1.5 },
            ],
        }
    }
}

impl MonitoringState {
    /// Advance every agent one random step, staying within its profile bounds.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        for (metrics, profile) in self.agents.iter_mut().zip(AGENT_PROFILES.iter()) {
            *metrics = step(metrics, profile, rng);
        }
    }

    #[must_use]
    pub fn total_queue(&self) -> u32 {
        self.agents.iter().map(|a| a.queue).sum()
    }

    #[must_use]
    pub fn max_error_rate(&self) -> f64 {
        self.agents.iter().map(|a| a.error_rate).fold(0.0, f64::max)
    }

    #[must_use]
    pub fn health(&self) -> Health {
        Health::from_error_rate(self.max_error_rate())
    }
}

fn step<R: Rng>(current: &AgentMetrics, profile: &AgentProfile, rng: &mut R) -> AgentMetrics {
    // Queue drifts by -1, 0, or +1 from its current value.
    let drift: i64 = rng.random_range(-1..=1);
    let queue = (i64::from(current.queue) + drift).clamp(i64::from(profile.queue_min), i64::from(profile.queue_max));

    // Latency and error rate jitter around a fixed centre.
    let spread = i64::from(profile.latency_spread);
    let latency = (i64::from(profile.latency_base) + rng.random_range(-spread..spread))
        .clamp(i64::from(profile.latency_min), i64::from(profile.latency_max));
    let error = profile.error_base + rng.random_range(-profile.error_spread..profile.error_spread);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let metrics = AgentMetrics {
        queue: queue as u32,
        latency_ms: latency as u32,
        error_rate: round_one_decimal(error.max(0.0)),
    };
    metrics
}

/// Round to one decimal place, as the widget displays it.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
