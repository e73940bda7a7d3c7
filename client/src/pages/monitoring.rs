//! Monitoring page hosting the simulated agent pipeline widget.

use leptos::prelude::*;

use crate::components::agent_monitoring::AgentMonitoring;

#[component]
pub fn MonitoringPage() -> impl IntoView {
    view! {
        <div class="page monitoring-page">
            <header class="page__header">
                <div>
                    <h1>"Agent Monitoring"</h1>
                    <p class="page__subtitle">"Queue depth, latency, and error rates across the matching pipeline"</p>
                </div>
            </header>
            <AgentMonitoring/>
        </div>
    }
}
