use super::*;

#[test]
fn every_phase_has_distinct_tone() {
    let phases = [
        AgentPhase::Idle,
        AgentPhase::Pending,
        AgentPhase::InProgress,
        AgentPhase::Completed,
        AgentPhase::Error,
    ];
    let mut tones: Vec<_> = phases.iter().map(|p| phase_tone(*p)).collect();
    tones.sort_unstable();
    tones.dedup();
    assert_eq!(tones.len(), phases.len());
}

#[test]
fn labels_are_readable() {
    assert_eq!(phase_label(AgentPhase::InProgress), "In Progress");
    assert_eq!(phase_label(AgentPhase::Completed), "Completed");
    assert_eq!(phase_label(AgentPhase::Error), "Error");
}
