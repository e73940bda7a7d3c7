//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetches, polling, dialogs) and
//! delegates shared rendering to `components`.

pub mod ar_dashboard;
pub mod consultant_profiles;
pub mod job_descriptions;
pub mod login;
pub mod matching_results;
pub mod monitoring;
pub mod recruiter_dashboard;
