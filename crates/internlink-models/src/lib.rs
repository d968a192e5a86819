//! # InternLink Models
//!
//! Domain models and DTOs for the InternLink API.
//!
//! # Modules
//!
//! - [`principal`]: the authenticated principal of a request
//! - [`admins`], [`supervisors`], [`companies`], [`students`]: the four
//!   kinds of principal and their request payloads
//! - [`approvals`]: onboarding approval of supervisors and companies
//! - [`internships`]: internship records and their state machine
//! - [`jobs`]: company job postings
//! - [`announcements`]: admin announcements
//! - [`progress_reports`]: uploaded student progress reports
//! - [`auth`]: login payloads shared by password-based roles
//!
//! # Example
//!
//! ```ignore
//! use internlink_models::internships::{InternshipEvent, InternshipStatus, transition};
//! use internlink_config::ReviewPolicy;
//!
//! let next = transition(Some(InternshipStatus::Submitted), InternshipEvent::Approve, ReviewPolicy::Strict)?;
//! assert_eq!(next, InternshipStatus::Approved);
//! ```

pub mod admins;
pub mod announcements;
pub mod approvals;
pub mod auth;
pub mod companies;
pub mod internships;
pub mod jobs;
pub mod principal;
pub mod progress_reports;
pub mod students;
pub mod supervisors;

pub use admins::Admin;
pub use companies::Company;
pub use internships::{
    Internship, InternshipEvent, InternshipStatus, TransitionError, review_precondition, transition,
};
pub use principal::Principal;
pub use students::AssignOutcome;
pub use students::Student;
pub use supervisors::Supervisor;
