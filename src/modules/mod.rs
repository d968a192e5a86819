pub mod admins;
pub mod announcements;
pub mod approvals;
pub mod auth;
pub mod companies;
pub mod files;
pub mod internships;
pub mod jobs;
pub mod progress_reports;
pub mod students;
pub mod supervisors;
