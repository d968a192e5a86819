//! The persistence seam of the API.
//!
//! Handlers and services only see `Arc<dyn Store>`. [`PgStore`](crate::PgStore)
//! backs it with PostgreSQL; [`MemoryStore`](crate::MemoryStore) keeps
//! everything in process for tests and local development.

use async_trait::async_trait;
use uuid::Uuid;

use internlink_auth::Role;
use internlink_models::announcements::{Announcement, AnnouncementFields};
use internlink_models::companies::NewCompany;
use internlink_models::internships::InternshipSubmission;
use internlink_models::jobs::{Job, JobFields};
use internlink_models::students::NewStudent;
use internlink_models::supervisors::NewSupervisor;
use internlink_models::{
    Admin, AssignOutcome, Company, Internship, InternshipStatus, Principal, Student, Supervisor,
};

use crate::error::Result;

#[async_trait]
pub trait Store: Send + Sync + std::fmt::Debug {
    // Principals

    async fn create_admin(&self, email: &str, password_hash: &str) -> Result<Admin>;
    async fn create_supervisor(&self, supervisor: NewSupervisor) -> Result<Supervisor>;
    async fn create_company(&self, company: NewCompany) -> Result<Company>;
    async fn create_student(&self, student: NewStudent) -> Result<Student>;

    async fn find_admin(&self, email: &str) -> Result<Option<Admin>>;
    async fn find_supervisor(&self, email: &str) -> Result<Option<Supervisor>>;
    async fn find_company(&self, email: &str) -> Result<Option<Company>>;
    async fn find_student(&self, email: &str) -> Result<Option<Student>>;
    async fn find_student_by_id(&self, student_id: &str) -> Result<Option<Student>>;

    /// Stored bcrypt hash for a password-based role. Students have none.
    async fn find_password_hash(&self, role: Role, email: &str) -> Result<Option<String>>;

    async fn find_principal(&self, role: Role, email: &str) -> Result<Option<Principal>> {
        Ok(match role {
            Role::Admin => self.find_admin(email).await?.map(Principal::Admin),
            Role::Supervisor => self.find_supervisor(email).await?.map(Principal::Supervisor),
            Role::Student => self.find_student(email).await?.map(Principal::Student),
            Role::Company => self.find_company(email).await?.map(Principal::Company),
        })
    }

    /// Newest first.
    async fn list_supervisors(&self) -> Result<Vec<Supervisor>>;
    /// Newest first.
    async fn list_companies(&self) -> Result<Vec<Company>>;
    /// Newest first.
    async fn list_students(&self) -> Result<Vec<Student>>;

    /// Sets the approval flag. `None` when no supervisor has that email.
    async fn approve_supervisor(&self, email: &str) -> Result<Option<Supervisor>>;
    /// Sets the approval flag. `None` when no company has that email.
    async fn approve_company(&self, email: &str) -> Result<Option<Company>>;

    /// Claims an unassigned student in a single conditional write.
    async fn assign_supervisor(
        &self,
        student_id: &str,
        supervisor_email: &str,
    ) -> Result<AssignOutcome>;
    async fn list_students_by_supervisor(&self, supervisor_email: &str) -> Result<Vec<Student>>;

    // Internships

    async fn find_internship(&self, id: Uuid) -> Result<Option<Internship>>;
    async fn find_internship_by_student(&self, student_id: &str) -> Result<Option<Internship>>;
    /// Most recently updated first.
    async fn list_internships(&self) -> Result<Vec<Internship>>;
    /// Creates the student's internship or replaces every submitted field of
    /// the existing one, keeping its id.
    async fn save_internship(
        &self,
        submission: InternshipSubmission,
        status: InternshipStatus,
    ) -> Result<Internship>;
    /// Moves an internship to `status`. With `only_from` set, the write only
    /// happens while the stored status still equals it. `None` when nothing
    /// was changed.
    async fn set_internship_status(
        &self,
        id: Uuid,
        status: InternshipStatus,
        only_from: Option<InternshipStatus>,
    ) -> Result<Option<Internship>>;

    // Jobs

    async fn create_job(&self, company_email: &str, fields: JobFields) -> Result<Job>;
    /// Newest first, optionally limited to one company.
    async fn list_jobs(&self, company_email: Option<&str>) -> Result<Vec<Job>>;
    /// `None` when the job does not exist or belongs to another company.
    async fn update_job(
        &self,
        company_email: &str,
        job_id: Uuid,
        fields: JobFields,
    ) -> Result<Option<Job>>;
    async fn delete_job(&self, company_email: &str, job_id: Uuid) -> Result<bool>;

    // Announcements

    async fn create_announcement(&self, fields: AnnouncementFields) -> Result<Announcement>;
    /// Newest first.
    async fn list_announcements(&self) -> Result<Vec<Announcement>>;
    async fn update_announcement(
        &self,
        id: Uuid,
        fields: AnnouncementFields,
    ) -> Result<Option<Announcement>>;
    async fn delete_announcement(&self, id: Uuid) -> Result<bool>;
}
