use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use internlink_auth::Role;
use internlink_models::announcements::{Announcement, AnnouncementFields};
use internlink_models::companies::NewCompany;
use internlink_models::internships::InternshipSubmission;
use internlink_models::jobs::{Job, JobFields};
use internlink_models::students::NewStudent;
use internlink_models::supervisors::NewSupervisor;
use internlink_models::{
    Admin, AssignOutcome, Company, Internship, InternshipStatus, Student, Supervisor,
};

use crate::error::{Result, StoreError};
use crate::store::Store;

#[derive(Debug, Clone)]
struct JobRow {
    id: Uuid,
    company_email: String,
    fields: JobFields,
    posted_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct Tables {
    admins: HashMap<String, (Admin, String)>,
    supervisors: HashMap<String, (Supervisor, String)>,
    companies: HashMap<String, (Company, String)>,
    /// Keyed by student id.
    students: HashMap<String, Student>,
    internships: HashMap<Uuid, Internship>,
    jobs: HashMap<Uuid, JobRow>,
    announcements: HashMap<Uuid, Announcement>,
}

impl Tables {
    fn job_view(&self, row: &JobRow) -> Option<Job> {
        let (company, _) = self.companies.get(&row.company_email)?;
        Some(Job {
            job_id: row.id,
            title: row.fields.title.clone(),
            location: row.fields.location.clone(),
            salary: row.fields.salary.clone(),
            description: row.fields.description.clone(),
            posted_at: row.posted_at,
            company: company.company_name.clone(),
            company_email: row.company_email.clone(),
        })
    }
}

fn newest_first<T, K: Ord>(mut items: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    items
}

/// In-process [`Store`] guarded by a single `RwLock`.
///
/// Every write takes the lock once, so the conditional supervisor
/// assignment is atomic just like its SQL counterpart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes an account, as an operator would directly in the database.
    pub async fn delete_principal(&self, role: Role, email: &str) -> bool {
        let mut tables = self.tables.write().await;
        match role {
            Role::Admin => tables.admins.remove(email).is_some(),
            Role::Supervisor => {
                if tables.supervisors.remove(email).is_none() {
                    return false;
                }
                for student in tables.students.values_mut() {
                    if student.supervisor_email.as_deref() == Some(email) {
                        student.supervisor_email = None;
                    }
                }
                true
            }
            Role::Company => {
                if tables.companies.remove(email).is_none() {
                    return false;
                }
                tables.jobs.retain(|_, job| job.company_email != email);
                true
            }
            Role::Student => {
                let Some(student_id) = tables
                    .students
                    .values()
                    .find(|s| s.email == email)
                    .map(|s| s.student_id.clone())
                else {
                    return false;
                };
                tables.students.remove(&student_id);
                tables.internships.retain(|_, i| i.student_id != student_id);
                true
            }
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_admin(&self, email: &str, password_hash: &str) -> Result<Admin> {
        let mut tables = self.tables.write().await;
        if tables.admins.contains_key(email) {
            return Err(StoreError::Conflict("Admin already exists".to_string()));
        }
        let admin = Admin {
            email: email.to_string(),
            created_at: Utc::now(),
        };
        tables
            .admins
            .insert(email.to_string(), (admin.clone(), password_hash.to_string()));
        Ok(admin)
    }

    async fn create_supervisor(&self, supervisor: NewSupervisor) -> Result<Supervisor> {
        let mut tables = self.tables.write().await;
        if tables.supervisors.contains_key(&supervisor.email) {
            return Err(StoreError::Conflict("Supervisor already exists".to_string()));
        }
        let row = Supervisor {
            email: supervisor.email.clone(),
            full_name: supervisor.full_name,
            is_approved: false,
            created_at: Utc::now(),
        };
        tables
            .supervisors
            .insert(supervisor.email, (row.clone(), supervisor.password_hash));
        Ok(row)
    }

    async fn create_company(&self, company: NewCompany) -> Result<Company> {
        let mut tables = self.tables.write().await;
        if tables.companies.contains_key(&company.email) {
            return Err(StoreError::Conflict("Company already exists".to_string()));
        }
        let row = Company {
            email: company.email.clone(),
            company_name: company.company_name,
            is_approved: false,
            created_at: Utc::now(),
        };
        tables
            .companies
            .insert(company.email, (row.clone(), company.password_hash));
        Ok(row)
    }

    async fn create_student(&self, student: NewStudent) -> Result<Student> {
        let mut tables = self.tables.write().await;
        let taken = tables.students.contains_key(&student.student_id)
            || tables.students.values().any(|s| s.email == student.email);
        if taken {
            return Err(StoreError::Conflict("Student already exists".to_string()));
        }
        let row = Student {
            student_id: student.student_id.clone(),
            email: student.email,
            full_name: student.full_name,
            ic_number: student.ic_number,
            supervisor_email: None,
            created_at: Utc::now(),
        };
        tables.students.insert(student.student_id, row.clone());
        Ok(row)
    }

    async fn find_admin(&self, email: &str) -> Result<Option<Admin>> {
        let tables = self.tables.read().await;
        Ok(tables.admins.get(email).map(|(a, _)| a.clone()))
    }

    async fn find_supervisor(&self, email: &str) -> Result<Option<Supervisor>> {
        let tables = self.tables.read().await;
        Ok(tables.supervisors.get(email).map(|(s, _)| s.clone()))
    }

    async fn find_company(&self, email: &str) -> Result<Option<Company>> {
        let tables = self.tables.read().await;
        Ok(tables.companies.get(email).map(|(c, _)| c.clone()))
    }

    async fn find_student(&self, email: &str) -> Result<Option<Student>> {
        let tables = self.tables.read().await;
        Ok(tables.students.values().find(|s| s.email == email).cloned())
    }

    async fn find_student_by_id(&self, student_id: &str) -> Result<Option<Student>> {
        let tables = self.tables.read().await;
        Ok(tables.students.get(student_id).cloned())
    }

    async fn find_password_hash(&self, role: Role, email: &str) -> Result<Option<String>> {
        let tables = self.tables.read().await;
        Ok(match role {
            Role::Admin => tables.admins.get(email).map(|(_, h)| h.clone()),
            Role::Supervisor => tables.supervisors.get(email).map(|(_, h)| h.clone()),
            Role::Company => tables.companies.get(email).map(|(_, h)| h.clone()),
            Role::Student => None,
        })
    }

    async fn list_supervisors(&self) -> Result<Vec<Supervisor>> {
        let tables = self.tables.read().await;
        let rows = tables.supervisors.values().map(|(s, _)| s.clone()).collect();
        Ok(newest_first(rows, |s: &Supervisor| s.created_at))
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        let tables = self.tables.read().await;
        let rows = tables.companies.values().map(|(c, _)| c.clone()).collect();
        Ok(newest_first(rows, |c: &Company| c.created_at))
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        let tables = self.tables.read().await;
        let rows = tables.students.values().cloned().collect();
        Ok(newest_first(rows, |s: &Student| s.created_at))
    }

    async fn approve_supervisor(&self, email: &str) -> Result<Option<Supervisor>> {
        let mut tables = self.tables.write().await;
        Ok(tables.supervisors.get_mut(email).map(|(s, _)| {
            s.is_approved = true;
            s.clone()
        }))
    }

    async fn approve_company(&self, email: &str) -> Result<Option<Company>> {
        let mut tables = self.tables.write().await;
        Ok(tables.companies.get_mut(email).map(|(c, _)| {
            c.is_approved = true;
            c.clone()
        }))
    }

    async fn assign_supervisor(
        &self,
        student_id: &str,
        supervisor_email: &str,
    ) -> Result<AssignOutcome> {
        let mut tables = self.tables.write().await;
        if !tables.supervisors.contains_key(supervisor_email) {
            return Err(StoreError::MissingReference(
                "Supervisor not found".to_string(),
            ));
        }
        Ok(match tables.students.get_mut(student_id) {
            None => AssignOutcome::StudentNotFound,
            Some(student) if student.supervisor_email.is_some() => AssignOutcome::AlreadyAssigned,
            Some(student) => {
                student.supervisor_email = Some(supervisor_email.to_string());
                AssignOutcome::Assigned(student.clone())
            }
        })
    }

    async fn list_students_by_supervisor(&self, supervisor_email: &str) -> Result<Vec<Student>> {
        let tables = self.tables.read().await;
        let rows = tables
            .students
            .values()
            .filter(|s| s.supervisor_email.as_deref() == Some(supervisor_email))
            .cloned()
            .collect();
        Ok(newest_first(rows, |s: &Student| s.created_at))
    }

    async fn find_internship(&self, id: Uuid) -> Result<Option<Internship>> {
        let tables = self.tables.read().await;
        Ok(tables.internships.get(&id).cloned())
    }

    async fn find_internship_by_student(&self, student_id: &str) -> Result<Option<Internship>> {
        let tables = self.tables.read().await;
        Ok(tables
            .internships
            .values()
            .find(|i| i.student_id == student_id)
            .cloned())
    }

    async fn list_internships(&self) -> Result<Vec<Internship>> {
        let tables = self.tables.read().await;
        let rows = tables.internships.values().cloned().collect();
        Ok(newest_first(rows, |i: &Internship| i.updated_at))
    }

    async fn save_internship(
        &self,
        submission: InternshipSubmission,
        status: InternshipStatus,
    ) -> Result<Internship> {
        let mut tables = self.tables.write().await;
        if !tables.students.contains_key(&submission.student_id)
            || !tables.companies.contains_key(&submission.company_email)
        {
            return Err(StoreError::MissingReference(
                "Referenced record not found".to_string(),
            ));
        }

        let now = Utc::now();
        let existing = tables
            .internships
            .values()
            .find(|i| i.student_id == submission.student_id)
            .map(|i| (i.id, i.created_at));
        let (id, created_at) = existing.unwrap_or_else(|| (Uuid::new_v4(), now));

        let internship = Internship {
            id,
            student_id: submission.student_id,
            company_email: submission.company_email,
            status,
            start_date: submission.start_date,
            end_date: submission.end_date,
            allowance: submission.allowance,
            com_supervisor_name: submission.com_supervisor_name,
            com_supervisor_email: submission.com_supervisor_email,
            created_at,
            updated_at: now,
        };
        tables.internships.insert(id, internship.clone());
        Ok(internship)
    }

    async fn set_internship_status(
        &self,
        id: Uuid,
        status: InternshipStatus,
        only_from: Option<InternshipStatus>,
    ) -> Result<Option<Internship>> {
        let mut tables = self.tables.write().await;
        Ok(tables
            .internships
            .get_mut(&id)
            .filter(|i| only_from.is_none_or(|from| i.status == from))
            .map(|i| {
                i.status = status;
                i.updated_at = Utc::now();
                i.clone()
            }))
    }

    async fn create_job(&self, company_email: &str, fields: JobFields) -> Result<Job> {
        let mut tables = self.tables.write().await;
        let row = JobRow {
            id: Uuid::new_v4(),
            company_email: company_email.to_string(),
            fields,
            posted_at: Utc::now(),
        };
        let job = tables
            .job_view(&row)
            .ok_or_else(|| StoreError::MissingReference("Company not found".to_string()))?;
        tables.jobs.insert(row.id, row);
        Ok(job)
    }

    async fn list_jobs(&self, company_email: Option<&str>) -> Result<Vec<Job>> {
        let tables = self.tables.read().await;
        let rows = tables
            .jobs
            .values()
            .filter(|row| company_email.is_none_or(|email| row.company_email == email))
            .filter_map(|row| tables.job_view(row))
            .collect();
        Ok(newest_first(rows, |j: &Job| j.posted_at))
    }

    async fn update_job(
        &self,
        company_email: &str,
        job_id: Uuid,
        fields: JobFields,
    ) -> Result<Option<Job>> {
        let mut tables = self.tables.write().await;
        let Some(row) = tables
            .jobs
            .get_mut(&job_id)
            .filter(|row| row.company_email == company_email)
        else {
            return Ok(None);
        };
        row.fields = fields;
        let row = row.clone();
        Ok(tables.job_view(&row))
    }

    async fn delete_job(&self, company_email: &str, job_id: Uuid) -> Result<bool> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .jobs
            .get(&job_id)
            .is_some_and(|row| row.company_email == company_email);
        if owned {
            tables.jobs.remove(&job_id);
        }
        Ok(owned)
    }

    async fn create_announcement(&self, fields: AnnouncementFields) -> Result<Announcement> {
        let mut tables = self.tables.write().await;
        let announcement = Announcement {
            id: Uuid::new_v4(),
            title: fields.title,
            content: fields.content,
            posted_at: Utc::now(),
        };
        tables
            .announcements
            .insert(announcement.id, announcement.clone());
        Ok(announcement)
    }

    async fn list_announcements(&self) -> Result<Vec<Announcement>> {
        let tables = self.tables.read().await;
        let rows = tables.announcements.values().cloned().collect();
        Ok(newest_first(rows, |a: &Announcement| a.posted_at))
    }

    async fn update_announcement(
        &self,
        id: Uuid,
        fields: AnnouncementFields,
    ) -> Result<Option<Announcement>> {
        let mut tables = self.tables.write().await;
        Ok(tables.announcements.get_mut(&id).map(|a| {
            a.title = fields.title;
            a.content = fields.content;
            a.clone()
        }))
    }

    async fn delete_announcement(&self, id: Uuid) -> Result<bool> {
        let mut tables = self.tables.write().await;
        Ok(tables.announcements.remove(&id).is_some())
    }
}
