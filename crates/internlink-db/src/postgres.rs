use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;
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

const SUPERVISOR_COLUMNS: &str = "email, full_name, is_approved, created_at";
const COMPANY_COLUMNS: &str = "email, company_name, is_approved, created_at";
const STUDENT_COLUMNS: &str =
    "student_id, email, full_name, ic_number, supervisor_email, created_at";
const INTERNSHIP_COLUMNS: &str = "id, student_id, company_email, status, start_date, end_date, \
     allowance, com_supervisor_name, com_supervisor_email, created_at, updated_at";
const JOB_PROJECTION: &str = "j.id AS job_id, j.title, j.location, j.salary, j.description, \
     j.posted_at, c.company_name AS company, j.company_email";

/// PostgreSQL-backed [`Store`].
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    #[instrument(skip(self, password_hash))]
    async fn create_admin(&self, email: &str, password_hash: &str) -> Result<Admin> {
        sqlx::query_as::<_, Admin>(
            r#"INSERT INTO admins (email, password_hash)
               VALUES ($1, $2)
               RETURNING email, created_at"#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "Admin already exists"))
    }

    #[instrument(skip(self, supervisor), fields(email = %supervisor.email))]
    async fn create_supervisor(&self, supervisor: NewSupervisor) -> Result<Supervisor> {
        sqlx::query_as::<_, Supervisor>(&format!(
            "INSERT INTO supervisors (email, full_name, password_hash) \
             VALUES ($1, $2, $3) RETURNING {SUPERVISOR_COLUMNS}"
        ))
        .bind(&supervisor.email)
        .bind(&supervisor.full_name)
        .bind(&supervisor.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "Supervisor already exists"))
    }

    #[instrument(skip(self, company), fields(email = %company.email))]
    async fn create_company(&self, company: NewCompany) -> Result<Company> {
        sqlx::query_as::<_, Company>(&format!(
            "INSERT INTO companies (email, company_name, password_hash) \
             VALUES ($1, $2, $3) RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(&company.email)
        .bind(&company.company_name)
        .bind(&company.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "Company already exists"))
    }

    #[instrument(skip(self, student), fields(student_id = %student.student_id))]
    async fn create_student(&self, student: NewStudent) -> Result<Student> {
        sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (student_id, email, full_name, ic_number) \
             VALUES ($1, $2, $3, $4) RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&student.student_id)
        .bind(&student.email)
        .bind(&student.full_name)
        .bind(&student.ic_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "Student already exists"))
    }

    async fn find_admin(&self, email: &str) -> Result<Option<Admin>> {
        Ok(
            sqlx::query_as::<_, Admin>("SELECT email, created_at FROM admins WHERE email = $1")
                .bind(email)
                .fetch_optional(&self.pool)
                .await?,
        )
    }

    async fn find_supervisor(&self, email: &str) -> Result<Option<Supervisor>> {
        Ok(sqlx::query_as::<_, Supervisor>(&format!(
            "SELECT {SUPERVISOR_COLUMNS} FROM supervisors WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_company(&self, email: &str) -> Result<Option<Company>> {
        Ok(sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_student(&self, email: &str) -> Result<Option<Student>> {
        Ok(sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_student_by_id(&self, student_id: &str) -> Result<Option<Student>> {
        Ok(sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE student_id = $1"
        ))
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_password_hash(&self, role: Role, email: &str) -> Result<Option<String>> {
        let sql = match role {
            Role::Admin => "SELECT password_hash FROM admins WHERE email = $1",
            Role::Supervisor => "SELECT password_hash FROM supervisors WHERE email = $1",
            Role::Company => "SELECT password_hash FROM companies WHERE email = $1",
            Role::Student => return Ok(None),
        };

        Ok(sqlx::query_scalar::<_, String>(sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?)
    }

    async fn list_supervisors(&self) -> Result<Vec<Supervisor>> {
        Ok(sqlx::query_as::<_, Supervisor>(&format!(
            "SELECT {SUPERVISOR_COLUMNS} FROM supervisors ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?)
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        Ok(sqlx::query_as::<_, Company>(&format!(
            "SELECT {COMPANY_COLUMNS} FROM companies ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?)
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        Ok(sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn approve_supervisor(&self, email: &str) -> Result<Option<Supervisor>> {
        Ok(sqlx::query_as::<_, Supervisor>(&format!(
            "UPDATE supervisors SET is_approved = TRUE WHERE email = $1 \
             RETURNING {SUPERVISOR_COLUMNS}"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn approve_company(&self, email: &str) -> Result<Option<Company>> {
        Ok(sqlx::query_as::<_, Company>(&format!(
            "UPDATE companies SET is_approved = TRUE WHERE email = $1 \
             RETURNING {COMPANY_COLUMNS}"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn assign_supervisor(
        &self,
        student_id: &str,
        supervisor_email: &str,
    ) -> Result<AssignOutcome> {
        let assigned = sqlx::query_as::<_, Student>(&format!(
            "UPDATE students SET supervisor_email = $2 \
             WHERE student_id = $1 AND supervisor_email IS NULL \
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(student_id)
        .bind(supervisor_email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "Student already has a supervisor"))?;

        if let Some(student) = assigned {
            return Ok(AssignOutcome::Assigned(student));
        }

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM students WHERE student_id = $1)",
        )
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(if exists {
            AssignOutcome::AlreadyAssigned
        } else {
            AssignOutcome::StudentNotFound
        })
    }

    async fn list_students_by_supervisor(&self, supervisor_email: &str) -> Result<Vec<Student>> {
        Ok(sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE supervisor_email = $1 \
             ORDER BY created_at DESC"
        ))
        .bind(supervisor_email)
        .fetch_all(&self.pool)
        .await?)
    }

    async fn find_internship(&self, id: Uuid) -> Result<Option<Internship>> {
        Ok(sqlx::query_as::<_, Internship>(&format!(
            "SELECT {INTERNSHIP_COLUMNS} FROM internships WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn find_internship_by_student(&self, student_id: &str) -> Result<Option<Internship>> {
        Ok(sqlx::query_as::<_, Internship>(&format!(
            "SELECT {INTERNSHIP_COLUMNS} FROM internships WHERE student_id = $1"
        ))
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?)
    }

    async fn list_internships(&self) -> Result<Vec<Internship>> {
        Ok(sqlx::query_as::<_, Internship>(&format!(
            "SELECT {INTERNSHIP_COLUMNS} FROM internships ORDER BY updated_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?)
    }

    #[instrument(skip(self, submission), fields(student_id = %submission.student_id))]
    async fn save_internship(
        &self,
        submission: InternshipSubmission,
        status: InternshipStatus,
    ) -> Result<Internship> {
        sqlx::query_as::<_, Internship>(&format!(
            "INSERT INTO internships (id, student_id, company_email, status, start_date, \
                 end_date, allowance, com_supervisor_name, com_supervisor_email) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (student_id) DO UPDATE SET \
                 company_email = EXCLUDED.company_email, \
                 status = EXCLUDED.status, \
                 start_date = EXCLUDED.start_date, \
                 end_date = EXCLUDED.end_date, \
                 allowance = EXCLUDED.allowance, \
                 com_supervisor_name = EXCLUDED.com_supervisor_name, \
                 com_supervisor_email = EXCLUDED.com_supervisor_email, \
                 updated_at = NOW() \
             RETURNING {INTERNSHIP_COLUMNS}"
        ))
        .bind(Uuid::new_v4())
        .bind(&submission.student_id)
        .bind(&submission.company_email)
        .bind(status)
        .bind(submission.start_date)
        .bind(submission.end_date)
        .bind(submission.allowance)
        .bind(&submission.com_supervisor_name)
        .bind(&submission.com_supervisor_email)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "Internship already exists"))
    }

    #[instrument(skip(self))]
    async fn set_internship_status(
        &self,
        id: Uuid,
        status: InternshipStatus,
        only_from: Option<InternshipStatus>,
    ) -> Result<Option<Internship>> {
        Ok(sqlx::query_as::<_, Internship>(&format!(
            "UPDATE internships SET status = $2, updated_at = NOW() \
             WHERE id = $1 AND ($3::internship_status IS NULL OR status = $3) \
             RETURNING {INTERNSHIP_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .bind(only_from)
        .fetch_optional(&self.pool)
        .await?)
    }

    #[instrument(skip(self, fields))]
    async fn create_job(&self, company_email: &str, fields: JobFields) -> Result<Job> {
        sqlx::query_as::<_, Job>(&format!(
            "WITH j AS ( \
                 INSERT INTO jobs (id, company_email, title, location, salary, description) \
                 VALUES ($1, $2, $3, $4, $5, $6) RETURNING * \
             ) \
             SELECT {JOB_PROJECTION} FROM j JOIN companies c ON c.email = j.company_email"
        ))
        .bind(Uuid::new_v4())
        .bind(company_email)
        .bind(&fields.title)
        .bind(&fields.location)
        .bind(&fields.salary)
        .bind(&fields.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| StoreError::from_sqlx(e, "Job already exists"))
    }

    async fn list_jobs(&self, company_email: Option<&str>) -> Result<Vec<Job>> {
        Ok(sqlx::query_as::<_, Job>(&format!(
            "SELECT {JOB_PROJECTION} FROM jobs j JOIN companies c ON c.email = j.company_email \
             WHERE ($1::TEXT IS NULL OR j.company_email = $1) \
             ORDER BY j.posted_at DESC"
        ))
        .bind(company_email)
        .fetch_all(&self.pool)
        .await?)
    }

    #[instrument(skip(self, fields))]
    async fn update_job(
        &self,
        company_email: &str,
        job_id: Uuid,
        fields: JobFields,
    ) -> Result<Option<Job>> {
        Ok(sqlx::query_as::<_, Job>(&format!(
            "WITH j AS ( \
                 UPDATE jobs SET title = $3, location = $4, salary = $5, description = $6 \
                 WHERE id = $1 AND company_email = $2 RETURNING * \
             ) \
             SELECT {JOB_PROJECTION} FROM j JOIN companies c ON c.email = j.company_email"
        ))
        .bind(job_id)
        .bind(company_email)
        .bind(&fields.title)
        .bind(&fields.location)
        .bind(&fields.salary)
        .bind(&fields.description)
        .fetch_optional(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn delete_job(&self, company_email: &str, job_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM jobs WHERE id = $1 AND company_email = $2")
            .bind(job_id)
            .bind(company_email)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[instrument(skip(self, fields))]
    async fn create_announcement(&self, fields: AnnouncementFields) -> Result<Announcement> {
        Ok(sqlx::query_as::<_, Announcement>(
            r#"INSERT INTO announcements (id, title, content)
               VALUES ($1, $2, $3)
               RETURNING id, title, content, posted_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(&fields.title)
        .bind(&fields.content)
        .fetch_one(&self.pool)
        .await?)
    }

    async fn list_announcements(&self) -> Result<Vec<Announcement>> {
        Ok(sqlx::query_as::<_, Announcement>(
            "SELECT id, title, content, posted_at FROM announcements ORDER BY posted_at DESC",
        )
        .fetch_all(&self.pool)
        .await?)
    }

    #[instrument(skip(self, fields))]
    async fn update_announcement(
        &self,
        id: Uuid,
        fields: AnnouncementFields,
    ) -> Result<Option<Announcement>> {
        Ok(sqlx::query_as::<_, Announcement>(
            r#"UPDATE announcements SET title = $2, content = $3
               WHERE id = $1
               RETURNING id, title, content, posted_at"#,
        )
        .bind(id)
        .bind(&fields.title)
        .bind(&fields.content)
        .fetch_optional(&self.pool)
        .await?)
    }

    #[instrument(skip(self))]
    async fn delete_announcement(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM announcements WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
