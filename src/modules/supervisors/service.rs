use anyhow::anyhow;
use tracing::{info, instrument, warn};

use internlink_core::{AppError, ObjectStore, hash_password};
use internlink_db::Store;
use internlink_models::students::AssignedStudent;
use internlink_models::supervisors::{NewSupervisor, SupervisorSignupRequest};
use internlink_models::{AssignOutcome, Student, Supervisor};

use crate::modules::internships::service::InternshipService;
use crate::modules::progress_reports::service::ProgressReportService;

pub struct SupervisorService;

impl SupervisorService {
    #[instrument(skip(store, request), fields(email = %request.email))]
    pub async fn signup(
        store: &dyn Store,
        request: SupervisorSignupRequest,
    ) -> Result<Supervisor, AppError> {
        let password_hash = hash_password(&request.password)?;
        let supervisor = store
            .create_supervisor(NewSupervisor {
                email: request.email,
                full_name: request.full_name,
                password_hash,
            })
            .await?;

        info!("Supervisor signed up");
        Ok(supervisor)
    }

    /// Claims an unassigned student. A student keeps their first supervisor.
    #[instrument(skip(store, supervisor), fields(supervisor = %supervisor.email))]
    pub async fn assign_student(
        store: &dyn Store,
        supervisor: &Supervisor,
        student_id: &str,
    ) -> Result<Student, AppError> {
        match store.assign_supervisor(student_id, &supervisor.email).await? {
            AssignOutcome::Assigned(student) => {
                info!("Student assigned");
                Ok(student)
            }
            AssignOutcome::AlreadyAssigned => Err(AppError::conflict(anyhow!(
                "Student already has a supervisor"
            ))),
            AssignOutcome::StudentNotFound => {
                Err(AppError::not_found(anyhow!("Student not found")))
            }
        }
    }

    /// The supervisor's students with their internship and latest report.
    #[instrument(skip(store, objects, supervisor), fields(supervisor = %supervisor.email))]
    pub async fn my_students(
        store: &dyn Store,
        objects: &dyn ObjectStore,
        supervisor: &Supervisor,
        ttl_secs: u64,
    ) -> Result<Vec<AssignedStudent>, AppError> {
        let students = store.list_students_by_supervisor(&supervisor.email).await?;
        let mut assigned = Vec::with_capacity(students.len());

        for student in students {
            let internship =
                InternshipService::view_for_student(store, &student.student_id).await?;
            let download_url =
                match ProgressReportService::latest(objects, &student.student_id, ttl_secs).await {
                    Ok(report) => report.and_then(|report| report.download_url),
                    Err(e) => {
                        warn!(student_id = %student.student_id, error = %e, "Progress report lookup failed");
                        None
                    }
                };

            assigned.push(AssignedStudent {
                student_id: student.student_id,
                full_name: student.full_name,
                email: student.email,
                internship,
                download_url,
            });
        }

        Ok(assigned)
    }
}
