use tracing::{info, instrument};

use internlink_core::AppError;
use internlink_db::Store;
use internlink_models::Student;
use internlink_models::students::{NewStudent, StudentProfile, SupervisorContact};

use crate::modules::internships::service::InternshipService;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(store, student), fields(student_id = %student.student_id))]
    pub async fn signup(store: &dyn Store, student: NewStudent) -> Result<Student, AppError> {
        let student = store.create_student(student).await?;
        info!("Student signed up");
        Ok(student)
    }

    /// The student with their supervisor and internship.
    pub async fn profile(store: &dyn Store, student: Student) -> Result<StudentProfile, AppError> {
        let supervisor = match student.supervisor_email.as_deref() {
            Some(email) => store.find_supervisor(email).await?.map(SupervisorContact::from),
            None => None,
        };
        let internship = InternshipService::view_for_student(store, &student.student_id).await?;

        Ok(StudentProfile::new(student, supervisor, internship))
    }

    #[instrument(skip(store))]
    pub async fn list_profiles(store: &dyn Store) -> Result<Vec<StudentProfile>, AppError> {
        let students = store.list_students().await?;
        let mut profiles = Vec::with_capacity(students.len());
        for student in students {
            profiles.push(Self::profile(store, student).await?);
        }
        Ok(profiles)
    }
}
