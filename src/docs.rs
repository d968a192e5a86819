use utoipa::OpenApi;

use internlink_auth::Role;
use internlink_core::MessageResponse;
use internlink_models::announcements::{
    Announcement, AnnouncementFields, DeleteAnnouncementRequest, UpdateAnnouncementRequest,
};
use internlink_models::approvals::{ApprovalStatus, ApproveAccountRequest};
use internlink_models::auth::PasswordLoginRequest;
use internlink_models::companies::CompanySignupRequest;
use internlink_models::internships::{
    CompanyContact, InternshipStatus, InternshipView, ReviewInternshipRequest,
    SubmitInternshipRequest,
};
use internlink_models::jobs::{DeleteJobRequest, Job, JobFields, UpdateJobRequest};
use internlink_models::progress_reports::ProgressReport;
use internlink_models::students::{
    AssignedStudent, StudentLoginRequest, StudentProfile, StudentSignupRequest, SupervisorContact,
};
use internlink_models::supervisors::{AssignStudentRequest, SupervisorSignupRequest};
use internlink_models::{Admin, Company, Student, Supervisor};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::admins::controller::login,
        crate::modules::admins::controller::me,
        crate::modules::admins::controller::logout,
        crate::modules::admins::controller::list_students,
        crate::modules::admins::controller::approve_internship,
        crate::modules::admins::controller::reject_internship,
        crate::modules::announcements::controller::list_announcements,
        crate::modules::announcements::controller::admin_list_announcements,
        crate::modules::announcements::controller::create_announcement,
        crate::modules::announcements::controller::update_announcement,
        crate::modules::announcements::controller::delete_announcement,
        crate::modules::students::controller::signup,
        crate::modules::students::controller::login,
        crate::modules::students::controller::me,
        crate::modules::students::controller::logout,
        crate::modules::students::controller::list_students,
        crate::modules::students::controller::submit_internship,
        crate::modules::progress_reports::controller::upload_progress_report,
        crate::modules::progress_reports::controller::get_progress_report,
        crate::modules::supervisors::controller::signup,
        crate::modules::supervisors::controller::login,
        crate::modules::supervisors::controller::me,
        crate::modules::supervisors::controller::logout,
        crate::modules::supervisors::controller::list_supervisors,
        crate::modules::supervisors::controller::assign_student,
        crate::modules::supervisors::controller::my_students,
        crate::modules::approvals::controller::approve_supervisor,
        crate::modules::approvals::controller::approve_company,
        crate::modules::companies::controller::signup,
        crate::modules::companies::controller::login,
        crate::modules::companies::controller::me,
        crate::modules::companies::controller::logout,
        crate::modules::companies::controller::list_companies,
        crate::modules::jobs::controller::job_board,
        crate::modules::jobs::controller::list_jobs,
        crate::modules::jobs::controller::create_job,
        crate::modules::jobs::controller::update_job,
        crate::modules::jobs::controller::delete_job,
        crate::modules::files::controller::download,
    ),
    components(
        schemas(
            Role,
            MessageResponse,
            Admin,
            Supervisor,
            Company,
            Student,
            StudentProfile,
            SupervisorContact,
            AssignedStudent,
            ApprovalStatus,
            InternshipStatus,
            InternshipView,
            CompanyContact,
            Job,
            Announcement,
            ProgressReport,
            PasswordLoginRequest,
            StudentSignupRequest,
            StudentLoginRequest,
            SupervisorSignupRequest,
            CompanySignupRequest,
            ApproveAccountRequest,
            AssignStudentRequest,
            SubmitInternshipRequest,
            ReviewInternshipRequest,
            JobFields,
            UpdateJobRequest,
            DeleteJobRequest,
            AnnouncementFields,
            UpdateAnnouncementRequest,
            DeleteAnnouncementRequest,
        )
    ),
    tags(
        (name = "Admins", description = "Admin sessions and student overview"),
        (name = "Students", description = "Student accounts and sessions"),
        (name = "Supervisors", description = "Supervisor accounts, sessions and assignments"),
        (name = "Companies", description = "Company accounts and sessions"),
        (name = "Approvals", description = "Onboarding approval of supervisors and companies"),
        (name = "Internships", description = "Internship submission and review"),
        (name = "Progress reports", description = "Student progress report uploads"),
        (name = "Jobs", description = "Company job postings"),
        (name = "Announcements", description = "Admin announcements"),
        (name = "Files", description = "Signed object downloads"),
    ),
    info(
        title = "InternLink API",
        version = "0.1.0",
        description = "Internship management for students, supervisors, companies and admins. Sessions are carried by per-role `access_token_<role>` cookies."
    )
)]
pub struct ApiDoc;
