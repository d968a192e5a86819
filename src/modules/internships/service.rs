use anyhow::anyhow;
use tracing::{info, instrument};
use uuid::Uuid;

use internlink_core::AppError;
use internlink_db::Store;
use internlink_models::internships::{
    CompanyContact, InternshipSubmission, InternshipView, ReviewPolicy, SubmitInternshipRequest,
};
use internlink_models::{
    Internship, InternshipEvent, Student, TransitionError, review_precondition, transition,
};
use internlink_observability::track_internship_transition;

fn transition_error(err: TransitionError) -> AppError {
    match err {
        TransitionError::NotFound => AppError::not_found(err),
        TransitionError::AlreadyReviewed(_) => AppError::conflict(err),
    }
}

pub struct InternshipService;

impl InternshipService {
    /// Creates the student's internship, or replaces every detail of the
    /// existing one, and puts it back into review.
    #[instrument(skip(store, student, request), fields(student_id = %student.student_id))]
    pub async fn submit(
        store: &dyn Store,
        student: &Student,
        request: SubmitInternshipRequest,
        policy: ReviewPolicy,
    ) -> Result<InternshipView, AppError> {
        let current = store.find_internship_by_student(&student.student_id).await?;
        let status = transition(current.map(|i| i.status), InternshipEvent::Submit, policy)
            .map_err(transition_error)?;

        let company = store
            .find_company(&request.company_email)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Company not found")))?;

        let submission = InternshipSubmission::new(student.student_id.clone(), request);
        let internship = store.save_internship(submission, status).await?;

        track_internship_transition(InternshipEvent::Submit.as_str(), status.as_str());
        info!(internship_id = %internship.id, "Internship submitted");

        Ok(InternshipView::new(
            internship,
            CompanyContact {
                company_name: company.company_name,
                email: company.email,
            },
        ))
    }

    /// Applies an admin's `Approve` or `Reject`.
    #[instrument(skip(store))]
    pub async fn review(
        store: &dyn Store,
        internship_id: Uuid,
        event: InternshipEvent,
        policy: ReviewPolicy,
    ) -> Result<InternshipView, AppError> {
        let current = store.find_internship(internship_id).await?;
        let status = transition(current.map(|i| i.status), event, policy)
            .map_err(transition_error)?;

        let updated = store
            .set_internship_status(internship_id, status, review_precondition(policy))
            .await?;
        let Some(internship) = updated else {
            // Reviewed or removed by another request since it was read.
            let err = match store.find_internship(internship_id).await? {
                Some(current) => TransitionError::AlreadyReviewed(current.status),
                None => TransitionError::NotFound,
            };
            return Err(transition_error(err));
        };

        track_internship_transition(event.as_str(), status.as_str());
        info!(status = status.as_str(), "Internship reviewed");

        Self::with_company(store, internship).await
    }

    pub async fn view_for_student(
        store: &dyn Store,
        student_id: &str,
    ) -> Result<Option<InternshipView>, AppError> {
        match store.find_internship_by_student(student_id).await? {
            Some(internship) => Ok(Some(Self::with_company(store, internship).await?)),
            None => Ok(None),
        }
    }

    async fn with_company(
        store: &dyn Store,
        internship: Internship,
    ) -> Result<InternshipView, AppError> {
        let company_name = store
            .find_company(&internship.company_email)
            .await?
            .map(|company| company.company_name)
            .unwrap_or_default();
        let contact = CompanyContact {
            company_name,
            email: internship.company_email.clone(),
        };
        Ok(InternshipView::new(internship, contact))
    }
}
