use anyhow::anyhow;
use tracing::{info, instrument};
use uuid::Uuid;

use internlink_core::AppError;
use internlink_db::Store;
use internlink_models::Company;
use internlink_models::jobs::{Job, JobFields};

fn job_not_found() -> AppError {
    AppError::not_found(anyhow!("Job not found"))
}

/// Job postings. A company only ever sees and changes its own.
pub struct JobService;

impl JobService {
    #[instrument(skip(store, company, posting), fields(company = %company.email))]
    pub async fn create(store: &dyn Store, company: &Company, posting: JobFields) -> Result<Job, AppError> {
        let job = store.create_job(&company.email, posting).await?;
        info!(job_id = %job.job_id, "Job posted");
        Ok(job)
    }

    pub async fn list_for_company(store: &dyn Store, company: &Company) -> Result<Vec<Job>, AppError> {
        Ok(store.list_jobs(Some(&company.email)).await?)
    }

    pub async fn list_all(store: &dyn Store) -> Result<Vec<Job>, AppError> {
        Ok(store.list_jobs(None).await?)
    }

    #[instrument(skip(store, company, posting), fields(company = %company.email))]
    pub async fn update(
        store: &dyn Store,
        company: &Company,
        job_id: Uuid,
        posting: JobFields,
    ) -> Result<Job, AppError> {
        store
            .update_job(&company.email, job_id, posting)
            .await?
            .ok_or_else(job_not_found)
    }

    #[instrument(skip(store, company), fields(company = %company.email))]
    pub async fn delete(store: &dyn Store, company: &Company, job_id: Uuid) -> Result<(), AppError> {
        if !store.delete_job(&company.email, job_id).await? {
            return Err(job_not_found());
        }
        info!("Job deleted");
        Ok(())
    }
}
