use anyhow::anyhow;
use tracing::{info, instrument};

use internlink_auth::Role;
use internlink_core::AppError;
use internlink_db::Store;
use internlink_models::{Company, Supervisor};
use internlink_observability::track_approval;

/// Onboarding approval of supervisors and companies.
///
/// Approval only ever sets the flag; approving twice is not an error.
pub struct ApprovalService;

impl ApprovalService {
    #[instrument(skip(store))]
    pub async fn approve_supervisor(store: &dyn Store, email: &str) -> Result<Supervisor, AppError> {
        let supervisor = store
            .approve_supervisor(email)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Supervisor not found")))?;

        track_approval(Role::Supervisor.as_str());
        info!("Supervisor approved");
        Ok(supervisor)
    }

    #[instrument(skip(store))]
    pub async fn approve_company(store: &dyn Store, email: &str) -> Result<Company, AppError> {
        let company = store
            .approve_company(email)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow!("Company not found")))?;

        track_approval(Role::Company.as_str());
        info!("Company approved");
        Ok(company)
    }
}
