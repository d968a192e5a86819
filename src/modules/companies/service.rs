use tracing::{info, instrument};

use internlink_core::{AppError, hash_password};
use internlink_db::Store;
use internlink_models::Company;
use internlink_models::companies::{CompanySignupRequest, NewCompany};

pub struct CompanyService;

impl CompanyService {
    #[instrument(skip(store, request), fields(email = %request.email))]
    pub async fn signup(store: &dyn Store, request: CompanySignupRequest) -> Result<Company, AppError> {
        let password_hash = hash_password(&request.password)?;
        let company = store
            .create_company(NewCompany {
                email: request.email,
                company_name: request.company_name,
                password_hash,
            })
            .await?;

        info!("Company signed up");
        Ok(company)
    }
}
