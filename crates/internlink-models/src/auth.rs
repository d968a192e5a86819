use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Login payload for admins, supervisors and companies.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PasswordLoginRequest {
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub email: String,
    #[validate(length(min = 1, message = "Missing required fields"))]
    pub password: String,
}
