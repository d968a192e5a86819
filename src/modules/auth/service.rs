use anyhow::anyhow;
use tracing::{info, instrument};

use internlink_auth::{Role, create_session_token};
use internlink_config::JwtConfig;
use internlink_core::{AppError, verify_password};
use internlink_db::Store;
use internlink_models::Student;
use internlink_models::auth::PasswordLoginRequest;
use internlink_models::students::StudentLoginRequest;
use internlink_observability::track_login;

use crate::middleware::SessionPrincipal;

pub struct AuthService;

impl AuthService {
    /// Checks an email/password pair for admins, supervisors and companies
    /// and opens a session for the matching principal.
    #[instrument(skip(store, request, jwt_config), fields(role = %T::ROLE, email = %request.email))]
    pub async fn login_with_password<T: SessionPrincipal>(
        store: &dyn Store,
        request: PasswordLoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(String, T), AppError> {
        let role = T::ROLE;
        let rejected = || {
            track_login(role.as_str(), "failure");
            AppError::invalid_credentials(anyhow!("Invalid email or password"))
        };

        let Some(hash) = store.find_password_hash(role, &request.email).await? else {
            return Err(rejected());
        };

        if !verify_password(&request.password, &hash)? {
            return Err(rejected());
        }

        let principal = store
            .find_principal(role, &request.email)
            .await?
            .and_then(T::from_principal)
            .ok_or_else(rejected)?;

        let token = create_session_token(&request.email, role, jwt_config)?;
        track_login(role.as_str(), "success");
        info!("Login succeeded");

        Ok((token, principal))
    }

    /// Students log in with their email and identity-card number.
    #[instrument(skip(store, request, jwt_config), fields(email = %request.email))]
    pub async fn login_student(
        store: &dyn Store,
        request: StudentLoginRequest,
        jwt_config: &JwtConfig,
    ) -> Result<(String, Student), AppError> {
        let Some(student) = store.find_student(&request.email).await? else {
            track_login(Role::Student.as_str(), "failure");
            return Err(AppError::invalid_credentials(anyhow!("Student not found")));
        };

        if student.ic_number != request.ic_number {
            track_login(Role::Student.as_str(), "failure");
            return Err(AppError::invalid_credentials(anyhow!("Invalid IC Number")));
        }

        let token = create_session_token(&student.email, Role::Student, jwt_config)?;
        track_login(Role::Student.as_str(), "success");
        info!("Login succeeded");

        Ok((token, student))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use internlink_auth::verify_token;
    use internlink_core::{ErrorKind, hash_password};
    use internlink_db::MemoryStore;
    use internlink_models::students::NewStudent;
    use internlink_models::Admin;

    fn jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "auth-service-test".to_string(),
            session_ttl: 3600,
            student_tokens_expire: false,
        }
    }

    #[tokio::test]
    async fn test_password_login() {
        let store = MemoryStore::new();
        let hash = hash_password("hunter22").unwrap();
        store.create_admin("root@uni.edu", &hash).await.unwrap();

        let (token, admin) = AuthService::login_with_password::<Admin>(
            &store,
            PasswordLoginRequest {
                email: "root@uni.edu".to_string(),
                password: "hunter22".to_string(),
            },
            &jwt_config(),
        )
        .await
        .unwrap();

        assert_eq!(admin.email, "root@uni.edu");
        let claims = verify_token(&token, &jwt_config()).unwrap();
        assert_eq!(claims.role, Role::Admin);

        let err = AuthService::login_with_password::<Admin>(
            &store,
            PasswordLoginRequest {
                email: "root@uni.edu".to_string(),
                password: "wrong".to_string(),
            },
            &jwt_config(),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidCredentials);
        assert_eq!(err.message(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_student_login_checks_ic_number() {
        let store = MemoryStore::new();
        store
            .create_student(NewStudent {
                student_id: "B01".to_string(),
                email: "b01@uni.edu".to_string(),
                full_name: "Bea".to_string(),
                ic_number: "010203-04-0506".to_string(),
            })
            .await
            .unwrap();

        let login = |ic: &str| StudentLoginRequest {
            email: "b01@uni.edu".to_string(),
            ic_number: ic.to_string(),
        };

        let (token, student) = AuthService::login_student(&store, login("010203-04-0506"), &jwt_config())
            .await
            .unwrap();
        assert_eq!(student.student_id, "B01");
        assert_eq!(verify_token(&token, &jwt_config()).unwrap().exp, None);

        let err = AuthService::login_student(&store, login("nope"), &jwt_config())
            .await
            .unwrap_err();
        assert_eq!(err.message(), "Invalid IC Number");
    }
}
