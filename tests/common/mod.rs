#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use internlink::router::init_router;
use internlink::state::AppState;
use internlink_auth::{Role, TokenExpiry, issue_token};
use internlink_config::{CookieConfig, CorsConfig, JwtConfig, ReviewPolicy, StorageConfig};
use internlink_core::{LocalObjectStore, UrlSigner};
use internlink_db::{MemoryStore, Store};
use internlink_models::companies::NewCompany;
use internlink_models::students::NewStudent;
use internlink_models::supervisors::NewSupervisor;

pub const FILES_HOST: &str = "http://internlink.test";
pub const MULTIPART_BOUNDARY: &str = "internlink-test-boundary";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "integration-test-secret".to_string(),
        session_ttl: 3600,
        student_tokens_expire: false,
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
    storage_dir: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.storage_dir);
    }
}

pub fn spawn_app() -> TestApp {
    spawn_app_with(ReviewPolicy::Permissive)
}

pub fn spawn_app_with(review_policy: ReviewPolicy) -> TestApp {
    let store = Arc::new(MemoryStore::new());
    let storage_dir = std::env::temp_dir().join(format!("internlink-test-{}", Uuid::new_v4()));

    let storage_config = StorageConfig {
        root_dir: storage_dir.clone(),
        public_base_url: format!("{}/files", FILES_HOST),
        signing_secret: "storage-test-secret".to_string(),
        presign_ttl: 3600,
        max_upload_bytes: 1024 * 1024,
    };
    let url_signer = UrlSigner::new(storage_config.signing_secret.as_bytes()).unwrap();
    let objects = Arc::new(LocalObjectStore::with_max_size(
        storage_dir.clone(),
        storage_config.public_base_url.clone(),
        url_signer.clone(),
        storage_config.max_upload_bytes,
    ));

    let state = AppState {
        store: store.clone(),
        objects,
        url_signer,
        jwt_config: jwt_config(),
        cookie_config: CookieConfig::default(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        storage_config,
        review_policy,
    };

    TestApp {
        router: init_router(state, None),
        store,
        storage_dir,
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub bytes: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.bytes).unwrap()
    }

    /// `name=value` of the cookie set for `role`.
    pub fn session_cookie(&self, role: Role) -> Option<String> {
        self.set_cookie(role)
            .and_then(|raw| raw.split(';').next().map(str::to_string))
    }

    /// Full `Set-Cookie` header for `role`.
    pub fn set_cookie(&self, role: Role) -> Option<String> {
        self.headers
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .find(|value| value.starts_with(&format!("{}=", role.cookie_name())))
            .map(str::to_string)
    }
}

impl TestApp {
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        TestResponse {
            status,
            headers,
            bytes,
        }
    }

    pub async fn get(&self, uri: &str, cookie: Option<&str>) -> TestResponse {
        self.send(request("GET", uri, None, cookie)).await
    }

    pub async fn post(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.send(request("POST", uri, Some(body), cookie)).await
    }

    pub async fn put(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.send(request("PUT", uri, Some(body), cookie)).await
    }

    pub async fn delete(&self, uri: &str, body: Value, cookie: Option<&str>) -> TestResponse {
        self.send(request("DELETE", uri, Some(body), cookie)).await
    }

    pub async fn seed_admin(&self, email: &str) -> String {
        self.store.create_admin(email, "unused-hash").await.unwrap();
        cookie_for(Role::Admin, email)
    }

    pub async fn seed_supervisor(&self, email: &str) -> String {
        self.store
            .create_supervisor(NewSupervisor {
                email: email.to_string(),
                full_name: format!("Dr {}", email),
                password_hash: "unused-hash".to_string(),
            })
            .await
            .unwrap();
        cookie_for(Role::Supervisor, email)
    }

    pub async fn seed_company(&self, email: &str, name: &str) -> String {
        self.store
            .create_company(NewCompany {
                email: email.to_string(),
                company_name: name.to_string(),
                password_hash: "unused-hash".to_string(),
            })
            .await
            .unwrap();
        cookie_for(Role::Company, email)
    }

    pub async fn seed_student(&self, student_id: &str, email: &str) -> String {
        self.store
            .create_student(NewStudent {
                student_id: student_id.to_string(),
                email: email.to_string(),
                full_name: format!("Student {}", student_id),
                ic_number: format!("IC-{}", student_id),
            })
            .await
            .unwrap();
        cookie_for(Role::Student, email)
    }
}

pub fn request(method: &str, uri: &str, body: Option<Value>, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Multipart upload with one file field.
pub fn multipart_request(
    uri: &str,
    field: &str,
    file_name: &str,
    content: &[u8],
    cookie: &str,
) -> Request<Body> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            field, file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/pdf\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Cookie header for a session of `email`, as a login would set it.
pub fn cookie_for(role: Role, email: &str) -> String {
    let now = Utc::now().timestamp();
    let token = issue_token(
        email,
        role,
        TokenExpiry::for_role(role, &jwt_config()),
        &jwt_config(),
        now,
    )
    .unwrap();
    format!("{}={}", role.cookie_name(), token)
}

/// Cookie header carrying a token that expired an hour ago.
pub fn expired_cookie_for(role: Role, email: &str) -> String {
    let issued = Utc::now().timestamp() - 7200;
    let token = issue_token(email, role, TokenExpiry::After(3600), &jwt_config(), issued).unwrap();
    format!("{}={}", role.cookie_name(), token)
}

pub fn internship_body(company_email: &str, allowance: Value) -> Value {
    serde_json::json!({
        "startDate": "2024-03-01T00:00:00.000Z",
        "endDate": "2024-08-31T00:00:00.000Z",
        "companyEmail": company_email,
        "allowance": allowance,
        "comSupervisorName": "Jane Doe",
        "comSupervisorEmail": "jane@company.example",
    })
}
