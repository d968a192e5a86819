mod common;

use axum::http::StatusCode;
use common::{cookie_for, expired_cookie_for, spawn_app};
use internlink_auth::Role;
use internlink_core::hash_password;
use internlink_db::Store;
use serde_json::json;

/// A route each role's guard protects, and the account seeded for it.
const GUARDED: [(Role, &str, &str); 4] = [
    (Role::Admin, "/api/admins/students", "admin@uni.edu"),
    (Role::Supervisor, "/api/students", "sup@uni.edu"),
    (Role::Student, "/api/companies", "stu@uni.edu"),
    (Role::Company, "/api/companies/jobs", "hr@acme.io"),
];

async fn seeded_app() -> common::TestApp {
    let app = spawn_app();
    app.seed_admin("admin@uni.edu").await;
    app.seed_supervisor("sup@uni.edu").await;
    app.seed_student("S1", "stu@uni.edu").await;
    app.seed_company("hr@acme.io", "Acme").await;
    app
}

#[tokio::test]
async fn test_health_check() {
    let app = spawn_app();
    let response = app.get("/", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["message"], "The API server is running!");
}

#[tokio::test]
async fn test_guard_accepts_valid_session() {
    let app = seeded_app().await;
    for (role, uri, email) in GUARDED {
        let response = app.get(uri, Some(&cookie_for(role, email))).await;
        assert_eq!(response.status, StatusCode::OK, "{role} on {uri}");
        assert_eq!(response.json()["success"], true);
    }
}

#[tokio::test]
async fn test_guard_rejects_missing_cookie() {
    let app = seeded_app().await;
    for (role, uri, _) in GUARDED {
        let response = app.get(uri, None).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        let body = response.json();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], format!("{} is not logged in", role.title()));
    }
}

#[tokio::test]
async fn test_guard_rejects_empty_and_malformed_tokens() {
    let app = seeded_app().await;
    for (role, uri, _) in GUARDED {
        let empty = app.get(uri, Some(&format!("{}=", role.cookie_name()))).await;
        assert_eq!(empty.status, StatusCode::UNAUTHORIZED);

        let garbage = app
            .get(uri, Some(&format!("{}=not.a.token", role.cookie_name())))
            .await;
        assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
        assert_eq!(garbage.json()["message"], "Invalid session token");
    }
}

#[tokio::test]
async fn test_guard_rejects_expired_tokens() {
    let app = seeded_app().await;
    for (role, uri, email) in GUARDED {
        let response = app.get(uri, Some(&expired_cookie_for(role, email))).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.json()["message"], "Session expired");
    }
}

#[tokio::test]
async fn test_guard_rejects_deleted_principal() {
    let app = seeded_app().await;
    for (role, uri, email) in GUARDED {
        let cookie = cookie_for(role, email);
        assert!(app.store.delete_principal(role, email).await);

        let response = app.get(uri, Some(&cookie)).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.json()["message"], format!("Unauthorized {}", role));
    }
}

#[tokio::test]
async fn test_token_of_another_role_is_unauthorized() {
    let app = seeded_app().await;
    // A student token smuggled into the admin cookie.
    let token = cookie_for(Role::Student, "stu@uni.edu");
    let smuggled = token.replacen(Role::Student.cookie_name(), Role::Admin.cookie_name(), 1);

    let response = app.get("/api/admins/students", Some(&smuggled)).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["message"], "Unauthorized admin");
}

#[tokio::test]
async fn test_me_is_soft_without_session() {
    let app = seeded_app().await;
    for (role, _, email) in GUARDED {
        let uri = format!("/api/{}/me", match role {
            Role::Admin => "admins",
            Role::Supervisor => "supervisors",
            Role::Student => "students",
            Role::Company => "companies",
        });

        let missing = app.get(&uri, None).await;
        assert_eq!(missing.status, StatusCode::OK);
        assert_eq!(missing.json()["success"], false);
        assert_eq!(
            missing.json()["message"],
            format!("{} is not logged in", role.title())
        );

        let expired = app.get(&uri, Some(&expired_cookie_for(role, email))).await;
        assert_eq!(expired.status, StatusCode::OK);
        assert_eq!(expired.json()["success"], false);

        let ok = app.get(&uri, Some(&cookie_for(role, email))).await;
        assert_eq!(ok.json()["message"], format!("Authorized {}", role));
        assert_eq!(ok.json()["data"]["email"], email);

        app.store.delete_principal(role, email).await;
        let gone = app.get(&uri, Some(&cookie_for(role, email))).await;
        assert_eq!(gone.status, StatusCode::UNAUTHORIZED);
    }
}

#[tokio::test]
async fn test_admin_login_sets_cookie_and_logout_clears_it() {
    let app = spawn_app();
    let hash = hash_password("correct horse").unwrap();
    app.store.create_admin("root@uni.edu", &hash).await.unwrap();

    let wrong = app
        .post(
            "/api/admins/login",
            json!({ "email": "root@uni.edu", "password": "nope" }),
            None,
        )
        .await;
    assert_eq!(wrong.status, StatusCode::OK);
    assert_eq!(wrong.json()["success"], false);
    assert_eq!(wrong.json()["message"], "Invalid email or password");
    assert!(wrong.set_cookie(Role::Admin).is_none());

    let login = app
        .post(
            "/api/admins/login",
            json!({ "email": "root@uni.edu", "password": "correct horse" }),
            None,
        )
        .await;
    let body = login.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Admin logged in successfully");
    assert!(body["access_token"].is_string());

    let set_cookie = login.set_cookie(Role::Admin).unwrap();
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=None"));
    assert!(set_cookie.contains("Path=/"));

    let cookie = login.session_cookie(Role::Admin).unwrap();
    let me = app.get("/api/admins/me", Some(&cookie)).await;
    assert_eq!(me.json()["data"]["email"], "root@uni.edu");

    let logout = app.post("/api/admins/logout", json!({}), Some(&cookie)).await;
    assert_eq!(logout.json()["message"], "Admin logged out successfully");
    let cleared = logout.set_cookie(Role::Admin).unwrap();
    assert!(cleared.starts_with("access_token_admin=;"));
    assert!(cleared.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_student_signup_and_login_with_ic_number() {
    let app = spawn_app();

    let signup = app
        .post(
            "/api/students/signup",
            json!({
                "studentId": "B0319",
                "email": "b0319@uni.edu",
                "fullName": "Bea Tan",
                "icNumber": "990101-14-5566",
            }),
            None,
        )
        .await;
    assert_eq!(signup.json()["message"], "Student added successfully");

    let duplicate = app
        .post(
            "/api/students/signup",
            json!({
                "studentId": "B0319",
                "email": "other@uni.edu",
                "fullName": "Bea Again",
                "icNumber": "1",
            }),
            None,
        )
        .await;
    assert_eq!(duplicate.json()["success"], false);
    assert_eq!(duplicate.json()["message"], "Student already exists");

    let missing = app
        .post("/api/students/signup", json!({ "studentId": "B1" }), None)
        .await;
    assert_eq!(missing.json()["message"], "Missing required fields");

    let bad_ic = app
        .post(
            "/api/students/login",
            json!({ "email": "b0319@uni.edu", "icNumber": "000000" }),
            None,
        )
        .await;
    assert_eq!(bad_ic.json()["message"], "Invalid IC Number");

    let unknown = app
        .post(
            "/api/students/login",
            json!({ "email": "ghost@uni.edu", "icNumber": "000000" }),
            None,
        )
        .await;
    assert_eq!(unknown.json()["message"], "Student not found");

    let login = app
        .post(
            "/api/students/login",
            json!({ "email": "b0319@uni.edu", "icNumber": "990101-14-5566" }),
            None,
        )
        .await;
    let body = login.json();
    assert_eq!(body["message"], "Student logged in successfully");
    assert_eq!(body["data"]["studentId"], "B0319");
    assert!(body["data"]["internship"].is_null());

    let cookie = login.session_cookie(Role::Student).unwrap();
    let me = app.get("/api/students/me", Some(&cookie)).await;
    assert_eq!(me.json()["message"], "Authorized student");
    assert_eq!(me.json()["data"]["fullName"], "Bea Tan");
}
