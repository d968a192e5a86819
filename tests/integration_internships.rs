mod common;

use common::{TestApp, internship_body, spawn_app, spawn_app_with};
use internlink_auth::Role;
use internlink_config::ReviewPolicy;
use serde_json::{Value, json};

async fn student_with_internship(app: &TestApp) -> (String, String) {
    app.seed_company("hr@acme.io", "Acme").await;
    let student = app.seed_student("S1", "s1@uni.edu").await;
    let response = app
        .post(
            "/api/students/submit-internship",
            internship_body("hr@acme.io", json!(800)),
            Some(&student),
        )
        .await;
    let id = response.json()["data"]["id"].as_str().unwrap().to_string();
    (student, id)
}

async fn review(app: &TestApp, admin: &str, action: &str, internship_id: &str) -> Value {
    app.post(
        &format!("/api/admins/students/{}", action),
        json!({ "internshipId": internship_id }),
        Some(admin),
    )
    .await
    .json()
}

#[tokio::test]
async fn test_signup_login_submit_approve_flow() {
    let app = spawn_app();
    app.seed_company("hr@acme.io", "Acme").await;
    let admin = app.seed_admin("admin@uni.edu").await;

    app.post(
        "/api/students/signup",
        json!({
            "studentId": "B100",
            "email": "b100@uni.edu",
            "fullName": "Ola Ade",
            "icNumber": "IC-B100",
        }),
        None,
    )
    .await;

    let login = app
        .post(
            "/api/students/login",
            json!({ "email": "b100@uni.edu", "icNumber": "IC-B100" }),
            None,
        )
        .await;
    let student = login.session_cookie(Role::Student).unwrap();

    let companies = app.get("/api/companies", Some(&student)).await.json();
    assert_eq!(companies["data"][0]["companyName"], "Acme");

    let submitted = app
        .post(
            "/api/students/submit-internship",
            internship_body("hr@acme.io", json!("1500.50")),
            Some(&student),
        )
        .await
        .json();
    assert_eq!(submitted["success"], true);
    assert_eq!(submitted["message"], "Internship submitted successfully");
    assert_eq!(submitted["data"]["status"], "SUBMITTED");
    assert_eq!(submitted["data"]["allowance"], 1500.5);
    assert_eq!(submitted["data"]["company"]["companyName"], "Acme");

    let id = submitted["data"]["id"].as_str().unwrap();
    let approved = review(&app, &admin, "approve", id).await;
    assert_eq!(approved["message"], "Internship approved successfully");

    let me = app.get("/api/students/me", Some(&student)).await.json();
    assert_eq!(me["data"]["internship"]["status"], "APPROVED");
    assert_eq!(me["data"]["internship"]["id"], id);

    let overview = app.get("/api/admins/students", Some(&admin)).await.json();
    assert_eq!(overview["message"], "Students fetched successfully");
    assert_eq!(overview["data"][0]["internship"]["status"], "APPROVED");
}

#[tokio::test]
async fn test_resubmission_replaces_every_detail() {
    let app = spawn_app();
    let admin = app.seed_admin("admin@uni.edu").await;
    let (student, id) = student_with_internship(&app).await;
    app.seed_company("jobs@globex.io", "Globex").await;

    review(&app, &admin, "approve", &id).await;

    let resubmitted = app
        .post(
            "/api/students/submit-internship",
            json!({
                "startDate": "2025-01-06T00:00:00Z",
                "endDate": "2025-06-27T00:00:00Z",
                "companyEmail": "jobs@globex.io",
                "allowance": 1200,
                "comSupervisorName": "Max Mustermann",
                "comSupervisorEmail": "max@globex.io",
            }),
            Some(&student),
        )
        .await
        .json();

    let data = &resubmitted["data"];
    assert_eq!(data["id"], id.as_str());
    assert_eq!(data["status"], "SUBMITTED");
    assert_eq!(data["company"]["email"], "jobs@globex.io");
    assert_eq!(data["allowance"], 1200.0);
    assert_eq!(data["comSupervisorName"], "Max Mustermann");
    assert_eq!(data["comSupervisorEmail"], "max@globex.io");
    assert!(data["startDate"].as_str().unwrap().starts_with("2025-01-06"));
}

#[tokio::test]
async fn test_submission_validation() {
    let app = spawn_app();
    app.seed_company("hr@acme.io", "Acme").await;
    let student = app.seed_student("S1", "s1@uni.edu").await;

    let mut missing = internship_body("hr@acme.io", json!(100));
    missing.as_object_mut().unwrap().remove("comSupervisorName");
    let response = app
        .post("/api/students/submit-internship", missing, Some(&student))
        .await
        .json();
    assert_eq!(response["success"], false);
    assert_eq!(response["message"], "Missing required fields");

    let mut reversed = internship_body("hr@acme.io", json!(100));
    reversed["startDate"] = json!("2024-09-01T00:00:00Z");
    let response = app
        .post("/api/students/submit-internship", reversed, Some(&student))
        .await
        .json();
    assert_eq!(response["message"], "End date must not be before start date");

    let response = app
        .post(
            "/api/students/submit-internship",
            internship_body("hr@acme.io", json!(-5)),
            Some(&student),
        )
        .await
        .json();
    assert_eq!(response["message"], "Allowance must not be negative");

    let response = app
        .post(
            "/api/students/submit-internship",
            internship_body("nobody@nowhere.io", json!(10)),
            Some(&student),
        )
        .await
        .json();
    assert_eq!(response["message"], "Company not found");

    let me = app.get("/api/students/me", Some(&student)).await.json();
    assert!(me["data"]["internship"].is_null());
}

#[tokio::test]
async fn test_review_requires_existing_internship() {
    let app = spawn_app();
    let admin = app.seed_admin("admin@uni.edu").await;

    let response = review(&app, &admin, "reject", "6f1c1f0e-9d7a-4a53-9a4e-1f6f3f0c2b11").await;
    assert_eq!(response["success"], false);
    assert_eq!(response["message"], "Internship not found");
}

#[tokio::test]
async fn test_permissive_policy_allows_re_review() {
    let app = spawn_app();
    let admin = app.seed_admin("admin@uni.edu").await;
    let (_, id) = student_with_internship(&app).await;

    assert_eq!(review(&app, &admin, "approve", &id).await["data"]["status"], "APPROVED");
    assert_eq!(review(&app, &admin, "reject", &id).await["data"]["status"], "REJECTED");
}

#[tokio::test]
async fn test_strict_policy_refuses_re_review() {
    let app = spawn_app_with(ReviewPolicy::Strict);
    let admin = app.seed_admin("admin@uni.edu").await;
    let (student, id) = student_with_internship(&app).await;

    review(&app, &admin, "reject", &id).await;
    let again = review(&app, &admin, "approve", &id).await;
    assert_eq!(again["success"], false);
    assert_eq!(again["message"], "Internship has already been rejected");

    // Resubmitting puts it back into review.
    app.post(
        "/api/students/submit-internship",
        internship_body("hr@acme.io", json!(900)),
        Some(&student),
    )
    .await;
    assert_eq!(review(&app, &admin, "approve", &id).await["data"]["status"], "APPROVED");
}

#[tokio::test]
async fn test_only_admins_review() {
    let app = spawn_app();
    let (student, id) = student_with_internship(&app).await;

    let response = app
        .post(
            "/api/admins/students/approve",
            json!({ "internshipId": id }),
            Some(&student),
        )
        .await;
    assert_eq!(response.status, axum::http::StatusCode::UNAUTHORIZED);

    let supervisor = app.seed_supervisor("sup@uni.edu").await;
    let response = app
        .post(
            "/api/admins/students/approve",
            json!({ "internshipId": id }),
            Some(&supervisor),
        )
        .await;
    assert_eq!(response.status, axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["message"], "Admin is not logged in");
}
