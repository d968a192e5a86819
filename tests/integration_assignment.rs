mod common;

use axum::http::StatusCode;
use common::{internship_body, request, spawn_app};
use serde_json::json;

#[tokio::test]
async fn test_assign_and_list_my_students() {
    let app = spawn_app();
    let supervisor = app.seed_supervisor("sup@uni.edu").await;
    app.seed_company("hr@acme.io", "Acme").await;
    let student = app.seed_student("S1", "s1@uni.edu").await;
    app.seed_student("S2", "s2@uni.edu").await;

    app.post(
        "/api/students/submit-internship",
        internship_body("hr@acme.io", json!(300)),
        Some(&student),
    )
    .await;

    let assigned = app
        .post(
            "/api/supervisors/assign-student",
            json!({ "studentId": "S1" }),
            Some(&supervisor),
        )
        .await
        .json();
    assert_eq!(assigned["success"], true);
    assert_eq!(assigned["message"], "Student assigned successfully");
    assert_eq!(assigned["data"]["studentId"], "S1");

    let mine = app
        .get("/api/supervisors/my-students", Some(&supervisor))
        .await
        .json();
    let students = mine["data"].as_array().unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0]["studentId"], "S1");
    assert_eq!(students[0]["internship"]["status"], "SUBMITTED");
    assert!(students[0]["downloadUrl"].is_null());

    let me = app.get("/api/students/me", Some(&student)).await.json();
    assert_eq!(me["data"]["supervisor"]["email"], "sup@uni.edu");
}

#[tokio::test]
async fn test_student_is_never_reassigned() {
    let app = spawn_app();
    let first = app.seed_supervisor("first@uni.edu").await;
    let second = app.seed_supervisor("second@uni.edu").await;
    app.seed_student("S1", "s1@uni.edu").await;

    app.post(
        "/api/supervisors/assign-student",
        json!({ "studentId": "S1" }),
        Some(&first),
    )
    .await;

    let again = app
        .post(
            "/api/supervisors/assign-student",
            json!({ "studentId": "S1" }),
            Some(&second),
        )
        .await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.json()["success"], false);
    assert_eq!(again.json()["message"], "Student already has a supervisor");

    let mine = app
        .get("/api/supervisors/my-students", Some(&second))
        .await
        .json();
    assert!(mine["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_assignment_has_one_winner() {
    let app = spawn_app();
    let a = app.seed_supervisor("a@uni.edu").await;
    let b = app.seed_supervisor("b@uni.edu").await;
    app.seed_student("S1", "s1@uni.edu").await;

    let body = json!({ "studentId": "S1" });
    let (first, second) = tokio::join!(
        app.send(request("POST", "/api/supervisors/assign-student", Some(body.clone()), Some(&a))),
        app.send(request("POST", "/api/supervisors/assign-student", Some(body), Some(&b))),
    );

    let outcomes = [first.json(), second.json()];
    let winners = outcomes.iter().filter(|o| o["success"] == true).count();
    assert_eq!(winners, 1);
    assert!(
        outcomes
            .iter()
            .any(|o| o["message"] == "Student already has a supervisor")
    );

    let owner = outcomes
        .iter()
        .find(|o| o["success"] == true)
        .and_then(|o| o["data"]["studentId"].as_str())
        .unwrap();
    assert_eq!(owner, "S1");
}

#[tokio::test]
async fn test_assign_unknown_student() {
    let app = spawn_app();
    let supervisor = app.seed_supervisor("sup@uni.edu").await;

    let response = app
        .post(
            "/api/supervisors/assign-student",
            json!({ "studentId": "NOPE" }),
            Some(&supervisor),
        )
        .await
        .json();
    assert_eq!(response["success"], false);
    assert_eq!(response["message"], "Student not found");
}

#[tokio::test]
async fn test_supervisors_list_all_students() {
    let app = spawn_app();
    let supervisor = app.seed_supervisor("sup@uni.edu").await;
    let student = app.seed_student("S1", "s1@uni.edu").await;

    let listed = app.get("/api/students", Some(&supervisor)).await.json();
    assert_eq!(listed["message"], "Students fetched successfully");
    assert_eq!(listed["data"][0]["icNumber"], "IC-S1");

    let denied = app.get("/api/students", Some(&student)).await;
    assert_eq!(denied.status, StatusCode::UNAUTHORIZED);
}
