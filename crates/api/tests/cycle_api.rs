//! HTTP-level tests for the `/project/{project_id}/cycle` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json_auth, tester_auth, TEST_USERNAME};
use serde_json::json;
use sherlock_db::models::scenario::CreateScenarioWithCases;
use sherlock_db::models::case::Case;
use sherlock_db::repositories::{CycleHistoryRepo, ScenarioRepo};
use sqlx::PgPool;

async fn seed_cases(pool: &PgPool, project_id: i64, names: &[&str]) -> Vec<Case> {
    let (_, cases) = ScenarioRepo::create_with_cases(
        pool,
        &CreateScenarioWithCases {
            project_id,
            name: "Login".into(),
            case_names: names.iter().map(|n| n.to_string()).collect(),
        },
    )
    .await
    .unwrap();
    cases
}

async fn start_cycle(app: axum::Router, project_id: i64) -> i64 {
    let response = post_json_auth(
        app,
        &format!("/project/{project_id}/cycle/new"),
        json!({}),
        &tester_auth(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["message"], "CYCLE_CREATED");
    json["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn record_outcomes_and_read_back_detail(pool: PgPool) {
    common::create_test_user(&pool, TEST_USERNAME).await;
    let project = common::create_test_project(&pool, "Checkout").await;
    let cases = seed_cases(&pool, project.id, &["A", "B", "C"]).await;
    let app = common::build_test_app(pool.clone());

    let cycle_id = start_cycle(app.clone(), project.id).await;
    let history_uri = format!("/project/{}/cycle/{cycle_id}/history", project.id);

    for (case, outcome) in cases.iter().zip([" PASS ", "fail", "Skipped"]) {
        let response = post_json_auth(
            app.clone(),
            &history_uri,
            json!({ "case_id": case.id, "outcome": outcome }),
            &tester_auth(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_json(response).await["message"], "OUTCOME_RECORDED");
    }

    let stored = CycleHistoryRepo::list_by_cycle(&pool, cycle_id).await.unwrap();
    assert_eq!(stored[0].outcome, "pass");
    // Outside the known vocabulary, but still stored and counted as "other".
    assert_eq!(stored[2].outcome, "skipped");

    let response = get_auth(
        app,
        &format!("/project/{}/cycle/{cycle_id}", project.id),
        &tester_auth(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], cycle_id);
    assert_eq!(json["total"], 3);
    assert_eq!(json["passed"], 1);
    assert_eq!(json["failed"], 1);
    assert_eq!(json["other"], 1);
    assert_eq!(json["history"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn case_from_another_project_is_rejected(pool: PgPool) {
    common::create_test_user(&pool, TEST_USERNAME).await;
    let project = common::create_test_project(&pool, "Checkout").await;
    let other = common::create_test_project(&pool, "Search").await;
    let foreign = seed_cases(&pool, other.id, &["X"]).await;
    let app = common::build_test_app(pool.clone());

    let cycle_id = start_cycle(app.clone(), project.id).await;
    let response = post_json_auth(
        app,
        &format!("/project/{}/cycle/{cycle_id}/history", project.id),
        json!({ "case_id": foreign[0].id, "outcome": "pass" }),
        &tester_auth(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "VALIDATION_ERROR");
    assert!(CycleHistoryRepo::list_by_cycle(&pool, cycle_id)
        .await
        .unwrap()
        .is_empty());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_outcome_is_rejected(pool: PgPool) {
    common::create_test_user(&pool, TEST_USERNAME).await;
    let project = common::create_test_project(&pool, "Checkout").await;
    let cases = seed_cases(&pool, project.id, &["A"]).await;
    let app = common::build_test_app(pool);

    let cycle_id = start_cycle(app.clone(), project.id).await;
    let response = post_json_auth(
        app,
        &format!("/project/{}/cycle/{cycle_id}/history", project.id),
        json!({ "case_id": cases[0].id, "outcome": "" }),
        &tester_auth(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cycle_of_another_project_is_not_found(pool: PgPool) {
    common::create_test_user(&pool, TEST_USERNAME).await;
    let project = common::create_test_project(&pool, "Checkout").await;
    let other = common::create_test_project(&pool, "Search").await;
    let app = common::build_test_app(pool);

    let foreign_cycle = start_cycle(app.clone(), other.id).await;
    let response = get_auth(
        app,
        &format!("/project/{}/cycle/{foreign_cycle}", project.id),
        &tester_auth(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
