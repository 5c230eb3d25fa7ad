// ABOUTME: HTTP integration tests for the /meals resource
// ABOUTME: Covers nutritional validation, the fat field name, and delete semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Fitlog contributors

#![allow(missing_docs, clippy::unwrap_used)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

fn meal_body(name: &str) -> Value {
    json!({
        "date": "2026-08-07",
        "name": name,
        "carbs": 50,
        "protein": 30,
        "fat": 10,
        "calories": 420
    })
}

// ============================================================================
// Create
// ============================================================================

#[tokio::test]
async fn test_create_meal_returns_201() {
    let app = common::create_test_app().await;

    let response = AxumTestRequest::post("/meals")
        .json(&meal_body("Lunch"))
        .send(app)
        .await;

    assert_eq!(response.status(), 201);
    let body: Value = response.json();
    assert!(body["id"].as_i64().unwrap() >= 1);
    assert_eq!(body["name"], "Lunch");
    // The wire key for fats is "fat"
    assert_eq!(body["fat"], 10);
    assert!(body.get("fats").is_none());
}

#[tokio::test]
async fn test_create_meal_with_all_zero_macros_is_valid() {
    let app = common::create_test_app().await;

    let response = AxumTestRequest::post("/meals")
        .json(&json!({"name": "Water"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 201);
}

#[tokio::test]
async fn test_create_meal_with_negative_macro_is_rejected() {
    let app = common::create_test_app().await;

    for field in ["carbs", "protein", "fat", "calories"] {
        let mut body = meal_body("Bad meal");
        body[field] = json!(-1);

        let response = AxumTestRequest::post("/meals")
            .json(&body)
            .send(app.clone())
            .await;

        assert_eq!(response.status(), 400, "field {field} should be rejected");
        let error: Value = response.json();
        assert_eq!(error, json!({"error": "Invalid input values"}));
    }
}

#[tokio::test]
async fn test_create_meal_with_malformed_body_is_rejected() {
    let app = common::create_test_app().await;

    let response = AxumTestRequest::post("/meals")
        .raw_json("[1, 2")
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid request format");
}

// ============================================================================
// List
// ============================================================================

#[tokio::test]
async fn test_list_meals_newest_first() {
    let app = common::create_test_app().await;

    for name in ["Breakfast", "Lunch", "Dinner"] {
        let response = AxumTestRequest::post("/meals")
            .json(&meal_body(name))
            .send(app.clone())
            .await;
        assert_eq!(response.status(), 201);
    }

    let response = AxumTestRequest::get("/meals").send(app).await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Dinner", "Lunch", "Breakfast"]);
}

// ============================================================================
// Get / Update
// ============================================================================

#[tokio::test]
async fn test_get_unknown_meal_is_404() {
    let app = common::create_test_app().await;

    let response = AxumTestRequest::get("/meals/42").send(app).await;

    assert_eq!(response.status(), 404);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Meal not found"}));
}

#[tokio::test]
async fn test_update_meal_revalidates_replacement() {
    let app = common::create_test_app().await;

    let created: Value = AxumTestRequest::post("/meals")
        .json(&meal_body("Lunch"))
        .send(app.clone())
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let mut replacement = meal_body("Lunch");
    replacement["protein"] = json!(-5);
    let response = AxumTestRequest::put(&format!("/meals/{id}"))
        .json(&replacement)
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid input values");
}

#[tokio::test]
async fn test_update_meal_replaces_every_field() {
    let app = common::create_test_app().await;

    let created: Value = AxumTestRequest::post("/meals")
        .json(&meal_body("Lunch"))
        .send(app.clone())
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let response = AxumTestRequest::put(&format!("/meals/{id}"))
        .json(&json!({
            "date": "2026-08-08",
            "name": "Big lunch",
            "carbs": 80,
            "protein": 45,
            "fat": 20,
            "calories": 700
        }))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json();
    assert_eq!(body["id"].as_i64().unwrap(), id);
    assert_eq!(body["name"], "Big lunch");
    assert_eq!(body["carbs"], 80);
    assert_eq!(body["fat"], 20);
    assert_eq!(body["createdAt"], created["createdAt"]);
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn test_delete_meal_twice_is_200_then_404() {
    let app = common::create_test_app().await;

    let created: Value = AxumTestRequest::post("/meals")
        .json(&meal_body("Snack"))
        .send(app.clone())
        .await
        .json();
    let id = created["id"].as_i64().unwrap();

    let first = AxumTestRequest::delete(&format!("/meals/{id}"))
        .send(app.clone())
        .await;
    assert_eq!(first.status(), 200);
    let body: Value = first.json();
    assert_eq!(body, json!({"message": "Meal deleted successfully"}));

    let second = AxumTestRequest::delete(&format!("/meals/{id}")).send(app).await;
    assert_eq!(second.status(), 404);
    let body: Value = second.json();
    assert_eq!(body, json!({"error": "Meal not found"}));
}

#[tokio::test]
async fn test_delete_meal_with_undefined_sentinel_is_400() {
    let app = common::create_test_app().await;

    let response = AxumTestRequest::delete("/meals/undefined").send(app).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body, json!({"error": "Invalid meal ID"}));
}
