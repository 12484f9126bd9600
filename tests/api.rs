use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use foodguide::app::build_app;
use foodguide::state::AppState;
use foodguide::storage::{DirSource, ReferenceSource};

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn state_for(dir: PathBuf) -> AppState {
    let config = Arc::new(AppState::dir_config(dir.clone(), Some(42)));
    let source = Arc::new(DirSource::new(dir)) as Arc<dyn ReferenceSource>;
    AppState::from_parts(config, source)
}

async fn loaded_state() -> AppState {
    let state = state_for(data_dir());
    state.reload().await.expect("sample data loads");
    state
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn add_member(app: &Router, name: &str, age: Value, gender: &str) -> Value {
    let (status, body) = send_json(
        app,
        Method::POST,
        "/api/v1/profiles",
        Some(json!({ "name": name, "age": age, "gender": gender })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

fn foods(slot: &Value) -> Vec<&str> {
    slot.as_array()
        .unwrap()
        .iter()
        .map(|i| i["food"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn health_reports_reference_tables() {
    let app = build_app(loaded_state().await);
    let (status, body) = send_json(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["reference"]["loaded"], true);
    assert_eq!(body["reference"]["tables"]["foods"], 35);
    assert_eq!(body["reference"]["tables"]["food_groups"], 9);
    assert_eq!(body["reference"]["tables"]["serving_requirements"], 64);
    assert_eq!(body["reference"]["tables"]["directional_statements"], 10);
}

#[tokio::test]
async fn missing_data_folder_answers_503_with_hint() {
    let state = state_for(data_dir().join("does-not-exist"));
    assert!(state.reload().await.is_err());
    let app = build_app(state);

    let (status, body) = send(&app, Method::GET, "/api/v1/guidelines", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    let text = String::from_utf8(body).unwrap();
    assert!(text.starts_with("Failed to load food guide data"));
    assert!(text.contains("data folder"));

    let (status, body) = send_json(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reference"]["loaded"], false);

    let (status, _) = send(&app, Method::POST, "/api/v1/reference/reload", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn reload_swaps_in_a_fresh_store() {
    let state = state_for(data_dir());
    let app = build_app(state);

    let (status, _) = send(&app, Method::GET, "/api/v1/guidelines", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, body) = send_json(&app, Method::POST, "/api/v1/reference/reload", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["tables"]["foods"], 35);

    let (status, _) = send(&app, Method::GET, "/api/v1/guidelines", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn guidelines_use_summary_labels() {
    let app = build_app(loaded_state().await);
    let (status, body) = send_json(&app, Method::GET, "/api/v1/guidelines", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[0]["fgid"], "vf");
    assert_eq!(items[0]["label"], "Vegetables & Fruits");
    assert_eq!(
        items[0]["statement"],
        "Eat at least one dark green and one orange vegetable each day."
    );
    assert_eq!(items[5]["label"], "Milk & Alternatives");
    assert_eq!(items[5]["statement"], "Drink skim, 1%, or 2% milk each day.");
}

#[tokio::test]
async fn foods_are_listed_per_group_with_repaired_text() {
    let app = build_app(loaded_state().await);
    let (status, body) = send_json(&app, Method::GET, "/api/v1/foods/vf", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 13);
    assert_eq!(items[0]["food"], "Spinach, cooked");
    assert_eq!(items[0]["serving_size"], "125 mL (½ cup)");
    assert_eq!(items[0]["category"], "Dark green vegetables");

    let (status, _) = send(&app, Method::GET, "/api/v1/foods/xx", None).await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn profile_validation() {
    let app = build_app(loaded_state().await);

    for bad in [
        json!({ "name": "  ", "age": 30 }),
        json!({ "name": "Sam", "age": 1 }),
        json!({ "name": "Sam", "age": 121 }),
        json!({ "name": "Sam", "age": "abc" }),
        json!({ "name": "Sam" }),
        json!({ "name": null, "age": 25 }),
        json!({ "age": 25 }),
        json!({ "name": "Sam", "age": null }),
        json!({ "name": "Sam", "age": 1.5 }),
    ] {
        let (status, body) = send(&app, Method::POST, "/api/v1/profiles", Some(bad)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "Please enter a valid name and age (2-120)"
        );
    }

    let created = add_member(&app, "  Sam ", json!("25"), "Male").await;
    assert_eq!(created["name"], "Sam");
    assert_eq!(created["age"], 25);
    assert_eq!(created["gender"], "Male");
    assert!(created["created_at"].is_string());

    // fractional ages keep their integer part
    let fractional = add_member(&app, "Kim", json!(25.5), "Female").await;
    assert_eq!(fractional["age"], 25);
    let whole = add_member(&app, "Lee", json!(25.0), "Female").await;
    assert_eq!(whole["age"], 25);

    let (_, list) = send_json(&app, Method::GET, "/api/v1/profiles", None).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn deleting_profiles() {
    let app = build_app(loaded_state().await);
    let created = add_member(&app, "Sam", json!(25), "Male").await;
    let id = created["id"].as_str().unwrap();

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/profiles/{}", id), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = send(&app, Method::DELETE, &format!("/api/v1/profiles/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn menus_need_at_least_one_member() {
    let app = build_app(loaded_state().await);
    for uri in ["/api/v1/menus/user", "/api/v1/menus/family"] {
        let (status, body) = send(&app, Method::POST, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            String::from_utf8(body).unwrap(),
            "Please add at least one family member"
        );
    }
}

#[tokio::test]
async fn user_menu_for_adult_male() {
    let app = build_app(loaded_state().await);
    add_member(&app, "Sam", json!(25), "Male").await;

    let (status, body) = send_json(&app, Method::POST, "/api/v1/menus/user", None).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["user"]["name"], "Sam");
    assert_eq!(body["required"]["vf"], json!({ "min": 8, "max": 10 }));
    assert_eq!(body["servings"], json!({ "vf": 9, "gr": 8, "mi": 2, "me": 3 }));
    assert!(body["generated_at"].is_string());

    let menu = &body["menu"];
    assert_eq!(menu["breakfast"][0]["food"], "Spinach, cooked");
    assert_eq!(menu["breakfast"][0]["category"], "Dark green vegetable");
    assert_eq!(menu["breakfast"][0]["food_group"], "Vegetables and Fruit");
    assert_eq!(menu["lunch"][0]["food"], "Carrots");

    // half the grains whole, in table order
    let breakfast = foods(&menu["breakfast"]);
    let lunch = foods(&menu["lunch"]);
    assert!(breakfast.contains(&"Oatmeal, cooked"));
    for whole in ["Whole wheat bread", "Brown rice, cooked", "Quinoa, cooked"] {
        assert!(lunch.contains(&whole), "{} missing from lunch", whole);
    }
    let dinner_grains = menu["dinner"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|i| i["category"] == "Non whole grain")
        .count();
    assert_eq!(dinner_grains, 4);

    let lunch_alternatives = menu["lunch"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|i| i["category"] == "Meat Alternatives")
        .count();
    assert_eq!(lunch_alternatives, 3);
}

#[tokio::test]
async fn user_menu_for_selected_profile() {
    let app = build_app(loaded_state().await);
    add_member(&app, "Sam", json!(25), "Male").await;
    let kim = add_member(&app, "Kim", json!(6), "Female").await;

    let uri = format!("/api/v1/menus/user?profile_id={}", kim["id"].as_str().unwrap());
    let (status, body) = send_json(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["name"], "Kim");
    assert_eq!(body["servings"], json!({ "vf": 5, "gr": 4, "mi": 2, "me": 1 }));

    let uri = format!("/api/v1/menus/user?profile_id={}", uuid::Uuid::new_v4());
    let (status, _) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn family_menu_sums_member_servings() {
    let app = build_app(loaded_state().await);
    add_member(&app, "Sam", json!(25), "Male").await;
    add_member(&app, "Kim", json!(6), "Female").await;

    let (status, body) = send_json(&app, Method::POST, "/api/v1/menus/family", None).await;
    assert_eq!(status, StatusCode::OK);

    let members = body["member_plans"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["user"]["name"], "Sam");
    assert_eq!(members[1]["required"]["gr"], json!({ "min": 4, "max": 4 }));
    assert_eq!(
        body["total_servings"],
        json!({ "vf": 14, "gr": 12, "mi": 4, "me": 4 })
    );

    // both members start breakfast with the same dark green vegetable
    let breakfast = foods(&body["family_menu"]["breakfast"]);
    assert_eq!(breakfast.iter().filter(|f| **f == "Spinach, cooked").count(), 1);
    assert_eq!(breakfast.iter().filter(|f| **f == "Oatmeal, cooked").count(), 1);
}

#[tokio::test]
async fn requirements_for_a_profile() {
    let app = build_app(loaded_state().await);
    let created = add_member(&app, "Ann", json!(45), "Female").await;
    let uri = format!("/api/v1/profiles/{}/requirements", created["id"].as_str().unwrap());

    let (status, body) = send_json(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["age_band"], "31 to 50");
    assert_eq!(body["required"]["vf"], json!({ "min": 7, "max": 8 }));
    assert_eq!(body["required"]["gr"], json!({ "min": 6, "max": 7 }));
    assert_eq!(body["targets"], json!({ "vf": 7, "gr": 6, "mi": 2, "me": 2 }));
}
