use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use std::time::Duration;
use tower::ServiceExt;

use tigers_seminovos::config::environment::EnvironmentConfig;
use tigers_seminovos::create_app;
use tigers_seminovos::state::AppState;

fn create_test_app() -> Router {
    create_test_app_with(EnvironmentConfig {
        submission_delay: Duration::ZERO,
        ..Default::default()
    })
}

fn create_test_app_with(config: EnvironmentConfig) -> Router {
    create_app(AppState::new(config))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn post(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn contact_body() -> Value {
    json!({
        "vehicle_id": 1,
        "nome": "Ana Souza",
        "telefone": "(21) 99999-0000",
        "email": "ana@example.com",
        "loja": "barra"
    })
}

#[tokio::test]
async fn test_health_check() {
    let (status, body) = get(create_test_app(), "/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_first_catalog_page() {
    let (status, body) = get(create_test_app(), "/api/catalog/vehicles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 1);
    assert_eq!(body["total_items"], 122);
    assert_eq!(body["total_pages"], 11);
    assert_eq!(body["has_previous"], false);
    assert_eq!(body["has_next"], true);
    assert_eq!(body["items"].as_array().unwrap().len(), 12);

    let first = &body["items"][0];
    assert_eq!(first["name"], "Jeep Compass Blindado");
    assert_eq!(first["armor"], "Nível III-A");
    assert_eq!(first["year_label"], "2014/2015");
    assert!(first["whatsapp_url"]
        .as_str()
        .unwrap()
        .starts_with("https://wa.me/5500000000000?text="));

    let makes: Vec<&str> = body["options"]["makes"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(
        makes,
        vec!["BMW", "Honda", "Hyundai", "Jeep", "Toyota", "Volkswagen", "Yamaha"]
    );
}

#[tokio::test]
async fn test_page_is_clamped_to_last() {
    let (status, body) = get(create_test_app(), "/api/catalog/vehicles?page=99").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], 11);
    assert_eq!(body["has_next"], false);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["model"], "CG 160");
    assert_eq!(items[1]["model"], "Fazer 250");
}

#[tokio::test]
async fn test_non_positive_page_falls_back_to_first() {
    for uri in [
        "/api/catalog/vehicles?page=-1",
        "/api/catalog/vehicles?page=0",
        "/api/catalog/vehicles?page=abc",
    ] {
        let (status, body) = get(create_test_app(), uri).await;

        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["page"], 1, "{}", uri);
        assert_eq!(body["has_previous"], false, "{}", uri);
    }
}

#[tokio::test]
async fn test_inverted_year_range_collapses_to_year_max() {
    let (status, body) = get(
        create_test_app(),
        "/api/catalog/vehicles?year_min=2020&year_max=2016",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert!(!items.is_empty());
    assert!(items.iter().all(|item| item["year"] == 2016));
}

#[tokio::test]
async fn test_malformed_query_returns_json_error() {
    let (status, body) = get(create_test_app(), "/api/catalog/vehicles?year_min=abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert_eq!(body["error"], "Bad Request");
}

#[tokio::test]
async fn test_malformed_vehicle_id_returns_json_error() {
    let (status, body) = get(create_test_app(), "/api/catalog/vehicles/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_filters_combine() {
    let (status, body) = get(
        create_test_app(),
        "/api/catalog/vehicles?make=Honda&armor=N%C3%A3o",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 1);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["items"][0]["name"], "Honda CG 160");
    assert_eq!(body["items"][0]["km_label"], "4.500");
}

#[tokio::test]
async fn test_body_list_and_search() {
    let (_, body) = get(create_test_app(), "/api/catalog/vehicles?body=SUV,Picape").await;
    assert_eq!(body["total_items"], 40);

    let (_, body) = get(create_test_app(), "/api/catalog/vehicles?q=%20CIVIC%20").await;
    assert_eq!(body["total_items"], 20);
}

#[tokio::test]
async fn test_empty_result_keeps_one_page() {
    let (status, body) = get(create_test_app(), "/api/catalog/vehicles?q=ferrari").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total_items"], 0);
    assert_eq!(body["total_pages"], 1);
    assert_eq!(body["page"], 1);
    assert!(body["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_filter_value_is_rejected() {
    let (status, body) = get(create_test_app(), "/api/catalog/vehicles?color=Roxo").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_dependent_options() {
    let (status, body) = get(create_test_app(), "/api/catalog/options?make=Honda&model=CG%20160").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["models"], json!(["CG 160", "Civic"]));
    assert_eq!(body["colors"], json!(["Azul"]));
    assert_eq!(body["armors"], json!(["Não", "Nível III-A"]));
}

#[tokio::test]
async fn test_vehicle_detail_gallery() {
    let (status, body) = get(create_test_app(), "/api/catalog/vehicles/1?image=1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["images"].as_array().unwrap().len(), 3);
    assert_eq!(body["gallery"]["current"], 1);
    assert_eq!(body["gallery"]["previous"], 0);
    assert_eq!(body["gallery"]["next"], 2);
    assert_eq!(body["gallery"]["counter"], "2 / 3");
    assert_eq!(body["gallery"]["navigation"], true);
}

#[tokio::test]
async fn test_vehicle_detail_not_found() {
    let (status, body) = get(create_test_app(), "/api/catalog/vehicles/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_home_content() {
    let (status, body) = get(create_test_app(), "/api/home").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hero_slides"].as_array().unwrap().len(), 3);
    assert_eq!(body["stores"].as_array().unwrap().len(), 3);
    assert_eq!(body["stores"][0]["value"], "barra");
    assert_eq!(body["whatsapp_url"], "https://wa.me/5500000000000");
}

#[tokio::test]
async fn test_navigation_active_link() {
    let (status, body) = get(create_test_app(), "/api/navigation?path=/catalogo").await;

    assert_eq!(status, StatusCode::OK);
    let active: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|item| item["active"] == true)
        .filter_map(|item| item["label"].as_str())
        .collect();
    assert_eq!(active, vec!["Catálogo"]);
}

#[tokio::test]
async fn test_contact_lead_succeeds() {
    let (status, body) = post(create_test_app(), "/api/leads/contact", contact_body()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["kind"], "contact");
    assert_eq!(body["data"]["phase"], "succeeded");
}

#[tokio::test]
async fn test_contact_lead_with_blank_field_is_rejected() {
    let mut request = contact_body();
    request["nome"] = json!("   ");

    let (status, body) = post(create_test_app(), "/api/leads/contact", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_contact_lead_unknown_vehicle() {
    let mut request = contact_body();
    request["vehicle_id"] = json!(5000);

    let (status, _) = post(create_test_app(), "/api/leads/contact", request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_lead_body_without_vehicle_returns_json_error() {
    let mut request = contact_body();
    request.as_object_mut().unwrap().remove("vehicle_id");

    let (status, body) = post(create_test_app(), "/api/leads/contact", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("vehicle_id"));
}

#[tokio::test]
async fn test_discount_lead_rejects_unknown_store() {
    let mut request = contact_body();
    request["loja"] = json!("centro");

    let (status, body) = post(create_test_app(), "/api/leads/discount", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_visit_only_requires_personal_fields() {
    let request = json!({
        "nome": "Ana",
        "sobrenome": "Souza",
        "email": "ana@example.com",
        "telefone": "21999990000"
    });

    let (status, body) = post(create_test_app(), "/api/leads/visit", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["kind"], "visit");
}

#[tokio::test]
async fn test_visit_rejects_malformed_date() {
    let request = json!({
        "nome": "Ana",
        "sobrenome": "Souza",
        "email": "ana@example.com",
        "telefone": "21999990000",
        "data": "31/12/2025"
    });

    let (status, _) = post(create_test_app(), "/api/leads/visit", request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_credit_analysis_masks_cpf() {
    let (status, body) = post(
        create_test_app(),
        "/api/leads/credit-analysis",
        json!({ "cpf": "12345678901" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["cpf"], "123.456.789-01");
    assert_eq!(body["data"]["kind"], "credit_analysis");
}

#[tokio::test]
async fn test_credit_analysis_requires_eleven_digits() {
    let (status, _) = post(
        create_test_app(),
        "/api/leads/credit-analysis",
        json!({ "cpf": "123.456" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lead_rate_limit() {
    let app = create_test_app_with(EnvironmentConfig {
        submission_delay: Duration::ZERO,
        rate_limit_requests: 1,
        ..Default::default()
    });

    let (first, _) = post(app.clone(), "/api/leads/discount", contact_body()).await;
    let (second, body) = post(app, "/api/leads/discount", contact_body()).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["code"], "RATE_LIMIT_EXCEEDED");
}
