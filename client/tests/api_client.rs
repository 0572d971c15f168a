//! Test del client HTTP contro un server simulato con wiremock

use roshifit_client::api::{ApiClient, ApiError};
use roshifit_client::models::{Status, UserRole};
use roshifit_client::ClientConfig;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ClientConfig::new(server.uri(), 5)).expect("client builds")
}

fn user_json(id: i32, username: &str, role: &str) -> serde_json::Value {
    json!({
        "id": id,
        "username": username,
        "email": format!("{}@roshifit.test", username),
        "full_name": "Test User",
        "role": role,
        "trainer_id": null
    })
}

#[tokio::test]
async fn login_stores_token_and_sends_it_afterwards() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({ "username": "admin", "password": "secret123" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "jwt-token",
            "user": user_json(1, "admin", "admin")
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/suppliers"))
        .and(header("authorization", "Bearer jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let user = api.login("admin", "secret123").await.unwrap();
    assert_eq!(user.role, UserRole::Admin);
    assert_eq!(api.current_user().await.map(|u| u.id), Some(1));

    let suppliers = api.list_suppliers("", None).await.unwrap();
    assert!(suppliers.is_empty());

    api.logout().await;
    assert!(api.current_user().await.is_none());
}

#[tokio::test]
async fn wrong_credentials_surface_server_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({ "error": "Invalid username or password" })),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    let err = api.login("admin", "nope").await.unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized(_)));
    assert_eq!(err.user_message("Login failed"), "Invalid username or password");
    assert!(api.current_user().await.is_none());
}

#[tokio::test]
async fn supplier_filters_are_sent_as_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/suppliers"))
        .and(query_param("search", "iron"))
        .and(query_param("estado", "activo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "company_name": "Iron Works",
            "contact_name": "Pedro Lopez",
            "email": "sales@ironworks.test",
            "phone": null,
            "status": "activo"
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let suppliers = api
        .list_suppliers("iron", Some(Status::Active))
        .await
        .unwrap();

    assert_eq!(suppliers.len(), 1);
    assert!(suppliers.iter().all(|s| s.status == Status::Active));
}

#[tokio::test]
async fn null_training_plan_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/training/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::Value::Null))
        .mount(&server)
        .await;

    let api = api_for(&server);
    assert!(api.get_training_plan(5).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_supplier_accepts_no_content() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/suppliers/2"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/suppliers/99"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "error": "Supplier not found" })),
        )
        .mount(&server)
        .await;

    let api = api_for(&server);
    api.delete_supplier(2).await.unwrap();

    let err = api.delete_supplier(99).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // porta chiusa: nessun server in ascolto
    let api = ApiClient::new(&ClientConfig::new("http://127.0.0.1:9", 2)).unwrap();

    let err = api.list_my_clients().await.unwrap_err();
    assert!(matches!(err, ApiError::NetworkError(_)));
    assert_eq!(err.user_message("Sin conexión"), "Sin conexión");
}

#[tokio::test]
async fn assign_plan_posts_plan_id() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/trainer/clients/5/assign-plan"))
        .and(body_json(json!({ "plan_id": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "name": "Hipertrofia A",
            "objective": null,
            "duration_weeks": null,
            "start_date": null,
            "end_date": null,
            "status": "activo",
            "client_id": 5,
            "trainer_id": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = api_for(&server);
    let plan = api.assign_plan(5, 3).await.unwrap();
    assert_eq!(plan.client_id, Some(5));
}
