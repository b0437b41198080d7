//! Integration tests for the Category resource.

use std::time::Duration;

use bigcartel_api::rest::resources::{Account, Category};
use bigcartel_api::rest::JsonApiResource;
use bigcartel_api::{
    BaseUrl, BasicAuth, BigCartelConfig, HttpClient, HttpError, RequestContext, ResourceError,
    UserAgent,
};
use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_client(server: &MockServer) -> HttpClient {
    let config = BigCartelConfig::builder()
        .base_url(BaseUrl::new(format!("{}/v1", server.uri())).unwrap())
        .user_agent(UserAgent::new("storefront-sync (dev@example.com)").unwrap())
        .credential(BasicAuth::new("dXNlcjpwYXNz").unwrap())
        .build()
        .unwrap();
    HttpClient::new(&config).unwrap()
}

fn category_object(id: &str, name: &str, position: u32) -> serde_json::Value {
    json!({
        "id": id,
        "type": "categories",
        "attributes": {
            "name": name,
            "permalink": name.to_lowercase(),
            "position": position
        }
    })
}

#[tokio::test]
async fn test_all_categories_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/4242/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                category_object("11", "Vinyl", 1),
                category_object("12", "Tapes", 2),
                category_object("13", "Shirts", 3)
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let categories = Category::all(&client, "4242").await.unwrap();

    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Vinyl", "Tapes", "Shirts"]);
    assert_eq!(categories[1].permalink, "tapes");
    assert_eq!(categories[2].position, 3);
}

#[tokio::test]
async fn test_all_categories_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/4242/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let categories = Category::all(&client, "4242").await.unwrap();

    assert!(categories.is_empty());
}

#[tokio::test]
async fn test_find_category() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/4242/categories/12"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": category_object("12", "Tapes", 2)})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let category = Category::find(&client, "4242", "12").await.unwrap();

    assert_eq!(
        category,
        Category {
            id: "12".to_string(),
            name: "Tapes".to_string(),
            permalink: "tapes".to_string(),
            position: 2,
        }
    );
}

#[tokio::test]
async fn test_find_missing_category_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/4242/categories/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = Category::find(&client, "4242", "999").await.unwrap_err();

    assert_eq!(error.to_string(), "no category data found");
}

#[tokio::test]
async fn test_create_category_posts_json_api_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts/4242/categories/"))
        .and(header("Content-Type", "application/vnd.api+json"))
        .and(body_json(json!({
            "data": {"type": "categories", "attributes": {"name": "Cassettes"}}
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"data": category_object("14", "Cassettes", 4)})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let category = Category::create(&client, "4242", "Cassettes").await.unwrap();

    assert_eq!(category.id, "14");
    assert_eq!(category.name, "Cassettes");
}

#[tokio::test]
async fn test_create_category_requires_201() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts/4242/categories/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": category_object("14", "Cassettes", 4)})),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = Category::create(&client, "4242", "Cassettes")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        ResourceError::UnexpectedStatus {
            code: 200,
            expected: 201,
            ..
        }
    ));
}

#[tokio::test]
async fn test_create_duplicate_category_names_category_and_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/accounts/4242/categories/"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "errors": [{"status": "422", "title": "Invalid", "detail": "Name has already been taken"}]
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let error = Category::create(&client, "4242", "Vinyl").await.unwrap_err();

    let message = error.to_string();
    assert!(message.contains("category 'Vinyl'"), "{message}");
    assert!(message.contains("422"), "{message}");
    match error {
        ResourceError::UnexpectedStatus {
            operation, errors, ..
        } => {
            assert_eq!(operation, "create");
            assert_eq!(errors, vec!["Name has already been taken".to_string()]);
        }
        other => panic!("Expected UnexpectedStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_account_routes_category_calls_through_its_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "77",
                "type": "accounts",
                "attributes": {
                    "subdomain": "s", "store_name": "S", "url": "https://s.bigcartel.com",
                    "created_at": "2020-01-01T00:00:00Z", "updated_at": "2020-01-01T00:00:00Z",
                    "under_maintenance": false, "inventory_enabled": false,
                    "artists_enabled": false, "time_zone": "UTC"
                }
            }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/77/categories"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": [category_object("1", "Vinyl", 1)]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/accounts/77/categories/1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": category_object("1", "Vinyl", 1)})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/77/categories/"))
        .and(body_json(json!({
            "data": {"type": "categories", "attributes": {"name": "Tapes"}}
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"data": category_object("2", "Tapes", 2)})),
        )
        .expect(2)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let account = Account::current(&client).await.unwrap();

    let categories = account.categories(&client).await.unwrap();
    assert_eq!(categories.len(), 1);

    let category = account.category(&client, "1").await.unwrap();
    assert_eq!(category, categories[0]);

    let created = account.create_category(&client, "Tapes").await.unwrap();
    assert_eq!(created.id, "2");
    assert_eq!(created.permalink, "tapes");

    let ctx = RequestContext::new().with_timeout(Duration::from_secs(5));
    let created = account
        .create_category_with_context(&client, "Tapes", &ctx)
        .await
        .unwrap();
    assert_eq!(created.name, "Tapes");
}

#[tokio::test]
async fn test_account_routed_calls_honour_cancellation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let account = Account::decode_one(
        json!({"data": {
            "id": "77", "type": "accounts",
            "attributes": {
                "subdomain": "s", "store_name": "S", "url": "https://s.bigcartel.com",
                "created_at": "2020-01-01T00:00:00Z", "updated_at": "2020-01-01T00:00:00Z",
                "under_maintenance": false, "inventory_enabled": false,
                "artists_enabled": false, "time_zone": "UTC"
            }
        }})
        .to_string()
        .as_bytes(),
    )
    .unwrap();

    let token = CancellationToken::new();
    token.cancel();
    let ctx = RequestContext::new().with_cancellation(token);

    let listed = account.categories_with_context(&client, &ctx).await;
    let found = account.category_with_context(&client, "1", &ctx).await;
    let created = account
        .create_category_with_context(&client, "Tapes", &ctx)
        .await;

    for result in [listed.map(|_| ()), found.map(|_| ()), created.map(|_| ())] {
        assert!(matches!(
            result,
            Err(ResourceError::Http(HttpError::Cancelled))
        ));
    }
}
