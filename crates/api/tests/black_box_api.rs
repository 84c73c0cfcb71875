use std::sync::Arc;

use itemreg_api::app::{build_app, services::AppServices};
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, fresh registry, ephemeral port.
        let app = build_app(Arc::new(AppServices::in_memory()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn create(client: &reqwest::Client, srv: &TestServer, body: Value) -> Value {
    let res = client.post(srv.url("/items/")).json(&body).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    res.json().await.unwrap()
}

async fn list(client: &reqwest::Client, srv: &TestServer, query: &str) -> Vec<Value> {
    let res = client.get(srv.url(&format!("/items/{query}"))).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    res.json().await.unwrap()
}

#[tokio::test]
async fn book_lifecycle_scenario() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let a = create(&client, &srv, json!({ "name": "Book A" })).await;
    assert_eq!(a, json!({ "id": 1, "name": "Book A", "description": null }));

    let b = create(&client, &srv, json!({ "name": "Book B" })).await;
    assert_eq!(b["id"], 2);

    let items = list(&client, &srv, "?skip=0&limit=10").await;
    assert_eq!(
        items,
        vec![
            json!({ "id": 1, "name": "Book A", "description": null }),
            json!({ "id": 2, "name": "Book B", "description": null }),
        ]
    );

    let res = client.get(srv.url("/items/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let got: Value = res.json().await.unwrap();
    assert_eq!(got, a);

    let res = client
        .put(srv.url("/items/1"))
        .json(&json!({ "name": "Book A v2" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated, json!({ "id": 1, "name": "Book A v2", "description": null }));

    let res = client.delete(srv.url("/items/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "message": "Item 'Book A v2' with ID 1 deleted successfully" })
    );

    let res = client.get(srv.url("/items/1")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Item not found" }));
}

#[tokio::test]
async fn create_keeps_description_and_get_returns_it() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let created = create(
        &client,
        &srv,
        json!({ "name": "Lamp", "description": "desk lamp" }),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let res = client.get(srv.url(&format!("/items/{id}"))).send().await.unwrap();
    let got: Value = res.json().await.unwrap();
    assert_eq!(got["name"], "Lamp");
    assert_eq!(got["description"], "desk lamp");
}

#[tokio::test]
async fn update_replaces_description_entirely() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create(&client, &srv, json!({ "name": "Pen", "description": "blue" })).await;

    let res = client
        .put(srv.url("/items/1"))
        .json(&json!({ "name": "Pen" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["description"], Value::Null);
}

#[tokio::test]
async fn missing_or_mistyped_name_is_unprocessable() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for body in [
        json!({}),
        json!({ "description": "no name" }),
        json!({ "name": 42 }),
        json!({ "name": null }),
    ] {
        let res = client.post(srv.url("/items/")).json(&body).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY, "body {body}");
        let err: Value = res.json().await.unwrap();
        assert!(err["detail"].is_string());
    }

    let res = client
        .post(srv.url("/items/"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Nothing was created, so the first successful create still gets id 1.
    assert!(list(&client, &srv, "").await.is_empty());
    let first = create(&client, &srv, json!({ "name": "ok" })).await;
    assert_eq!(first["id"], 1);
}

#[tokio::test]
async fn update_with_bad_body_or_unknown_id_changes_nothing() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create(&client, &srv, json!({ "name": "keep" })).await;

    let res = client
        .put(srv.url("/items/1"))
        .json(&json!({ "description": "no name" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client
        .put(srv.url("/items/99"))
        .json(&json!({ "name": "ghost" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["detail"], "Item not found");

    let items = list(&client, &srv, "").await;
    assert_eq!(items, vec![json!({ "id": 1, "name": "keep", "description": null })]);
}

#[tokio::test]
async fn list_applies_skip_and_limit() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for i in 1..=15 {
        create(&client, &srv, json!({ "name": format!("item {i}") })).await;
    }

    let ids = |items: Vec<Value>| items.iter().map(|v| v["id"].as_i64().unwrap()).collect::<Vec<_>>();

    assert_eq!(ids(list(&client, &srv, "").await), (1..=10).collect::<Vec<_>>());
    assert_eq!(ids(list(&client, &srv, "?skip=12").await), vec![13, 14, 15]);
    assert_eq!(ids(list(&client, &srv, "?skip=3&limit=2").await), vec![4, 5]);
    assert_eq!(ids(list(&client, &srv, "?limit=0").await), Vec::<i64>::new());
    assert_eq!(ids(list(&client, &srv, "?skip=15").await), Vec::<i64>::new());
    assert_eq!(ids(list(&client, &srv, "?skip=100&limit=5").await), Vec::<i64>::new());
}

#[tokio::test]
async fn list_accepts_negative_and_oversized_limits() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for i in 1..=3 {
        create(&client, &srv, json!({ "name": format!("item {i}") })).await;
    }

    assert!(list(&client, &srv, "?limit=-1").await.is_empty());
    assert!(list(&client, &srv, "?skip=1&limit=-5").await.is_empty());
    assert_eq!(list(&client, &srv, "?limit=99999999999999999999").await.len(), 3);
    assert_eq!(list(&client, &srv, "?skip=2&limit=18446744073709551616").await.len(), 1);
}

#[tokio::test]
async fn out_of_range_id_is_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create(&client, &srv, json!({ "name": "only" })).await;

    let res = client.get(srv.url("/items/99999999999999999999")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Item not found" }));

    let res = client
        .put(srv.url("/items/-99999999999999999999"))
        .json(&json!({ "name": "x" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client.delete(srv.url("/items/99999999999999999999")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_query_or_path_is_unprocessable() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    for query in ["?skip=abc", "?limit=ten", "?limit=1.5", "?skip=-1"] {
        let res = client.get(srv.url(&format!("/items/{query}"))).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY, "query {query}");
    }

    let res = client.get(srv.url("/items/not-a-number")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let res = client.delete(srv.url("/items/1.5")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn deleted_ids_are_never_reissued() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    create(&client, &srv, json!({ "name": "one" })).await;
    create(&client, &srv, json!({ "name": "two" })).await;

    let res = client.delete(srv.url("/items/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.delete(srv.url("/items/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .put(srv.url("/items/2"))
        .json(&json!({ "name": "revived" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let three = create(&client, &srv, json!({ "name": "three" })).await;
    assert_eq!(three["id"], 3);
}

#[tokio::test]
async fn collection_route_works_without_trailing_slash() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(srv.url("/items"))
        .json(&json!({ "name": "slashless" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client.get(srv.url("/items")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let items: Vec<Value> = res.json().await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn health_and_openapi_are_served() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client.get(srv.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client.get(srv.url("/openapi.json")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let doc: Value = res.json().await.unwrap();
    assert_eq!(doc["info"]["title"], "Simple CRUD API");
    assert!(doc["paths"]["/items/{id}"]["delete"].is_object());
    assert!(doc["paths"]["/items/"]["post"].is_object());
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut tasks = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let url = srv.url("/items/");
        tasks.push(tokio::spawn(async move {
            let res = client
                .post(url)
                .json(&json!({ "name": format!("c{i}") }))
                .send()
                .await
                .unwrap();
            let body: Value = res.json().await.unwrap();
            body["id"].as_i64().unwrap()
        }));
    }

    let mut ids = Vec::new();
    for t in tasks {
        ids.push(t.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());
}
