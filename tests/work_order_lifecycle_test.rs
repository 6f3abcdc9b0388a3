mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use common::TestApp;

async fn create_client(app: &TestApp, name: &str, phone: &str) -> Value {
    let (status, client) = app
        .post("/api/clients", json!({"name": name, "phone": phone}))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    client
}

#[tokio::test]
async fn clients_are_unique_by_phone_and_searchable() {
    let app = TestApp::new().await;

    create_client(&app, "Kovács Béla", "+36301234567").await;

    let (status, body) = app
        .post(
            "/api/clients",
            json!({"name": "Másik Béla", "phone": "+36301234567"}),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "Ügyfél ezzel a telefonszámmal már létezik");

    create_client(&app, "Nagy és Társa Kft.", "+36209876543").await;

    let (status, hits) = app.get("/api/clients?search=kov%C3%A1cs").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits.as_array().unwrap()[0]["name"], "Kovács Béla");

    let (_, hits) = app.get("/api/clients?search=3620").await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    assert_eq!(hits.as_array().unwrap()[0]["name"], "Nagy és Társa Kft.");
}

#[tokio::test]
async fn vehicles_require_an_existing_client() {
    let app = TestApp::new().await;
    let client = create_client(&app, "Szabó Anna", "+36701112233").await;

    let (status, vehicle) = app
        .post(
            "/api/vehicles",
            json!({
                "client_id": client["id"],
                "make": "BMW",
                "model": "X5",
                "year": 2016,
                "license_plate": "ABC-123",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(vehicle["make"], "BMW");

    let (status, _) = app
        .post(
            "/api/vehicles",
            json!({"client_id": uuid::Uuid::new_v4(), "make": "Audi"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let client_id = client["id"].as_str().unwrap();
    let (_, vehicles) = app.get(&format!("/api/vehicles?client_id={client_id}")).await;
    assert_eq!(vehicles.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn work_numbers_are_sequential_from_the_configured_start() {
    let app = TestApp::new().await;
    let client = create_client(&app, "Kovács Béla", "+36301234567").await;

    let (status, first) = app
        .post(
            "/api/work-orders",
            json!({"client_id": client["id"], "turbo_code": "5490-970-0071"}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["work_number"], "40000");
    assert_eq!(first["status"], "RECEIVED");

    let (_, second) = app
        .post(
            "/api/work-orders",
            json!({"client_id": client["id"], "turbo_code": "8201-100-0042"}),
        )
        .await;
    assert_eq!(second["work_number"], "40001");
}

#[tokio::test]
async fn work_order_update_prices_parts_and_total() {
    let app = TestApp::new().await;
    let client = create_client(&app, "Kovács Béla", "+36301234567").await;

    let (_, order) = app
        .post(
            "/api/work-orders",
            json!({"client_id": client["id"], "turbo_code": "5490-970-0071"}),
        )
        .await;
    let order_id = order["id"].as_str().unwrap().to_string();

    let (status, updated) = app
        .put(
            &format!("/api/work-orders/{order_id}"),
            json!({
                "car_make": "BMW",
                "car_model": "X5",
                "car_year": 2016,
                "cleaning_price": 170,
                "reconditioning_price": 170,
                "turbo_price": 240,
                "parts": [
                    {
                        "part_id": uuid::Uuid::new_v4(),
                        "part_code": "CHRA-STD",
                        "category": "C.H.R.A",
                        "supplier": "Melett",
                        "price": 450,
                        "selected": true
                    },
                    {
                        "part_id": uuid::Uuid::new_v4(),
                        "part_code": "GEO-STD",
                        "category": "GEO",
                        "supplier": "Melett",
                        "price": 220,
                        "selected": false
                    }
                ],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["car_make"], "BMW");

    // The list summary carries the computed total:
    // 170 + 170 + 240 + 450 (selected part only) = 1030.
    let (_, summaries) = app.get("/api/work-orders").await;
    let rows = summaries.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["total_amount"], "1030");
    assert_eq!(rows[0]["client_name"], "Kovács Béla");
    assert_eq!(rows[0]["status_label"], "Beérkezett");
}

#[tokio::test]
async fn status_workflow_walks_the_happy_path_and_rejects_jumps() {
    let app = TestApp::new().await;
    let client = create_client(&app, "Szabó Anna", "+36701112233").await;

    let (_, order) = app
        .post(
            "/api/work-orders",
            json!({"client_id": client["id"], "turbo_code": "5490-988-0260"}),
        )
        .await;
    let order_id = order["id"].as_str().unwrap().to_string();
    let status_uri = format!("/api/work-orders/{order_id}/status");

    for next in [
        "IN_PROGRESS",
        "QUOTED",
        "ACCEPTED",
        "WORKING",
        "READY",
        "DELIVERED",
    ] {
        let (status, body) = app.put(&status_uri, json!({"status": next})).await;
        assert_eq!(status, StatusCode::OK, "transition to {next} failed");
        assert_eq!(body["status"], next);
    }

    // DELIVERED is terminal.
    let (status, body) = app.put(&status_uri, json!({"status": "RECEIVED"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("Nem váltható"));

    // A fresh order cannot jump straight to DELIVERED, via either route.
    let (_, other) = app
        .post(
            "/api/work-orders",
            json!({"client_id": client["id"], "turbo_code": "1111-222-3333"}),
        )
        .await;
    let other_id = other["id"].as_str().unwrap().to_string();

    let (status, _) = app
        .put(
            &format!("/api/work-orders/{other_id}/status"),
            json!({"status": "DELIVERED"}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .put(
            &format!("/api/work-orders/{other_id}"),
            json!({"status": "DELIVERED", "turbo_price": 100}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // The rejected bundled update left the order untouched.
    let (_, fetched) = app.get(&format!("/api/work-orders/{other_id}")).await;
    assert_eq!(fetched["status"], "RECEIVED");
    assert_eq!(fetched["turbo_price"], "0");
}

#[tokio::test]
async fn list_filters_combine_search_and_status() {
    let app = TestApp::new().await;
    let kovacs = create_client(&app, "Kovács Béla", "+36301234567").await;
    let nagy = create_client(&app, "Nagy és Társa Kft.", "+36209876543").await;

    let (_, first) = app
        .post(
            "/api/work-orders",
            json!({"client_id": kovacs["id"], "turbo_code": "5490-970-0071"}),
        )
        .await;
    app.post(
        "/api/work-orders",
        json!({"client_id": nagy["id"], "turbo_code": "5490-988-0260"}),
    )
    .await;

    // Move the first order into IN_PROGRESS.
    let first_id = first["id"].as_str().unwrap();
    app.put(
        &format!("/api/work-orders/{first_id}/status"),
        json!({"status": "IN_PROGRESS"}),
    )
    .await;

    // Turbo-code substring matches both, status narrows to one.
    let (_, rows) = app.get("/api/work-orders?search=5490").await;
    assert_eq!(rows.as_array().unwrap().len(), 2);

    let (_, rows) = app
        .get("/api/work-orders?search=5490&status=IN_PROGRESS")
        .await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["work_number"], first["work_number"]);

    // Phone substring matches the other client's order.
    let (_, rows) = app.get("/api/work-orders?search=3620").await;
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["client_name"], "Nagy és Társa Kft.");

    // Client filter restricts by ID.
    let kovacs_id = kovacs["id"].as_str().unwrap();
    let (_, rows) = app
        .get(&format!("/api/work-orders?client_id={kovacs_id}"))
        .await;
    assert_eq!(rows.as_array().unwrap().len(), 1);

    // No match yields an empty list.
    let (_, rows) = app.get("/api/work-orders?search=garrett").await;
    assert!(rows.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn unknown_ids_return_not_found() {
    let app = TestApp::new().await;

    let missing = uuid::Uuid::new_v4();
    let (status, body) = app.get(&format!("/api/work-orders/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Munkalap nem található");

    let (status, _) = app.get(&format!("/api/clients/{missing}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn branding_overlay_round_trips_and_notifies_subscribers() {
    let app = TestApp::new().await;

    // Defaults are served before anything is stored.
    let (status, branding) = app.get("/api/settings/branding").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(branding["app_name"], "Turbó Szerviz Kezelő");
    assert_eq!(branding["labels"]["clients"], "Ügyfelek");

    let mut subscriber = app.state.services.branding.subscribe();

    let (status, stored) = app
        .put(
            "/api/settings/branding",
            json!({
                "app_name": "Premium Turbó Kft.",
                "logo_url": "data:image/png;base64,AAAA",
                "labels": {"clients": "Partnerek"}
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["app_name"], "Premium Turbó Kft.");

    // Subscribers observe the change without polling.
    subscriber.changed().await.expect("watch closed");
    assert_eq!(subscriber.borrow().app_name, "Premium Turbó Kft.");

    let (_, fetched) = app.get("/api/settings/branding").await;
    assert_eq!(fetched["labels"]["clients"], "Partnerek");
}
