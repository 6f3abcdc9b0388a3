mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn initialize_data_is_idempotent() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/api/initialize-data", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Alapadatok inicializálva");
    assert_eq!(body["report"]["part_types_created"], 4);
    assert_eq!(body["report"]["suppliers_created"], 3);

    // Second run creates nothing new.
    let (status, body) = app.post("/api/initialize-data", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["report"]["part_types_created"], 0);
    assert_eq!(body["report"]["suppliers_created"], 0);

    let (status, types) = app.get("/api/part-types").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(types.as_array().unwrap().len(), 4);

    let (status, suppliers) = app.get("/api/suppliers").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(suppliers.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn part_creation_and_listing() {
    let app = TestApp::new().await;

    let (_, part_type) = app.post("/api/part-types", json!({"name": "CHRA"})).await;
    let (_, supplier) = app.post("/api/suppliers", json!({"name": "Melett"})).await;
    let type_id = part_type["id"].as_str().unwrap().to_string();
    let supplier_id = supplier["id"].as_str().unwrap().to_string();

    let (status, part) = app
        .post(
            "/api/parts",
            json!({
                "name": "Turbo CHRA",
                "code": "CHR001",
                "part_type_id": type_id,
                "supplier_id": supplier_id,
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(part["stock_quantity"], 0);

    // Listing with no search term returns the part with joined names.
    let (status, parts) = app.get("/api/parts").await;
    assert_eq!(status, StatusCode::OK);
    let rows = parts.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Turbo CHRA");
    assert_eq!(rows[0]["code"], "CHR001");
    assert_eq!(rows[0]["part_type_name"], "CHRA");
    assert_eq!(rows[0]["supplier_name"], "Melett");
    assert_eq!(rows[0]["stock_quantity"], 0);

    // Duplicate codes are rejected.
    let (status, body) = app
        .post(
            "/api/parts",
            json!({
                "name": "Another",
                "code": "CHR001",
                "part_type_id": part_type["id"],
                "supplier_id": supplier["id"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "Ez a kód már használatban van");

    // Unknown part type is rejected.
    let (status, _) = app
        .post(
            "/api/parts",
            json!({
                "name": "Orphan",
                "code": "ORP001",
                "part_type_id": uuid::Uuid::new_v4(),
                "supplier_id": supplier["id"],
            }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Search matches name, code and joined names case-insensitively.
    let (_, hits) = app.get("/api/parts?search=chr").await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    let (_, hits) = app.get("/api/parts?search=melett").await;
    assert_eq!(hits.as_array().unwrap().len(), 1);
    let (_, hits) = app.get("/api/parts?search=garrett").await;
    assert!(hits.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn reference_rows_cannot_be_deleted_while_in_use() {
    let app = TestApp::new().await;

    let (_, part_type) = app.post("/api/part-types", json!({"name": "GEO"})).await;
    let (_, supplier) = app.post("/api/suppliers", json!({"name": "Vallion"})).await;
    let (_, _part) = app
        .post(
            "/api/parts",
            json!({
                "name": "Geometria",
                "code": "GEO001",
                "part_type_id": part_type["id"],
                "supplier_id": supplier["id"],
            }),
        )
        .await;

    let type_id = part_type["id"].as_str().unwrap();
    let supplier_id = supplier["id"].as_str().unwrap();

    let (status, body) = app.delete(&format!("/api/part-types/{type_id}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "Nem törölhető, mert vannak hozzá tartozó alkatrészek");

    let (status, _) = app.delete(&format!("/api/suppliers/{supplier_id}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn stock_movements_adjust_stock_and_enforce_sufficiency() {
    let app = TestApp::new().await;

    let (_, part_type) = app.post("/api/part-types", json!({"name": "ACT"})).await;
    let (_, supplier) = app.post("/api/suppliers", json!({"name": "Cer"})).await;
    let (_, part) = app
        .post(
            "/api/parts",
            json!({
                "name": "Aktuátor",
                "code": "ACT001",
                "part_type_id": part_type["id"],
                "supplier_id": supplier["id"],
            }),
        )
        .await;
    let part_id = part["id"].as_str().unwrap().to_string();

    // Stock starts at 3 after an IN movement.
    let (status, _) = app
        .post(
            "/api/stock-movements",
            json!({"part_id": part_id, "movement_type": "IN", "quantity": 3}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    // OUT of 5 against stock of 3 is rejected server-side.
    let (status, body) = app
        .post(
            "/api/stock-movements",
            json!({"part_id": part_id, "movement_type": "OUT", "quantity": 5}),
        )
        .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["detail"], "Nincs elég készlet a kiadáshoz");

    // OUT of 2 succeeds, leaving 1 in stock.
    let (status, _) = app
        .post(
            "/api/stock-movements",
            json!({"part_id": part_id, "movement_type": "OUT", "quantity": 2}),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, parts) = app.get("/api/parts").await;
    assert_eq!(parts.as_array().unwrap()[0]["stock_quantity"], 1);

    // Zero and negative quantities never reach the stock.
    let (status, _) = app
        .post(
            "/api/stock-movements",
            json!({"part_id": part_id, "movement_type": "IN", "quantity": 0}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // History is newest-first and both movements are present.
    let (status, movements) = app.get(&format!("/api/stock-movements/{part_id}")).await;
    assert_eq!(status, StatusCode::OK);
    let rows = movements.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["movement_type"], "OUT");
    assert_eq!(rows[1]["movement_type"], "IN");

    // Movements against unknown parts 404.
    let (status, _) = app
        .post(
            "/api/stock-movements",
            json!({"part_id": uuid::Uuid::new_v4(), "movement_type": "IN", "quantity": 1}),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_a_part_removes_its_movement_history() {
    let app = TestApp::new().await;

    let (_, part_type) = app.post("/api/part-types", json!({"name": "SET"})).await;
    let (_, supplier) = app.post("/api/suppliers", json!({"name": "Melett"})).await;
    let (_, part) = app
        .post(
            "/api/parts",
            json!({
                "name": "Tömítés készlet",
                "code": "SET001",
                "part_type_id": part_type["id"],
                "supplier_id": supplier["id"],
            }),
        )
        .await;
    let part_id = part["id"].as_str().unwrap().to_string();

    app.post(
        "/api/stock-movements",
        json!({"part_id": part_id, "movement_type": "IN", "quantity": 10}),
    )
    .await;

    let (status, _) = app.delete(&format!("/api/parts/{part_id}")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // History endpoint now reports the part as missing.
    let (status, _) = app.get(&format!("/api/stock-movements/{part_id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, parts) = app.get("/api/parts").await;
    assert!(parts.as_array().unwrap().is_empty());
}
