//! Router-level tests: requests go through the full app via `oneshot`.

use axum::Router;
use axum::body::Body;
use billar_server::{AppState, Config, api, db};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

async fn app() -> (Router, sqlx::SqlitePool) {
    let pool = db::connect_in_memory().await.unwrap();
    db::seed::seed_if_empty(&pool).await.unwrap();
    let state = AppState::with_pool(pool.clone(), Config::default());
    (api::build_app(state), pool)
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

/// Move a table's session start into the past
async fn backdate(pool: &sqlx::SqlitePool, mesa_id: i64, minutes: i64) {
    sqlx::query("UPDATE mesas SET iniciada_at = iniciada_at - ? WHERE id = ?")
        .bind(minutes * 60_000)
        .bind(mesa_id)
        .execute(pool)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_health() {
    let (app, _) = app().await;
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "billar-server");
}

#[tokio::test]
async fn test_rates() {
    let (app, _) = app().await;
    let (status, body) = get(&app, "/tarifas?sucursal_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sucursal_id"], 1);
    assert_eq!(body["price_per_hour_bs"], 15.0);
    assert_eq!(body["fraction_minutes"], 5);
    assert_eq!(body["min_minutes"], 30);

    // Defaults to branch 1
    let (_, default_body) = get(&app, "/tarifas").await;
    assert_eq!(default_body["sucursal_id"], 1);

    let (status, body) = get(&app, "/tarifas?sucursal_id=77").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["ok"], false);
    assert_eq!(body["code"], 1002);
}

#[tokio::test]
async fn test_tables_and_products() {
    let (app, _) = app().await;

    let (status, body) = get(&app, "/mesas?sucursal_id=2").await;
    assert_eq!(status, StatusCode::OK);
    let mesas = body.as_array().unwrap();
    assert_eq!(mesas.len(), 10);
    assert_eq!(mesas[0]["nombre"], "Mesa 1");
    assert_eq!(mesas[0]["estado"], "libre");
    assert!(mesas[0]["inicio"].is_null());

    let (status, body) = get(&app, "/productos").await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["nombre"].as_str().unwrap())
        .collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), 10);

    let (status, body) = get(&app, "/mesas?sucursal_id=9").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 1001);
}

#[tokio::test]
async fn test_bad_query_is_json_error() {
    let (app, _) = app().await;
    let (status, body) = get(&app, "/mesas?sucursal_id=abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
    assert_eq!(body["code"], 5);
}

#[tokio::test]
async fn test_full_session() {
    let (app, pool) = app().await;

    // Start
    let (status, body) = post(&app, "/mesas/3/iniciar", json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["iniciada"], true);
    assert_eq!(body["mesa"]["estado"], "ocupada");
    let inicio = body["mesa"]["inicio"].clone();
    assert!(inicio.is_string());

    // Starting again keeps the original start
    let (_, body) = post(&app, "/mesas/3/iniciar", json!({})).await;
    assert_eq!(body["iniciada"], false);
    assert_eq!(body["mesa"]["inicio"], inicio);

    backdate(&pool, 3, 32).await;

    // Consumption: 2 x Cerveza Golden Lata (12.00)
    let (_, productos) = get(&app, "/productos?sucursal_id=1").await;
    let golden = productos
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["nombre"] == "Cerveza Golden Lata")
        .unwrap()["id"]
        .as_i64()
        .unwrap();
    let (status, body) = post(
        &app,
        "/consumos",
        json!({"ticket_id": null, "mesa_id": 3, "producto_id": golden, "cantidad": 2}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    assert_eq!(body["consumo_total"], 24.0);
    assert_eq!(body["items"], 2);
    assert_eq!(body["consumo"]["precio"], 12.0);

    // Live bill
    let (status, bill) = get(&app, "/mesas/3/cuenta").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bill["minutos_fact"], 35);
    assert_eq!(bill["importe_tiempo"], 8.75);
    assert_eq!(bill["total"], 32.75);

    // Close
    let (status, body) = post(
        &app,
        "/tickets/cerrar",
        json!({"sucursal_id": 1, "mesa_id": 3, "metodo_pago": "efectivo", "efectivo_recibido": 50}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);
    let ticket = &body["ticket"];
    assert!(ticket["id"].as_i64().unwrap() > 0);
    assert!(ticket["created_at"].is_string());
    assert_eq!(ticket["minutos_fact"], 35);
    assert_eq!(ticket["importe_tiempo"], 8.75);
    assert_eq!(ticket["consumo_total"], 24.0);
    assert_eq!(ticket["total"], 32.75);
    assert_eq!(ticket["efectivo_recibido"], 50.0);

    // Table is free again
    let (_, mesas) = get(&app, "/mesas").await;
    let mesa = mesas.as_array().unwrap().iter().find(|m| m["id"] == 3).unwrap().clone();
    assert_eq!(mesa["estado"], "libre");
    assert!(mesa["inicio"].is_null());

    // Closing twice conflicts
    let (status, body) = post(&app, "/tickets/cerrar", json!({"mesa_id": 3})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2002);

    // History and report
    let (status, body) = get(&app, "/tickets?sucursal_id=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sucursal_id"], 1);
    assert_eq!(body["tickets"].as_array().unwrap().len(), 1);

    let (status, body) = get(&app, "/reporte").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totales"]["cantidad"], 1);
    assert_eq!(body["totales"]["total"], 32.75);
    assert_eq!(body["por_metodo"][0]["metodo_pago"], "efectivo");
    assert_eq!(body["por_metodo"][0]["total_cobrado"], 50.0);
}

#[tokio::test]
async fn test_immediate_close_charges_minimum() {
    let (app, _) = app().await;
    post(&app, "/mesas/1/iniciar", json!({})).await;
    let (status, body) = post(&app, "/tickets/cerrar", json!({"sucursal_id": 1, "mesa_id": 1})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticket"]["minutos_fact"], 30);
    assert_eq!(body["ticket"]["total"], 7.5);
    assert_eq!(body["ticket"]["metodo_pago"], "efectivo");
}

#[tokio::test]
async fn test_consumption_errors() {
    let (app, _) = app().await;

    let (status, body) =
        post(&app, "/consumos", json!({"mesa_id": 1, "producto_id": 1, "cantidad": 0})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3101);

    let (status, body) =
        post(&app, "/consumos", json!({"mesa_id": 999, "producto_id": 1, "cantidad": 1})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2001);

    // Table 1 is free; nothing may be charged to it
    let (status, body) =
        post(&app, "/consumos", json!({"mesa_id": 1, "producto_id": 1, "cantidad": 1})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2002);

    post(&app, "/mesas/1/iniciar", json!({})).await;
    let (_, body) = get(&app, "/mesas/1/cuenta").await;
    assert_eq!(body["consumo_total"], 0.0);
    assert_eq!(body["items"], 0);

    // Product 11 is the first product of branch 2; table 1 is in branch 1
    let (status, body) =
        post(&app, "/consumos", json!({"mesa_id": 1, "producto_id": 11, "cantidad": 1})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 3001);

    let (status, body) = post(&app, "/consumos", json!({"mesa_id": 1})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["ok"], false);
}

#[tokio::test]
async fn test_bill_of_free_table_conflicts() {
    let (app, _) = app().await;
    let (status, body) = get(&app, "/mesas/2/cuenta").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 2002);

    let (status, _) = get(&app, "/mesas/abc/cuenta").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_checkout_failure_keeps_table_occupied() {
    let (app, pool) = app().await;
    post(&app, "/mesas/4/iniciar", json!({})).await;

    sqlx::query(
        "CREATE TRIGGER fail_release BEFORE UPDATE ON mesas BEGIN SELECT RAISE(ABORT, 'injected'); END;",
    )
    .execute(&pool)
    .await
    .unwrap();

    let (status, body) = post(&app, "/tickets/cerrar", json!({"mesa_id": 4})).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 9002);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tickets")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);

    let (_, mesas) = get(&app, "/mesas").await;
    let mesa = mesas.as_array().unwrap().iter().find(|m| m["id"] == 4).unwrap().clone();
    assert_eq!(mesa["estado"], "ocupada");
}

#[tokio::test]
async fn test_unknown_path_falls_back_to_static_files() {
    let (app, _) = app().await;
    let response = app
        .oneshot(Request::get("/no-such-file.html").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _) = app().await;
    let response = app
        .oneshot(
            Request::builder()
                .method("OPTIONS")
                .uri("/mesas")
                .header(header::ORIGIN, "http://caja.local")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
