use super::*;
use axum::Json;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use catalog::model::Details;
use catalog::view::{CatalogView, Notifier};
use std::sync::{Arc, Mutex};

// =============================================================
// Fake collection service
// =============================================================

#[derive(Clone, Default)]
struct FakeCollection {
    products: Arc<Mutex<Vec<Product>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeCollection {
    fn record(&self, line: String) {
        self.requests.lock().expect("fake mutex should lock").push(line);
    }

    fn requests(&self) -> Vec<String> {
        self.requests.lock().expect("fake mutex should lock").clone()
    }
}

async fn fake_list(State(fake): State<FakeCollection>) -> Json<Vec<Product>> {
    fake.record("GET /objects".into());
    Json(fake.products.lock().expect("fake mutex should lock").clone())
}

async fn fake_create(State(fake): State<FakeCollection>, Json(product): Json<Product>) -> Json<Product> {
    fake.record("POST /objects".into());
    let mut products = fake.products.lock().expect("fake mutex should lock");
    let created = product.with_id(format!("obj-{}", products.len() + 1));
    products.push(created.clone());
    Json(created)
}

async fn fake_get(State(fake): State<FakeCollection>, Path(id): Path<String>) -> Result<Json<Product>, StatusCode> {
    fake.record(format!("GET /objects/{id}"));
    fake.products
        .lock()
        .expect("fake mutex should lock")
        .iter()
        .find(|p| p.id.as_deref() == Some(id.as_str()))
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn fake_update(
    State(fake): State<FakeCollection>,
    Path(id): Path<String>,
    Json(product): Json<Product>,
) -> Result<Json<Product>, StatusCode> {
    fake.record(format!("PUT /objects/{id}"));
    let mut products = fake.products.lock().expect("fake mutex should lock");
    let slot = products
        .iter_mut()
        .find(|p| p.id.as_deref() == Some(id.as_str()))
        .ok_or(StatusCode::NOT_FOUND)?;
    *slot = product;
    Ok(Json(slot.clone()))
}

async fn fake_delete(State(fake): State<FakeCollection>, Path(id): Path<String>) -> StatusCode {
    fake.record(format!("DELETE /objects/{id}"));
    fake.products
        .lock()
        .expect("fake mutex should lock")
        .retain(|p| p.id.as_deref() != Some(id.as_str()));
    StatusCode::OK
}

async fn spawn_fake() -> (String, FakeCollection) {
    let fake = FakeCollection::default();
    let router = Router::new()
        .route("/objects", get(fake_list).post(fake_create))
        .route("/objects/{id}", get(fake_get).put(fake_update).delete(fake_delete))
        .with_state(fake.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    (format!("http://{addr}"), fake)
}

#[derive(Clone, Debug, Default)]
struct Alerts(Arc<Mutex<Vec<String>>>);

impl Notifier for Alerts {
    fn alert(&self, message: &str) {
        self.0.lock().expect("alerts mutex should lock").push(message.to_owned());
    }
}

impl Alerts {
    fn count(&self) -> usize {
        self.0.lock().expect("alerts mutex should lock").len()
    }
}

fn transport(base: &str) -> ReqwestObjects {
    ReqwestObjects::new(base, Duration::from_secs(5)).expect("client should build")
}

// =============================================================
// Transport
// =============================================================

#[tokio::test]
async fn list_decodes_service_array() {
    let (base, fake) = spawn_fake().await;
    fake.products
        .lock()
        .unwrap()
        .push(Product::draft("Lamp", Details::new("lamp.png", "Desk lamp", 3.0)).with_id("a"));

    let products = transport(&base).list().await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].id.as_deref(), Some("a"));
}

#[tokio::test]
async fn missing_product_is_status_error() {
    let (base, _) = spawn_fake().await;
    let err = transport(&base).get("nope").await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn unreachable_service_is_request_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = transport(&base).list().await.unwrap_err();
    assert!(matches!(err, ApiError::Request(_)));
}

// =============================================================
// CatalogView over HTTP
// =============================================================

#[tokio::test]
async fn create_sends_one_post_then_one_list() {
    let (base, fake) = spawn_fake().await;
    let mut view = CatalogView::new(transport(&base), Alerts::default());
    view.product_input = "Mug,mug.png,Ceramic mug,7.25".into();

    view.create().await;

    assert_eq!(fake.requests(), vec!["POST /objects".to_owned(), "GET /objects".to_owned()]);
    assert_eq!(view.products.len(), 1);
    assert!(view.product_input.is_empty());
}

#[tokio::test]
async fn created_product_fetches_back_with_same_fields() {
    let (base, _) = spawn_fake().await;
    let alerts = Alerts::default();
    let mut view = CatalogView::new(transport(&base), alerts.clone());
    view.product_input = "Mug,mug.png,Ceramic mug,7.25".into();
    view.create().await;

    view.id_input = view.products[0].id.clone().unwrap();
    view.fetch_by_id().await;

    assert_eq!(alerts.count(), 0);
    assert_eq!(view.products.len(), 1);
    assert_eq!(view.products[0].name, "Mug");
    assert_eq!(view.products[0].data, Details::new("mug.png", "Ceramic mug", 7.25));
}

#[tokio::test]
async fn invalid_input_sends_no_request() {
    let (base, fake) = spawn_fake().await;
    let alerts = Alerts::default();
    let mut view = CatalogView::new(transport(&base), alerts.clone());
    view.product_input = "Mug,mug.png,Ceramic mug,free".into();

    view.create().await;

    assert!(fake.requests().is_empty());
    assert_eq!(alerts.count(), 1);
}

#[tokio::test]
async fn update_and_delete_relist_once_each() {
    let (base, fake) = spawn_fake().await;
    let mut view = CatalogView::new(transport(&base), Alerts::default());
    view.product_input = "Mug,mug.png,Ceramic mug,7.25".into();
    view.create().await;
    let id = view.products[0].id.clone().unwrap();

    view.product_input = "Mug XL,mugxl.png,Bigger mug,9".into();
    view.update(&id).await;
    assert_eq!(view.products[0].name, "Mug XL");
    assert_eq!(view.products[0].id.as_deref(), Some(id.as_str()));

    view.delete(&id).await;
    assert!(view.products.is_empty());

    assert_eq!(
        fake.requests(),
        vec![
            "POST /objects".to_owned(),
            "GET /objects".to_owned(),
            format!("PUT /objects/{id}"),
            "GET /objects".to_owned(),
            format!("DELETE /objects/{id}"),
            "GET /objects".to_owned(),
        ]
    );
}

#[tokio::test]
async fn fetch_unknown_id_alerts_and_clears_input() {
    let (base, _) = spawn_fake().await;
    let alerts = Alerts::default();
    let mut view = CatalogView::new(transport(&base), alerts.clone());
    view.id_input = "ghost".into();

    view.fetch_by_id().await;

    assert_eq!(alerts.count(), 1);
    assert!(view.id_input.is_empty());
}

// =============================================================
// Body-less write replies
// =============================================================

async fn fake_create_no_content(State(fake): State<FakeCollection>, Json(product): Json<Product>) -> StatusCode {
    fake.record("POST /objects".into());
    let mut products = fake.products.lock().expect("fake mutex should lock");
    let created = product.with_id(format!("obj-{}", products.len() + 1));
    products.push(created);
    StatusCode::NO_CONTENT
}

async fn fake_update_no_content(
    State(fake): State<FakeCollection>,
    Path(id): Path<String>,
    Json(product): Json<Product>,
) -> StatusCode {
    fake.record(format!("PUT /objects/{id}"));
    let mut products = fake.products.lock().expect("fake mutex should lock");
    match products.iter_mut().find(|p| p.id.as_deref() == Some(id.as_str())) {
        Some(slot) => {
            *slot = product;
            StatusCode::NO_CONTENT
        }
        None => StatusCode::NOT_FOUND,
    }
}

async fn spawn_no_content_fake() -> (String, FakeCollection) {
    let fake = FakeCollection::default();
    let router = Router::new()
        .route("/objects", get(fake_list).post(fake_create_no_content))
        .route("/objects/{id}", get(fake_get).put(fake_update_no_content).delete(fake_delete))
        .with_state(fake.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind should succeed");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    (format!("http://{addr}"), fake)
}

#[tokio::test]
async fn no_content_writes_count_as_success() {
    let (base, fake) = spawn_no_content_fake().await;
    let alerts = Alerts::default();
    let mut view = CatalogView::new(transport(&base), alerts.clone());

    view.product_input = "Mug,mug.png,Ceramic mug,7.25".into();
    view.create().await;
    assert!(view.product_input.is_empty());
    let id = view.products[0].id.clone().unwrap();

    view.product_input = "Mug XL,x.png,Bigger,9".into();
    view.update(&id).await;

    assert_eq!(alerts.count(), 0);
    assert!(view.product_input.is_empty());
    assert_eq!(view.products[0].name, "Mug XL");
    assert_eq!(
        fake.requests(),
        vec![
            "POST /objects".to_owned(),
            "GET /objects".to_owned(),
            format!("PUT /objects/{id}"),
            "GET /objects".to_owned(),
        ]
    );
}

// =============================================================
// Identifier encoding
// =============================================================

#[tokio::test]
async fn id_with_reserved_characters_stays_one_segment() {
    let (base, fake) = spawn_fake().await;
    fake.products
        .lock()
        .unwrap()
        .push(Product::draft("Odd", Details::new("odd.png", "Odd id", 1.0)).with_id("a/b?c#d"));

    let product = transport(&base).get("a/b?c#d").await.unwrap();

    assert_eq!(product.name, "Odd");
    assert_eq!(fake.requests(), vec!["GET /objects/a/b?c#d".to_owned()]);
}

#[tokio::test]
async fn dot_segment_id_is_rejected_before_sending() {
    let (base, fake) = spawn_fake().await;
    let err = transport(&base).delete("..").await.unwrap_err();
    assert!(matches!(err, ApiError::InvalidId(_)));
    assert!(fake.requests().is_empty());
}
