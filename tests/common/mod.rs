//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use product_sdk::ProductClient;
use product_service::config::ServiceConfig;
use product_service::http::HttpServer;
use product_service::lifecycle::Shutdown;
use product_service::product::{Product, ProductFields, ProductStore, StoreError};
use tokio::net::TcpListener;

/// A running service instance on an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    shutdown: Shutdown,
}

impl TestService {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Plain HTTP client that ignores proxy environment variables.
    #[allow(dead_code)]
    pub fn http(&self) -> reqwest::Client {
        reqwest::Client::builder().no_proxy().build().unwrap()
    }

    /// SDK client pointed at this instance.
    #[allow(dead_code)]
    pub fn client(&self) -> ProductClient {
        ProductClient::with_client(self.http(), &self.base_url())
    }
}

impl Drop for TestService {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the HTTP server backed by `store` and wait until it accepts requests.
pub async fn start_service(store: Arc<dyn ProductStore>) -> TestService {
    start_service_with(ServiceConfig::default(), store).await
}

#[allow(dead_code)]
pub async fn start_service_with(config: ServiceConfig, store: Arc<dyn ProductStore>) -> TestService {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config, store);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    // The listener is already bound; give the accept loop a moment to start.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestService { addr, shutdown }
}

/// Fake store returning fixed products and recording every call.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingStore {
    products: Vec<Product>,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingStore {
    pub fn holding(products: Vec<Product>) -> Self {
        Self {
            products,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ProductStore for RecordingStore {
    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        self.record("list_all".into());
        Ok(self.products.clone())
    }

    async fn insert(&self, product: Product) -> Result<Product, StoreError> {
        self.record(format!("insert {} {} {}", product.id, product.name, product.price));
        Ok(product)
    }

    async fn update_by_id(
        &self,
        id: i64,
        fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        self.record(format!("update {id} {} {}", fields.name, fields.price));
        Ok(Some(Product {
            id,
            name: fields.name,
            price: fields.price,
        }))
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, StoreError> {
        self.record(format!("delete {id}"));
        Ok(true)
    }
}

/// Store whose every operation fails.
#[allow(dead_code)]
pub struct FailingStore;

#[async_trait]
impl ProductStore for FailingStore {
    async fn list_all(&self) -> Result<Vec<Product>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn insert(&self, _product: Product) -> Result<Product, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn update_by_id(
        &self,
        _id: i64,
        _fields: ProductFields,
    ) -> Result<Option<Product>, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }

    async fn delete_by_id(&self, _id: i64) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable("connection refused".into()))
    }
}
