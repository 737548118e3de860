//! Behavior when the product store itself fails.

use std::sync::Arc;

use product_sdk::{NewProduct, ProductUpdate};
use product_service::product::{InMemoryProductStore, Product};
use serde_json::json;

mod common;

use common::FailingStore;

#[tokio::test]
async fn test_store_outage_is_opaque_server_error() {
    let service = common::start_service(Arc::new(FailingStore)).await;
    let client = service.client();

    let list = client.list().await.unwrap();
    assert_eq!(list.status, 500);
    assert_eq!(list.body, Some(json!({ "message": "Internal server error" })));

    let create = client
        .create(&NewProduct {
            id: 1,
            name: "a".into(),
            price: 1.0,
        })
        .await
        .unwrap();
    assert_eq!(create.status, 500);

    let update = client
        .update(
            "1",
            &ProductUpdate {
                name: "a".into(),
                price: 1.0,
            },
        )
        .await
        .unwrap();
    assert_eq!(update.status, 500);

    assert_eq!(client.delete("1").await.unwrap().status, 500);
}

#[tokio::test]
async fn test_validation_runs_before_store() {
    // Rejections never reach the store, so an outage cannot mask them.
    let service = common::start_service(Arc::new(FailingStore)).await;
    let client = service.client();

    let reply = client.delete("invalid-id").await.unwrap();
    assert_eq!(reply.status, 400);
    assert_eq!(reply.message(), Some("Invalid ID format"));

    let reply = client
        .create_raw(&json!({ "id": "string", "name": "Invalid Product", "price": "not-a-number" }))
        .await
        .unwrap();
    assert_eq!(reply.status, 400);
    assert_eq!(reply.message(), Some("Invalid input data"));

    let reply = client
        .update_raw("347", &json!({ "name": "Updated Product", "price": "not-a-number" }))
        .await
        .unwrap();
    assert_eq!(reply.status, 400);
    assert_eq!(reply.message(), Some("Invalid input data"));
}

#[tokio::test]
async fn test_duplicate_id_conflicts() {
    let store = Arc::new(InMemoryProductStore::with_products(vec![Product::new(
        347, "Papasorn", 100.0,
    )]));
    let service = common::start_service(store.clone()).await;
    let client = service.client();

    let reply = client
        .create(&NewProduct {
            id: 347,
            name: "Impostor".into(),
            price: 1.0,
        })
        .await
        .unwrap();

    assert_eq!(reply.status, 409);
    assert_eq!(reply.message(), Some("Product with ID 347 already exists"));
    assert_eq!(store.len().await, 1);
}
