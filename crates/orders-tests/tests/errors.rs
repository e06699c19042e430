//! Status classification contract tests.

use orders_client::{
    ErrorKind, LineItem, NewOrder, OrderPatch, OrderReplacement, OrderStatus, OrdersClient,
};
use orders_tests::start_provider;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_get_order_not_found() {
    let (_server, client) = start_provider().await;

    let err = client.get_order(9999).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.status(), Some(404));
    let payload = err.payload().expect("payload decoded");
    assert_eq!(payload.code, "NOT_FOUND");
    assert_eq!(payload.message, "Order not found");
}

#[tokio::test]
async fn test_list_orders_invalid_status_is_bad_request() {
    let (_server, client) = start_provider().await;

    let err = client.list_orders(Some("INVALID")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(err.payload().map(|p| p.code.as_str()), Some("BAD_REQUEST"));
}

#[tokio::test]
async fn test_create_order_without_items_is_bad_request() {
    let (_server, client) = start_provider().await;

    let err = client
        .create_order(&NewOrder {
            customer_name: "Bob".to_string(),
            items: vec![],
        })
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadRequest);
    assert_eq!(
        err.payload().map(|p| p.message.as_str()),
        Some("items must not be empty")
    );
}

#[tokio::test]
async fn test_put_order_conflict() {
    let (_server, client) = start_provider().await;

    let err = client
        .put_order(
            2,
            &OrderReplacement {
                customer_name: "X".to_string(),
                status: OrderStatus::Processing,
                items: Some(vec![LineItem::new("SKU1", 1, dec!(1))]),
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Conflict);
    let payload = err.payload().expect("payload decoded");
    assert_eq!(payload.code, "CONFLICT");
    assert_eq!(payload.message, "Version conflict");
}

#[tokio::test]
async fn test_patch_order_rejected() {
    let (_server, client) = start_provider().await;

    let err = client
        .patch_order(5, &OrderPatch::status(OrderStatus::Cancelled))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::BadRequest);
}

#[tokio::test]
async fn test_server_error_is_request_failed() {
    let (_server, client) = start_provider().await;

    let err = client.get_order(500).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RequestFailed);
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.payload().map(|p| p.code.as_str()), Some("INTERNAL"));
}

#[tokio::test]
async fn test_missing_required_field_is_decode_failure() {
    let (_server, client) = start_provider().await;

    let err = client.get_order(8).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DecodeFailure);
    assert_eq!(err.status(), Some(200));
    assert!(err.payload().is_none());
}

#[tokio::test]
async fn test_delete_not_found_without_body() {
    let (_server, client) = start_provider().await;

    let err = client.delete_order(9999).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(err.payload().is_none());
}

#[tokio::test]
async fn test_unmatched_request_surfaces_as_not_found() {
    let (server, client) = start_provider().await;

    let err = client.get_order(42).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(
        err.payload().map(|p| p.code.as_str()),
        Some("NO_MATCHING_INTERACTION")
    );
    assert!(server.state().requests()[0].matched.is_none());
}

#[tokio::test]
async fn test_closed_port_is_transport_failure() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = OrdersClient::with_base_url(&format!("http://{}", addr)).unwrap();

    let err = client.get_order(1).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::TransportFailure);
    assert!(err.payload().is_none());
}
