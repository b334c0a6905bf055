//! Append-log lifecycle behavior against a real (in-memory) database

mod common;

use common::{seed_user, test_state};
use delivery_server::ServiceError;
use delivery_server::db::repository::{delivery, delivery_log};
use shared::models::{DeliveryStatus, Role};
use shared::util::new_id;

#[tokio::test]
async fn test_full_lifecycle_scenario() {
    let state = test_state().await;
    let owner = seed_user(&state, "Owner", "owner@example.com", Role::Customer).await;
    let d1 = delivery::create(&state.pool, &owner.id, "laptop").await.unwrap();
    assert_eq!(d1.status, DeliveryStatus::Pending);

    let service = state.delivery_logs();

    // Pending: append succeeds
    service.append_log(&d1.id, "picked up").await.unwrap();
    let logs = delivery_log::find_for_delivery(&state.pool, &d1.id).await.unwrap();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].description, "picked up");

    // Processing: append rejected with a "processing" reason
    delivery::update_status(&state.pool, &d1.id, DeliveryStatus::Processing)
        .await
        .unwrap();
    let err = service.append_log(&d1.id, "in transit").await.unwrap_err();
    match err {
        ServiceError::InvalidTransition(msg) => assert!(msg.contains("still processing")),
        other => panic!("expected InvalidTransition, got {other:?}"),
    }

    // Delivered: append rejected with a "delivered" reason
    delivery::update_status(&state.pool, &d1.id, DeliveryStatus::Delivered)
        .await
        .unwrap();
    let err = service.append_log(&d1.id, "delivered").await.unwrap_err();
    match err {
        ServiceError::InvalidTransition(msg) => assert!(msg.contains("already been delivered")),
        other => panic!("expected InvalidTransition, got {other:?}"),
    }

    // The two rejections left no rows behind
    let count = delivery_log::count_for_delivery(&state.pool, &d1.id).await.unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_append_to_unknown_delivery_creates_nothing() {
    let state = test_state().await;
    let service = state.delivery_logs();

    let missing = new_id();
    let err = service.append_log(&missing, "note").await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound));

    let count = delivery_log::count_for_delivery(&state.pool, &missing).await.unwrap();
    assert_eq!(count, 0);
}

#[tokio::test]
async fn test_logs_round_trip_in_append_order() {
    let state = test_state().await;
    let owner = seed_user(&state, "Owner", "owner@example.com", Role::Customer).await;
    let d1 = delivery::create(&state.pool, &owner.id, "books").await.unwrap();

    let service = state.delivery_logs();
    let notes = ["registered", "picked up", "at the hub", "out for delivery"];
    for note in notes {
        service.append_log(&d1.id, note).await.unwrap();
    }

    let logs = delivery_log::find_for_delivery(&state.pool, &d1.id).await.unwrap();
    let got: Vec<_> = logs.iter().map(|l| l.description.as_str()).collect();
    assert_eq!(got, notes);
}

#[tokio::test]
async fn test_blank_description_rejected_without_side_effects() {
    let state = test_state().await;
    let owner = seed_user(&state, "Owner", "owner@example.com", Role::Customer).await;
    let d1 = delivery::create(&state.pool, &owner.id, "plants").await.unwrap();

    let service = state.delivery_logs();
    let err = service.append_log(&d1.id, "  ").await.unwrap_err();
    assert!(matches!(err, ServiceError::Validation(_)));

    let count = delivery_log::count_for_delivery(&state.pool, &d1.id).await.unwrap();
    assert_eq!(count, 0);
}
