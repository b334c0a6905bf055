//! Access-policy behavior of the delivery view

mod common;

use common::{seed_user, test_state};
use delivery_server::{Actor, ServiceError};
use delivery_server::db::repository::delivery;
use shared::models::Role;
use shared::util::new_id;

#[tokio::test]
async fn test_customer_sees_own_delivery_with_owner_info() {
    let state = test_state().await;
    let owner = seed_user(&state, "Owner", "owner@example.com", Role::Customer).await;
    let d1 = delivery::create(&state.pool, &owner.id, "laptop").await.unwrap();

    let service = state.delivery_logs();
    service.append_log(&d1.id, "picked up").await.unwrap();

    let actor = Actor::new(owner.id.clone(), Role::Customer);
    let view = service.view_delivery(&actor, &d1.id).await.unwrap().unwrap();

    assert_eq!(view.delivery.id, d1.id);
    assert_eq!(view.user.id, owner.id);
    assert_eq!(view.user.email, "owner@example.com");
    assert_eq!(view.logs.len(), 1);
}

#[tokio::test]
async fn test_customer_denied_on_foreign_delivery() {
    let state = test_state().await;
    let owner = seed_user(&state, "Owner", "owner@example.com", Role::Customer).await;
    let other = seed_user(&state, "Other", "other@example.com", Role::Customer).await;
    let d1 = delivery::create(&state.pool, &owner.id, "laptop").await.unwrap();

    let service = state.delivery_logs();
    let actor = Actor::new(other.id, Role::Customer);
    let err = service.view_delivery(&actor, &d1.id).await.unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));
}

#[tokio::test]
async fn test_operator_sees_any_delivery() {
    let state = test_state().await;
    let owner = seed_user(&state, "Owner", "owner@example.com", Role::Customer).await;
    let operator = seed_user(&state, "Op", "op@example.com", Role::Operator).await;
    let d1 = delivery::create(&state.pool, &owner.id, "laptop").await.unwrap();

    let service = state.delivery_logs();
    let actor = Actor::new(operator.id, Role::Operator);
    let view = service.view_delivery(&actor, &d1.id).await.unwrap();
    assert!(view.is_some());
}

#[tokio::test]
async fn test_absent_delivery_is_null_for_operator_denied_for_customer() {
    let state = test_state().await;
    let operator = seed_user(&state, "Op", "op@example.com", Role::Operator).await;
    let customer = seed_user(&state, "C", "c@example.com", Role::Customer).await;

    let service = state.delivery_logs();
    let missing = new_id();

    let view = service
        .view_delivery(&Actor::new(operator.id, Role::Operator), &missing)
        .await
        .unwrap();
    assert!(view.is_none());

    let err = service
        .view_delivery(&Actor::new(customer.id, Role::Customer), &missing)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Unauthorized));
}
