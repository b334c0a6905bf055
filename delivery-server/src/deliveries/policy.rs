//! Access policy
//!
//! Read authorization, independent of lifecycle state. The actor is
//! always passed in explicitly; the policy never reaches into request
//! context.

use shared::models::Role;

use crate::auth::CurrentUser;

/// The authenticated party a core operation is performed for.
#[derive(Debug, Clone)]
pub struct Actor {
    pub id: String,
    pub role: Role,
}

impl Actor {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role,
        }
    }
}

impl From<&CurrentUser> for Actor {
    fn from(user: &CurrentUser) -> Self {
        Self {
            id: user.id.clone(),
            role: user.role,
        }
    }
}

/// An operator may view any delivery. A customer may view a delivery
/// only if they own it; with no owner to compare against (absent
/// delivery) the ownership test fails for a customer and passes for an
/// operator.
///
/// Note that log appends are deliberately NOT role-gated: any
/// authenticated actor may append to any delivery it can address,
/// subject only to lifecycle eligibility.
pub fn can_view_delivery(actor: &Actor, owner_id: Option<&str>) -> bool {
    match actor.role {
        Role::Operator => true,
        Role::Customer => owner_id == Some(actor.id.as_str()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_views_anything() {
        let op = Actor::new("op-1", Role::Operator);
        assert!(can_view_delivery(&op, Some("u1")));
        assert!(can_view_delivery(&op, Some("op-1")));
        assert!(can_view_delivery(&op, None));
    }

    #[test]
    fn test_customer_views_only_own() {
        let customer = Actor::new("u1", Role::Customer);
        assert!(can_view_delivery(&customer, Some("u1")));
        assert!(!can_view_delivery(&customer, Some("u2")));
    }

    #[test]
    fn test_customer_denied_when_delivery_absent() {
        let customer = Actor::new("u1", Role::Customer);
        assert!(!can_view_delivery(&customer, None));
    }
}
