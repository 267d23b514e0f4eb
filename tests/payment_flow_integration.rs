//! Integration tests for the payment activation flow.
//!
//! These tests drive the full HTTP stack with in-memory repositories:
//! 1. Staff create a plan through the API
//! 2. A member records a payment referencing the plan
//! 3. The payment activates a membership in the same request
//! 4. Reads are scoped to the caller's role

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Utc};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use gymcore::adapters::http::{router, AppState};
use gymcore::config::ServerConfig;
use gymcore::domain::foundation::{
    DomainError, ErrorCode, MembershipId, PaymentId, PlanId, TransactionReference, UserId,
};
use gymcore::domain::membership::Membership;
use gymcore::domain::payment::Payment;
use gymcore::domain::plan::MembershipPlan;
use gymcore::ports::{MembershipRepository, PaymentRepository, PlanRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Shared in-memory store backing all three repositories.
#[derive(Default)]
struct Store {
    plans: Mutex<Vec<MembershipPlan>>,
    payments: Mutex<Vec<Payment>>,
    memberships: Mutex<Vec<Membership>>,
}

struct InMemoryPlanRepository(Arc<Store>);

#[async_trait]
impl PlanRepository for InMemoryPlanRepository {
    async fn save(&self, plan: &MembershipPlan) -> Result<(), DomainError> {
        self.0.plans.lock().unwrap().push(plan.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PlanId) -> Result<Option<MembershipPlan>, DomainError> {
        Ok(self
            .0
            .plans
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn list(&self) -> Result<Vec<MembershipPlan>, DomainError> {
        Ok(self.0.plans.lock().unwrap().clone())
    }
}

struct InMemoryPaymentRepository(Arc<Store>);

#[async_trait]
impl PaymentRepository for InMemoryPaymentRepository {
    async fn save(&self, payment: &Payment) -> Result<(), DomainError> {
        let mut payments = self.0.payments.lock().unwrap();
        if payments
            .iter()
            .any(|p| p.transaction_reference == payment.transaction_reference)
        {
            return Err(DomainError::new(
                ErrorCode::DuplicateTransactionReference,
                "Transaction reference is already in use",
            ));
        }
        payments.push(payment.clone());
        Ok(())
    }

    async fn save_activated(
        &self,
        payment: &Payment,
        membership: &Membership,
    ) -> Result<(), DomainError> {
        self.save(payment).await?;
        self.0.memberships.lock().unwrap().push(membership.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError> {
        Ok(self
            .0
            .payments
            .lock()
            .unwrap()
            .iter()
            .find(|p| &p.id == id)
            .cloned())
    }

    async fn reference_exists(
        &self,
        reference: &TransactionReference,
    ) -> Result<bool, DomainError> {
        Ok(self
            .0
            .payments
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.transaction_reference == *reference))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Payment>, DomainError> {
        Ok(self
            .0
            .payments
            .lock()
            .unwrap()
            .iter()
            .filter(|p| &p.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<Payment>, DomainError> {
        Ok(self.0.payments.lock().unwrap().clone())
    }
}

struct InMemoryMembershipRepository(Arc<Store>);

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn find_by_id(&self, id: &MembershipId) -> Result<Option<Membership>, DomainError> {
        Ok(self
            .0
            .memberships
            .lock()
            .unwrap()
            .iter()
            .find(|m| &m.id == id)
            .cloned())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Membership>, DomainError> {
        Ok(self
            .0
            .memberships
            .lock()
            .unwrap()
            .iter()
            .filter(|m| &m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list(&self) -> Result<Vec<Membership>, DomainError> {
        Ok(self.0.memberships.lock().unwrap().clone())
    }
}

fn app() -> (axum::Router, Arc<Store>) {
    let store = Arc::new(Store::default());
    let state = AppState {
        plan_repository: Arc::new(InMemoryPlanRepository(store.clone())),
        payment_repository: Arc::new(InMemoryPaymentRepository(store.clone())),
        membership_repository: Arc::new(InMemoryMembershipRepository(store.clone())),
    };
    (router(state, &ServerConfig::default()), store)
}

struct Caller {
    user_id: UserId,
    role: &'static str,
}

fn member() -> Caller {
    Caller {
        user_id: UserId::new(),
        role: "MEMBER",
    }
}

fn staff() -> Caller {
    Caller {
        user_id: UserId::new(),
        role: "STAFF",
    }
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    caller: &Caller,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-User-Id", caller.user_id.to_string())
        .header("X-User-Role", caller.role);

    let request = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            builder
                .body(Body::from(serde_json::to_vec(&json).unwrap()))
                .unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn create_plan(app: &axum::Router, staff: &Caller, duration_in_days: i64) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/plans",
        staff,
        Some(json!({
            "name": "Monthly",
            "description": "30 days of access",
            "price": "49.99",
            "duration_in_days": duration_in_days,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

fn days_between(start: &str, end: &str) -> i64 {
    let start: DateTime<Utc> = start.parse().unwrap();
    let end: DateTime<Utc> = end.parse().unwrap();
    (end - start).num_days()
}

// =============================================================================
// Activation Flow
// =============================================================================

#[tokio::test]
async fn plan_payment_activates_membership() {
    let (app, store) = app();
    let buyer = member();
    let plan_id = create_plan(&app, &staff(), 30).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        &buyer,
        Some(json!({ "membership_plan": plan_id, "payment_method": "Credit Card" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["payment"]["amount"], "49.99");
    assert_eq!(body["payment"]["is_successful"], true);
    assert_eq!(body["membership"]["is_active"], true);
    assert_eq!(body["membership"]["plan"], plan_id);
    assert_eq!(
        body["payment"]["membership"], body["membership"]["id"],
        "payment must link the membership it activated"
    );
    assert_eq!(
        days_between(
            body["membership"]["start_date"].as_str().unwrap(),
            body["membership"]["end_date"].as_str().unwrap(),
        ),
        30
    );

    // Both records persisted together.
    assert_eq!(store.payments.lock().unwrap().len(), 1);
    assert_eq!(store.memberships.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn annual_plan_gives_a_year_of_access() {
    let (app, _store) = app();
    let plan_id = create_plan(&app, &staff(), 365).await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/payments",
        &member(),
        Some(json!({ "membership_plan": plan_id, "payment_method": "Credit Card" })),
    )
    .await;

    assert_eq!(
        days_between(
            body["membership"]["start_date"].as_str().unwrap(),
            body["membership"]["end_date"].as_str().unwrap(),
        ),
        365
    );
}

#[tokio::test]
async fn client_supplied_amount_is_ignored() {
    let (app, _store) = app();
    let plan_id = create_plan(&app, &staff(), 30).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        &member(),
        Some(json!({
            "membership_plan": plan_id,
            "payment_method": "Credit Card",
            "amount": "0.01"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["payment"]["amount"], "49.99");
}

#[tokio::test]
async fn membership_payment_creates_no_new_membership() {
    let (app, store) = app();
    let buyer = member();
    let plan_id = create_plan(&app, &staff(), 30).await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/payments",
        &buyer,
        Some(json!({ "membership_plan": plan_id, "payment_method": "Credit Card" })),
    )
    .await;
    let membership_id = body["membership"]["id"].as_str().unwrap().to_string();

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        &buyer,
        Some(json!({ "membership": membership_id, "payment_method": "PayPal" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body.get("membership").is_none());
    assert_eq!(body["payment"]["membership"], membership_id.as_str());
    assert_eq!(store.memberships.lock().unwrap().len(), 1);
    assert_eq!(store.payments.lock().unwrap().len(), 2);
}

// =============================================================================
// Validation and Conflicts
// =============================================================================

#[tokio::test]
async fn payment_must_reference_a_target() {
    let (app, _store) = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        &member(),
        Some(json!({ "payment_method": "Credit Card" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn payment_cannot_reference_both_targets() {
    let (app, _store) = app();
    let plan_id = create_plan(&app, &staff(), 30).await;

    let (status, _) = send(
        &app,
        "POST",
        "/api/payments",
        &member(),
        Some(json!({
            "membership_plan": plan_id,
            "membership": MembershipId::new().to_string(),
            "payment_method": "Credit Card",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_plan_is_a_client_error() {
    let (app, _store) = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/payments",
        &member(),
        Some(json!({
            "membership_plan": PlanId::new().to_string(),
            "payment_method": "Credit Card"
        })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "PLAN_NOT_FOUND");
}

#[tokio::test]
async fn duplicate_transaction_reference_is_rejected() {
    let (app, store) = app();
    let plan_id = create_plan(&app, &staff(), 30).await;

    let (first, _) = send(
        &app,
        "POST",
        "/api/payments",
        &member(),
        Some(json!({
            "membership_plan": plan_id,
            "payment_method": "Credit Card",
            "transaction_reference": "txn-42"
        })),
    )
    .await;
    assert_eq!(first, StatusCode::CREATED);

    let (second, body) = send(
        &app,
        "POST",
        "/api/payments",
        &member(),
        Some(json!({
            "membership_plan": plan_id,
            "payment_method": "Credit Card",
            "transaction_reference": "txn-42"
        })),
    )
    .await;

    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(body["error_code"], "DUPLICATE_TRANSACTION_REFERENCE");
    // The rejected payment activated nothing.
    assert_eq!(store.memberships.lock().unwrap().len(), 1);
}

// =============================================================================
// Authorization
// =============================================================================

#[tokio::test]
async fn members_cannot_create_plans() {
    let (app, _store) = app();

    let (status, body) = send(
        &app,
        "POST",
        "/api/plans",
        &member(),
        Some(json!({ "name": "Monthly", "price": "49.99", "duration_in_days": 30 })),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error_code"], "FORBIDDEN");
}

#[tokio::test]
async fn members_see_only_their_own_payments() {
    let (app, _store) = app();
    let buyer = member();
    let other = member();
    let plan_id = create_plan(&app, &staff(), 30).await;

    send(
        &app,
        "POST",
        "/api/payments",
        &buyer,
        Some(json!({ "membership_plan": plan_id, "payment_method": "Credit Card" })),
    )
    .await;

    let (_, own) = send(&app, "GET", "/api/payments", &buyer, None).await;
    assert_eq!(own["payments"].as_array().unwrap().len(), 1);

    let (_, others) = send(&app, "GET", "/api/payments", &other, None).await;
    assert!(others["payments"].as_array().unwrap().is_empty());

    let (_, all) = send(&app, "GET", "/api/payments", &staff(), None).await;
    assert_eq!(all["payments"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn someone_elses_membership_reads_as_not_found() {
    let (app, _store) = app();
    let buyer = member();
    let plan_id = create_plan(&app, &staff(), 30).await;

    let (_, body) = send(
        &app,
        "POST",
        "/api/payments",
        &buyer,
        Some(json!({ "membership_plan": plan_id, "payment_method": "Credit Card" })),
    )
    .await;
    let membership_id = body["membership"]["id"].as_str().unwrap().to_string();

    let uri = format!("/api/memberships/{membership_id}");
    let (status, _) = send(&app, "GET", &uri, &member(), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", &uri, &buyer, None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn requests_without_identity_are_rejected() {
    let (app, _store) = app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/payments")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
