//! PostgreSQL implementation of PaymentRepository.
//!
//! `save_activated` wraps the payment insert and the membership insert
//! in a single transaction so activation is all-or-nothing.

use crate::domain::foundation::{
    DomainError, ErrorCode, MembershipId, Money, PaymentId, PaymentMethod, PlanId, Timestamp,
    TransactionReference, UserId,
};
use crate::domain::membership::Membership;
use crate::domain::payment::Payment;
use crate::ports::PaymentRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

/// PostgreSQL implementation of the PaymentRepository port.
pub struct PostgresPaymentRepository {
    pool: PgPool,
}

impl PostgresPaymentRepository {
    /// Creates a new PostgresPaymentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row representation of a payment.
#[derive(Debug, sqlx::FromRow)]
struct PaymentRow {
    id: Uuid,
    user_id: Uuid,
    plan_id: Option<Uuid>,
    membership_id: Option<Uuid>,
    amount_cents: i64,
    payment_method: String,
    transaction_reference: String,
    is_successful: bool,
    payment_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PaymentRow> for Payment {
    type Error = DomainError;

    fn try_from(row: PaymentRow) -> Result<Self, Self::Error> {
        let amount = Money::from_cents(row.amount_cents).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid stored amount: {}", e),
            )
        })?;
        let payment_method = PaymentMethod::new(row.payment_method).map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Invalid stored payment method: {}", e),
            )
        })?;
        let transaction_reference = TransactionReference::new(row.transaction_reference)
            .map_err(|e| {
                DomainError::new(
                    ErrorCode::DatabaseError,
                    format!("Invalid stored transaction reference: {}", e),
                )
            })?;

        Ok(Payment {
            id: PaymentId::from_uuid(row.id),
            user_id: UserId::from_uuid(row.user_id),
            plan_id: row.plan_id.map(PlanId::from_uuid),
            membership_id: row.membership_id.map(MembershipId::from_uuid),
            amount,
            payment_method,
            transaction_reference,
            is_successful: row.is_successful,
            payment_date: Timestamp::from_datetime(row.payment_date),
            created_at: Timestamp::from_datetime(row.created_at),
            updated_at: Timestamp::from_datetime(row.updated_at),
        })
    }
}

fn map_insert_error(e: sqlx::Error) -> DomainError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.constraint() == Some("payments_transaction_reference_key") {
            return DomainError::new(
                ErrorCode::DuplicateTransactionReference,
                "Transaction reference is already in use",
            );
        }
    }
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to save payment: {}", e),
    )
}

async fn insert_payment(
    tx: &mut Transaction<'_, Postgres>,
    payment: &Payment,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO payments (
            id, user_id, plan_id, membership_id, amount_cents, payment_method,
            transaction_reference, is_successful, payment_date, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        "#,
    )
    .bind(payment.id.as_uuid())
    .bind(payment.user_id.as_uuid())
    .bind(payment.plan_id.as_ref().map(|id| *id.as_uuid()))
    .bind(payment.membership_id.as_ref().map(|id| *id.as_uuid()))
    .bind(payment.amount.cents())
    .bind(payment.payment_method.as_str())
    .bind(payment.transaction_reference.as_str())
    .bind(payment.is_successful)
    .bind(payment.payment_date.as_datetime())
    .bind(payment.created_at.as_datetime())
    .bind(payment.updated_at.as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(map_insert_error)?;

    Ok(())
}

async fn insert_membership(
    tx: &mut Transaction<'_, Postgres>,
    membership: &Membership,
) -> Result<(), DomainError> {
    sqlx::query(
        r#"
        INSERT INTO memberships (
            id, user_id, plan_id, start_date, end_date, is_active, created_at, updated_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        "#,
    )
    .bind(membership.id.as_uuid())
    .bind(membership.user_id.as_uuid())
    .bind(membership.plan_id.as_uuid())
    .bind(membership.start_date.as_datetime())
    .bind(membership.end_date.as_datetime())
    .bind(membership.is_active)
    .bind(membership.created_at.as_datetime())
    .bind(membership.updated_at.as_datetime())
    .execute(&mut **tx)
    .await
    .map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Failed to save membership: {}", e),
        )
    })?;

    Ok(())
}

#[async_trait]
impl PaymentRepository for PostgresPaymentRepository {
    async fn save(&self, payment: &Payment) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to start transaction: {}", e),
            )
        })?;

        insert_payment(&mut tx, payment).await?;

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit payment: {}", e),
            )
        })?;

        Ok(())
    }

    async fn save_activated(
        &self,
        payment: &Payment,
        membership: &Membership,
    ) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to start transaction: {}", e),
            )
        })?;

        // Membership first: the payment row carries its foreign key.
        insert_membership(&mut tx, membership).await?;
        insert_payment(&mut tx, payment).await?;

        tx.commit().await.map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to commit activation: {}", e),
            )
        })?;

        Ok(())
    }

    async fn find_by_id(&self, id: &PaymentId) -> Result<Option<Payment>, DomainError> {
        let row: Option<PaymentRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, plan_id, membership_id, amount_cents, payment_method,
                   transaction_reference, is_successful, payment_date, created_at, updated_at
            FROM payments
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to fetch payment: {}", e),
            )
        })?;

        row.map(Payment::try_from).transpose()
    }

    async fn reference_exists(
        &self,
        reference: &TransactionReference,
    ) -> Result<bool, DomainError> {
        let exists: Option<(bool,)> = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM payments WHERE transaction_reference = $1)",
        )
        .bind(reference.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to check reference: {}", e),
            )
        })?;

        Ok(exists.map(|(e,)| e).unwrap_or(false))
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Payment>, DomainError> {
        let rows: Vec<PaymentRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, plan_id, membership_id, amount_cents, payment_method,
                   transaction_reference, is_successful, payment_date, created_at, updated_at
            FROM payments
            WHERE user_id = $1
            ORDER BY payment_date DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list payments: {}", e),
            )
        })?;

        rows.into_iter().map(Payment::try_from).collect()
    }

    async fn list(&self) -> Result<Vec<Payment>, DomainError> {
        let rows: Vec<PaymentRow> = sqlx::query_as(
            r#"
            SELECT id, user_id, plan_id, membership_id, amount_cents, payment_method,
                   transaction_reference, is_successful, payment_date, created_at, updated_at
            FROM payments
            ORDER BY payment_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            DomainError::new(
                ErrorCode::DatabaseError,
                format!("Failed to list payments: {}", e),
            )
        })?;

        rows.into_iter().map(Payment::try_from).collect()
    }
}
