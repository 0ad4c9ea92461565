//! Data models for the user API

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// User record as held by the store
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub balance: Decimal,
}

impl From<&User> for CreateUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Request DTO for registering a user
#[derive(Debug, Deserialize, Validate, Clone)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(custom = "validate_non_negative")]
    pub balance: Decimal,
}

/// Response DTO for registering a user. Only identity and timestamps are echoed back.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CreateUserResponse {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Query parameters for a balance transfer
#[derive(Debug, Deserialize, Clone)]
pub struct TransferQuery {
    pub from_user_id: Uuid,
    pub to_user_id: Uuid,
    pub amount: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TransferResponse {
    pub message: String,
}

/// Body of every error response
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub detail: String,
}

fn validate_non_negative(balance: &Decimal) -> Result<(), ValidationError> {
    if *balance < Decimal::ZERO {
        let mut err = ValidationError::new("non_negative");
        err.message = Some("balance must be greater than or equal to 0".into());
        return Err(err);
    }
    Ok(())
}
