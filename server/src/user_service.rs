//! User service layer - registration, listing and balance transfers

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::error::ServiceError;
use crate::models::{CreateUserRequest, CreateUserResponse, TransferResponse, User};
use crate::store::UserStore;

/// User service operating on the shared in-memory store
pub struct UserService {
    store: Arc<UserStore>,
}

impl UserService {
    pub fn new(store: Arc<UserStore>) -> Self {
        Self { store }
    }

    /// Register a new user. Emails are unique regardless of case.
    pub async fn create_user(
        &self,
        request: CreateUserRequest,
    ) -> Result<CreateUserResponse, ServiceError> {
        request
            .validate()
            .map_err(|e| ServiceError::InvalidInput(e.to_string()))?;

        let mut table = self.store.write().await;
        if table.find_by_email(&request.email).is_some() {
            return Err(ServiceError::Conflict(request.email));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            created_at: now,
            updated_at: now,
            name: request.name,
            email: request.email,
            balance: request.balance,
        };
        let response = CreateUserResponse::from(&user);

        tracing::info!("User created: {}", user.email);
        table.upsert(user);

        Ok(response)
    }

    /// All users in registration order
    pub async fn list_users(&self) -> Vec<User> {
        self.store.read().await.iter().cloned().collect()
    }

    /// Move `amount` from one user's balance to another's.
    ///
    /// Lookups, the funds check and both writes share one write guard, so
    /// concurrent transfers cannot overdraw the source.
    pub async fn transfer(
        &self,
        from_user_id: Uuid,
        to_user_id: Uuid,
        amount: Decimal,
    ) -> Result<TransferResponse, ServiceError> {
        if from_user_id == to_user_id {
            return Err(ServiceError::InvalidInput(
                "Transfer to yourself is not allowed".to_string(),
            ));
        }
        if amount <= Decimal::ZERO {
            return Err(ServiceError::InvalidInput(
                "Transfer amount must be greater than zero".to_string(),
            ));
        }

        let mut table = self.store.write().await;

        let source = table
            .get(&from_user_id)
            .ok_or(ServiceError::NotFound(from_user_id))?;
        let destination = table
            .get(&to_user_id)
            .ok_or(ServiceError::NotFound(to_user_id))?;

        if source.balance < amount {
            return Err(ServiceError::InsufficientFunds);
        }

        let source_balance = source
            .balance
            .checked_sub(amount)
            .ok_or_else(|| anyhow::anyhow!("balance underflow on user {}", from_user_id))?;
        let destination_balance = destination
            .balance
            .checked_add(amount)
            .ok_or_else(|| anyhow::anyhow!("balance overflow on user {}", to_user_id))?;

        let source_email = source.email.clone();
        let destination_email = destination.email.clone();
        let destination_name = destination.name.clone();

        let now = Utc::now();
        let source = table
            .get_mut(&from_user_id)
            .ok_or_else(|| anyhow::anyhow!("user {} vanished during transfer", from_user_id))?;
        source.balance = source_balance;
        source.updated_at = now;

        let destination = table
            .get_mut(&to_user_id)
            .ok_or_else(|| anyhow::anyhow!("user {} vanished during transfer", to_user_id))?;
        destination.balance = destination_balance;
        destination.updated_at = now;

        tracing::info!(
            "Transfer of {} from {} to {} completed",
            amount,
            source_email,
            destination_email
        );

        Ok(TransferResponse {
            message: format!("Transfer of {} delivered to {}", amount, destination_name),
        })
    }
}
