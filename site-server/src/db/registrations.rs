//! Registration form submission

use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{NewRegistration, Registration, RegistrationInput};
use shared::validation::validate_registration;
use shared::{Record, SubmitResult};
use store_client::{TableStore, TableStoreExt};

/// Validate and store a registration
///
/// Validation failures return before the store is touched. Store failures
/// are logged and reported with a generic retry message.
pub async fn submit(store: &dyn TableStore, input: RegistrationInput) -> AppResult<()> {
    validate_registration(&input)?;

    let row = NewRegistration::from(input);
    store
        .insert_row(Registration::TABLE, &row)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to store registration");
            AppError::new(ErrorCode::RegistrationFailed)
        })?;

    tracing::info!("Registration received");
    Ok(())
}

/// [`submit`] folded into the form's `{ success, error? }` result
pub async fn create(store: &dyn TableStore, input: RegistrationInput) -> SubmitResult {
    match submit(store, input).await {
        Ok(()) => SubmitResult::ok(),
        Err(e) => SubmitResult::failed(e.message),
    }
}
