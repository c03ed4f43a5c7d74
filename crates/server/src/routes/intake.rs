use axum::{extract::State, http::StatusCode, Json};
use common::metrics::{FETCHES_TOTAL, STORE_ERRORS_TOTAL, SUBMISSIONS_TOTAL};
use common::types::MessageResponse;
use service::records::{ClientRecord, NewClientRecord};
use tracing::info;

use crate::errors::ApiError;
use crate::extract::LenientJson;
use crate::state::AppState;

pub const SUBMIT_OK: &str = "Data submitted successfully";

/// Persist one submission. Fields are passed through as given; none is required,
/// and a body that is not labelled JSON counts as an empty submission.
#[utoipa::path(
    post,
    path = "/api/submit",
    tag = "intake",
    request_body = crate::openapi::SubmitRequest,
    responses(
        (status = 201, description = "Record stored", body = crate::openapi::SubmitResponse),
        (status = 400, description = "Malformed JSON body", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn submit(
    State(state): State<AppState>,
    LenientJson(input): LenientJson<NewClientRecord>,
) -> Result<(StatusCode, Json<MessageResponse<ClientRecord>>), ApiError> {
    let record = state.store.create(input).await.map_err(|e| {
        STORE_ERRORS_TOTAL.with_label_values(&["submit"]).inc();
        ApiError::submit(e)
    })?;
    SUBMISSIONS_TOTAL.inc();
    info!(record_id = %record.id, "client_record_submitted");
    Ok((StatusCode::CREATED, Json(MessageResponse { message: SUBMIT_OK, data: record })))
}

/// Every stored record as a JSON array.
#[utoipa::path(
    get,
    path = "/api/fetch",
    tag = "intake",
    responses(
        (status = 200, description = "All records", body = [crate::openapi::ClientRecordDoc]),
        (status = 500, description = "Store failure", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn fetch(State(state): State<AppState>) -> Result<Json<Vec<ClientRecord>>, ApiError> {
    let records = state.store.list_all().await.map_err(|e| {
        STORE_ERRORS_TOTAL.with_label_values(&["fetch"]).inc();
        ApiError::fetch(e)
    })?;
    FETCHES_TOTAL.inc();
    Ok(Json(records))
}
