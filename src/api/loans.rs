//! Loan management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        loan::{LoanReceipt, LoanRequest},
        user::UserLoans,
    },
    AppState,
};

use super::AppJson;

/// Get the books a user currently holds
#[utoipa::path(
    get,
    path = "/users/{user}/loans",
    tag = "loans",
    params(
        ("user" = String, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "User's borrowed titles, in borrow order", body = UserLoans),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_user_loans(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> AppResult<Json<UserLoans>> {
    let loans = state.services.loans.get_user_loans(&user)?;
    Ok(Json(loans))
}

/// Borrow one copy of a book
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 201, description = "Book borrowed", body = LoanReceipt),
        (status = 404, description = "User not found", body = crate::error::ErrorResponse),
        (status = 409, description = "No copy available", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoanRequest>,
) -> AppResult<(StatusCode, Json<LoanReceipt>)> {
    let receipt = state
        .services
        .loans
        .borrow_book(&request.user, &request.title)?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// Return a borrowed book
#[utoipa::path(
    post,
    path = "/loans/return",
    tag = "loans",
    request_body = LoanRequest,
    responses(
        (status = 200, description = "Book returned", body = LoanReceipt),
        (status = 404, description = "User or book not found", body = crate::error::ErrorResponse),
        (status = 409, description = "Book not borrowed by this user", body = crate::error::ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<AppState>,
    AppJson(request): AppJson<LoanRequest>,
) -> AppResult<Json<LoanReceipt>> {
    let receipt = state
        .services
        .loans
        .return_book(&request.user, &request.title)?;
    Ok(Json(receipt))
}
