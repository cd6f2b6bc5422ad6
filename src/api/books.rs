//! Catalog book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    AppState,
};

use super::AppJson;

/// List titles with at least one copy on the shelf
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Available books, in catalog order", body = Vec<Book>)
    )
)]
pub async fn list_available_books(State(state): State<AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.available_books()?;
    Ok(Json(books))
}

/// Get a title and its shelf count
#[utoipa::path(
    get,
    path = "/books/{title}",
    tag = "books",
    params(
        ("title" = String, Path, description = "Book title")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&title)?;
    Ok(Json(book))
}

/// Add a new title to the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book added", body = Book),
        (status = 400, description = "Non-positive number of copies", body = crate::error::ErrorResponse),
        (status = 409, description = "Book already exists", body = crate::error::ErrorResponse)
    )
)]
pub async fn add_book(
    State(state): State<AppState>,
    AppJson(book): AppJson<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.catalog.add_book(book)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Remove a title from the catalog
#[utoipa::path(
    delete,
    path = "/books/{title}",
    tag = "books",
    params(
        ("title" = String, Path, description = "Book title")
    ),
    responses(
        (status = 204, description = "Book removed"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn remove_book(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> AppResult<StatusCode> {
    state.services.catalog.remove_book(&title)?;
    Ok(StatusCode::NO_CONTENT)
}
