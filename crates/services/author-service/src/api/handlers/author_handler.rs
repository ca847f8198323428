//! Author handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{
    AuthorResponse, Book, LoginCredentials, MSG_AUTHOR_APPROVED, MSG_AUTHOR_DELETED,
    MSG_AUTHOR_REGISTERED, TOKEN_TYPE_BEARER,
};

use super::MessageResponse;
use crate::api::extractors::ValidatedJson;
use crate::api::AppState;

/// Author registration / update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AuthorRequest {
    /// Author email address, used as identifier
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    /// Display name
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Jane Austen")]
    pub name: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

/// Author login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Access token issued by the identity provider
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    #[schema(example = "Bearer")]
    pub token_type: String,
}

/// Create author routes
pub fn author_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_authors).put(update_author))
        .route("/register", post(register_author))
        .route("/login", post(login))
        .route("/unauthorised", get(list_unauthorised_authors))
        .route("/:id", get(get_author).delete(delete_author))
        .route("/:id/approve", put(approve_author))
        .route("/:id/books", get(author_books))
}

/// Register a new author
#[utoipa::path(
    post,
    path = "/api/authors/register",
    tag = "Authors",
    request_body = AuthorRequest,
    responses(
        (status = 201, description = "Author registered", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Author already exists")
    )
)]
pub async fn register_author(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthorRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state
        .author_service
        .register_author(payload.email, payload.name, payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(MSG_AUTHOR_REGISTERED)),
    ))
}

/// Login and obtain an access token
#[utoipa::path(
    post,
    path = "/api/authors/login",
    tag = "Authors",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials"),
        (status = 502, description = "Identity provider failure")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let access_token = state
        .author_service
        .login(LoginCredentials {
            email: payload.email,
            password: payload.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        access_token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
    }))
}

/// List all authors
#[utoipa::path(
    get,
    path = "/api/authors",
    tag = "Authors",
    responses(
        (status = 200, description = "All authors", body = Vec<AuthorResponse>)
    )
)]
pub async fn list_authors(State(state): State<AppState>) -> AppResult<Json<Vec<AuthorResponse>>> {
    let authors = state.author_service.list_authors().await?;
    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

/// List authors awaiting approval
#[utoipa::path(
    get,
    path = "/api/authors/unauthorised",
    tag = "Authors",
    responses(
        (status = 200, description = "Authors not yet authorized", body = Vec<AuthorResponse>)
    )
)]
pub async fn list_unauthorised_authors(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AuthorResponse>>> {
    let authors = state.author_service.list_unauthorised_authors().await?;
    Ok(Json(authors.into_iter().map(AuthorResponse::from).collect()))
}

/// Get author by email
#[utoipa::path(
    get,
    path = "/api/authors/{id}",
    tag = "Authors",
    params(
        ("id" = String, Path, description = "Author email")
    ),
    responses(
        (status = 200, description = "Author profile", body = AuthorResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AuthorResponse>> {
    let author = state.author_service.get_author(&id).await?;
    Ok(Json(AuthorResponse::from(author)))
}

/// Update an author's name and password
#[utoipa::path(
    put,
    path = "/api/authors",
    tag = "Authors",
    request_body = AuthorRequest,
    responses(
        (status = 200, description = "Author updated", body = AuthorResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Author not found")
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthorRequest>,
) -> AppResult<Json<AuthorResponse>> {
    let author = state
        .author_service
        .update_author(payload.email, payload.name, payload.password)
        .await?;

    Ok(Json(AuthorResponse::from(author)))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/api/authors/{id}",
    tag = "Authors",
    params(
        ("id" = String, Path, description = "Author email")
    ),
    responses(
        (status = 200, description = "Author deleted", body = MessageResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.author_service.delete_author(&id).await?;
    Ok(Json(MessageResponse::new(MSG_AUTHOR_DELETED)))
}

/// Approve an author to publish books
#[utoipa::path(
    put,
    path = "/api/authors/{id}/approve",
    tag = "Authors",
    params(
        ("id" = String, Path, description = "Author email")
    ),
    responses(
        (status = 200, description = "Author authorized", body = MessageResponse),
        (status = 404, description = "Author not found")
    )
)]
pub async fn approve_author(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.author_service.approve_author(&id).await?;
    Ok(Json(MessageResponse::new(MSG_AUTHOR_APPROVED)))
}

/// List an author's books
#[utoipa::path(
    get,
    path = "/api/authors/{id}/books",
    tag = "Authors",
    params(
        ("id" = String, Path, description = "Author email")
    ),
    responses(
        (status = 200, description = "Books owned by the author", body = Vec<Book>),
        (status = 502, description = "Book service failure")
    )
)]
pub async fn author_books(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.author_service.author_books(&id).await?;
    Ok(Json(books))
}
