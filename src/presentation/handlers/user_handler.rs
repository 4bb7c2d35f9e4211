use std::sync::Arc;

use crate::{
    domain::{
        error::ErrorKind, repositories::credential_repository::CredentialRepository,
        services::password_service::PasswordHasher,
    },
    presentation::forms::{LOGIN_FORM, REGISTER_FORM},
    usecase::{login_usecase::LoginUsecase, register_user_usecase::RegisterUserUsecase},
};
use axum::{
    Form, Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use serde::{Deserialize, Serialize};

// Request

/// form body for both register and login.
/// Missing fields become empty strings so the usecase reports them.
#[derive(Serialize, Deserialize)]
pub struct CredentialsForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

// Response

/// json for successful login
#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// json for failed login
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn new(error: &str) -> Json<Self> {
        Json(Self {
            error: error.to_string(),
        })
    }
}

/* Router Function and Handler Function */

/// Router for `/register` and `/login`, mounted at the root by main
pub fn create_user_router<
    C: CredentialRepository + Clone + 'static,
    P: PasswordHasher + 'static,
>(
    login_service: LoginUsecase<C, P>,
    register_service: RegisterUserUsecase<C, P>,
) -> Router {
    let state = AppState {
        login_service: Arc::new(login_service),
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/register", get(register_form).post(register::<C, P>))
        .route("/login", get(login_form).post(login::<C, P>))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<C: CredentialRepository, P: PasswordHasher> {
    pub login_service: Arc<LoginUsecase<C, P>>,
    pub register_service: Arc<RegisterUserUsecase<C, P>>,
}

// handler function

async fn register_form() -> Html<&'static str> {
    Html(REGISTER_FORM)
}

async fn login_form() -> Html<&'static str> {
    Html(LOGIN_FORM)
}

/// handler function for register
async fn register<C: CredentialRepository + Clone + 'static, P: PasswordHasher + 'static>(
    State(state): State<AppState<C, P>>,
    Form(payload): Form<CredentialsForm>,
) -> impl IntoResponse {
    match state
        .register_service
        .register(payload.username, payload.password)
        .await
    {
        Ok(username) => (
            StatusCode::OK,
            format!("User '{}' registered successfully!", username),
        )
            .into_response(),
        Err(e) => match e.kind() {
            ErrorKind::Validation => (
                StatusCode::BAD_REQUEST,
                "Username and password are required.",
            )
                .into_response(),
            // cause is logged by the usecase, not echoed to the client
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "Error registering user.").into_response(),
        },
    }
}

/// handler function for login
async fn login<C: CredentialRepository + Clone + 'static, P: PasswordHasher + 'static>(
    State(state): State<AppState<C, P>>,
    Form(payload): Form<CredentialsForm>,
) -> impl IntoResponse {
    match state
        .login_service
        .authenticate(payload.username, payload.password)
        .await
    {
        Ok(_) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Login successful".to_string(),
            }),
        )
            .into_response(),
        Err(e) => match e.kind() {
            ErrorKind::Validation => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new("Username and password are required"),
            )
                .into_response(),
            ErrorKind::Unauthorized => {
                (StatusCode::UNAUTHORIZED, ErrorResponse::new("Invalid credentials")).into_response()
            }
            ErrorKind::Storage | ErrorKind::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Could not log in"),
            )
                .into_response(),
        },
    }
}
