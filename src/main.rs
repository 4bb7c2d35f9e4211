mod config;
mod domain;
mod infrastructure;
mod presentation;
mod usecase;

use axum::Router;
use sea_orm::{ConnectOptions, Database};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    config::AppConfig,
    domain::{
        repositories::credential_repository::CredentialRepository,
        services::password_service::PasswordHasher,
    },
    infrastructure::{
        argon2_password_hasher::Argon2PasswordHasher,
        credential_repository::SqlCredentialRepository,
    },
    presentation::handlers::user_handler::create_user_router,
    usecase::{login_usecase::LoginUsecase, register_user_usecase::RegisterUserUsecase},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "credential_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(1)
        .sqlx_logging(config.sql_logging);

    let db = Database::connect(opt).await?;
    tracing::info!("Connected to database");

    let credential_repository = SqlCredentialRepository::new(db);
    credential_repository.ensure_table().await?;
    tracing::info!("Credentials table ready");

    let password_hasher = Argon2PasswordHasher::new();
    let login_service = LoginUsecase::new(credential_repository.clone(), password_hasher.clone());
    let register_user_usecase =
        RegisterUserUsecase::new(credential_repository.clone(), password_hasher.clone());

    let app = build_app(login_service, register_user_usecase);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

fn build_app<C: CredentialRepository + Clone + 'static, P: PasswordHasher + 'static>(
    login_service: LoginUsecase<C, P>,
    register_user_usecase: RegisterUserUsecase<C, P>,
) -> Router {
    Router::new()
        .merge(create_user_router(login_service, register_user_usecase))
        .layer(TraceLayer::new_for_http())
}
