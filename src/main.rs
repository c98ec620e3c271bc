// src/main.rs
use anyhow::Result;
use fude_core::application::{
    ports::{
        generation::{ContentProvider, ContentSynthesizer},
        time::Clock,
        util::SlugGenerator,
    },
    services::ApplicationServices,
};
use fude_core::config::AppConfig;
use fude_core::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use fude_core::infrastructure::{
    database,
    generation::{OpenAiContentProvider, OpenAiSettings, TemplateSynthesizer},
    repositories::{SqliteArticleReadRepository, SqliteArticleWriteRepository},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use fude_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(SqliteArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(SqliteArticleReadRepository::new(pool));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let synthesizer: Arc<dyn ContentSynthesizer> =
        Arc::new(TemplateSynthesizer::new(Arc::clone(&clock)));
    let provider = build_provider(&config)?;

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        provider,
        synthesizer,
        Arc::clone(&clock),
        slugger,
        config.provider_timeout(),
    ));
    tracing::info!(
        mode = services.generation_mode().as_str(),
        model = config.openai_model(),
        "article generation configured"
    );

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, RouterOptions::from_config(&config));
    let service = app.into_make_service_with_connect_info::<SocketAddr>();

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, service)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Live provider when a credential is configured; `None` selects offline mode.
fn build_provider(config: &AppConfig) -> Result<Option<Arc<dyn ContentProvider>>> {
    let Some(api_key) = config.openai_api_key() else {
        tracing::debug!("no provider credential configured, using offline synthesizer");
        return Ok(None);
    };

    let provider: Arc<dyn ContentProvider> = Arc::new(OpenAiContentProvider::new(OpenAiSettings {
        api_key: api_key.to_string(),
        base_url: config.openai_base_url().to_string(),
        model: config.openai_model().to_string(),
        timeout: config.provider_timeout(),
    })?);
    Ok(Some(provider))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
