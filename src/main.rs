use std::sync::Arc;

use movie_explorer::{AppState, config::Config, db, store::MovieStore, summary::GroqClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movie_explorer=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Arc::new(Config::from_env()?);

    let http = reqwest::Client::builder().user_agent("movie-explorer/0.1").build()?;

    let db = db::connect_and_migrate(&config.database_url).await?;

    let summarizer = GroqClient::new(
        http,
        config.groq_api_key.clone(),
        config.groq_api_url.clone(),
        config.summary_model.clone(),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        store: MovieStore::new(db),
        summarizer: Arc::new(summarizer),
    });

    let app = movie_explorer::app(state);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
