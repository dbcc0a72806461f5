use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_SUMMARY_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub database_url: String,
    pub groq_api_key: String,
    pub groq_api_url: String,
    pub summary_model: String,
    /// Base URL the dashboard calls; empty means same origin.
    pub api_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 =
            std::env::var("PORT").unwrap_or_else(|_| "8000".to_string()).parse().context("PORT")?;

        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://movies.db?mode=rwc".to_string());

        let groq_api_key = std::env::var("GROQ_API_KEY").unwrap_or_default();
        let groq_api_url =
            std::env::var("GROQ_API_URL").unwrap_or_else(|_| DEFAULT_GROQ_API_URL.to_string());
        let summary_model =
            std::env::var("SUMMARY_MODEL").unwrap_or_else(|_| DEFAULT_SUMMARY_MODEL.to_string());

        let api_url = std::env::var("API_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_default();

        Ok(Self {
            addr: format!("{host}:{port}").parse().context("HOST/PORT")?,
            database_url,
            groq_api_key,
            groq_api_url,
            summary_model,
            api_url,
        })
    }
}
