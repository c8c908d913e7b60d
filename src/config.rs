use std::env;

use anyhow::{Context, Result};

use crate::activity::client::{DEFAULT_ACTIVITY_API_URL, DEFAULT_PAGE_SIZE};
use crate::ranking::loader::{DEFAULT_RANKING_FALLBACK, DEFAULT_RANKING_URL};

/// Base URL for activity detail pages.
pub const DEFAULT_APP_URL: &str = "https://app.ethos.network";

/// Central configuration loaded from environment variables.
///
/// Nothing here is secret. The .env file is loaded automatically at
/// startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Primary ranking source (URL or path).
    pub ranking_url: String,
    /// Tried when the primary source fails.
    pub ranking_fallback: String,
    /// Activity listing endpoint.
    pub activity_api_url: String,
    /// Base for `/activity/{kind}/{id}` links.
    pub app_url: String,
    /// Activities requested per user (first page only).
    pub page_size: u32,
    /// Developer debug channel (VOUCHBOARD_DEBUG).
    pub debug: bool,
}

impl Config {
    /// Load configuration from environment variables. Every value has a default.
    pub fn load() -> Result<Self> {
        let page_size = match env::var("VOUCHBOARD_PAGE_SIZE") {
            Ok(raw) => raw
                .trim()
                .parse::<u32>()
                .with_context(|| format!("VOUCHBOARD_PAGE_SIZE must be a number, got {raw:?}"))?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            ranking_url: env::var("VOUCHBOARD_RANKING_URL")
                .unwrap_or_else(|_| DEFAULT_RANKING_URL.to_string()),
            ranking_fallback: env::var("VOUCHBOARD_RANKING_FALLBACK")
                .unwrap_or_else(|_| DEFAULT_RANKING_FALLBACK.to_string()),
            activity_api_url: env::var("VOUCHBOARD_ACTIVITY_API_URL")
                .unwrap_or_else(|_| DEFAULT_ACTIVITY_API_URL.to_string()),
            app_url: env::var("VOUCHBOARD_APP_URL").unwrap_or_else(|_| DEFAULT_APP_URL.to_string()),
            page_size,
            debug: debug_flag_enabled(),
        })
    }

    /// Ranking sources in the order they should be tried.
    pub fn ranking_sources(&self) -> Vec<String> {
        let mut sources = vec![self.ranking_url.clone()];
        if !self.ranking_fallback.is_empty() && self.ranking_fallback != self.ranking_url {
            sources.push(self.ranking_fallback.clone());
        }
        sources
    }
}

/// Whether VOUCHBOARD_DEBUG is set to a truthy value.
///
/// Read separately from `Config::load` so logging can be set up before the
/// rest of the configuration is parsed.
pub fn debug_flag_enabled() -> bool {
    matches!(
        env::var("VOUCHBOARD_DEBUG")
            .map(|v| v.trim().to_ascii_lowercase())
            .as_deref(),
        Ok("1" | "true" | "yes")
    )
}
