//! Shared state for CLI commands

use std::path::Path;

use anyhow::{Context, Result};

use cirqulofit::api::ApiClient;
use cirqulofit::auth::{self, SessionStatus, TokenStore};
use cirqulofit::config::Config;
use cirqulofit::stats::{
    FileStatsCache, GamificationEngine, GamificationEvent, HydrationSource, RemoteStatsProvider,
    StatsStore,
};

/// Config, backend client, token file and stats store for one invocation
pub struct AppContext {
    pub config: Config,
    pub client: ApiClient,
    pub tokens: TokenStore,
    pub store: StatsStore<FileStatsCache>,
    pub session: SessionStatus,
}

impl AppContext {
    /// Load config (global file unless `config_path` is given) and open the
    /// stats store. Nothing is fetched yet.
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        let data_dir = config.data_dir();
        tracing::debug!("Using data directory {}", data_dir.display());

        Ok(Self {
            client: ApiClient::new(&config.api),
            tokens: TokenStore::in_dir(&data_dir),
            store: StatsStore::new(FileStatsCache::in_dir(&data_dir)),
            session: SessionStatus::Anonymous,
            config,
        })
    }

    /// Verify the stored session, then hydrate stats (backend, cache, defaults)
    pub async fn hydrate(&mut self) -> Result<HydrationSource> {
        let ticket = self.store.begin_hydration();
        let client = self.client.clone();
        let tokens = self.tokens.clone();

        let (session, remote) = blocking(move || {
            let session = auth::verify_session(&client, &tokens);
            let remote = session.token().map(|token| client.fetch_stats(token));
            (session, remote)
        })
        .await?;

        self.client = self.client.clone().with_token(session.token().cloned());
        self.session = session;

        Ok(self
            .store
            .complete_hydration(ticket, remote)
            .unwrap_or(HydrationSource::Defaults))
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.token().is_some()
    }

    pub fn engine(&mut self) -> &mut GamificationEngine<FileStatsCache> {
        self.store.engine_mut()
    }
}

/// Run blocking backend I/O off the async runtime
pub async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .context("Background task failed")
}

pub fn print_events(events: &[GamificationEvent]) {
    for event in events {
        println!("  {}", event);
    }
}

/// `[########------------] 40%`
pub fn progress_bar(percent: f64, width: usize) -> String {
    let percent = if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    format!(
        "[{}{}] {:.0}%",
        "#".repeat(filled),
        "-".repeat(width - filled),
        percent
    )
}
