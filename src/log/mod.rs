use crate::config::Config;
use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Install the global subscriber. `RUST_LOG` wins over the `debug` flag.
pub fn init_tracing(debug: bool) {
    let fallback = if debug { "niche_studio=debug" } else { "niche_studio=info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

fn tx_dir(root: &Path, tx: Uuid) -> PathBuf {
    root.join("tx").join(tx.to_string())
}

/// Where (and whether) request/response JSON for each flow call is written.
#[derive(Debug, Clone, Default)]
pub struct Artifacts {
    pub root: PathBuf,
    pub save_request: bool,
    pub save_response: bool,
}

impl Artifacts {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            root: PathBuf::from(&cfg.out_dir),
            save_request: cfg.save_request,
            save_response: cfg.save_response,
        }
    }

    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn enabled(&self) -> bool {
        self.save_request || self.save_response
    }

    pub fn save_stage<Req: Serialize, Resp: Serialize>(
        &self,
        stage: &str,
        tx: Uuid,
        req: &Req,
        resp: &Resp,
    ) -> anyhow::Result<SavedPaths> {
        let dir = tx_dir(&self.root, tx);
        let mut request_path = None;
        let mut response_path = None;
        if !self.enabled() {
            return Ok(SavedPaths { dir, request: None, response: None });
        }
        fs::create_dir_all(&dir)?;

        if self.save_request {
            let p = dir.join(format!("{stage}.request.json"));
            fs::write(&p, to_string_pretty(req)?)?;
            request_path = Some(p);
        }

        if self.save_response {
            let p = dir.join(format!("{stage}.response.json"));
            fs::write(&p, to_string_pretty(resp)?)?;
            response_path = Some(p);
        }

        Ok(SavedPaths { dir, request: request_path, response: response_path })
    }

    /// Like `save_stage`, but a write failure is only logged.
    pub fn record<Req: Serialize, Resp: Serialize>(&self, stage: &str, tx: Uuid, req: &Req, resp: &Resp) {
        match self.save_stage(stage, tx, req, resp) {
            Ok(saved) => {
                if let Some(p) = &saved.request {
                    tracing::debug!(stage, path = %p.display(), "request saved");
                }
                if let Some(p) = &saved.response {
                    tracing::debug!(stage, path = %p.display(), "response saved");
                }
            }
            Err(e) => tracing::warn!(stage, error = %e, "could not save artifacts"),
        }
    }
}
