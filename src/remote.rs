//! Blocking HTTP client for the agora application store.

use anyhow::{Context, Result};

use crate::model::Application;
use crate::sync::ApplicationStore;

mod http_client;
use self::http_client::with_retries;

mod types;
pub use self::types::*;
mod applications;

pub struct RemoteClient {
    base_url: reqwest::Url,
    token: Option<String>,
    client: reqwest::blocking::Client,
}

impl RemoteClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent("agora")
            .build()
            .context("build reqwest client")?;
        let base_url = base_url.into();
        let base_url = reqwest::Url::parse(base_url.trim())
            .with_context(|| format!("invalid store url '{}'", base_url))?;
        if base_url.cannot_be_a_base() {
            anyhow::bail!("invalid store url '{}'", base_url);
        }
        Ok(Self {
            base_url,
            token,
            client,
        })
    }
}

impl ApplicationStore for RemoteClient {
    fn query(&self) -> Result<Vec<Application>> {
        self.list_applications()
    }

    fn save(&self, app: &Application) -> Result<Application> {
        self.save_application(app)
    }

    fn remove(&self, name: &str) -> Result<()> {
        self.delete_application(name)
    }
}
