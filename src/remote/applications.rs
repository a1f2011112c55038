use super::*;

impl RemoteClient {
    fn applications_url(&self) -> reqwest::Url {
        self.endpoint(&["api", "applications"])
    }

    /// The url of a single application; the name is always one path segment.
    fn application_url(&self, name: &str) -> reqwest::Url {
        self.endpoint(&["api", "applications", name])
    }

    pub fn list_applications(&self) -> Result<Vec<Application>> {
        with_retries("list applications", || {
            let resp = self
                .request(reqwest::Method::GET, self.applications_url())
                .send()
                .context("list applications request")?;
            let apps: Vec<Application> = self
                .ensure_ok(resp, "list applications")?
                .json()
                .context("parse applications")?;
            Ok(apps)
        })
    }

    pub fn get_application(&self, name: &str) -> Result<Application> {
        let resp = self
            .request(reqwest::Method::GET, self.application_url(name))
            .send()
            .context("get application request")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("application '{}' not found", name);
        }
        let app: Application = self
            .ensure_ok(resp, "get application")?
            .json()
            .context("parse application")?;
        Ok(app)
    }

    /// Create-or-replace by name; returns the stored representation.
    pub fn save_application(&self, app: &Application) -> Result<Application> {
        let resp = self
            .request(reqwest::Method::POST, self.applications_url())
            .json(app)
            .send()
            .context("save application request")?;
        let saved: Application = self
            .ensure_ok(resp, "save application")?
            .json()
            .context("parse saved application")?;
        Ok(saved)
    }

    pub fn delete_application(&self, name: &str) -> Result<()> {
        let resp = self
            .request(reqwest::Method::DELETE, self.application_url(name))
            .send()
            .context("delete application request")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("application '{}' not found", name);
        }
        let _ = self.ensure_ok(resp, "delete application")?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/remote/applications_tests.rs"]
mod tests;
