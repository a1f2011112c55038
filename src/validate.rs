//! Field constraints for applications and components.
//!
//! The client uses these as its "form is locally valid" predicate; the server uses the
//! same checks before accepting a write.

use serde::{Deserialize, Serialize};

use crate::model::{Application, Component};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub field: String,
    pub message: String,
}

impl Issue {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Application and component names: 3-50 chars of lowercase alnum or '-'.
pub fn name(name: &str) -> Result<(), String> {
    let len = name.chars().count();
    if !(3..=50).contains(&len) {
        return Err("must be 3 to 50 characters".to_string());
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err("must be lowercase alnum or '-'".to_string());
    }
    Ok(())
}

pub fn cpus(cpus: u8) -> Result<(), String> {
    if !(1..=100).contains(&cpus) {
        return Err("must be between 1 and 100".to_string());
    }
    Ok(())
}

pub fn mem(mem: u32) -> Result<(), String> {
    if mem < 1 {
        return Err("must be at least 1".to_string());
    }
    Ok(())
}

/// At least 10 chars, starting with `<scheme>://`.
pub fn dist_url(url: &str) -> Result<(), String> {
    if url.len() < 10 {
        return Err("must be at least 10 characters".to_string());
    }
    let scheme_ok = url.split_once("://").is_some_and(|(scheme, _)| {
        !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    });
    if !scheme_ok {
        return Err("must start with a scheme, like hdfs://".to_string());
    }
    Ok(())
}

/// Starts with `major.minor.patch`.
pub fn version(version: &str) -> Result<(), String> {
    let mut parts = version.splitn(3, '.');
    let numeric = |s: Option<&str>| s.is_some_and(|s| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()));
    let major = parts.next();
    let minor = parts.next();
    let patch = parts
        .next()
        .map(|rest| rest.split(|c: char| !c.is_ascii_digit()).next().unwrap_or(""));
    if !(numeric(major) && numeric(minor) && numeric(patch)) {
        return Err("must start with major.minor.patch".to_string());
    }
    Ok(())
}

pub fn port(scheme: &str, port: u16) -> Result<(), String> {
    if scheme.trim().is_empty() {
        return Err("scheme cannot be empty".to_string());
    }
    if port == 0 {
        return Err("port must be between 1 and 65535".to_string());
    }
    Ok(())
}

pub fn env_key(key: &str) -> Result<(), String> {
    if key.trim().is_empty() {
        return Err("key cannot be empty".to_string());
    }
    if key.contains('=') {
        return Err("key cannot contain '='".to_string());
    }
    Ok(())
}

pub fn component(c: &Component) -> Vec<Issue> {
    component_at("", c)
}

pub fn application(app: &Application) -> Vec<Issue> {
    let mut issues = Vec::new();
    if let Err(msg) = name(&app.name) {
        issues.push(Issue::new("name", msg));
    }
    let mismatched = app.mismatched_component_keys();
    for (key, c) in &app.components {
        let prefix = format!("components.{}.", key);
        if mismatched.contains(key) {
            issues.push(Issue::new(
                format!("{}name", prefix),
                format!("must match its key '{}'", key),
            ));
        }
        issues.extend(component_at(&prefix, c));
    }
    issues
}

fn component_at(prefix: &str, c: &Component) -> Vec<Issue> {
    let mut issues = Vec::new();
    let mut check = |field: &str, res: Result<(), String>| {
        if let Err(msg) = res {
            issues.push(Issue::new(format!("{}{}", prefix, field), msg));
        }
    };

    check("name", name(&c.name));
    check("cpus", cpus(c.cpus));
    check("mem", mem(c.mem));
    check("dist_url", dist_url(&c.dist_url));
    check("version", version(&c.version));
    for (scheme, p) in &c.ports {
        check(&format!("ports.{}", scheme), port(scheme, *p));
    }
    for key in c.env.keys() {
        check(&format!("env.{}", key), env_key(key));
    }
    issues
}

#[cfg(test)]
#[path = "tests/validate_tests.rs"]
mod tests;
