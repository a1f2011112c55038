//! Free-text fields of the component form, each behind its own commit trigger.
//!
//! The form only decides *when* a field is committed. Turning commits into a
//! component save is [`crate::sync::Synchronizer::commit_fields`].

use std::fmt;
use std::time::{Duration, Instant};

use crate::debounce::{CommitTrigger, DEFAULT_QUIET_PERIOD, TimerId};
use crate::model::Component;
use crate::validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Cpus,
    Mem,
    DiskSpace,
    DistUrl,
    Command,
    Version,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::Cpus,
        Field::Mem,
        Field::DiskSpace,
        Field::DistUrl,
        Field::Command,
        Field::Version,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Cpus => "cpus",
            Field::Mem => "mem",
            Field::DiskSpace => "disk_space",
            Field::DistUrl => "dist_url",
            Field::Command => "command",
            Field::Version => "version",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    /// Text shown for this field of `component`.
    pub fn read(self, component: &Component) -> String {
        match self {
            Field::Name => component.name.clone(),
            Field::Cpus => component.cpus.to_string(),
            Field::Mem => component.mem.to_string(),
            Field::DiskSpace => component
                .disk_space
                .map(|d| d.to_string())
                .unwrap_or_default(),
            Field::DistUrl => component.dist_url.clone(),
            Field::Command => component.command.clone().unwrap_or_default(),
            Field::Version => component.version.clone(),
        }
    }

    /// Parses and validates `text`, then stores it in `component`.
    ///
    /// Empty text clears the optional fields.
    pub fn write(self, component: &mut Component, text: &str) -> Result<(), String> {
        let text = text.trim();
        match self {
            Field::Name => {
                validate::name(text)?;
                component.name = text.to_string();
            }
            Field::Cpus => {
                let cpus = parse_number(text)?;
                validate::cpus(cpus)?;
                component.cpus = cpus;
            }
            Field::Mem => {
                let mem = parse_number(text)?;
                validate::mem(mem)?;
                component.mem = mem;
            }
            Field::DiskSpace => {
                component.disk_space = if text.is_empty() {
                    None
                } else {
                    Some(parse_number(text)?)
                };
            }
            Field::DistUrl => {
                validate::dist_url(text)?;
                component.dist_url = text.to_string();
            }
            Field::Command => {
                component.command = (!text.is_empty()).then(|| text.to_string());
            }
            Field::Version => {
                validate::version(text)?;
                component.version = text.to_string();
            }
        }
        Ok(())
    }

    pub fn is_valid(self, text: &str) -> bool {
        self.write(&mut Component::default(), text).is_ok()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn parse_number<N: std::str::FromStr>(text: &str) -> Result<N, String> {
    text.parse()
        .map_err(|_| format!("'{}' is not a valid number", text))
}

/// A field whose trigger fired with a valid, changed value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldCommit {
    pub field: Field,
    pub value: String,
}

#[derive(Clone, Debug)]
pub struct ComponentForm {
    triggers: [CommitTrigger<String>; 7],
}

impl Default for ComponentForm {
    fn default() -> Self {
        Self::new(&Component::default(), DEFAULT_QUIET_PERIOD)
    }
}

impl ComponentForm {
    pub fn new(component: &Component, quiet: Duration) -> Self {
        Self {
            triggers: Field::ALL
                .map(|field| CommitTrigger::with_quiet_period(field.read(component), quiet)),
        }
    }

    /// Shows a different component; pending timers are dropped without committing.
    pub fn load(&mut self, component: &Component) {
        for field in Field::ALL {
            self.triggers[field.index()].reset(field.read(component));
        }
    }

    pub fn value(&self, field: Field) -> &str {
        self.triggers[field.index()].value()
    }

    pub fn focus(&mut self, field: Field) {
        self.triggers[field.index()].focus();
    }

    pub fn input(&mut self, field: Field, text: impl Into<String>, now: Instant) -> Option<TimerId> {
        self.triggers[field.index()].change(text.into(), now)
    }

    pub fn blur(&mut self, field: Field) -> Option<FieldCommit> {
        self.triggers[field.index()]
            .blur(|text| field.is_valid(text))
            .map(|value| FieldCommit { field, value })
    }

    /// Commits every field whose quiet period has elapsed by `now`.
    pub fn poll(&mut self, now: Instant) -> Vec<FieldCommit> {
        Field::ALL
            .into_iter()
            .filter_map(|field| {
                self.triggers[field.index()]
                    .poll(now, |text| field.is_valid(text))
                    .map(|value| FieldCommit { field, value })
            })
            .collect()
    }

    /// Commits every field right away, as when the form is submitted.
    pub fn flush(&mut self) -> Vec<FieldCommit> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.blur(field))
            .collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.triggers.iter().filter_map(|t| t.next_deadline()).min()
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
