//! Remote-key tracking for entities whose remote key is their (mutable) name.

use crate::model::{Application, Component, EnvVar, PortMapping};

/// The name under which an entity currently exists in the remote store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RemoteKey {
    /// Never saved.
    #[default]
    Unsaved,
    Saved(String),
}

impl RemoteKey {
    pub fn as_saved(&self) -> Option<&str> {
        match self {
            RemoteKey::Unsaved => None,
            RemoteKey::Saved(k) => Some(k),
        }
    }
}

/// Entities addressed by a name inside their parent collection.
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for Application {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Component {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for PortMapping {
    fn name(&self) -> &str {
        &self.scheme
    }
}

impl Named for EnvVar {
    fn name(&self) -> &str {
        &self.key
    }
}

/// A named entity paired with the remote key it was last persisted under.
///
/// The remote key never leaves this wrapper: only `value` is handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tracked<T> {
    remote: RemoteKey,
    value: T,
}

impl<T: Default> Default for Tracked<T> {
    fn default() -> Self {
        Self::unsaved(T::default())
    }
}

impl<T> Tracked<T> {
    pub fn unsaved(value: T) -> Self {
        Self {
            remote: RemoteKey::Unsaved,
            value,
        }
    }

    pub fn remote(&self) -> &RemoteKey {
        &self.remote
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut T {
        &mut self.value
    }

    pub fn is_new(&self) -> bool {
        self.remote == RemoteKey::Unsaved
    }

    /// Records that the entity now exists remotely under `name`.
    pub fn commit_as(&mut self, name: impl Into<String>) {
        self.remote = RemoteKey::Saved(name.into());
    }
}

impl<T: Named> Tracked<T> {
    /// Adopts an entity that already exists remotely under its current name.
    pub fn saved(value: T) -> Self {
        let remote = RemoteKey::Saved(value.name().to_string());
        Self { remote, value }
    }

    pub fn name(&self) -> &str {
        self.value.name()
    }

    /// Lookup key: the remote key once saved, the current name before that.
    pub fn key(&self) -> &str {
        match &self.remote {
            RemoteKey::Saved(k) => k,
            RemoteKey::Unsaved => self.value.name(),
        }
    }

    pub fn is_rename(&self) -> bool {
        matches!(&self.remote, RemoteKey::Saved(k) if k != self.value.name())
    }

    /// The remote key to delete when saving a rename; `None` for new or same-name saves.
    pub fn superseded_key(&self) -> Option<&str> {
        if self.is_rename() {
            self.remote.as_saved()
        } else {
            None
        }
    }

    pub fn commit(&mut self) {
        self.remote = RemoteKey::Saved(self.value.name().to_string());
    }
}

#[cfg(test)]
#[path = "tests/tracking_tests.rs"]
mod tests;
