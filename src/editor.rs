//! Working-copy editor over applications, components, ports and env vars.
//!
//! Every mutation is *staged*: the editor builds the complete application snapshot
//! to persist and a description of how to reconcile once the store answers. Live
//! state only changes in [`Editor::apply`], and only for successful outcomes.

use indexmap::IndexMap;

use crate::error::SyncError;
use crate::model::{Application, Component, EnvVar, PortMapping};
use crate::tracking::{Named, RemoteKey, Tracked};

mod applications;
mod components;
mod entries;
mod selection;

pub use self::entries::EntryChange;

/// Working name of the selected application; the committed value lives in the collection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct AppName(String);

impl Named for AppName {
    fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct Editor {
    applications: Vec<Application>,

    selected_app: Option<Tracked<AppName>>,
    component: Tracked<Component>,
    new_port: Tracked<PortMapping>,
    new_env: Tracked<EnvVar>,

    // Bumped whenever the focus moves to a different entity, so late outcomes can
    // tell whether the working copy they were staged from is still the one shown.
    app_focus: u64,
    component_focus: u64,
}

/// What a staged write asks the store to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteRequest {
    Save(Application),
    Remove { name: String },
}

/// What the store reported back for a write.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WriteOutcome {
    Saved(Application),
    Removed,
}

/// A write that has been computed but whose outcome has not been applied yet.
#[derive(Clone, Debug)]
pub struct PendingWrite {
    request: WriteRequest,
    effect: Effect,
}

impl PendingWrite {
    pub fn request(&self) -> &WriteRequest {
        &self.request
    }

    pub fn operation(&self) -> &'static str {
        self.effect.operation()
    }
}

#[derive(Clone, Debug)]
enum Effect {
    SaveApplication {
        previous: Option<String>,
        focus: u64,
    },
    RemoveApplication {
        name: String,
    },
    SaveComponent {
        previous_app: Option<String>,
        name: String,
        app_focus: u64,
        focus: u64,
    },
    RemoveComponent {
        app: String,
        name: String,
    },
    Entry {
        app: String,
        component: String,
        change: EntryChange,
        from_draft: bool,
        focus: u64,
    },
}

impl Effect {
    fn operation(&self) -> &'static str {
        match self {
            Effect::SaveApplication { .. } => "save application",
            Effect::RemoveApplication { .. } => "remove application",
            Effect::SaveComponent { .. } => "save component",
            Effect::RemoveComponent { .. } => "remove component",
            Effect::Entry { change, .. } => change.operation(),
        }
    }
}

impl Editor {
    pub fn new(applications: Vec<Application>) -> Self {
        Self {
            applications,
            ..Self::default()
        }
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn application(&self, name: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.name == name)
    }

    /// Committed state of the selected application; `None` when nothing is selected or
    /// the selection has never been saved.
    pub fn selected_application(&self) -> Option<&Application> {
        let key = self.selected_app.as_ref()?.remote().as_saved()?;
        self.application(key)
    }

    pub fn selected_application_name(&self) -> Option<&str> {
        self.selected_app.as_ref().map(|a| a.name())
    }

    pub fn selected_application_key(&self) -> Option<&RemoteKey> {
        self.selected_app.as_ref().map(|a| a.remote())
    }

    pub fn selected_component(&self) -> &Tracked<Component> {
        &self.component
    }

    /// The component working copy, for form edits that are saved later.
    pub fn component_mut(&mut self) -> &mut Component {
        self.component.value_mut()
    }

    pub fn new_port(&self) -> &Tracked<PortMapping> {
        &self.new_port
    }

    pub fn new_port_mut(&mut self) -> &mut PortMapping {
        self.new_port.value_mut()
    }

    pub fn new_env(&self) -> &Tracked<EnvVar> {
        &self.new_env
    }

    pub fn new_env_mut(&mut self) -> &mut EnvVar {
        self.new_env.value_mut()
    }

    /// Reconciles a staged write with the store's answer.
    ///
    /// Failures leave every piece of live state untouched and are returned as-is.
    /// A successful write may require a follow-up write (application renames remove
    /// the old entry after the new one is stored).
    pub fn apply(
        &mut self,
        pending: PendingWrite,
        outcome: Result<WriteOutcome, SyncError>,
    ) -> Result<Option<PendingWrite>, SyncError> {
        let operation = pending.operation();
        let outcome = match outcome {
            Ok(o) => o,
            Err(err) => {
                tracing::warn!(operation, error = %err, "write rejected; live state unchanged");
                return Err(err);
            }
        };

        let follow_up = match (pending.effect, outcome) {
            (Effect::SaveApplication { previous, focus }, WriteOutcome::Saved(app)) => {
                self.reconcile_saved_application(previous, focus, app)
            }
            (Effect::RemoveApplication { name }, WriteOutcome::Removed) => {
                self.reconcile_removed_application(&name);
                None
            }
            (
                Effect::SaveComponent {
                    previous_app,
                    name,
                    app_focus,
                    focus,
                },
                WriteOutcome::Saved(app),
            ) => {
                self.reconcile_saved_component(previous_app, &name, app_focus, focus, app);
                None
            }
            (Effect::RemoveComponent { app: previous, name }, WriteOutcome::Saved(app)) => {
                self.reconcile_removed_component(&previous, &name, app);
                None
            }
            (
                Effect::Entry {
                    app: previous,
                    component,
                    change,
                    from_draft,
                    focus,
                },
                WriteOutcome::Saved(app),
            ) => {
                self.reconcile_entry(&previous, &component, change, from_draft, focus, app);
                None
            }
            _ => return Err(SyncError::UnexpectedOutcome { operation }),
        };

        tracing::debug!(operation, "write committed");
        Ok(follow_up)
    }

    /// Starting point for every application snapshot: a deep copy of the committed
    /// selected application, or an empty one for a new application.
    fn base_snapshot(&self) -> Result<Application, SyncError> {
        let selected = self
            .selected_app
            .as_ref()
            .ok_or(SyncError::NoApplicationSelected)?;
        match selected.remote() {
            RemoteKey::Saved(key) => self
                .application(key)
                .cloned()
                .ok_or_else(|| SyncError::UnknownApplication(key.clone())),
            RemoteKey::Unsaved => {
                let name = selected.name().trim();
                if name.is_empty() {
                    return Err(SyncError::MissingName("application"));
                }
                Ok(Application::named(name))
            }
        }
    }

    /// Stores the server's canonical application, replacing `previous` (if it was
    /// renamed) and deduplicating by name.
    fn commit_application(&mut self, previous: Option<&str>, app: Application) {
        if let Some(previous) = previous.filter(|p| *p != app.name) {
            self.applications.retain(|a| a.name != previous);
        }
        match self.applications.iter_mut().find(|a| a.name == app.name) {
            Some(slot) => *slot = app,
            None => self.applications.push(app),
        }
    }
}

/// Inserts `value` under `new`, dropping the `superseded` key. A renamed entry keeps
/// its position unless the new key already exists.
pub(crate) fn put_entry<V>(
    map: &mut IndexMap<String, V>,
    superseded: Option<&str>,
    new: &str,
    value: V,
) {
    if let Some(old) = superseded.filter(|old| *old != new) {
        if !map.contains_key(new) {
            if let Some(idx) = map.get_index_of(old) {
                map.shift_insert(idx, new.to_string(), value);
                map.shift_remove(old);
                return;
            }
        }
        map.shift_remove(old);
    }
    map.insert(new.to_string(), value);
}

#[cfg(test)]
#[path = "tests/editor_tests.rs"]
mod tests;
