//! Optimistic persistence: stage a snapshot, write it, reconcile on success.

use anyhow::Result;

use crate::editor::{Editor, PendingWrite, WriteOutcome, WriteRequest};
use crate::error::SyncError;
use crate::form::FieldCommit;
use crate::model::{Application, EnvVar, PortMapping};
use crate::tracking::Tracked;

/// Remote application store, addressed by application name.
///
/// Implementations only ever see wire types; key-tracking state stays in the editor.
pub trait ApplicationStore {
    fn query(&self) -> Result<Vec<Application>>;

    /// Create-or-replace; returns the store's canonical representation.
    fn save(&self, app: &Application) -> Result<Application>;

    /// Deletes by name. Deleting a missing application is an error.
    fn remove(&self, name: &str) -> Result<()>;
}

impl<S: ApplicationStore + ?Sized> ApplicationStore for &S {
    fn query(&self) -> Result<Vec<Application>> {
        (**self).query()
    }

    fn save(&self, app: &Application) -> Result<Application> {
        (**self).save(app)
    }

    fn remove(&self, name: &str) -> Result<()> {
        (**self).remove(name)
    }
}

/// Issues a staged write against `store` and maps transport errors.
pub fn execute<S: ApplicationStore + ?Sized>(
    store: &S,
    pending: &PendingWrite,
) -> Result<WriteOutcome, SyncError> {
    let operation = pending.operation();
    match pending.request() {
        WriteRequest::Save(app) => store
            .save(app)
            .map(WriteOutcome::Saved)
            .map_err(|err| SyncError::write_failed(operation, &err)),
        WriteRequest::Remove { name } => store
            .remove(name)
            .map(|()| WriteOutcome::Removed)
            .map_err(|err| SyncError::write_failed(operation, &err)),
    }
}

/// Owns the editor state and a store; every operation is stage → write → apply.
pub struct Synchronizer<S> {
    editor: Editor,
    store: S,
}

impl<S: ApplicationStore> Synchronizer<S> {
    pub fn new(store: S) -> Self {
        Self {
            editor: Editor::default(),
            store,
        }
    }

    /// Loads the application list. On failure the current list is kept.
    pub fn connect(store: S) -> Result<Self, SyncError> {
        let mut sync = Self::new(store);
        sync.refresh()?;
        Ok(sync)
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn refresh(&mut self) -> Result<(), SyncError> {
        match self.store.query() {
            Ok(apps) => {
                tracing::debug!(count = apps.len(), "applications loaded");
                self.editor.replace_applications(apps);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %format!("{:#}", err), "query failed; keeping current list");
                Err(SyncError::read_failed(&err))
            }
        }
    }

    pub fn select_application(&mut self, name: &str) -> Result<(), SyncError> {
        self.editor.select_application(name)
    }

    pub fn create_application(&mut self) {
        self.editor.create_application();
    }

    pub fn select_component(&mut self, name: &str) -> Result<(), SyncError> {
        self.editor.select_component(name)
    }

    pub fn add_component_draft(&mut self) {
        self.editor.add_component_draft();
    }

    pub fn save_application(&mut self) -> Result<(), SyncError> {
        let pending = self.editor.stage_save_application()?;
        self.run(pending)
    }

    pub fn remove_application(&mut self, name: &str) -> Result<(), SyncError> {
        let pending = self.editor.stage_remove_application(name)?;
        self.run(pending)
    }

    pub fn save_component(&mut self) -> Result<(), SyncError> {
        let pending = self.editor.stage_save_component()?;
        self.run(pending)
    }

    /// Writes committed form fields into the component working copy and saves it.
    ///
    /// Commits that no longer parse are skipped; nothing is written when none apply.
    pub fn commit_fields(&mut self, commits: &[FieldCommit]) -> Result<(), SyncError> {
        let mut applied = 0;
        for commit in commits {
            match commit.field.write(self.editor.component_mut(), &commit.value) {
                Ok(()) => applied += 1,
                Err(reason) => {
                    tracing::debug!(field = %commit.field, %reason, "skipping invalid field commit");
                }
            }
        }
        if applied == 0 {
            return Ok(());
        }
        self.save_component()
    }

    pub fn remove_component(&mut self, name: &str) -> Result<(), SyncError> {
        let pending = self.editor.stage_remove_component(name)?;
        self.run(pending)
    }

    pub fn save_port_mapping(&mut self, scheme: &str, port: u16) -> Result<(), SyncError> {
        let entry = Tracked::unsaved(PortMapping::new(scheme, port));
        let pending = self.editor.stage_save_port(&entry)?;
        self.run(pending)
    }

    /// Saves an existing port entry, renaming its scheme when it was edited.
    pub fn save_port_entry(&mut self, entry: &mut Tracked<PortMapping>) -> Result<(), SyncError> {
        let pending = self.editor.stage_save_port(entry)?;
        self.run(pending)?;
        entry.commit();
        Ok(())
    }

    pub fn save_new_port(&mut self) -> Result<(), SyncError> {
        let pending = self.editor.stage_save_new_port()?;
        self.run(pending)
    }

    pub fn delete_port_mapping(&mut self, scheme: &str) -> Result<(), SyncError> {
        let pending = self.editor.stage_delete_port(scheme)?;
        self.run(pending)
    }

    pub fn save_env_var(&mut self, key: &str, value: &str) -> Result<(), SyncError> {
        let entry = Tracked::unsaved(EnvVar::new(key, value));
        let pending = self.editor.stage_save_env(&entry)?;
        self.run(pending)
    }

    /// Saves an existing env entry, renaming its key when it was edited.
    pub fn save_env_entry(&mut self, entry: &mut Tracked<EnvVar>) -> Result<(), SyncError> {
        let pending = self.editor.stage_save_env(entry)?;
        self.run(pending)?;
        entry.commit();
        Ok(())
    }

    pub fn save_new_env_var(&mut self) -> Result<(), SyncError> {
        let pending = self.editor.stage_save_new_env()?;
        self.run(pending)
    }

    pub fn delete_env_var(&mut self, key: &str) -> Result<(), SyncError> {
        let pending = self.editor.stage_delete_env(key)?;
        self.run(pending)
    }

    /// Executes a staged write and any follow-ups it produces.
    pub fn run(&mut self, pending: PendingWrite) -> Result<(), SyncError> {
        let mut next = Some(pending);
        while let Some(pending) = next.take() {
            let outcome = execute(&self.store, &pending);
            next = self.editor.apply(pending, outcome)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/sync_tests.rs"]
mod tests;
