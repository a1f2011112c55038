use super::*;

impl Editor {
    /// Persists the component working copy inside a full snapshot of its application.
    ///
    /// A renamed component replaces its old entry; saving an unsaved application
    /// creates it.
    pub fn stage_save_component(&self) -> Result<PendingWrite, SyncError> {
        let mut snapshot = self.base_snapshot()?;
        let name = self.component.name().trim().to_string();
        if name.is_empty() {
            return Err(SyncError::MissingName("component"));
        }

        let mut value = self.component.value().clone();
        value.name = name.clone();
        put_entry(
            &mut snapshot.components,
            self.component.superseded_key(),
            &name,
            value,
        );
        tracing::debug!(
            application = %snapshot.name,
            component = %name,
            rename = self.component.is_rename(),
            "staging component save"
        );

        let previous_app = self
            .selected_app
            .as_ref()
            .and_then(|a| a.remote().as_saved())
            .map(str::to_string);
        Ok(PendingWrite {
            request: WriteRequest::Save(snapshot),
            effect: Effect::SaveComponent {
                previous_app,
                name,
                app_focus: self.app_focus,
                focus: self.component_focus,
            },
        })
    }

    /// Removes a component, and with it all of its ports and env vars.
    pub fn stage_remove_component(&self, name: &str) -> Result<PendingWrite, SyncError> {
        let mut snapshot = self.base_snapshot()?;
        if snapshot.components.shift_remove(name).is_none() {
            return Err(SyncError::UnknownComponent(name.to_string()));
        }
        Ok(PendingWrite {
            effect: Effect::RemoveComponent {
                app: snapshot.name.clone(),
                name: name.to_string(),
            },
            request: WriteRequest::Save(snapshot),
        })
    }

    pub(super) fn reconcile_saved_component(
        &mut self,
        previous_app: Option<String>,
        name: &str,
        app_focus: u64,
        focus: u64,
        app: Application,
    ) {
        let app_name = app.name.clone();
        self.commit_application(previous_app.as_deref(), app);

        if app_focus == self.app_focus {
            if let Some(selected) = self.selected_app.as_mut().filter(|s| s.is_new()) {
                selected.commit_as(app_name);
            }
        }
        if focus == self.component_focus {
            self.component.commit_as(name);
        }
    }

    pub(super) fn reconcile_removed_component(
        &mut self,
        previous_app: &str,
        name: &str,
        app: Application,
    ) {
        self.commit_application(Some(previous_app), app);
        let same_app = self
            .selected_app
            .as_ref()
            .is_some_and(|a| a.remote().as_saved() == Some(previous_app));
        let was_selected = same_app && self.component.remote().as_saved() == Some(name);
        if was_selected {
            self.add_component_draft();
        }
    }
}
