use super::*;

impl Editor {
    /// Persists the selected application under its working name.
    ///
    /// A rename stores the full application under the new name first; the old entry is
    /// removed by the follow-up write returned from [`Editor::apply`]. Saving under the
    /// unchanged name is a single write.
    pub fn stage_save_application(&self) -> Result<PendingWrite, SyncError> {
        let selected = self
            .selected_app
            .as_ref()
            .ok_or(SyncError::NoApplicationSelected)?;
        let name = selected.name().trim();
        if name.is_empty() {
            return Err(SyncError::MissingName("application"));
        }

        let mut snapshot = self.base_snapshot()?;
        snapshot.name = name.to_string();
        tracing::debug!(application = %snapshot.name, rename = selected.is_rename(), "staging application save");

        Ok(PendingWrite {
            request: WriteRequest::Save(snapshot),
            effect: Effect::SaveApplication {
                previous: selected.superseded_key().map(str::to_string),
                focus: self.app_focus,
            },
        })
    }

    pub fn stage_remove_application(&self, name: &str) -> Result<PendingWrite, SyncError> {
        if name.trim().is_empty() {
            return Err(SyncError::MissingName("application"));
        }
        Ok(PendingWrite {
            request: WriteRequest::Remove {
                name: name.to_string(),
            },
            effect: Effect::RemoveApplication {
                name: name.to_string(),
            },
        })
    }

    pub(super) fn reconcile_saved_application(
        &mut self,
        previous: Option<String>,
        focus: u64,
        app: Application,
    ) -> Option<PendingWrite> {
        let name = app.name.clone();
        // The old entry stays listed until its removal succeeds.
        self.commit_application(None, app);
        if focus == self.app_focus {
            if let Some(selected) = self.selected_app.as_mut() {
                selected.commit_as(name.clone());
            }
        }

        let previous = previous.filter(|p| *p != name)?;
        Some(PendingWrite {
            request: WriteRequest::Remove {
                name: previous.clone(),
            },
            effect: Effect::RemoveApplication { name: previous },
        })
    }

    pub(super) fn reconcile_removed_application(&mut self, name: &str) {
        self.applications.retain(|a| a.name != name);
        let was_selected = self
            .selected_app
            .as_ref()
            .is_some_and(|a| a.key() == name || a.name() == name);
        if was_selected {
            self.create_application();
        }
    }
}
