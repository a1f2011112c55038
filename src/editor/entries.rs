use super::*;

/// A single port or env edit inside one component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryChange {
    SetPort {
        superseded: Option<String>,
        scheme: String,
        port: u16,
    },
    DeletePort {
        scheme: String,
    },
    SetEnv {
        superseded: Option<String>,
        key: String,
        value: String,
    },
    DeleteEnv {
        key: String,
    },
}

impl EntryChange {
    pub(super) fn operation(&self) -> &'static str {
        match self {
            EntryChange::SetPort { .. } => "save port mapping",
            EntryChange::DeletePort { .. } => "delete port mapping",
            EntryChange::SetEnv { .. } => "save env var",
            EntryChange::DeleteEnv { .. } => "delete env var",
        }
    }

    fn is_port(&self) -> bool {
        matches!(
            self,
            EntryChange::SetPort { .. } | EntryChange::DeletePort { .. }
        )
    }

    pub fn apply_to(&self, component: &mut Component) {
        match self {
            EntryChange::SetPort {
                superseded,
                scheme,
                port,
            } => put_entry(&mut component.ports, superseded.as_deref(), scheme, *port),
            EntryChange::DeletePort { scheme } => {
                component.ports.shift_remove(scheme);
            }
            EntryChange::SetEnv {
                superseded,
                key,
                value,
            } => put_entry(
                &mut component.env,
                superseded.as_deref(),
                key,
                value.clone(),
            ),
            EntryChange::DeleteEnv { key } => {
                component.env.shift_remove(key);
            }
        }
    }
}

impl Editor {
    /// Saves a port mapping; a tracked entry whose scheme changed replaces its old scheme.
    pub fn stage_save_port(&self, entry: &Tracked<PortMapping>) -> Result<PendingWrite, SyncError> {
        self.stage_entry(port_change(entry)?, false)
    }

    /// Saves the "add new" port draft; the draft is cleared once the write succeeds.
    pub fn stage_save_new_port(&self) -> Result<PendingWrite, SyncError> {
        self.stage_entry(port_change(&self.new_port)?, true)
    }

    pub fn stage_delete_port(&self, scheme: &str) -> Result<PendingWrite, SyncError> {
        let change = EntryChange::DeletePort {
            scheme: scheme.to_string(),
        };
        self.stage_entry(change, false)
    }

    /// Saves an env var; a tracked entry whose key changed replaces its old key.
    pub fn stage_save_env(&self, entry: &Tracked<EnvVar>) -> Result<PendingWrite, SyncError> {
        self.stage_entry(env_change(entry)?, false)
    }

    /// Saves the "add new" env draft; the draft is cleared once the write succeeds.
    pub fn stage_save_new_env(&self) -> Result<PendingWrite, SyncError> {
        self.stage_entry(env_change(&self.new_env)?, true)
    }

    pub fn stage_delete_env(&self, key: &str) -> Result<PendingWrite, SyncError> {
        let change = EntryChange::DeleteEnv {
            key: key.to_string(),
        };
        self.stage_entry(change, false)
    }

    fn stage_entry(
        &self,
        change: EntryChange,
        from_draft: bool,
    ) -> Result<PendingWrite, SyncError> {
        let mut snapshot = self.base_snapshot()?;
        let component = self
            .component
            .remote()
            .as_saved()
            .ok_or_else(|| SyncError::ComponentNotSaved(self.component.name().to_string()))?
            .to_string();
        let target = snapshot
            .components
            .get_mut(&component)
            .ok_or_else(|| SyncError::UnknownComponent(component.clone()))?;
        change.apply_to(target);
        tracing::debug!(
            application = %snapshot.name,
            component = %component,
            operation = change.operation(),
            "staging entry change"
        );

        Ok(PendingWrite {
            effect: Effect::Entry {
                app: snapshot.name.clone(),
                component,
                change,
                from_draft,
                focus: self.component_focus,
            },
            request: WriteRequest::Save(snapshot),
        })
    }

    pub(super) fn reconcile_entry(
        &mut self,
        previous_app: &str,
        component: &str,
        change: EntryChange,
        from_draft: bool,
        focus: u64,
        app: Application,
    ) {
        self.commit_application(Some(previous_app), app);
        if focus != self.component_focus || self.component.remote().as_saved() != Some(component)
        {
            return;
        }
        change.apply_to(self.component.value_mut());
        if from_draft {
            if change.is_port() {
                self.new_port = Tracked::default();
            } else {
                self.new_env = Tracked::default();
            }
        }
    }
}

fn port_change(entry: &Tracked<PortMapping>) -> Result<EntryChange, SyncError> {
    let scheme = entry.name().trim();
    if scheme.is_empty() {
        return Err(SyncError::MissingName("port scheme"));
    }
    Ok(EntryChange::SetPort {
        superseded: entry.superseded_key().map(str::to_string),
        scheme: scheme.to_string(),
        port: entry.value().port,
    })
}

fn env_change(entry: &Tracked<EnvVar>) -> Result<EntryChange, SyncError> {
    let key = entry.name().trim();
    if key.is_empty() {
        return Err(SyncError::MissingName("env key"));
    }
    Ok(EntryChange::SetEnv {
        superseded: entry.superseded_key().map(str::to_string),
        key: key.to_string(),
        value: entry.value().value.clone(),
    })
}
