use super::*;

impl Editor {
    /// Replaces the collection with a fresh listing from the store.
    ///
    /// A selected application that no longer exists remotely falls back to a new one.
    pub fn replace_applications(&mut self, applications: Vec<Application>) {
        self.applications = applications;
        let vanished = self
            .selected_app
            .as_ref()
            .and_then(|a| a.remote().as_saved())
            .is_some_and(|key| self.application(key).is_none());
        if vanished {
            self.create_application();
        }
    }

    pub fn select_application(&mut self, name: &str) -> Result<(), SyncError> {
        let app = self
            .application(name)
            .ok_or_else(|| SyncError::UnknownApplication(name.to_string()))?;
        let component = app
            .components
            .values()
            .next()
            .cloned()
            .map(Tracked::saved)
            .unwrap_or_default();

        self.selected_app = Some(Tracked::saved(AppName(name.to_string())));
        self.app_focus += 1;
        self.focus_component(component);
        Ok(())
    }

    pub fn create_application(&mut self) {
        self.selected_app = Some(Tracked::unsaved(AppName::default()));
        self.app_focus += 1;
        self.focus_component(Tracked::default());
    }

    /// Edits the working name of the selected application; persisted by `save_application`.
    pub fn set_application_name(&mut self, name: impl Into<String>) -> Result<(), SyncError> {
        let selected = self
            .selected_app
            .as_mut()
            .ok_or(SyncError::NoApplicationSelected)?;
        selected.value_mut().0 = name.into();
        Ok(())
    }

    pub fn select_component(&mut self, name: &str) -> Result<(), SyncError> {
        let app = self
            .selected_application()
            .ok_or(SyncError::NoApplicationSelected)?;
        let component = app
            .components
            .get(name)
            .cloned()
            .ok_or_else(|| SyncError::UnknownComponent(name.to_string()))?;
        self.focus_component(Tracked::saved(component));
        Ok(())
    }

    /// Focuses an unsaved, empty component.
    pub fn add_component_draft(&mut self) {
        self.focus_component(Tracked::default());
    }

    /// Clears the "add new" port and env drafts.
    pub fn clear_drafts(&mut self) {
        self.new_port = Tracked::default();
        self.new_env = Tracked::default();
    }

    fn focus_component(&mut self, component: Tracked<Component>) {
        self.component = component;
        self.component_focus += 1;
        self.clear_drafts();
    }
}
