use super::*;

pub(crate) type Applications = IndexMap<String, Application>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) data_dir: PathBuf,

    pub(crate) applications: Arc<RwLock<Applications>>,

    // When set, every /api route requires this bearer token.
    pub(crate) dev_token: Option<String>,
}
