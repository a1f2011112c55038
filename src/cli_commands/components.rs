use clap::Args;

use agora::model::{ComponentType, Distribution};

/// The component a port or env command applies to.
#[derive(Args)]
pub(crate) struct EntryTarget {
    pub(crate) app: String,
    pub(crate) component: String,
}

#[derive(Args)]
pub(crate) struct ComponentSetArgs {
    pub(crate) app: String,
    pub(crate) component: String,

    /// Create the application if it does not exist yet
    #[arg(long)]
    pub(crate) create_app: bool,

    /// Rename the component
    #[arg(long, value_name = "NEW")]
    pub(crate) rename: Option<String>,

    /// Relative cpu share (1-100)
    #[arg(long)]
    pub(crate) cpus: Option<String>,

    /// Memory in megabytes
    #[arg(long)]
    pub(crate) mem: Option<String>,

    /// Working storage in megabytes (empty to clear)
    #[arg(long)]
    pub(crate) disk_space: Option<String>,

    /// Artifact location, like hdfs://namenode/app.jar
    #[arg(long)]
    pub(crate) dist_url: Option<String>,

    /// Launch command (empty to clear)
    #[arg(long)]
    pub(crate) command: Option<String>,

    /// Artifact version (major.minor.patch)
    #[arg(long)]
    pub(crate) version: Option<String>,

    /// package|docker|script|fat_jar
    #[arg(long)]
    pub(crate) distribution: Option<Distribution>,

    /// service|task|cron|spark
    #[arg(long = "type")]
    pub(crate) component_type: Option<ComponentType>,
}
