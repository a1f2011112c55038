use clap::Args;

#[derive(Args)]
pub(crate) struct AppsArgs {
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct ShowArgs {
    pub(crate) app: String,
    /// Emit JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args)]
pub(crate) struct RemoveAppArgs {
    pub(crate) app: String,
}

#[derive(Args)]
pub(crate) struct RenameArgs {
    pub(crate) app: String,
    pub(crate) new_name: String,
}
