mod applications;
mod components;

pub(crate) use self::applications::{AppsArgs, RemoveAppArgs, RenameArgs, ShowArgs};
pub(crate) use self::components::{ComponentSetArgs, EntryTarget};
