mod components;
mod entries;

pub(crate) use self::components::ComponentCommands;
pub(crate) use self::entries::{EnvCommands, PortCommands};
