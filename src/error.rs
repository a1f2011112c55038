use thiserror::Error;

/// Failures surfaced by the editor and the persistence coordinator.
///
/// None of these are fatal: a failed write leaves the live tree as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error("{operation} failed, your change was not persisted: {reason}")]
    RemoteWriteFailed {
        operation: &'static str,
        reason: String,
    },

    #[error("could not load applications: {reason}")]
    RemoteReadFailed { reason: String },

    #[error("no application selected")]
    NoApplicationSelected,

    #[error("application '{0}' not found")]
    UnknownApplication(String),

    #[error("component '{0}' not found")]
    UnknownComponent(String),

    #[error("component '{0}' has not been saved yet; save it before editing its ports or env")]
    ComponentNotSaved(String),

    #[error("{0} name cannot be empty")]
    MissingName(&'static str),

    #[error("store answered {operation} with an unexpected outcome")]
    UnexpectedOutcome { operation: &'static str },
}

impl SyncError {
    pub(crate) fn write_failed(operation: &'static str, err: &anyhow::Error) -> Self {
        SyncError::RemoteWriteFailed {
            operation,
            reason: format!("{:#}", err),
        }
    }

    pub(crate) fn read_failed(err: &anyhow::Error) -> Self {
        SyncError::RemoteReadFailed {
            reason: format!("{:#}", err),
        }
    }
}
