//! Optimistic local state synchronizer for an application → component → port/env
//! tree kept in a remote store that addresses everything by name.

pub mod config;
pub mod debounce;
pub mod editor;
pub mod error;
pub mod form;
pub mod model;
pub mod remote;
pub mod sync;
pub mod tracking;
pub mod validate;

pub use crate::error::SyncError;
pub use crate::sync::{ApplicationStore, Synchronizer};
