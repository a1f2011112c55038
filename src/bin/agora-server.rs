#![allow(clippy::result_large_err)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use indexmap::IndexMap;
use tokio::sync::RwLock;

use agora::model::Application;

#[path = "agora_server/types.rs"]
mod types;
use self::types::*;
#[path = "agora_server/http_error.rs"]
mod http_error;
use self::http_error::*;
#[path = "agora_server/persistence.rs"]
mod persistence;
use self::persistence::*;
#[path = "agora_server/handlers_system.rs"]
mod handlers_system;
use self::handlers_system::*;
#[path = "agora_server/handlers_applications.rs"]
mod handlers_applications;
use self::handlers_applications::*;
#[path = "agora_server/routes.rs"]
mod routes;
use self::routes::*;
#[path = "agora_server/runtime/mod.rs"]
mod runtime;

#[tokio::main]
async fn main() {
    if let Err(err) = runtime::run().await {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}
