#![allow(dead_code)]
//! Task Board Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod filters;
mod format;
mod forms;
mod guard;
mod logging;
mod models;
mod pages;
mod services;
mod session;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(AppConfig::from_env().log_level);
    mount_to_body(App);
}
