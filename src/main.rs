//! FindIt Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod logger;
mod poller;
mod storage;
mod store;
mod timers;
mod views;

use app::App;
use leptos::prelude::*;

fn main() {
    logger::init();
    console_error_panic_hook::set_once();
    log::info!("[App] starting");
    mount_to_body(App);
}
