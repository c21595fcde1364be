#![allow(warnings)]
//! Todo Board Frontend Entry Point

mod models;
mod commands;
mod context;
mod store;
mod components;
mod app;
mod logger;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init_logger(log::LevelFilter::Debug);
    mount_to_body(App);
}
