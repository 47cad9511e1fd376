//! BookVault Frontend Entry Point

mod api;
mod app;
mod auth;
mod catalog;
mod components;
mod context;
mod models;
mod persistence;
mod report;
mod store;
mod title;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
