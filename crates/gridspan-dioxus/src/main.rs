use dioxus::prelude::*;
use gridspan_config::Config;
use std::process;

mod sample;
mod ui;

use ui::App;

fn main() {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("gridspan starting up!");

    let config_path = Config::config_path();
    log::info!("Config path: {}", config_path.display());

    // Fail fast on a malformed config file; a missing one means defaults.
    match Config::load() {
        Ok(Some(_)) => log::info!("Loaded config from {}", config_path.display()),
        Ok(None) => log::info!("No config file found, using defaults"),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    }

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

fn app_root() -> Element {
    let config = Config::load().ok().flatten().unwrap_or_default();
    rsx! {
        App { config }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("gridspan")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
