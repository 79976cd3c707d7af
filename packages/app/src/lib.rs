//! Wokky
//!
//! A single page web app that asks the browser where the user is and shows the
//! coordinates once it knows. Until the browser has answered the page shows a
//! loading heading. When a forecast endpoint is configured, the current
//! weather and whether it suits cooking with a wok outside are shown below the
//! coordinates.

mod config;
mod forecast;
mod gate;
mod routes;

pub use config::{Config, FORECAST_URL, LOG_LEVEL};
pub use forecast::Forecast;
pub use gate::{use_geolocation, LocationGate, LocationGateProps, UseGeolocation};
pub use routes::{Elsewhere, Home, Route};

use dioxus::prelude::*;
use wokky_geolocation::Capabilities;

/// The app as launched: built-in configuration and the environment's capabilities.
#[component]
pub fn App() -> Element {
    let config = use_hook(Config::from_env);
    let capabilities = use_hook(Capabilities::detect);

    rsx! {
        Shell { config, capabilities }
    }
}

/// Provides `config` to the tree and gates it on the user's position.
#[component]
pub fn Shell(config: Config, capabilities: Capabilities) -> Element {
    let config = use_context_provider(|| config);

    rsx! {
        LocationGate { capabilities, options: config.position }
    }
}
