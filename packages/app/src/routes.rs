use dioxus::prelude::*;
use wokky_geolocation::Coordinates;

use crate::{Config, Forecast, UseGeolocation};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
pub fn Home() -> Element {
    let geolocation = use_context::<UseGeolocation>();
    let coordinates = geolocation.coordinates();
    let Coordinates {
        latitude,
        longitude,
    } = coordinates;

    let forecast = try_use_context::<Config>()
        .and_then(|config| config.forecast_endpoint)
        .map(|endpoint| rsx! { Forecast { endpoint, coordinates } });

    rsx! {
        div {
            h1 { "Simple SPA" }
            h1 { "Coords : {latitude} , {longitude}" }
            {forecast}
        }
    }
}

/// Any other hash still lands on the coordinates.
#[component]
pub fn Elsewhere(segments: Vec<String>) -> Element {
    tracing::debug!(?segments, "no route matched, showing home");

    rsx! {
        Home {}
    }
}
