use dioxus::prelude::*;
use url::Url;
use wokky_forecast::ForecastClient;
use wokky_geolocation::Coordinates;

/// Current conditions at `coordinates` and whether they suit a wok.
#[component]
pub fn Forecast(endpoint: Url, coordinates: Coordinates) -> Element {
    let verdict = use_resource(move || {
        let client = ForecastClient::new(endpoint.clone());
        async move {
            client
                .current(coordinates)
                .await
                .inspect_err(|err| tracing::warn!("{err}"))
        }
    });

    let view = match &*verdict.read() {
        None => rsx! {
            p { "Checking the weather..." }
        },
        Some(Ok(verdict)) => {
            let conditions = verdict.conditions;
            rsx! {
                div { class: "forecast",
                    p {
                        "{conditions.temperature}°C, {conditions.relative_humidity} % humidity, "
                        "wind {conditions.wind_speed} km/h gusting {conditions.wind_gusts} km/h"
                    }
                    if verdict.is_wokky {
                        h2 { "It's wokky!" }
                    } else {
                        h2 { "Not wokky" }
                        ul {
                            for reason in verdict.reasons.iter() {
                                li { "{reason}" }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(err)) => rsx! {
            p { "No weather right now: {err}" }
        },
    };
    view
}
