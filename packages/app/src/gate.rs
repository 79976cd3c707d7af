use dioxus::prelude::*;
use wokky_geolocation::{acquire, Acquisition, Capabilities, Coordinates, PositionOptions};

use crate::Route;

/// Where the user is, and whether we know yet.
#[derive(Clone, Copy, PartialEq)]
pub struct UseGeolocation {
    coordinates: Signal<Coordinates>,
    decided: Signal<bool>,
}

impl UseGeolocation {
    /// The last position read, `(0, 0)` until one succeeds.
    pub fn coordinates(&self) -> Coordinates {
        *self.coordinates.read()
    }

    /// Whether a position request finished, successfully or not. Never goes
    /// back to `false`.
    pub fn decided(&self) -> bool {
        *self.decided.read()
    }
}

/// Ask for the current position once per mount.
///
/// The request runs on a task owned by the calling component, so unmounting
/// the component abandons it and nothing is written afterwards.
pub fn use_geolocation(capabilities: Capabilities, options: PositionOptions) -> UseGeolocation {
    let mut coordinates = use_signal(Coordinates::default);
    let mut decided = use_signal(|| false);

    use_hook(move || {
        spawn(async move {
            match acquire(&capabilities, &options).await {
                Ok(Acquisition::Located(position)) => {
                    coordinates.set(position.coords);
                    decided.set(true);
                }
                Ok(Acquisition::Failed(_)) => decided.set(true),
                Ok(Acquisition::Unsupported | Acquisition::Denied) => {}
                Err(err) => tracing::error!("could not check geolocation permission: {err}"),
            }
        })
    });

    UseGeolocation {
        coordinates,
        decided,
    }
}

/// Shows a loading heading until the position request finishes, then the routed app.
#[component]
pub fn LocationGate(
    capabilities: Capabilities,
    #[props(default)] options: PositionOptions,
) -> Element {
    let geolocation = use_geolocation(capabilities, options);
    use_context_provider(|| geolocation);

    if !geolocation.decided() {
        return rsx! {
            h1 { "Loading..." }
        };
    }

    rsx! {
        Router::<Route> {}
    }
}
