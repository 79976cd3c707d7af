//! Bindings to `navigator.geolocation` and `navigator.permissions`.

use std::{cell::RefCell, rc::Rc};

use async_trait::async_trait;
use futures_channel::oneshot;
use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;
use web_sys::Navigator;

use crate::{
    Capabilities, Coordinates, Error, PermissionName, PermissionQuery, PermissionState, Position,
    PositionError, PositionOptions, PositionSource, Unavailable,
};

#[wasm_bindgen]
extern "C" {
    type Geolocation;

    #[wasm_bindgen(method, js_name = getCurrentPosition)]
    fn get_current_position(
        this: &Geolocation,
        success: &Function,
        error: &Function,
        options: &JsValue,
    );

    type GeolocationPosition;

    #[wasm_bindgen(method, getter)]
    fn coords(this: &GeolocationPosition) -> GeolocationCoordinates;

    type GeolocationCoordinates;

    #[wasm_bindgen(method, getter)]
    fn latitude(this: &GeolocationCoordinates) -> f64;

    #[wasm_bindgen(method, getter)]
    fn longitude(this: &GeolocationCoordinates) -> f64;

    #[wasm_bindgen(method, getter)]
    fn accuracy(this: &GeolocationCoordinates) -> f64;

    type GeolocationPositionError;

    #[wasm_bindgen(method, getter)]
    fn code(this: &GeolocationPositionError) -> u16;

    #[wasm_bindgen(method, getter)]
    fn message(this: &GeolocationPositionError) -> String;

    type Permissions;

    #[wasm_bindgen(method, catch)]
    fn query(this: &Permissions, descriptor: &JsValue) -> Result<Promise, JsValue>;

    type PermissionStatus;

    #[wasm_bindgen(method, getter)]
    fn state(this: &PermissionStatus) -> String;
}

/// The browser's capabilities, with anything missing from `navigator` left out.
pub(crate) fn browser_capabilities() -> Capabilities {
    let Some(navigator) = web_sys::window().map(|window| window.navigator()) else {
        tracing::debug!("no window, running without browser capabilities");
        return Capabilities::unsupported();
    };

    let permissions: Rc<dyn PermissionQuery> = match BrowserPermissions::from_navigator(&navigator)
    {
        Some(permissions) => Rc::new(permissions),
        None => Rc::new(Unavailable),
    };

    match BrowserGeolocation::from_navigator(&navigator) {
        Some(geolocation) => Capabilities::with_geolocation(permissions, Rc::new(geolocation)),
        None => Capabilities::without_geolocation(permissions),
    }
}

fn navigator_property(navigator: &Navigator, name: &str) -> Option<JsValue> {
    Reflect::get(navigator, &JsValue::from_str(name))
        .ok()
        .filter(JsValue::is_truthy)
}

/// `navigator.permissions`
pub struct BrowserPermissions {
    permissions: Permissions,
}

impl BrowserPermissions {
    pub fn from_navigator(navigator: &Navigator) -> Option<Self> {
        navigator_property(navigator, "permissions").map(|permissions| Self {
            permissions: permissions.unchecked_into(),
        })
    }
}

#[derive(Serialize)]
struct PermissionDescriptor {
    name: PermissionName,
}

#[async_trait(?Send)]
impl PermissionQuery for BrowserPermissions {
    async fn query(&self, name: PermissionName) -> crate::Result<PermissionState> {
        let descriptor = serde_wasm_bindgen::to_value(&PermissionDescriptor { name })
            .map_err(|err| Error::PermissionQuery(err.to_string()))?;
        let promise = self.permissions.query(&descriptor).map_err(query_error)?;
        let status = JsFuture::from(promise).await.map_err(query_error)?;

        status.unchecked_into::<PermissionStatus>().state().parse()
    }
}

fn query_error(value: JsValue) -> Error {
    let message = match value.dyn_ref::<js_sys::Error>() {
        Some(err) => String::from(err.message()),
        None => value.as_string().unwrap_or_else(|| format!("{value:?}")),
    };
    Error::PermissionQuery(message)
}

/// `navigator.geolocation`
pub struct BrowserGeolocation {
    geolocation: Geolocation,
}

impl BrowserGeolocation {
    pub fn from_navigator(navigator: &Navigator) -> Option<Self> {
        navigator_property(navigator, "geolocation").map(|geolocation| Self {
            geolocation: geolocation.unchecked_into(),
        })
    }
}

type PositionSender = Rc<RefCell<Option<oneshot::Sender<Result<Position, PositionError>>>>>;

fn deliver(sender: &PositionSender, result: Result<Position, PositionError>) {
    if let Some(sender) = sender.borrow_mut().take() {
        // the receiver is gone when the requesting task was dropped
        _ = sender.send(result);
    }
}

#[async_trait(?Send)]
impl PositionSource for BrowserGeolocation {
    async fn current_position(
        &self,
        options: &PositionOptions,
    ) -> Result<Position, PositionError> {
        let options = serde_wasm_bindgen::to_value(options)
            .map_err(|err| PositionError::unavailable(format!("invalid position options: {err}")))?;

        let (sender, receiver) = oneshot::channel();
        let sender: PositionSender = Rc::new(RefCell::new(Some(sender)));

        // The browser calls at most one of these. Both live until the request settles.
        let on_success: Closure<dyn FnMut(GeolocationPosition)> = Closure::once({
            let sender = sender.clone();
            move |position: GeolocationPosition| {
                let coords = position.coords();
                deliver(
                    &sender,
                    Ok(Position {
                        coords: Coordinates::new(coords.latitude(), coords.longitude()),
                        accuracy: coords.accuracy(),
                    }),
                );
            }
        });
        let on_error: Closure<dyn FnMut(GeolocationPositionError)> =
            Closure::once(move |err: GeolocationPositionError| {
                deliver(&sender, Err(PositionError::new(err.code(), err.message())));
            });

        self.geolocation.get_current_position(
            on_success.as_ref().unchecked_ref(),
            on_error.as_ref().unchecked_ref(),
            &options,
        );

        let result = receiver.await;
        drop((on_success, on_error));

        result.unwrap_or_else(|_| Err(PositionError::unavailable("position request was abandoned")))
    }
}
