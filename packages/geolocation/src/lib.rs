//! Permission-gated geolocation for Dioxus web apps
//!
//! This crate wraps the two browser facilities needed to find out where the
//! user is: the Permissions API (to learn whether asking is worthwhile) and the
//! Geolocation API (to actually read a position). Both are modelled as
//! injectable capabilities so the acquisition flow can run against the real
//! browser on `wasm32` targets and against in-memory doubles everywhere else.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use wokky_geolocation::{acquire, Acquisition, Capabilities, PositionOptions};
//!
//! # async fn run() -> wokky_geolocation::Result<()> {
//! let capabilities = Capabilities::detect();
//! match acquire(&capabilities, &PositionOptions::default()).await? {
//!     Acquisition::Located(position) => println!("{:?}", position.coords),
//!     other => println!("no position: {other:?}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `mock`: in-memory [`PermissionQuery`] and [`PositionSource`] doubles that
//!   count their calls, plus a `Logs` capture, for exercising the flow without a
//!   browser.

mod acquire;
mod capabilities;
mod error;
mod permission;
mod position;

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(feature = "mock")]
pub mod mock;

pub use acquire::{acquire, Acquisition};
pub use capabilities::{Capabilities, PermissionQuery, PositionSource, Unavailable};
pub use error::{Error, Result};
pub use permission::{PermissionName, PermissionState};
pub use position::{Coordinates, Position, PositionError, PositionErrorKind, PositionOptions};

#[cfg(target_arch = "wasm32")]
pub use web::{BrowserGeolocation, BrowserPermissions};
