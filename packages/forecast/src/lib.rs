//! Is it wokky?
//!
//! Cooking with a wok outdoors wants mild temperatures, moderate humidity and
//! enough of a breeze to carry the smoke away without blowing out the flame.
//! This crate fetches the current conditions for a pair of coordinates from an
//! [Open-Meteo](https://open-meteo.com) compatible endpoint and turns them into
//! a [`Verdict`] listing every reason it is not.

mod client;
mod error;
mod verdict;

pub use client::ForecastClient;
pub use error::{Error, Result};
pub use verdict::{wokky_reasons, Conditions, Verdict};
