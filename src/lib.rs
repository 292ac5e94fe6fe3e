//! DHT11 / DHT22 Sensor Driver for Embedded Rust
//!
//! This crate provides a platform-agnostic driver for the DHT11 and DHT22
//! (AM2302) temperature and humidity sensors, built on top of the
//! [`embedded-hal`] traits.
//!
//! Readings are returned as integers in the sensor's native scale: whole
//! units for the DHT11, tenths for the DHT22. Temperatures are reported in
//! both Celsius and Fahrenheit.
//!
//! # Features
//! - Blocking synchronous API using `embedded-hal` traits
//! - One driver for both sensor models, selected at construction
//! - Designed for `no_std` environments, no allocation
//! - Optional logging support via `defmt`
//!
//! # Dependencies
//! This driver depends on the following `embedded-hal` traits:
//! - [`InputPin`] and [`OutputPin`] for GPIO access, plus this crate's
//!   [`IoPin`] for switching the line direction
//! - [`DelayNs`] for accurate timing
//!
//! # Optional Features
//! - `defmt`: Implements `defmt::Format` for logging support and emits
//!   protocol events through `defmt`
//!
//! # Example
//!
//! ```ignore
//! use dht_sensor::{Dht, OpenDrain, SensorModel};
//!
//! let mut dht = Dht::new(OpenDrain(pin), delay, SensorModel::Dht22);
//! match dht.read() {
//!     Ok(reading) => println!("{reading}"),
//!     Err(err) => println!("read failed: {err}"),
//! }
//! ```
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal
//! [`InputPin`]: embedded_hal::digital::InputPin
//! [`OutputPin`]: embedded_hal::digital::OutputPin
//! [`DelayNs`]: embedded_hal::delay::DelayNs

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod dht;
pub mod error;
pub mod frame;
pub mod model;
pub mod pin;
pub mod reading;
pub mod timing;

pub use dht::Dht;
pub use error::{DhtError, ErrorCode};
pub use frame::{FRAME_LEN, RawFrame};
pub use model::SensorModel;
pub use pin::{IoPin, OpenDrain};
pub use reading::Reading;
pub use timing::Timing;
