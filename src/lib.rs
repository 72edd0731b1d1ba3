//! # device-client
//!
//! A Rust client library for a REST device registry exposed as a `/users`
//! collection (the shape served by `https://reqres.in/api`).
//!
//! Every call sends exactly one request and interprets the response status
//! through one shared table:
//!
//! | Status | Outcome                        |
//! |--------|--------------------------------|
//! | 200    | success, decoded JSON body     |
//! | 201    | success, decoded JSON body     |
//! | 204    | success, no body               |
//! | 400    | client error                   |
//! | 401    | client error                   |
//! | 404    | client error                   |
//! | >= 500 | server error                   |
//! | other  | unexpected status              |
//!
//! The crate offers two layers. The request builders under
//! [`DeviceClient::devices`] return [`DeviceResult`] so callers can tell a
//! 204 apart from a failure. The shorthand methods (`add_device`,
//! `list_devices`, `update_device`, `delete_device`) log every failure and
//! return `None` instead.
//!
//! ## Example
//!
//! ```rust,no_run
//! use device_client::{DeviceClient, DeviceRecord};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DeviceClient::new("https://reqres.in/api")?;
//!
//!     // Typed layer
//!     let created: Option<DeviceRecord> =
//!         client.devices().add("Router-A", "Core").send_as().await?;
//!     println!("{created:?}");
//!
//!     // Shorthand layer: failures are logged and come back as None
//!     if let Some(page) = client.list_devices(2).await {
//!         println!("{page:#}");
//!     }
//!
//!     Ok(())
//! }
//! ```

mod api;
mod client;
mod error;
pub mod models;
pub mod response;

pub use api::devices::{
    AddDeviceBuilder, DeleteDeviceBuilder, DeviceHandler, ListDevicesBuilder, UpdateDeviceBuilder,
};
#[cfg(feature = "default-client")]
pub use client::{initialize, instance};
pub use client::{DeviceClient, DeviceClientBuilder, DEFAULT_BASE_URL};
pub use error::{DeviceError, DeviceResult};
pub use models::device::{DevicePage, DevicePayload, DeviceRecord};
pub use response::{interpret, Outcome, OutcomeKind};
pub use url::ParseError as UrlParseError;
