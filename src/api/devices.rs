use std::fmt::Display;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::models::device::DevicePayload;
use crate::{DeviceClient, DeviceResult};

const DEVICES_ENDPOINT: &str = "/users";

/// Provides methods for managing devices.
///
/// Each method returns a request builder; nothing is sent until `send()` is
/// awaited. Unlike the shorthand methods on [`DeviceClient`], the builders
/// surface failures as [`DeviceError`](crate::DeviceError) values.
#[derive(Debug)]
pub struct DeviceHandler {
    client: DeviceClient,
}

impl DeviceHandler {
    pub(crate) fn new(client: DeviceClient) -> Self {
        Self { client }
    }

    /// Registers a new device.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use device_client::DeviceClient;
    /// #
    /// # async fn example(client: &DeviceClient) -> Result<(), device_client::DeviceError> {
    /// let created = client.devices().add("Router-A", "Core").send().await?;
    /// println!("Created: {created:?}");
    /// # Ok(())
    /// # }
    /// ```
    pub fn add(&self, name: impl Into<String>, job: impl Into<String>) -> AddDeviceBuilder {
        AddDeviceBuilder::new(self.client.clone(), DevicePayload::new(name, job))
    }

    /// Lists devices one page at a time. The first page is requested unless
    /// [`ListDevicesBuilder::page`] says otherwise.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use device_client::{DeviceClient, DevicePage};
    /// #
    /// # async fn example(client: &DeviceClient) -> Result<(), device_client::DeviceError> {
    /// if let Some(page) = client.devices().list().page(2).send_as::<DevicePage>().await? {
    ///     println!("{} devices in total", page.total);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list(&self) -> ListDevicesBuilder {
        ListDevicesBuilder::new(self.client.clone())
    }

    /// Replaces the name and job of an existing device.
    pub fn update(
        &self,
        id: impl Display,
        name: impl Into<String>,
        job: impl Into<String>,
    ) -> UpdateDeviceBuilder {
        UpdateDeviceBuilder::new(self.client.clone(), id.to_string(), DevicePayload::new(name, job))
    }

    /// Removes a device. The API answers 204 with no body on success.
    pub fn delete(&self, id: impl Display) -> DeleteDeviceBuilder {
        DeleteDeviceBuilder::new(self.client.clone(), id.to_string())
    }
}

fn decode<T: DeserializeOwned>(value: Option<Value>) -> DeviceResult<Option<T>> {
    value
        .map(serde_json::from_value)
        .transpose()
        .map_err(Into::into)
}

#[derive(Debug, Clone)]
pub struct AddDeviceBuilder {
    client: DeviceClient,
    payload: DevicePayload,
}

impl AddDeviceBuilder {
    pub(crate) fn new(client: DeviceClient, payload: DevicePayload) -> Self {
        Self { client, payload }
    }

    pub async fn send(self) -> DeviceResult<Option<Value>> {
        log::debug!("attempting to add device {:?}", self.payload.name);

        self.client
            .request_json(Method::POST, DEVICES_ENDPOINT, &[], Some(self.payload))
            .await
    }

    /// Sends the request and decodes the body, e.g. into a
    /// [`DeviceRecord`](crate::DeviceRecord).
    pub async fn send_as<T: DeserializeOwned>(self) -> DeviceResult<Option<T>> {
        decode(self.send().await?)
    }
}

#[derive(Debug, Clone)]
pub struct ListDevicesBuilder {
    client: DeviceClient,
    page: u32,
}

impl ListDevicesBuilder {
    pub(crate) fn new(client: DeviceClient) -> Self {
        Self { client, page: 1 }
    }

    /// Selects the page to fetch. Pages are numbered from 1.
    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub async fn send(self) -> DeviceResult<Option<Value>> {
        log::debug!("attempting to list devices (page {})", self.page);

        let query = [("page", self.page.to_string())];
        self.client
            .request_json(Method::GET, DEVICES_ENDPOINT, &query, None::<()>)
            .await
    }

    pub async fn send_as<T: DeserializeOwned>(self) -> DeviceResult<Option<T>> {
        decode(self.send().await?)
    }
}

#[derive(Debug, Clone)]
pub struct UpdateDeviceBuilder {
    client: DeviceClient,
    id: String,
    payload: DevicePayload,
}

impl UpdateDeviceBuilder {
    pub(crate) fn new(client: DeviceClient, id: String, payload: DevicePayload) -> Self {
        Self {
            client,
            id,
            payload,
        }
    }

    pub async fn send(self) -> DeviceResult<Option<Value>> {
        log::debug!("attempting to update device id {}", self.id);

        self.client
            .request_item(Method::PUT, DEVICES_ENDPOINT, &self.id, Some(self.payload))
            .await
    }

    pub async fn send_as<T: DeserializeOwned>(self) -> DeviceResult<Option<T>> {
        decode(self.send().await?)
    }
}

#[derive(Debug, Clone)]
pub struct DeleteDeviceBuilder {
    client: DeviceClient,
    id: String,
}

impl DeleteDeviceBuilder {
    pub(crate) fn new(client: DeviceClient, id: String) -> Self {
        Self { client, id }
    }

    /// Resolves to `Ok(None)` on 204. Should the API answer 200/201 with a
    /// body, that body is returned.
    pub async fn send(self) -> DeviceResult<Option<Value>> {
        log::debug!("attempting to delete device id {}", self.id);

        self.client
            .request_item(Method::DELETE, DEVICES_ENDPOINT, &self.id, None::<()>)
            .await
    }
}
