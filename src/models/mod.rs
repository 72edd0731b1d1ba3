//! Data models for the device API.
//!
//! The client never validates payloads against these types; they are typed
//! views for callers that want them.

pub mod device;
