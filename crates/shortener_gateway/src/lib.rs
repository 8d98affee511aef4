//! Shortener gateway: HTTP access to the remote link collection.
mod error;
mod gateway;
mod types;

pub use error::GatewayError;
pub use gateway::{Gateway, GatewaySettings, ReqwestGateway};
pub use types::{CreateRequest, ShortLink, WireId, WireLink};
