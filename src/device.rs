//! Capabilities the notifier needs from a device protocol client.
//!
//! The cast wire protocol itself lives outside this crate. A protocol client
//! plugs in by implementing these traits; tests plug in a scripted fake.

use crate::context::Context;
use crate::error::DeviceError;
use crate::types::{LoadRequest, MediaStatus, Volume};
use async_trait::async_trait;
use std::net::{IpAddr, SocketAddr};

/// Opens connections to receivers
#[async_trait]
pub trait DeviceConnector: Send + Sync {
    /// Resolve `host` to candidate addresses
    ///
    /// The default uses the system resolver and accepts IP literals.
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, DeviceError> {
        let addrs = tokio::net::lookup_host((host, 0)).await?;
        Ok(addrs.map(|addr| addr.ip()).collect())
    }

    /// Perform the connect handshake with the receiver at `address`
    async fn connect(
        &self,
        ctx: &Context,
        address: SocketAddr,
    ) -> Result<Box<dyn DeviceConnection>, DeviceError>;
}

/// An established connection to one receiver
#[async_trait]
pub trait DeviceConnection: Send + Sync {
    /// Receiver-level control (volume, running application)
    fn receiver(&self) -> &dyn ReceiverControl;

    /// Open the media channel of the running media application
    async fn media(&self, ctx: &Context) -> Result<Box<dyn MediaChannel>, DeviceError>;

    /// Whether the receiver is currently playing anything
    async fn is_playing(&self, ctx: &Context) -> bool;

    /// Release the connection
    async fn close(&self);
}

#[async_trait]
pub trait ReceiverControl: Send + Sync {
    async fn set_volume(&self, ctx: &Context, volume: Volume) -> Result<(), DeviceError>;

    /// Stop the running receiver application
    async fn quit_app(&self, ctx: &Context) -> Result<(), DeviceError>;
}

#[async_trait]
pub trait MediaChannel: Send + Sync {
    /// Current media sessions; empty once playback has finished
    async fn status(&self, ctx: &Context) -> Result<Vec<MediaStatus>, DeviceError>;

    async fn load(&self, ctx: &Context, request: &LoadRequest) -> Result<(), DeviceError>;

    async fn stop(&self, ctx: &Context) -> Result<(), DeviceError>;
}
