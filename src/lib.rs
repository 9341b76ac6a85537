//! Rust library for sending spoken notifications and audio to cast receivers
//!
//! This library drives a networked media receiver (a cast-enabled speaker or
//! display) through a short, sequential session. It supports:
//!
//! - Connecting to a receiver by host name or IP address
//! - Volume control
//! - Playing an `audio/mpeg` URL and waiting for it to finish
//! - Speaking text through a text-to-speech endpoint
//! - Stopping playback and quitting the receiver application
//!
//! The cast wire protocol is not implemented here. A protocol client plugs
//! in through the [`DeviceConnector`], [`DeviceConnection`],
//! [`ReceiverControl`] and [`MediaChannel`] traits.
//!
//! # Quick Start
//!
//! ```no_run
//! use cast_notifier::{Context, DeviceConnector, ErrorPolicy, Notifier, NotifierConfig, DEFAULT_PORT};
//! use std::time::Duration;
//!
//! async fn run(connector: &dyn DeviceConnector) -> Result<(), Box<dyn std::error::Error>> {
//!     // Give the whole session two minutes
//!     let ctx = Context::new().with_timeout(Duration::from_secs(120));
//!
//!     let mut notifier = Notifier::connect(connector, "192.168.1.40", DEFAULT_PORT, ctx)
//!         .await?
//!         .with_config(NotifierConfig::default().with_error_policy(ErrorPolicy::Strict));
//!
//!     notifier.set_volume("0.6").await?;
//!     notifier.notify("The laundry is done", "en", Duration::from_secs(20)).await?;
//!     notifier.quit().await?;
//!     notifier.close().await;
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - **Notifier**: session wrapper sequencing receiver and media commands
//! - **Device**: capability traits implemented by a protocol client
//! - **Context**: cancellation and deadline shared with the caller
//! - **Speech**: text-to-speech URL construction
//! - **Types**: receiver value types with their JSON wire names

mod config;
mod context;
mod device;
mod error;
mod notifier;
mod speech;
mod types;

// Public exports
pub use config::{ErrorPolicy, NotifierConfig, DEFAULT_POLL_INTERVAL, DEFAULT_PORT};
pub use context::{Context, Interrupted};
pub use device::{DeviceConnection, DeviceConnector, MediaChannel, ReceiverControl};
pub use error::{Command, DeviceError, NotifierError, Result};
pub use notifier::{Notifier, PlayOutcome};
pub use speech::{speech_url, TTS_ENDPOINT};
pub use types::{LoadRequest, MediaItem, MediaStatus, PlayerState, StreamType, Volume, AUDIO_MPEG};
