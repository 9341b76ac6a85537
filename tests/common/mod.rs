//! Scripted in-memory receiver for testing.
//!
//! `MockDevice` stands in for a protocol client: it records every call made
//! against it and can be configured to fail individual commands so the
//! notifier's error paths can be exercised without a real receiver.

#![allow(dead_code)]

use async_trait::async_trait;
use cast_notifier::{
    Context, DeviceConnection, DeviceConnector, DeviceError, LoadRequest, MediaChannel,
    MediaStatus, Notifier, PlayerState, ReceiverControl, Volume, DEFAULT_PORT,
};
use std::collections::VecDeque;
use std::io;
use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex, MutexGuard};

/// Scripted answer to one status request
#[derive(Debug, Clone)]
pub enum StatusReply {
    Sessions(Vec<MediaStatus>),
    Fail,
}

/// Everything the mock was asked to do, and how it should answer
#[derive(Debug, Default)]
pub struct MockState {
    pub addresses: Vec<IpAddr>,
    pub fail_resolve: bool,
    pub fail_connect: bool,
    pub fail_set_volume: bool,
    pub fail_quit: bool,
    pub fail_media: bool,
    pub fail_load: bool,
    pub fail_stop: bool,
    pub playing: bool,

    /// Replies consumed in order by status requests
    pub status_script: VecDeque<StatusReply>,
    /// Reply once the script is exhausted
    pub status_default: Vec<MediaStatus>,

    pub resolved: Vec<String>,
    pub connected_to: Vec<SocketAddr>,
    pub volumes: Vec<Volume>,
    pub media_opens: u32,
    pub status_polls: u32,
    pub loads: Vec<LoadRequest>,
    pub stops: u32,
    pub quits: u32,
    pub closes: u32,

    /// Ordered log of device calls
    pub calls: Vec<&'static str>,
}

/// Shared handle to a scripted receiver
#[derive(Clone, Default)]
pub struct MockDevice {
    state: Arc<Mutex<MockState>>,
}

impl MockDevice {
    /// A receiver at 192.168.1.40 that reports idle status
    pub fn new() -> Self {
        let device = Self::default();
        device
            .state()
            .addresses
            .push("192.168.1.40".parse().unwrap());
        device
    }

    pub fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap()
    }

    /// Queue status replies
    pub fn script_status(&self, replies: impl IntoIterator<Item = StatusReply>) {
        self.state().status_script.extend(replies);
    }

    /// Report one playing session whenever the script is exhausted
    pub fn keep_playing(&self) {
        self.state().status_default = vec![playing_session()];
    }

    pub fn connector(&self) -> MockConnector {
        MockConnector {
            device: self.clone(),
        }
    }

    fn record(&self, call: &'static str) -> MutexGuard<'_, MockState> {
        let mut state = self.state();
        state.calls.push(call);
        state
    }
}

pub fn playing_session() -> MediaStatus {
    MediaStatus {
        media_session_id: 1,
        player_state: PlayerState::Playing,
        current_time: 0.0,
        idle_reason: None,
    }
}

fn rejected(what: &str) -> DeviceError {
    DeviceError::Rejected(format!("{} refused by mock", what))
}

pub struct MockConnector {
    device: MockDevice,
}

#[async_trait]
impl DeviceConnector for MockConnector {
    async fn resolve(&self, host: &str) -> Result<Vec<IpAddr>, DeviceError> {
        let mut state = self.device.record("resolve");
        state.resolved.push(host.to_string());
        if state.fail_resolve {
            return Err(DeviceError::NotFound(host.to_string()));
        }
        Ok(state.addresses.clone())
    }

    async fn connect(
        &self,
        _ctx: &Context,
        address: SocketAddr,
    ) -> Result<Box<dyn DeviceConnection>, DeviceError> {
        let mut state = self.device.record("connect");
        state.connected_to.push(address);
        if state.fail_connect {
            return Err(DeviceError::Io(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )));
        }
        Ok(Box::new(MockConnection {
            device: self.device.clone(),
        }))
    }
}

struct MockConnection {
    device: MockDevice,
}

#[async_trait]
impl DeviceConnection for MockConnection {
    fn receiver(&self) -> &dyn ReceiverControl {
        self
    }

    async fn media(&self, _ctx: &Context) -> Result<Box<dyn MediaChannel>, DeviceError> {
        let mut state = self.device.record("media");
        state.media_opens += 1;
        if state.fail_media {
            return Err(DeviceError::Timeout);
        }
        Ok(Box::new(MockMedia {
            device: self.device.clone(),
        }))
    }

    async fn is_playing(&self, _ctx: &Context) -> bool {
        self.device.record("is_playing").playing
    }

    async fn close(&self) {
        self.device.record("close").closes += 1;
    }
}

#[async_trait]
impl ReceiverControl for MockConnection {
    async fn set_volume(&self, _ctx: &Context, volume: Volume) -> Result<(), DeviceError> {
        let mut state = self.device.record("set_volume");
        state.volumes.push(volume);
        if state.fail_set_volume {
            return Err(rejected("volume"));
        }
        Ok(())
    }

    async fn quit_app(&self, _ctx: &Context) -> Result<(), DeviceError> {
        let mut state = self.device.record("quit_app");
        state.quits += 1;
        if state.fail_quit {
            return Err(rejected("quit"));
        }
        Ok(())
    }
}

struct MockMedia {
    device: MockDevice,
}

#[async_trait]
impl MediaChannel for MockMedia {
    async fn status(&self, _ctx: &Context) -> Result<Vec<MediaStatus>, DeviceError> {
        let mut state = self.device.record("status");
        state.status_polls += 1;
        let reply = match state.status_script.pop_front() {
            Some(reply) => reply,
            None => StatusReply::Sessions(state.status_default.clone()),
        };
        match reply {
            StatusReply::Sessions(sessions) => Ok(sessions),
            StatusReply::Fail => Err(DeviceError::ConnectionClosed),
        }
    }

    async fn load(&self, _ctx: &Context, request: &LoadRequest) -> Result<(), DeviceError> {
        let mut state = self.device.record("load");
        state.loads.push(request.clone());
        if state.fail_load {
            return Err(rejected("load"));
        }
        Ok(())
    }

    async fn stop(&self, _ctx: &Context) -> Result<(), DeviceError> {
        let mut state = self.device.record("stop");
        state.stops += 1;
        if state.fail_stop {
            return Err(rejected("stop"));
        }
        Ok(())
    }
}

/// Connect a notifier to `device` with a fresh context
pub async fn connect(device: &MockDevice) -> Notifier {
    connect_with(device, Context::new()).await
}

pub async fn connect_with(device: &MockDevice, ctx: Context) -> Notifier {
    Notifier::connect(&device.connector(), "living-room.local", DEFAULT_PORT, ctx)
        .await
        .unwrap()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
