use crate::config::{ErrorPolicy, NotifierConfig};
use crate::context::Context;
use crate::device::{DeviceConnection, DeviceConnector, MediaChannel};
use crate::error::{Command, DeviceError, NotifierError, Result};
use crate::speech::speech_url;
use crate::types::{LoadRequest, MediaItem, Volume};
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::time::Instant;

/// Session with a single cast receiver
///
/// A `Notifier` owns one device connection and issues commands on it one at
/// a time. Every device call and every sleep is raced against the
/// [`Context`] given at connect time.
///
/// # Example
///
/// ```no_run
/// use cast_notifier::{Context, DeviceConnector, Notifier, DEFAULT_PORT};
/// use std::time::Duration;
///
/// async fn announce(connector: &dyn DeviceConnector) -> cast_notifier::Result<()> {
///     let mut notifier =
///         Notifier::connect(connector, "living-room.local", DEFAULT_PORT, Context::new()).await?;
///     notifier.set_volume("0.4").await?;
///     notifier.notify("Dinner is ready", "en", Duration::from_secs(30)).await?;
///     notifier.close().await;
///     Ok(())
/// }
/// ```
pub struct Notifier {
    connection: Option<Box<dyn DeviceConnection>>,
    address: SocketAddr,
    ctx: Context,
    config: NotifierConfig,
}

/// Errors `play` tolerated on its way to a successful result
///
/// Only populated under [`ErrorPolicy::BestEffort`]; under
/// [`ErrorPolicy::Strict`] these errors are returned instead.
#[derive(Debug, Default)]
pub struct PlayOutcome {
    /// Error from waiting for earlier playback to finish before loading
    pub settle_error: Option<NotifierError>,

    /// Error from the load command itself
    pub load_error: Option<NotifierError>,
}

impl PlayOutcome {
    /// Whether every step succeeded
    pub fn is_clean(&self) -> bool {
        self.settle_error.is_none() && self.load_error.is_none()
    }
}

impl Notifier {
    /// Resolve `host` and connect to the receiver on `port`
    ///
    /// The first resolved address is used.
    pub async fn connect<C>(connector: &C, host: &str, port: u16, ctx: Context) -> Result<Self>
    where
        C: DeviceConnector + ?Sized,
    {
        let resolved = ctx
            .run(connector.resolve(host))
            .await?
            .map_err(|source| NotifierError::Resolution {
                host: host.to_string(),
                source,
            })?;

        let ip = resolved
            .first()
            .copied()
            .ok_or_else(|| NotifierError::Resolution {
                host: host.to_string(),
                source: DeviceError::NotFound(format!("no addresses for {}", host)),
            })?;
        let address = SocketAddr::new(ip, port);

        tracing::debug!("Connecting to {} ({})", host, address);
        let connection = ctx
            .run(connector.connect(&ctx, address))
            .await?
            .map_err(|source| NotifierError::Connection { address, source })?;

        tracing::info!("Connected to {}", address);

        Ok(Self {
            connection: Some(connection),
            address,
            ctx,
            config: NotifierConfig::default(),
        })
    }

    /// Replace the session settings
    pub fn with_config(mut self, config: NotifierConfig) -> Self {
        self.config = config;
        self
    }

    /// Address of the connected receiver
    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    /// Whether the session is still open
    pub fn is_connected(&self) -> bool {
        self.connection.is_some()
    }

    /// Set the receiver volume from text such as `"0.5"`
    ///
    /// Text that does not parse as a number sets the volume to zero rather
    /// than failing.
    pub async fn set_volume(&self, level: &str) -> Result<()> {
        let parsed = match level.parse::<f64>() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid volume {:?} ({}), using 0", level, e);
                0.0
            }
        };
        self.set_volume_level(parsed).await
    }

    /// Set the receiver volume and unmute it
    pub async fn set_volume_level(&self, level: f64) -> Result<()> {
        let receiver = self.connection()?.receiver();
        self.command(
            Command::SetVolume,
            receiver.set_volume(&self.ctx, Volume::unmuted(level)),
        )
        .await
    }

    /// Wait until the receiver reports no media sessions
    ///
    /// Polls status once per poll interval. Gives up silently once more than
    /// `timeout` has elapsed; at least one poll and one interval always pass.
    /// A failed status fetch ends the wait with that error.
    pub async fn wait(&self, timeout: Duration) -> Result<()> {
        let media = self.media().await?;
        self.wait_on(media.as_ref(), timeout).await
    }

    /// Speak `text` in `language` through the text-to-speech endpoint
    pub async fn notify(
        &self,
        text: &str,
        language: &str,
        wait_timeout: Duration,
    ) -> Result<PlayOutcome> {
        let url = speech_url(text, language);
        self.play(&url, wait_timeout).await
    }

    /// Play the `audio/mpeg` stream at `url`
    ///
    /// Waits for earlier playback to finish, loads the media with autoplay,
    /// then waits for it to finish. Under [`ErrorPolicy::BestEffort`] the
    /// first wait's error and the load error do not fail the call; they are
    /// logged and returned in the [`PlayOutcome`]. Only failing to open the
    /// media channel or the final wait's error fail it.
    pub async fn play(&self, url: &str, wait_timeout: Duration) -> Result<PlayOutcome> {
        let media = self.media().await?;
        let strict = self.config.error_policy == ErrorPolicy::Strict;
        let mut outcome = PlayOutcome::default();

        if let Err(e) = self.wait_on(media.as_ref(), wait_timeout).await {
            if strict {
                return Err(e);
            }
            tracing::warn!("Ignoring error while waiting for previous playback: {}", e);
            outcome.settle_error = Some(e);
        }

        let request = LoadRequest::autoplay(MediaItem::audio(url));
        tracing::debug!("Loading {}", url);
        if let Err(e) = self
            .command(Command::LoadMedia, media.load(&self.ctx, &request))
            .await
        {
            if strict {
                return Err(e);
            }
            tracing::warn!("Ignoring load error for {}: {}", url, e);
            outcome.load_error = Some(e);
        }

        self.wait_on(media.as_ref(), wait_timeout).await?;
        Ok(outcome)
    }

    /// Stop playback, if anything is playing
    pub async fn stop(&self) -> Result<()> {
        let connection = self.connection()?;
        let playing = self.ctx.run(connection.is_playing(&self.ctx)).await?;
        if !playing {
            tracing::debug!("Nothing playing on {}", self.address);
            return Ok(());
        }

        let media = self.media().await?;
        self.command(Command::Stop, media.stop(&self.ctx)).await
    }

    /// Quit the running receiver application
    pub async fn quit(&self) -> Result<()> {
        let receiver = self.connection()?.receiver();
        self.command(Command::QuitApp, receiver.quit_app(&self.ctx)).await
    }

    /// Close the connection
    ///
    /// Closing an already closed session does nothing.
    pub async fn close(&mut self) {
        if let Some(connection) = self.connection.take() {
            connection.close().await;
            tracing::info!("Disconnected from {}", self.address);
        }
    }

    fn connection(&self) -> Result<&dyn DeviceConnection> {
        self.connection.as_deref().ok_or(NotifierError::Closed)
    }

    async fn media(&self) -> Result<Box<dyn MediaChannel>> {
        let connection = self.connection()?;
        self.command(Command::MediaControl, connection.media(&self.ctx)).await
    }

    async fn wait_on(&self, media: &dyn MediaChannel, timeout: Duration) -> Result<()> {
        let started = Instant::now();
        let mut polls = 0u32;
        loop {
            let status = self
                .command(Command::GetStatus, media.status(&self.ctx))
                .await?;
            polls += 1;

            self.ctx
                .run(tokio::time::sleep(self.config.poll_interval))
                .await?;

            if status.is_empty() {
                tracing::debug!("Playback idle after {} polls", polls);
                return Ok(());
            }
            if started.elapsed() > timeout {
                tracing::debug!(
                    "Still playing after {:?}, giving up after {} polls",
                    timeout,
                    polls
                );
                return Ok(());
            }
        }
    }

    async fn command<T, F>(&self, command: Command, request: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, DeviceError>>,
    {
        self.ctx
            .run(request)
            .await?
            .map_err(|source| NotifierError::Command { command, source })
    }
}
