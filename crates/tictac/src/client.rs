//! `Client` builder and run loop.
//!
//! This is the entry point for playing a game. It ties together all the
//! layers: transport → protocol → session → front-end sinks.

use std::time::Duration;

use tictac_protocol::{CellIndex, LineCodec};
use tictac_session::{
    GameSession, Navigator, Phase, RenderSink, ResultSink, Snapshot,
};
use tictac_transport::{
    Connection, ConnectionState, Endpoint, TransportError, WebSocketConnection,
};
use tokio::sync::mpsc;
use url::Url;

use crate::handler::{handle_connection, LoopContext};
use crate::{ClientConfig, ClientError};

/// Builder for configuring a [`Client`].
///
/// # Example
///
/// ```rust,ignore
/// use tictac::prelude::*;
///
/// let (client, moves) = ClientBuilder::new()
///     .page("https://game.example/")?
///     .build(screen, leaderboard, browser)?;
/// let report = client.run().await?;
/// ```
pub struct ClientBuilder {
    config: ClientConfig,
}

impl ClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Starts from an existing configuration.
    pub fn from_config(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Sets the URL of the page the game was loaded from.
    pub fn page(mut self, url: &str) -> Result<Self, ClientError> {
        self.config.page_url = Url::parse(url)?;
        Ok(self)
    }

    /// Sets the socket path on the page's host.
    pub fn socket_path(mut self, path: &str) -> Self {
        self.config.socket_path = path.to_string();
        self
    }

    /// Sets an explicit socket URL instead of deriving one.
    pub fn socket_url(mut self, url: &str) -> Result<Self, ClientError> {
        self.config.socket_url = Some(Url::parse(url)?);
        Ok(self)
    }

    /// Sets the connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Validates the endpoint and builds the client with its front-end
    /// collaborators.
    ///
    /// Returns the client and the [`MoveSender`] the UI clicks through.
    ///
    /// # Errors
    /// A page/socket scheme mismatch is fatal here: the client is never
    /// built, so it never connects.
    pub fn build<R, S, N>(
        self,
        render: R,
        results: S,
        navigator: N,
    ) -> Result<(Client<R, S, N>, MoveSender), ClientError>
    where
        R: RenderSink,
        S: ResultSink,
        N: Navigator,
    {
        let endpoint = self.config.endpoint()?;
        tracing::debug!(%endpoint, security = %endpoint.security(), "endpoint resolved");

        let (tx, rx) = mpsc::unbounded_channel();
        let client = Client {
            endpoint,
            connect_timeout: self.config.connect_timeout,
            session: GameSession::new(render, results),
            navigator,
            codec: LineCodec,
            moves: rx,
            state: ConnectionState::Connecting,
        };
        Ok((client, MoveSender(tx)))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The UI's handle for submitting moves.
///
/// Cheap to clone. Clicks go into a queue drained by the client loop,
/// which decides whether the move may be sent.
#[derive(Debug, Clone)]
pub struct MoveSender(mpsc::UnboundedSender<CellIndex>);

impl MoveSender {
    /// Requests a move on `index`. Silently ignored if the client is gone.
    pub fn click(&self, index: impl Into<CellIndex>) {
        let index = index.into();
        if self.0.send(index).is_err() {
            tracing::debug!(%index, "client gone, click ignored");
        }
    }
}

/// How a client run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    /// Final session state.
    pub snapshot: Snapshot,
    /// Lifecycle phase at the end of the run.
    pub phase: Phase,
    /// Always `Closed`, with the reason.
    pub connection: ConnectionState,
}

/// One game client: one connection, one session.
pub struct Client<R, S, N> {
    endpoint: Endpoint,
    connect_timeout: Duration,
    session: GameSession<R, S>,
    navigator: N,
    codec: LineCodec,
    moves: mpsc::UnboundedReceiver<CellIndex>,
    state: ConnectionState,
}

impl<R, S, N> Client<R, S, N>
where
    R: RenderSink,
    S: ResultSink,
    N: Navigator,
{
    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub fn connection_state(&self) -> &ConnectionState {
        &self.state
    }

    pub fn session(&self) -> &GameSession<R, S> {
        &self.session
    }

    /// Connects to the endpoint and plays until the session ends.
    pub async fn run(mut self) -> Result<SessionReport, ClientError> {
        tracing::info!(endpoint = %self.endpoint, "connecting");

        let conn = match WebSocketConnection::connect(
            &self.endpoint,
            self.connect_timeout,
        )
        .await
        {
            Ok(conn) => conn,
            Err(e) => {
                self.set_state(ConnectionState::Closed(e.to_string()));
                return Err(e.into());
            }
        };

        self.run_on(conn).await
    }

    /// Plays over an already open connection.
    pub async fn run_on<C>(mut self, conn: C) -> Result<SessionReport, ClientError>
    where
        C: Connection<Error = TransportError>,
    {
        // Clicks made before the socket was open are not moves.
        let mut discarded = 0;
        while self.moves.try_recv().is_ok() {
            discarded += 1;
        }
        if discarded > 0 {
            tracing::debug!(discarded, "dropped clicks made before open");
        }

        self.set_state(ConnectionState::Open);

        let result = handle_connection(
            &conn,
            LoopContext {
                session: &mut self.session,
                navigator: &mut self.navigator,
                codec: &self.codec,
                moves: &mut self.moves,
                root_url: self.endpoint.root_url(),
            },
        )
        .await;

        match result {
            Ok(reason) => {
                self.set_state(ConnectionState::Closed(reason));
                Ok(SessionReport {
                    snapshot: self.session.snapshot(),
                    phase: self.session.phase(),
                    connection: self.state,
                })
            }
            Err(e) => {
                self.set_state(ConnectionState::Closed(e.to_string()));
                Err(e)
            }
        }
    }

    fn set_state(&mut self, state: ConnectionState) {
        tracing::debug!(from = %self.state, to = %state, "connection state");
        self.state = state;
    }
}
