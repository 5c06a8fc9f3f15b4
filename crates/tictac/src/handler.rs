//! Per-connection loop: frames in, moves out.
//!
//! Once the socket is open, everything happens in this one loop:
//!   1. Wait for either an inbound frame or a click from the UI
//!   2. Frame → decode → apply to the session (sinks fire from there)
//!   3. Click → gate through the session → send the move
//!   4. Stop on game over, forced disconnect, or socket close
//!
//! Both inputs are handled by the same task, one at a time, so the
//! session never sees a click and a frame concurrently.

use tictac_protocol::{CellIndex, Codec};
use tictac_session::{GameSession, Navigator, RenderSink, ResultSink, Step};
use tictac_transport::{Connection, TransportError};
use tokio::sync::mpsc;
use url::Url;

use crate::ClientError;

/// Close reason recorded when the game ends normally.
pub(crate) const GAME_OVER: &str = "game over";
/// Close reason recorded when the server closes the socket.
pub(crate) const CLOSED_BY_SERVER: &str = "closed by server";

/// Everything the loop borrows from the client.
pub(crate) struct LoopContext<'a, R, S, N, K> {
    pub(crate) session: &'a mut GameSession<R, S>,
    pub(crate) navigator: &'a mut N,
    pub(crate) codec: &'a K,
    pub(crate) moves: &'a mut mpsc::UnboundedReceiver<CellIndex>,
    pub(crate) root_url: &'a Url,
}

/// Runs the connection until it ends. Returns the close reason.
///
/// # Errors
/// Only transport failures end the loop with an error. A bad frame is
/// logged and skipped.
pub(crate) async fn handle_connection<C, R, S, N, K>(
    conn: &C,
    cx: LoopContext<'_, R, S, N, K>,
) -> Result<String, ClientError>
where
    C: Connection<Error = TransportError>,
    R: RenderSink,
    S: ResultSink,
    N: Navigator,
    K: Codec,
{
    let conn_id = conn.id();

    loop {
        tokio::select! {
            frame = conn.recv() => {
                let Some(data) = frame? else {
                    tracing::info!(%conn_id, "connection closed by server");
                    return Ok(CLOSED_BY_SERVER.to_string());
                };

                match apply_frame(cx.session, cx.codec, &data) {
                    Some(Step::Continue) | None => {}
                    Some(Step::Finished(outcome)) => {
                        tracing::info!(%conn_id, ?outcome, "leaving finished game");
                        close_quietly(conn).await;
                        return Ok(GAME_OVER.to_string());
                    }
                    Some(Step::Disconnected(reason)) => {
                        cx.navigator.alert(&reason);
                        tracing::info!(%conn_id, url = %cx.root_url, "redirecting");
                        cx.navigator.navigate(cx.root_url);
                        close_quietly(conn).await;
                        return Ok(reason);
                    }
                }
            }

            Some(index) = cx.moves.recv() => {
                if let Some(index) = cx.session.gate_move(index) {
                    tracing::debug!(%conn_id, %index, "sending move");
                    conn.send(&cx.codec.encode_move(index)).await?;
                }
            }
        }
    }
}

/// Decodes and applies one frame. `None` means the frame was dropped.
fn apply_frame<R, S, K>(
    session: &mut GameSession<R, S>,
    codec: &K,
    data: &[u8],
) -> Option<Step>
where
    R: RenderSink,
    S: ResultSink,
    K: Codec,
{
    let step = codec
        .decode(data)
        .map_err(ClientError::from)
        .and_then(|event| {
            tracing::trace!(kind = event.kind(), "frame decoded");
            session.handle(event).map_err(ClientError::from)
        });

    match step {
        Ok(step) => Some(step),
        Err(e) => {
            tracing::warn!(
                error = %e,
                frame = %String::from_utf8_lossy(data),
                "dropping frame"
            );
            None
        }
    }
}

async fn close_quietly<C>(conn: &C)
where
    C: Connection<Error = TransportError>,
{
    if let Err(e) = conn.close().await {
        tracing::debug!(id = %conn.id(), error = %e, "close failed");
    }
}
