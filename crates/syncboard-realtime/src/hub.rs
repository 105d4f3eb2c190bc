//! Board-scoped fan-out of change notifications.
//!
//! One broadcast channel per board, created lazily when the first viewer
//! joins and pruned once the last one leaves. Delivery is fire-and-forget:
//! no acknowledgment, no retry, no replay. A viewer that joins after a
//! publish never sees it; a viewer that falls behind the channel buffer
//! loses the overflow and must resynchronize.

use std::collections::HashMap;

use tokio::sync::broadcast;
use tokio::sync::Mutex;

use syncboard_domain::BoardId;

use crate::event::BoardEvent;

pub const DEFAULT_EVENT_BUFFER: usize = 32;

pub struct BoardChannelHub {
    buffer: usize,
    channels: Mutex<HashMap<BoardId, broadcast::Sender<BoardEvent>>>,
}

impl Default for BoardChannelHub {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_BUFFER)
    }
}

impl BoardChannelHub {
    pub fn new(buffer: usize) -> Self {
        Self {
            // broadcast channels reject a zero capacity
            buffer: buffer.max(1),
            channels: Mutex::new(HashMap::new()),
        }
    }

    /// Join a board's group. Only events published after this call are
    /// delivered to the returned subscription.
    pub async fn subscribe(&self, board_id: BoardId) -> BoardSubscription {
        let mut channels = self.channels.lock().await;
        let tx = channels
            .entry(board_id)
            .or_insert_with(|| broadcast::channel(self.buffer).0);

        tracing::debug!(%board_id, "viewer joined board group");
        BoardSubscription {
            board_id,
            rx: tx.subscribe(),
        }
    }

    /// Deliver an event to the board's current subscribers. Returns the
    /// number of receivers it was handed to; zero subscribers is normal,
    /// not an error.
    pub async fn publish(&self, board_id: BoardId, event: BoardEvent) -> usize {
        let mut channels = self.channels.lock().await;
        let delivered = match channels.get(&board_id) {
            Some(tx) => tx.send(event).unwrap_or(0),
            None => return 0,
        };

        if delivered == 0 {
            // Last subscriber left; drop the dead channel.
            channels.remove(&board_id);
        } else {
            tracing::debug!(%board_id, delivered, "published board event");
        }
        delivered
    }

    pub async fn subscriber_count(&self, board_id: BoardId) -> usize {
        let channels = self.channels.lock().await;
        channels
            .get(&board_id)
            .map(|tx| tx.receiver_count())
            .unwrap_or(0)
    }
}

/// A viewer's membership in one board's group. Dropping it (or calling
/// [`leave`](Self::leave)) removes the membership; missed notifications are
/// simply gone.
pub struct BoardSubscription {
    board_id: BoardId,
    rx: broadcast::Receiver<BoardEvent>,
}

impl BoardSubscription {
    pub fn board_id(&self) -> BoardId {
        self.board_id
    }

    pub async fn recv(&mut self) -> Result<BoardEvent, broadcast::error::RecvError> {
        self.rx.recv().await
    }

    pub fn leave(self) {
        tracing::debug!(board_id = %self.board_id, "viewer left board group");
    }
}
