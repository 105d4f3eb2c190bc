//! The subscribe/mutate/refresh cycle a viewer follows.
//!
//! A viewer joins its board's group, takes an authoritative snapshot, and
//! from then on answers every change notification with a full re-fetch.
//! Event payloads are never applied incrementally; the protocol does not
//! guarantee they are sufficient. This also makes a viewer observing its
//! own mutation idempotent.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::broadcast::error::RecvError;

use syncboard_core::BoardResult;
use syncboard_domain::{BoardId, ListWithTasks};

use crate::event::BoardEvent;
use crate::hub::{BoardChannelHub, BoardSubscription};

/// Where a viewer fetches authoritative board state from. The service layer
/// implements this; tests mock it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BoardStateSource: Send + Sync {
    async fn fetch_board_state(&self, board_id: BoardId) -> BoardResult<Vec<ListWithTasks>>;
}

/// What one step of the sync cycle observed.
#[derive(Debug)]
pub enum SyncOutcome {
    /// A notification arrived; state was re-fetched.
    Updated(BoardEvent),
    /// The viewer fell behind and notifications were dropped; state was
    /// re-fetched so it is authoritative again.
    Resynced { missed: u64 },
    /// The board's channel is gone; the cycle ends.
    Disconnected,
}

pub struct BoardViewer<S> {
    board_id: BoardId,
    source: Arc<S>,
    subscription: BoardSubscription,
    state: Vec<ListWithTasks>,
}

impl<S: BoardStateSource> BoardViewer<S> {
    /// Join the board's group and take the initial snapshot. Joining happens
    /// first so no mutation can slip between snapshot and subscription.
    pub async fn attach(
        hub: &BoardChannelHub,
        source: Arc<S>,
        board_id: BoardId,
    ) -> BoardResult<Self> {
        let subscription = hub.subscribe(board_id).await;
        let state = source.fetch_board_state(board_id).await?;
        Ok(Self {
            board_id,
            source,
            subscription,
            state,
        })
    }

    pub fn board_id(&self) -> BoardId {
        self.board_id
    }

    /// The viewer's current (last fetched) board state.
    pub fn state(&self) -> &[ListWithTasks] {
        &self.state
    }

    /// Replace local state with a fresh authoritative fetch.
    pub async fn refresh(&mut self) -> BoardResult<()> {
        self.state = self.source.fetch_board_state(self.board_id).await?;
        Ok(())
    }

    /// Wait for the next notification and react to it.
    pub async fn sync_once(&mut self) -> BoardResult<SyncOutcome> {
        match self.subscription.recv().await {
            Ok(event) => {
                self.refresh().await?;
                Ok(SyncOutcome::Updated(event))
            }
            Err(RecvError::Lagged(missed)) => {
                tracing::warn!(board_id = %self.board_id, missed, "viewer lagged, resyncing");
                self.refresh().await?;
                Ok(SyncOutcome::Resynced { missed })
            }
            Err(RecvError::Closed) => Ok(SyncOutcome::Disconnected),
        }
    }

    /// Leave the board's group. Anything published afterwards is missed.
    pub fn detach(self) {
        self.subscription.leave();
    }
}
