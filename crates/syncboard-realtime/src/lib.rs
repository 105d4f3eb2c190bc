pub mod event;
pub mod hub;
pub mod viewer;

pub use event::{BoardEvent, BOARD_UPDATED};
pub use hub::{BoardChannelHub, BoardSubscription, DEFAULT_EVENT_BUFFER};
pub use viewer::{BoardStateSource, BoardViewer, SyncOutcome};
