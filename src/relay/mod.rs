//! Event relay port
//!
//! Provides the EventRelay trait and a channel-backed implementation.

use crate::event::TaskEvent;
use crate::{Error, Result};
use async_trait::async_trait;
use tokio::sync::mpsc;

/// EventRelay trait - fire-and-forget event dispatch
///
/// The scheduling runtime implements this on top of the event bus transport;
/// tests implement it with capturing doubles. Dispatch does not wait for any
/// confirmation from the receiving side.
#[async_trait]
pub trait EventRelay: Send + Sync {
    /// Dispatch an event
    async fn send(&self, event: TaskEvent) -> Result<()>;
}

/// Channel-backed relay
///
/// Hands events to an in-process consumer through an unbounded tokio channel.
/// The consumer end is typically the scheduling runtime's intake loop.
#[derive(Debug, Clone)]
pub struct ChannelRelay {
    sender: mpsc::UnboundedSender<TaskEvent>,
}

impl ChannelRelay {
    /// Create a relay together with its receiving end
    pub fn unbounded() -> (Self, mpsc::UnboundedReceiver<TaskEvent>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

#[async_trait]
impl EventRelay for ChannelRelay {
    async fn send(&self, event: TaskEvent) -> Result<()> {
        tracing::debug!("Relaying {}", event.description());

        self.sender
            .send(event)
            .map_err(|e| Error::Relay(format!("event channel closed: {}", e)))
    }
}
