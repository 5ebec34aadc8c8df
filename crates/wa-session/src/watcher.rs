//! Session lifecycle watcher with polling.

use crate::client::SessionClient;
use crate::types::*;
use std::time::Duration;
use tokio::time::sleep;
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, error, info};

/// Polls the bridge and turns status changes into lifecycle signals.
pub struct SessionWatcher {
    client: SessionClient,
    poll_interval: Duration,
}

impl SessionWatcher {
    pub fn new(client: SessionClient, poll_interval: Duration) -> Self {
        Self {
            client,
            poll_interval,
        }
    }

    /// Lifecycle signals as an async stream. Repeated identical statuses are
    /// emitted once.
    pub fn stream(self) -> impl Stream<Item = SessionEvent> {
        async_stream::stream! {
            let mut last: Option<SessionStatus> = None;
            loop {
                match self.client.status().await {
                    Ok(status) => {
                        if last.as_ref() != Some(&status) {
                            debug!(state = ?status.state, "Session status changed");
                            if let Some(event) = SessionEvent::from_status(&status) {
                                yield event;
                            }
                            last = Some(status);
                        }
                    }
                    Err(e) => {
                        error!("Session status error: {}", e);
                        // Back off on error
                        sleep(Duration::from_secs(5)).await;
                        continue;
                    }
                }

                sleep(self.poll_interval).await;
            }
        }
    }

    /// Drive the shared session state until the bridge stream ends.
    pub async fn run(self) {
        let state = self.client.state().clone();
        let mut stream = Box::pin(self.stream());

        while let Some(event) = stream.next().await {
            if !state.apply(&event) {
                continue;
            }
            match event {
                SessionEvent::PairingCode(_) => info!("QR code received, scan it from the index page"),
                SessionEvent::Authenticated => info!("Authenticated"),
                SessionEvent::Ready => info!("Client is ready"),
                SessionEvent::Disconnected => info!("Client disconnected, waiting for a new QR code"),
            }
        }
    }
}
