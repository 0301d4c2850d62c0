//! # Site-Status Gate
//!
//! Process-wide open/closed flag polled from the backend on a fixed interval.
//!
//! The gate is optimistic: before the first check completes, and whenever a
//! check fails, the site counts as open. A backend outage must never lock
//! users out. Admin routes stay reachable while closed so operators can flip
//! the switch back.

use std::time::Duration;

use tokio::{sync::watch, task::JoinHandle, time};
use tracing::warn;

use crate::{api::ApiClient, error::AppError, models::SiteStatus};

pub struct StatusGate {
    receiver: watch::Receiver<SiteStatus>,
    handle: JoinHandle<()>,
}

impl StatusGate {
    /// Starts the poll task. The first check fires immediately, then every
    /// `interval`. Must be called inside a tokio runtime.
    pub fn spawn(api: ApiClient, interval: Duration) -> Self {
        let (sender, receiver) = watch::channel(SiteStatus::Open);

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval(interval);

            loop {
                ticker.tick().await;

                let status = resolve(api.site_status().await);
                if sender.send(status).is_err() {
                    break;
                }
            }
        });

        Self { receiver, handle }
    }

    pub fn current(&self) -> SiteStatus {
        *self.receiver.borrow()
    }

    /// Channel for callers that want to react to status flips.
    pub fn subscribe(&self) -> watch::Receiver<SiteStatus> {
        self.receiver.clone()
    }
}

impl Drop for StatusGate {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A failed check keeps the site open.
pub fn resolve(result: Result<SiteStatus, AppError>) -> SiteStatus {
    match result {
        Ok(status) => status,
        Err(error) => {
            warn!("Site status check failed, assuming open: {error}");
            SiteStatus::Open
        }
    }
}

pub fn is_admin_route(path: &str) -> bool {
    path.starts_with("/admin")
}

/// Whether the maintenance view replaces the content at `path`.
pub fn route_blocked(status: SiteStatus, path: &str) -> bool {
    status == SiteStatus::Closed && !is_admin_route(path)
}
