//! Shared types for side effect handlers.

use std::future::Future;
use std::sync::Arc;

use gateway_client::GatewayClient;

use crate::action::Loaded;
use crate::sync::FetchTicket;

pub use tokio_util::task::TaskTracker;

/// Shared client handle for async tasks.
///
/// Every client method takes `&self`, so tasks call it concurrently without a lock.
pub type SharedClient = Arc<GatewayClient>;

/// Await `call` unless the ticket is cancelled first.
///
/// Returns `None` for a cancelled ticket so nothing is sent back.
pub(super) async fn run_ticket<P, T, F>(ticket: FetchTicket<P>, call: F) -> Option<Loaded<P, T>>
where
    F: Future<Output = gateway_client::Result<T>>,
{
    let cancel = ticket.cancel.clone();
    tokio::select! {
        biased;
        _ = cancel.cancelled() => {
            tracing::debug!(seq = ticket.seq, "Fetch cancelled before completion");
            None
        }
        result = call => Some(ticket.complete(result.map_err(Arc::new))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sync::FetchOrigin;
    use tokio_util::sync::CancellationToken;

    fn ticket(cancel: CancellationToken) -> FetchTicket<u8> {
        FetchTicket {
            seq: 3,
            params: 7,
            origin: FetchOrigin::Manual,
            cancel,
        }
    }

    #[tokio::test]
    async fn test_run_ticket_completes_with_params() {
        let done = run_ticket(ticket(CancellationToken::new()), async { Ok(42u32) })
            .await
            .expect("not cancelled");
        assert_eq!(done.seq, 3);
        assert_eq!(done.params, 7);
        assert_eq!(done.result.unwrap(), 42);
    }

    #[tokio::test]
    async fn test_run_ticket_drops_cancelled_fetch() {
        let cancel = CancellationToken::new();
        cancel.cancel();
        let done = run_ticket(ticket(cancel), std::future::pending::<gateway_client::Result<u32>>()).await;
        assert!(done.is_none());
    }
}
