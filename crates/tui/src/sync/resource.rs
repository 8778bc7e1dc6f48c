//! Supersede-aware state for one fetched resource.
//!
//! Every fetch is issued through a [`FetchTicket`] that carries a monotonically
//! increasing sequence number, the parameters the request was built from and a
//! cancellation token. Starting a new fetch cancels the previous ticket.
//!
//! Invariants:
//! - A response is applied only if its sequence is the latest issued one and its
//!   parameters equal the resource's current parameters; otherwise it is dropped.
//! - A failed fetch never clears the previous snapshot.
//! - `cancel` and `clear` advance the sequence so that a response already in the
//!   action channel can no longer be applied.

use std::fmt;

use chrono::{DateTime, Local};
use gateway_client::SyncOutcome;
use tokio_util::sync::CancellationToken;

/// What triggered a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOrigin {
    /// First load when a screen or dialog is mounted.
    Initial,
    /// Automatic countdown tick.
    Poll,
    /// Operator pressed refresh or changed a parameter.
    Manual,
}

impl FetchOrigin {
    /// Ticks and manual refreshes ask the server to bypass its cache.
    pub fn bypass_cache(self) -> bool {
        !matches!(self, Self::Initial)
    }

    /// Failures of background polls are logged, not toasted.
    pub fn is_background(self) -> bool {
        matches!(self, Self::Poll)
    }
}

/// Identity of one issued fetch.
#[derive(Debug, Clone)]
pub struct FetchTicket<P> {
    pub seq: u64,
    pub params: P,
    pub origin: FetchOrigin,
    pub cancel: CancellationToken,
}

impl<P> FetchTicket<P> {
    /// Attach the outcome of the request this ticket was issued for.
    pub fn complete<T, E>(self, result: Result<T, E>) -> Fetched<P, T, E> {
        Fetched {
            seq: self.seq,
            params: self.params,
            origin: self.origin,
            result,
        }
    }
}

/// A finished fetch on its way back to the owning resource.
#[derive(Debug, Clone)]
pub struct Fetched<P, T, E> {
    pub seq: u64,
    pub params: P,
    pub origin: FetchOrigin,
    pub result: Result<T, E>,
}

/// Snapshot, parameters and in-flight bookkeeping of one resource.
#[derive(Debug)]
pub struct SyncedResource<P, T> {
    params: P,
    data: Option<T>,
    error: Option<String>,
    loading: bool,
    seq: u64,
    in_flight: Option<CancellationToken>,
    updated_at: Option<DateTime<Local>>,
}

impl<P, T> SyncedResource<P, T>
where
    P: Clone + PartialEq,
{
    pub fn new(params: P) -> Self {
        Self {
            params,
            data: None,
            error: None,
            loading: false,
            seq: 0,
            in_flight: None,
            updated_at: None,
        }
    }

    pub fn params(&self) -> &P {
        &self.params
    }

    /// Replace the current parameters. Responses built from older parameters
    /// will be superseded.
    pub fn set_params(&mut self, params: P) {
        self.params = params;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn latest_seq(&self) -> u64 {
        self.seq
    }

    pub fn updated_at(&self) -> Option<DateTime<Local>> {
        self.updated_at
    }

    /// Issue a new fetch for the current parameters, cancelling the previous one.
    pub fn begin_fetch(&mut self, origin: FetchOrigin) -> FetchTicket<P> {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        self.seq += 1;
        self.loading = true;
        let cancel = CancellationToken::new();
        self.in_flight = Some(cancel.clone());
        FetchTicket {
            seq: self.seq,
            params: self.params.clone(),
            origin,
            cancel,
        }
    }

    /// Apply a finished fetch if it is still current.
    pub fn apply<E: fmt::Display>(
        &mut self,
        seq: u64,
        params: &P,
        result: Result<T, E>,
    ) -> SyncOutcome {
        if seq != self.seq || *params != self.params {
            return SyncOutcome::Superseded;
        }
        self.loading = false;
        self.in_flight = None;
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
                self.updated_at = Some(Local::now());
                SyncOutcome::Applied
            }
            Err(err) => {
                self.error = Some(err.to_string());
                SyncOutcome::Failed
            }
        }
    }

    /// Apply a [`Fetched`] value.
    pub fn apply_fetched<E: fmt::Display>(&mut self, fetched: Fetched<P, T, E>) -> SyncOutcome {
        self.apply(fetched.seq, &fetched.params, fetched.result)
    }

    /// Patch the current snapshot in place. Returns `false` when nothing is loaded.
    pub fn patch(&mut self, f: impl FnOnce(&mut T)) -> bool {
        match self.data.as_mut() {
            Some(data) => {
                f(data);
                true
            }
            None => false,
        }
    }

    /// Cancel the in-flight fetch, keeping the snapshot.
    pub fn cancel(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        if self.loading {
            self.seq += 1;
        }
        self.loading = false;
    }

    /// Cancel and discard everything fetched so far.
    pub fn clear(&mut self) {
        if let Some(token) = self.in_flight.take() {
            token.cancel();
        }
        self.seq += 1;
        self.loading = false;
        self.data = None;
        self.error = None;
        self.updated_at = None;
    }
}
