//! Client-side synchronization core shared by every screen.
//!
//! Responsibilities:
//! - Countdown scheduling of polled fetches (`countdown`).
//! - Supersede-aware snapshot state for any fetched resource (`resource`).
//! - Local patching of list pages after successful mutations (`optimistic`).
//! - The large-dataset confirmation rule (`guard`).
//! - Debounced mirroring of local selection state to the backend (`debounce`).
//!
//! Does NOT handle:
//! - Issuing HTTP requests (see `runtime::side_effects`).
//! - Key handling or rendering (see `app` and `ui`).
//!
//! Invariants:
//! - Everything here is synchronous and owned by the main loop; async work only
//!   communicates with it through actions carrying a [`FetchTicket`]'s identity.

pub mod countdown;
pub mod debounce;
pub mod guard;
pub mod optimistic;
pub mod resource;

pub use countdown::Countdown;
pub use debounce::Debouncer;
pub use guard::CostGuard;
pub use optimistic::{Keyed, MutationKey, PendingMutations, patch_item, remove_items};
pub use resource::{FetchOrigin, FetchTicket, Fetched, SyncedResource};
