//! Domain layer - Pure business logic for block production
//!
//! Everything here is synchronous and free of I/O.
//!
//! ## Entities
//!
//! - [`Block`]: Weight-bounded accumulator of committed transactions
//! - [`BlockTemplate`]: Frozen selection result handed to sinks
//! - [`SelectionStats`]: Per-run counters
//!
//! ## Services
//!
//! - [`TransactionSelector`]: Greedy fee-rate selection (main pass)
//! - [`DependencyResolver`]: Parks transactions on missing parents and
//!   admits them when the last parent is committed
//!
//! ## Invariants
//!
//! 1. Weight limit
//! 2. No duplicate transactions
//! 3. Parents included before children
//! 4. Totals equal the sums over included transactions

mod block;
mod entities;
pub mod invariants;
pub mod ordering;
pub mod resolver;
mod selector;

pub use block::Block;
pub use entities::*;
pub use invariants::validate_block;
pub use ordering::{is_fee_rate_ordered, sort_by_fee_rate, FeeRate};
pub use resolver::{Admission, DependencyResolver, PendingIndex};
pub use selector::TransactionSelector;
