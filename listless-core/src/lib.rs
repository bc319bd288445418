// listless-core - Memoised delay cells and lazy infinite sequences
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # listless-core
//!
//! A small lazy-evaluation core: optional values ([`Maybe`]), memoising
//! deferred-computation cells ([`Delay`]), and lazy, potentially
//! infinite sequences built out of them ([`LazySeq`]).
//!
//! ```
//! use listless_core::LazySeq;
//!
//! let evens = LazySeq::iterate(1, |n| n + 1)
//!     .filter(|n| n % 2 == 0)
//!     .take(3);
//! assert_eq!(evens.to_list(), im::vector![2, 4, 6]);
//! ```
//!
//! Nothing above computes anything until `to_list` demands values:
//! transforms only wrap new delay cells around existing ones, and each
//! cell runs its thunk at most once.
//!
//! Everything here is single-threaded by construction. The cells use
//! `Rc<RefCell<_>>`, so none of these types are `Send` or `Sync`; use
//! one sequence per thread or put your own synchronisation on top.

pub mod delay;
pub mod error;
pub mod lazy_seq;
pub mod maybe;

pub use delay::Delay;
pub use error::{Error, Result};
pub use lazy_seq::LazySeq;
pub use maybe::Maybe;
