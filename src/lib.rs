//! A misuse-resistant optional value.
//!
//! [`Optional<T>`] is either present with exactly one `T` or empty. Unlike a
//! general-purpose option type it is built so that the common ways of misusing
//! one do not compile or are reported as errors:
//!
//! - constructing a present value from something absent is a typed
//!   [`Error`], not a panic ([`Optional::from_value`]);
//! - nesting collapses: every constructor and [`Optional::map`] flatten;
//! - there is no `get`/`unwrap`; the value is reached through defaults,
//!   transformations, or by matching on [`Presence`];
//! - eager and lazy defaults are separate operations
//!   ([`Optional::or_else_value`], [`Optional::or_else_compute`]).
//!
//! ```
//! use presence::{Optional, Presence};
//!
//! let shout = Optional::from_nullable(Some("Avoid")).map(str::to_uppercase);
//!
//! match shout.presence() {
//!     Presence::Present(word) => assert_eq!(word, "AVOID"),
//!     Presence::Absent => unreachable!(),
//! }
//! ```
//!
//! # Features
//!
//! - `serde` (default): `Serialize`/`Deserialize` for [`Profile`]
//! - `tracing` (default): a `debug` event whenever a construction is rejected

mod error;
mod marker;
mod nullable;
mod optional;
mod presence;
pub mod profile;

pub use error::*;
pub use marker::*;
pub use nullable::*;
pub use optional::*;
pub use presence::*;
pub use profile::Profile;
