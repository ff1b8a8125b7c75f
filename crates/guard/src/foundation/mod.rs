//! Core guard types and traits
//!
//! - **Carrier**: [`Guard`], created by [`requires`]
//! - **Errors**: [`GuardError`], [`ErrorKind`]
//! - **Adapters**: [`Presence`] (absent vs. present), [`Comparer`] and
//!   [`Equality`] (injectable ordering and equality)
//!
//! # Architecture
//!
//! A check is a pair of a rule and a message. The rule looks at the
//! [`Presence`] view of the guarded value and either accepts it or describes a
//! rejection; the guard turns a rejection into a [`GuardError`] and logs it.
//! Rules never see the guard itself, so no check can alter the value or the
//! name that later checks observe.

pub mod compare;
pub mod error;
pub mod guard;
pub mod presence;

pub use compare::{Comparer, Equality, NaturalEquality, NaturalOrder, Reversed};
pub use error::{ErrorKind, ErrorParams, GuardError};
pub use guard::{Guard, GuardResult, requires};
pub use presence::Presence;
