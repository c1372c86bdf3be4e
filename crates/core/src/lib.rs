//! `outcome-core` — success/failure outcome values shared by service layers
//! and their callers.
//!
//! This crate is **pure**: no IO, no runtime. Domain failures travel as
//! [`ErrorInfo`] values inside a [`Status`] or [`Outcome`]; constructor
//! precondition violations surface as [`InvalidArgument`] (or a panic from the
//! non-`try_` constructors).

pub mod code;
pub mod error;
pub mod error_info;
pub mod outcome;
pub mod status;

pub use code::{UnknownCode, WellKnownCode};
pub use error::InvalidArgument;
pub use error_info::ErrorInfo;
pub use outcome::Outcome;
pub use status::Status;
