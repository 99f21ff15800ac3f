#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod bignum;
pub mod error;
pub mod telemetry;

pub use bignum::BigUnsigned;
pub use error::{BigError, BigResult};
