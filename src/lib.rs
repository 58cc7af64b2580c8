//! Simulation of LFSR signature analyzers and measurement of their aliasing
//! behavior under small error patterns.

pub mod dual;
pub mod lfsr;
pub mod masks;
pub mod polynomial;
pub mod prelude;
pub mod signature;
pub mod tester;
pub mod util;

pub use crate::util::{ErrorKind, SigError};
