//! This module provides an easy single import for those using this crate.

pub use crate::dual::DualSignatureAnalyzer;
pub use crate::lfsr::SignatureAnalyzer;
pub use crate::masks::{noised_sequences, ChannelMode};
pub use crate::polynomial::Polynomial;
pub use crate::signature::Signature;
pub use crate::tester::{AliasReport, AliasTester, TesterConfig};
pub use crate::util::{ErrorKind, SigError};
