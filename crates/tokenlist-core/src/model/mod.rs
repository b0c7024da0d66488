//! Domain models for the token list
//!
//! - [`Token`]: one asset's metadata record, keyed by `symbol`
//! - [`Version`]: the list's three-part semantic version
//! - [`Classification`]: severity of the change between two token sets

pub mod classification;
pub mod token;
pub mod version;

pub use classification::Classification;
pub use token::{ensure_unique_symbols, Token, ADDRESS_FIELD, LOGO_URI_FIELD, SYMBOL_FIELD};
pub use version::Version;
