//! Shamir threshold secret sharing over a fixed prime field.
//!
//! Splits a 32-byte secret into n shares such that any k of them reconstruct it exactly
//! while k - 1 reveal nothing. Shares serialize to a fixed 67-byte binary record; the
//! surrounding program owns opening and naming the files those records live in.
#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod errors;
pub mod generate;
pub mod reconstruct;
pub mod share;

pub use generate::{generate, generate_shares};
pub use reconstruct::{reconstruct, reconstruct_from_shares};
pub use share::Share;

/// The exact size of a secret in bytes.
pub const SECRET_BYTES: usize = math_lib::element::ELEMENT_BYTES;

/// Returns the engine version string, including the arithmetic crate it is built on.
pub fn version() -> String {
    format!("secret-sharing {} (math_lib {})", env!("CARGO_PKG_VERSION"), math_lib::VERSION)
}
