//! Password generation and complexity ranking.
//!
//! Two independent, stateless components share a small set of character
//! class tables: a generator producing random passwords to a configurable
//! per-class composition, and a scorer deriving a heuristic complexity
//! score and a discrete 0-5 rank for any string.
//!
//! ```
//! use passrank::{generate, generate_with, rank, ClassCounts, Length, Rank};
//!
//! // Default length range is 7 to 10 characters.
//! let password = generate();
//! assert!((7..=10).contains(&password.len()));
//!
//! // Exact length with three special characters.
//! let counts = ClassCounts { specials: Some(3), ..Default::default() };
//! let password = generate_with(Length::Fixed(16), &counts).unwrap();
//! assert_eq!(password.len(), 16);
//!
//! assert_eq!(rank("M)f$you8AgL"), Rank::Amazing);
//! ```
//!
//! The default random source is `rand::thread_rng()`, which is not
//! cryptographically secure; pass a CSPRNG to
//! [`generator::generate_with_rng`] where that matters.

pub mod charset;
pub mod generator;
pub mod scorer;
pub mod types;

// Re-export the functional surface at the crate root.
pub use generator::{generate, generate_with, generate_with_rng};
pub use scorer::{rank, score, Rank};
pub use types::{ClassCounts, Defaults, GenerateError, Length, DEFAULTS};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
