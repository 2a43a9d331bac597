//! Chaotic generators feeding the keystream.
//!
//! Three independent recurrences (logistic, Henon, Chebyshev), each a pure
//! function of its seed and parameters.

pub mod chaotic_map;
pub mod chebyshev;
pub mod henon;
pub mod logistic;

pub use chaotic_map::{generate, ChaoticMap};
pub use chebyshev::ChebyshevMap;
pub use henon::HenonMap;
pub use logistic::LogisticMap;
