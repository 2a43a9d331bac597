//! Chaos-based symmetric image cipher.
//!
//! A byte keystream is derived from three coupled chaotic recurrences
//! (logistic, Henon and Chebyshev maps). Each RGB channel of an image is
//! scrambled by pairwise swaps along rows and columns, then diffused by
//! XOR-ing every row with one keystream byte. Decryption applies the same
//! steps in reverse order with the same keystream.
//!
//! The scheme is a teaching-grade chaos cipher. It decorrelates pixel
//! statistics but carries no cryptographic strength guarantee.
//!
//! # Architecture
//!
//! ```text
//! SeedSet + MapParameters
//!     │  LogisticMap ⊕ HenonMap ⊕ ChebyshevMap   (quantized to bytes)
//!     ▼
//! Keystream ──────────────┐
//!                         ▼
//! PixelGrid ─▶ ChannelPlane ×3 ─▶ rows ─▶ columns ─▶ XOR ─▶ PixelGrid
//!                         (ChaosImageCipher)
//!
//! correlate(grid) ─▶ CorrelationPair (adjacent-pixel Pearson)
//! ```
//!
//! # Examples
//!
//! ```
//! use chaos_image_crypt::{correlate, ChaosImageCipher, MapParameters, PixelGrid, SeedSet};
//!
//! let pixels = (0..64u32).map(|i| [i as u8, (i * 2) as u8, (i * 3) as u8]).collect();
//! let plain = PixelGrid::new(8, 8, pixels).unwrap();
//!
//! let params = MapParameters::default();
//! let cipher = ChaosImageCipher::for_grid(SeedSet::default(), params, &plain).unwrap();
//! let encrypted = cipher.encrypt(&plain).unwrap();
//! let decrypted = cipher.decrypt(&encrypted).unwrap();
//! assert_eq!(decrypted, plain);
//!
//! let before = correlate(&plain);
//! assert!(before.horizontal > 0.9);
//! ```

#![deny(clippy::all)]

pub mod cipher;
pub mod correlation;
pub mod crossover;
pub mod error;
pub mod grid;
pub mod histogram;
pub mod image_io;
pub mod keystream;
pub mod plane;
pub mod random;
pub mod report;

pub use cipher::ChaosImageCipher;
pub use correlation::{correlate, CorrelationPair};
pub use error::ChaosCryptError;
pub use grid::{Channel, PixelGrid};
pub use keystream::{Keystream, KeystreamBuilder, MapParameters, SeedSet};
pub use plane::ChannelPlane;
pub use report::CorrelationReport;
