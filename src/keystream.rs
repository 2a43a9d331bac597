//! Keystream construction from the three chaotic maps.
//!
//! Each map runs for `length` steps, every sample is quantized to a byte, and
//! the three byte streams are combined with XOR. The same seeds, parameters
//! and length always give a bit-identical keystream.

use tracing::debug;

use crate::error::{ChaosCryptError, MapKind};
use crate::random::chebyshev::DEFAULT_CHEBYSHEV_DEGREE;
use crate::random::henon::{DEFAULT_HENON_A, DEFAULT_HENON_B};
use crate::random::logistic::DEFAULT_LOGISTIC_RATE;
use crate::random::{generate, ChebyshevMap, HenonMap, LogisticMap};

/// Control parameters shared by every keystream built with them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapParameters {
    /// Logistic growth rate `r`.
    pub logistic_rate: f64,
    /// Henon `a` coefficient.
    pub henon_a: f64,
    /// Henon `b` coefficient.
    pub henon_b: f64,
    /// Chebyshev degree `l`.
    pub chebyshev_degree: f64,
}

impl Default for MapParameters {
    /// Returns `r = 3.9999`, `a = 1.4`, `b = 0.3`, `l = 4`.
    fn default() -> Self {
        MapParameters {
            logistic_rate: DEFAULT_LOGISTIC_RATE,
            henon_a: DEFAULT_HENON_A,
            henon_b: DEFAULT_HENON_B,
            chebyshev_degree: DEFAULT_CHEBYSHEV_DEGREE,
        }
    }
}

impl MapParameters {
    /// Checks that every parameter is usable.
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::InvalidParameter`] if the logistic rate is
    /// outside (0, 4) or any other parameter is not finite. At `r = 4` the
    /// map falls onto fixed points for dyadic seeds such as 0.5.
    pub fn validate(&self) -> Result<(), ChaosCryptError> {
        if !(self.logistic_rate > 0.0 && self.logistic_rate < 4.0) {
            return Err(ChaosCryptError::InvalidParameter {
                name: "logistic_rate",
                value: self.logistic_rate,
            });
        }
        let finite_checks = [
            ("henon_a", self.henon_a),
            ("henon_b", self.henon_b),
            ("chebyshev_degree", self.chebyshev_degree),
        ];
        for (name, value) in finite_checks {
            if !value.is_finite() {
                return Err(ChaosCryptError::InvalidParameter { name, value });
            }
        }
        Ok(())
    }
}

/// Initial values of the three maps. Together with [`MapParameters`] this is
/// the cipher key.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedSet {
    pub logistic_x0: f64,
    pub henon_x0: f64,
    pub henon_y0: f64,
    pub chebyshev_x0: f64,
}

impl Default for SeedSet {
    fn default() -> Self {
        SeedSet {
            logistic_x0: 0.4999,
            henon_x0: 0.21,
            henon_y0: 0.21,
            chebyshev_x0: 0.4999,
        }
    }
}

impl SeedSet {
    /// Creates a seed set from explicit initial values.
    pub fn new(logistic_x0: f64, henon_x0: f64, henon_y0: f64, chebyshev_x0: f64) -> Self {
        SeedSet {
            logistic_x0,
            henon_x0,
            henon_y0,
            chebyshev_x0,
        }
    }

    /// Checks every seed against its map's domain.
    ///
    /// - logistic: open interval (0, 1)
    /// - Henon: both coordinates finite
    /// - Chebyshev: open interval (-1, 1); both endpoints pin the map at 1
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::InvalidSeed`] naming the first offending map.
    pub fn validate(&self) -> Result<(), ChaosCryptError> {
        if !(self.logistic_x0 > 0.0 && self.logistic_x0 < 1.0) {
            return Err(ChaosCryptError::InvalidSeed {
                map: MapKind::Logistic,
                value: self.logistic_x0,
            });
        }
        for value in [self.henon_x0, self.henon_y0] {
            if !value.is_finite() {
                return Err(ChaosCryptError::InvalidSeed {
                    map: MapKind::Henon,
                    value,
                });
            }
        }
        if !(self.chebyshev_x0 > -1.0 && self.chebyshev_x0 < 1.0) {
            return Err(ChaosCryptError::InvalidSeed {
                map: MapKind::Chebyshev,
                value: self.chebyshev_x0,
            });
        }
        Ok(())
    }
}

/// Quantizes a chaotic sample to a byte: `|round(v·255)| mod 256`.
///
/// Rounding is half away from zero. Negative samples contribute their
/// magnitude, and magnitudes above 255 wrap to their low 8 bits.
pub fn quantize(value: f64) -> u8 {
    let magnitude = (value * 255.0).round().abs() as u64;
    (magnitude % 256) as u8
}

/// Byte keystream shared by encryption and decryption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keystream {
    bytes: Vec<u8>,
}

impl Keystream {
    /// Returns the keystream bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the number of bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the keystream holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the byte at `index`, if present.
    pub fn get(&self, index: usize) -> Option<u8> {
        self.bytes.get(index).copied()
    }

    /// Checks that the keystream covers a grid of the given shape.
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::KeystreamTooShort`] when
    /// `len() < max(width, height)`.
    pub fn ensure_covers(&self, width: usize, height: usize) -> Result<(), ChaosCryptError> {
        let required = width.max(height);
        if self.bytes.len() < required {
            return Err(ChaosCryptError::KeystreamTooShort {
                required,
                actual: self.bytes.len(),
            });
        }
        Ok(())
    }
}

impl From<Vec<u8>> for Keystream {
    fn from(bytes: Vec<u8>) -> Self {
        Keystream { bytes }
    }
}

impl Drop for Keystream {
    /// Clears the key material on drop.
    fn drop(&mut self) {
        self.bytes.fill(0);
    }
}

/// Builds keystreams from a seed set and map parameters.
///
/// # Examples
///
/// ```
/// use chaos_image_crypt::keystream::{KeystreamBuilder, SeedSet};
///
/// let keystream = KeystreamBuilder::new(SeedSet::default()).build(8).unwrap();
/// assert_eq!(keystream.as_bytes(), &[165, 183, 2, 22, 134, 1, 161, 220]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KeystreamBuilder {
    seeds: SeedSet,
    parameters: MapParameters,
}

impl KeystreamBuilder {
    /// Creates a builder with the given seeds and default map parameters.
    pub fn new(seeds: SeedSet) -> Self {
        KeystreamBuilder {
            seeds,
            parameters: MapParameters::default(),
        }
    }

    /// Replaces the map parameters.
    pub fn with_parameters(mut self, parameters: MapParameters) -> Self {
        self.parameters = parameters;
        self
    }

    /// Returns the seed set.
    pub fn seeds(&self) -> &SeedSet {
        &self.seeds
    }

    /// Returns the map parameters.
    pub fn parameters(&self) -> &MapParameters {
        &self.parameters
    }

    /// Builds a keystream of exactly `length` bytes.
    ///
    /// # Errors
    /// Returns [`ChaosCryptError::InvalidSeed`] or
    /// [`ChaosCryptError::InvalidParameter`] before any map is iterated.
    pub fn build(&self, length: usize) -> Result<Keystream, ChaosCryptError> {
        self.seeds.validate()?;
        self.parameters.validate()?;

        let p = &self.parameters;
        let s = &self.seeds;
        let logistic = generate(LogisticMap::new(s.logistic_x0, p.logistic_rate), length);
        let henon = generate(
            HenonMap::new(s.henon_x0, s.henon_y0, p.henon_a, p.henon_b),
            length,
        );
        let chebyshev = generate(ChebyshevMap::new(s.chebyshev_x0, p.chebyshev_degree), length);

        let bytes: Vec<u8> = logistic
            .iter()
            .zip(&henon)
            .zip(&chebyshev)
            .map(|((&l, &h), &c)| quantize(l) ^ quantize(h) ^ quantize(c))
            .collect();

        debug!(length, seeds = ?self.seeds, "built chaotic keystream");
        Ok(Keystream::from(bytes))
    }
}
