//! Plain-text comparison of adjacent-pixel correlation.
//!
//! Renders an ASCII table with one row per direction and one column per
//! image (plain, cipher, decrypted), values to five decimals:
//!
//! ```text
//! +------------+-------------+--------------+-----------------+
//! | Direction  | Plain Image | Cipher Image | Decrypted Image |
//! +------------+-------------+--------------+-----------------+
//! | Horizontal | 0.97012     | 0.00213      | 0.97012         |
//! +------------+-------------+--------------+-----------------+
//! | Vertical   | 0.95541     | -0.00102     | 0.95541         |
//! +------------+-------------+--------------+-----------------+
//! ```

use std::fmt;

use tabled::{settings::Style, Table, Tabled};

use crate::correlation::{correlate, CorrelationPair};
use crate::grid::PixelGrid;

/// Correlation of the plain, cipher and decrypted images side by side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationReport {
    pub plain: CorrelationPair,
    pub cipher: CorrelationPair,
    pub decrypted: CorrelationPair,
}

/// One table line: a direction and its value in each image.
#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "Direction")]
    direction: &'static str,
    #[tabled(rename = "Plain Image")]
    plain: String,
    #[tabled(rename = "Cipher Image")]
    cipher: String,
    #[tabled(rename = "Decrypted Image")]
    decrypted: String,
}

fn cell(value: f64) -> String {
    format!("{:.5}", value)
}

impl CorrelationReport {
    /// Correlates the three grids and collects the results.
    pub fn from_grids(plain: &PixelGrid, cipher: &PixelGrid, decrypted: &PixelGrid) -> Self {
        CorrelationReport {
            plain: correlate(plain),
            cipher: correlate(cipher),
            decrypted: correlate(decrypted),
        }
    }

    fn rows(&self) -> [ReportRow; 2] {
        [
            ReportRow {
                direction: "Horizontal",
                plain: cell(self.plain.horizontal),
                cipher: cell(self.cipher.horizontal),
                decrypted: cell(self.decrypted.horizontal),
            },
            ReportRow {
                direction: "Vertical",
                plain: cell(self.plain.vertical),
                cipher: cell(self.cipher.vertical),
                decrypted: cell(self.decrypted.vertical),
            },
        ]
    }
}

impl fmt::Display for CorrelationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut table = Table::new(self.rows());
        table.with(Style::ascii());
        write!(f, "{}", table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(h: f64, v: f64) -> CorrelationPair {
        CorrelationPair {
            horizontal: h,
            vertical: v,
        }
    }

    #[test]
    fn test_table_layout() {
        let report = CorrelationReport {
            plain: pair(0.97012, 0.95541),
            cipher: pair(0.00213, -0.00102),
            decrypted: pair(0.97012, 0.95541),
        };
        let expected = "\
+------------+-------------+--------------+-----------------+
| Direction  | Plain Image | Cipher Image | Decrypted Image |
+------------+-------------+--------------+-----------------+
| Horizontal | 0.97012     | 0.00213      | 0.97012         |
+------------+-------------+--------------+-----------------+
| Vertical   | 0.95541     | -0.00102     | 0.95541         |
+------------+-------------+--------------+-----------------+";
        assert_eq!(report.to_string(), expected);
    }

    #[test]
    fn test_nan_is_rendered() {
        let report = CorrelationReport {
            plain: pair(f64::NAN, f64::NAN),
            cipher: pair(0.0, 0.0),
            decrypted: pair(f64::NAN, f64::NAN),
        };
        let text = report.to_string();
        assert!(text.contains("NaN"));
        assert!(text.contains("0.00000"));
    }

    #[test]
    fn test_from_grids() {
        let flat = PixelGrid::filled(3, 3, [4, 4, 4]).unwrap();
        let report = CorrelationReport::from_grids(&flat, &flat, &flat);
        assert!(!report.plain.is_defined());
        assert!(!report.cipher.is_defined());
    }
}
