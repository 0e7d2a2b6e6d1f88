//! Error types for the Karnaugh map minimizer
//!
//! The engine itself never fails on validated input. These errors are raised at the
//! boundary, where term lists, cell selections and expressions enter the crate.

use std::fmt;
use std::io;
use std::sync::Arc;

use crate::expression::error::ExpressionParseError;
use crate::map::CellValue;

/// The main error type for the Karnaugh map minimizer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KmapError {
    /// A term index outside `0..=15`
    InvalidTerm {
        /// The offending index
        term: usize,
    },

    /// A term list entry that is not a non-negative integer
    MalformedTerm {
        /// The offending token, trimmed
        token: Arc<str>,
    },

    /// The same cell was given two different values
    ///
    /// Target terms and don't-cares must be disjoint sets.
    OverlappingTerms {
        /// The cell listed twice
        term: u8,
    },

    /// A manual selection with no cells
    EmptySelection,

    /// A manual selection whose size is not 1, 2, 4, 8 or 16
    InvalidGroupSize {
        /// Number of distinct cells selected
        size: usize,
    },

    /// A manual selection of valid size that is not a K-map rectangle
    InvalidGroupShape {
        /// The selected cells, sorted
        cells: Vec<u8>,
    },

    /// A selected cell whose value cannot belong to a group in the requested mode
    ///
    /// SOP groups may only hold 1s and don't-cares, POS groups only 0s and
    /// don't-cares.
    InadmissibleCell {
        /// The offending cell
        cell: u8,
        /// Its current value
        value: CellValue,
    },

    /// Failed to parse an SOP expression
    Parse(ExpressionParseError),
}

impl fmt::Display for KmapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KmapError::InvalidTerm { term } => {
                write!(f, "Invalid term {}: cell indices must be in 0..=15", term)
            }
            KmapError::MalformedTerm { token } => {
                write!(f, "Malformed term {:?}: expected a cell index", token)
            }
            KmapError::OverlappingTerms { term } => write!(
                f,
                "Term {} is listed both as a target and as a don't-care",
                term
            ),
            KmapError::EmptySelection => write!(f, "Select at least one cell"),
            KmapError::InvalidGroupSize { size } => write!(
                f,
                "Invalid selection size {}: a group holds 1, 2, 4, 8 or 16 cells",
                size
            ),
            KmapError::InvalidGroupShape { cells } => write!(
                f,
                "Cells {:?} do not form a rectangular K-map group",
                cells
            ),
            KmapError::InadmissibleCell { cell, value } => write!(
                f,
                "Cell {} holds {} and cannot be part of a group in this mode",
                cell,
                value.symbol()
            ),
            KmapError::Parse(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for KmapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KmapError::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ExpressionParseError> for KmapError {
    fn from(err: ExpressionParseError) -> Self {
        KmapError::Parse(err)
    }
}

impl From<KmapError> for io::Error {
    fn from(err: KmapError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_invalid_term_display() {
        let err = KmapError::InvalidTerm { term: 16 };
        let msg = err.to_string();
        assert!(msg.contains("Invalid term 16"));
        assert!(msg.contains("0..=15"));
    }

    #[test]
    fn test_malformed_term_display() {
        let err = KmapError::MalformedTerm {
            token: Arc::from("x"),
        };
        assert!(err.to_string().contains("\"x\""));
    }

    #[test]
    fn test_overlapping_terms_display() {
        let err = KmapError::OverlappingTerms { term: 7 };
        assert!(err.to_string().contains("Term 7"));
    }

    #[test]
    fn test_group_shape_display() {
        let err = KmapError::InvalidGroupShape { cells: vec![1, 2] };
        assert!(err.to_string().contains("[1, 2]"));
    }

    #[test]
    fn test_inadmissible_cell_display() {
        let err = KmapError::InadmissibleCell {
            cell: 3,
            value: CellValue::Zero,
        };
        let msg = err.to_string();
        assert!(msg.contains("Cell 3"));
        assert!(msg.contains("holds 0"));
    }

    #[test]
    fn test_parse_error_source() {
        let err: KmapError = ExpressionParseError::Empty.into();
        assert!(err.source().is_some());
        assert!(KmapError::EmptySelection.source().is_none());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err: io::Error = KmapError::InvalidGroupSize { size: 3 }.into();
        assert_eq!(io_err.kind(), io::ErrorKind::InvalidInput);
        assert!(io_err.to_string().contains("size 3"));
    }
}
