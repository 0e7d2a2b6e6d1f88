//! Error types for PLA format parsing and validation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to PLA format parsing and validation
///
/// These errors occur when reading a PLA file that is malformed or that does not
/// describe a single 4-input function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaError {
    /// Invalid value in .i directive
    InvalidInputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Invalid value in .o directive
    InvalidOutputDirective {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Declared or inferred dimensions other than 4 inputs and 1 output
    UnsupportedDimensions {
        /// Number of inputs
        inputs: usize,
        /// Number of outputs
        outputs: usize,
    },
    /// Unknown value in .type directive
    InvalidType {
        /// The invalid value string
        value: Arc<str>,
    },
    /// Invalid character in input portion of a cube
    InvalidInputCharacter {
        /// The invalid character
        character: char,
        /// Position in the input string
        position: usize,
    },
    /// Invalid character in output portion of a cube
    InvalidOutputCharacter {
        /// The invalid character
        character: char,
        /// Position in the output string
        position: usize,
    },
    /// Cube dimensions don't match declared dimensions
    CubeDimensionMismatch {
        /// Expected number of inputs
        expected_inputs: usize,
        /// Actual number of inputs in the cube
        actual_inputs: usize,
        /// Expected number of outputs
        expected_outputs: usize,
        /// Actual number of outputs in the cube
        actual_outputs: usize,
    },
    /// Label count doesn't match dimension count
    LabelCountMismatch {
        /// Type of label ("input" or "output")
        label_type: Arc<str>,
        /// Expected number of labels
        expected: usize,
        /// Actual number of labels provided
        actual: usize,
    },
    /// A cell is both in the ON-set and in the OFF-set
    ConflictingCell {
        /// The cell
        cell: u8,
    },
}

impl fmt::Display for PlaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaError::InvalidInputDirective { value } => {
                write!(f, "Invalid .i directive value: '{}'", value)
            }
            PlaError::InvalidOutputDirective { value } => {
                write!(f, "Invalid .o directive value: '{}'", value)
            }
            PlaError::UnsupportedDimensions { inputs, outputs } => write!(
                f,
                "Unsupported dimensions (inputs: {}, outputs: {}): a Karnaugh map needs 4 inputs and 1 output",
                inputs, outputs
            ),
            PlaError::InvalidType { value } => {
                write!(f, "Invalid .type directive value: '{}'", value)
            }
            PlaError::InvalidInputCharacter { character, position } => {
                write!(f, "Invalid input character '{}' at position {}", character, position)
            }
            PlaError::InvalidOutputCharacter { character, position } => {
                write!(f, "Invalid output character '{}' at position {}", character, position)
            }
            PlaError::CubeDimensionMismatch {
                expected_inputs,
                actual_inputs,
                expected_outputs,
                actual_outputs,
            } => write!(
                f,
                "Cube dimensions (inputs: {}, outputs: {}) don't match declared dimensions (inputs: {}, outputs: {})",
                actual_inputs, actual_outputs, expected_inputs, expected_outputs
            ),
            PlaError::LabelCountMismatch { label_type, expected, actual } => write!(
                f,
                "{} label count ({}) doesn't match {} count ({})",
                label_type, actual, label_type, expected
            ),
            PlaError::ConflictingCell { cell } => {
                write!(f, "Cell {} is in both the ON-set and the OFF-set", cell)
            }
        }
    }
}

impl std::error::Error for PlaError {}

impl From<PlaError> for io::Error {
    fn from(err: PlaError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors that can occur when reading PLA format data
///
/// This error type is returned by `KMap::from_pla_*` methods.
#[derive(Debug)]
pub enum PlaReadError {
    /// PLA format error
    Pla(PlaError),
    /// IO error during reading
    Io(io::Error),
}

impl fmt::Display for PlaReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaReadError::Pla(e) => write!(f, "PLA format error: {}", e),
            PlaReadError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PlaReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaReadError::Pla(e) => Some(e),
            PlaReadError::Io(e) => Some(e),
        }
    }
}

impl From<PlaError> for PlaReadError {
    fn from(err: PlaError) -> Self {
        PlaReadError::Pla(err)
    }
}

impl From<io::Error> for PlaReadError {
    fn from(err: io::Error) -> Self {
        PlaReadError::Io(err)
    }
}

impl From<PlaReadError> for io::Error {
    fn from(err: PlaReadError) -> Self {
        match err {
            PlaReadError::Io(e) => e,
            PlaReadError::Pla(e) => io::Error::new(io::ErrorKind::InvalidData, e),
        }
    }
}

/// Errors that can occur when writing PLA format data
///
/// This error type is returned by `KMap::to_pla_*` methods.
#[derive(Debug)]
pub enum PlaWriteError {
    /// IO error during writing
    Io(io::Error),
}

impl fmt::Display for PlaWriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaWriteError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for PlaWriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaWriteError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for PlaWriteError {
    fn from(err: io::Error) -> Self {
        PlaWriteError::Io(err)
    }
}

impl From<PlaWriteError> for io::Error {
    fn from(err: PlaWriteError) -> Self {
        match err {
            PlaWriteError::Io(e) => e,
        }
    }
}
