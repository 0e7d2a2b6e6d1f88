//! PLA (Programmable Logic Array) format support
//!
//! A [`KMap`] is stored as a 4-input, 1-output PLA. Reading accepts any cube
//! notation (`0`, `1` and `-` in the input part), so a file written by a logic
//! minimizer loads the same as one listing every cell. Writing always emits one
//! fully specified cube per listed cell.

pub mod error;

pub use error::{PlaError, PlaReadError, PlaWriteError};

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use crate::map::{CellValue, KMap, TermSet, Variable, KMAP_SIZE};
use log::debug;

const NUM_INPUTS: usize = 4;
const NUM_OUTPUTS: usize = 1;

/// Which sets a PLA file lists explicitly
///
/// - `F`: ON-set only; every other cell is 0
/// - `FD`: ON-set and don't-care set; every other cell is 0
/// - `FR`: ON-set and OFF-set; unlisted cells are don't-cares
/// - `FDR`: all three sets; unlisted cells are don't-cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaType {
    F,
    #[default]
    FD,
    FR,
    FDR,
}

impl PlaType {
    pub fn has_d(self) -> bool {
        matches!(self, PlaType::FD | PlaType::FDR)
    }

    pub fn has_r(self) -> bool {
        matches!(self, PlaType::FR | PlaType::FDR)
    }

    fn directive(self) -> Option<&'static str> {
        match self {
            PlaType::F => None,
            PlaType::FD => Some("fd"),
            PlaType::FR => Some("fr"),
            PlaType::FDR => Some("fdr"),
        }
    }
}

/// Trait for types that support PLA serialization (writing)
pub trait PlaWriter {
    /// Write this map to PLA format using a writer
    ///
    /// This is the core serialization method that writes directly to any `Write`
    /// implementation. Both `to_pla_string` and `to_pla_file` delegate to it.
    fn write_pla<W: Write>(&self, writer: &mut W, pla_type: PlaType) -> Result<(), PlaWriteError>;

    /// Convert this map to a PLA format string
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::pla::{PlaType, PlaWriter};
    /// use kmap_logic::KMap;
    ///
    /// let map = KMap::from_minterms(&[5], &[]).unwrap();
    /// let text = map.to_pla_string(PlaType::F).unwrap();
    /// assert_eq!(text, ".i 4\n.ilb A B C D\n.o 1\n.ob F\n.p 1\n0101 1\n.e\n");
    /// ```
    fn to_pla_string(&self, pla_type: PlaType) -> Result<String, PlaWriteError> {
        let mut buffer = Vec::new();
        self.write_pla(&mut buffer, pla_type)?;
        String::from_utf8(buffer)
            .map_err(|e| PlaWriteError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
    }

    /// Write this map to a PLA file
    fn to_pla_file<P: AsRef<Path>>(&self, path: P, pla_type: PlaType) -> Result<(), PlaWriteError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_pla(&mut writer, pla_type)?;
        writer.flush()?;
        Ok(())
    }
}

/// Trait for types that support PLA deserialization (reading/parsing)
///
/// The convenience methods delegate to the core `from_pla_reader` method.
pub trait PlaReader: Sized {
    /// Parse a map from a PLA format reader
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PlaReadError>;

    /// Parse a map from a PLA format string
    ///
    /// # Examples
    ///
    /// ```
    /// use kmap_logic::pla::PlaReader;
    /// use kmap_logic::{CellValue, KMap};
    ///
    /// let pla = ".i 4\n.o 1\n.type fd\n.p 2\n11-- 1\n0000 -\n.e\n";
    /// let map = KMap::from_pla_string(pla).unwrap();
    /// assert_eq!(map.minterms().to_vec(), vec![12, 13, 14, 15]);
    /// assert_eq!(map.get(0), Some(CellValue::DontCare));
    /// ```
    fn from_pla_string(s: &str) -> Result<Self, PlaReadError> {
        Self::from_pla_reader(io::Cursor::new(s.as_bytes()))
    }

    /// Load a map from a PLA format file
    ///
    /// ```no_run
    /// use kmap_logic::pla::PlaReader;
    /// use kmap_logic::KMap;
    ///
    /// let map = KMap::from_pla_file("input.pla").unwrap();
    /// println!("{}", map.grid());
    /// ```
    fn from_pla_file<P: AsRef<Path>>(path: P) -> Result<Self, PlaReadError> {
        let file = File::open(path)?;
        Self::from_pla_reader(BufReader::new(file))
    }
}

impl PlaWriter for KMap {
    fn write_pla<W: Write>(&self, writer: &mut W, pla_type: PlaType) -> Result<(), PlaWriteError> {
        if let Some(directive) = pla_type.directive() {
            writeln!(writer, ".type {}", directive)?;
        }

        writeln!(writer, ".i {}", NUM_INPUTS)?;
        write!(writer, ".ilb")?;
        for variable in Variable::ALL {
            write!(writer, " {}", variable)?;
        }
        writeln!(writer)?;
        writeln!(writer, ".o {}", NUM_OUTPUTS)?;
        writeln!(writer, ".ob F")?;

        let rows: Vec<(u8, char)> = (0u8..)
            .zip(self.values().iter())
            .filter_map(|(cell, value)| match value {
                CellValue::One => Some((cell, '1')),
                CellValue::DontCare if pla_type.has_d() => Some((cell, '-')),
                CellValue::Zero if pla_type.has_r() => Some((cell, '0')),
                _ => None,
            })
            .collect();

        writeln!(writer, ".p {}", rows.len())?;
        for (cell, output) in rows {
            for variable in Variable::ALL {
                let bit = if variable.value_in(cell) { '1' } else { '0' };
                write!(writer, "{}", bit)?;
            }
            writeln!(writer, " {}", output)?;
        }

        match pla_type {
            PlaType::F => writeln!(writer, ".e")?,
            _ => writeln!(writer, ".end")?,
        }
        Ok(())
    }
}

impl PlaReader for KMap {
    fn from_pla_reader<R: BufRead>(reader: R) -> Result<Self, PlaReadError> {
        let mut num_inputs: Option<usize> = None;
        let mut num_outputs: Option<usize> = None;
        let mut pla_type = PlaType::default();
        let mut on = TermSet::EMPTY;
        let mut off = TermSet::EMPTY;
        let mut dc = TermSet::EMPTY;
        let mut cube_count = 0usize;

        for line in reader.lines() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('.') {
                let parts: Vec<&str> = line.split_whitespace().collect();
                let value = parts.get(1).copied().unwrap_or("");

                match parts.first().copied() {
                    Some(".i") => {
                        let n: usize = value.parse().map_err(|_| {
                            PlaError::InvalidInputDirective {
                                value: Arc::from(value),
                            }
                        })?;
                        num_inputs = Some(n);
                    }
                    Some(".o") => {
                        let n: usize = value.parse().map_err(|_| {
                            PlaError::InvalidOutputDirective {
                                value: Arc::from(value),
                            }
                        })?;
                        num_outputs = Some(n);
                    }
                    Some(".type") => {
                        pla_type = match value {
                            "f" => PlaType::F,
                            "fd" => PlaType::FD,
                            "fr" => PlaType::FR,
                            "fdr" => PlaType::FDR,
                            _ => {
                                return Err(PlaError::InvalidType {
                                    value: Arc::from(value),
                                }
                                .into())
                            }
                        };
                    }
                    Some(".ilb") => check_labels("input", parts.len() - 1, NUM_INPUTS)?,
                    Some(".ob") => check_labels("output", parts.len() - 1, NUM_OUTPUTS)?,
                    Some(".e") | Some(".end") => break,
                    _ => {}
                }
                continue;
            }

            // Cube line: inputs and outputs separated by whitespace or '|'
            let cleaned = line.replace('|', " ");
            let parts: Vec<&str> = cleaned.split_whitespace().collect();
            let (input_str, output_str) = match parts.as_slice() {
                [input, output] => (*input, *output),
                [joined] if joined.len() == NUM_INPUTS + NUM_OUTPUTS => joined.split_at(NUM_INPUTS),
                _ => {
                    return Err(PlaError::CubeDimensionMismatch {
                        expected_inputs: num_inputs.unwrap_or(NUM_INPUTS),
                        actual_inputs: parts.first().map_or(0, |p| p.len()),
                        expected_outputs: num_outputs.unwrap_or(NUM_OUTPUTS),
                        actual_outputs: parts.iter().skip(1).map(|p| p.len()).sum(),
                    }
                    .into())
                }
            };

            // Infer dimensions from the first cube if not declared
            let ni = *num_inputs.get_or_insert(input_str.len());
            let no = *num_outputs.get_or_insert(output_str.len());
            if ni != NUM_INPUTS || no != NUM_OUTPUTS {
                return Err(PlaError::UnsupportedDimensions {
                    inputs: ni,
                    outputs: no,
                }
                .into());
            }
            if input_str.len() != ni || output_str.len() != no {
                return Err(PlaError::CubeDimensionMismatch {
                    expected_inputs: ni,
                    actual_inputs: input_str.len(),
                    expected_outputs: no,
                    actual_outputs: output_str.len(),
                }
                .into());
            }

            let cells = parse_input_cube(input_str)?;
            cube_count += 1;

            for (position, ch) in output_str.chars().enumerate() {
                match ch {
                    '1' | '4' => on = on.union(cells),
                    '0' | '3' if pla_type.has_r() => off = off.union(cells),
                    '-' | '2' if pla_type.has_d() => dc = dc.union(cells),
                    // Not part of the declared type
                    '0' | '3' | '-' | '2' | '~' => {}
                    _ => {
                        return Err(PlaError::InvalidOutputCharacter {
                            character: ch,
                            position,
                        }
                        .into())
                    }
                }
            }
        }

        if let (Some(ni), Some(no)) = (num_inputs, num_outputs) {
            if ni != NUM_INPUTS || no != NUM_OUTPUTS {
                return Err(PlaError::UnsupportedDimensions {
                    inputs: ni,
                    outputs: no,
                }
                .into());
            }
        }

        if let Some(cell) = off.intersection(on.union(dc)).iter().next() {
            return Err(PlaError::ConflictingCell { cell }.into());
        }

        // Cells outside every listed set
        let rest = if pla_type.has_r() {
            CellValue::DontCare
        } else {
            CellValue::Zero
        };

        let mut values = [rest; KMAP_SIZE];
        for (cell, value) in (0u8..).zip(values.iter_mut()) {
            if dc.contains(cell) {
                *value = CellValue::DontCare;
            } else if on.contains(cell) {
                *value = CellValue::One;
            } else if off.contains(cell) {
                *value = CellValue::Zero;
            }
        }

        debug!(
            "read {} cubes from {:?} PLA: {} ones, {} don't-cares",
            cube_count,
            pla_type,
            on.difference(dc).len(),
            dc.len()
        );
        Ok(KMap::from_values(values))
    }
}

fn check_labels(label_type: &str, actual: usize, expected: usize) -> Result<(), PlaError> {
    if actual == expected {
        Ok(())
    } else {
        Err(PlaError::LabelCountMismatch {
            label_type: Arc::from(label_type),
            expected,
            actual,
        })
    }
}

/// Cells matched by the input part of a cube
fn parse_input_cube(input: &str) -> Result<TermSet, PlaError> {
    let mut matching = TermSet::FULL;
    for (position, (ch, variable)) in input.chars().zip(Variable::ALL).enumerate() {
        let required = match ch {
            '0' => Some(false),
            '1' => Some(true),
            '-' | '~' | 'x' | 'X' => None,
            _ => {
                return Err(PlaError::InvalidInputCharacter {
                    character: ch,
                    position,
                })
            }
        };
        if let Some(required) = required {
            let cells = TermSet::FULL
                .iter()
                .filter(|&cell| variable.value_in(cell) == required);
            let mut literal = TermSet::EMPTY;
            for cell in cells {
                literal.insert(cell);
            }
            matching = matching.intersection(literal);
        }
    }
    Ok(matching)
}
