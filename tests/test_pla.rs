//! Tests for reading and writing maps as PLA files

use kmap_logic::pla::{PlaError, PlaReadError, PlaReader, PlaType, PlaWriter};
use kmap_logic::{KMap, Minimizable, Mode};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("map.pla");

    let map = KMap::from_minterms(&[0, 2, 5, 7, 8, 10], &[13, 15]).unwrap();
    map.to_pla_file(&path, PlaType::FD).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with(".type fd\n.i 4\n"));
    assert!(content.trim_end().ends_with(".end"));

    let loaded = KMap::from_pla_file(&path).unwrap();
    assert_eq!(loaded, map);
    assert_eq!(loaded.minimize(Mode::Sop).expression, "B'D' + BD");
}

#[test]
fn test_minimizer_output_cubes_load() {
    // A cover written with input don't-cares, as a minimizer would emit it
    let pla = "\
.i 4
.o 1
.ilb A B C D
.ob F
.p 2
-0-0 1
-1-1 1
.e
";
    let map = KMap::from_pla_string(pla).unwrap();
    assert_eq!(map.minterms().to_vec(), vec![0, 2, 5, 7, 8, 10, 13, 15]);
    assert_eq!(map.minimize(Mode::Sop).expression, "B'D' + BD");
    assert_eq!(map.minimize(Mode::Pos).expression, "(B + D') · (B' + D)");
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = KMap::from_pla_file(dir.path().join("absent.pla")).unwrap_err();
    assert!(matches!(err, PlaReadError::Io(_)));
}

#[test]
fn test_wrong_dimensions_are_rejected() {
    let err = KMap::from_pla_string(".i 4\n.o 2\n0000 11\n").unwrap_err();
    assert!(matches!(
        err,
        PlaReadError::Pla(PlaError::UnsupportedDimensions {
            inputs: 4,
            outputs: 2
        })
    ));

    let err = KMap::from_pla_string("000 1\n").unwrap_err();
    assert!(matches!(
        err,
        PlaReadError::Pla(PlaError::UnsupportedDimensions {
            inputs: 3,
            outputs: 1
        })
    ));
}

#[test]
fn test_write_to_any_writer() {
    let map = KMap::from_maxterms(&[0], &[]).unwrap();
    let mut buffer = Vec::new();
    map.write_pla(&mut buffer, PlaType::FR).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    assert!(text.contains(".p 16\n"));
    assert!(text.contains("0000 0\n"));
    assert_eq!(KMap::from_pla_string(&text).unwrap(), map);
}
