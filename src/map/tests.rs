//! Tests for the map module

use super::*;

#[test]
fn test_variable_bits() {
    // Cell 5 = 0101
    assert!(!Variable::A.value_in(5));
    assert!(Variable::B.value_in(5));
    assert!(!Variable::C.value_in(5));
    assert!(Variable::D.value_in(5));
    assert_eq!(Variable::A.mask(), 8);
    assert_eq!(Variable::D.to_string(), "D");
}

#[test]
fn test_cell_value_cycle() {
    assert_eq!(CellValue::Zero.cycled(), CellValue::One);
    assert_eq!(CellValue::One.cycled(), CellValue::DontCare);
    assert_eq!(CellValue::DontCare.cycled(), CellValue::Zero);
    assert_eq!(CellValue::DontCare.symbol(), 'X');
}

#[test]
fn test_term_set_operations() {
    let a = TermSet::from_terms([0, 1, 2]).unwrap();
    let b = TermSet::from_terms([2, 3]).unwrap();

    assert_eq!(a.len(), 3);
    assert!(a.contains(1));
    assert!(!a.contains(3));
    assert!(!a.contains(200));
    assert_eq!(a.union(b).to_vec(), vec![0, 1, 2, 3]);
    assert_eq!(a.intersection(b).to_vec(), vec![2]);
    assert_eq!(a.difference(b).to_vec(), vec![0, 1]);
    assert_eq!(a.complement().len(), 13);
    assert!(TermSet::from_terms([1]).unwrap().is_subset(a));
    assert!(!b.is_subset(a));
    assert!(a.is_disjoint(TermSet::from_terms([9]).unwrap()));
}

#[test]
fn test_term_set_bounds() {
    assert!(TermSet::EMPTY.is_empty());
    assert!(TermSet::FULL.is_full());
    assert_eq!(TermSet::FULL.len(), KMAP_SIZE);
    assert_eq!(
        TermSet::from_terms([15, 16]),
        Err(KmapError::InvalidTerm { term: 16 })
    );
    let set = TermSet::try_from(&[4u8, 4, 0][..]).unwrap();
    assert_eq!(set.to_vec(), vec![0, 4]);
    assert_eq!(TermSet::from_bits(set.bits()), set);
}

#[test]
fn test_from_minterms() {
    let map = KMap::from_minterms(&[0, 5], &[7]).unwrap();
    assert_eq!(map.minterms().to_vec(), vec![0, 5]);
    assert_eq!(map.dont_cares().to_vec(), vec![7]);
    assert_eq!(map.maxterms().len(), 13);
    assert_eq!(map.targets(Mode::Sop), map.minterms());
    assert_eq!(map.targets(Mode::Pos), map.maxterms());
}

#[test]
fn test_from_maxterms() {
    let map = KMap::from_maxterms(&[3, 12], &[0]).unwrap();
    assert_eq!(map.maxterms().to_vec(), vec![3, 12]);
    assert_eq!(map.dont_cares().to_vec(), vec![0]);
    assert_eq!(map.minterms().len(), 13);
}

#[test]
fn test_overlapping_lists_are_rejected() {
    assert_eq!(
        KMap::from_minterms(&[1, 2, 3], &[3]),
        Err(KmapError::OverlappingTerms { term: 3 })
    );
    assert_eq!(
        KMap::from_maxterms(&[20], &[]),
        Err(KmapError::InvalidTerm { term: 20 })
    );
}

#[test]
fn test_set_get_cycle_clear() {
    let mut map = KMap::new();
    assert_eq!(map.get(16), None);
    map.set(4, CellValue::DontCare).unwrap();
    assert_eq!(map.get(4), Some(CellValue::DontCare));
    assert_eq!(map.cycle(4).unwrap(), CellValue::Zero);
    assert_eq!(map.cycle(4).unwrap(), CellValue::One);
    assert!(map.set(16, CellValue::One).is_err());
    assert!(map.cycle(16).is_err());

    map.clear();
    assert_eq!(map, KMap::new());
}

#[test]
fn test_parse_term_list() {
    assert_eq!(parse_term_list(" 1,3 , 15 ").unwrap(), vec![1, 3, 15]);
    assert_eq!(parse_term_list("2,,4,").unwrap(), vec![2, 4]);
    assert_eq!(parse_term_list("   ").unwrap(), Vec::<u8>::new());
    assert_eq!(
        parse_term_list("1, 16"),
        Err(KmapError::InvalidTerm { term: 16 })
    );
    assert_eq!(
        parse_term_list("1, 300"),
        Err(KmapError::InvalidTerm { term: 300 })
    );
    assert!(matches!(
        parse_term_list("1, -2"),
        Err(KmapError::MalformedTerm { .. })
    ));
    assert!(matches!(
        parse_term_list("a"),
        Err(KmapError::MalformedTerm { .. })
    ));
}

#[test]
fn test_truth_table_rendering() {
    let map = KMap::from_minterms(&[1], &[15]).unwrap();
    let table = map.truth_table().to_string();
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 17);
    assert_eq!(lines[0], " A B C D |  # | F");
    assert_eq!(lines[1], " 0 0 0 0 |  0 | 0");
    assert_eq!(lines[2], " 0 0 0 1 |  1 | 1");
    assert_eq!(lines[16], " 1 1 1 1 | 15 | X");
}

#[test]
fn test_grid_rendering() {
    // Cell 2 = AB 00, CD 10 sits in the last column; cell 12 = AB 11, CD 00
    let map = KMap::from_minterms(&[2, 12], &[]).unwrap();
    let grid = map.grid().to_string();
    let lines: Vec<&str> = grid.lines().collect();

    assert_eq!(lines[0], "AB\\CD  00 01 11 10");
    assert_eq!(lines[1], "   00  0  0  0  1");
    assert_eq!(lines[2], "   01  0  0  0  0");
    assert_eq!(lines[3], "   11  1  0  0  0");
    assert_eq!(lines[4], "   10  0  0  0  0");
}
