//! Tests for SOP parsing, rendering and verification

use super::*;
use crate::map::groups::Group;
use crate::map::{KMap, Variable};
use crate::{KmapConfig, Mode, PosSeparator};

#[test]
fn test_parse_simple_terms() {
    let expr = SopExpr::parse("AB' + C").unwrap();
    assert_eq!(
        expr.terms(),
        &[
            ProductTerm::Literals(vec![
                Literal::positive(Variable::A),
                Literal::negative(Variable::B),
            ]),
            ProductTerm::Literals(vec![Literal::positive(Variable::C)]),
        ]
    );
}

#[test]
fn test_parse_is_case_and_whitespace_insensitive() {
    let a = SopExpr::parse("a'b+cd'").unwrap();
    let b = SopExpr::parse("  A' B  +  C D' ").unwrap();
    assert_eq!(a, b);
    assert_eq!(a.to_string(), "A'B + CD'");
}

#[test]
fn test_parse_constants() {
    assert_eq!(SopExpr::parse("0").unwrap().ones(), crate::TermSet::EMPTY);
    assert!(SopExpr::parse("1").unwrap().ones().is_full());
    assert_eq!(SopExpr::parse("0 + A").unwrap().ones().len(), 8);
}

#[test]
fn test_parse_via_from_str() {
    let expr: SopExpr = "BD".parse().unwrap();
    assert_eq!(expr.ones().to_vec(), vec![5, 7, 13, 15]);
}

#[test]
fn test_parse_errors() {
    assert_eq!(SopExpr::parse("   "), Err(ExpressionParseError::Empty));

    match SopExpr::parse("A + E") {
        Err(ExpressionParseError::InvalidSyntax { position, .. }) => {
            assert_eq!(position, Some(4));
        }
        other => panic!("expected syntax error, got {:?}", other),
    }

    assert!(matches!(
        SopExpr::parse("AB +"),
        Err(ExpressionParseError::InvalidSyntax { .. })
    ));
    assert!(matches!(
        SopExpr::parse("+ A"),
        Err(ExpressionParseError::InvalidSyntax { .. })
    ));
    assert!(matches!(
        SopExpr::parse("A''"),
        Err(ExpressionParseError::InvalidSyntax { .. })
    ));
}

#[test]
fn test_contradictory_term_is_never_true() {
    let expr = SopExpr::parse("AA'").unwrap();
    assert!(expr.ones().is_empty());
}

#[test]
fn test_literal_evaluation() {
    // Cell 9 = 1001
    assert!(Literal::positive(Variable::A).evaluate(9));
    assert!(Literal::negative(Variable::B).evaluate(9));
    assert!(!Literal::positive(Variable::C).evaluate(9));
    assert_eq!(Literal::negative(Variable::C).to_string(), "C'");
}

#[test]
fn test_group_rendering_sop() {
    assert_eq!(group_to_sop(Group::singleton(0)), "A'B'C'D'");
    assert_eq!(group_to_sop(Group::singleton(15)), "ABCD");
    let left_half = Group::from_cells(&[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
    assert_eq!(group_to_sop(left_half), "A'");
    let pair = Group::from_cells(&[5, 7]).unwrap();
    assert_eq!(group_to_sop(pair), "A'BD");
}

#[test]
fn test_group_rendering_pos() {
    let left_half = Group::from_cells(&[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
    assert_eq!(group_to_pos(left_half), "A");
    let odd = Group::from_cells(&[1, 3, 5, 7, 9, 11, 13, 15]).unwrap();
    assert_eq!(group_to_pos(odd), "D'");
    assert_eq!(group_to_pos(Group::full()), "0");
    assert_eq!(render_group(Group::full(), Mode::Sop), "1");
}

#[test]
fn test_literal_count_law() {
    for size in crate::GroupSize::DESCENDING {
        for &group in crate::potential_groups(size) {
            let sop = group_to_sop(group);
            let pos = group_to_pos(group);
            let sop_literals = sop.chars().filter(|c| c.is_ascii_uppercase()).count();
            let pos_literals = pos.chars().filter(|c| c.is_ascii_uppercase()).count();
            assert_eq!(sop_literals, size.literal_count(), "{}", sop);
            assert_eq!(pos_literals, size.literal_count(), "{}", pos);
        }
    }
}

#[test]
fn test_rendered_sop_term_describes_its_group() {
    for size in crate::GroupSize::DESCENDING {
        for &group in crate::potential_groups(size) {
            let expr = SopExpr::parse(&group_to_sop(group)).unwrap();
            assert_eq!(expr.ones(), group.term_set());
        }
    }
}

#[test]
fn test_join_terms() {
    let config = KmapConfig::default();
    assert_eq!(join_terms(&["AB", "C'"], Mode::Sop, &config), "AB + C'");
    assert_eq!(join_terms(&["(A + B)", "C'"], Mode::Pos, &config), "(A + B) · C'");
    assert_eq!(join_terms::<&str>(&[], Mode::Sop, &config), "0");
    assert_eq!(join_terms::<&str>(&[], Mode::Pos, &config), "1");

    let star = KmapConfig {
        pos_separator: PosSeparator::Asterisk,
        ..KmapConfig::default()
    };
    assert_eq!(join_terms(&["A", "B"], Mode::Pos, &star), "A * B");
}

#[test]
fn test_verify_reports_mismatches() {
    let map = KMap::from_minterms(&[0, 1, 2, 3], &[4]).unwrap();

    let exact = verify(&SopExpr::parse("A'B'").unwrap(), &map);
    assert!(exact.matches());
    assert_eq!(exact.minterms, vec![0, 1, 2, 3]);
    assert_eq!(exact.maxterms.len(), 12);

    // Covering the don't-care is fine
    let with_dont_care = verify(&SopExpr::parse("A'C'D' + A'B'").unwrap(), &map);
    assert!(with_dont_care.matches());

    let wrong = verify(&SopExpr::parse("A'B'C' + ABCD").unwrap(), &map);
    assert!(!wrong.matches());
    assert_eq!(wrong.missing_ones, vec![2, 3]);
    assert_eq!(wrong.extra_ones, vec![15]);
}

#[test]
fn test_from_expression_preserves_dont_cares() {
    let original = KMap::from_minterms(&[0], &[3, 9]).unwrap();
    let expr = SopExpr::parse("D").unwrap();
    let loaded = KMap::from_expression(&expr, original.dont_cares());

    assert_eq!(loaded.dont_cares(), original.dont_cares());
    assert_eq!(loaded.minterms().to_vec(), vec![1, 5, 7, 11, 13, 15]);
    assert!(verify(&expr, &loaded).matches());
}
