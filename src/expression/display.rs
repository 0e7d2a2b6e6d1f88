//! Rendering of groups and SOP expressions

use super::ast::{Literal, ProductTerm, SopExpr};
use crate::map::groups::Group;
use crate::map::Variable;
use crate::{KmapConfig, Mode};
use std::fmt;

/// Render a group as an SOP product term
///
/// Variables constant across the group become literals, complemented when their
/// shared value is 0. The whole map renders as `1`.
///
/// # Examples
///
/// ```
/// use kmap_logic::expression::group_to_sop;
/// use kmap_logic::Group;
///
/// assert_eq!(group_to_sop(Group::singleton(5)), "A'BC'D");
/// assert_eq!(group_to_sop(Group::full()), "1");
/// ```
pub fn group_to_sop(group: Group) -> String {
    let term: String = Variable::ALL
        .iter()
        .filter_map(|&var| {
            group.constant_value(var).map(|value| {
                if value {
                    var.to_string()
                } else {
                    format!("{}'", var)
                }
            })
        })
        .collect();

    if term.is_empty() {
        Mode::Sop.identity_constant().to_string()
    } else {
        term
    }
}

/// Render a group of 0s as a POS sum term
///
/// A sum term is 0 exactly on its group, so literals are complemented when the
/// shared value is 1. Single literals are not parenthesised; the whole map renders
/// as `0`.
///
/// # Examples
///
/// ```
/// use kmap_logic::expression::group_to_pos;
/// use kmap_logic::Group;
///
/// assert_eq!(group_to_pos(Group::singleton(5)), "(A + B' + C + D')");
/// let corners = Group::from_cells(&[0, 2, 8, 10]).unwrap();
/// assert_eq!(group_to_pos(corners), "(B + D)");
/// ```
pub fn group_to_pos(group: Group) -> String {
    let literals: Vec<String> = Variable::ALL
        .iter()
        .filter_map(|&var| {
            group.constant_value(var).map(|value| {
                if value {
                    format!("{}'", var)
                } else {
                    var.to_string()
                }
            })
        })
        .collect();

    match literals.as_slice() {
        [] => Mode::Pos.identity_constant().to_string(),
        [single] => single.clone(),
        _ => format!("({})", literals.join(" + ")),
    }
}

pub fn render_group(group: Group, mode: Mode) -> String {
    match mode {
        Mode::Sop => group_to_sop(group),
        Mode::Pos => group_to_pos(group),
    }
}

/// Join rendered terms into a full expression
///
/// SOP terms are joined with ` + `, POS terms with the configured separator. An
/// empty list renders as the empty constant of the mode.
pub fn join_terms<S: AsRef<str>>(terms: &[S], mode: Mode, config: &KmapConfig) -> String {
    if terms.is_empty() {
        return mode.empty_constant().to_string();
    }
    let separator = match mode {
        Mode::Sop => " + ",
        Mode::Pos => config.pos_separator.as_str(),
    };
    terms
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(separator)
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.variable())?;
        if self.is_negated() {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProductTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductTerm::Constant(value) => write!(f, "{}", if *value { "1" } else { "0" }),
            ProductTerm::Literals(literals) => {
                for literal in literals {
                    write!(f, "{}", literal)?;
                }
                Ok(())
            }
        }
    }
}

/// Display formatting for SOP expressions
///
/// Terms are printed in source order, joined with ` + `, using the same literal
/// notation the minimizer produces.
impl fmt::Display for SopExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, term) in self.terms().iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}
