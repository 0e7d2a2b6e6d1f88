//! Flat SOP expressions: rendering, parsing and verification
//!
//! This module covers both directions between groups and text:
//!
//! - [`render_group`] turns a K-map group into an SOP product term (`A'BD`) or a POS
//!   sum term (`(A + B' + D)`), and [`join_terms`] assembles a whole expression.
//! - [`SopExpr`] is a parsed sum of products over `A`–`D`. It is evaluated on all
//!   16 cells and compared against a [`KMap`](crate::KMap) by [`verify`].
//!
//! # Syntax
//!
//! A product term is a run of literals; `'` after a variable complements it. Terms
//! are separated by `+`. Whitespace is ignored, variables are case-insensitive, and
//! `0` / `1` are accepted as constant terms.
//!
//! ```
//! use kmap_logic::SopExpr;
//!
//! # fn main() -> Result<(), kmap_logic::expression::ExpressionParseError> {
//! let expr = SopExpr::parse("a'b + C D'")?;
//! assert_eq!(expr.to_string(), "A'B + CD'");
//!
//! // Cell 4 = 0100: A=0, B=1
//! assert!(expr.evaluate(4));
//! assert!(!expr.evaluate(0));
//! # Ok(())
//! # }
//! ```

// Submodules
mod ast;
mod display;
pub mod error;
mod eval;
mod parser;

pub use ast::{Literal, ProductTerm, SopExpr};
pub use display::{group_to_pos, group_to_sop, join_terms, render_group};
pub use error::ExpressionParseError;
pub use eval::{verify, Verification};

#[cfg(test)]
mod tests;
