//! Parsing support for SOP expressions

use super::ast::SopExpr;
use super::error::ExpressionParseError;
use lalrpop_util::ParseError;
use std::str::FromStr;
use std::sync::Arc;

// Lalrpop-generated parser module (generated in OUT_DIR at build time)
#[allow(clippy::all)]
mod parser_impl {
    #![allow(clippy::all)]
    #![allow(dead_code)]
    #![allow(unused_variables)]
    #![allow(unused_imports)]
    #![allow(non_snake_case)]
    #![allow(non_camel_case_types)]
    #![allow(non_upper_case_globals)]
    include!(concat!(env!("OUT_DIR"), "/expression/sop.rs"));
}

impl SopExpr {
    /// Parse a flat sum of products such as `A'B + CD'`
    ///
    /// Supports:
    /// - Variables `A`–`D` (either case), complemented with a trailing `'`
    /// - Implicit AND between adjacent literals
    /// - `+` for OR between product terms
    /// - Constant terms `0` and `1`
    ///
    /// Blank input is rejected with [`ExpressionParseError::Empty`].
    pub fn parse(input: &str) -> Result<Self, ExpressionParseError> {
        if input.trim().is_empty() {
            return Err(ExpressionParseError::Empty);
        }
        parser_impl::SopParser::new().parse(input).map_err(|e| {
            let position = error_position(&e);
            ExpressionParseError::InvalidSyntax {
                message: Arc::from(e.to_string().as_str()),
                input: Arc::from(input),
                position,
            }
        })
    }
}

impl FromStr for SopExpr {
    type Err = ExpressionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SopExpr::parse(s)
    }
}

/// Byte offset at which the parser gave up
fn error_position<T, E>(err: &ParseError<usize, T, E>) -> Option<usize> {
    match err {
        ParseError::InvalidToken { location } => Some(*location),
        ParseError::UnrecognizedEof { location, .. } => Some(*location),
        ParseError::UnrecognizedToken {
            token: (start, _, _),
            ..
        } => Some(*start),
        ParseError::ExtraToken {
            token: (start, _, _),
        } => Some(*start),
        ParseError::User { .. } => None,
    }
}
