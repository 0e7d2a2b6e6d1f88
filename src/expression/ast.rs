//! AST for flat sum-of-products expressions

use crate::map::{TermSet, Variable, KMAP_SIZE};

/// A possibly complemented variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Literal {
    variable: Variable,
    negated: bool,
}

impl Literal {
    pub fn positive(variable: Variable) -> Self {
        Literal {
            variable,
            negated: false,
        }
    }

    pub fn negative(variable: Variable) -> Self {
        Literal {
            variable,
            negated: true,
        }
    }

    pub fn variable(&self) -> Variable {
        self.variable
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Value of the literal on the given cell
    pub fn evaluate(&self, cell: u8) -> bool {
        self.variable.value_in(cell) != self.negated
    }
}

/// One term of a sum of products
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProductTerm {
    /// `0` or `1`
    Constant(bool),
    /// Conjunction of literals, in source order
    Literals(Vec<Literal>),
}

impl ProductTerm {
    pub fn evaluate(&self, cell: u8) -> bool {
        match self {
            ProductTerm::Constant(value) => *value,
            ProductTerm::Literals(literals) => literals.iter().all(|lit| lit.evaluate(cell)),
        }
    }
}

/// A sum of product terms over the variables `A`–`D`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SopExpr {
    terms: Vec<ProductTerm>,
}

impl SopExpr {
    pub fn new(terms: Vec<ProductTerm>) -> Self {
        SopExpr { terms }
    }

    pub fn terms(&self) -> &[ProductTerm] {
        &self.terms
    }

    /// Value of the expression on the given cell
    pub fn evaluate(&self, cell: u8) -> bool {
        self.terms.iter().any(|term| term.evaluate(cell))
    }

    /// Cells on which the expression is 1
    pub fn ones(&self) -> TermSet {
        let mut ones = TermSet::EMPTY;
        for cell in (0..KMAP_SIZE as u8).filter(|&cell| self.evaluate(cell)) {
            ones.insert(cell);
        }
        ones
    }
}
