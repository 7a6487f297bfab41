use crate::variable::{Variable, VariableKey};

/// A rule expression over linguistic-term references.
///
/// Term references are captured as `(variable, term-name)` pairs and
/// validated when the engine is assembled, so an invalid reference is a
/// construction-time error rather than a runtime one.
#[derive(Clone, Debug)]
pub enum Expr {
    Term(VariableKey, String),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
}

impl Expr {
    pub fn and(self, rhs: Expr) -> Self {
        Expr::And(Box::new(self), Box::new(rhs))
    }

    pub fn or(self, rhs: Expr) -> Self {
        Expr::Or(Box::new(self), Box::new(rhs))
    }

    pub fn not(self) -> Self {
        Expr::Not(Box::new(self))
    }

    /// Every `(variable, term)` reference in the expression.
    pub(crate) fn term_refs(&self) -> Vec<(VariableKey, &str)> {
        fn walk<'e>(expr: &'e Expr, out: &mut Vec<(VariableKey, &'e str)>) {
            match expr {
                Expr::Term(key, term) => out.push((*key, term)),
                Expr::And(lhs, rhs) | Expr::Or(lhs, rhs) => {
                    walk(lhs, out);
                    walk(rhs, out);
                },
                Expr::Not(inner) => walk(inner, out),
            }
        }

        let mut refs = Vec::new();

        walk(self, &mut refs);

        refs
    }
}

impl Variable {
    /// Builds the proposition "this variable is `term`".
    pub fn is(self, term: impl Into<String>) -> Expr {
        Expr::Term(self.0, term.into())
    }
}
