use std::fmt;
use std::rc::Rc;

use crate::variable::VarId;

/// The id of a constraint in a model.
pub type ConsId = usize;

#[derive(Debug)]
pub(crate) struct ConsData {
    pub(crate) index: ConsId,
    pub(crate) name: String,
    /// Pairs of variable id and coefficient.
    pub(crate) coefs: Vec<(VarId, f64)>,
    pub(crate) lhs: f64,
    pub(crate) rhs: f64,
}

/// A handle to a linear constraint of a model.
///
/// A constraint is a row `lhs <= sum(coef_i * x_i) <= rhs`; one-sided rows use
/// an infinite bound on the free side.
#[derive(Clone)]
pub struct Constraint {
    pub(crate) data: Rc<ConsData>,
}

impl Constraint {
    /// Returns the id of the constraint in its model.
    pub fn index(&self) -> ConsId {
        self.data.index
    }

    /// Returns the name of the constraint.
    pub fn name(&self) -> &str {
        &self.data.name
    }

    /// Returns the left-hand side of the constraint.
    pub fn lhs(&self) -> f64 {
        self.data.lhs
    }

    /// Returns the right-hand side of the constraint.
    pub fn rhs(&self) -> f64 {
        self.data.rhs
    }

    /// Returns the variable id and coefficient pairs of the constraint row.
    pub fn coefs(&self) -> &[(VarId, f64)] {
        &self.data.coefs
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Constraint")
            .field("index", &self.data.index)
            .field("name", &self.data.name)
            .field("lhs", &self.data.lhs)
            .field("rhs", &self.data.rhs)
            .field("coefs", &self.data.coefs)
            .finish()
    }
}
