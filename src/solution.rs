use std::fmt;

use crate::variable::Variable;

/// A solution of a solved optimization model.
///
/// Holds one value per variable, in variable order. Values of integer and
/// binary variables can carry small floating-point error, e.g. `0.999999997`
/// for a variable meant to be exactly `1`.
#[derive(Clone)]
pub struct Solution {
    pub(crate) obj_val: f64,
    pub(crate) vals: Vec<f64>,
    pub(crate) vars: Vec<Variable>,
}

impl Solution {
    /// Returns the objective value of the solution.
    pub fn obj_val(&self) -> f64 {
        self.obj_val
    }

    /// Returns the value of a variable in the solution.
    pub fn val(&self, var: &Variable) -> f64 {
        self.vals[var.index()]
    }
}

impl fmt::Debug for Solution {
    /// Formats the solution for debugging purposes, listing nonzero variables.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Solution with obj val: {}", self.obj_val)?;
        for (var, val) in self.vars.iter().zip(&self.vals) {
            if *val > 0.0 {
                writeln!(f, "Var {}={}", var.name(), val)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn solution_values() {
        let mut model = Model::new().set_obj_sense(ObjSense::Maximize);
        let x = model.add(var().name("x").binary().obj(2.));
        let y = model.add(var().name("y").binary().obj(1.));
        model.add(cons().le(1.).coef(&x, 1.).coef(&y, 1.));

        let solved = model.solve();
        let sol = solved.best_sol().unwrap();

        assert_eq!(sol.obj_val(), 2.);
        assert!(sol.val(&x) > 0.99);
        assert!(sol.val(&y) < 0.01);
    }

    #[test]
    fn debug_lists_nonzero_vars() {
        let mut model = Model::new().set_obj_sense(ObjSense::Maximize);
        let x = model.add(var().name("x").binary().obj(2.));
        let y = model.add(var().name("y").binary().obj(1.));
        model.add(cons().le(1.).coef(&x, 1.).coef(&y, 1.));

        let solved = model.solve();
        let dump = format!("{:?}", solved.best_sol().unwrap());

        assert!(dump.contains("obj val: 2"));
        assert!(dump.contains("Var x="));
        assert!(!dump.contains("Var y="));
    }
}
