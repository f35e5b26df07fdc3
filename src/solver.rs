//! Lowering of the accumulated problem onto the `microlp` backend.

use log::warn;
use microlp::{ComparisonOp, OptimizationDirection, Problem};

use crate::model::{ObjSense, Prob};
use crate::solution::Solution;
use crate::status::Status;
use crate::variable::VarType;

/// Solves the given problem with a single backend invocation.
///
/// The backend problem is built fresh from the accumulated data, solved to an
/// exact integer-feasible optimum, and dropped before returning; no state is
/// shared between invocations.
pub(crate) fn solve(prob: &Prob) -> (Status, Option<Solution>) {
    let direction = match prob.sense {
        ObjSense::Minimize => OptimizationDirection::Minimize,
        ObjSense::Maximize => OptimizationDirection::Maximize,
    };
    let mut backend = Problem::new(direction);

    let mut backend_vars = Vec::with_capacity(prob.vars.len());
    for var in &prob.vars {
        let backend_var = match var.var_type() {
            VarType::Continuous => backend.add_var(var.obj(), (var.lb(), var.ub())),
            VarType::Integer => {
                backend.add_integer_var(var.obj(), (int_bound(var.lb()), int_bound(var.ub())))
            }
            VarType::Binary => backend.add_binary_var(var.obj()),
        };
        backend_vars.push(backend_var);
    }

    for cons in &prob.conss {
        let row: Vec<(microlp::Variable, f64)> = cons
            .coefs()
            .iter()
            .map(|&(var_id, coef)| (backend_vars[var_id], coef))
            .collect();

        // A two-sided row maps onto one backend constraint per finite side.
        if cons.lhs() == cons.rhs() {
            backend.add_constraint(row.iter().copied(), ComparisonOp::Eq, cons.rhs());
            continue;
        }
        if cons.rhs().is_finite() {
            backend.add_constraint(row.iter().copied(), ComparisonOp::Le, cons.rhs());
        }
        if cons.lhs().is_finite() {
            backend.add_constraint(row.iter().copied(), ComparisonOp::Ge, cons.lhs());
        }
    }

    match backend.solve() {
        Ok(sol) => {
            let vals = backend_vars.iter().map(|&var| sol[var]).collect();
            let solution = Solution {
                obj_val: sol.objective(),
                vals,
                vars: prob.vars.clone(),
            };
            (Status::Optimal, Some(solution))
        }
        Err(err) => {
            if let microlp::Error::InternalError(msg) = &err {
                warn!("solver failed with an internal error: {msg}");
            }
            (Status::from(&err), None)
        }
    }
}

/// Integer variable bounds are `i32` on the backend; infinite bounds saturate.
fn int_bound(bound: f64) -> i32 {
    bound as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_bound_saturates() {
        assert_eq!(int_bound(f64::NEG_INFINITY), i32::MIN);
        assert_eq!(int_bound(f64::INFINITY), i32::MAX);
        assert_eq!(int_bound(7.), 7);
    }

    #[test]
    fn binary_vars_stay_integral() {
        // A fractional LP optimum must not leak through the integrality flag:
        // relaxing x, y in [0, 1] with x + y <= 1.5 would select both halves.
        use crate::prelude::*;

        let mut model = Model::default().set_obj_sense(ObjSense::Maximize);
        let x = model.add(var().name("x").binary().obj(1.));
        let y = model.add(var().name("y").binary().obj(1.));
        model.add(cons().le(1.5).coef(&x, 1.).coef(&y, 1.));

        let solved = model.solve();
        assert_eq!(solved.status(), Status::Optimal);
        assert_eq!(solved.obj_val().round(), 1.);
    }
}
