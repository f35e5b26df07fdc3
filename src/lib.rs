//! # knapsack-mip
//!
//! Solves the 0/1 knapsack problem by formulating it as a mixed-integer
//! program and delegating the combinatorial search to an exact MILP solver
//! ([`microlp`]). The crate has two layers: a small solver-agnostic modeling
//! API (variables with bounds and integrality, linear constraints, an
//! objective sense) and the knapsack formulation built on top of it.
//!
//! Solving an instance:
//!
//! ```rust
//! use knapsack_mip::{Item, Knapsack};
//!
//! let knapsack = Knapsack::new(
//!     10.0,
//!     vec![
//!         Item::new(5.0, 10.0),
//!         Item::new(4.0, 40.0),
//!         Item::new(6.0, 30.0),
//!         Item::new(3.0, 50.0),
//!     ],
//! )?;
//!
//! let solution = knapsack.solve()?;
//! assert_eq!(solution.total_value(), 90.0);
//! assert_eq!(solution.total_weight(), 7.0);
//! # Ok::<(), knapsack_mip::KnapsackError>(())
//! ```
//!
//! Building a model directly:
//!
//! ```rust
//! use knapsack_mip::prelude::*;
//!
//! let mut model = Model::new().set_obj_sense(ObjSense::Maximize);
//! let x = model.add(var().name("x").obj(3.0).integer(0, 10));
//! let y = model.add(var().name("y").obj(4.0).integer(0, 10));
//! model.add(cons().le(10.0).coef(&x, 2.0).coef(&y, 1.0));
//! model.add(cons().le(8.0).coef(&x, 1.0).coef(&y, 2.0));
//!
//! let solved = model.solve();
//! assert_eq!(solved.status(), Status::Optimal);
//! assert!((solved.obj_val() - 20.0).abs() < 1e-6);
//! ```

/// This module contains builders for variables and constraints.
pub mod builder;
mod constraint;
mod knapsack;
mod model;
mod solution;
mod solver;
mod status;
mod variable;

pub use builder::{CanBeAddedToModel, cons, var};
pub use constraint::{ConsId, Constraint};
pub use knapsack::{Item, Knapsack, KnapsackError, KnapsackSolution, SELECTION_TOLERANCE};
pub use model::{Model, ModelWithProblem, ObjSense, ProblemCreated, Solved};
pub use solution::Solution;
pub use status::Status;
pub use variable::{VarId, VarType, Variable};

/// Re-exports of the commonly used symbols of the crate.
pub mod prelude {
    pub use crate::builder::{CanBeAddedToModel, cons, var};
    pub use crate::constraint::{ConsId, Constraint};
    pub use crate::knapsack::{Item, Knapsack, KnapsackError, KnapsackSolution};
    pub use crate::model::{Model, ModelWithProblem, ObjSense};
    pub use crate::solution::Solution;
    pub use crate::status::Status;
    pub use crate::variable::{VarId, VarType, Variable};
}
