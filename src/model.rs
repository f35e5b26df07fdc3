use std::rc::Rc;

use log::debug;

use crate::builder::CanBeAddedToModel;
use crate::constraint::{ConsData, Constraint};
use crate::solution::Solution;
use crate::solver;
use crate::status::Status;
use crate::variable::{VarData, VarId, VarType, Variable};

/// Represents an optimization model.
#[derive(Debug)]
pub struct Model<State> {
    pub(crate) prob: Prob,
    state: State,
}

/// The problem data accumulated while building a model.
#[derive(Debug)]
pub(crate) struct Prob {
    pub(crate) name: String,
    pub(crate) sense: ObjSense,
    pub(crate) vars: Vec<Variable>,
    pub(crate) conss: Vec<Constraint>,
}

/// Represents the state of an optimization model whose problem is being built.
#[derive(Debug, Clone)]
pub struct ProblemCreated;

/// Represents the state of an optimization model that has been solved.
#[derive(Debug)]
pub struct Solved {
    pub(crate) status: Status,
    pub(crate) best_sol: Option<Solution>,
}

impl Model<ProblemCreated> {
    /// Creates a new model with an empty problem named "problem".
    pub fn new() -> Self {
        Self::with_name("problem")
    }

    /// Creates a new model with an empty problem with the given name.
    pub fn with_name(name: &str) -> Self {
        Model {
            prob: Prob {
                name: name.to_string(),
                sense: ObjSense::Minimize,
                vars: Vec::new(),
                conss: Vec::new(),
            },
            state: ProblemCreated {},
        }
    }

    /// Sets the objective sense of the model and returns the same `Model` instance.
    pub fn set_obj_sense(mut self, sense: ObjSense) -> Self {
        self.prob.sense = sense;
        self
    }

    /// Adds a new variable to the model with the given lower bound, upper bound,
    /// objective coefficient, name, and type.
    ///
    /// Returns a handle to the new variable.
    pub fn add_var(
        &mut self,
        lb: f64,
        ub: f64,
        obj: f64,
        name: &str,
        var_type: VarType,
    ) -> Variable {
        let var = Variable {
            data: Rc::new(VarData {
                index: self.prob.vars.len(),
                name: name.to_string(),
                obj,
                lb,
                ub,
                var_type,
            }),
        };
        self.prob.vars.push(var.clone());
        var
    }

    /// Adds a new constraint `lhs <= coefs * vars <= rhs` to the model.
    ///
    /// # Panics
    ///
    /// This method panics if `vars` and `coefs` have different lengths.
    pub fn add_cons(
        &mut self,
        vars: Vec<Variable>,
        coefs: &[f64],
        lhs: f64,
        rhs: f64,
        name: &str,
    ) -> Constraint {
        assert_eq!(vars.len(), coefs.len());
        let cons = Constraint {
            data: Rc::new(ConsData {
                index: self.prob.conss.len(),
                name: name.to_string(),
                coefs: vars
                    .iter()
                    .map(|var| var.index())
                    .zip(coefs.iter().copied())
                    .collect(),
                lhs,
                rhs,
            }),
        };
        self.prob.conss.push(cons.clone());
        cons
    }

    /// Adds an element built with [`var`](crate::var) or [`cons`](crate::cons)
    /// to the model, or a collection of them.
    pub fn add<T: CanBeAddedToModel>(&mut self, element: T) -> T::Return {
        element.add(self)
    }

    /// Solves the model and returns a new `Model` instance in the `Solved` state.
    ///
    /// The solver is invoked exactly once; failures are reported through
    /// [`Model::status`] rather than panics. All solver resources are released
    /// when this call returns.
    pub fn solve(self) -> Model<Solved> {
        debug!(
            "solving problem {} with {} variables and {} constraints",
            self.prob.name,
            self.prob.vars.len(),
            self.prob.conss.len()
        );
        let (status, best_sol) = solver::solve(&self.prob);
        debug!("solver finished with status {status:?}");
        Model {
            prob: self.prob,
            state: Solved { status, best_sol },
        }
    }
}

impl Default for Model<ProblemCreated> {
    /// Creates a new model with an empty problem named "problem".
    fn default() -> Self {
        Model::new()
    }
}

impl Model<Solved> {
    /// Returns the status of the optimization run.
    pub fn status(&self) -> Status {
        self.state.status
    }

    /// Returns the best solution found, if any.
    ///
    /// A solution exists if and only if the status is [`Status::Optimal`].
    pub fn best_sol(&self) -> Option<&Solution> {
        self.state.best_sol.as_ref()
    }

    /// Returns the objective value of the best solution.
    ///
    /// # Panics
    ///
    /// This method panics if no solution is available.
    pub fn obj_val(&self) -> f64 {
        self.best_sol().expect("no solution available").obj_val()
    }
}

/// A trait for models holding a problem, in any state.
pub trait ModelWithProblem {
    /// Returns the number of variables of the model.
    fn n_vars(&self) -> usize;

    /// Returns the number of constraints of the model.
    fn n_conss(&self) -> usize;

    /// Returns the variables of the model.
    fn vars(&self) -> Vec<Variable>;

    /// Returns the variable with the given id, if it exists.
    fn var(&self, var_id: VarId) -> Option<Variable>;

    /// Returns the constraints of the model.
    fn conss(&self) -> Vec<Constraint>;
}

impl<State> ModelWithProblem for Model<State> {
    fn n_vars(&self) -> usize {
        self.prob.vars.len()
    }

    fn n_conss(&self) -> usize {
        self.prob.conss.len()
    }

    fn vars(&self) -> Vec<Variable> {
        self.prob.vars.clone()
    }

    fn var(&self, var_id: VarId) -> Option<Variable> {
        self.prob.vars.get(var_id).cloned()
    }

    fn conss(&self) -> Vec<Constraint> {
        self.prob.conss.clone()
    }
}

/// An enum representing the objective sense of an optimization model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjSense {
    /// The problem is a minimization problem.
    Minimize,
    /// The problem is a maximization problem.
    Maximize,
}
