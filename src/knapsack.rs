//! 0/1 knapsack instances and their solution through an integer program.

use std::error::Error;
use std::fmt;

use log::debug;

use crate::builder::{cons, var};
use crate::model::Model;
use crate::status::Status;

/// Decision values above this threshold are read as "item selected".
///
/// The solver works on a continuous relaxation with integrality constraints,
/// so values meant to be exactly `1` can come back as e.g. `0.999999997`. The
/// threshold only guards against that imprecision; it carries no domain
/// meaning and can be tightened or relaxed together with the backend.
pub const SELECTION_TOLERANCE: f64 = 0.99;

/// An item that can be packed: a non-negative weight and a non-negative value.
///
/// Items are immutable value objects; both fields are fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    /// The weight of the item.
    pub weight: f64,
    /// The value of the item.
    pub value: f64,
}

impl Item {
    /// Creates a new item.
    pub fn new(weight: f64, value: f64) -> Self {
        Item { weight, value }
    }
}

impl fmt::Display for Item {
    /// Formats the item the way the selection report prints it.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Objeto(peso={}, valor={})", self.weight, self.value)
    }
}

/// A 0/1 knapsack instance: a capacity and the items available for packing.
#[derive(Debug, Clone)]
pub struct Knapsack {
    capacity: f64,
    items: Vec<Item>,
}

impl Knapsack {
    /// Creates a new instance after validating it.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::InvalidInput`] if the capacity or any item
    /// weight or value is negative.
    pub fn new(capacity: f64, items: Vec<Item>) -> Result<Self, KnapsackError> {
        if capacity < 0.0 {
            return Err(KnapsackError::InvalidInput(format!(
                "negative capacity {capacity}"
            )));
        }
        for (i, item) in items.iter().enumerate() {
            if item.weight < 0.0 {
                return Err(KnapsackError::InvalidInput(format!(
                    "item {i} has negative weight {}",
                    item.weight
                )));
            }
            if item.value < 0.0 {
                return Err(KnapsackError::InvalidInput(format!(
                    "item {i} has negative value {}",
                    item.value
                )));
            }
        }
        Ok(Knapsack { capacity, items })
    }

    /// Returns the capacity of the knapsack.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Returns the items available for packing.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Solves the instance as a binary integer program.
    ///
    /// One binary decision variable per item encodes its inclusion. The solver
    /// minimizes, so the item values enter the objective negated; the single
    /// constraint bounds the summed weight of the selected items by the
    /// capacity. The solution is decoded back into the selected items (in
    /// instance order) and their summed value and weight.
    ///
    /// The instance is not mutated; `solve` can be called any number of times.
    ///
    /// # Errors
    ///
    /// Returns [`KnapsackError::SolverFailure`] if the solver does not reach a
    /// provably optimal solution. An instance where nothing fits is *not* a
    /// failure: selecting no item is feasible for every valid instance, so an
    /// empty selection comes back as a regular solution.
    pub fn solve(&self) -> Result<KnapsackSolution, KnapsackError> {
        if self.items.is_empty() {
            return Ok(KnapsackSolution::default());
        }

        let mut model = Model::with_name("knapsack");
        let vars: Vec<_> = self
            .items
            .iter()
            .map(|item| model.add(var().binary().obj(-item.value)))
            .collect();
        model.add(cons().name("capacity").le(self.capacity).expr(
            vars.iter().zip(self.items.iter().map(|item| item.weight)),
        ));

        let solved = model.solve();
        let status = solved.status();
        let Some(sol) = solved.best_sol() else {
            return Err(KnapsackError::SolverFailure(status));
        };

        let mut selected = Vec::new();
        let mut total_value = 0.0;
        let mut total_weight = 0.0;
        for (var, item) in vars.iter().zip(&self.items) {
            if sol.val(var) > SELECTION_TOLERANCE {
                selected.push(*item);
                total_value += item.value;
                total_weight += item.weight;
            }
        }
        debug!(
            "selected {} of {} items, total value {total_value}, total weight {total_weight}",
            selected.len(),
            self.items.len()
        );

        Ok(KnapsackSolution {
            selected,
            total_value,
            total_weight,
        })
    }
}

/// The result of solving a [`Knapsack`]: the selected items and their totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnapsackSolution {
    selected: Vec<Item>,
    total_value: f64,
    total_weight: f64,
}

impl KnapsackSolution {
    /// Returns the selected items, in the order of the instance.
    pub fn selected(&self) -> &[Item] {
        &self.selected
    }

    /// Returns the summed value of the selected items.
    pub fn total_value(&self) -> f64 {
        self.total_value
    }

    /// Returns the summed weight of the selected items.
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }
}

/// An error reported by [`Knapsack::new`] or [`Knapsack::solve`].
#[derive(Debug, Clone, PartialEq)]
pub enum KnapsackError {
    /// The instance is malformed: a negative capacity, weight, or value.
    InvalidInput(String),
    /// The solver did not produce an optimal solution.
    SolverFailure(Status),
}

impl fmt::Display for KnapsackError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KnapsackError::InvalidInput(msg) => write!(f, "invalid instance: {msg}"),
            KnapsackError::SolverFailure(status) => {
                write!(f, "solver finished without a solution: {status:?}")
            }
        }
    }
}

impl Error for KnapsackError {}
