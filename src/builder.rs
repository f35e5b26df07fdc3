//! Builders for adding variables and constraints to a model.

use crate::constraint::Constraint;
use crate::model::{Model, ModelWithProblem, ProblemCreated};
use crate::variable::{VarType, Variable};

/// A trait for elements that can be added to a model (e.g. variables and constraints).
pub trait CanBeAddedToModel {
    /// The return type after adding to the model (e.g. `Variable` / `Constraint`).
    type Return;
    /// How to add the element to the model.
    fn add(self, model: &mut Model<ProblemCreated>) -> Self::Return;
}

impl<T, I> CanBeAddedToModel for I
where
    T: CanBeAddedToModel,
    I: IntoIterator<Item = T>,
{
    type Return = Vec<T::Return>;
    fn add(self, model: &mut Model<ProblemCreated>) -> Self::Return {
        self.into_iter().map(|x| x.add(model)).collect()
    }
}

/// A builder for variables.
#[derive(Debug)]
pub struct VarBuilder<'a> {
    name: Option<&'a str>,
    obj: f64,
    lb: f64,
    ub: f64,
    var_type: VarType,
}

/// Creates a new default `VarBuilder`.
pub fn var<'a>() -> VarBuilder<'a> {
    VarBuilder::default()
}

impl Default for VarBuilder<'_> {
    fn default() -> Self {
        VarBuilder {
            name: None,
            obj: 0.0,
            lb: 0.0,
            ub: f64::INFINITY,
            var_type: VarType::Continuous,
        }
    }
}

impl<'a> VarBuilder<'a> {
    /// Sets the variable to be an integer variable.
    pub fn integer(mut self, lb: isize, ub: isize) -> Self {
        self.lb = lb as f64;
        self.ub = ub as f64;
        self.var_type = VarType::Integer;
        self
    }

    /// Sets the variable to be a binary variable.
    pub fn binary(mut self) -> Self {
        self.lb = 0.0;
        self.ub = 1.0;
        self.var_type = VarType::Binary;
        self
    }

    /// Sets the variable to be a continuous variable.
    pub fn continuous(mut self, lb: f64, ub: f64) -> Self {
        self.lb = lb;
        self.ub = ub;
        self.var_type = VarType::Continuous;
        self
    }

    /// Sets the name of the variable.
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets the objective coefficient of the variable.
    pub fn obj(mut self, obj: f64) -> Self {
        self.obj = obj;
        self
    }
}

impl CanBeAddedToModel for VarBuilder<'_> {
    type Return = Variable;
    fn add(self, model: &mut Model<ProblemCreated>) -> Variable {
        let name = self.name.map(|s| s.to_string()).unwrap_or_else(|| {
            let n_vars = model.n_vars();
            format!("x{}", n_vars)
        });

        model.add_var(self.lb, self.ub, self.obj, &name, self.var_type)
    }
}

/// A builder for creating constraints.
#[derive(Debug)]
pub struct ConsBuilder<'a> {
    /// Left-hand side of constraint
    pub(crate) lhs: f64,
    /// Right-hand side of constraint
    pub(crate) rhs: f64,
    /// (Optional) name of constraint
    pub(crate) name: Option<&'a str>,
    /// Coefficients of constraint
    pub(crate) coefs: Vec<(&'a Variable, f64)>,
}

/// Creates a new default `ConsBuilder`.
pub fn cons() -> ConsBuilder<'static> {
    ConsBuilder::default()
}

impl Default for ConsBuilder<'_> {
    fn default() -> Self {
        ConsBuilder {
            lhs: f64::NEG_INFINITY,
            rhs: f64::INFINITY,
            name: None,
            coefs: Vec::new(),
        }
    }
}

impl<'a> ConsBuilder<'a> {
    /// Creates a constraint of the form `expr <= val`.
    pub fn le(mut self, val: f64) -> Self {
        self.rhs = val;
        self.lhs = f64::NEG_INFINITY;
        self
    }

    /// Creates a constraint of the form `val <= expr`.
    pub fn ge(mut self, val: f64) -> Self {
        self.lhs = val;
        self.rhs = f64::INFINITY;
        self
    }

    /// Creates a constraint of the form `expr = val`.
    pub fn eq(mut self, val: f64) -> Self {
        self.lhs = val;
        self.rhs = val;
        self
    }

    /// Sets the name of the constraint.
    pub fn name(mut self, name: &'a str) -> Self {
        self.name = Some(name);
        self
    }

    /// Adds a coefficient to the constraint.
    pub fn coef(mut self, var: &'a Variable, coef: f64) -> Self {
        self.coefs.push((var, coef));
        self
    }

    /// Adds multiple coefficients to the constraint.
    pub fn coefs(mut self, var_refs: Vec<&'a Variable>, vals: Vec<f64>) -> Self {
        self.coefs.extend(var_refs.into_iter().zip(vals));
        self
    }

    /// Adds multiple coefficients to the constraint from an iterator of pairs.
    pub fn expr<I>(mut self, iter: I) -> Self
    where
        I: IntoIterator<Item = (&'a Variable, f64)>,
    {
        self.coefs.extend(iter);
        self
    }
}

impl CanBeAddedToModel for ConsBuilder<'_> {
    type Return = Constraint;
    fn add(self, model: &mut Model<ProblemCreated>) -> Constraint {
        let name = self.name.map(|s| s.to_string()).unwrap_or_else(|| {
            let n_conss = model.n_conss();
            format!("c{}", n_conss)
        });

        let (vars, coefs): (Vec<Variable>, Vec<f64>) = self
            .coefs
            .into_iter()
            .map(|(var, coef)| (var.clone(), coef))
            .unzip();
        model.add_cons(vars, &coefs, self.lhs, self.rhs, &name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn test_var_builder() {
        let var = var().name("x").obj(1.0).continuous(0.0, 1.0);

        assert_eq!(var.name, Some("x"));
        assert_eq!(var.obj, 1.0);
        assert_eq!(var.lb, 0.0);
        assert_eq!(var.ub, 1.0);
        assert_eq!(var.var_type, VarType::Continuous);
    }

    #[test]
    fn test_var_builder_add() {
        let mut model = Model::default().set_obj_sense(ObjSense::Maximize);
        let var = var().name("x").obj(1.0).continuous(0.0, 1.0);

        let var = model.add(var);

        assert_eq!(model.n_vars(), 1);
        assert_eq!(var.name(), "x");
        assert_eq!(var.obj(), 1.0);
        assert_eq!(var.lb(), 0.0);
        assert_eq!(var.ub(), 1.0);

        model.add(cons().le(1.0).coef(&var, 1.0));
        let solved = model.solve();
        assert_eq!(solved.status(), Status::Optimal);
        assert_eq!(solved.obj_val(), 1.0);
    }

    #[test]
    fn test_var_add_all() {
        let mut model = Model::default().set_obj_sense(ObjSense::Maximize);
        let vars = vec![
            var().name("1").obj(1.0).continuous(0.0, 1.0),
            var().name("2").obj(1.0).continuous(0.0, 1.0),
            var().name("3").obj(1.0).continuous(0.0, 1.0),
        ];

        let vars = model.add(vars);
        for (i, var) in vars.iter().enumerate() {
            assert_eq!(var.name(), (i + 1).to_string());
            assert_eq!(var.obj(), 1.0);
            assert_eq!(var.lb(), 0.0);
            assert_eq!(var.ub(), 1.0);
        }

        model.add(cons().le(3.0).expr(vars.iter().map(|var| (var, 1.0))));
        let solved = model.solve();
        assert_eq!(solved.status(), Status::Optimal);
        assert_eq!(solved.obj_val(), 3.0);
    }

    #[test]
    fn test_default_names() {
        let mut model = Model::default();
        let x = model.add(var().binary());
        let c = model.add(cons().le(1.).coef(&x, 1.));

        assert_eq!(x.name(), "x0");
        assert_eq!(c.name(), "c0");
    }

    #[test]
    fn test_cons_builder() {
        let mut model = Model::default().set_obj_sense(ObjSense::Maximize);
        let x = model.add(var().name("x").obj(2.).integer(0, 10));
        let y = model.add(var().name("y").obj(3.).integer(0, 10));

        let cons_builder = cons().name("capacity").le(10.).coef(&x, 1.).coef(&y, 2.);
        assert_eq!(cons_builder.name, Some("capacity"));
        assert_eq!(cons_builder.rhs, 10.);
        assert_eq!(cons_builder.coefs.len(), 2);

        let cons = model.add(cons_builder);
        assert_eq!(cons.name(), "capacity");
        assert_eq!(model.n_conss(), 1);

        let solved = model.solve();
        assert_eq!(solved.status(), Status::Optimal);
        assert_eq!(solved.obj_val(), 20.);
    }

    #[test]
    fn test_cons_builder_expr() {
        let mut model = Model::default().set_obj_sense(ObjSense::Maximize);
        let vars = model.add(vec![
            var().name("x").obj(1.).binary(),
            var().name("y").obj(1.).binary(),
        ]);

        model.add(cons().le(1.).expr(vars.iter().map(|var| (var, 1.))));

        let solved = model.solve();
        assert_eq!(solved.status(), Status::Optimal);
        assert_eq!(solved.obj_val(), 1.0);
    }
}
