/// An enum representing the status of an optimization run.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Status {
    /// The solving status is not known, e.g. after an internal solver error.
    Unknown,
    /// The problem was solved to optimality, an optimal solution is available.
    Optimal,
    /// The problem was proven to be infeasible.
    Infeasible,
    /// The problem was proven to be unbounded.
    Unbounded,
}

impl From<&microlp::Error> for Status {
    /// Converts a solver error into the `Status` it proves.
    fn from(err: &microlp::Error) -> Self {
        match err {
            microlp::Error::Infeasible => Status::Infeasible,
            microlp::Error::Unbounded => Status::Unbounded,
            microlp::Error::InternalError(_) => Status::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_from_solver_error() {
        assert_eq!(Status::from(&microlp::Error::Infeasible), Status::Infeasible);
        assert_eq!(Status::from(&microlp::Error::Unbounded), Status::Unbounded);
        assert_eq!(
            Status::from(&microlp::Error::InternalError("numerics".to_string())),
            Status::Unknown
        );
    }
}
