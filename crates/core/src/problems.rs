pub mod constrained;
pub mod function;

pub use constrained::ConstrainedProblem;
pub use function::FnProblem;
