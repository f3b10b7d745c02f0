//! API middleware.

mod problem;

pub use problem::{panic_to_problem, problem_middleware, render_problem};
