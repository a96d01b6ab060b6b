use recur_support::{eval_error, io_error, params_error};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecurrenceError {
    #[error("{}", eval_error("evaluate", .n, "n must be non-negative"))]
    InvalidArgument { n: i32 },
    #[error("{}", eval_error("growth_ratio", .n, "n must be at least 1"))]
    RatioUndefined { n: i32 },
    #[error("{}", params_error("classify", .a, .b, "expected a >= 1 and b >= 2"))]
    InvalidParameters { a: u32, b: u32 },
    #[error("{}", io_error("report", .0))]
    Io(#[from] std::io::Error),
}
