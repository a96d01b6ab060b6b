use std::borrow::Cow;
use std::fmt;

fn escape_single_quotes(input: &str) -> Cow<'_, str> {
    if input.contains('\'') {
        Cow::Owned(input.replace('\'', "\\'"))
    } else {
        Cow::Borrowed(input)
    }
}

fn format_operation_error(
    module: &str,
    operation: &str,
    target: Option<&str>,
    error: impl fmt::Display,
) -> String {
    match target {
        Some(target) => {
            let escaped = escape_single_quotes(target);
            format!("{module}.{operation}('{}') failed: {error}", escaped)
        }
        None => format!("{module}.{operation} failed: {error}"),
    }
}

/// Message for a failed operation on a single recurrence argument,
/// e.g. `recur.evaluate('-3') failed: ...`.
pub fn eval_error(operation: &str, n: impl fmt::Display, error: impl fmt::Display) -> String {
    format_operation_error("recur", operation, Some(&n.to_string()), error)
}

/// Message for a failed Master Theorem query on `(a, b)` parameters.
pub fn params_error(
    operation: &str,
    a: impl fmt::Display,
    b: impl fmt::Display,
    error: impl fmt::Display,
) -> String {
    format_operation_error("recur.growth", operation, Some(&format!("a={a}, b={b}")), error)
}

pub fn io_error(operation: &str, error: impl fmt::Display) -> String {
    format_operation_error("recur.io", operation, None, error)
}

pub fn cli_error(operation: &str, error: impl fmt::Display) -> String {
    format_operation_error("recur.cli", operation, None, error)
}

pub fn cli_target_error(operation: &str, target: &str, error: impl fmt::Display) -> String {
    format_operation_error("recur.cli", operation, Some(target), error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_targeted_errors() {
        assert_eq!(
            eval_error("evaluate", -3, "n must be non-negative"),
            "recur.evaluate('-3') failed: n must be non-negative"
        );
    }

    #[test]
    fn escapes_quotes_in_targets() {
        assert_eq!(
            cli_target_error("parse", "it's", "not a number"),
            "recur.cli.parse('it\\'s') failed: not a number"
        );
    }

    #[test]
    fn formats_untargeted_errors() {
        assert_eq!(
            io_error("report", "broken pipe"),
            "recur.io.report failed: broken pipe"
        );
    }
}
