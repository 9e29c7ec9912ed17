//! Failed DOM calls

use std::fmt::Debug;

/// Log a failed DOM write; the page carries on without it
///
/// Returns whether the call failed.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
pub(crate) fn warn_on_err<T, E: Debug>(what: &str, result: Result<T, E>) -> bool {
    match result {
        Ok(_) => false,
        Err(err) => {
            tracing::warn!("WebHost: {} failed: {:?}", what, err);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_are_reported() {
        assert!(warn_on_err("classList.add", Err::<(), _>("SyntaxError")));
        assert!(!warn_on_err("classList.add", Ok::<_, ()>(())));
    }
}
