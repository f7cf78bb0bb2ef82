//! Functional programming utilities

/// Run the closure only when the predicate holds, otherwise succeed.
pub fn when<E, F>(predicate: bool, f: F) -> Result<(), E>
where
    F: FnOnce() -> Result<(), E>,
{
    if predicate {
        f()
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_runs_only_when_predicate_holds() {
        assert_eq!(when(false, || Err("not run")), Ok(()));
        assert_eq!(when(true, || Err("run")), Err("run"));
    }
}
