//! Generators reading and writing the per-run [`State`].

use varietal_core::{Error, Generator, GeneratorKind, Record, Result, SpecNode, State, Value};

use crate::combinators::run_node;

/// Runs `node`, stores its result under `name` and passes the result on.
pub fn set_var(name: impl Into<String>, node: impl Into<SpecNode>) -> Generator {
    let name = name.into();
    let node = node.into();
    Generator::from_fn(GeneratorKind::Composite, move |input, state| {
        let result = run_node(&node, input, state)?;
        state.set_var(name.as_str(), result.clone());
        Ok(result)
    })
}

/// Hands the variable `name` (`Null` when unset) to `f` and runs the
/// generator it returns.
pub fn with_var<F, N>(name: impl Into<String>, f: F) -> Generator
where
    F: Fn(Value) -> Result<N> + 'static,
    N: Into<SpecNode>,
{
    let name = name.into();
    Generator::from_fn(GeneratorKind::Composite, move |input, state| {
        let value = state.var(&name).cloned().unwrap_or_default();
        let next = f(value)?.into();
        run_node(&next, input, state)
    })
}

/// Generator re-emitting the variable `name`.
pub fn var_gen(name: impl Into<String>) -> Generator {
    let name = name.into();
    Generator::from_fn(GeneratorKind::Composite, move |_, state| {
        Ok(state.var(&name).cloned().unwrap_or_default())
    })
}

/// Gives `f` the whole state; changes it makes are seen by every later
/// generator of the run.
pub fn with_state<F, N>(f: F) -> Generator
where
    F: Fn(&mut State) -> Result<N> + 'static,
    N: Into<SpecNode>,
{
    Generator::from_fn(GeneratorKind::Composite, move |input, state| {
        let next = f(state)?.into();
        run_node(&next, input, state)
    })
}

/// Calls `f` with the object under construction.
///
/// Only attributes declared before this one are set on that object. Fails
/// with [`Error::EmptyInput`] outside an expansion.
pub fn current<F, N>(f: F) -> Generator
where
    F: Fn(&Record) -> Result<N> + 'static,
    N: Into<SpecNode>,
{
    Generator::from_fn(GeneratorKind::Composite, move |input, state| {
        let object = state
            .read_current()
            .ok_or_else(|| Error::EmptyInput("no object under construction".to_string()))?;
        let next = f(object.as_ref())?.into();
        run_node(&next, input, state)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::constant;

    #[test]
    fn set_var_passes_result_through() {
        let mut state = State::new();
        let result = set_var("x", constant(5))
            .run(&Value::Null, &mut state)
            .expect("set_var");
        assert_eq!(result, Value::Int(5));
        assert_eq!(state.var("x"), Some(&Value::Int(5)));
    }

    #[test]
    fn with_var_sees_null_when_unset() {
        let mut state = State::new();
        let result = with_var("missing", |value| Ok(constant(value.is_null())))
            .run(&Value::Null, &mut state)
            .expect("with_var");
        assert_eq!(result, Value::Bool(true));
    }

    #[test]
    fn with_state_changes_are_kept() {
        let mut state = State::new();
        with_state(|state| {
            state.set_var("init", Value::Int(10));
            Ok(constant(0))
        })
        .run(&Value::Null, &mut state)
        .expect("with_state");
        let result = var_gen("init")
            .run(&Value::Null, &mut state)
            .expect("var_gen");
        assert_eq!(result, Value::Int(10));
    }

    #[test]
    fn current_outside_expansion_fails() {
        let mut state = State::new();
        let err = current(|_| Ok(constant(1)))
            .run(&Value::Null, &mut state)
            .expect_err("no current object");
        assert!(matches!(err, Error::EmptyInput(_)));
    }
}
