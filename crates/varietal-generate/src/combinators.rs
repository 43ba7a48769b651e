//! Core combinators: constants, sequencing, dependent chaining, laziness and
//! repetition.

use varietal_core::{Generator, GeneratorKind, Group, Result, SpecNode, State, Value};

/// Generator returning `value` whatever its input.
///
/// Named `constant` because `gen` is reserved in edition 2024.
pub fn constant(value: impl Into<Value>) -> Generator {
    Generator::literal(value)
}

/// Converts every value into a constant generator.
pub fn map_gen<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Vec<Generator> {
    values.into_iter().map(constant).collect()
}

/// Array-accumulating combinator: array results are spliced, other results
/// appended.
pub fn concat(acc: Value, next: Value, _index: usize) -> Value {
    let mut items = match acc {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        other => vec![other],
    };
    match next {
        Value::Array(more) => items.extend(more),
        other => items.push(other),
    }
    Value::Array(items)
}

/// String-join combinator: appends the text form of every result.
pub fn join(acc: Value, next: Value, _index: usize) -> Value {
    let mut text = match acc {
        Value::Null => String::new(),
        other => other.to_text(),
    };
    text.push_str(&next.to_text());
    Value::Text(text)
}

/// Runs `generators` in order against the same input, folding results with
/// `combinator` from `init`. An empty list returns the input unchanged.
pub fn seq<C>(generators: Vec<Generator>, combinator: C, init: impl Into<Value>) -> Generator
where
    C: Fn(Value, Value, usize) -> Value + 'static,
{
    let init = init.into();
    Generator::from_fn(GeneratorKind::Composite, move |input, state| {
        fold(&generators, &combinator, init.clone(), input, state)
    })
}

/// `seq` specialised to `n` runs of the same generator.
pub fn replicate<C>(n: i64, generator: Generator, combinator: C, init: impl Into<Value>) -> Generator
where
    C: Fn(Value, Value, usize) -> Value + 'static,
{
    seq(repeat(n, generator), combinator, init)
}

/// Runs `source`, hands its result to `next` and runs the generator `next`
/// returns against the same input.
///
/// A sequence source is run with [`concat`], so `next` sees one array.
pub fn chain<F, N>(source: impl Into<SpecNode>, next: F) -> Generator
where
    F: Fn(Value) -> Result<N> + 'static,
    N: Into<SpecNode>,
{
    let source = source.into();
    Generator::from_fn(GeneratorKind::Composite, move |input, state| {
        let result = run_node(&source, input, state)?;
        let follow = next(result)?.into();
        run_node(&follow, input, state)
    })
}

/// Rebuilds the wrapped generator on every call.
pub fn lazy<F>(factory: F) -> Generator
where
    F: Fn() -> Result<Generator> + 'static,
{
    Generator::from_fn(GeneratorKind::Lazy, move |input, state| {
        factory()?.run(input, state)
    })
}

/// `n` copies of `value` (at least one). A generator is repeated by
/// reference; a sequence or an array literal is concatenated `n` times.
pub fn repeat(n: i64, value: impl Into<SpecNode>) -> Vec<Generator> {
    let copies = usize::try_from(n.max(1)).unwrap_or(1);
    let generators = match value.into() {
        SpecNode::Literal(Value::Array(items)) => map_gen(items),
        node => node.into_generators(),
    };
    let mut repeated = Vec::with_capacity(copies * generators.len());
    for _ in 0..copies {
        repeated.extend(generators.iter().cloned());
    }
    repeated
}

/// Marks the output of `node` as one grouped attribute value instead of a
/// branching point.
pub fn array(node: impl Into<SpecNode>) -> Generator {
    constant(Value::Group(Group::new(node, false)))
}

/// Like [`array`], with the grouped values joined into one comma-separated
/// text.
pub fn array_joined(node: impl Into<SpecNode>) -> Generator {
    constant(Value::Group(Group::new(node, true)))
}

/// Runs a spec node as one generator: a sequence is folded with [`concat`].
pub(crate) fn run_node(node: &SpecNode, input: &Value, state: &mut State) -> Result<Value> {
    match node {
        SpecNode::Gen(generator) => generator.run(input, state),
        SpecNode::Literal(value) => Ok(value.clone()),
        SpecNode::Nested(spec) => Ok(Value::Spec(spec.clone())),
        SpecNode::Sequence(_) => run_sequence(&node.to_generators(), input, state),
    }
}

fn run_sequence(
    generators: &[Generator],
    input: &Value,
    state: &mut State,
) -> Result<Value> {
    fold(generators, &concat, Value::Null, input, state)
}

fn fold<C>(
    generators: &[Generator],
    combinator: &C,
    init: Value,
    input: &Value,
    state: &mut State,
) -> Result<Value>
where
    C: Fn(Value, Value, usize) -> Value,
{
    if generators.is_empty() {
        return Ok(input.clone());
    }
    let mut acc = init;
    for (index, generator) in generators.iter().enumerate() {
        let result = generator.run(input, state)?;
        acc = combinator(acc, result, index);
    }
    Ok(acc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn run(generator: &Generator) -> Value {
        generator
            .run(&Value::Null, &mut State::new())
            .expect("generator runs")
    }

    #[test]
    fn seq_folds_in_order() {
        let generator = seq(map_gen(["a", "b", "c"]), join, Value::Null);
        assert_eq!(run(&generator), Value::text("abc"));
    }

    #[test]
    fn empty_seq_returns_input() {
        let generator = seq(Vec::new(), concat, Value::Null);
        let result = generator
            .run(&Value::Int(9), &mut State::new())
            .expect("seq");
        assert_eq!(result, Value::Int(9));
    }

    #[test]
    fn concat_splices_arrays() {
        let acc = concat(Value::Null, Value::from(vec![1, 2]), 0);
        let acc = concat(acc, Value::Int(3), 1);
        assert_eq!(acc, Value::from(vec![1, 2, 3]));
    }

    #[test]
    fn chain_feeds_sequence_results_as_one_array() {
        let generator = chain(map_gen([1, 2]), |value| {
            let len = value.as_array().map(<[Value]>::len).unwrap_or_default();
            Ok(constant(len as i64))
        });
        assert_eq!(run(&generator), Value::Int(2));
    }

    #[test]
    fn lazy_rebuilds_on_every_call() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let generator = lazy(move || {
            counter.set(counter.get() + 1);
            Ok(constant(counter.get()))
        });
        assert_eq!(run(&generator), Value::Int(1));
        assert_eq!(run(&generator), Value::Int(2));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn repeat_enforces_one_copy() {
        assert_eq!(repeat(0, constant(1)).len(), 1);
        assert_eq!(repeat(-3, constant(1)).len(), 1);
        assert_eq!(repeat(4, map_gen([1, 2, 3])).len(), 12);
    }

    #[test]
    fn repeat_splices_array_literals() {
        let copies = repeat(3, Value::from(vec![1, 2]));
        assert_eq!(copies.len(), 6);
        let values: Vec<Value> = copies.iter().map(run).collect();
        assert_eq!(values[2], Value::Int(1));
        assert_eq!(values[5], Value::Int(2));
    }

    #[test]
    fn repeat_shares_generator_identity() {
        let generator = constant("Buzz");
        let copies = repeat(3, generator.clone());
        assert!(copies.iter().all(|copy| copy.ptr_eq(&generator)));
    }

    #[test]
    fn replicate_runs_generator_n_times() {
        let generator = replicate(3, constant("ab"), join, Value::Null);
        assert_eq!(run(&generator), Value::text("ababab"));
    }
}
