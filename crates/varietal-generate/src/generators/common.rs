use varietal_core::{Error, Generator, GeneratorKind, RangeArgs, Result, SpecNode, State, Value};

use crate::combinators::{constant, run_node};

/// Constant generators for every integer of the inclusive range, defaulting
/// to `0..=100`.
pub fn range(args: impl Into<RangeArgs>) -> Vec<Generator> {
    let (min, max) = args.into().resolve(0, 100);
    (min..=max).map(constant).collect()
}

/// One generator yielding every value, nested arrays flattened, so the
/// attribute branches once per value.
pub fn list<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Generator {
    let mut flat = Vec::new();
    for value in values {
        flatten_into(value.into(), &mut flat);
    }
    constant(Value::Array(flat))
}

/// Concatenates the text of every part; generators run against the input
/// and sequences are joined recursively.
pub fn join_all(parts: Vec<SpecNode>) -> Generator {
    Generator::from_fn(GeneratorKind::Composite, move |input, state| {
        let mut text = String::new();
        for part in &parts {
            join_part(part, input, state, &mut text)?;
        }
        Ok(Value::Text(text))
    })
}

/// Puts `node`'s value in front of the input with loose `+`.
pub fn prepend(node: impl Into<SpecNode>) -> Generator {
    combine_with_input(node.into(), |part, input| part.plus(input))
}

/// Puts `node`'s value after the input with loose `+`.
pub fn append(node: impl Into<SpecNode>) -> Generator {
    combine_with_input(node.into(), |part, input| input.plus(part))
}

fn flatten_into(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => {
            for item in items {
                flatten_into(item, out);
            }
        }
        other => out.push(other),
    }
}

fn join_part(part: &SpecNode, input: &Value, state: &mut State, out: &mut String) -> Result<()> {
    match part {
        SpecNode::Sequence(nodes) => {
            for node in nodes {
                join_part(node, input, state, out)?;
            }
        }
        node => out.push_str(&run_node(node, input, state)?.to_text()),
    }
    Ok(())
}

fn combine_with_input<H>(node: SpecNode, handler: H) -> Generator
where
    H: Fn(&Value, &Value) -> Value + 'static,
{
    Generator::from_fn(GeneratorKind::Composite, move |input, state| {
        combine(&node, &handler, input, state)
    })
}

fn combine<H>(node: &SpecNode, handler: &H, input: &Value, state: &mut State) -> Result<Value>
where
    H: Fn(&Value, &Value) -> Value,
{
    match node {
        SpecNode::Sequence(nodes) => {
            let mut results = Vec::with_capacity(nodes.len());
            for node in nodes {
                match combine(node, handler, input, state)? {
                    Value::Array(items) => results.extend(items),
                    other => results.push(other),
                }
            }
            Ok(Value::Array(results))
        }
        SpecNode::Nested(_) => Err(Error::invalid_type("value or generator", "spec")),
        node => {
            let part = run_node(node, input, state)?;
            Ok(handler(&part, input))
        }
    }
}
