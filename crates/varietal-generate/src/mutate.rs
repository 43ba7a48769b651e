//! Applying generators to one attribute slot.

use std::rc::Rc;

use tracing::debug;
use varietal_core::{
    Generator, GeneratorKind, GeneratorSpec, Group, Mode, Record, Result, SpecNode, State, Value,
    record_of,
};

use crate::combinators::{concat, run_node};
use crate::expand::{circulate, permutate};

/// Runs every generator against `slot` and flattens the results.
///
/// Array results branch once per element, group markers collapse into one
/// value, and nested specs (or records) expand against the slot value.
/// No generators means the slot value is kept.
pub fn mutate(generators: &[Generator], slot: &Value, state: &mut State) -> Result<Vec<Value>> {
    if generators.is_empty() {
        return Ok(vec![slot.clone()]);
    }
    let mut results = Vec::new();
    for generator in generators {
        match generator.run(slot, state)? {
            Value::Array(items) => results.extend(items),
            Value::Group(group) => results.push(run_group(&group, slot, state)?),
            Value::Spec(spec) => {
                let records = expand_nested(&spec, slot, state)?;
                results.extend(records.into_iter().map(Value::Object));
            }
            Value::Object(record) => {
                let spec = GeneratorSpec::from_record(&record);
                let records = expand_nested(&spec, slot, state)?;
                results.extend(records.into_iter().map(Value::Object));
            }
            other => results.push(other),
        }
    }
    Ok(results)
}

/// Mutates attribute `name` of `object`, returning one delegating clone per
/// result.
pub fn mutate_on_attribute(
    name: &str,
    generators: &[Generator],
    object: &Rc<Record>,
    state: &mut State,
) -> Result<Vec<Record>> {
    let values = mutate_slot(name, generators, object, state)?;
    Ok(values
        .into_iter()
        .map(|value| {
            let mut record = Record::derive(object);
            record.set(name, value);
            record
        })
        .collect())
}

/// Generator taking an object and returning a clone whose attribute `name`
/// holds the result of `node` run against the old attribute value.
pub fn property(name: impl Into<String>, node: impl Into<SpecNode>) -> Generator {
    let name = name.into();
    let node = node.into();
    Generator::from_fn(GeneratorKind::Composite, move |input, state| {
        let object = Rc::new(record_of(input)?.clone());
        let value = run_node(&node, &object.slot(&name), state)?;
        let mut record = Record::derive(&object);
        record.set(name.as_str(), value);
        Ok(Value::Object(record))
    })
}

/// Threads one object through every generator in order.
pub fn update(generators: Vec<Generator>) -> Generator {
    Generator::from_fn(GeneratorKind::Composite, move |input, state| {
        let mut object = input.clone();
        for generator in &generators {
            object = generator.run(&object, state)?;
        }
        Ok(object)
    })
}

/// Runs `mutate` on `object[name]` with `object` published as the current
/// object.
pub(crate) fn mutate_slot(
    name: &str,
    generators: &[Generator],
    object: &Rc<Record>,
    state: &mut State,
) -> Result<Vec<Value>> {
    let previous = state.replace_current(Some(Rc::clone(object)));
    let values = mutate(generators, &object.slot(name), state);
    state.replace_current(previous);
    values
}

fn run_group(group: &Group, slot: &Value, state: &mut State) -> Result<Value> {
    if group.generators().is_empty() {
        return Ok(slot.clone());
    }
    let single = !group.is_sequence() && group.generators().len() == 1;
    let mut value = Value::Null;
    for (index, generator) in group.generators().iter().enumerate() {
        let result = match generator.run(slot, state)? {
            Value::Spec(spec) => nested_records(&spec, slot, single, state)?,
            Value::Object(record) => {
                nested_records(&GeneratorSpec::from_record(&record), slot, single, state)?
            }
            other => other,
        };
        value = if single {
            result
        } else {
            concat(value, result, index)
        };
    }
    if group.join() {
        return Ok(Value::Text(value.to_text()));
    }
    Ok(value)
}

/// Expanded records of a nested spec inside a group. A lone member that
/// expands to one record keeps it as an object.
fn nested_records(
    spec: &GeneratorSpec,
    slot: &Value,
    single: bool,
    state: &mut State,
) -> Result<Value> {
    let mut records = expand_nested(spec, slot, state)?;
    if single && records.len() == 1 {
        return Ok(records.pop().map(Value::Object).unwrap_or_default());
    }
    Ok(Value::Array(records.into_iter().map(Value::Object).collect()))
}

fn expand_nested(spec: &GeneratorSpec, slot: &Value, state: &mut State) -> Result<Vec<Record>> {
    let base = slot.as_record().cloned().unwrap_or_default();
    state.enter_nested()?;
    debug!(
        depth = state.depth(),
        mode = state.mode().as_str(),
        attributes = spec.len(),
        "expanding nested spec"
    );
    let records = match state.mode() {
        Mode::Permutate => permutate(spec, &base, None, state),
        Mode::Circulate => circulate(spec, &base, None, state),
    };
    state.exit_nested();
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::{array, array_joined, constant, map_gen};

    #[test]
    fn arrays_branch_and_scalars_append() {
        let mut state = State::new();
        let generators = vec![constant(Value::from(vec!["a", "b"])), constant("c")];
        let values = mutate(&generators, &Value::Null, &mut state).expect("mutate");
        assert_eq!(values, vec![Value::text("a"), Value::text("b"), Value::text("c")]);
    }

    #[test]
    fn no_generators_keep_the_slot() {
        let mut state = State::new();
        let values = mutate(&[], &Value::Int(4), &mut state).expect("mutate");
        assert_eq!(values, vec![Value::Int(4)]);
    }

    #[test]
    fn groups_do_not_branch() {
        let mut state = State::new();
        let grouped = mutate(&[array(map_gen([1, 2, 3]))], &Value::Null, &mut state)
            .expect("group");
        assert_eq!(grouped, vec![Value::from(vec![1, 2, 3])]);

        let joined = mutate(&[array_joined(map_gen(["x", "y"]))], &Value::Null, &mut state)
            .expect("joined group");
        assert_eq!(joined, vec![Value::text("x,y")]);
    }

    #[test]
    fn single_generator_group_keeps_its_result() {
        let mut state = State::new();
        let values = mutate(&[array(constant(7))], &Value::Null, &mut state).expect("group");
        assert_eq!(values, vec![Value::Int(7)]);
    }

    #[test]
    fn clones_inherit_untouched_attributes() {
        let mut state = State::new();
        let object = Rc::new(Record::new().with("name", "Woody").with("age", 2));
        let records = mutate_on_attribute("name", &map_gen(["Buzz", "Slinky"]), &object, &mut state)
            .expect("mutate");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].slot("name"), Value::text("Buzz"));
        assert_eq!(records[1].slot("age"), Value::Int(2));
        assert!(records[0].own_fields().get("age").is_none());
        assert_eq!(object.slot("name"), Value::text("Woody"));
    }

    #[test]
    fn update_threads_properties() {
        let mut state = State::new();
        let base = Value::Object(Record::new().with("name", "Woody").with("toy", "cowboy"));
        let generator = update(vec![
            property("name", constant("Buzz")),
            property("toy", constant("action figure")),
        ]);
        let result = generator.run(&base, &mut state).expect("update");
        let record = result.as_record().expect("record");
        assert_eq!(record.slot("name"), Value::text("Buzz"));
        assert_eq!(record.slot("toy"), Value::text("action figure"));
    }
}
