//! The two expansion algorithms: cross product and zipped recycling.

use std::rc::Rc;

use tracing::warn;
use varietal_core::{Generator, GeneratorSpec, Mode, Record, Result, State, Value, record_of};

use crate::combinators::constant;
use crate::mutate::{mutate_on_attribute, mutate_slot, property};

/// Cross-product expansion of `spec` over `base`.
///
/// Attributes declared earlier vary slower. With `count`, the result is
/// truncated to `count` records; when one pass yields fewer, the whole pass
/// is run again and appended until `count` is reached. Repeated passes keep
/// advancing `state`, so the state returned may reflect draws whose records
/// were truncated away.
pub fn permutate(
    spec: &GeneratorSpec,
    base: &Record,
    count: Option<usize>,
    state: &mut State,
) -> Result<Vec<Record>> {
    let previous_mode = state.mode();
    state.set_mode(Mode::Permutate);
    let previous_current = state.replace_current(None);
    let records = permutate_counted(spec, base, count, state);
    state.replace_current(previous_current);
    state.set_mode(previous_mode);
    records
}

/// Zipped expansion of `spec` over `base`.
///
/// Every attribute is expanded once; output `i` takes element
/// `i % len` of each expansion, so shorter attributes recycle. The output
/// length is `count`, or the longest expansion. Attributes that read the
/// current object are expanded again for every output, against that
/// output's partially built object.
pub fn circulate(
    spec: &GeneratorSpec,
    base: &Record,
    count: Option<usize>,
    state: &mut State,
) -> Result<Vec<Record>> {
    let previous_mode = state.mode();
    state.set_mode(Mode::Circulate);
    let previous_current = state.replace_current(None);
    let previous_index = state.circulate_index();
    let records = circulate_records(spec, base, count, state);
    state.set_circulate_index(previous_index);
    state.replace_current(previous_current);
    state.set_mode(previous_mode);
    records
}

/// Cross-product expansion with a fresh state.
pub fn generate(spec: &GeneratorSpec, base: &Record) -> Result<Vec<Record>> {
    let mut state = State::new();
    permutate(spec, base, None, &mut state)
}

/// Cross-product expansion returning the final state along with the
/// records.
pub fn generate_with_state(
    spec: &GeneratorSpec,
    base: &Record,
    mut state: State,
) -> Result<(Vec<Record>, State)> {
    let records = permutate(spec, base, None, &mut state)?;
    Ok((records, state))
}

/// Generator list of every attribute, in spec order.
pub fn attribute_generators(spec: &GeneratorSpec) -> Vec<(&str, Vec<Generator>)> {
    spec.iter()
        .map(|(name, node)| (name, node.to_generators()))
        .collect()
}

fn permutate_counted(
    spec: &GeneratorSpec,
    base: &Record,
    count: Option<usize>,
    state: &mut State,
) -> Result<Vec<Record>> {
    let attributes = attribute_generators(spec);
    let base = Rc::new(base.clone());
    let mut records = permutate_pass(&attributes, &base, state)?;
    let Some(count) = count else {
        return Ok(records);
    };

    let mut passes = 1;
    while !records.is_empty() && records.len() < count {
        let more = permutate_pass(&attributes, &base, state)?;
        if more.is_empty() {
            break;
        }
        passes += 1;
        records.extend(more);
        state.check_results(records.len())?;
    }
    if passes > 1 {
        warn!(
            passes,
            count,
            records = records.len(),
            "permutate re-ran the spec to reach count"
        );
    }
    records.truncate(count);
    Ok(records)
}

fn permutate_pass(
    attributes: &[(&str, Vec<Generator>)],
    base: &Rc<Record>,
    state: &mut State,
) -> Result<Vec<Record>> {
    if attributes.is_empty() {
        return Ok(vec![Record::derive(base)]);
    }
    let mut working = vec![Rc::clone(base)];
    for (name, generators) in attributes {
        let mut next = Vec::with_capacity(working.len());
        for object in &working {
            let records = mutate_on_attribute(name, generators, object, state)?;
            next.extend(records.into_iter().map(Rc::new));
            state.check_results(next.len())?;
        }
        working = next;
    }
    Ok(working
        .into_iter()
        .map(|record| Rc::try_unwrap(record).unwrap_or_else(|shared| (*shared).clone()))
        .collect())
}

struct Expansion {
    values: Vec<Value>,
    reads_current: bool,
}

fn circulate_records(
    spec: &GeneratorSpec,
    base: &Record,
    count: Option<usize>,
    state: &mut State,
) -> Result<Vec<Record>> {
    let attributes = attribute_generators(spec);
    let base = Rc::new(base.clone());

    state.set_circulate_index(Some(0));
    let mut first = Record::derive(&base);
    let mut expansions = Vec::with_capacity(attributes.len());
    for (name, generators) in &attributes {
        let reads = state.current_reads();
        let values = mutate_slot(name, generators, &Rc::new(first.clone()), state)?;
        if let Some(value) = values.first() {
            first.set(*name, value.clone());
        }
        expansions.push(Expansion {
            values,
            reads_current: state.current_reads() != reads,
        });
    }

    let total = match count {
        Some(count) => count,
        None if attributes.is_empty() => 1,
        None => expansions
            .iter()
            .map(|expansion| expansion.values.len())
            .max()
            .unwrap_or_default(),
    };
    state.check_results(total)?;

    let mut records = Vec::with_capacity(total);
    for index in 0..total {
        state.set_circulate_index(Some(index));
        let mut object = Value::Object(Record::derive(&base));
        for ((name, generators), expansion) in attributes.iter().zip(&expansions) {
            let value = if expansion.reads_current && index > 0 {
                let partial = Rc::new(record_of(&object)?.clone());
                let values = mutate_slot(name, generators, &partial, state)?;
                pick(&values, index).cloned()
            } else {
                pick(&expansion.values, index).cloned()
            };
            if let Some(value) = value {
                object = property(*name, constant(value)).run(&object, state)?;
            }
        }
        records.push(record_of(&object)?.clone());
    }
    Ok(records)
}

fn pick<T>(values: &[T], index: usize) -> Option<&T> {
    if values.is_empty() {
        return None;
    }
    values.get(index % values.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinators::map_gen;

    fn toy() -> Record {
        Record::new().with("name", "Woody").with("age", 2)
    }

    #[test]
    fn empty_spec_returns_one_clone() {
        let records = generate(&GeneratorSpec::new(), &toy()).expect("generate");
        assert_eq!(records, vec![toy()]);
    }

    #[test]
    fn count_truncates_in_cross_product_order() {
        let spec = GeneratorSpec::new()
            .attr("name", map_gen(["Buzz", "Slinky"]))
            .attr("age", map_gen([2, 3, 4]));
        let mut state = State::new();
        let records = permutate(&spec, &toy(), Some(4), &mut state).expect("permutate");
        let pairs: Vec<(Value, Value)> = records
            .iter()
            .map(|record| (record.slot("name"), record.slot("age")))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (Value::text("Buzz"), Value::Int(2)),
                (Value::text("Buzz"), Value::Int(3)),
                (Value::text("Buzz"), Value::Int(4)),
                (Value::text("Slinky"), Value::Int(2)),
            ]
        );
    }

    #[test]
    fn count_above_one_pass_repeats_the_pass() {
        let spec = GeneratorSpec::new().attr("name", map_gen(["Buzz", "Slinky"]));
        let mut state = State::new();
        let records = permutate(&spec, &toy(), Some(5), &mut state).expect("permutate");
        let names: Vec<Value> = records.iter().map(|record| record.slot("name")).collect();
        assert_eq!(names.len(), 5);
        assert_eq!(names[2], Value::text("Buzz"));
        assert_eq!(names[4], Value::text("Buzz"));
    }

    #[test]
    fn circulate_count_overrides_longest() {
        let spec = GeneratorSpec::new().attr("name", map_gen(["Buzz", "Slinky"]));
        let mut state = State::new();
        let records = circulate(&spec, &toy(), Some(3), &mut state).expect("circulate");
        let names: Vec<Value> = records.iter().map(|record| record.slot("name")).collect();
        assert_eq!(
            names,
            vec![Value::text("Buzz"), Value::text("Slinky"), Value::text("Buzz")]
        );
    }

    #[test]
    fn empty_expansion_keeps_base_value_in_circulate() {
        let spec = GeneratorSpec::new()
            .attr("name", constant(Value::Array(Vec::new())))
            .attr("age", map_gen([5, 6]));
        let mut state = State::new();
        let records = circulate(&spec, &toy(), None, &mut state).expect("circulate");
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].slot("name"), Value::text("Woody"));
        assert_eq!(records[1].slot("age"), Value::Int(6));
    }

    #[test]
    fn mode_and_current_are_restored() {
        let mut state = State::new();
        state.set_mode(Mode::Circulate);
        let spec = GeneratorSpec::new().attr("age", 3);
        permutate(&spec, &toy(), None, &mut state).expect("permutate");
        assert_eq!(state.mode(), Mode::Circulate);
        assert!(state.peek_current().is_none());
    }
}
