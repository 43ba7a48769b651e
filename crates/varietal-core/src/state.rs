use std::rc::Rc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::options::GenerateOptions;
use crate::record::Record;
use crate::value::Value;

/// Expansion algorithm of the running call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Permutate,
    Circulate,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Permutate => "permutate",
            Mode::Circulate => "circulate",
        }
    }
}

/// Mutable record threaded through every generator of one generation call.
#[derive(Debug, Clone)]
pub struct State {
    mode: Mode,
    current: Option<Rc<Record>>,
    vars: IndexMap<String, Value>,
    circulate_index: Option<usize>,
    current_reads: u64,
    depth: usize,
    max_depth: usize,
    max_results: usize,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    pub fn new() -> Self {
        Self::with_options(&GenerateOptions::default())
    }

    pub fn with_options(options: &GenerateOptions) -> Self {
        Self {
            mode: Mode::default(),
            current: None,
            vars: IndexMap::new(),
            circulate_index: None,
            current_reads: 0,
            depth: 0,
            max_depth: options.max_depth,
            max_results: options.max_results,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// The object under construction; counted as a read.
    pub fn read_current(&mut self) -> Option<Rc<Record>> {
        self.current_reads += 1;
        self.current.clone()
    }

    /// The object under construction, without counting a read.
    pub fn peek_current(&self) -> Option<&Rc<Record>> {
        self.current.as_ref()
    }

    pub fn replace_current(&mut self, record: Option<Rc<Record>>) -> Option<Rc<Record>> {
        std::mem::replace(&mut self.current, record)
    }

    pub fn current_reads(&self) -> u64 {
        self.current_reads
    }

    pub fn var(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }

    pub fn set_var(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.vars.insert(name.into(), value)
    }

    pub fn remove_var(&mut self, name: &str) -> Option<Value> {
        self.vars.shift_remove(name)
    }

    pub fn vars(&self) -> &IndexMap<String, Value> {
        &self.vars
    }

    pub fn circulate_index(&self) -> Option<usize> {
        self.circulate_index
    }

    pub fn set_circulate_index(&mut self, index: Option<usize>) -> Option<usize> {
        std::mem::replace(&mut self.circulate_index, index)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Enters one level of nested expansion.
    pub fn enter_nested(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            return Err(Error::ResourceExhausted(format!(
                "nested expansion deeper than {} levels",
                self.max_depth
            )));
        }
        self.depth += 1;
        Ok(())
    }

    pub fn exit_nested(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn check_results(&self, len: usize) -> Result<()> {
        if len > self.max_results {
            return Err(Error::ResourceExhausted(format!(
                "{len} records exceed the limit of {}",
                self.max_results
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_depth_is_bounded() {
        let options = GenerateOptions {
            max_depth: 2,
            ..GenerateOptions::default()
        };
        let mut state = State::with_options(&options);
        state.enter_nested().expect("level 1");
        state.enter_nested().expect("level 2");
        let err = state.enter_nested().expect_err("level 3");
        assert!(matches!(err, Error::ResourceExhausted(_)));
        state.exit_nested();
        assert_eq!(state.depth(), 1);
    }

    #[test]
    fn reading_current_is_counted() {
        let mut state = State::new();
        state.replace_current(Some(Rc::new(Record::new().with("a", 1))));
        assert!(state.peek_current().is_some());
        assert_eq!(state.current_reads(), 0);
        let current = state.read_current().expect("current set");
        assert_eq!(current.slot("a"), Value::Int(1));
        assert_eq!(state.current_reads(), 1);
    }

    #[test]
    fn result_limit_is_enforced() {
        let options = GenerateOptions {
            max_results: 3,
            ..GenerateOptions::default()
        };
        let state = State::with_options(&options);
        assert!(state.check_results(3).is_ok());
        assert!(state.check_results(4).is_err());
    }
}
