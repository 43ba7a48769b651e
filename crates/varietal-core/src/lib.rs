//! Core contracts for varietal.
//!
//! This crate defines the value model, the delegating record used for every
//! generated variant, the generator protocol, and the per-run state shared by
//! the generation and dictionary crates.

pub mod classify;
pub mod error;
pub mod generator;
pub mod options;
pub mod range;
pub mod record;
pub mod spec;
pub mod state;
pub mod value;

pub use classify::{
    ValueKind, array_of, date_of, generator_of, int_of, number_of, parse_date_text, record_of,
    string_of,
};
pub use error::{Error, Result};
pub use generator::{Generate, Generator, GeneratorKind};
pub use options::GenerateOptions;
pub use range::RangeArgs;
pub use record::Record;
pub use spec::{GeneratorSpec, Group, SpecNode};
pub use state::{Mode, State};
pub use value::{DATE_TEXT_FORMAT, Value};
