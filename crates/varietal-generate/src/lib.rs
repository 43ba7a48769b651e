//! Generation engine for varietal.
//!
//! Builds generators from the core combinators, applies them to attribute
//! slots, and expands a [`GeneratorSpec`] over a base [`Record`] either as a
//! full cross product (`permutate`) or as a zipped, recycling walk
//! (`circulate`).

pub mod combinators;
pub mod engine;
pub mod expand;
pub mod generators;
pub mod model;
pub mod mutate;
pub mod random;
pub mod vars;

pub use combinators::{
    array, array_joined, chain, concat, constant, join, lazy, map_gen, repeat, replicate, seq,
};
pub use engine::{GenerationEngine, GenerationResult};
pub use expand::{attribute_generators, circulate, generate, generate_with_state, permutate};
pub use model::GenerationReport;
pub use mutate::{mutate, mutate_on_attribute, property, update};
pub use random::{Lcg, Random, RandomSource};
pub use vars::{current, set_var, var_gen, with_state, with_var};

pub use varietal_core::{
    Error, GenerateOptions, Generator, GeneratorKind, GeneratorSpec, Mode, Record, Result,
    SpecNode, State, Value,
};
