use std::fmt;
use std::rc::Rc;

use crate::error::Result;
use crate::state::State;
use crate::value::Value;

/// How a generator produces its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// Ignores its input and returns a fixed value.
    Literal,
    /// Built from other generators.
    Composite,
    /// Rebuilds its inner generator on every call.
    Lazy,
    /// Draws from a random engine on every call.
    Random,
}

/// The generator protocol.
///
/// A generator maps the current attribute value to a result. State changes
/// go through the `&mut State` borrow, so they survive even when the caller
/// discards the result.
pub trait Generate {
    fn generate(&self, input: &Value, state: &mut State) -> Result<Value>;

    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Composite
    }
}

/// Shared handle to a generator.
///
/// Cloning is cheap and keeps identity: `repeat` relies on that to hand out
/// the same generator several times.
#[derive(Clone)]
pub struct Generator {
    inner: Rc<dyn Generate>,
}

impl Generator {
    pub fn new(generator: impl Generate + 'static) -> Self {
        Self {
            inner: Rc::new(generator),
        }
    }

    pub fn from_fn<F>(kind: GeneratorKind, f: F) -> Self
    where
        F: Fn(&Value, &mut State) -> Result<Value> + 'static,
    {
        Self::new(FnGenerator { kind, f })
    }

    pub fn literal(value: impl Into<Value>) -> Self {
        Self::new(Literal(value.into()))
    }

    pub fn run(&self, input: &Value, state: &mut State) -> Result<Value> {
        self.inner.generate(input, state)
    }

    pub fn kind(&self) -> GeneratorKind {
        self.inner.kind()
    }

    pub fn ptr_eq(&self, other: &Generator) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Generator {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generator({:?})", self.kind())
    }
}

struct Literal(Value);

impl Generate for Literal {
    fn generate(&self, _input: &Value, _state: &mut State) -> Result<Value> {
        Ok(self.0.clone())
    }

    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Literal
    }
}

struct FnGenerator<F> {
    kind: GeneratorKind,
    f: F,
}

impl<F> Generate for FnGenerator<F>
where
    F: Fn(&Value, &mut State) -> Result<Value>,
{
    fn generate(&self, input: &Value, state: &mut State) -> Result<Value> {
        (self.f)(input, state)
    }

    fn kind(&self) -> GeneratorKind {
        self.kind
    }
}
