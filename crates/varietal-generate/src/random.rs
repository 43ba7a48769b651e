use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rand::RngCore;
use rand::seq::SliceRandom;
use varietal_core::{Error, Generator, GeneratorKind, RangeArgs, Result, Value};

const MODULUS: u64 = 1 << 32;
const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;

/// Linear congruential engine, `x' = (a * x + c) mod 2^32` with the glibc
/// multiplier and increment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    state: u64,
}

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    pub fn next_raw(&mut self) -> u32 {
        self.state = (MULTIPLIER * self.state + INCREMENT) % MODULUS;
        self.state as u32
    }

    /// Advances the stream and maps the new state onto `[min, max)`.
    ///
    /// Returns `min` when the range is empty. The span is scaled as `f64`,
    /// so bounds as wide as the whole `i64` range do not overflow.
    pub fn next_int(&mut self, min: i64, max: i64) -> i64 {
        let x = f64::from(self.next_raw());
        let span = max as f64 - min as f64;
        (min as f64 + x / MODULUS as f64 * span).floor() as i64
    }
}

impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_raw());
        let low = u64::from(self.next_raw());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Capability every random engine offers to generator helpers.
///
/// Helper modules extend it with their own traits implemented for every
/// `RandomSource` (see `RandomText`), so new random generators are added by
/// bringing a trait into scope rather than by registering functions.
pub trait RandomSource: Clone + 'static {
    /// Draws the next integer in `[min, max)`.
    fn next_int(&self, min: i64, max: i64) -> i64;

    /// Generator yielding a fresh integer on every call; bounds default to
    /// `[0, 1000)`.
    fn int(&self, range: impl Into<RangeArgs>) -> Generator {
        let (min, max) = range.into().resolve(0, 1000);
        let source = self.clone();
        Generator::from_fn(GeneratorKind::Random, move |_, _| {
            Ok(Value::Int(source.next_int(min, max)))
        })
    }

    /// Generator picking one of `items` on every call.
    fn element<V: Into<Value>>(&self, items: impl IntoIterator<Item = V>) -> Result<Generator> {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(Error::EmptyInput(
                "cannot pick an element from an empty collection".to_string(),
            ));
        }
        let source = self.clone();
        Ok(Generator::from_fn(GeneratorKind::Random, move |_, _| {
            let index = source.next_int(0, items.len() as i64);
            Ok(items
                .get(usize::try_from(index).unwrap_or_default())
                .cloned()
                .unwrap_or_default())
        }))
    }
}

/// Shared handle to one [`Lcg`] stream.
///
/// Every generator built from a handle (or its clones) advances the same
/// stream, so the order of calls decides the values drawn.
#[derive(Clone)]
pub struct Random {
    seed: u64,
    engine: Rc<RefCell<Lcg>>,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            engine: Rc::new(RefCell::new(Lcg::new(seed))),
        }
    }

    /// Engine seeded from the thread-local entropy source.
    pub fn from_entropy() -> Self {
        Self::new(u64::from(rand::random::<u32>()))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generator yielding `items` in a fresh random order on every call.
    pub fn shuffle<V: Into<Value>>(&self, items: impl IntoIterator<Item = V>) -> Generator {
        let items: Vec<Value> = items.into_iter().map(Into::into).collect();
        let engine = Rc::clone(&self.engine);
        Generator::from_fn(GeneratorKind::Random, move |_, _| {
            let mut values = items.clone();
            values.shuffle(&mut *engine.borrow_mut());
            Ok(Value::Array(values))
        })
    }
}

impl RandomSource for Random {
    fn next_int(&self, min: i64, max: i64) -> i64 {
        self.engine.borrow_mut().next_int(min, max)
    }
}

impl fmt::Debug for Random {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Random").field("seed", &self.seed).finish()
    }
}
