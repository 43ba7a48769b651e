use serde::{Deserialize, Serialize};
use varietal_core::{Error, Generator, GeneratorKind, RangeArgs, Result, Value};
use varietal_generate::{Random, RandomSource, constant, repeat};

use crate::words;

/// A static word list exposed through generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Constant generators for the words in `range`, which defaults to the
    /// whole dictionary. A range past the end tiles the words cyclically.
    pub fn list(&self, range: impl Into<RangeArgs>) -> Result<Vec<Generator>> {
        self.ensure_words()?;
        let (from, to) = range.into().resolve(0, self.words.len() as i64);
        let from = usize::try_from(from.max(0)).unwrap_or_default();
        let to = usize::try_from(to.max(0)).unwrap_or_default();
        Ok((from..to)
            .map(|index| constant(self.words[index % self.words.len()].as_str()))
            .collect())
    }

    /// Generator picking one word per call, from `random` or a fresh
    /// entropy-seeded engine.
    pub fn element(&self, random: Option<&Random>) -> Result<Generator> {
        self.ensure_words()?;
        let random = random.cloned().unwrap_or_else(Random::from_entropy);
        random.element(self.words.iter().map(String::as_str))
    }

    /// `count` (default 5) random picks.
    pub fn elements(&self, count: Option<i64>, random: Option<&Random>) -> Result<Vec<Generator>> {
        let element = self.element(random)?;
        Ok(repeat(count.unwrap_or(5), element))
    }

    fn ensure_words(&self) -> Result<()> {
        if self.words.is_empty() {
            return Err(Error::EmptyInput("dictionary has no words".to_string()));
        }
        Ok(())
    }
}

pub fn names() -> Dictionary {
    Dictionary::new(words::FIRST_NAMES.iter().copied())
}

pub fn surnames() -> Dictionary {
    Dictionary::new(words::SURNAMES.iter().copied())
}

pub fn passwords() -> Dictionary {
    Dictionary::new(words::PASSWORDS.iter().copied())
}

pub fn domains() -> Dictionary {
    Dictionary::new(words::DOMAINS.iter().copied())
}

pub fn common_domains() -> Dictionary {
    Dictionary::new(words::COMMON_DOMAINS.iter().copied())
}

pub fn lorem() -> Dictionary {
    Dictionary::new(words::LOREM_WORDS.iter().copied())
}

/// The first `count` lorem ipsum words (all of them by default) as one
/// text.
pub fn lorem_ipsum(count: Option<usize>) -> Generator {
    let count = count.unwrap_or(words::LOREM_WORDS.len());
    let text = words::LOREM_WORDS
        .iter()
        .take(count)
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    constant(text)
}

/// Random lorem ipsum text, available on every [`RandomSource`].
pub trait RandomLorem: RandomSource {
    /// Starts at the lower bound of `range` and takes a random number of
    /// words drawn from `range` (default: the whole word list).
    fn lorem_ipsum(&self, range: impl Into<RangeArgs>) -> Generator {
        let total = words::LOREM_WORDS.len();
        let (from, to) = range.into().resolve(0, total as i64);
        let source = self.clone();
        Generator::from_fn(GeneratorKind::Random, move |_, _| {
            let start = usize::try_from(from.max(0)).unwrap_or_default().min(total);
            let taken = usize::try_from(source.next_int(from, to).max(0)).unwrap_or_default();
            let end = start.saturating_add(taken).min(total);
            Ok(Value::Text(words::LOREM_WORDS[start..end].join(" ")))
        })
    }
}

impl<R: RandomSource> RandomLorem for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use varietal_core::State;

    fn run_all(generators: &[Generator]) -> Vec<Value> {
        let mut state = State::new();
        generators
            .iter()
            .map(|generator| generator.run(&Value::Null, &mut state).expect("word"))
            .collect()
    }

    #[test]
    fn list_defaults_to_every_word() {
        let dict = Dictionary::new(["a", "b", "c"]);
        let values = run_all(&dict.list(()).expect("list"));
        assert_eq!(values, vec![Value::text("a"), Value::text("b"), Value::text("c")]);
    }

    #[test]
    fn list_slices_with_two_bounds() {
        let dict = Dictionary::new(["a", "b", "c", "d"]);
        let values = run_all(&dict.list((1, 3)).expect("list"));
        assert_eq!(values, vec![Value::text("b"), Value::text("c")]);
    }

    #[test]
    fn empty_dictionary_is_rejected() {
        let dict = Dictionary::new(Vec::<String>::new());
        assert!(matches!(dict.list(()), Err(Error::EmptyInput(_))));
        assert!(matches!(dict.element(None), Err(Error::EmptyInput(_))));
    }

    #[test]
    fn elements_default_to_five() {
        let random = Random::new(3);
        let picks = names().elements(None, Some(&random)).expect("elements");
        assert_eq!(picks.len(), 5);
        for value in run_all(&picks) {
            let name = value.as_str().expect("text").to_string();
            assert!(words::FIRST_NAMES.contains(&name.as_str()));
        }
    }

    #[test]
    fn lorem_ipsum_takes_leading_words() {
        let values = run_all(&[lorem_ipsum(Some(3))]);
        assert_eq!(values, vec![Value::text("Lorem ipsum dolor")]);
    }

    #[test]
    fn random_lorem_stays_within_the_list() {
        let random = Random::new(8);
        let generator = random.lorem_ipsum((2, 6));
        let mut state = State::new();
        for _ in 0..20 {
            let value = generator.run(&Value::Null, &mut state).expect("lorem");
            let count = value.as_str().expect("text").split_whitespace().count();
            assert!(count < 6);
        }
    }

    #[test]
    fn dictionary_reads_from_json_lists() {
        let dict: Dictionary = serde_json::from_str(r#"["red", "green"]"#).expect("json list");
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.words()[1], "green");
    }
}
