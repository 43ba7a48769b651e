use indexmap::IndexMap;

use crate::generator::Generator;
use crate::record::Record;
use crate::value::Value;

/// One attribute entry of a [`GeneratorSpec`].
#[derive(Debug, Clone, PartialEq)]
pub enum SpecNode {
    Literal(Value),
    Gen(Generator),
    Sequence(Vec<SpecNode>),
    Nested(GeneratorSpec),
}

impl SpecNode {
    pub fn is_literal(&self) -> bool {
        matches!(self, SpecNode::Literal(_))
    }

    pub fn is_generator(&self) -> bool {
        matches!(self, SpecNode::Gen(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, SpecNode::Sequence(_))
    }

    pub fn is_nested(&self) -> bool {
        matches!(self, SpecNode::Nested(_))
    }

    /// Generator list of the node.
    ///
    /// A literal becomes one constant generator, a nested spec one generator
    /// yielding the spec marker, and sequences are flattened in order.
    pub fn into_generators(self) -> Vec<Generator> {
        match self {
            SpecNode::Literal(value) => vec![Generator::literal(value)],
            SpecNode::Gen(generator) => vec![generator],
            SpecNode::Sequence(nodes) => nodes
                .into_iter()
                .flat_map(SpecNode::into_generators)
                .collect(),
            SpecNode::Nested(spec) => vec![Generator::literal(Value::Spec(spec))],
        }
    }

    pub fn to_generators(&self) -> Vec<Generator> {
        self.clone().into_generators()
    }
}

impl From<Value> for SpecNode {
    fn from(value: Value) -> Self {
        SpecNode::Literal(value)
    }
}

impl From<Generator> for SpecNode {
    fn from(generator: Generator) -> Self {
        SpecNode::Gen(generator)
    }
}

impl From<Vec<Generator>> for SpecNode {
    fn from(generators: Vec<Generator>) -> Self {
        SpecNode::Sequence(generators.into_iter().map(SpecNode::Gen).collect())
    }
}

impl From<Vec<SpecNode>> for SpecNode {
    fn from(nodes: Vec<SpecNode>) -> Self {
        SpecNode::Sequence(nodes)
    }
}

impl From<GeneratorSpec> for SpecNode {
    fn from(spec: GeneratorSpec) -> Self {
        SpecNode::Nested(spec)
    }
}

impl From<Record> for SpecNode {
    fn from(record: Record) -> Self {
        SpecNode::Literal(Value::Object(record))
    }
}

impl From<&str> for SpecNode {
    fn from(value: &str) -> Self {
        SpecNode::Literal(Value::from(value))
    }
}

impl From<String> for SpecNode {
    fn from(value: String) -> Self {
        SpecNode::Literal(Value::Text(value))
    }
}

impl From<i32> for SpecNode {
    fn from(value: i32) -> Self {
        SpecNode::Literal(Value::from(value))
    }
}

impl From<i64> for SpecNode {
    fn from(value: i64) -> Self {
        SpecNode::Literal(Value::Int(value))
    }
}

impl From<f64> for SpecNode {
    fn from(value: f64) -> Self {
        SpecNode::Literal(Value::Float(value))
    }
}

impl From<bool> for SpecNode {
    fn from(value: bool) -> Self {
        SpecNode::Literal(Value::Bool(value))
    }
}

/// Ordered attribute name to [`SpecNode`] mapping.
///
/// Insertion order decides cross-product nesting: earlier attributes vary
/// slower.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorSpec {
    attributes: IndexMap<String, SpecNode>,
}

impl GeneratorSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(mut self, name: impl Into<String>, node: impl Into<SpecNode>) -> Self {
        self.insert(name, node);
        self
    }

    /// Re-inserting a name replaces its node but keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<SpecNode>) -> Option<SpecNode> {
        self.attributes.insert(name.into(), node.into())
    }

    pub fn get(&self, name: &str) -> Option<&SpecNode> {
        self.attributes.get(name)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecNode)> {
        self.attributes
            .iter()
            .map(|(name, node)| (name.as_str(), node))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    /// Spec setting every visible attribute of `record` to its literal value.
    pub fn from_record(record: &Record) -> Self {
        Self {
            attributes: record
                .to_fields()
                .into_iter()
                .map(|(name, value)| (name, SpecNode::Literal(value)))
                .collect(),
        }
    }
}

impl<K: Into<String>, V: Into<SpecNode>> FromIterator<(K, V)> for GeneratorSpec {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            attributes: iter
                .into_iter()
                .map(|(name, node)| (name.into(), node.into()))
                .collect(),
        }
    }
}

/// Group result marker: run the wrapped generators against the slot value and
/// keep the combined output as a single value, optionally joined into one text.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    generators: Vec<Generator>,
    sequence: bool,
    join: bool,
}

impl Group {
    /// A sequence node combines its members into an array; a single generator
    /// keeps its own result.
    pub fn new(node: impl Into<SpecNode>, join: bool) -> Self {
        let node = node.into();
        let sequence = node.is_sequence();
        Self {
            generators: node.into_generators(),
            sequence,
            join,
        }
    }

    pub fn generators(&self) -> &[Generator] {
        &self.generators
    }

    pub fn is_sequence(&self) -> bool {
        self.sequence
    }

    pub fn join(&self) -> bool {
        self.join
    }
}
