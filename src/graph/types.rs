use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::WordNetError;

/// Matches every relation type when used as a filter entry.
pub const WILDCARD_RELATION: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adverb,
    Adjective,
}

impl PartOfSpeech {
    pub const ALL: [PartOfSpeech; 4] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adverb,
        PartOfSpeech::Adjective,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adverb => "r",
            PartOfSpeech::Adjective => "a",
        }
    }
}

impl FromStr for PartOfSpeech {
    type Err = WordNetError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        match tag {
            "n" => Ok(PartOfSpeech::Noun),
            "v" => Ok(PartOfSpeech::Verb),
            "r" => Ok(PartOfSpeech::Adverb),
            "a" => Ok(PartOfSpeech::Adjective),
            other => Err(WordNetError::invalid_input(format!(
                "unknown part of speech tag {other:?}"
            ))),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A word form paired with an optional sense tag.
///
/// Equality is an *open* match: word forms must be equal, and a missing
/// sense on either side matches any sense on the other. The relation is
/// not transitive, so `Literal` is neither `Eq` nor `Hash`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Literal {
    pub word: String,
    pub sense: Option<String>,
}

impl Literal {
    pub fn new<W: Into<String>, S: Into<String>>(word: W, sense: S) -> Self {
        Self {
            word: word.into(),
            sense: Some(sense.into()),
        }
    }

    pub fn word<W: Into<String>>(word: W) -> Self {
        Self {
            word: word.into(),
            sense: None,
        }
    }

    /// Exact comparison of both fields, absent senses included.
    pub fn same_as(&self, other: &Literal) -> bool {
        self.word == other.word && self.sense == other.sense
    }
}

impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        if self.word != other.word {
            return false;
        }
        match (&self.sense, &other.sense) {
            (Some(a), Some(b)) => a == b,
            _ => true,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sense {
            Some(sense) => write!(f, "{}:{}", self.word, sense),
            None => f.write_str(&self.word),
        }
    }
}

/// A directed, typed edge between two synsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub source: String,
    pub target: String,
    pub relation: String,
    pub source_literal: Option<String>,
    pub target_literal: Option<String>,
}

impl Relation {
    pub fn new<S, T, R>(source: S, target: T, relation: R) -> Self
    where
        S: Into<String>,
        T: Into<String>,
        R: Into<String>,
    {
        Self {
            source: source.into(),
            target: target.into(),
            relation: relation.into(),
            source_literal: None,
            target_literal: None,
        }
    }

    pub fn with_literals<S: Into<String>, T: Into<String>>(
        mut self,
        source_literal: S,
        target_literal: T,
    ) -> Self {
        self.source_literal = Some(source_literal.into());
        self.target_literal = Some(target_literal.into());
        self
    }

    pub fn matches(&self, filter: &str) -> bool {
        filter == WILDCARD_RELATION || self.relation == filter
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -{}-> {}", self.source, self.relation, self.target)
    }
}

/// A node of the network: one sense shared by a group of literals.
///
/// Structural equality covers every field; literal lists compare with the
/// open [`Literal`] match and a NaN information content equals itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synset {
    pub id: String,
    pub pos: PartOfSpeech,
    pub non_lexicalized: bool,
    pub literals: Vec<Literal>,
    pub definition: Option<String>,
    pub usage: Vec<String>,
    pub relations: Vec<Relation>,
    pub stamp: Option<String>,
    pub domain: Option<String>,
    pub pwn20: Vec<String>,
    pub sumo: Option<String>,
    pub sumo_type: Option<String>,
    pub sentiwn_positive: Option<String>,
    pub sentiwn_negative: Option<String>,
    pub sentiwn_objective: Option<String>,
    pub nl: Option<String>,
    #[serde(default, with = "information_content")]
    pub information_content: f64,
}

impl Synset {
    pub fn new<I: Into<String>>(id: I, pos: PartOfSpeech) -> Self {
        Self {
            id: id.into(),
            pos,
            non_lexicalized: false,
            literals: Vec::new(),
            definition: None,
            usage: Vec::new(),
            relations: Vec::new(),
            stamp: None,
            domain: None,
            pwn20: Vec::new(),
            sumo: None,
            sumo_type: None,
            sentiwn_positive: None,
            sentiwn_negative: None,
            sentiwn_objective: None,
            nl: None,
            information_content: 0.0,
        }
    }

    pub fn with_literal(mut self, literal: Literal) -> Self {
        self.literals.push(literal);
        self
    }

    pub fn with_definition<D: Into<String>>(mut self, definition: D) -> Self {
        self.definition = Some(definition.into());
        self
    }

    pub fn with_information_content(mut self, ic: f64) -> Self {
        self.information_content = ic;
        self
    }

    /// Appends an outgoing relation whose source is this synset.
    pub fn with_relation<T, R>(mut self, target: T, relation: R) -> Self
    where
        T: Into<String>,
        R: Into<String>,
    {
        let relation = Relation::new(self.id.clone(), target, relation);
        self.relations.push(relation);
        self
    }

    pub fn contains_literal(&self, literal: &Literal) -> bool {
        self.literals.iter().any(|l| l == literal)
    }

    pub fn is_lexicalized(&self) -> bool {
        !self.literals.is_empty()
    }
}

impl PartialEq for Synset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.pos == other.pos
            && self.non_lexicalized == other.non_lexicalized
            && self.literals == other.literals
            && self.definition == other.definition
            && self.usage == other.usage
            && self.relations == other.relations
            && self.stamp == other.stamp
            && self.domain == other.domain
            && self.pwn20 == other.pwn20
            && self.sumo == other.sumo
            && self.sumo_type == other.sumo_type
            && self.sentiwn_positive == other.sentiwn_positive
            && self.sentiwn_negative == other.sentiwn_negative
            && self.sentiwn_objective == other.sentiwn_objective
            && self.nl == other.nl
            && same_information_content(self.information_content, other.information_content)
    }
}

fn same_information_content(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

/// JSON has no literal for non-finite numbers, so those travel as strings
/// (`"inf"`, `"-inf"`, `"NaN"`).
mod information_content {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Encoded {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.collect_str(value)
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        match Encoded::deserialize(deserializer)? {
            Encoded::Number(value) => Ok(value),
            Encoded::Text(text) => text
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid information content {text:?}"))),
        }
    }
}

impl fmt::Display for Synset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Synset: id={}, pos={}", self.id, self.pos)?;
        if self.non_lexicalized {
            f.write_str(", non-lexicalized")?;
        }
        if let Some(definition) = &self.definition {
            write!(f, ", definition={definition}")?;
        }
        if let Some(domain) = &self.domain {
            write!(f, ", domain={domain}")?;
        }
        for literal in &self.literals {
            write!(f, "\n\t{literal}")?;
        }
        for relation in &self.relations {
            write!(f, "\n\t{relation}")?;
        }
        Ok(())
    }
}
