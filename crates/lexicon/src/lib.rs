//! # Rewrite Lexicon
//!
//! The data that drives rule-based rewriting: filler-phrase substitutions,
//! synonym lists, verb expansions, declarative restructuring patterns,
//! sequencing-marker softeners, and the base list of protected academic
//! terms that must survive any rewrite verbatim.
//!
//! ## What we do
//!
//! - Bundle every rule table into one immutable [`Lexicon`] value that is
//!   built once and injected into the components that consume it.
//! - Track protected terminology through [`TermGuard`] /
//!   [`ProtectedTermSet`], including the byte spans a rewriter must not
//!   touch.
//!
//! ## Invariants worth knowing
//!
//! - The built-in tables are data, not behavior: callers may deserialize a
//!   replacement [`Lexicon`] from JSON and get identical engine semantics.
//! - [`Lexicon::built_in`] is constructed once per process and shared.

mod tables;
mod terms;

pub use terms::{ProtectedTermSet, TermGuard};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One literal find/replace rule used by the filler, expansion, and
/// softening stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    /// The exact phrase to look for.
    pub find: String,
    /// Its replacement; may be empty to delete the phrase outright.
    pub replace: String,
}

impl Substitution {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Substitution {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// A word with the synonyms the lexical-substitution stage may draw from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    pub word: String,
    pub options: Vec<String>,
}

/// A declarative structural rewrite: a regex, a capture-group replacement
/// template, and the probability that the rule fires when it matches.
///
/// Rules are stored as data so a deployment can tune or replace them without
/// touching the rewriter; the transformer compiles `pattern` once at
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternRule {
    pub pattern: String,
    pub replacement: String,
    pub probability: f64,
}

/// Every rule table consumed by the revision engine, plus the base
/// protected-term list.
///
/// The tables are deliberately plain owned data with serde derives; the
/// engine treats a `Lexicon` as read-only after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Terms that must appear verbatim in any rewrite of text containing
    /// them. Callers extend this per request via [`TermGuard::observe`].
    pub protected_terms: Vec<String>,
    /// Filler and over-formal phrases with their (possibly empty)
    /// replacements. Applied to every occurrence, once each.
    pub fillers: Vec<Substitution>,
    /// Words eligible for synonym substitution.
    pub synonyms: Vec<SynonymEntry>,
    /// Concise verbs and their expanded forms. First occurrence only,
    /// intensity-gated.
    pub verb_expansions: Vec<Substitution>,
    /// Structural rewrite rules, applied in order, each gated by its own
    /// probability.
    pub patterns: Vec<PatternRule>,
    /// Enumerative sequencing markers and the transitional phrases that
    /// replace their first occurrence.
    pub softeners: Vec<Substitution>,
}

static BUILT_IN: Lazy<Lexicon> = Lazy::new(Lexicon::from_tables);

impl Lexicon {
    /// The built-in bilingual tables, constructed once per process.
    pub fn built_in() -> &'static Lexicon {
        &BUILT_IN
    }

    /// A lexicon with every table empty. Useful as a builder base and in
    /// tests that want full control over the rules.
    pub fn empty() -> Self {
        Lexicon {
            protected_terms: Vec::new(),
            fillers: Vec::new(),
            synonyms: Vec::new(),
            verb_expansions: Vec::new(),
            patterns: Vec::new(),
            softeners: Vec::new(),
        }
    }

    /// A [`TermGuard`] over this lexicon's protected-term list.
    pub fn term_guard(&self) -> TermGuard {
        TermGuard::new(self.protected_terms.clone())
    }

    pub fn with_protected_terms(mut self, terms: Vec<String>) -> Self {
        self.protected_terms = terms;
        self
    }

    pub fn with_fillers(mut self, fillers: Vec<Substitution>) -> Self {
        self.fillers = fillers;
        self
    }

    pub fn with_synonyms(mut self, synonyms: Vec<SynonymEntry>) -> Self {
        self.synonyms = synonyms;
        self
    }

    pub fn with_verb_expansions(mut self, expansions: Vec<Substitution>) -> Self {
        self.verb_expansions = expansions;
        self
    }

    pub fn with_patterns(mut self, patterns: Vec<PatternRule>) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn with_softeners(mut self, softeners: Vec<Substitution>) -> Self {
        self.softeners = softeners;
        self
    }

    fn from_tables() -> Self {
        Lexicon {
            protected_terms: tables::PROTECTED_TERMS
                .iter()
                .map(|t| t.to_string())
                .collect(),
            fillers: pairs(tables::FILLERS),
            synonyms: tables::SYNONYMS
                .iter()
                .map(|(word, options)| SynonymEntry {
                    word: word.to_string(),
                    options: options.iter().map(|o| o.to_string()).collect(),
                })
                .collect(),
            verb_expansions: pairs(tables::VERB_EXPANSIONS),
            patterns: tables::PATTERNS
                .iter()
                .map(|(pattern, replacement, probability)| PatternRule {
                    pattern: pattern.to_string(),
                    replacement: replacement.to_string(),
                    probability: *probability,
                })
                .collect(),
            softeners: pairs(tables::SOFTENERS),
        }
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Lexicon::built_in().clone()
    }
}

fn pairs(table: &[(&str, &str)]) -> Vec<Substitution> {
    table
        .iter()
        .map(|(find, replace)| Substitution::new(*find, *replace))
        .collect()
}
