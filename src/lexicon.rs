// src/lexicon.rs
//! Word-stem lexicon (pt-BR by default).
//!
//! Polarity entries are prefixes matched with `starts_with` against stemmed
//! tokens. Negations, intensifiers and adversatives are exact-membership sets;
//! their entries go through [`stem_word`] when the lexicon is built so they
//! compare equal to tokens produced by [`crate::text::tokenize`].

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::text::{normalize, stem_word};

const POSITIVE: &[&str] = &[
    "bom", "bem", "otim", "excelen", "perfeit", "maravilh", "fantast", "sensacion", "agrad",
    "satisf", "eficient", "rapid", "impec", "top", "recomend", "util", "facil", "legal",
    "feliz", "vale", "surpreend", "atencios", "gentil", "educad", "profissional", "confiavel",
    "acert", "claro", "bonit", "limp", "qualific", "divertid", "eficaz",
];

const NEGATIVE: &[&str] = &[
    "ruim", "pessim", "lent", "demor", "deficien", "insuport", "horriv", "falh", "complic",
    "dific", "frustr", "terriv", "decepcion", "pior", "errad", "quebrad", "estrag", "caro",
    "absurd", "abus", "lixo", "pobr", "mal", "odi", "desrespeit", "atras", "suj", "insucess",
    "inaceit", "ineficient", "insatisf", "irrit", "inconvenient", "problem", "confus",
];

const NEGATION: &[&str] = &["nao", "nunca", "jamais", "nem", "sem"];

const INTENSIFIER: &[&str] = &[
    "muito",
    "extremamente",
    "super",
    "demais",
    "totalmente",
    "altamente",
    "bastante",
];

const ADVERSATIVE: &[&str] = &["mas", "porem", "contudo", "entretanto", "todavia"];

static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(Lexicon::portuguese);

/// Process-wide built-in lexicon (read-only, built on first use).
pub fn default_lexicon() -> &'static Lexicon {
    &DEFAULT_LEXICON
}

/// Immutable stem sets used by the scoring pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: Vec<String>,
    negative: Vec<String>,
    negation: HashSet<String>,
    intensifier: HashSet<String>,
    adversative: HashSet<String>,
}

impl Lexicon {
    /// Built-in Brazilian Portuguese lexicon.
    pub fn portuguese() -> Self {
        Self::from_lists(POSITIVE, NEGATIVE, NEGATION, INTENSIFIER, ADVERSATIVE)
    }

    /// Build from caller-supplied word lists.
    ///
    /// Polarity prefixes are normalized (lowercase, accents folded) but not
    /// stemmed; modifier words are stemmed.
    /// Entries that reduce to nothing are skipped.
    pub fn from_lists<S: AsRef<str>>(
        positive: &[S],
        negative: &[S],
        negation: &[S],
        intensifier: &[S],
        adversative: &[S],
    ) -> Self {
        fn prefixes<S: AsRef<str>>(items: &[S]) -> Vec<String> {
            let mut out: Vec<String> = Vec::with_capacity(items.len());
            for it in items {
                let p = normalize(it.as_ref());
                if !p.is_empty() && !out.contains(&p) {
                    out.push(p);
                }
            }
            out
        }
        fn stems<S: AsRef<str>>(items: &[S]) -> HashSet<String> {
            items
                .iter()
                .map(|w| stem_word(w.as_ref()))
                .filter(|w| !w.is_empty())
                .collect()
        }

        Self {
            positive: prefixes(positive),
            negative: prefixes(negative),
            negation: stems(negation),
            intensifier: stems(intensifier),
            adversative: stems(adversative),
        }
    }

    /// True if any positive stem is a prefix of `token`.
    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.iter().any(|p| token.starts_with(p.as_str()))
    }

    /// True if any negative stem is a prefix of `token`.
    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.iter().any(|p| token.starts_with(p.as_str()))
    }

    /// Exact membership of a stemmed token in the negation set.
    pub fn is_negation(&self, token: &str) -> bool {
        self.negation.contains(token)
    }

    /// Exact membership of a stemmed token in the intensifier set.
    pub fn is_intensifier(&self, token: &str) -> bool {
        self.intensifier.contains(token)
    }

    /// Exact membership of a stemmed token in the adversative set.
    pub fn is_adversative(&self, token: &str) -> bool {
        self.adversative.contains(token)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::portuguese()
    }
}
