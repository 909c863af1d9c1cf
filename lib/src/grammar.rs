use std::collections::{BTreeMap, BTreeSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{command::CommandTable, error::Error};

/// Replacement strings keyed by the symbol they rewrite
pub type Rules = BTreeMap<char, String>;

/// Names of the curves available through [Curve::builtin]
pub const BUILTIN_CURVES: &[&str] = &["dragon", "hilbert"];

/// A context-free L-system with single-symbol predecessors.
///
/// Symbols without a rule are terminals: they survive rewriting unchanged and may
/// still mean something to the turtle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "GrammarDef", into = "GrammarDef")
)]
pub struct Grammar {
    axiom: String,
    rules: Rules,
    alphabet: BTreeSet<char>,
}

impl Grammar {
    pub fn new(axiom: impl Into<String>, rules: Rules) -> Self {
        let axiom = axiom.into();
        let alphabet = axiom
            .chars()
            .chain(rules.keys().copied())
            .chain(rules.values().flat_map(|replacement| replacement.chars()))
            .collect();
        Self {
            axiom,
            rules,
            alphabet,
        }
    }

    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Every symbol that can appear in any generation
    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    /// Symbols of the alphabet that have no rule
    pub fn terminals(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet
            .iter()
            .copied()
            .filter(|symbol| !self.rules.contains_key(symbol))
    }
}

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct GrammarDef {
    axiom: String,
    rules: Rules,
}

#[cfg(feature = "serde")]
impl From<GrammarDef> for Grammar {
    fn from(GrammarDef { axiom, rules }: GrammarDef) -> Self {
        Self::new(axiom, rules)
    }
}

#[cfg(feature = "serde")]
impl From<Grammar> for GrammarDef {
    fn from(Grammar { axiom, rules, .. }: Grammar) -> Self {
        Self { axiom, rules }
    }
}

/// A named grammar along with the table used to draw it
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Curve {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub grammar: Grammar,
    #[cfg_attr(feature = "serde", serde(default))]
    pub commands: CommandTable,
}

impl Curve {
    /// Look up one of the [BUILTIN_CURVES]
    pub fn builtin(name: &str) -> Result<Self, Error> {
        let (axiom, rules): (&str, &[(char, &str)]) = match name {
            "dragon" => ("FX", &[('X', "X+YF"), ('Y', "FX-Y")]),
            "hilbert" => ("X", &[('X', "+YF-XFX-FY+"), ('Y', "-XF+YFY+FX-")]),
            other => return Err(Error::UnknownCurve(other.to_string())),
        };

        Ok(Self {
            name: name.to_string(),
            grammar: Grammar::new(
                axiom,
                rules
                    .iter()
                    .map(|(symbol, replacement)| (*symbol, replacement.to_string()))
                    .collect(),
            ),
            commands: CommandTable::default(),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn alphabet_covers_axiom_and_rules() {
        let dragon = Curve::builtin("dragon").unwrap();
        assert_eq!(
            dragon.grammar.alphabet().iter().collect::<String>(),
            "+-FXY"
        );
        assert_eq!(dragon.grammar.terminals().collect::<String>(), "+-F");
    }

    #[test]
    fn every_builtin_resolves() {
        for name in BUILTIN_CURVES {
            assert_eq!(Curve::builtin(name).unwrap().name, *name);
        }
    }

    #[test]
    fn unknown_curve_is_rejected() {
        assert_eq!(
            Curve::builtin("koch"),
            Err(Error::UnknownCurve("koch".to_string()))
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_curve_is_correct() {
        let json = r#"{"name":"dragon","axiom":"FX","rules":{"X":"X+YF","Y":"FX-Y"}}"#;
        let curve = serde_json::from_str::<Curve>(json).unwrap();
        assert_eq!(curve, Curve::builtin("dragon").unwrap());
    }
}
