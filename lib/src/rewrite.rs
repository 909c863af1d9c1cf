use log::{debug, warn};

use crate::{error::Error, grammar::Rules};

/// Rewrite every symbol of `input` once, in order.
///
/// Symbols without a rule are copied through unchanged. The output is built in a single
/// buffer sized up front, so a generation costs time linear in input plus output.
pub fn expand(rules: &Rules, input: &str) -> String {
    let mut output = String::with_capacity(expanded_len(rules, input));
    expand_into(rules, input, &mut output);
    output
}

/// Length in bytes of `expand(rules, input)`, without building it
pub fn expanded_len(rules: &Rules, input: &str) -> usize {
    input
        .chars()
        .map(|symbol| {
            rules
                .get(&symbol)
                .map_or_else(|| symbol.len_utf8(), String::len)
        })
        .sum()
}

fn expand_into(rules: &Rules, input: &str, output: &mut String) {
    for symbol in input.chars() {
        match rules.get(&symbol) {
            Some(replacement) => output.push_str(replacement),
            None => output.push(symbol),
        }
    }
}

/// Bounds on how far [Generations] may grow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    /// Log a warning once a generation exceeds this many bytes
    pub warn_len: usize,
    /// Refuse to build a generation over this many bytes
    pub max_len: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            warn_len: 1 << 20,
            max_len: 1 << 26,
        }
    }
}

/// Successive generations of an axiom under a set of rules.
///
/// Generation 0 is the first expansion of the axiom. When a prefix symbol is given, it is
/// prepended to every generation after the first, so the prefixes of earlier generations
/// accumulate as terminals.
#[derive(Debug, Clone)]
pub struct Generations<'a> {
    rules: &'a Rules,
    previous: Option<String>,
    axiom: &'a str,
    prefix: Option<char>,
    limits: Limits,
    index: usize,
}

impl<'a> Generations<'a> {
    pub fn new(rules: &'a Rules, axiom: &'a str) -> Self {
        Self {
            rules,
            previous: None,
            axiom,
            prefix: None,
            limits: Limits::default(),
            index: 0,
        }
    }

    pub fn with_prefix(mut self, prefix: Option<char>) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    fn grow(&self) -> Result<String, Error> {
        let (input, prefix) = match &self.previous {
            Some(previous) => (previous.as_str(), self.prefix),
            None => (self.axiom, None),
        };

        let len = expanded_len(self.rules, input) + prefix.map_or(0, char::len_utf8);
        if len > self.limits.max_len {
            return Err(Error::GenerationTooLarge {
                generation: self.index,
                len,
                limit: self.limits.max_len,
            });
        }
        if len > self.limits.warn_len {
            warn!(
                "Generation {} holds {} bytes, drawing it may take a while",
                self.index, len
            );
        }

        let mut output = String::with_capacity(len);
        if let Some(prefix) = prefix {
            output.push(prefix);
        }
        expand_into(self.rules, input, &mut output);
        debug!("Generation {}: {} bytes", self.index, output.len());
        Ok(output)
    }
}

impl Iterator for Generations<'_> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let generation = match self.grow() {
            Ok(generation) => generation,
            Err(err) => return Some(Err(err)),
        };
        self.index += 1;
        self.previous = Some(generation.clone());
        Some(Ok(generation))
    }
}
