use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operations understood by the turtle
///
/// Branching (push/pop of the turtle state) would slot in here as two more variants.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Command {
    /// Move one step along the heading, leaving a segment behind
    Forward,
    /// Turn counter-clockwise by the turn angle
    TurnPositive,
    /// Turn clockwise by the turn angle
    TurnNegative,
    /// Multiply the step length by the step scaler
    ScaleUp,
    /// Divide the step length by the step scaler
    ScaleDown,
}

/// Maps input symbols onto [Command]s.
///
/// Symbols that are not in the table are skipped when drawing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct CommandTable(BTreeMap<char, Command>);

impl Default for CommandTable {
    fn default() -> Self {
        Self(BTreeMap::from([
            ('F', Command::Forward),
            ('+', Command::TurnPositive),
            ('-', Command::TurnNegative),
            ('*', Command::ScaleUp),
            ('/', Command::ScaleDown),
        ]))
    }
}

impl CommandTable {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn insert(&mut self, symbol: char, command: Command) -> Option<Command> {
        self.0.insert(symbol, command)
    }

    pub fn with(mut self, symbol: char, command: Command) -> Self {
        self.insert(symbol, command);
        self
    }

    pub fn get(&self, symbol: char) -> Option<Command> {
        self.0.get(&symbol).copied()
    }

    /// First symbol (in symbol order) bound to the command
    pub fn symbol_for(&self, command: Command) -> Option<char> {
        self.0
            .iter()
            .find(|(_, bound)| **bound == command)
            .map(|(symbol, _)| *symbol)
    }

    /// The command that shortens the step under this scaler.
    ///
    /// Scaling up by a factor below one shrinks, as does scaling down by a factor above one.
    pub fn shrinking_command(step_scaler: f64) -> Command {
        if step_scaler < 1. {
            Command::ScaleUp
        } else {
            Command::ScaleDown
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, Command)> + '_ {
        self.0.iter().map(|(symbol, command)| (*symbol, *command))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_table_parses_all_commands() {
        let table = CommandTable::default();
        assert_eq!(table.get('F'), Some(Command::Forward));
        assert_eq!(table.get('+'), Some(Command::TurnPositive));
        assert_eq!(table.get('-'), Some(Command::TurnNegative));
        assert_eq!(table.get('*'), Some(Command::ScaleUp));
        assert_eq!(table.get('/'), Some(Command::ScaleDown));
        assert_eq!(table.get('X'), None);
    }

    #[test]
    fn table_is_extensible() {
        let table = CommandTable::default().with('G', Command::Forward);
        assert_eq!(table.get('G'), Some(Command::Forward));
        assert_eq!(table.symbol_for(Command::Forward), Some('F'));
        assert_eq!(CommandTable::empty().symbol_for(Command::Forward), None);
    }

    #[test]
    fn shrinking_command_follows_scaler() {
        assert_eq!(CommandTable::shrinking_command(0.5), Command::ScaleUp);
        assert_eq!(
            CommandTable::shrinking_command(std::f64::consts::SQRT_2),
            Command::ScaleDown
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn serde_command_table_is_correct() {
        let table = CommandTable::empty()
            .with('F', Command::Forward)
            .with('+', Command::TurnPositive);
        let json = r#"{"+":"turn-positive","F":"forward"}"#;

        assert_eq!(serde_json::to_string(&table).unwrap(), json);
        assert_eq!(serde_json::from_str::<CommandTable>(json).unwrap(), table);
    }
}
