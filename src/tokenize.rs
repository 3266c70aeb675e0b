//! Splits raw input lines into pipeline stages and argument vectors.
//!
//! Only whitespace separates arguments and only `|` separates stages. There is
//! no quoting or escaping, so an argument can never contain whitespace.

use crate::error::{ShellError, ShellResult};

/// Character that separates pipeline stages.
pub const PIPE: char = '|';

/// One parsed command: index 0 is the program or builtin name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    argv: Vec<String>,
}

impl Command {
    /// Build a command from an argument vector; `None` if `argv` is empty.
    pub fn new(argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            return None;
        }
        Some(Self { argv })
    }

    pub fn name(&self) -> &str {
        &self.argv[0]
    }

    /// Arguments following the name.
    pub fn args(&self) -> &[String] {
        &self.argv[1..]
    }

    pub fn argv(&self) -> &[String] {
        &self.argv
    }
}

/// Ordered stages of a single input line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<Command>,
}

impl Pipeline {
    pub fn new(stages: Vec<Command>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[Command] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

/// Parse a line into a pipeline.
///
/// A blank line yields an empty pipeline. A stage with no words, such as the
/// middle of `a || b` or the tail of `a |`, is reported with its index.
pub fn parse(line: &str) -> ShellResult<Pipeline> {
    if line.trim().is_empty() {
        return Ok(Pipeline::default());
    }

    let mut stages = Vec::new();
    for (index, raw) in line.split(PIPE).enumerate() {
        let command = Command::new(split_words(raw)).ok_or(ShellError::EmptyStage { index })?;
        stages.push(command);
    }

    Ok(Pipeline::new(stages))
}

fn split_words(stage: &str) -> Vec<String> {
    stage.split_whitespace().map(String::from).collect()
}
