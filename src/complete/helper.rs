use crate::process::builtin::BUILTINS;
use crate::tokenize::PIPE;
use rustyline::completion::{Completer, FilenameCompleter, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::HistoryHinter;
use rustyline::Context;
use rustyline_derive::{Helper, Hinter, Validator};
use std::borrow::Cow::{self, Owned};

/// Line-editor helper: builtin names at command position, file names
/// elsewhere, and inline hints from history.
#[derive(Helper, Hinter, Validator)]
pub struct ConduitHelper {
    files: FilenameCompleter,
    #[rustyline(Hinter)]
    hinter: HistoryHinter,
}

impl ConduitHelper {
    pub fn new() -> Self {
        Self {
            files: FilenameCompleter::new(),
            hinter: HistoryHinter::new(),
        }
    }
}

impl Default for ConduitHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Completer for ConduitHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, word) = current_word(line, pos);
        if is_command_position(&line[..start]) {
            let names = builtin_candidates(word);
            if !names.is_empty() {
                return Ok((start, names));
            }
        }
        self.files.complete(line, pos, ctx)
    }
}

impl Highlighter for ConduitHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(format!("\x1b[2m{hint}\x1b[m"))
    }
}

/// Start offset and text of the word being typed at `pos`.
fn current_word(line: &str, pos: usize) -> (usize, &str) {
    let head = &line[..pos];
    let start = head
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace() || *c == PIPE)
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    (start, &head[start..])
}

/// True when nothing but whitespace precedes the word within its stage.
fn is_command_position(before: &str) -> bool {
    before
        .rsplit(PIPE)
        .next()
        .is_none_or(|stage| stage.trim().is_empty())
}

fn builtin_candidates(prefix: &str) -> Vec<Pair> {
    BUILTINS
        .iter()
        .filter(|(name, _)| name.starts_with(prefix))
        .map(|(name, _)| Pair {
            display: name.to_string(),
            replacement: format!("{name} "),
        })
        .collect()
}
