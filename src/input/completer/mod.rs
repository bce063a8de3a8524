use std::borrow::Cow;

mod command;

use command::CommandCompleter;
use crate::highlight::Palette;

use rustyline::{
    completion::{Completer, FilenameCompleter, Pair},
    highlight::Highlighter,
    hint::Hinter,
    validate::Validator,
    Context, Helper,
};

/// Completes command names in the first word and file names everywhere else.
pub struct ShellHelper {
    command_completer: CommandCompleter,
    path_completer: FilenameCompleter,
    palette: Palette,
}

impl ShellHelper {
    pub fn new(palette: Palette) -> Self {
        ShellHelper {
            command_completer: CommandCompleter::new(),
            path_completer: FilenameCompleter::new(),
            palette,
        }
    }
}

impl Helper for ShellHelper {}

impl Highlighter for ShellHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        _default: bool,
    ) -> Cow<'b, str> {
        Cow::Owned(self.palette.prompt(prompt))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;
}

impl Validator for ShellHelper {}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before_cursor = &line[..pos];
        let word_start = before_cursor
            .rfind([' ', '\t'])
            .map_or(0, |i| i + 1);

        if before_cursor[..word_start].trim().is_empty() {
            let word = &before_cursor[word_start..];
            Ok((word_start, self.command_completer.complete_command(word)))
        } else {
            self.path_completer.complete(line, pos, ctx)
        }
    }
}
