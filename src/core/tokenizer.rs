use thiserror::Error;

/// Historical argument vector size.
pub const MAX_ARGS: usize = 64;
/// Historical line buffer size in bytes.
pub const MAX_INPUT: usize = 1488;

const DELIMITERS: [char; 4] = [' ', '\t', '\n', '\r'];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("too many arguments (limit is {limit})")]
    ArgumentOverflow { limit: usize },
    #[error("input too long ({len} bytes, limit is {limit})")]
    InputTooLong { len: usize, limit: usize },
}

/// Splits input lines into argument tokens borrowed from the line.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    max_args: usize,
    max_input: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(MAX_ARGS, MAX_INPUT)
    }
}

impl Tokenizer {
    pub fn new(max_args: usize, max_input: usize) -> Self {
        Self {
            max_args,
            max_input,
        }
    }

    pub fn tokenize<'a>(&self, line: &'a str) -> Result<Vec<&'a str>, TokenizeError> {
        let len = line.trim_end_matches(['\n', '\r']).len();
        if len > self.max_input {
            return Err(TokenizeError::InputTooLong {
                len,
                limit: self.max_input,
            });
        }

        let mut tokens = Vec::new();
        for token in line.split(DELIMITERS).filter(|t| !t.is_empty()) {
            if tokens.len() == self.max_args {
                return Err(TokenizeError::ArgumentOverflow {
                    limit: self.max_args,
                });
            }
            tokens.push(token);
        }

        Ok(tokens)
    }
}

/// Tokenizes with the default limits.
pub fn tokenize(line: &str) -> Result<Vec<&str>, TokenizeError> {
    Tokenizer::default().tokenize(line)
}
