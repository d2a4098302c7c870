//! Whitespace-separated value reading from standard input, scanf style:
//! values may be split across lines however the user likes.

use crate::error::{Error, Result};
use std::collections::VecDeque;
use std::io::BufRead;
use std::str::FromStr;

/// Pulls whitespace-separated tokens from a line-oriented reader on demand
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading more lines as needed. `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }

    /// Parse the next token as `T`; `what` names the value in errors
    pub fn parse<T: FromStr>(&mut self, what: &'static str) -> Result<T> {
        let token = self
            .next_token()?
            .ok_or(Error::MissingInput { what })?;
        token
            .parse()
            .map_err(|_| Error::InvalidInput { what, token })
    }

    /// Parse the next token as a finite `f64` (rejects `inf` and `NaN`)
    pub fn parse_finite(&mut self, what: &'static str) -> Result<f64> {
        let token = self
            .next_token()?
            .ok_or(Error::MissingInput { what })?;
        match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(Error::InvalidInput { what, token }),
        }
    }
}
