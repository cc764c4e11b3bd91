//! Line-based prompts read from any [`BufRead`].

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::*;
use kennel_common::text;
use thiserror::Error;

use crate::terminal::{colors, print};

#[derive(Debug, Error)]
pub enum InputError {
    /// The input reached end of file.
    #[error("input closed")]
    Closed,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Input<R> {
    reader: R,
}

impl<R: BufRead> Input<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Prints `label?> ` and reads one line without its line ending.
    pub fn line<W: Write>(&mut self, out: &mut W, label: &str) -> Result<String, InputError> {
        write!(out, "{}{} ", label.color(colors::PRIMARY), "?>".color(colors::SEPARATOR))?;
        out.flush()?;

        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            writeln!(out)?;
            return Err(InputError::Closed);
        }

        Ok(buf.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Like [`Input::line`] but asks again until the answer is not blank.
    pub fn text<W: Write>(&mut self, out: &mut W, label: &str) -> Result<String, InputError> {
        loop {
            let answer: String = self.line(out, label)?;
            if !text::is_blank(&answer) {
                return Ok(answer);
            }
            print::error(out, format!("{label} can't be empty"))?;
        }
    }

    /// Asks again until the answer parses as a `T`.
    pub fn number<T, W>(&mut self, out: &mut W, label: &str) -> Result<T, InputError>
    where
        T: FromStr,
        W: Write,
    {
        loop {
            let answer: String = self.line(out, label)?;
            match answer.trim().parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => print::error(
                    out,
                    format!("'{}' is not a valid {}", answer.trim(), label.to_lowercase()),
                )?,
            }
        }
    }
}
