// src/input/parser.rs

//! Parser for the plain-text problem format.
//!
//! ```text
//! n m
//! a_1 b_1
//! ...
//! a_m b_m
//! ```
//!
//! Tokens are separated by arbitrary whitespace, so line breaks are not
//! significant; they are only tracked for error messages. Anything after the
//! `m`-th pair is ignored.

use std::str::FromStr;

use tracing::debug;

use crate::errors::{CourseOrderError, Result};
use crate::input::model::RawProblem;
use crate::types::{Course, Requirement};

/// Parse a complete problem from its textual form.
pub fn parse_problem(input: &str) -> Result<RawProblem> {
    let mut tokens = Tokens::new(input);

    let course_count: u32 = tokens.next_number("number of courses `n`")?;
    let declared_requirements: usize = tokens.next_number("number of requirements `m`")?;

    // `m` is untrusted; each pair needs at least four bytes (`a b\n`).
    let mut requirements = Vec::with_capacity(declared_requirements.min(input.len() / 4));
    for i in 1..=declared_requirements {
        let before: Course = tokens.next_number(&format!("course `a` of requirement #{i}"))?;
        let after: Course = tokens.next_number(&format!("course `b` of requirement #{i}"))?;
        requirements.push(Requirement::new(before, after));
    }

    if let Some((line, tok)) = tokens.next() {
        debug!(line, token = tok, "ignoring trailing input after last requirement");
    }

    debug!(
        course_count,
        requirements = requirements.len(),
        "parsed problem"
    );

    Ok(RawProblem {
        course_count,
        declared_requirements,
        requirements,
    })
}

/// Whitespace-separated tokens tagged with their 1-based line number.
struct Tokens<'a> {
    lines: std::iter::Enumerate<std::str::Lines<'a>>,
    current: Option<(usize, std::str::SplitWhitespace<'a>)>,
    last_line: usize,
}

impl<'a> Tokens<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            lines: input.lines().enumerate(),
            current: None,
            last_line: 1,
        }
    }

    fn next_number<T: FromStr>(&mut self, what: &str) -> Result<T> {
        match self.next() {
            Some((line, tok)) => tok.parse::<T>().map_err(|_| CourseOrderError::ParseError {
                line,
                msg: format!("expected {what} as a non-negative integer, found '{tok}'"),
            }),
            None => Err(CourseOrderError::ParseError {
                line: self.last_line,
                msg: format!("unexpected end of input, expected {what}"),
            }),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((line, words)) = self.current.as_mut() {
                if let Some(tok) = words.next() {
                    return Some((*line, tok));
                }
            }
            let (idx, text) = self.lines.next()?;
            self.last_line = idx + 1;
            self.current = Some((idx + 1, text.split_whitespace()));
        }
    }
}
