//! Reader for the truth-table text format.
//!
//! The accepted subset is:
//!
//! ```text
//! # comment
//! .i 3            variable count (required)
//! .o 1            accepted, not validated
//! .ilb a b c      variable names (optional, defaults to x0 .. x{n-1})
//! .ob f           output name (optional)
//! .p 2            informational
//! 0-1 1           care pattern
//! 11- -           don't-care pattern
//! .e              end of input
//! ```
//!
//! Rows with any other output value are ignored.

use std::io::BufRead;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::error::{Error, FormatError, Result};
use crate::symbols::Variable;
use crate::term::Term;
use crate::truth_table::{TruthTable, TruthTableEntry};

lazy_static! {
    static ref DIRECTIVE: Regex =
        Regex::new(r"^\.(?P<name>[A-Za-z]+)(?:\s+(?P<args>.*))?$").unwrap();
    static ref ROW: Regex = Regex::new(r"^(?P<pattern>\S+)\s+(?P<output>\S+)").unwrap();
}

#[derive(Debug)]
struct Row {
    line: usize,
    pattern: String,
    output: TruthTableEntry,
}

#[derive(Debug, Default)]
struct Header {
    inputs: Option<usize>,
    labels: Option<Vec<String>>,
    output_name: Option<String>,
}

impl Header {
    /// Applies a directive; returns `false` when the directive ends the input.
    fn apply(&mut self, name: &str, args: &str) -> std::result::Result<bool, FormatError> {
        match name {
            "i" => {
                let count = args
                    .parse::<usize>()
                    .map_err(|_| FormatError::InvalidInputCount {
                        value: args.to_string(),
                    })?;
                self.inputs = Some(count);
            }
            "ilb" => {
                self.labels = Some(args.split_whitespace().map(str::to_string).collect());
            }
            "ob" => {
                if !args.is_empty() {
                    self.output_name = Some(args.to_string());
                }
            }
            "o" | "p" => {}
            "e" | "end" => return Ok(false),
            other => warn!("ignoring unsupported directive .{other}"),
        }

        Ok(true)
    }
}

impl TruthTable {
    /// Reads a truth table, stopping at `.e` or the end of the input.
    pub fn parse(contents: &mut dyn BufRead) -> Result<Self> {
        let mut header = Header::default();
        let mut rows: Vec<Row> = Vec::new();

        for (index, line) in contents.lines().enumerate() {
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(captures) = DIRECTIVE.captures(line) {
                let name = &captures["name"];
                let args = captures.name("args").map_or("", |m| m.as_str().trim());

                if header.apply(name, args)? {
                    continue;
                }
                break;
            }

            match ROW.captures(line) {
                Some(captures) => match TruthTableEntry::from_str(&captures["output"]) {
                    Ok(output) => rows.push(Row {
                        line: index + 1,
                        pattern: captures["pattern"].to_string(),
                        output,
                    }),
                    Err(_) => debug!("line {}: ignoring output {}", index + 1, &captures["output"]),
                },
                None => warn!("line {}: ignoring '{line}'", index + 1),
            }
        }

        Self::from_parts(header, rows)
    }

    fn from_parts(header: Header, rows: Vec<Row>) -> Result<Self> {
        let n = header.inputs.ok_or(FormatError::MissingInputCount)?;

        let vars = match header.labels {
            Some(labels) if labels.len() != n => {
                return Err(FormatError::LabelCountMismatch {
                    expected: n,
                    actual: labels.len(),
                }
                .into())
            }
            Some(labels) => Variable::from_names(&labels),
            None => Variable::default_names(n),
        };

        let mut care = Vec::new();
        let mut dont_care = Vec::new();

        for row in rows {
            let term = parse_pattern(&row.pattern, n, row.line)?;

            match row.output {
                TruthTableEntry::True => care.push(term),
                TruthTableEntry::Any => dont_care.push(term),
                TruthTableEntry::False => {}
            }
        }

        debug!(
            "parsed {} variables, {} care and {} don't-care patterns",
            n,
            care.len(),
            dont_care.len()
        );

        Ok(Self {
            vars,
            output_name: header.output_name,
            care,
            dont_care,
        })
    }
}

fn parse_pattern(pattern: &str, n: usize, line: usize) -> std::result::Result<Term, FormatError> {
    let entries = pattern
        .chars()
        .enumerate()
        .map(|(position, character)| {
            TruthTableEntry::from_char(character).ok_or(FormatError::InvalidPatternCharacter {
                line,
                character,
                position,
            })
        })
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if entries.len() != n {
        return Err(FormatError::PatternLengthMismatch {
            line,
            expected: n,
            actual: entries.len(),
        });
    }

    Ok(Term::new(entries))
}

impl FromStr for TruthTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(&mut s.as_bytes())
    }
}
