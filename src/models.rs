//! Core data types shared by the validator, serializer and CLI.

use crate::validation::Violation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Line terminator style of the source CSV file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndOfLine {
    /// Let the parser detect the terminator
    #[default]
    Auto,
    /// `\n`
    Unix,
    /// `\r\n`
    Dos,
}

impl EndOfLine {
    /// Character written as `eol_flag` in the config file
    pub fn flag(&self) -> char {
        match self {
            EndOfLine::Auto => 'a',
            EndOfLine::Unix => 'u',
            EndOfLine::Dos => 'd',
        }
    }

    /// Human readable description, as the parser prints it
    pub fn describe(&self) -> &'static str {
        match self {
            EndOfLine::Auto => "AUTO",
            EndOfLine::Unix => "UNIX (\\n)",
            EndOfLine::Dos => "DOS (CR+LF)",
        }
    }
}

impl fmt::Display for EndOfLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EndOfLine::Auto => "auto",
            EndOfLine::Unix => "unix",
            EndOfLine::Dos => "dos",
        };
        f.write_str(name)
    }
}

impl FromStr for EndOfLine {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parsed = match trimmed.to_ascii_lowercase().as_str() {
            "auto" | "a" => Some(EndOfLine::Auto),
            "unix" | "u" => Some(EndOfLine::Unix),
            "dos" | "d" => Some(EndOfLine::Dos),
            _ => None,
        };

        parsed.ok_or_else(|| Violation::InvalidEndOfLine {
            value: trimmed.to_string(),
        })
    }
}
