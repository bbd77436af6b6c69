//! Graph Text Parser
//!
//! Parses the persisted text form `V = {n1, n2, ...}; A = {(a1, b1), ...};`
//! into raw token sets. Whitespace between tokens is insignificant, which
//! covers both historical separator variants (`", "` and `","`). The whole
//! input must match; trailing garbage is a format error.

use crate::error::{Error, Result};
use crate::graph::VertexValue;
use std::collections::HashSet;

/// Raw token sets produced by a successful parse.
///
/// Duplicates collapse silently (set semantics). Referential checks between
/// the two sets are the graph's job, not the parser's.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedText {
    pub vertices: HashSet<VertexValue>,
    pub edges: HashSet<(VertexValue, VertexValue)>,
}

/// Graph Text Parser
pub struct TextParser {
    input: String,
    pos: usize,
}

impl TextParser {
    /// Create a new parser
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            pos: 0,
        }
    }

    /// Parse the whole text: vertex section, edge section, end of input
    pub fn parse(&mut self) -> Result<ParsedText> {
        let vertices = self.parse_vertex_section()?;
        let edges = self.parse_edge_section()?;
        self.expect_end()?;

        Ok(ParsedText { vertices, edges })
    }

    /// vertexSection: 'V' '=' '{' [integer (',' integer)*] '}' ';'
    fn parse_vertex_section(&mut self) -> Result<HashSet<VertexValue>> {
        self.expect_char('V')?;
        self.expect_char('=')?;
        self.expect_char('{')?;

        let mut values = HashSet::new();
        if !self.try_char('}') {
            loop {
                values.insert(VertexValue::new(self.parse_integer()?));
                if !self.try_char(',') {
                    break;
                }
            }
            self.expect_char('}')?;
        }
        self.expect_char(';')?;

        Ok(values)
    }

    /// edgeSection: 'A' '=' '{' [pair (',' pair)*] '}' ';'
    fn parse_edge_section(&mut self) -> Result<HashSet<(VertexValue, VertexValue)>> {
        self.expect_char('A')?;
        self.expect_char('=')?;
        self.expect_char('{')?;

        let mut pairs = HashSet::new();
        if !self.try_char('}') {
            loop {
                pairs.insert(self.parse_pair()?);
                if !self.try_char(',') {
                    break;
                }
            }
            self.expect_char('}')?;
        }
        self.expect_char(';')?;

        Ok(pairs)
    }

    /// pair: '(' integer ',' integer ')'
    fn parse_pair(&mut self) -> Result<(VertexValue, VertexValue)> {
        self.expect_char('(')?;
        let from = self.parse_integer()?;
        self.expect_char(',')?;
        let to = self.parse_integer()?;
        self.expect_char(')')?;

        Ok((VertexValue::new(from), VertexValue::new(to)))
    }

    /// Require that nothing but whitespace remains
    fn expect_end(&mut self) -> Result<()> {
        self.skip_whitespace();
        if self.pos < self.input.len() {
            let rest: String = self.input[self.pos..].chars().take(16).collect();
            return Err(Error::Format(format!(
                "Trailing input after graph text: {:?}",
                rest
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Helper Methods
    // ========================================================================

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn try_char(&mut self, c: char) -> bool {
        self.skip_whitespace();
        if self.peek_char() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect_char(&mut self, c: char) -> Result<()> {
        self.skip_whitespace();
        if self.peek_char() == Some(c) {
            self.pos += c.len_utf8();
            Ok(())
        } else {
            Err(Error::Format(format!(
                "Expected '{}', got {:?}",
                c,
                self.peek_char()
            )))
        }
    }

    /// Parse a non-negative integer literal as u64
    fn parse_integer(&mut self) -> Result<u64> {
        self.skip_whitespace();
        let start = self.pos;

        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                self.pos += 1;
            } else {
                break;
            }
        }

        if self.pos == start {
            return Err(Error::Format(format!(
                "Expected integer, got {:?}",
                self.peek_char()
            )));
        }

        self.input[start..self.pos].parse().map_err(|_| {
            Error::Format(format!(
                "Integer literal out of range: {}",
                &self.input[start..self.pos]
            ))
        })
    }
}

/// Parse a complete graph text into raw token sets
pub fn parse(text: &str) -> Result<ParsedText> {
    let mut parser = TextParser::new(text);
    parser.parse()
}

/// Parse a single parenthesized pair, e.g. `(1, 2)`, as typed at the console.
///
/// Grammar failures surface as invalid-argument errors rather than format
/// errors: the pair never came from a file.
pub fn parse_edge_literal(input: &str) -> Result<(VertexValue, VertexValue)> {
    let mut parser = TextParser::new(input);
    let parsed = parser.parse_pair().and_then(|pair| {
        parser.expect_end()?;
        Ok(pair)
    });

    match parsed {
        Ok(pair) => Ok(pair),
        Err(Error::Format(msg)) => Err(Error::InvalidArgument(msg)),
        Err(other) => Err(other),
    }
}
