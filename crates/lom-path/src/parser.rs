//! Canonical path parser.
//!
//! ```text
//! path := root step*
//! root := "live_set" | "live_app" | "this_device" | "control_surfaces" INDEX
//! step := COLLECTION INDEX | "master_track" | NAME INDEX | NAME
//! ```
//!
//! Only the known collections feed index projections; any other indexed
//! step is kept as [`Segment::Other`].

use crate::types::*;
use crate::util::is_valid_index;
use crate::PathError;

/// Recursive-descent parser over the whitespace-separated tokens of a path.
pub struct PathParser<'a> {
    tokens: Vec<&'a str>,
    pos: usize,
}

impl<'a> PathParser<'a> {
    /// Parse a canonical path.
    ///
    /// The host reports paths wrapped in double quotes; the quotes are
    /// stripped before tokenizing.
    pub fn parse(input: &'a str) -> Result<LomPath, PathError> {
        let trimmed = input.trim();
        let unquoted = trimmed
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .unwrap_or(trimmed);
        let mut parser = Self {
            tokens: unquoted.split_whitespace().collect(),
            pos: 0,
        };
        parser.parse_path()
    }

    fn parse_path(&mut self) -> Result<LomPath, PathError> {
        if self.is_at_end() {
            return Err(PathError::Empty);
        }
        let root = self.parse_root()?;

        let mut segments = Vec::new();
        while !self.is_at_end() {
            segments.push(self.parse_step()?);
        }

        Ok(LomPath::new(root, segments))
    }

    fn parse_root(&mut self) -> Result<Root, PathError> {
        let token = self.advance().ok_or(PathError::Empty)?;
        match token {
            "live_set" => Ok(Root::LiveSet),
            "live_app" => Ok(Root::LiveApp),
            "this_device" => Ok(Root::ThisDevice),
            "control_surfaces" => Ok(Root::ControlSurface(self.parse_index(token)?)),
            other => Err(PathError::UnknownRoot(other.to_string())),
        }
    }

    fn parse_step(&mut self) -> Result<Segment, PathError> {
        let token = self.advance().ok_or(PathError::Empty)?;

        if token == "master_track" {
            return Ok(Segment::MasterTrack);
        }
        if let Some(collection) = Collection::from_token(token) {
            let index = self.parse_index(token)?;
            return Ok(Segment::Indexed(collection, index));
        }
        if token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PathError::UnexpectedIndex(token.to_string()));
        }
        if !is_name(token) {
            return Err(PathError::InvalidToken(token.to_string()));
        }
        if self.peek().is_some_and(|next| next.bytes().all(|b| b.is_ascii_digit())) {
            let index = self.parse_index(token)?;
            return Ok(Segment::Other(token.to_string(), index));
        }
        Ok(Segment::Named(token.to_string()))
    }

    fn parse_index(&mut self, after: &str) -> Result<u32, PathError> {
        let token = match self.peek() {
            Some(t) if t.bytes().all(|b| b.is_ascii_digit()) => t,
            _ => return Err(PathError::MissingIndex(after.to_string())),
        };
        self.pos += 1;
        if !is_valid_index(token) {
            return Err(PathError::InvalidIndex(token.to_string()));
        }
        token
            .parse::<u32>()
            .map_err(|_| PathError::InvalidIndex(token.to_string()))
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<&'a str> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }
}

/// `[a-z_][a-z0-9_]*`
fn is_name(token: &str) -> bool {
    let mut bytes = token.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_lowercase() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
}
