//! Configuration line parser.
//!
//! Grammar of the one-line configuration:
//!
//! ```text
//! config := group (' ' group)*
//! group  := symbol ('+' symbol)*
//! symbol := any bytes except ' ', '+' and NUL (possibly empty)
//! ```
//!
//! Group `i` describes button `i`; the symbols of a group are pressed
//! together.  `a+CTRL b` configures two buttons: the first sends `a` and
//! `CTRL`, the second sends `b`.
//!
//! NUL bytes are not data: they are dropped without closing anything, so
//! a zero-padded buffer parses the same as its meaningful prefix.  The
//! parser never rejects input; empty symbols and empty groups are kept
//! and left for the resolver to degrade.
//!
//! The result owns a cleaned copy of the text plus symbol and group spans,
//! so no allocation is needed and every capacity is bounded by
//! [`CONFIG_BUF_LEN`].

use crate::config::CONFIG_BUF_LEN;
use heapless::{String, Vec};

/// Upper bound on symbols (and groups): every byte a separator, plus one.
pub const MAX_TOKENS: usize = CONFIG_BUF_LEN + 1;

/// Separator between the symbols of one group.
pub const SYMBOL_SEPARATOR: u8 = b'+';

/// Separator between groups.
pub const GROUP_SEPARATOR: u8 = b' ';

/// Replacement for bytes outside ASCII.
const REPLACEMENT: char = '?';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Span {
    start: u16,
    end: u16,
}

impl Span {
    fn range(self) -> core::ops::Range<usize> {
        self.start as usize..self.end as usize
    }
}

/// Parsed configuration: ordered groups of ordered symbols.
#[derive(Clone, Debug)]
pub struct ParsedConfig {
    /// Cleaned text (NULs removed, non-ASCII replaced, separators removed).
    text: String<CONFIG_BUF_LEN>,
    /// Byte spans into `text`, one per symbol, in encounter order.
    symbols: Vec<Span, MAX_TOKENS>,
    /// Index spans into `symbols`, one per group.
    groups: Vec<Span, MAX_TOKENS>,
}

/// Parse a raw configuration buffer.
///
/// Only the first [`CONFIG_BUF_LEN`] bytes are considered.  The number of
/// groups is always the number of spaces seen plus one.
pub fn parse(raw: &[u8]) -> ParsedConfig {
    let mut parsed = ParsedConfig {
        text: String::new(),
        symbols: Vec::new(),
        groups: Vec::new(),
    };
    let mut symbol_start = 0u16;
    let mut group_start = 0u16;

    for &byte in raw.iter().take(CONFIG_BUF_LEN) {
        match byte {
            0 => {}
            SYMBOL_SEPARATOR => parsed.close_symbol(&mut symbol_start),
            GROUP_SEPARATOR => {
                parsed.close_symbol(&mut symbol_start);
                parsed.close_group(&mut group_start);
            }
            _ => parsed.push_byte(byte),
        }
    }

    parsed.close_symbol(&mut symbol_start);
    parsed.close_group(&mut group_start);

    #[cfg(feature = "defmt")]
    defmt::debug!(
        "config parsed: {} groups, {} symbols",
        parsed.groups.len(),
        parsed.symbols.len()
    );

    parsed
}

impl ParsedConfig {
    fn push_byte(&mut self, byte: u8) {
        let c = if byte.is_ascii() {
            char::from(byte)
        } else {
            REPLACEMENT
        };
        // Cannot overflow: one char per input byte, input capped at capacity.
        let _ = self.text.push(c);
    }

    fn close_symbol(&mut self, start: &mut u16) {
        let end = self.text.len() as u16;
        let _ = self.symbols.push(Span { start: *start, end });
        *start = end;
    }

    fn close_group(&mut self, start: &mut u16) {
        let end = self.symbols.len() as u16;
        let _ = self.groups.push(Span { start: *start, end });
        *start = end;
    }

    /// Number of groups (= configured buttons before line binding).
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Group at `index`, in configuration order.
    pub fn group(&self, index: usize) -> Option<Group<'_>> {
        self.groups.get(index).map(|&span| Group { config: self, span })
    }

    /// Iterate over groups in configuration order.
    pub fn groups(&self) -> impl Iterator<Item = Group<'_>> + '_ {
        self.groups.iter().map(move |&span| Group { config: self, span })
    }

    fn symbol_text(&self, span: Span) -> &str {
        &self.text[span.range()]
    }
}

/// One group of symbols, borrowed from a [`ParsedConfig`].
#[derive(Clone, Copy)]
pub struct Group<'a> {
    config: &'a ParsedConfig,
    span: Span,
}

impl<'a> Group<'a> {
    /// Number of symbols in this group (empty symbols included).
    pub fn len(&self) -> usize {
        (self.span.end - self.span.start) as usize
    }

    /// A group always holds at least one (possibly empty) symbol.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Symbol at `index` within the group.
    pub fn symbol(&self, index: usize) -> Option<&'a str> {
        let config = self.config;
        config.symbols[self.span.range()]
            .get(index)
            .map(|&s| config.symbol_text(s))
    }

    /// Iterate over the group's symbols in order.
    pub fn symbols(&self) -> impl Iterator<Item = &'a str> + 'a {
        let config = self.config;
        config.symbols[self.span.range()]
            .iter()
            .map(move |&s| config.symbol_text(s))
    }
}

impl core::fmt::Debug for Group<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.symbols()).finish()
    }
}
