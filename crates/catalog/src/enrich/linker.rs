//! Cross-reference linking.
//!
//! Builds a mnemonic → URL table over the whole corpus and rewrites free text so every
//! whole-word mnemonic occurrence becomes a hyperlink.
//!
//! # Matching
//!
//! All mnemonics are compiled into one alternation, longest first, so `ADDI` is tried before
//! `ADD` and `FADD.D` before `FADD`. Each alternative is escaped and carries its own boundary
//! assertions: `\b` next to a word character, `\B` next to a non-word character. The latter keeps
//! PowerISA record forms such as `add.` whole-word.
//!
//! # Escaping
//!
//! Matching runs on the raw text; unmatched segments and link labels are HTML-escaped as they
//! are emitted. A mnemonic therefore never matches inside an entity such as `&lt;`.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::config::SelfLinkPolicy;

/// Compiled pattern size limit; a few thousand mnemonics exceed the default.
const REGEX_SIZE_LIMIT: usize = 64 * 1024 * 1024;

/// Escapes `& < > " '` for HTML text and attribute contexts.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Regex alternative for one mnemonic with side-appropriate boundaries.
fn alternative(mnemonic: &str) -> String {
    let edge = |c: Option<char>| {
        if c.is_some_and(is_word_char) {
            r"\b"
        } else {
            r"\B"
        }
    };
    format!(
        "{}{}{}",
        edge(mnemonic.chars().next()),
        regex::escape(mnemonic),
        edge(mnemonic.chars().next_back())
    )
}

/// Per-call linking context.
#[derive(Debug, Clone, Copy)]
pub struct LinkContext<'a> {
    /// Architecture of the text being linked; its own pages are preferred.
    pub architecture: &'a str,
    /// Mnemonic of the instruction that owns the text.
    pub mnemonic: &'a str,
    /// Whether to link the owner's own mnemonic.
    pub self_links: SelfLinkPolicy,
    /// Prefix prepended to every relative URL.
    pub href_prefix: &'a str,
}

/// Mnemonic → URL lookup plus the compiled matcher.
#[derive(Debug)]
pub struct CrossRefIndex {
    global: HashMap<String, String>,
    by_arch: HashMap<String, HashMap<String, String>>,
    pattern: Option<Regex>,
}

impl CrossRefIndex {
    /// Builds the index from `(architecture, mnemonic, rel_url)` triples.
    ///
    /// Triples must come in a deterministic order: the first URL seen for a mnemonic wins,
    /// both per architecture and globally.
    ///
    /// # Errors
    ///
    /// Returns a [`regex::Error`] if the combined pattern cannot be compiled.
    pub fn build<'a, I>(entries: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str)>,
    {
        let mut global: HashMap<String, String> = HashMap::new();
        let mut by_arch: HashMap<String, HashMap<String, String>> = HashMap::new();

        for (arch, mnemonic, url) in entries {
            let mnemonic = mnemonic.trim();
            if mnemonic.is_empty() {
                continue;
            }
            let _ = by_arch
                .entry(arch.to_string())
                .or_default()
                .entry(mnemonic.to_string())
                .or_insert_with(|| url.to_string());
            let _ = global
                .entry(mnemonic.to_string())
                .or_insert_with(|| url.to_string());
        }

        let mut mnemonics: Vec<&str> = global.keys().map(String::as_str).collect();
        mnemonics.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });

        let pattern = if mnemonics.is_empty() {
            None
        } else {
            let alternation = mnemonics
                .iter()
                .map(|m| alternative(m))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&format!("(?:{alternation})"))
                    .size_limit(REGEX_SIZE_LIMIT)
                    .dfa_size_limit(REGEX_SIZE_LIMIT)
                    .build()?,
            )
        };

        Ok(Self {
            global,
            by_arch,
            pattern,
        })
    }

    /// URL for `mnemonic`, preferring a page in `architecture`.
    pub fn url_for(&self, architecture: &str, mnemonic: &str) -> Option<&str> {
        self.by_arch
            .get(architecture)
            .and_then(|m| m.get(mnemonic))
            .or_else(|| self.global.get(mnemonic))
            .map(String::as_str)
    }

    /// Number of distinct mnemonics known to the index.
    pub fn len(&self) -> usize {
        self.global.len()
    }

    /// True when the index holds no mnemonics.
    pub fn is_empty(&self) -> bool {
        self.global.is_empty()
    }

    /// Escapes `text` and turns every whole-word mnemonic into a hyperlink.
    pub fn link(&self, text: &str, ctx: &LinkContext<'_>) -> String {
        let Some(pattern) = &self.pattern else {
            return escape_html(text);
        };

        let mut out = String::with_capacity(text.len() + text.len() / 2);
        let mut last = 0;

        for found in pattern.find_iter(text) {
            let word = found.as_str();
            if ctx.self_links == SelfLinkPolicy::Skip && word == ctx.mnemonic.trim() {
                continue;
            }
            let Some(url) = self.url_for(ctx.architecture, word) else {
                continue;
            };

            escape_into(&mut out, &text[last..found.start()]);
            out.push_str("<a href=\"");
            escape_into(&mut out, ctx.href_prefix);
            escape_into(&mut out, url);
            out.push_str("\" class=\"xref\">");
            escape_into(&mut out, word);
            out.push_str("</a>");
            last = found.end();
        }

        escape_into(&mut out, &text[last..]);
        out
    }
}
