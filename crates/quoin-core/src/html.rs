/*
 * html.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * HTML output helpers for quoin.
 */

//! HTML output helpers.
//!
//! [`prettify`] re-indents rendered markup deterministically: one tag or
//! text run per line, children one level deeper. It is a formatter, not a
//! validator; mismatched markup comes out as it went in, just re-indented.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::BuildConfig;
use crate::error::Result;

/// Elements that never take a closing tag and so never open an indent level.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Load a raw `index.html` page from a source directory, if present.
pub fn load_index_page(source_dir: &Path, cfg: &BuildConfig) -> Result<Option<String>> {
    let path = source_dir.join(&cfg.index_basename);
    if path.is_file() {
        debug!(file = %path.display(), "raw index page");
        Ok(Some(fs::read_to_string(path)?))
    } else {
        Ok(None)
    }
}

/// Re-indent an HTML document.
///
/// Tags and text runs each get their own line, indented `indent` spaces per
/// nesting level. Void elements, comments, and declarations do not nest;
/// unmatched closing tags clamp at depth zero.
pub fn prettify(html: &str, indent: usize) -> String {
    let mut out = String::with_capacity(html.len());
    let mut depth = 0usize;

    for token in tokenize(html) {
        match token {
            Token::Text(text) => {
                for line in text.lines() {
                    push_line(&mut out, depth, indent, line.trim());
                }
            }
            Token::Close(raw) => {
                depth = depth.saturating_sub(1);
                push_line(&mut out, depth, indent, raw.trim());
            }
            Token::Open { raw, nests } => {
                push_line(&mut out, depth, indent, raw.trim());
                if nests {
                    depth += 1;
                }
            }
            Token::Other(raw) => {
                push_line(&mut out, depth, indent, raw.trim());
            }
        }
    }

    out
}

enum Token<'a> {
    /// A text run between tags.
    Text(&'a str),
    /// An opening tag; `nests` is false for void and self-closed elements.
    Open { raw: &'a str, nests: bool },
    /// A closing tag.
    Close(&'a str),
    /// Doctype, comment, or other declaration.
    Other(&'a str),
}

fn tokenize(html: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = html;

    while !rest.is_empty() {
        match rest.find('<') {
            None => {
                tokens.push(Token::Text(rest));
                break;
            }
            Some(start) => {
                if start > 0 {
                    tokens.push(Token::Text(&rest[..start]));
                }
                let tag_rest = &rest[start..];
                let end = if tag_rest.starts_with("<!--") {
                    tag_rest.find("-->").map(|i| i + 2)
                } else {
                    tag_rest.find('>')
                };
                let Some(end) = end else {
                    // Unterminated tag: emit as text and stop.
                    tokens.push(Token::Text(tag_rest));
                    break;
                };
                let raw = &tag_rest[..=end];
                tokens.push(classify(raw));
                rest = &tag_rest[end + 1..];
            }
        }
    }

    tokens
}

fn classify(raw: &str) -> Token<'_> {
    if raw.starts_with("</") {
        Token::Close(raw)
    } else if raw.starts_with("<!") || raw.starts_with("<?") {
        Token::Other(raw)
    } else {
        let name: String = raw
            .trim_start_matches('<')
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
            .collect();
        let name = name.to_ascii_lowercase();
        let nests = !raw.trim_end_matches('>').ends_with('/')
            && !VOID_ELEMENTS.contains(&name.as_str());
        Token::Open { raw, nests }
    }
}

fn push_line(out: &mut String, depth: usize, indent: usize, line: &str) {
    if line.is_empty() {
        return;
    }
    for _ in 0..depth * indent {
        out.push(' ');
    }
    out.push_str(line);
    out.push('\n');
}
