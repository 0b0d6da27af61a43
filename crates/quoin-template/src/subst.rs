/*
 * subst.rs
 * Copyright (c) 2025 Posit, PBC
 */

//! Single-level placeholder substitution.
//!
//! `{identifier}` tokens are replaced by the value the lookup returns for
//! the identifier; `{{` and `}}` produce literal braces. Identifiers carry
//! no structure: no nesting, no expressions.

use crate::error::{TemplateError, TemplateResult};

/// Substitute every `{key}` token in `input` using `lookup`.
///
/// # Errors
///
/// - [`TemplateError::PlaceholderNotFound`] when `lookup` has no binding for
///   a token
/// - [`TemplateError::BadPlaceholder`] for malformed syntax: an unterminated
///   `{`, a `{` inside a field, an empty `{}`, or a stray `}`
pub fn substitute<F>(input: &str, lookup: F) -> TemplateResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut key = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') => {
                            return Err(TemplateError::BadPlaceholder {
                                message: format!("'{{' inside placeholder: {{{key}"),
                            });
                        }
                        Some(ch) => key.push(ch),
                        None => {
                            return Err(TemplateError::BadPlaceholder {
                                message: format!("unterminated placeholder: {{{key}"),
                            });
                        }
                    }
                }
                if key.is_empty() {
                    return Err(TemplateError::BadPlaceholder {
                        message: "empty placeholder".to_string(),
                    });
                }
                match lookup(&key) {
                    Some(value) => out.push_str(&value),
                    None => return Err(TemplateError::PlaceholderNotFound { name: key }),
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(TemplateError::BadPlaceholder {
                        message: "single '}' encountered".to_string(),
                    });
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}
