//! Inline `style` attribute parsing.
//!
//! Turns `color: red; -webkit-line-clamp: 2` into an ordered list of
//! camelCase declarations (`color`, `WebkitLineClamp`). Only the inline
//! declaration-list syntax is understood; values are kept verbatim.

use thiserror::Error;

/// Ordered style declarations, camelCase property → value.
pub type StyleMap = Vec<(String, String)>;

/// Malformed inline style text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StyleError {
    /// A `/*` without a closing `*/`.
    #[error("End of comment missing (offset {offset})")]
    UnterminatedComment {
        /// Byte offset of the comment opener.
        offset: usize,
    },
    /// A declaration without a `:` separator.
    #[error("property missing ':' in `{declaration}`")]
    MissingColon {
        /// The offending declaration text.
        declaration: String,
    },
}

/// Parses inline style text.
///
/// Later declarations of the same property replace earlier ones in place.
pub fn parse_style(input: &str) -> Result<StyleMap, StyleError> {
    let mut map = StyleMap::new();
    for declaration in split_declarations(input)? {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let Some((name, value)) = declaration.split_once(':') else {
            return Err(StyleError::MissingColon {
                declaration: declaration.to_string(),
            });
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        let property = camel_case(name);
        let value = value.trim().to_string();
        match map.iter_mut().find(|(key, _)| *key == property) {
            Some(entry) => entry.1 = value,
            None => map.push((property, value)),
        }
    }
    Ok(map)
}

/// Splits on `;` outside quotes and parentheses, dropping comments.
fn split_declarations(input: &str) -> Result<Vec<String>, StyleError> {
    let mut declarations = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut chars = input.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if let Some(open) = quote {
            current.push(c);
            if c == '\\' {
                if let Some((_, escaped)) = chars.next() {
                    current.push(escaped);
                }
            } else if c == open {
                quote = None;
            }
            continue;
        }

        match c {
            '/' if chars.peek().is_some_and(|(_, next)| *next == '*') => {
                chars.next();
                let mut closed = false;
                while let Some((_, inner)) = chars.next() {
                    if inner == '*' && chars.peek().is_some_and(|(_, next)| *next == '/') {
                        chars.next();
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(StyleError::UnterminatedComment { offset });
                }
            }
            '"' | '\'' => {
                quote = Some(c);
                current.push(c);
            }
            '(' => {
                depth += 1;
                current.push(c);
            }
            ')' => {
                depth = depth.saturating_sub(1);
                current.push(c);
            }
            ';' if depth == 0 => declarations.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    declarations.push(current);
    Ok(declarations)
}

/// `-ms-transform` → `msTransform`, `-webkit-x` → `WebkitX`.
pub fn camel_case(name: &str) -> String {
    let name = match name.strip_prefix("-ms-") {
        Some(rest) => format!("ms-{rest}"),
        None => name.to_string(),
    };

    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '-'
            && let Some(next) = chars.peek().copied()
            && next.is_ascii_lowercase()
        {
            chars.next();
            out.push(next.to_ascii_uppercase());
            continue;
        }
        out.push(c);
    }
    out
}
