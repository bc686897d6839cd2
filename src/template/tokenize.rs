// ABOUTME: Tokenization of template text into literal and placeholder segments
// ABOUTME: Recognizes ${path} placeholders, backslash escapes and line positions

use super::error::EvaluationError;

/// A parsed `${...}` placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Trimmed expression text between the braces
    pub expr: String,
    /// Dotted path segments, root first
    pub path: Vec<String>,
    /// Line where the placeholder starts
    pub line: usize,
}

impl Placeholder {
    pub fn root(&self) -> &str {
        &self.path[0]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Placeholder(Placeholder),
}

/// Split template text into segments in a single forward pass.
///
/// A run of `n` backslashes right before `${` yields `n / 2` backslashes;
/// an odd run turns the placeholder into literal text.
pub fn tokenize(text: &str) -> Result<Vec<Segment>, EvaluationError> {
    let bytes = text.as_bytes();
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut line = 1;
    let mut pos = 0;

    while let Some(offset) = text[pos..].find("${") {
        let start = pos + offset;

        let mut backslashes = 0;
        while start - backslashes > pos && bytes[start - backslashes - 1] == b'\\' {
            backslashes += 1;
        }

        let text_end = start - backslashes;
        literal.push_str(&text[pos..text_end]);
        line += count_newlines(&text[pos..text_end]);
        for _ in 0..backslashes / 2 {
            literal.push('\\');
        }

        let body_start = start + 2;

        // Only the `${` itself is escaped; scanning resumes right after it
        if backslashes % 2 == 1 {
            literal.push_str("${");
            pos = body_start;
            continue;
        }

        let close = text[body_start..].find('}').map(|i| body_start + i);
        let close = close.ok_or_else(|| EvaluationError::MalformedSyntax {
            message: "unterminated placeholder".to_string(),
            line,
        })?;

        let expr = &text[body_start..close];
        let placeholder = parse_expression(expr, line)?;

        if !literal.is_empty() {
            segments.push(Segment::Text(std::mem::take(&mut literal)));
        }
        segments.push(Segment::Placeholder(placeholder));

        line += count_newlines(expr);
        pos = close + 1;
    }

    literal.push_str(&text[pos..]);
    if !literal.is_empty() {
        segments.push(Segment::Text(literal));
    }

    Ok(segments)
}

fn parse_expression(expr: &str, line: usize) -> Result<Placeholder, EvaluationError> {
    let trimmed = expr.trim();
    if trimmed.is_empty() {
        return Err(EvaluationError::MalformedSyntax {
            message: "empty placeholder".to_string(),
            line,
        });
    }

    let path: Vec<String> = trimmed.split('.').map(str::to_string).collect();

    let root_ok = is_identifier(&path[0]);
    let members_ok = path[1..]
        .iter()
        .all(|seg| is_identifier(seg) || is_index(seg));

    if !root_ok || !members_ok {
        return Err(EvaluationError::MalformedSyntax {
            message: format!("unsupported expression '{}'", trimmed),
            line,
        });
    }

    Ok(Placeholder {
        expr: trimmed.to_string(),
        path,
        line,
    })
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    }
}

fn is_index(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn count_newlines(s: &str) -> usize {
    s.bytes().filter(|&b| b == b'\n').count()
}
