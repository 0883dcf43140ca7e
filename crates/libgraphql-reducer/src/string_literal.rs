use crate::GraphQLStringParsingError;

/// Converts the raw text of a GraphQL string literal (quotes included) into
/// its unescaped content.
///
/// - Single-line strings (`"..."`) process `\n`, `\r`, `\t`, `\\`, `\"`,
///   `\/`, `\b`, `\f`, `\uXXXX` (fixed 4-digit) and `\u{X...}` (variable
///   length).
/// - Block strings (`"""..."""`) only unescape `\"""` and then apply the
///   common-indentation removal described in the
///   [Block Strings](https://spec.graphql.org/October2021/#sec-String-Value.Block-Strings)
///   section of the GraphQL specification.
pub fn parse_string_literal(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if raw.starts_with("\"\"\"") {
        parse_block_string(raw)
    } else {
        parse_single_line_string(raw)
    }
}

fn parse_single_line_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    let content = raw
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or(GraphQLStringParsingError::UnterminatedString)?;

    let mut result = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(backslash) = rest.find('\\') {
        result.push_str(&rest[..backslash]);
        let escape = &rest[backslash + 1..];
        let (decoded, consumed) = decode_escape(escape)?;
        result.push(decoded);
        rest = &escape[consumed..];
    }
    result.push_str(rest);

    Ok(result)
}

/// Decodes the escape sequence following a `\`, returning the character
/// and the number of bytes of `escape` it spans.
fn decode_escape(escape: &str) -> Result<(char, usize), GraphQLStringParsingError> {
    let Some(first) = escape.chars().next() else {
        return Err(GraphQLStringParsingError::InvalidEscapeSequence(
            "\\".to_string(),
        ));
    };
    let decoded = match first {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        '\\' => '\\',
        '"' => '"',
        '/' => '/',
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'u' => {
            let (decoded, consumed) = decode_unicode_escape(&escape[1..])?;
            return Ok((decoded, consumed + 1));
        },
        other => {
            return Err(GraphQLStringParsingError::InvalidEscapeSequence(format!(
                "\\{other}"
            )));
        },
    };
    Ok((decoded, first.len_utf8()))
}

/// Decodes what follows `\u`: either `{X...}` or exactly four hex digits.
///
/// A fixed-width leading surrogate must be followed by a fixed-width
/// trailing surrogate (`\uD83D\uDE00`); the pair decodes to one character.
fn decode_unicode_escape(
    digits: &str,
) -> Result<(char, usize), GraphQLStringParsingError> {
    if let Some(braced) = digits.strip_prefix('{') {
        let Some(end) = braced.find('}') else {
            return Err(invalid_unicode(format!("\\u{{{braced}")));
        };
        let hex = &braced[..end];
        return hex_value(hex)
            .and_then(char::from_u32)
            .map(|c| (c, end + 2))
            .ok_or_else(|| invalid_unicode(format!("\\u{{{hex}}}")));
    }

    let Some(lead) = fixed_width_value(digits) else {
        let rendered: String = digits.chars().take(4).collect();
        return Err(invalid_unicode(format!("\\u{rendered}")));
    };
    let rendered_lead = format!("\\u{}", &digits[..4]);
    if !(0xD800..=0xDBFF).contains(&lead) {
        return char::from_u32(lead)
            .map(|c| (c, 4))
            .ok_or_else(|| invalid_unicode(rendered_lead));
    }

    let trail = digits[4..]
        .strip_prefix("\\u")
        .and_then(fixed_width_value)
        .filter(|trail| (0xDC00..=0xDFFF).contains(trail));
    let Some(trail) = trail else {
        return Err(invalid_unicode(rendered_lead));
    };
    let code_point = 0x10000 + ((lead - 0xD800) << 10) + (trail - 0xDC00);
    char::from_u32(code_point)
        .map(|c| (c, 10))
        .ok_or_else(|| invalid_unicode(rendered_lead))
}

/// The value of the four hex digits at the start of `digits`.
fn fixed_width_value(digits: &str) -> Option<u32> {
    digits.get(..4).and_then(hex_value)
}

fn hex_value(hex: &str) -> Option<u32> {
    if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

fn invalid_unicode(rendered: String) -> GraphQLStringParsingError {
    GraphQLStringParsingError::InvalidUnicodeEscape(rendered)
}

fn parse_block_string(raw: &str) -> Result<String, GraphQLStringParsingError> {
    if raw.len() < 6 || !raw.ends_with("\"\"\"") {
        return Err(GraphQLStringParsingError::UnterminatedString);
    }
    let content = raw[3..raw.len() - 3].replace("\\\"\"\"", "\"\"\"");

    // Line terminators are `\r\n`, `\n` and a lone `\r`.
    let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = normalized.split('\n').collect();

    let common_indent = lines
        .iter()
        .skip(1)
        .filter_map(|line| {
            let indent = leading_whitespace(line);
            (indent < line.len()).then_some(indent)
        })
        .min();

    let mut result_lines: Vec<&str> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| match common_indent {
            Some(indent) if i > 0 => line.get(indent..).unwrap_or(""),
            _ => line,
        })
        .collect();

    while result_lines.first().is_some_and(|l| leading_whitespace(l) == l.len()) {
        result_lines.remove(0);
    }
    while result_lines.last().is_some_and(|l| leading_whitespace(l) == l.len()) {
        result_lines.pop();
    }

    Ok(result_lines.join("\n"))
}

/// Number of leading space/tab bytes.
fn leading_whitespace(line: &str) -> usize {
    line.bytes().take_while(|b| *b == b' ' || *b == b'\t').count()
}
