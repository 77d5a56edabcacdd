//! Structured header-parameter mini-parser.
//!
//! Decodes the `key1=value1; key2="quoted; value"; key3` syntax shared by
//! `Content-Type` and `Content-Disposition`. Parsing is a single
//! character-by-character pass that never fails: malformed input degrades to
//! best-effort key/value extraction.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Key,
    Value,
}

/// Parses a `;`-separated parameter string into an ordered key/value list.
///
/// Keys are trimmed and empty keys are dropped; a key without `=` maps to an
/// empty value. Inside a value, `\` escapes the next character and `"`
/// toggles quote mode unless the value already began unquoted, in which case
/// it is literal.
pub fn parse_parameters(input: &str) -> Vec<(String, String)> {
    let mut params = Vec::new();
    let mut key = String::new();
    let mut value = String::new();
    let mut state = State::Key;
    let mut in_quotes = false;
    let mut escaped = false;
    let mut value_begun = false;
    let mut begun_unquoted = false;

    for ch in input.chars() {
        if state == State::Value && escaped {
            value.push(ch);
            escaped = false;
            value_begun = true;
            if !in_quotes {
                begun_unquoted = true;
            }
            continue;
        }

        match (state, ch) {
            (State::Key, '=') => state = State::Value,
            (State::Key, ';') | (State::Value, ';') if !in_quotes => {
                flush(&mut params, &mut key, &mut value);
                state = State::Key;
                value_begun = false;
                begun_unquoted = false;
            }
            (State::Key, other) => key.push(other),
            (State::Value, '\\') => escaped = true,
            (State::Value, '"') if in_quotes => in_quotes = false,
            (State::Value, '"') if !begun_unquoted => {
                in_quotes = true;
                value_begun = true;
            }
            // Leading spaces between `=` and the first value character are
            // transport noise, not value content.
            (State::Value, ' ') if !in_quotes && !value_begun => {}
            (State::Value, other) => {
                value.push(other);
                value_begun = true;
                if !in_quotes {
                    begun_unquoted = true;
                }
            }
        }
    }

    flush(&mut params, &mut key, &mut value);
    params
}

/// Returns the first value whose key matches `name` case-insensitively.
pub fn parameter<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}

fn flush(params: &mut Vec<(String, String)>, key: &mut String, value: &mut String) {
    let trimmed = key.trim();
    if !trimmed.is_empty() {
        params.push((trimmed.to_owned(), std::mem::take(value)));
    } else {
        value.clear();
    }
    key.clear();
}
