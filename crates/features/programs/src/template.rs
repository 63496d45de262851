//! `{{name}}` placeholder substitution for the bundled program templates.

use crate::error::ProgramError;

/// Replaces every `{{name}}` in `template` with its value from `values`.
///
/// Substitution is a single left-to-right pass, so values are never rescanned. A placeholder
/// without a value is an error rather than being left in the output.
pub(crate) fn fill(template: &str, values: &[(&str, &str)]) -> Result<String, ProgramError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return Ok(out);
        };

        let name = &after[..end];
        let value = values
            .iter()
            .find_map(|(key, value)| (*key == name).then_some(*value))
            .ok_or_else(|| ProgramError::MissingPlaceholder {
                name: name.to_owned(),
                context: None,
            })?;
        out.push_str(value);
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

/// A Rust string literal; `Debug` for `str` escapes quotes, backslashes and control characters.
pub(crate) fn rust_string(value: &str) -> String {
    format!("{value:?}")
}

/// A JSON string literal, valid as a TypeScript string literal.
pub(crate) fn ts_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| String::from("\"\""))
}
