//! Variable interpolation for strings
//!
//! Steps may reference task-file variables with the `${var}` syntax.
//! Only declared variables are substituted; the process environment is not read.

use crate::error::{InterpolationError, InterpolationResult};
use regex::Regex;
use std::collections::BTreeMap;

/// Interpolate variables in a string
///
/// Supports:
/// - `${var}` - replaced with the value of `var`
/// - `$${var}` - the literal text `${var}`
///
/// Undefined variables are an error. Substituted values are not
/// interpolated again.
pub fn interpolate(s: &str, vars: &BTreeMap<String, String>) -> InterpolationResult<String> {
    let re = Regex::new(r"\$(\$?)\{([^}]*)\}")
        .map_err(|e| InterpolationError::InvalidSyntax(e.to_string()))?;

    let mut result = String::with_capacity(s.len());
    let mut last = 0;

    for caps in re.captures_iter(s) {
        let (Some(whole), Some(escape), Some(name)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        result.push_str(&s[last..whole.start()]);
        last = whole.end();

        if !escape.as_str().is_empty() {
            result.push_str(&whole.as_str()[1..]);
            continue;
        }

        let name = name.as_str().trim();
        if name.is_empty() {
            return Err(InterpolationError::InvalidSyntax(whole.as_str().to_string()));
        }

        match vars.get(name) {
            Some(value) => result.push_str(value),
            None => return Err(InterpolationError::UndefinedVariable(name.to_string())),
        }
    }

    result.push_str(&s[last..]);
    Ok(result)
}

/// Interpolate a list of strings
pub fn interpolate_list(
    list: &[String],
    vars: &BTreeMap<String, String>,
) -> InterpolationResult<Vec<String>> {
    list.iter()
        .map(|s| interpolate(s, vars))
        .collect::<InterpolationResult<Vec<String>>>()
}
