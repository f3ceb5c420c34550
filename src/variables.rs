//! Template variable interpolation.
//!
//! Resolves `$var` and `${var}` references in display strings, most notably
//! the drawer title. Unknown references are left untouched rather than
//! replaced with an empty string.

use bevy::platform::collections::HashMap;
use bevy::prelude::*;

/// Registry of template variable values.
#[derive(Resource, Default)]
pub struct VariableSet {
    values: HashMap<String, String>,
}

impl VariableSet {
    /// Sets a variable's value, replacing any previous one.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    /// Returns a variable's value, if registered.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Replaces `$var` and `${var}` references with their registered values.
    pub fn interpolate(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut rest = input;

        while let Some(idx) = rest.find('$') {
            out.push_str(&rest[..idx]);
            let after = &rest[idx + 1..];

            // Name plus the total width of the reference including the `$`.
            let (name, width) = if let Some(braced) = after.strip_prefix('{') {
                match braced.find('}') {
                    Some(end) => (&braced[..end], end + 3),
                    None => ("", 1),
                }
            } else {
                let end = after
                    .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                    .unwrap_or(after.len());
                (&after[..end], end + 1)
            };

            match self.values.get(name) {
                Some(value) if !name.is_empty() => out.push_str(value),
                _ => out.push_str(&rest[idx..idx + width]),
            }
            rest = &rest[idx + width..];
        }

        out.push_str(rest);
        out
    }
}
