#![forbid(unsafe_code)]

//! Lua literal rendering for primitive values.

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LiteralError {
	#[error("number is not finite: {0}")]
	NonFinite(f64),
}

/// Append `s` as a double-quoted Lua string literal.
pub fn push_string(out: &mut String, s: &str) {
	out.reserve(s.len() + 2);
	out.push('"');
	for c in s.chars() {
		match c {
			'\\' => out.push_str("\\\\"),
			'"' => out.push_str("\\\""),
			'\n' => out.push_str("\\n"),
			'\r' => out.push_str("\\r"),
			'\t' => out.push_str("\\t"),
			// Fixed width so a following digit is never read as part of the escape.
			c if c.is_ascii_control() => out.push_str(&format!("\\{:03}", c as u32)),
			c => out.push(c),
		}
	}
	out.push('"');
}

pub fn string(s: &str) -> String {
	let mut out = String::new();
	push_string(&mut out, s);
	out
}

/// Shortest decimal text that reads back as the same `f64`.
pub fn number(value: f64) -> Result<String, LiteralError> {
	if !value.is_finite() {
		return Err(LiteralError::NonFinite(value));
	}
	if value == 0.0 {
		return Ok("0".to_string());
	}
	Ok(format!("{value}"))
}

pub const fn boolean(value: bool) -> &'static str {
	if value { "true" } else { "false" }
}

/// `{"a", "b"}` in input order.
pub fn string_list<S: AsRef<str>>(items: &[S]) -> String {
	let mut out = String::from("{");
	for (i, item) in items.iter().enumerate() {
		if i > 0 {
			out.push_str(", ");
		}
		push_string(&mut out, item.as_ref());
	}
	out.push('}');
	out
}
