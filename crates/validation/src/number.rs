//! Permissive numeric parsing for form input.
//!
//! Form fields arrive as raw strings. The "must be a number" rule accepts
//! anything a loose numeric coercion would: surrounding whitespace,
//! exponent notation, a bare leading or trailing dot, radix-prefixed
//! integers and the `Infinity` literal. It is deliberately wider than
//! [`str::parse::<f64>`] in some places and narrower in others (no `inf`,
//! no `NaN`).

#[cfg(test)]
mod tests;

/// Literal accepted for an unbounded value. Case-sensitive.
const INFINITY: &str = "Infinity";

/// Whitespace and line terminators stripped by loose coercion.
///
/// Differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
pub fn is_loose_whitespace(c: char) -> bool {
	matches!(
		c,
		'\t' | '\n' | '\u{B}' | '\u{C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
			| '\u{2000}'..='\u{200A}'
			| '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
	)
}

/// Trims [`is_loose_whitespace`] characters from both ends.
pub fn trim_loose(value: &str) -> &str {
	value.trim_matches(is_loose_whitespace)
}

/// Parses `value` as a number using loose coercion rules.
///
/// Returns `None` for empty or whitespace-only input and for anything that
/// does not spell a number. Never returns `NaN`.
pub fn parse_number(value: &str) -> Option<f64> {
	let trimmed = trim_loose(value);
	if trimmed.is_empty() {
		return None;
	}

	if let Some(n) = parse_radix_literal(trimmed) {
		return Some(n);
	}

	let (sign, body) = split_sign(trimmed);
	if body == INFINITY {
		return Some(sign * f64::INFINITY);
	}
	if !is_decimal_literal(body) {
		return None;
	}

	body.parse::<f64>().ok().map(|n| sign * n)
}

/// Returns `true` when [`parse_number`] accepts `value`.
pub fn is_number(value: &str) -> bool {
	parse_number(value).is_some()
}

fn split_sign(s: &str) -> (f64, &str) {
	match s.as_bytes().first() {
		Some(b'-') => (-1.0, &s[1..]),
		Some(b'+') => (1.0, &s[1..]),
		_ => (1.0, s),
	}
}

/// Unsigned `0x`, `0o` and `0b` integer literals. A sign is not allowed here.
fn parse_radix_literal(s: &str) -> Option<f64> {
	let bytes = s.as_bytes();
	if bytes.len() < 3 || bytes[0] != b'0' {
		return None;
	}
	let radix = match bytes[1] {
		b'x' | b'X' => 16,
		b'o' | b'O' => 8,
		b'b' | b'B' => 2,
		_ => return None,
	};

	let digits = &s[2..];
	let mut acc = 0.0_f64;
	for c in digits.chars() {
		let d = c.to_digit(radix)?;
		acc = acc * f64::from(radix) + f64::from(d);
	}
	Some(acc)
}

/// Checks the shape `digits [. digits] [e|E [+|-] digits]` with at least one
/// mantissa digit. Rejects the words Rust's float parser would also accept
/// (`inf`, `infinity`, `nan`) as well as separators like `_`.
fn is_decimal_literal(s: &str) -> bool {
	let bytes = s.as_bytes();
	let mut i = 0;
	let mut mantissa_digits = 0;

	while i < bytes.len() && bytes[i].is_ascii_digit() {
		i += 1;
		mantissa_digits += 1;
	}
	if i < bytes.len() && bytes[i] == b'.' {
		i += 1;
		while i < bytes.len() && bytes[i].is_ascii_digit() {
			i += 1;
			mantissa_digits += 1;
		}
	}
	if mantissa_digits == 0 {
		return false;
	}

	if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
		i += 1;
		if i < bytes.len() && matches!(bytes[i], b'+' | b'-') {
			i += 1;
		}
		let exp_start = i;
		while i < bytes.len() && bytes[i].is_ascii_digit() {
			i += 1;
		}
		if i == exp_start {
			return false;
		}
	}

	i == bytes.len()
}
