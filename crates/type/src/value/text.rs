// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Canonical text form of primitive values, used when numbers are promoted
//! into a string column.

use std::fmt::Write;

pub fn write_bool(out: &mut String, value: bool) {
	out.push(if value { '1' } else { '0' });
}

pub fn write_int(out: &mut String, value: i64) {
	let _ = write!(out, "{}", value);
}

pub fn write_f32(out: &mut String, value: f32) {
	write_float(out, value.is_finite(), value.is_sign_negative(), format_args!("{}", value));
}

pub fn write_f64(out: &mut String, value: f64) {
	write_float(out, value.is_finite(), value.is_sign_negative(), format_args!("{}", value));
}

// `Display` for floats yields the shortest round-tripping digits and never
// switches to exponent notation.
fn write_float(out: &mut String, finite: bool, negative: bool, digits: std::fmt::Arguments<'_>) {
	if !finite {
		out.push_str(if negative { "-inf" } else { "inf" });
		return;
	}
	let start = out.len();
	let _ = out.write_fmt(digits);
	if !out[start..].contains('.') {
		out.push_str(".0");
	}
}

pub fn f64_to_text(value: f64) -> String {
	let mut out = String::new();
	write_f64(&mut out, value);
	out
}

pub fn f32_to_text(value: f32) -> String {
	let mut out = String::new();
	write_f32(&mut out, value);
	out
}
