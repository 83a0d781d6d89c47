// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Appends a column's rows to a builder of an equal or wider stype.

use colframe_core::{
	ColumnBuilder, ColumnData, TextBuilder,
	column::builder::reserve,
};
use colframe_type::{Na, Result, return_internal_error, text};
use num_traits::AsPrimitive;

/// Appends every row of `data` to `builder`, converting values to the
/// builder's stype. NA stays NA.
pub(crate) fn extend_coerced(builder: &mut ColumnBuilder, data: &ColumnData) -> Result<()> {
	let target = builder.stype();
	let stype = data.stype();
	if !stype.promotes_to(target) {
		return_internal_error!("cannot narrow {} to {}", stype, target);
	}
	if stype == target || (stype.is_string() && target.is_string()) {
		return builder.extend_from(data);
	}

	match builder {
		ColumnBuilder::Int8(out) => widen_into(out, data),
		ColumnBuilder::Int16(out) => widen_into(out, data),
		ColumnBuilder::Int32(out) => widen_into(out, data),
		ColumnBuilder::Int64(out) => widen_into(out, data),
		ColumnBuilder::Float32(out) => widen_into(out, data),
		ColumnBuilder::Float64(out) => widen_into(out, data),
		ColumnBuilder::Text(out) => render_into(out, data),
		ColumnBuilder::Obj64(out) => {
			reserve(out, data.len())?;
			out.extend((0..data.len()).map(|row| data.get_value(row)));
			Ok(())
		}
		ColumnBuilder::Bool8(_) => return_internal_error!("cannot coerce {} into bool8", stype),
	}
}

fn widen_into<T>(out: &mut Vec<T>, data: &ColumnData) -> Result<()>
where
	T: Na + 'static,
	i8: AsPrimitive<T>,
	i16: AsPrimitive<T>,
	i32: AsPrimitive<T>,
	i64: AsPrimitive<T>,
	f32: AsPrimitive<T>,
	f64: AsPrimitive<T>,
{
	match data {
		ColumnData::Bool8(c) => widen(out, c.as_slice()),
		ColumnData::Int8(c) => widen(out, &c[..]),
		ColumnData::Int16(c) => widen(out, &c[..]),
		ColumnData::Int32(c) => widen(out, &c[..]),
		ColumnData::Int64(c) => widen(out, &c[..]),
		ColumnData::Float32(c) => widen(out, &c[..]),
		ColumnData::Float64(c) => widen(out, &c[..]),
		other => return_internal_error!("{} is not numeric", other.stype()),
	}
}

fn widen<S, T>(out: &mut Vec<T>, values: &[S]) -> Result<()>
where
	S: Na + AsPrimitive<T>,
	T: Na + 'static,
{
	reserve(out, values.len())?;
	out.extend(values.iter().map(|&v| if v.is_na() { T::NA } else { v.as_() }));
	Ok(())
}

fn render_into(out: &mut TextBuilder, data: &ColumnData) -> Result<()> {
	match data {
		ColumnData::Bool8(c) => render(out, c.as_slice(), |s, v| text::write_bool(s, v != 0)),
		ColumnData::Int8(c) => render(out, &c[..], |s, v| text::write_int(s, v.into())),
		ColumnData::Int16(c) => render(out, &c[..], |s, v| text::write_int(s, v.into())),
		ColumnData::Int32(c) => render(out, &c[..], |s, v| text::write_int(s, v.into())),
		ColumnData::Int64(c) => render(out, &c[..], text::write_int),
		ColumnData::Float32(c) => render(out, &c[..], text::write_f32),
		ColumnData::Float64(c) => render(out, &c[..], text::write_f64),
		other => return_internal_error!("cannot render {} as text", other.stype()),
	}
}

fn render<T: Na>(out: &mut TextBuilder, values: &[T], write: impl Fn(&mut String, T)) -> Result<()> {
	for &value in values {
		if value.is_na() {
			out.push_na(1)?;
		} else {
			out.push_with(|s| write(s, value))?;
		}
	}
	Ok(())
}
