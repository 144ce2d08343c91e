/*
Copyright 2025

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

//! Table-driven AIS message codec.
//!
//! Each message class is described by a constant [`MessageSchema`]: an
//! ordered array of [`FieldDef`] descriptors covering the class's bit layout
//! exactly. A single engine walks the table in both directions, so adding a
//! message class is a data-only change in [`tables`].
//!
//! Encoding takes a caller-built [`Record`], substitutes declared defaults
//! for omitted fields, always emits the auto-set constants (MessageID and
//! the Spare/Reserved fillers) and returns the packed [`BitBuffer`] without
//! 6-bit alignment; alignment belongs to the sentence envelope because
//! multi-sentence reassembly operates on unaligned bit totals. Decoding
//! routes on the leading six bits and walks the same table back into a
//! record, ignoring any trailing bits some transmitters pad.

pub mod commstate;
pub mod tables;

use alloc::string::String;
use alloc::vec::Vec;
use core::convert::TryFrom;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::bits::{self, BitBuffer};
use crate::error::{BitsError, CodecError};

// -------------------------------------------------------------------------------------------------

/// Semantic type of a field within a message class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    /// Big-endian unsigned integer.
    UInt,
    /// Two's-complement signed integer over the declared width.
    Int,
    /// Single-bit flag.
    Bool,
    /// Signed fixed-point value; the wire carries `value * scale`.
    Decimal { scale: u32 },
    /// Unsigned fixed-point value; the wire carries `value * scale`.
    UDecimal { scale: u32 },
    /// 6-bit ASCII character sequence padded with '@'.
    String6,
}

/// Auto-set constants the encoder emits regardless of the input record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Auto {
    /// The class's message number, bits [0:6].
    MessageId,
    /// Constant zero filler (Spare/Reserved fields).
    Zero,
}

/// Descriptor for a single field: a named bit range with its semantics.
#[derive(Clone, Copy, Debug)]
pub struct FieldDef {
    /// Stable identifier used by callers and presentation layers.
    pub name: &'static str,
    /// Semantic type controlling packing and the record value.
    pub ty: FieldType,
    /// Width in bits.
    pub width: usize,
    /// Raw (already scaled) value substituted when the caller omits the field.
    pub default: Option<i64>,
    /// Constant the encoder emits unconditionally.
    pub auto: Option<Auto>,
    /// Enumeration labels for presentation; never enforced by the codec.
    pub lookup: Option<&'static [(u64, &'static str)]>,
    /// Trailing text field that may arrive truncated in whole characters.
    pub variable: bool,
    /// Human-readable description for documentation output.
    pub description: &'static str,
}

impl FieldDef {
    pub const fn uint(name: &'static str, width: usize, description: &'static str) -> FieldDef {
        FieldDef {
            name,
            ty: FieldType::UInt,
            width,
            default: None,
            auto: None,
            lookup: None,
            variable: false,
            description,
        }
    }

    pub const fn int(name: &'static str, width: usize, description: &'static str) -> FieldDef {
        FieldDef {
            ty: FieldType::Int,
            ..FieldDef::uint(name, width, description)
        }
    }

    pub const fn flag(name: &'static str, description: &'static str) -> FieldDef {
        FieldDef {
            ty: FieldType::Bool,
            ..FieldDef::uint(name, 1, description)
        }
    }

    pub const fn decimal(
        name: &'static str,
        width: usize,
        scale: u32,
        description: &'static str,
    ) -> FieldDef {
        FieldDef {
            ty: FieldType::Decimal { scale },
            ..FieldDef::uint(name, width, description)
        }
    }

    pub const fn udecimal(
        name: &'static str,
        width: usize,
        scale: u32,
        description: &'static str,
    ) -> FieldDef {
        FieldDef {
            ty: FieldType::UDecimal { scale },
            ..FieldDef::uint(name, width, description)
        }
    }

    pub const fn string6(name: &'static str, width: usize, description: &'static str) -> FieldDef {
        FieldDef {
            ty: FieldType::String6,
            ..FieldDef::uint(name, width, description)
        }
    }

    /// The leading MessageID constant every class starts with.
    pub const fn message_id() -> FieldDef {
        FieldDef {
            auto: Some(Auto::MessageId),
            ..FieldDef::uint("MessageID", 6, "AIS message number")
        }
    }

    /// A zero filler field. Decode preserves the bits actually received.
    pub const fn filler(name: &'static str, width: usize, description: &'static str) -> FieldDef {
        FieldDef {
            auto: Some(Auto::Zero),
            ..FieldDef::uint(name, width, description)
        }
    }

    pub const fn with_default(self, raw: i64) -> FieldDef {
        FieldDef {
            default: Some(raw),
            ..self
        }
    }

    pub const fn with_lookup(self, lookup: &'static [(u64, &'static str)]) -> FieldDef {
        FieldDef {
            lookup: Some(lookup),
            ..self
        }
    }

    /// Mark a trailing String6 field as truncatable on the wire.
    pub const fn variable_tail(self) -> FieldDef {
        FieldDef {
            variable: true,
            ..self
        }
    }

    /// Presentation label for a raw value, if the field carries a lookup.
    pub fn label(&self, raw: u64) -> Option<&'static str> {
        self.lookup?
            .iter()
            .find(|(value, _)| *value == raw)
            .map(|(_, label)| *label)
    }
}

/// A numbered message class: its nominal length and ordered field layout.
#[derive(Clone, Copy, Debug)]
pub struct MessageSchema {
    /// Message number 1..=27, the value of bits [0:6].
    pub message_id: u8,
    /// Short class name, e.g. "bsreport", "binack", "SARposition".
    pub name: &'static str,
    /// Declared total bit length; field widths sum to this.
    pub nominal_bits: usize,
    /// Field descriptors in transmission order.
    pub fields: &'static [FieldDef],
}

impl MessageSchema {
    /// Ordered field names, the record iteration order after decode.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|f| f.name).collect()
    }

    /// Look up a field descriptor by name.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Sum of the declared field widths.
    pub fn total_width(&self) -> usize {
        self.fields.iter().map(|f| f.width).sum()
    }

    /// (name, width, description) rows for documentation generation.
    pub fn definition_table(&self) -> Vec<(&'static str, usize, &'static str)> {
        self.fields
            .iter()
            .map(|f| (f.name, f.width, f.description))
            .collect()
    }
}

// -------------------------------------------------------------------------------------------------

/// Exact fixed-point decimal: the scaled integer together with its scale.
///
/// Coordinates, courses and draughts stay in this form end to end so that
/// re-encoding a decoded record is lossless; conversion to `f64` is a
/// presentation concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dec {
    /// `value * scale`, the integer the wire carries.
    pub scaled: i64,
    /// LSB count per unit, e.g. 600 000 per degree for coordinates.
    pub scale: u32,
}

impl Dec {
    pub const fn new(scaled: i64, scale: u32) -> Dec {
        Dec { scaled, scale }
    }

    /// Quantize a float onto the given scale, rounding half to even.
    pub fn from_f64(value: f64, scale: u32) -> Dec {
        Dec {
            scaled: bits::round_ties_even(value * scale as f64),
            scale,
        }
    }

    pub fn to_f64(&self) -> f64 {
        self.scaled as f64 / self.scale as f64
    }

    /// Re-express the value on another scale, rounding half to even when
    /// the scales are not commensurable.
    fn rescale(&self, scale: u32) -> Option<i64> {
        if self.scale == scale {
            return Some(self.scaled);
        }
        let num = self.scaled as i128 * scale as i128;
        let den = self.scale as i128;
        let q = num.div_euclid(den);
        let r = num.rem_euclid(den);
        let q = match (2 * r).cmp(&den) {
            core::cmp::Ordering::Less => q,
            core::cmp::Ordering::Greater => q + 1,
            core::cmp::Ordering::Equal => {
                if q % 2 == 0 {
                    q
                } else {
                    q + 1
                }
            }
        };
        i64::try_from(q).ok()
    }
}

/// A typed field value inside a decoded or to-be-encoded record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    #[serde(rename = "uint")]
    UInt(u64),
    #[serde(rename = "int")]
    Int(i64),
    #[serde(rename = "bool")]
    Bool(bool),
    #[serde(rename = "decimal")]
    Decimal(Dec),
    #[serde(rename = "string6")]
    String6(String),
}

impl From<u64> for Value {
    fn from(v: u64) -> Value {
        Value::UInt(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Value {
        Value::UInt(v as u64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Value {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Value {
        Value::Int(v as i64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Value {
        Value::Bool(v)
    }
}

impl From<Dec> for Value {
    fn from(v: Dec) -> Value {
        Value::Decimal(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Value {
        Value::String6(String::from(v))
    }
}

// -------------------------------------------------------------------------------------------------

/// Field-name to typed-value mapping with stable insertion order.
///
/// Decode fills the record in descriptor order, so iteration matches the
/// class layout. Records are plain values without identity; two records
/// are equal when they hold the same fields with the same values,
/// regardless of insertion order.
#[derive(Default, Clone, Debug)]
pub struct Record {
    fields: Vec<(&'static str, Value)>,
}

impl Record {
    pub fn new() -> Record {
        Record { fields: Vec::new() }
    }

    /// Insert or replace a field value.
    pub fn set(&mut self, name: &'static str, value: impl Into<Value>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Builder-style [`set`](Record::set).
    pub fn with(mut self, name: &'static str, value: impl Into<Value>) -> Record {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().map(|(n, v)| (*n, v))
    }

    /// Unsigned view of a field; signed values are accepted when non-negative.
    pub fn uint(&self, name: &str) -> Option<u64> {
        match self.get(name)? {
            Value::UInt(v) => Some(*v),
            Value::Int(v) if *v >= 0 => Some(*v as u64),
            _ => None,
        }
    }

    pub fn int(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            Value::Int(v) => Some(*v),
            Value::UInt(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        match self.get(name)? {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn decimal(&self, name: &str) -> Option<Dec> {
        match self.get(name)? {
            Value::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            Value::String6(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

impl PartialEq for Record {
    /// Field names are unique within a record, so comparing lengths and
    /// looking every field up in the other record compares the multisets.
    fn eq(&self, other: &Record) -> bool {
        self.fields.len() == other.fields.len()
            && self
                .fields
                .iter()
                .all(|(name, value)| other.get(name) == Some(value))
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

// -------------------------------------------------------------------------------------------------

/// Resolve the schema for a payload whose leading bits name `message_id`.
///
/// Message 24 is the one class whose layout depends on more than the
/// message number: the part-number bits [38:40] select part A or part B.
pub fn schema_for(message_id: u8, bv: &BitBuffer) -> Result<&'static MessageSchema, CodecError> {
    if message_id == 24 {
        let part = bv.as_uint(38, 40).map_err(|_| CodecError::TruncatedBuffer {
            offset: 38,
            need: 2,
            have: bv.len().saturating_sub(38),
        })?;
        return Ok(if part == 0 {
            &tables::MSG24A
        } else {
            &tables::MSG24B
        });
    }
    tables::CLASSES
        .iter()
        .copied()
        .find(|schema| schema.message_id == message_id)
        .ok_or(CodecError::UnknownMessageClass { id: message_id })
}

/// Resolve the schema for a record, using its part number for message 24.
pub fn schema_for_record(
    message_id: u8,
    record: &Record,
) -> Result<&'static MessageSchema, CodecError> {
    if message_id == 24 {
        return match record.uint("partnum") {
            Some(0) => Ok(&tables::MSG24A),
            Some(_) => Ok(&tables::MSG24B),
            None => Err(CodecError::MissingField { field: "partnum" }),
        };
    }
    tables::CLASSES
        .iter()
        .copied()
        .find(|schema| schema.message_id == message_id)
        .ok_or(CodecError::UnknownMessageClass { id: message_id })
}

/// Encode `record` as the given message class.
pub fn encode_message(message_id: u8, record: &Record) -> Result<BitBuffer, CodecError> {
    encode(schema_for_record(message_id, record)?, record)
}

/// Encode `record` against `schema`, walking the field table in order.
pub fn encode(schema: &MessageSchema, record: &Record) -> Result<BitBuffer, CodecError> {
    let mut bv = BitBuffer::new();
    for field in schema.fields {
        if let Some(auto) = field.auto {
            let raw = match auto {
                Auto::MessageId => schema.message_id as u64,
                Auto::Zero => 0,
            };
            bits::pack_uint(&mut bv, raw, field.width).map_err(|e| encode_err(field, e))?;
            continue;
        }
        match record.get(field.name) {
            Some(value) => encode_value(&mut bv, field, value)?,
            None => match field.default {
                Some(raw) => encode_raw(&mut bv, field, raw)?,
                None => return Err(CodecError::MissingField { field: field.name }),
            },
        }
    }
    Ok(bv)
}

/// Decode a payload, routing on the MessageID in bits [0:6].
pub fn decode(bv: &BitBuffer) -> Result<Record, CodecError> {
    let message_id = bv.as_uint(0, 6).map_err(|_| CodecError::TruncatedBuffer {
        offset: 0,
        need: 6,
        have: bv.len(),
    })? as u8;
    decode_as(schema_for(message_id, bv)?, bv)
}

/// Decode a payload against a known schema.
pub fn decode_as(schema: &MessageSchema, bv: &BitBuffer) -> Result<Record, CodecError> {
    let mut record = Record::new();
    let mut offset = 0usize;
    for field in schema.fields {
        let value = decode_value(bv, offset, field)?;
        // A truncated variable tail consumes less than the declared width.
        let consumed = if field.variable {
            let avail = bv.len().saturating_sub(offset);
            field.width.min(avail / 6 * 6)
        } else {
            field.width
        };
        record.set(field.name, value);
        offset += consumed;
    }
    Ok(record)
}

// -------------------------------------------------------------------------------------------------

fn encode_value(bv: &mut BitBuffer, field: &FieldDef, value: &Value) -> Result<(), CodecError> {
    match field.ty {
        FieldType::UInt => {
            let v = match value {
                Value::UInt(v) => *v,
                Value::Int(v) if *v >= 0 => *v as u64,
                _ => return Err(wrong_type(field, "uint")),
            };
            bits::pack_uint(bv, v, field.width).map_err(|e| encode_err(field, e))
        }
        FieldType::Int => {
            let v = match value {
                Value::Int(v) => *v,
                Value::UInt(v) => {
                    i64::try_from(*v).map_err(|_| wrong_type(field, "int"))?
                }
                _ => return Err(wrong_type(field, "int")),
            };
            bits::pack_int(bv, v, field.width).map_err(|e| encode_err(field, e))
        }
        FieldType::Bool => {
            let v = match value {
                Value::Bool(v) => *v,
                _ => return Err(wrong_type(field, "bool")),
            };
            bits::pack_uint(bv, v as u64, field.width).map_err(|e| encode_err(field, e))
        }
        FieldType::Decimal { scale } => {
            let dec = match value {
                Value::Decimal(dec) => dec,
                _ => return Err(wrong_type(field, "decimal")),
            };
            let raw = dec.rescale(scale).ok_or_else(|| CodecError::OutOfRange {
                field: field.name,
                value: dec.scaled,
                width: field.width,
            })?;
            bits::pack_int(bv, raw, field.width).map_err(|e| encode_err(field, e))
        }
        FieldType::UDecimal { scale } => {
            let dec = match value {
                Value::Decimal(dec) => dec,
                _ => return Err(wrong_type(field, "decimal")),
            };
            let raw = dec.rescale(scale).ok_or_else(|| CodecError::OutOfRange {
                field: field.name,
                value: dec.scaled,
                width: field.width,
            })?;
            if raw < 0 {
                return Err(CodecError::OutOfRange {
                    field: field.name,
                    value: raw,
                    width: field.width,
                });
            }
            bits::pack_uint(bv, raw as u64, field.width).map_err(|e| encode_err(field, e))
        }
        FieldType::String6 => {
            let s = match value {
                Value::String6(s) => s.as_str(),
                _ => return Err(wrong_type(field, "string6")),
            };
            encode_string6(bv, field, s)
        }
    }
}

/// Emit a declared default, which is stored as the raw wire integer.
fn encode_raw(bv: &mut BitBuffer, field: &FieldDef, raw: i64) -> Result<(), CodecError> {
    match field.ty {
        FieldType::Int | FieldType::Decimal { .. } => {
            bits::pack_int(bv, raw, field.width).map_err(|e| encode_err(field, e))
        }
        // Text fields only default to "not available", i.e. all-'@' padding.
        FieldType::String6 => encode_string6(bv, field, ""),
        _ => bits::pack_uint(bv, raw as u64, field.width).map_err(|e| encode_err(field, e)),
    }
}

fn encode_string6(bv: &mut BitBuffer, field: &FieldDef, s: &str) -> Result<(), CodecError> {
    let capacity = field.width / 6;
    let mut count = 0;
    for ch in s.chars() {
        let value = six_bit_value(ch).ok_or(CodecError::WrongFieldType {
            field: field.name,
            expected: "6-bit ASCII string",
        })?;
        count += 1;
        if count > capacity {
            return Err(CodecError::OutOfRange {
                field: field.name,
                value: count as i64,
                width: field.width,
            });
        }
        bits::pack_uint(bv, value as u64, 6).map_err(|e| encode_err(field, e))?;
    }
    // Pad the remaining characters with '@'.
    for _ in count..capacity {
        bits::pack_uint(bv, 0, 6).map_err(|e| encode_err(field, e))?;
    }
    Ok(())
}

fn decode_value(bv: &BitBuffer, offset: usize, field: &FieldDef) -> Result<Value, CodecError> {
    let hi = offset + field.width;
    match field.ty {
        FieldType::UInt => Ok(Value::UInt(
            bv.as_uint(offset, hi).map_err(|e| decode_err(offset, e))?,
        )),
        FieldType::Int => Ok(Value::Int(
            bv.as_int(offset, hi).map_err(|e| decode_err(offset, e))?,
        )),
        FieldType::Bool => Ok(Value::Bool(
            bv.as_uint(offset, hi).map_err(|e| decode_err(offset, e))? != 0,
        )),
        FieldType::Decimal { scale } => {
            let raw = bv
                .as_int(offset, hi)
                .map_err(|e| decode_err(offset, e))?;
            Ok(Value::Decimal(Dec::new(raw, scale)))
        }
        FieldType::UDecimal { scale } => {
            let raw = bv
                .as_uint(offset, hi)
                .map_err(|e| decode_err(offset, e))?;
            Ok(Value::Decimal(Dec::new(raw as i64, scale)))
        }
        FieldType::String6 => decode_string6(bv, offset, field),
    }
}

fn decode_string6(bv: &BitBuffer, offset: usize, field: &FieldDef) -> Result<Value, CodecError> {
    let declared = field.width / 6;
    let chars = if field.variable {
        declared.min(bv.len().saturating_sub(offset) / 6)
    } else {
        if offset + field.width > bv.len() {
            return Err(CodecError::TruncatedBuffer {
                offset,
                need: field.width,
                have: bv.len().saturating_sub(offset),
            });
        }
        declared
    };
    let mut s = String::with_capacity(chars);
    for i in 0..chars {
        let lo = offset + i * 6;
        let value = bv
            .as_uint(lo, lo + 6)
            .map_err(|e| decode_err(lo, e))? as u8;
        s.push(six_bit_char(value));
    }
    // '@' pads the tail of fixed-width text fields.
    while s.ends_with('@') {
        s.pop();
    }
    Ok(Value::String6(s))
}

/// 6-bit group to its ASCII character: 0..=31 map into '@'..'_', the rest
/// are ' '..'?' verbatim.
fn six_bit_char(value: u8) -> char {
    debug_assert!(value < 64);
    if value < 32 {
        (value + 64) as char
    } else {
        value as char
    }
}

fn six_bit_value(ch: char) -> Option<u8> {
    match ch as u32 {
        c @ 64..=95 => Some((c - 64) as u8),
        c @ 32..=63 => Some(c as u8),
        _ => None,
    }
}

fn encode_err(field: &FieldDef, e: BitsError) -> CodecError {
    match e {
        BitsError::OutOfRange { value, width } => CodecError::OutOfRange {
            field: field.name,
            value,
            width,
        },
        other => CodecError::Bits(other),
    }
}

fn decode_err(offset: usize, e: BitsError) -> CodecError {
    match e {
        BitsError::OutOfBounds { need, have, .. } => CodecError::TruncatedBuffer {
            offset,
            need,
            have,
        },
        other => CodecError::Bits(other),
    }
}

fn wrong_type(field: &FieldDef, expected: &'static str) -> CodecError {
    CodecError::WrongFieldType {
        field: field.name,
        expected,
    }
}

// -------------------------------------------------------------------------------------------------
