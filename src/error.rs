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

//! Error types of the crate. `BitsError` covers raw bit-buffer access,
//! `CodecError` the message codec and 6-bit armor, and `ParseError` the
//! NMEA sentence envelope. Errors are returned to the caller as-is;
//! nothing is retried or logged inside the codec path.

use alloc::string::String;
use thiserror::Error;

/// Errors raised by bit-level reads and writes on a [`crate::BitBuffer`].
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum BitsError {
    /// Value does not fit in the requested bit width.
    #[error("value {value} does not fit in {width} bits")]
    OutOfRange { value: i64, width: usize },

    /// Requested more bits than a 64-bit integer can hold.
    #[error("bit width {width} exceeds 64")]
    WidthTooWide { width: usize },

    /// Zero-width integer reads are meaningless.
    #[error("zero-width read")]
    ZeroWidth,

    /// A read or slice goes past the end of the buffer.
    #[error("read of {need} bits at offset {offset} exceeds buffer ({have} bits left)")]
    OutOfBounds {
        offset: usize,
        need: usize,
        have: usize,
    },

    /// A character other than '0' or '1' in a bit-string literal.
    #[error("invalid bit character {ch:?} at position {position}")]
    InvalidBitChar { ch: char, position: usize },
}

/// Errors raised while encoding or decoding an AIS message payload.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// Field value does not fit in the declared bit width at encode time.
    #[error("field {field}: value {value} does not fit in {width} bits")]
    OutOfRange {
        field: &'static str,
        value: i64,
        width: usize,
    },

    /// Required field absent from the input record and no default declared.
    #[error("missing required field {field}")]
    MissingField { field: &'static str },

    /// A decode slice exceeds the available bits.
    #[error("truncated buffer: need {need} bits at offset {offset}, have {have}")]
    TruncatedBuffer {
        offset: usize,
        need: usize,
        have: usize,
    },

    /// The leading six bits name a message class outside the registry.
    #[error("unknown message class {id}")]
    UnknownMessageClass { id: u8 },

    /// A 6-bit-armor character outside the two printable ranges.
    #[error("invalid armor character {ch:?} at position {position}")]
    InvalidArmor { ch: char, position: usize },

    /// The record holds a value incompatible with the field descriptor.
    #[error("field {field}: expected {expected} value")]
    WrongFieldType {
        field: &'static str,
        expected: &'static str,
    },

    /// Raw bit-buffer failure outside any field context.
    #[error(transparent)]
    Bits(#[from] BitsError),
}

/// Errors raised by the NMEA sentence envelope layer.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The sentence does not have the expected overall structure.
    #[error("Invalid NMEA sentence: {0}")]
    InvalidSentence(String),

    /// The sentence checksum does not match its content.
    #[error("Corrupted NMEA sentence: {0}")]
    CorruptedSentence(String),

    /// Recognized framing but an unsupported sentence or talker.
    #[error("Unsupported sentence type: {0}")]
    UnsupportedSentenceType(String),

    /// Payload failure reported by the message codec.
    #[error(transparent)]
    Codec(#[from] CodecError),
}
