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

//! # aivdm-codec: AIS binary message codec for Rust
//!
//! This crate converts between three representations of the bit-packed
//! radio payloads broadcast by ships, base stations and search-and-rescue
//! aircraft on the VHF maritime channels (ITU-R M.1371):
//!
//! * a typed field record ([`Record`]) holding semantic values with scaled
//!   units,
//! * a bit-exact payload ([`BitBuffer`]), and
//! * the wire-level 6-bit ASCII payload inside an AIVDM/AIVDO NMEA
//!   sentence ([`armor`], [`NmeaParser`], [`build_sentences`]).
//!
//! The codec core is purely functional and stateless; the message-class
//! field tables are process-wide constants, safe for concurrent reads.
//! Only [`NmeaParser`] carries state, for reassembling two-fragment
//! sentence groups.
//!
//! ```
//! use aivdm_codec::{NmeaParser, ParsedMessage};
//!
//! let mut parser = NmeaParser::new();
//! match parser.parse_sentence("!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13") {
//!     Ok(ParsedMessage::Message(msg)) => {
//!         assert_eq!(msg.record.uint("MessageID"), Some(1));
//!     }
//!     other => panic!("unexpected parse result: {:?}", other),
//! }
//! ```
//!
//! Usage in a `#[no_std]` environment is also possible though an allocator
//! is required.

#![forbid(unsafe_code)]
#![allow(dead_code)]
#![cfg_attr(not(test), no_std)]

#[macro_use]
extern crate log;

#[macro_use]
extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;
use hashbrown::HashMap;

pub mod armor;
pub mod bits;
pub mod codec;
mod error;
pub mod json_output;

pub use bits::BitBuffer;
pub use codec::{Dec, FieldDef, FieldType, MessageSchema, Record, Value};
pub use error::{BitsError, CodecError, ParseError};

// -------------------------------------------------------------------------------------------------

/// AIS station classification derived from the sentence talker identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Station {
    BaseStation,
    DependentAisBaseStation,
    MobileStation,
    AidToNavigationStation,
    AisReceivingStation,
    LimitedBaseStation,
    AisTransmittingStation,
    RepeaterStation,
    Other,
}

impl Default for Station {
    fn default() -> Station {
        Station::Other
    }
}

impl FromStr for Station {
    type Err = ParseError;

    fn from_str(talker: &str) -> Result<Station, ParseError> {
        match talker.get(0..2) {
            Some("AB") | Some("BS") => Ok(Station::BaseStation),
            Some("AD") => Ok(Station::DependentAisBaseStation),
            Some("AI") => Ok(Station::MobileStation),
            Some("AN") => Ok(Station::AidToNavigationStation),
            Some("AR") => Ok(Station::AisReceivingStation),
            Some("AS") => Ok(Station::LimitedBaseStation),
            Some("AT") => Ok(Station::AisTransmittingStation),
            Some("AX") => Ok(Station::RepeaterStation),
            Some(_) => Ok(Station::Other),
            None => Err(ParseError::InvalidSentence(
                "Invalid talker identifier".to_string(),
            )),
        }
    }
}

/// A fully decoded AIS message together with its envelope context.
#[derive(Clone, Debug, PartialEq)]
pub struct AisMessage {
    /// AIS station type from the talker identifier.
    pub station: Station,
    /// True for `!..VDO` sentences, which report the own vessel.
    pub own_vessel: bool,
    /// The decoded field record.
    pub record: Record,
}

/// Result from [`NmeaParser::parse_sentence`]. If the given sentence
/// represents only part of a multi-sentence group,
/// `ParsedMessage::Incomplete` is returned and state is kept in the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum ParsedMessage {
    /// Part of a multi-sentence group; more fragments are needed.
    Incomplete,
    /// A complete, decoded message.
    Message(AisMessage),
}

// -------------------------------------------------------------------------------------------------

/// NMEA sentence parser which keeps multi-sentence state between
/// `parse_sentence` calls. The parser tries to be as permissible as
/// possible about the field formats because some NMEA encoders don't
/// follow the standards strictly.
#[derive(Clone, Default)]
pub struct NmeaParser {
    saved_fragments: HashMap<String, (String, u8)>,
}

impl NmeaParser {
    /// Construct an empty parser which is ready to receive sentences.
    pub fn new() -> NmeaParser {
        NmeaParser {
            saved_fragments: HashMap::new(),
        }
    }

    /// Clear internal state. Pending multi-sentence groups are lost.
    pub fn reset(&mut self) {
        self.saved_fragments.clear();
    }

    /// Store a payload fragment and its fill-bit count.
    fn push_fragment(&mut self, key: String, payload: String, fill_bits: u8) {
        self.saved_fragments.insert(key, (payload, fill_bits));
    }

    /// Remove and return a stored fragment by key.
    fn pull_fragment(&mut self, key: &str) -> Option<(String, u8)> {
        self.saved_fragments.remove(key)
    }

    /// Number of fragments waiting for their counterpart.
    fn fragments_count(&self) -> usize {
        self.saved_fragments.len()
    }

    /// Parse one NMEA sentence into [`ParsedMessage`]. If the sentence is
    /// part of a two-fragment group the related state is saved and
    /// `ParsedMessage::Incomplete` is returned; the decoded message is
    /// returned once the remaining fragment arrives.
    pub fn parse_sentence(&mut self, sentence: &str) -> Result<ParsedMessage, ParseError> {
        // Shed characters prefixing the message if they exist.
        let sentence = match sentence.find(|c| c == '$' || c == '!') {
            Some(start_idx) => &sentence[start_idx..],
            None => {
                return Err(ParseError::InvalidSentence(format!(
                    "Invalid NMEA sentence: {}",
                    sentence
                )));
            }
        };

        // Calculate the NMEA checksum, compare it to the given one, and
        // strip the checksum part to simplify the next processing steps.
        let (sentence, checksum_given) = {
            if let Some(pos) = sentence.rfind('*') {
                if pos + 3 <= sentence.len() {
                    (
                        sentence[0..pos].to_string(),
                        sentence[(pos + 1)..(pos + 3)].to_string(),
                    )
                } else {
                    debug!("Invalid checksum found for sentence: {}", sentence);
                    (sentence[0..pos].to_string(), "".to_string())
                }
            } else {
                debug!("No checksum found for sentence: {}", sentence);
                (sentence.to_string(), "".to_string())
            }
        };
        let checksum_calculated = format!("{:02X}", xor_checksum(&sentence));
        if checksum_calculated != checksum_given && !checksum_given.is_empty() {
            return Err(ParseError::CorruptedSentence(format!(
                "{} != {}",
                checksum_calculated, checksum_given
            )));
        }

        // Pick the sentence type.
        let sentence_type = {
            if let Some(i) = sentence.find(',') {
                &sentence[0..i]
            } else {
                return Err(ParseError::InvalidSentence(format!(
                    "Invalid NMEA sentence: {}",
                    sentence
                )));
            }
        };

        // Validate sentence type characters.
        if !sentence_type
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '$' || c == '!')
        {
            return Err(ParseError::InvalidSentence(format!(
                "Invalid characters in sentence type: {}",
                sentence_type
            )));
        }

        // GNSS and proprietary '$' sentences are outside this crate.
        if !sentence_type.starts_with('!') {
            return Err(ParseError::UnsupportedSentenceType(format!(
                "Unsupported sentence type: {}",
                sentence_type
            )));
        }

        // Identify the AIS station from the talker identifier.
        let station = Station::from_str(
            sentence_type
                .get(1..)
                .ok_or_else(|| ParseError::CorruptedSentence("Empty sentence type".to_string()))?,
        )?;
        let sentence_type = if sentence_type.len() == 6 {
            format!(
                "!{}",
                sentence_type.get(3..6).ok_or_else(|| {
                    ParseError::InvalidSentence(format!("{} is too short.", sentence_type))
                })?
            )
        } else {
            String::from(sentence_type)
        };

        match sentence_type.as_str() {
            // Received AIS data about other vessels or the own vessel.
            "!VDM" | "!VDO" => {
                let own_vessel = sentence_type.as_str() == "!VDO";
                self.parse_vdm(&sentence, &sentence_type, station, own_vessel)
            }
            _ => Err(ParseError::UnsupportedSentenceType(format!(
                "Unsupported sentence type: {}",
                sentence_type
            ))),
        }
    }

    /// Handle the comma-separated fields of a `!..VDM`/`!..VDO` sentence.
    fn parse_vdm(
        &mut self,
        sentence: &str,
        sentence_type: &str,
        station: Station,
        own_vessel: bool,
    ) -> Result<ParsedMessage, ParseError> {
        let mut fragment_count = 0u8;
        let mut fragment_number = 0u8;
        let mut message_id = None;
        let mut radio_channel_code = None;
        let mut payload_string: String = "".into();
        let mut fill_bits = 0u8;
        for (num, s) in sentence.split(',').enumerate() {
            match num {
                1 => {
                    fragment_count = s.parse::<u8>().map_err(|_| {
                        ParseError::InvalidSentence(format!("Failed to parse fragment count: {}", s))
                    })?;
                }
                2 => {
                    fragment_number = s.parse::<u8>().map_err(|_| {
                        ParseError::InvalidSentence(format!(
                            "Failed to parse fragment number: {}",
                            s
                        ))
                    })?;
                }
                3 => {
                    message_id = s.parse::<u64>().ok();
                }
                4 => {
                    radio_channel_code = Some(s);
                }
                5 => {
                    payload_string = s.to_string();
                }
                6 => {
                    fill_bits = s.parse::<u8>().unwrap_or(0);
                }
                _ => {}
            }
        }

        // Reassemble the payload bits.
        let mut bv: Option<BitBuffer> = None;
        match fragment_count {
            1 => {
                bv = Some(armor::from_armor(&payload_string, fill_bits)?);
            }
            2 => {
                if let Some(msg_id) = message_id {
                    let key1 = make_fragment_key(
                        sentence_type,
                        msg_id,
                        fragment_count,
                        1,
                        radio_channel_code.unwrap_or(""),
                    );
                    let key2 = make_fragment_key(
                        sentence_type,
                        msg_id,
                        fragment_count,
                        2,
                        radio_channel_code.unwrap_or(""),
                    );
                    match fragment_number {
                        1 => {
                            if let Some((tail, tail_fill)) = self.pull_fragment(&key2) {
                                let mut combined = payload_string;
                                combined.push_str(tail.as_str());
                                bv = Some(armor::from_armor(&combined, tail_fill)?);
                            } else {
                                self.push_fragment(key1, payload_string, fill_bits);
                            }
                        }
                        2 => {
                            if let Some((head, _)) = self.pull_fragment(&key1) {
                                let mut combined = head;
                                combined.push_str(payload_string.as_str());
                                bv = Some(armor::from_armor(&combined, fill_bits)?);
                            } else {
                                self.push_fragment(key2, payload_string, fill_bits);
                            }
                        }
                        _ => {
                            warn!(
                                "Unexpected NMEA fragment number: {}/{}",
                                fragment_number, fragment_count
                            );
                        }
                    }
                } else {
                    warn!("NMEA message id missing from {}", sentence_type);
                }
            }
            _ => {
                warn!(
                    "NMEA sentence fragment count greater ({}) than supported 2",
                    fragment_count
                );
            }
        }

        match bv {
            Some(bv) => {
                let record = codec::decode(&bv)?;
                Ok(ParsedMessage::Message(AisMessage {
                    station,
                    own_vessel,
                    record,
                }))
            }
            None => Ok(ParsedMessage::Incomplete),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Assemble `!AIVDM` sentences for an encoded payload.
///
/// The payload is zero-padded to a 6-bit boundary, armored and split into
/// fragments; the announced fill-bit count travels with the last fragment.
/// `sequence` becomes the sequential message id field of multi-fragment
/// groups (a single digit, reduced modulo ten); the field stays empty for
/// single-fragment sentences.
pub fn build_sentences(bv: &BitBuffer, channel: char, sequence: u8) -> Vec<String> {
    const MAX_PAYLOAD_CHARS: usize = 56;

    let (payload, pad) = armor::to_armor(bv);
    let fragments: Vec<&str> = if payload.is_empty() {
        vec![""]
    } else {
        // The armor alphabet is plain ASCII, so byte chunks are char chunks.
        payload
            .as_bytes()
            .chunks(MAX_PAYLOAD_CHARS)
            .map(|chunk| core::str::from_utf8(chunk).unwrap_or(""))
            .collect()
    };
    let total = fragments.len();
    let mut sentences = Vec::with_capacity(total);
    for (i, fragment) in fragments.iter().enumerate() {
        let last = i + 1 == total;
        let seq = if total == 1 {
            String::new()
        } else {
            format!("{}", sequence % 10)
        };
        let body = format!(
            "AIVDM,{},{},{},{},{},{}",
            total,
            i + 1,
            seq,
            channel,
            fragment,
            if last { pad } else { 0 }
        );
        sentences.push(format!("!{}*{:02X}", body, xor_checksum(&body)));
    }
    sentences
}

/// XOR checksum over the sentence content, skipping a leading '!' or '$'.
fn xor_checksum(sentence: &str) -> u8 {
    let mut checksum = 0u8;
    let skip = if sentence.starts_with('!') || sentence.starts_with('$') {
        1
    } else {
        0
    };
    for c in sentence.chars().skip(skip) {
        checksum ^= c as u8;
    }
    checksum
}

/// Key for the fragment store, unique per sentence group.
fn make_fragment_key(
    sentence_type: &str,
    message_id: u64,
    fragment_count: u8,
    fragment_number: u8,
    radio_channel_code: &str,
) -> String {
    format!(
        "{}-{}-{}-{}-{}",
        sentence_type, message_id, fragment_count, fragment_number, radio_channel_code
    )
}

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_invalid_sentence() {
        let mut p = NmeaParser::new();
        assert_eq!(
            p.parse_sentence("$޴GAGSV,,"),
            Err(ParseError::InvalidSentence(
                "Invalid characters in sentence type: $\u{7b4}GAGSV".to_string()
            ))
        );
        assert_eq!(
            p.parse_sentence("!"),
            Err(ParseError::InvalidSentence(
                "Invalid NMEA sentence: !".to_string()
            ))
        );
        assert_eq!(
            p.parse_sentence("no start character"),
            Err(ParseError::InvalidSentence(
                "Invalid NMEA sentence: no start character".to_string()
            ))
        );
    }

    #[test]
    fn test_parse_prefix_chars() {
        // A sentence with prefix garbage still parses.
        let mut p = NmeaParser::new();
        assert!(p
            .parse_sentence(",1277,-106*35\r\n!AIVDM,1,1,,A,152IS=iP?w<tSF0l4Q@>4?wp0H:;,0*2")
            .ok()
            .is_some());
    }

    #[test]
    fn test_parse_corrupted() {
        // Mismatching checksum.
        let mut p = NmeaParser::new();
        assert!(p
            .parse_sentence("!AIVDM,1,1,,A,38Id705000rRVJhE7cl9n;160000,0*41")
            .ok()
            .is_none());
    }

    #[test]
    fn test_parse_missing_checksum() {
        let mut p = NmeaParser::new();
        assert!(p
            .parse_sentence("!AIVDM,1,1,,A,38Id705000rRVJhE7cl9n;160000,0")
            .ok()
            .is_some());
    }

    #[test]
    fn test_parse_unsupported_gnss_sentence() {
        let mut p = NmeaParser::new();
        assert_eq!(
            p.parse_sentence("$QQ,*2C"),
            Err(ParseError::UnsupportedSentenceType(String::from(
                "Unsupported sentence type: $QQ"
            )))
        );
    }

    #[test]
    fn test_parse_invalid_talker() {
        let mut p = NmeaParser::new();
        assert_eq!(
            p.parse_sentence("!A,a0,*10"),
            Err(ParseError::InvalidSentence(String::from(
                "Invalid talker identifier"
            )))
        );
    }

    #[test]
    fn test_parse_position_report() {
        let mut p = NmeaParser::new();
        match p.parse_sentence("!AIVDM,1,1,,B,15N4cJ`005Jrek0H@9n`DW5608EP,0*13") {
            Ok(ParsedMessage::Message(msg)) => {
                assert_eq!(msg.station, Station::MobileStation);
                assert!(!msg.own_vessel);
                assert_eq!(msg.record.uint("MessageID"), Some(1));
                // Record iteration order equals the descriptor order.
                let names = codec::tables::MSG1.field_names();
                let decoded: Vec<&str> = msg.record.iter().map(|(n, _)| n).collect();
                assert_eq!(names, decoded);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_own_vessel_sentence() {
        let mut p = NmeaParser::new();
        let bv = codec::encode_message(
            9,
            &Record::new()
                .with("UserID", 111232511u64)
                .with("PositionAccuracy", 0u32)
                .with("DTE", true)
                .with("assigned_mode", 0u32)
                .with("RAIM", false)
                .with("comm_state", 0u32)
                .with("state_syncstate", 0u32)
                .with("state_slottimeout", 1u32)
                .with("state_slotoffset", 0u32),
        )
        .unwrap();
        let sentences = build_sentences(&bv, 'A', 0);
        assert_eq!(sentences.len(), 1);
        // Same payload under the own-vessel talker.
        let body = sentences[0][1..sentences[0].len() - 3].replacen("AIVDM", "AIVDO", 1);
        let vdo = format!("!{}*{:02X}", body, xor_checksum(&body));
        match p.parse_sentence(&vdo) {
            Ok(ParsedMessage::Message(msg)) => {
                assert!(msg.own_vessel);
                assert_eq!(msg.record.uint("UserID"), Some(111232511));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_two_fragment_reassembly() {
        let mut p = NmeaParser::new();
        let first = p
            .parse_sentence(
                "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E",
            )
            .unwrap();
        assert_eq!(first, ParsedMessage::Incomplete);
        assert_eq!(p.fragments_count(), 1);
        match p.parse_sentence("!AIVDM,2,2,3,B,1@0000000000000,2*55") {
            Ok(ParsedMessage::Message(msg)) => {
                assert_eq!(msg.record.uint("MessageID"), Some(5));
                assert_eq!(msg.record.uint("UserID"), Some(369190000));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(p.fragments_count(), 0);
    }

    #[test]
    fn test_two_fragment_reassembly_out_of_order() {
        let mut p = NmeaParser::new();
        let second = p
            .parse_sentence("!AIVDM,2,2,3,B,1@0000000000000,2*55")
            .unwrap();
        assert_eq!(second, ParsedMessage::Incomplete);
        match p.parse_sentence(
            "!AIVDM,2,1,3,B,55P5TL01VIaAL@7WKO@mBplU@<PDhh000000001S;AJ::4A80?4i@E53,0*3E",
        ) {
            Ok(ParsedMessage::Message(msg)) => {
                assert_eq!(msg.record.uint("UserID"), Some(369190000));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parser_reset_drops_fragments() {
        let mut p = NmeaParser::new();
        p.parse_sentence("!AIVDM,2,2,3,B,1@0000000000000,2*55")
            .unwrap();
        assert_eq!(p.fragments_count(), 1);
        p.reset();
        assert_eq!(p.fragments_count(), 0);
    }

    #[test]
    fn test_build_sentences_single_fragment() {
        let record = Record::new()
            .with("UserID", 1193046u64)
            .with("DestID1", 1193001u64)
            .with("SeqID1", 1u32);
        let bv = codec::encode_message(7, &record).unwrap();
        let sentences = build_sentences(&bv, 'A', 0);
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].starts_with("!AIVDM,1,1,,A,"));

        let mut p = NmeaParser::new();
        match p.parse_sentence(&sentences[0]) {
            Ok(ParsedMessage::Message(msg)) => {
                assert_eq!(msg.record.uint("DestID1"), Some(1193001));
                assert_eq!(msg.record.uint("SeqID1"), Some(1));
                assert_eq!(msg.record.uint("DestID4"), Some(0));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_build_sentences_multi_fragment_round_trip() {
        // 424 payload bits need two sentences and two fill bits.
        let record = Record::new()
            .with("UserID", 366123456u64)
            .with("IMOnumber", 9074729u64)
            .with("name", "EVER GIVEN")
            .with("callsign", "H3RC")
            .with("destination", "ROTTERDAM");
        let bv = codec::encode_message(5, &record).unwrap();
        let sentences = build_sentences(&bv, 'B', 7);
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].starts_with("!AIVDM,2,1,7,B,"));
        assert!(sentences[1].starts_with("!AIVDM,2,2,7,B,"));
        // Fill bits ride on the final fragment only.
        assert!(sentences[0].contains(",0*"));
        assert!(sentences[1].contains(",2*"));

        let mut p = NmeaParser::new();
        assert_eq!(
            p.parse_sentence(&sentences[0]).unwrap(),
            ParsedMessage::Incomplete
        );
        match p.parse_sentence(&sentences[1]) {
            Ok(ParsedMessage::Message(msg)) => {
                assert_eq!(msg.record.uint("UserID"), Some(366123456));
                assert_eq!(msg.record.text("name"), Some("EVER GIVEN"));
                assert_eq!(msg.record.text("destination"), Some("ROTTERDAM"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_station_classification() {
        assert_eq!(Station::from_str("AIVDM").unwrap(), Station::MobileStation);
        assert_eq!(Station::from_str("ABVDM").unwrap(), Station::BaseStation);
        assert_eq!(Station::from_str("BSVDM").unwrap(), Station::BaseStation);
        assert_eq!(
            Station::from_str("ANVDM").unwrap(),
            Station::AidToNavigationStation
        );
        assert_eq!(Station::from_str("ZZVDM").unwrap(), Station::Other);
        assert!(Station::from_str("A").is_err());
    }

    #[test]
    fn test_unknown_message_class_is_reported() {
        // Type 6 payloads are not in the registry.
        let bv = BitBuffer::from_uint(6, 6).unwrap();
        let (payload, pad) = armor::to_armor(&bv);
        let body = format!("AIVDM,1,1,,A,{},{}", payload, pad);
        let sentence = format!("!{}*{:02X}", body, xor_checksum(&body));
        let mut p = NmeaParser::new();
        assert_eq!(
            p.parse_sentence(&sentence),
            Err(ParseError::Codec(CodecError::UnknownMessageClass { id: 6 }))
        );
    }
}
