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

//! JSON serialization structures for decoded AIS records.
//!
//! Fields are rendered as an ordered array so the wire order survives the
//! JSON round trip; decimal values stay as exact (scaled, scale) pairs.
//! Enumeration labels are attached where the class tables define them.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::codec::{self, Record, Value};

/// One record field with its optional enumeration label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsonField {
    pub name: String,
    #[serde(flatten)]
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Serializable view of a decoded AIS message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsonAisMessage {
    /// Raw sentence(s) the record came from, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentence: Option<String>,
    pub message_id: u8,
    /// Class name, e.g. "SARposition".
    pub name: String,
    pub fields: Vec<JsonField>,
}

impl JsonAisMessage {
    /// Build the JSON view of a decoded record. Returns `None` when the
    /// record does not carry a registered MessageID.
    pub fn from_record(record: &Record) -> Option<JsonAisMessage> {
        let message_id = record.uint("MessageID")? as u8;
        let schema = codec::schema_for_record(message_id, record).ok()?;
        let fields = record
            .iter()
            .map(|(name, value)| {
                let label = schema
                    .field(name)
                    .and_then(|f| match value {
                        Value::UInt(raw) => f.label(*raw),
                        Value::Bool(b) => f.label(*b as u64),
                        _ => None,
                    })
                    .map(|l| l.to_string());
                JsonField {
                    name: name.to_string(),
                    value: value.clone(),
                    label,
                }
            })
            .collect();
        Some(JsonAisMessage {
            sentence: None,
            message_id,
            name: schema.name.to_string(),
            fields,
        })
    }

    pub fn with_sentence(mut self, sentence: &str) -> JsonAisMessage {
        self.sentence = Some(sentence.to_string());
        self
    }
}

// -------------------------------------------------------------------------------------------------
