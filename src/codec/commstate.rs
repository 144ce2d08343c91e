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

//! SOTDMA/ITDMA communications-state sub-codec.
//!
//! Several message classes end with the same 19-bit block describing the
//! transmitter's channel-access state: `state_syncstate` (2 bits),
//! `state_slottimeout` (3 bits) and `state_slotoffset` (14 bits). Classes
//! with both access schemes carry a one-bit selector in front of the block
//! (0 = SOTDMA, 1 = ITDMA); base-station reports are always SOTDMA.
//!
//! The field descriptors below are spliced verbatim into every table that
//! carries the block, so the layout is defined once. The slot-offset field
//! is passed through bit-exactly without interpretation; its meaning varies
//! with the slot-timeout value and receivers that are not channel-access
//! schedulers have no use for it.

use super::{FieldDef, Record};
use crate::bits::BitBuffer;
use crate::error::CodecError;

/// Synchronization-state labels for the 2-bit `state_syncstate` field.
pub const SYNC_STATE_LUT: &[(u64, &str)] = &[
    (0, "UTC direct"),
    (1, "UTC indirect"),
    (2, "synchronized to a base station"),
    (3, "synchronized to another station"),
];

/// Slot-timeout labels: frames remaining until a new slot is selected.
pub const SLOT_TIMEOUT_LUT: &[(u64, &str)] = &[
    (0, "Last frame in this slot"),
    (1, "1 frames left"),
    (2, "2 frames left"),
    (3, "3 frames left"),
    (4, "4 frames left"),
    (5, "5 frames left"),
    (6, "6 frames left"),
    (7, "7 frames left"),
];

/// SOTDMA-vs-ITDMA labels for the selector bit where present.
pub const COMM_STATE_LUT: &[(u64, &str)] = &[(0, "SOTDMA"), (1, "ITDMA")];

/// The one-bit access-scheme selector preceding the block in some classes.
pub const COMM_STATE_SELECTOR: FieldDef =
    FieldDef::uint("comm_state", 1, "SOTDMA or ITDMA").with_lookup(COMM_STATE_LUT);

/// Synchronization state, bits 0..2 of the block.
pub const STATE_SYNCSTATE: FieldDef =
    FieldDef::uint("state_syncstate", 2, "Communications state - synchronization state")
        .with_lookup(SYNC_STATE_LUT);

/// Slot timeout, bits 2..5 of the block.
pub const STATE_SLOTTIMEOUT: FieldDef = FieldDef::uint(
    "state_slottimeout",
    3,
    "Communications state - frames remaining until a new slot is selected",
)
.with_lookup(SLOT_TIMEOUT_LUT);

/// Slot offset, bits 5..19 of the block, passed through uninterpreted.
pub const STATE_SLOTOFFSET: FieldDef = FieldDef::uint(
    "state_slotoffset",
    14,
    "Communications state - slot of the next transmission",
);

/// Channel-access scheme reported by a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelAccess {
    Sotdma,
    Itdma,
}

/// Typed view over the 19-bit communications-state block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommState {
    pub access: ChannelAccess,
    pub sync_state: u8,
    pub slot_timeout: u8,
    pub slot_offset: u16,
}

impl CommState {
    /// Read the block starting at `offset`. `selector` tells whether a
    /// selector bit precedes it; without one the block is SOTDMA.
    pub fn from_bits(
        bv: &BitBuffer,
        offset: usize,
        selector: bool,
    ) -> Result<CommState, CodecError> {
        let mut pos = offset;
        let access = if selector {
            let flag = read(bv, pos, 1)?;
            pos += 1;
            if flag == 0 {
                ChannelAccess::Sotdma
            } else {
                ChannelAccess::Itdma
            }
        } else {
            ChannelAccess::Sotdma
        };
        let sync_state = read(bv, pos, 2)? as u8;
        let slot_timeout = read(bv, pos + 2, 3)? as u8;
        let slot_offset = read(bv, pos + 5, 14)? as u16;
        Ok(CommState {
            access,
            sync_state,
            slot_timeout,
            slot_offset,
        })
    }

    /// Assemble the view from a decoded record, if the class carries the
    /// block.
    pub fn from_record(record: &Record) -> Option<CommState> {
        let access = match record.uint("comm_state") {
            Some(0) | None => ChannelAccess::Sotdma,
            Some(_) => ChannelAccess::Itdma,
        };
        Some(CommState {
            access,
            sync_state: record.uint("state_syncstate")? as u8,
            slot_timeout: record.uint("state_slottimeout")? as u8,
            slot_offset: record.uint("state_slotoffset")? as u16,
        })
    }

    pub fn sync_state_label(&self) -> Option<&'static str> {
        lookup(SYNC_STATE_LUT, self.sync_state as u64)
    }

    pub fn slot_timeout_label(&self) -> Option<&'static str> {
        lookup(SLOT_TIMEOUT_LUT, self.slot_timeout as u64)
    }
}

fn read(bv: &BitBuffer, offset: usize, width: usize) -> Result<u64, CodecError> {
    bv.as_uint(offset, offset + width)
        .map_err(|_| CodecError::TruncatedBuffer {
            offset,
            need: width,
            have: bv.len().saturating_sub(offset),
        })
}

fn lookup(table: &'static [(u64, &'static str)], raw: u64) -> Option<&'static str> {
    table.iter().find(|(v, _)| *v == raw).map(|(_, l)| *l)
}

// -------------------------------------------------------------------------------------------------
