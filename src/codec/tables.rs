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

//! Field tables for the supported message classes.
//!
//! Every class is pure data: an ordered `FieldDef` array whose widths sum
//! to the declared bit length, plus the enumeration tables presentation
//! layers use to label raw values. Defaults are stored as the raw wire
//! integer (already scaled), so substituting a default and packing an
//! explicit value produce identical bits.
//!
//! Coordinates use 600 000 LSB per degree; the "not available" sentinels
//! 181 degrees longitude and 91 degrees latitude therefore appear as the
//! raw defaults 108 600 000 and 54 600 000. Course over ground uses 10 LSB
//! per degree with sentinel 3600.

use super::commstate::{
    COMM_STATE_SELECTOR, STATE_SLOTOFFSET, STATE_SLOTTIMEOUT, STATE_SYNCSTATE,
};
use super::{FieldDef, MessageSchema};

// Raw sentinel defaults shared across position-carrying classes.
const LON_NOT_AVAILABLE: i64 = 108_600_000;
const LAT_NOT_AVAILABLE: i64 = 54_600_000;
const COG_NOT_AVAILABLE: i64 = 3600;
const HEADING_NOT_AVAILABLE: i64 = 511;
const TIMESTAMP_NOT_AVAILABLE: i64 = 60;

// -------------------------------------------------------------------------------------------------
// Enumeration tables. Presentation only; the codec never rejects values
// missing from these.

pub const REPEAT_INDICATOR_LUT: &[(u64, &str)] =
    &[(0, "default"), (3, "do not repeat any more")];

pub const POSITION_ACCURACY_LUT: &[(u64, &str)] = &[
    (0, "low (greater than 10 m)"),
    (1, "high (less than 10 m)"),
];

pub const TIME_STAMP_LUT: &[(u64, &str)] = &[
    (60, "not available/default"),
    (61, "manual input"),
    (62, "dead reckoning"),
    (63, "inoperative"),
];

pub const ASSIGNED_MODE_LUT: &[(u64, &str)] = &[
    (0, "autonomous and continuous mode"),
    (1, "assigned mode"),
];

pub const RAIM_LUT: &[(u64, &str)] = &[(0, "not in use"), (1, "in use")];

pub const FIX_TYPE_LUT: &[(u64, &str)] = &[
    (0, "undefined"),
    (1, "GPS"),
    (2, "GLONASS"),
    (3, "combined GPS/GLONASS"),
    (4, "Loran-C"),
    (5, "Chayka"),
    (6, "integrated navigation system"),
    (7, "surveyed"),
    (8, "Galileo"),
];

pub const NAV_STATUS_LUT: &[(u64, &str)] = &[
    (0, "under way using engine"),
    (1, "at anchor"),
    (2, "not under command"),
    (3, "restricted maneuverability"),
    (4, "constrained by her draught"),
    (5, "moored"),
    (6, "aground"),
    (7, "engaged in fishing"),
    (8, "under way sailing"),
    (14, "AIS-SART active"),
    (15, "not defined"),
];

pub const ALTITUDE_LUT: &[(u64, &str)] = &[(4095, "4095 or higher")];

pub const SOG_LUT: &[(u64, &str)] = &[(1022, "1022 knots or higher")];

// -------------------------------------------------------------------------------------------------
// Class A position report, messages 1-3. Message 3 reports ITDMA state but
// the 19 state bits keep the same field split either way.

const POSITION_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique ship identification number (MMSI)"),
    FieldDef::uint("NavigationStatus", 4, "What is the vessel doing")
        .with_default(15)
        .with_lookup(NAV_STATUS_LUT),
    FieldDef::int("ROT", 8, "Rate of turn").with_default(-128),
    FieldDef::udecimal("SOG", 10, 10, "Speed over ground").with_default(1023),
    FieldDef::uint("PositionAccuracy", 1, "Accuracy of positioning fixes")
        .with_lookup(POSITION_ACCURACY_LUT),
    FieldDef::decimal("Position_longitude", 28, 600_000, "East West location")
        .with_default(LON_NOT_AVAILABLE),
    FieldDef::decimal("Position_latitude", 27, 600_000, "North South location")
        .with_default(LAT_NOT_AVAILABLE),
    FieldDef::udecimal("COG", 12, 10, "Course over ground").with_default(COG_NOT_AVAILABLE),
    FieldDef::uint("TrueHeading", 9, "True heading of the vessel")
        .with_default(HEADING_NOT_AVAILABLE),
    FieldDef::uint("TimeStamp", 6, "UTC second when the report was generated")
        .with_default(TIMESTAMP_NOT_AVAILABLE)
        .with_lookup(TIME_STAMP_LUT),
    FieldDef::filler("RegionalReserved", 4, "Reserved for definition by a regional authority"),
    FieldDef::filler("Spare", 1, "Not used.  Should be set to zero"),
    FieldDef::flag("RAIM", "Receiver autonomous integrity monitoring flag")
        .with_lookup(RAIM_LUT),
    STATE_SYNCSTATE,
    STATE_SLOTTIMEOUT,
    STATE_SLOTOFFSET,
];

pub static MSG1: MessageSchema = MessageSchema {
    message_id: 1,
    name: "position",
    nominal_bits: 168,
    fields: POSITION_FIELDS,
};

pub static MSG2: MessageSchema = MessageSchema {
    message_id: 2,
    name: "position",
    nominal_bits: 168,
    fields: POSITION_FIELDS,
};

pub static MSG3: MessageSchema = MessageSchema {
    message_id: 3,
    name: "position",
    nominal_bits: 168,
    fields: POSITION_FIELDS,
};

// -------------------------------------------------------------------------------------------------
// Base-station report (message 4) and its twin, the UTC/date response
// (message 11), which answers a message 10 inquiry with the same layout.

const BSREPORT_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique ship identification number (MMSI)"),
    FieldDef::uint("Time_year", 14, "Current time stamp year 1-9999").with_default(0),
    FieldDef::uint("Time_month", 4, "Current time stamp month 1..12").with_default(0),
    FieldDef::uint("Time_day", 5, "Current time stamp day of the month 1..31").with_default(0),
    FieldDef::uint("Time_hour", 5, "Current time stamp UTC hours 0..23").with_default(24),
    FieldDef::uint("Time_min", 6, "Current time stamp minutes").with_default(60),
    FieldDef::uint("Time_sec", 6, "Current time stamp seconds").with_default(60),
    FieldDef::uint("PositionAccuracy", 1, "Accuracy of positioning fixes")
        .with_lookup(POSITION_ACCURACY_LUT),
    FieldDef::decimal("Position_longitude", 28, 600_000, "East West location of base station")
        .with_default(LON_NOT_AVAILABLE),
    FieldDef::decimal("Position_latitude", 27, 600_000, "North South location of base station")
        .with_default(LAT_NOT_AVAILABLE),
    FieldDef::uint("fixtype", 4, "Method used for positioning")
        .with_default(0)
        .with_lookup(FIX_TYPE_LUT),
    FieldDef::filler("Spare", 10, "Not used.  Should be set to zero"),
    FieldDef::flag("RAIM", "Receiver autonomous integrity monitoring flag")
        .with_lookup(RAIM_LUT),
    STATE_SYNCSTATE,
    STATE_SLOTTIMEOUT,
    STATE_SLOTOFFSET,
];

pub static MSG4: MessageSchema = MessageSchema {
    message_id: 4,
    name: "bsreport",
    nominal_bits: 168,
    fields: BSREPORT_FIELDS,
};

pub static MSG11: MessageSchema = MessageSchema {
    message_id: 11,
    name: "bsreport",
    nominal_bits: 168,
    fields: BSREPORT_FIELDS,
};

// -------------------------------------------------------------------------------------------------
// Ship static and voyage related data, message 5.

const SHIPDATA_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique ship identification number (MMSI)"),
    FieldDef::uint("AISversion", 2, "Compliant ITU-R M.1371 edition").with_default(0),
    FieldDef::uint("IMOnumber", 30, "International Maritime Organization number"),
    FieldDef::string6("callsign", 42, "Vessel radio call sign").with_default(0),
    FieldDef::string6("name", 120, "Vessel name").with_default(0),
    FieldDef::uint("shipandcargo", 8, "Type of ship and cargo").with_default(0),
    FieldDef::uint("dimA", 9, "Distance from bow to reference position").with_default(0),
    FieldDef::uint("dimB", 9, "Distance from reference position to stern").with_default(0),
    FieldDef::uint("dimC", 6, "Distance from port side to reference position").with_default(0),
    FieldDef::uint("dimD", 6, "Distance from reference position to starboard side")
        .with_default(0),
    FieldDef::uint("fixtype", 4, "Method used for positioning")
        .with_default(0)
        .with_lookup(FIX_TYPE_LUT),
    FieldDef::uint("ETAmonth", 4, "Estimated time of arrival month").with_default(0),
    FieldDef::uint("ETAday", 5, "Estimated time of arrival day of the month").with_default(0),
    FieldDef::uint("ETAhour", 5, "Estimated time of arrival UTC hours").with_default(24),
    FieldDef::uint("ETAminute", 6, "Estimated time of arrival minutes").with_default(60),
    FieldDef::udecimal("draught", 8, 10, "Maximum present static draught").with_default(0),
    FieldDef::string6("destination", 120, "Port of destination").with_default(0),
    FieldDef::flag("dte", "Data terminal equipment ready").with_default(1),
    FieldDef::filler("Spare", 1, "Not used.  Should be set to zero"),
];

pub static MSG5: MessageSchema = MessageSchema {
    message_id: 5,
    name: "shipdata",
    nominal_bits: 424,
    fields: SHIPDATA_FIELDS,
};

// -------------------------------------------------------------------------------------------------
// Binary acknowledgement, message 7. Trailing acknowledgement pairs default
// to zero when fewer than four are carried; decode reports the zeros as-is.

const BINACK_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique ship identification number (MMSI).  Source ID"),
    FieldDef::filler("Spare", 2, "Not used.  Should be set to zero"),
    FieldDef::uint("DestID1", 30, "MMSI destination to acknowledge"),
    FieldDef::uint("SeqID1", 2, "Sequence ID of the message to be acknowledged"),
    FieldDef::uint("DestID2", 30, "MMSI destination to acknowledge").with_default(0),
    FieldDef::uint("SeqID2", 2, "Sequence ID of the message to be acknowledged").with_default(0),
    FieldDef::uint("DestID3", 30, "MMSI destination to acknowledge").with_default(0),
    FieldDef::uint("SeqID3", 2, "Sequence ID of the message to be acknowledged").with_default(0),
    FieldDef::uint("DestID4", 30, "MMSI destination to acknowledge").with_default(0),
    FieldDef::uint("SeqID4", 2, "Sequence ID of the message to be acknowledged").with_default(0),
];

pub static MSG7: MessageSchema = MessageSchema {
    message_id: 7,
    name: "binack",
    nominal_bits: 168,
    fields: BINACK_FIELDS,
};

// -------------------------------------------------------------------------------------------------
// Standard search-and-rescue aircraft position report, message 9.

const SARPOSITION_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique ship identification number (MMSI)"),
    FieldDef::uint("Altitude", 12, "Altitude (GNSS)")
        .with_default(4095)
        .with_lookup(ALTITUDE_LUT),
    FieldDef::uint("SOG", 10, "Speed over ground")
        .with_default(1023)
        .with_lookup(SOG_LUT),
    FieldDef::uint("PositionAccuracy", 1, "Accuracy of positioning fixes")
        .with_lookup(POSITION_ACCURACY_LUT),
    FieldDef::decimal("Position_longitude", 28, 600_000, "East West location of the aircraft")
        .with_default(LON_NOT_AVAILABLE),
    FieldDef::decimal("Position_latitude", 27, 600_000, "North South location of the aircraft")
        .with_default(LAT_NOT_AVAILABLE),
    FieldDef::udecimal("COG", 12, 10, "Course over ground").with_default(COG_NOT_AVAILABLE),
    FieldDef::uint("TimeStamp", 6, "UTC second when the report was generated")
        .with_default(TIMESTAMP_NOT_AVAILABLE)
        .with_lookup(TIME_STAMP_LUT),
    FieldDef::filler("Reserved", 8, "Reserved for regional applications"),
    FieldDef::flag("DTE", "Data terminal equipment ready"),
    FieldDef::filler("Spare", 3, "Not used.  Should be set to zero"),
    FieldDef::uint("assigned_mode", 1, "Autonomous or assigned mode")
        .with_lookup(ASSIGNED_MODE_LUT),
    FieldDef::flag("RAIM", "Receiver autonomous integrity monitoring flag")
        .with_lookup(RAIM_LUT),
    COMM_STATE_SELECTOR,
    STATE_SYNCSTATE,
    STATE_SLOTTIMEOUT,
    STATE_SLOTOFFSET,
];

pub static MSG9: MessageSchema = MessageSchema {
    message_id: 9,
    name: "SARposition",
    nominal_bits: 168,
    fields: SARPOSITION_FIELDS,
};

// -------------------------------------------------------------------------------------------------
// Addressed safety related message, 12, and its broadcast twin, 14. The
// text tail may arrive truncated; decode takes whole characters only.

const ASRM_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique ship identification number (MMSI).  Source ID"),
    FieldDef::uint("SeqNum", 2, "Sequence number of the addressed message"),
    FieldDef::uint("DestinationID", 30, "MMSI of the destination station"),
    FieldDef::flag("RetransmitFlag", "Retransmitted message").with_default(0),
    FieldDef::filler("Spare", 1, "Not used.  Should be set to zero"),
    FieldDef::string6("Text", 936, "Safety related text").variable_tail(),
];

pub static MSG12: MessageSchema = MessageSchema {
    message_id: 12,
    name: "asrm",
    nominal_bits: 1008,
    fields: ASRM_FIELDS,
};

const SRBM_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique ship identification number (MMSI).  Source ID"),
    FieldDef::filler("Spare", 2, "Not used.  Should be set to zero"),
    // 161 whole characters; transmitters byte-align with trailing bits the
    // decoder ignores.
    FieldDef::string6("Text", 966, "Safety related text").variable_tail(),
];

pub static MSG14: MessageSchema = MessageSchema {
    message_id: 14,
    name: "srbm",
    nominal_bits: 1006,
    fields: SRBM_FIELDS,
};

// -------------------------------------------------------------------------------------------------
// Standard class B "carrier sense" position report, message 18.

const POSITIONB_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique ship identification number (MMSI)"),
    FieldDef::filler("Reserved", 8, "Reserved for regional applications"),
    FieldDef::udecimal("SOG", 10, 10, "Speed over ground").with_default(1023),
    FieldDef::uint("PositionAccuracy", 1, "Accuracy of positioning fixes")
        .with_lookup(POSITION_ACCURACY_LUT),
    FieldDef::decimal("Position_longitude", 28, 600_000, "East West location")
        .with_default(LON_NOT_AVAILABLE),
    FieldDef::decimal("Position_latitude", 27, 600_000, "North South location")
        .with_default(LAT_NOT_AVAILABLE),
    FieldDef::udecimal("COG", 12, 10, "Course over ground").with_default(COG_NOT_AVAILABLE),
    FieldDef::uint("TrueHeading", 9, "True heading of the vessel")
        .with_default(HEADING_NOT_AVAILABLE),
    FieldDef::uint("TimeStamp", 6, "UTC second when the report was generated")
        .with_default(TIMESTAMP_NOT_AVAILABLE)
        .with_lookup(TIME_STAMP_LUT),
    FieldDef::filler("RegionalReserved", 2, "Reserved for definition by a regional authority"),
    FieldDef::flag("unitflag", "Class B carrier sense unit").with_default(1),
    FieldDef::flag("displayflag", "Unit has a display for messages 12 and 14").with_default(0),
    FieldDef::flag("dscflag", "Unit is attached to a DSC VHF radio").with_default(0),
    FieldDef::flag("bandflag", "Unit can use the whole marine band").with_default(0),
    FieldDef::flag("msg22flag", "Unit can accept channel assignment by message 22")
        .with_default(0),
    FieldDef::uint("assigned_mode", 1, "Autonomous or assigned mode")
        .with_default(0)
        .with_lookup(ASSIGNED_MODE_LUT),
    FieldDef::flag("RAIM", "Receiver autonomous integrity monitoring flag")
        .with_lookup(RAIM_LUT),
    COMM_STATE_SELECTOR,
    STATE_SYNCSTATE,
    STATE_SLOTTIMEOUT,
    STATE_SLOTOFFSET,
];

pub static MSG18: MessageSchema = MessageSchema {
    message_id: 18,
    name: "positionb",
    nominal_bits: 168,
    fields: POSITIONB_FIELDS,
};

// -------------------------------------------------------------------------------------------------
// Extended class B equipment position report, message 19.

const POSITIONBEXT_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique ship identification number (MMSI)"),
    FieldDef::filler("Reserved", 8, "Reserved for regional applications"),
    FieldDef::udecimal("SOG", 10, 10, "Speed over ground").with_default(1023),
    FieldDef::uint("PositionAccuracy", 1, "Accuracy of positioning fixes")
        .with_lookup(POSITION_ACCURACY_LUT),
    FieldDef::decimal("Position_longitude", 28, 600_000, "East West location")
        .with_default(LON_NOT_AVAILABLE),
    FieldDef::decimal("Position_latitude", 27, 600_000, "North South location")
        .with_default(LAT_NOT_AVAILABLE),
    FieldDef::udecimal("COG", 12, 10, "Course over ground").with_default(COG_NOT_AVAILABLE),
    FieldDef::uint("TrueHeading", 9, "True heading of the vessel")
        .with_default(HEADING_NOT_AVAILABLE),
    FieldDef::uint("TimeStamp", 6, "UTC second when the report was generated")
        .with_default(TIMESTAMP_NOT_AVAILABLE)
        .with_lookup(TIME_STAMP_LUT),
    FieldDef::filler("RegionalReserved", 4, "Reserved for definition by a regional authority"),
    FieldDef::string6("name", 120, "Vessel name").with_default(0),
    FieldDef::uint("shipandcargo", 8, "Type of ship and cargo").with_default(0),
    FieldDef::uint("dimA", 9, "Distance from bow to reference position").with_default(0),
    FieldDef::uint("dimB", 9, "Distance from reference position to stern").with_default(0),
    FieldDef::uint("dimC", 6, "Distance from port side to reference position").with_default(0),
    FieldDef::uint("dimD", 6, "Distance from reference position to starboard side")
        .with_default(0),
    FieldDef::uint("fixtype", 4, "Method used for positioning")
        .with_default(0)
        .with_lookup(FIX_TYPE_LUT),
    FieldDef::flag("RAIM", "Receiver autonomous integrity monitoring flag")
        .with_lookup(RAIM_LUT),
    FieldDef::flag("DTE", "Data terminal equipment ready").with_default(1),
    FieldDef::uint("assigned_mode", 1, "Autonomous or assigned mode")
        .with_default(0)
        .with_lookup(ASSIGNED_MODE_LUT),
    FieldDef::filler("Spare", 4, "Not used.  Should be set to zero"),
];

pub static MSG19: MessageSchema = MessageSchema {
    message_id: 19,
    name: "positionbext",
    nominal_bits: 312,
    fields: POSITIONBEXT_FIELDS,
};

// -------------------------------------------------------------------------------------------------
// Aids-to-navigation report, message 21. The name extension tail is only
// transmitted when the name does not fit the fixed field.

const ATONREPORT_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique identification number (MMSI)"),
    FieldDef::uint("aton_type", 5, "Type of aid to navigation").with_default(0),
    FieldDef::string6("name", 120, "Name of the aid to navigation").with_default(0),
    FieldDef::uint("PositionAccuracy", 1, "Accuracy of positioning fixes")
        .with_lookup(POSITION_ACCURACY_LUT),
    FieldDef::decimal("Position_longitude", 28, 600_000, "East West location")
        .with_default(LON_NOT_AVAILABLE),
    FieldDef::decimal("Position_latitude", 27, 600_000, "North South location")
        .with_default(LAT_NOT_AVAILABLE),
    FieldDef::uint("dimA", 9, "Distance from bow to reference position").with_default(0),
    FieldDef::uint("dimB", 9, "Distance from reference position to stern").with_default(0),
    FieldDef::uint("dimC", 6, "Distance from port side to reference position").with_default(0),
    FieldDef::uint("dimD", 6, "Distance from reference position to starboard side")
        .with_default(0),
    FieldDef::uint("fixtype", 4, "Method used for positioning")
        .with_default(0)
        .with_lookup(FIX_TYPE_LUT),
    FieldDef::uint("TimeStamp", 6, "UTC second when the report was generated")
        .with_default(TIMESTAMP_NOT_AVAILABLE)
        .with_lookup(TIME_STAMP_LUT),
    FieldDef::flag("off_position", "Aid is off its charted position").with_default(0),
    FieldDef::filler("RegionalReserved", 8, "Reserved for regional applications"),
    FieldDef::flag("RAIM", "Receiver autonomous integrity monitoring flag")
        .with_lookup(RAIM_LUT),
    FieldDef::flag("virtual_aton", "Virtual aid to navigation").with_default(0),
    FieldDef::uint("assigned_mode", 1, "Autonomous or assigned mode")
        .with_default(0)
        .with_lookup(ASSIGNED_MODE_LUT),
    FieldDef::filler("Spare", 1, "Not used.  Should be set to zero"),
    // 14 whole characters; transmitters byte-align with trailing bits the
    // decoder ignores.
    FieldDef::string6("name_extension", 84, "Continuation of the name field")
        .with_default(0)
        .variable_tail(),
];

pub static MSG21: MessageSchema = MessageSchema {
    message_id: 21,
    name: "atonreport",
    nominal_bits: 356,
    fields: ATONREPORT_FIELDS,
};

// -------------------------------------------------------------------------------------------------
// Class B static data report, message 24. The part number in bits [38:40]
// selects between the two layouts sharing the message number.

const STATDATA_A_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique ship identification number (MMSI)"),
    FieldDef::uint("partnum", 2, "Part number of the report"),
    FieldDef::string6("name", 120, "Vessel name"),
];

pub static MSG24A: MessageSchema = MessageSchema {
    message_id: 24,
    name: "statdataA",
    nominal_bits: 160,
    fields: STATDATA_A_FIELDS,
};

const STATDATA_B_FIELDS: &[FieldDef] = &[
    FieldDef::message_id(),
    FieldDef::uint("RepeatIndicator", 2, "How many times the message has been repeated")
        .with_default(0)
        .with_lookup(REPEAT_INDICATOR_LUT),
    FieldDef::uint("UserID", 30, "Unique ship identification number (MMSI)"),
    FieldDef::uint("partnum", 2, "Part number of the report"),
    FieldDef::uint("shipandcargo", 8, "Type of ship and cargo").with_default(0),
    FieldDef::string6("vendorid", 42, "Unique identification of the unit manufacturer")
        .with_default(0),
    FieldDef::string6("callsign", 42, "Vessel radio call sign").with_default(0),
    FieldDef::uint("dimA", 9, "Distance from bow to reference position").with_default(0),
    FieldDef::uint("dimB", 9, "Distance from reference position to stern").with_default(0),
    FieldDef::uint("dimC", 6, "Distance from port side to reference position").with_default(0),
    FieldDef::uint("dimD", 6, "Distance from reference position to starboard side")
        .with_default(0),
    FieldDef::filler("Spare", 6, "Not used.  Should be set to zero"),
];

pub static MSG24B: MessageSchema = MessageSchema {
    message_id: 24,
    name: "statdataB",
    nominal_bits: 168,
    fields: STATDATA_B_FIELDS,
};

// -------------------------------------------------------------------------------------------------

/// Every registered message class, in message-number order. Message 24
/// appears twice; [`super::schema_for`] disambiguates on the part number.
pub static CLASSES: &[&MessageSchema] = &[
    &MSG1, &MSG2, &MSG3, &MSG4, &MSG5, &MSG7, &MSG9, &MSG11, &MSG12, &MSG14, &MSG18, &MSG19,
    &MSG21, &MSG24A, &MSG24B,
];

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::super::{decode, decode_as, encode, encode_message, Dec, Record};
    use super::super::{Auto, FieldType};
    use super::*;
    use crate::error::CodecError;

    /// A record that fills every non-auto field of a class with a small
    /// in-range value of the right type.
    fn filler_record(schema: &MessageSchema) -> Record {
        let mut r = Record::new();
        for field in schema.fields {
            if field.auto.is_some() {
                continue;
            }
            match field.ty {
                FieldType::UInt => r.set(field.name, 1u64),
                FieldType::Int => r.set(field.name, -1i64),
                FieldType::Bool => r.set(field.name, true),
                FieldType::Decimal { scale } => r.set(field.name, Dec::new(-1, scale)),
                FieldType::UDecimal { scale } => r.set(field.name, Dec::new(1, scale)),
                FieldType::String6 => r.set(field.name, "A"),
            }
        }
        if r.contains("partnum") {
            let part = if schema.nominal_bits == 160 { 0u32 } else { 1u32 };
            r.set("partnum", part);
        }
        r
    }

    #[test]
    fn test_field_tables_are_consistent() {
        // Widths sum to the declared total and names are unique per class.
        for schema in CLASSES {
            assert_eq!(
                schema.total_width(),
                schema.nominal_bits,
                "width sum mismatch in message {}",
                schema.name
            );
            let names = schema.field_names();
            for (i, name) in names.iter().enumerate() {
                assert!(
                    !names[i + 1..].contains(name),
                    "duplicate field {} in message {}",
                    name,
                    schema.name
                );
            }
            assert_eq!(schema.fields[0].auto, Some(Auto::MessageId));
        }
    }

    #[test]
    fn test_every_class_round_trips() {
        for schema in CLASSES {
            let record = filler_record(schema);
            let bv = encode(schema, &record).unwrap();
            assert_eq!(bv.len(), schema.nominal_bits, "message {}", schema.name);
            // The first six bits always decode to the class number.
            assert_eq!(bv.as_uint(0, 6).unwrap(), schema.message_id as u64);
            let decoded = decode(&bv).unwrap();
            for (name, value) in record.iter() {
                assert_eq!(
                    decoded.get(name),
                    Some(value),
                    "field {} of message {}",
                    name,
                    schema.name
                );
            }
        }
    }

    #[test]
    fn test_binack_scenario() {
        let record = Record::new()
            .with("UserID", 1193046u64)
            .with("DestID1", 1193001u64)
            .with("SeqID1", 1u32)
            .with("DestID2", 1193002u64)
            .with("SeqID2", 2u32)
            .with("DestID3", 1193003u64)
            .with("SeqID3", 3u32)
            .with("DestID4", 1193004u64)
            .with("SeqID4", 0u32)
            .with("RepeatIndicator", 1u32);
        let bv = encode_message(7, &record).unwrap();
        assert_eq!(bv.len(), 168);
        let decoded = decode(&bv).unwrap();
        for (name, value) in record.iter() {
            assert_eq!(decoded.get(name), Some(value), "field {}", name);
        }
        assert_eq!(decoded.uint("MessageID"), Some(7));
        assert_eq!(decoded.uint("Spare"), Some(0));
        // Acknowledgement pairs sit at their fixed offsets.
        assert_eq!(bv.as_uint(40, 70).unwrap(), 1193001);
        assert_eq!(bv.as_uint(70, 72).unwrap(), 1);
        assert_eq!(bv.as_uint(166, 168).unwrap(), 0);
    }

    #[test]
    fn test_sarposition_scenario() {
        let lon = -122.16328055555556;
        let lat = 37.424458333333334;
        let record = Record::new()
            .with("UserID", 1193046u64)
            .with("Altitude", 1001u32)
            .with("SOG", 342u32)
            .with("PositionAccuracy", 1u32)
            .with("Position_longitude", Dec::from_f64(lon, 600_000))
            .with("Position_latitude", Dec::from_f64(lat, 600_000))
            .with("COG", Dec::from_f64(34.5, 10))
            .with("TimeStamp", 35u32)
            .with("DTE", false)
            .with("assigned_mode", 1u32)
            .with("RAIM", false)
            .with("comm_state", 1u32)
            .with("state_syncstate", 2u32)
            .with("state_slottimeout", 0u32)
            .with("state_slotoffset", 1221u32)
            .with("RepeatIndicator", 1u32);
        let bv = encode_message(9, &record).unwrap();
        assert_eq!(bv.len(), 168);

        // Field offsets of the wire layout.
        assert_eq!(bv.as_uint(0, 6).unwrap(), 9);
        assert_eq!(bv.as_uint(6, 8).unwrap(), 1);
        assert_eq!(bv.as_uint(8, 38).unwrap(), 1193046);
        assert_eq!(bv.as_uint(38, 50).unwrap(), 1001);
        assert_eq!(bv.as_uint(50, 60).unwrap(), 342);
        assert_eq!(bv.as_uint(60, 61).unwrap(), 1);
        assert_eq!(bv.as_int(61, 89).unwrap(), -73_297_968);
        assert_eq!(bv.as_int(89, 116).unwrap(), 22_454_675);
        assert_eq!(bv.as_uint(116, 128).unwrap(), 345);
        assert_eq!(bv.as_uint(128, 134).unwrap(), 35);
        assert_eq!(bv.as_uint(134, 142).unwrap(), 0);
        assert_eq!(bv.as_uint(142, 143).unwrap(), 0);
        assert_eq!(bv.as_uint(146, 147).unwrap(), 1);
        assert_eq!(bv.as_uint(148, 149).unwrap(), 1);
        assert_eq!(bv.as_uint(149, 151).unwrap(), 2);
        assert_eq!(bv.as_uint(154, 168).unwrap(), 1221);

        let decoded = decode(&bv).unwrap();
        assert_eq!(decoded.uint("Altitude"), Some(1001));
        assert_eq!(decoded.uint("SOG"), Some(342));
        assert_eq!(decoded.boolean("DTE"), Some(false));
        assert_eq!(decoded.uint("comm_state"), Some(1));
        assert_eq!(decoded.uint("state_slotoffset"), Some(1221));
        let d_lon = decoded.decimal("Position_longitude").unwrap();
        let d_lat = decoded.decimal("Position_latitude").unwrap();
        let d_cog = decoded.decimal("COG").unwrap();
        assert_eq!(d_lon, Dec::from_f64(lon, 600_000));
        assert!((d_lon.to_f64() - lon).abs() < 1.0 / 600_000.0);
        assert!((d_lat.to_f64() - lat).abs() < 1.0 / 600_000.0);
        assert!((d_cog.to_f64() - 34.5).abs() < 0.1);
    }

    #[test]
    fn test_utc_response_scenario() {
        let record = Record::new()
            .with("UserID", 1193046u64)
            .with("Time_year", 2u32)
            .with("Time_month", 2u32)
            .with("Time_day", 28u32)
            .with("Time_hour", 23u32)
            .with("Time_min", 45u32)
            .with("Time_sec", 54u32)
            .with("PositionAccuracy", 1u32)
            .with("Position_longitude", Dec::from_f64(-122.16328055555556, 600_000))
            .with("Position_latitude", Dec::from_f64(37.424458333333334, 600_000))
            .with("fixtype", 1u32)
            .with("RAIM", false)
            .with("state_syncstate", 2u32)
            .with("state_slottimeout", 0u32)
            .with("state_slotoffset", 1221u32)
            .with("RepeatIndicator", 1u32);
        let bv = encode_message(11, &record).unwrap();
        assert_eq!(bv.len(), 168);
        assert_eq!(bv.as_uint(0, 6).unwrap(), 11);
        assert_eq!(bv.as_uint(38, 52).unwrap(), 2);
        assert_eq!(bv.as_uint(61, 66).unwrap(), 23);
        assert_eq!(bv.as_uint(138, 148).unwrap(), 0);
        let decoded = decode(&bv).unwrap();
        for (name, value) in record.iter() {
            match name {
                "Position_longitude" | "Position_latitude" => {}
                _ => assert_eq!(decoded.get(name), Some(value), "field {}", name),
            }
        }
        assert_eq!(
            decoded.decimal("Position_longitude"),
            record.decimal("Position_longitude")
        );
        assert_eq!(decoded.uint("MessageID"), Some(11));
        assert_eq!(decoded.uint("Spare"), Some(0));
    }

    #[test]
    fn test_sarposition_sentinel_defaults() {
        // Omitting the optional fields emits the "not available" sentinels.
        let record = Record::new()
            .with("UserID", 1193046u64)
            .with("PositionAccuracy", 0u32)
            .with("DTE", true)
            .with("assigned_mode", 0u32)
            .with("RAIM", false)
            .with("comm_state", 0u32)
            .with("state_syncstate", 0u32)
            .with("state_slottimeout", 0u32)
            .with("state_slotoffset", 0u32);
        let bv = encode_message(9, &record).unwrap();
        let decoded = decode(&bv).unwrap();
        assert_eq!(decoded.decimal("Position_longitude").unwrap().to_f64(), 181.0);
        assert_eq!(decoded.decimal("Position_latitude").unwrap().to_f64(), 91.0);
        assert_eq!(decoded.decimal("COG").unwrap().to_f64(), 360.0);
        assert_eq!(decoded.uint("SOG"), Some(1023));
        assert_eq!(decoded.uint("Altitude"), Some(4095));
        assert_eq!(decoded.uint("TimeStamp"), Some(60));
        assert_eq!(decoded.uint("RepeatIndicator"), Some(0));
    }

    #[test]
    fn test_default_substitution_is_bit_exact() {
        // Supplying a default explicitly yields the same bits as omitting it.
        let implicit = Record::new()
            .with("UserID", 1u64)
            .with("PositionAccuracy", 0u32)
            .with("DTE", true)
            .with("assigned_mode", 0u32)
            .with("RAIM", true)
            .with("comm_state", 0u32)
            .with("state_syncstate", 0u32)
            .with("state_slottimeout", 0u32)
            .with("state_slotoffset", 0u32);
        let explicit = implicit
            .clone()
            .with("RepeatIndicator", 0u32)
            .with("Altitude", 4095u32)
            .with("SOG", 1023u32)
            .with("Position_longitude", Dec::new(108_600_000, 600_000))
            .with("Position_latitude", Dec::new(54_600_000, 600_000))
            .with("COG", Dec::new(3600, 10))
            .with("TimeStamp", 60u32);
        assert_eq!(
            encode_message(9, &implicit).unwrap(),
            encode_message(9, &explicit).unwrap()
        );
    }

    #[test]
    fn test_out_of_range_sequence_id() {
        let record = Record::new()
            .with("UserID", 1193046u64)
            .with("DestID1", 1193001u64)
            .with("SeqID1", 4u32);
        assert_eq!(
            encode_message(7, &record),
            Err(CodecError::OutOfRange {
                field: "SeqID1",
                value: 4,
                width: 2
            })
        );
    }

    #[test]
    fn test_statdata_parts_route_on_partnum() {
        let part_a = Record::new()
            .with("UserID", 367001234u64)
            .with("partnum", 0u32)
            .with("name", "WANDERER");
        let bv = encode_message(24, &part_a).unwrap();
        assert_eq!(bv.len(), 160);
        let decoded = decode(&bv).unwrap();
        assert_eq!(decoded.text("name"), Some("WANDERER"));

        let part_b = Record::new()
            .with("UserID", 367001234u64)
            .with("partnum", 1u32)
            .with("callsign", "KM1234");
        let bv = encode_message(24, &part_b).unwrap();
        assert_eq!(bv.len(), 168);
        let decoded = decode(&bv).unwrap();
        assert_eq!(decoded.text("callsign"), Some("KM1234"));
        assert_eq!(decoded.text("vendorid"), Some(""));
    }

    #[test]
    fn test_safety_text_round_trip_and_truncated_tail() {
        let record = Record::new()
            .with("UserID", 366999707u64)
            .with("SeqNum", 0u32)
            .with("DestinationID", 538003913u64)
            .with("Text", "PLS ACK THIS TEST");
        let bv = encode_message(12, &record).unwrap();
        assert_eq!(bv.len(), 1008);
        let decoded = decode(&bv).unwrap();
        assert_eq!(decoded.text("Text"), Some("PLS ACK THIS TEST"));

        // A transmitter that stops after the text it has still decodes;
        // trailing partial characters are not invented.
        let short = bv.slice(0, 72 + 17 * 6).unwrap();
        let decoded = decode(&short).unwrap();
        assert_eq!(decoded.text("Text"), Some("PLS ACK THIS TEST"));
    }

    #[test]
    fn test_shipdata_strings() {
        let record = filler_record(&MSG5)
            .with("name", "M/V EXAMPLE")
            .with("callsign", "WDL1234")
            .with("destination", "OAKLAND");
        let bv = encode(&MSG5, &record).unwrap();
        let decoded = decode_as(&MSG5, &bv).unwrap();
        assert_eq!(decoded.text("name"), Some("M/V EXAMPLE"));
        assert_eq!(decoded.text("callsign"), Some("WDL1234"));
        assert_eq!(decoded.text("destination"), Some("OAKLAND"));
    }

    #[test]
    fn test_truncated_fixed_message_fails() {
        let record = filler_record(&MSG9);
        let bv = encode(&MSG9, &record).unwrap();
        let short = bv.slice(0, 150).unwrap();
        match decode(&short) {
            Err(CodecError::TruncatedBuffer { offset, .. }) => assert!(offset >= 149),
            other => panic!("expected TruncatedBuffer, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_bits_are_ignored() {
        // Some transmitters pad past the declared layout.
        let record = filler_record(&MSG1);
        let mut bv = encode(&MSG1, &record).unwrap();
        bv.append(&crate::bits::BitBuffer::from_bits("010101").unwrap());
        let decoded = decode(&bv).unwrap();
        assert_eq!(decoded.uint("UserID"), Some(1));
    }

    #[test]
    fn test_spare_bits_survive_strict_decode() {
        // Regional extensions in Reserved bits are not flattened to zero.
        let record = filler_record(&MSG9);
        let bv = encode(&MSG9, &record).unwrap();
        let mut tampered = bv.slice(0, 134).unwrap();
        tampered.append(&crate::bits::BitBuffer::from_uint(0xA5, 8).unwrap());
        tampered.append(&bv.slice(142, 168).unwrap());
        let decoded = decode(&tampered).unwrap();
        assert_eq!(decoded.uint("Reserved"), Some(0xA5));
        // Re-encoding flattens the filler back to the class constant.
        let reencoded = encode(&MSG9, &decoded).unwrap();
        assert_eq!(reencoded.as_uint(134, 142).unwrap(), 0);
    }

    #[test]
    fn test_definition_table_rows() {
        let rows = MSG9.definition_table();
        assert_eq!(rows.len(), MSG9.fields.len());
        assert_eq!(rows[0].0, "MessageID");
        assert_eq!(rows[0].1, 6);
        let (name, width, _) = rows[rows.len() - 1];
        assert_eq!(name, "state_slotoffset");
        assert_eq!(width, 14);
    }

    #[test]
    fn test_lookup_labels() {
        let field = MSG9.field("TimeStamp").unwrap();
        assert_eq!(field.label(61), Some("manual input"));
        assert_eq!(field.label(12), None);
        let field = MSG11.field("fixtype").unwrap();
        assert_eq!(field.label(8), Some("Galileo"));
    }
}
