//! Protocol vocabulary shared by the packet creator and parser.

use crate::packet_length::packet::payload::SETTING_U16_LEN;
use crate::parser::Error;

/// Discriminates what a packet carries. The codes are wire-critical; `Ack`
/// and `Nack` sit apart from the rest so they survive as flag-like values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum PacketType {
    Sync = 0,
    Config = 1,
    Event = 2,
    Start = 3,
    Stop = 4,
    Error = 5,
    Ack = 64,
    Nack = 128,
}

impl TryFrom<u8> for PacketType {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        Ok(match v {
            0 => PacketType::Sync,
            1 => PacketType::Config,
            2 => PacketType::Event,
            3 => PacketType::Start,
            4 => PacketType::Stop,
            5 => PacketType::Error,
            64 => PacketType::Ack,
            128 => PacketType::Nack,
            _ => return Err(Error::UnknownPacketType(v)),
        })
    }
}

/// Vocabulary for event-typed packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum EventKind {
    Init = 1,
    Start = 2,
    Stop = 3,
    Sabotage = 4,
    Completed = 5,
    Running = 6,
    Pause = 7,
}

impl TryFrom<u8> for EventKind {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        Ok(match v {
            1 => EventKind::Init,
            2 => EventKind::Start,
            3 => EventKind::Stop,
            4 => EventKind::Sabotage,
            5 => EventKind::Completed,
            6 => EventKind::Running,
            7 => EventKind::Pause,
            _ => return Err(Error::UnknownEventKind(v)),
        })
    }
}

impl From<EventKind> for u16 {
    fn from(kind: EventKind) -> u16 {
        kind as u16
    }
}

/// Shape of a setting value on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueKind {
    /// Two little-endian bytes
    Uint16,
    /// Unframed bytes running to the end of the payload
    Bytes,
}

/// Closed schema of the setting indices a payload can carry. `Raw` is the
/// only raw-bytes valued index; every other index carries a u16.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub enum Setting {
    Raw = 0,
    RoundCount = 1,
    ButtonLockout = 2,
    PatternLed = 3,
    PatternTime = 4,
    PatternLedCount = 5,
    TaskValue = 6,
    SettingCount = 7,
    RoundDifficulty = 8,
}

impl Setting {
    /// The value shape this index is decoded with.
    pub fn value_kind(self) -> ValueKind {
        match self {
            Setting::Raw => ValueKind::Bytes,
            _ => ValueKind::Uint16,
        }
    }
}

impl TryFrom<u8> for Setting {
    type Error = Error;

    fn try_from(v: u8) -> Result<Self, Error> {
        Ok(match v {
            0 => Setting::Raw,
            1 => Setting::RoundCount,
            2 => Setting::ButtonLockout,
            3 => Setting::PatternLed,
            4 => Setting::PatternTime,
            5 => Setting::PatternLedCount,
            6 => Setting::TaskValue,
            7 => Setting::SettingCount,
            8 => Setting::RoundDifficulty,
            _ => return Err(Error::UnknownSetting(v)),
        })
    }
}

/// A staged or decoded setting value. UTF-8 strings travel as their bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub enum Value<'a> {
    /// Two little-endian bytes on the wire
    Uint16(u16),
    /// Raw bytes; on decode these run to the end of the payload
    Bytes(&'a [u8]),
}

impl Value<'_> {
    /// Shape of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Uint16(_) => ValueKind::Uint16,
            Value::Bytes(_) => ValueKind::Bytes,
        }
    }

    /// Bytes this value occupies on the wire, index byte excluded.
    pub fn encoded_len(&self) -> usize {
        match self {
            Value::Uint16(_) => SETTING_U16_LEN,
            Value::Bytes(bytes) => bytes.len(),
        }
    }
}
