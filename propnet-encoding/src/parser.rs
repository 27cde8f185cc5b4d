//! Provides types and methods for parsing radio packets.
//!
//! A received frame is wrapped in [`Packet`], which borrows the bytes and
//! exposes the header fields and a lazy iterator over the payload. For
//! host-side consumers that want everything decoded up front there is
//! [`PacketSummary`].

use heapless::Vec;

use crate::packet_length::packet::header::{
    DESTINATION_OFFSET, HEADER_LEN, KIND_OFFSET, SOURCE_OFFSET, TIMESTAMP_OFFSET,
};
use crate::packet_length::packet::payload::{
    PAYLOAD_MAX_LEN, SETTINGS_MAX_COUNT, SETTING_INDEX_LEN, SETTING_U16_LEN,
};
use crate::packet_length::packet::PACKET_LEN;
use crate::types::{PacketType, Setting, Value, ValueKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Error {
    InvalidPacketLength(usize),
    UnknownPacketType(u8),
    UnknownSetting(u8),
    UnknownEventKind(u8),
    IncompleteSettingValue,
    /// More settings than one packet can carry.
    TooManySettings,
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

/// Zero-copy view over one received packet.
///
/// # Examples
///
/// ```
/// use propnet_encoding::parser::Packet;
/// use propnet_encoding::types::{PacketType, Setting, Value};
///
/// let bytes = [0x02, 0x00, 0x01, 0x00, 0x01, 0x45, 0x00, 0x03, 0x01, 0x00];
/// let packet = Packet::new(&bytes[..]).unwrap();
/// assert_eq!(packet.destination(), 2);
/// assert_eq!(packet.kind(), PacketType::Config);
/// let mut settings = packet.settings();
/// assert_eq!(settings.next(), Some(Ok((Setting::PatternLed, Value::Uint16(1)))));
/// assert_eq!(settings.next(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet<T>(T);

impl<T: AsRef<[u8]>> Packet<T> {
    /// Wraps `data` as a packet, checking the frame length and the type
    /// byte. Payload settings are not validated here; they surface through
    /// [`Packet::settings`].
    pub fn new(data: T) -> Result<Self, Error> {
        let bytes = data.as_ref();
        if bytes.len() < HEADER_LEN || bytes.len() > PACKET_LEN {
            return Err(Error::InvalidPacketLength(bytes.len()));
        }
        PacketType::try_from(bytes[KIND_OFFSET])?;
        Ok(Packet(data))
    }

    /// Address the packet was sent to.
    pub fn destination(&self) -> u16 {
        read_u16(self.0.as_ref(), DESTINATION_OFFSET)
    }

    /// Address of the sending device.
    pub fn source(&self) -> u16 {
        read_u16(self.0.as_ref(), SOURCE_OFFSET)
    }

    /// Packet type from the header.
    pub fn kind(&self) -> PacketType {
        match PacketType::try_from(self.0.as_ref()[KIND_OFFSET]) {
            Ok(kind) => kind,
            // Checked in new.
            Err(_) => unreachable!(),
        }
    }

    /// Timestamp carried in the header.
    pub fn timestamp(&self) -> u16 {
        read_u16(self.0.as_ref(), TIMESTAMP_OFFSET)
    }

    /// The bytes following the header.
    pub fn payload(&self) -> &[u8] {
        &self.0.as_ref()[HEADER_LEN..]
    }

    /// Iterator over the setting values carried in the payload.
    pub fn settings(&self) -> SettingsIterator<'_> {
        SettingsIterator::new(self.payload())
    }

    /// The whole frame as transmitted.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_ref()
    }
}

/// Iterator over the setting values in a packet payload.
///
/// Decoding stops at the first malformed entry; its error is yielded once
/// and the iterator is exhausted afterwards.
pub struct SettingsIterator<'a> {
    data: &'a [u8],
    index: usize,
}

impl<'a> SettingsIterator<'a> {
    /// Creates an iterator over a raw payload slice.
    pub fn new(data: &'a [u8]) -> Self {
        SettingsIterator { data, index: 0 }
    }
}

impl<'a> Iterator for SettingsIterator<'a> {
    type Item = Result<(Setting, Value<'a>), Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.data.len() {
            return None;
        }
        let setting = match Setting::try_from(self.data[self.index]) {
            Ok(setting) => setting,
            Err(err) => {
                self.index = self.data.len();
                return Some(Err(err));
            }
        };
        let offset = self.index + SETTING_INDEX_LEN;
        match setting.value_kind() {
            ValueKind::Uint16 => {
                if self.data.len() < offset + SETTING_U16_LEN {
                    self.index = self.data.len();
                    return Some(Err(Error::IncompleteSettingValue));
                }
                let value = read_u16(self.data, offset);
                self.index = offset + SETTING_U16_LEN;
                Some(Ok((setting, Value::Uint16(value))))
            }
            // A raw value owns the rest of the payload.
            ValueKind::Bytes => {
                self.index = self.data.len();
                Some(Ok((setting, Value::Bytes(&self.data[offset..]))))
            }
        }
    }
}

/// Owned value decoded out of a payload, for use after the frame buffer is
/// gone.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SummaryValue {
    /// Little-endian integer value.
    Uint16(u16),
    /// Raw bytes, copied from the tail of the payload.
    Bytes(Vec<u8, PAYLOAD_MAX_LEN>),
}

/// Fully decoded form of one packet.
///
/// Everything is copied out of the frame, so a summary outlives the receive
/// buffer it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacketSummary {
    /// Address the packet was sent to.
    pub destination: u16,
    /// Address of the sending device.
    pub source: u16,
    /// Packet type from the header.
    pub kind: PacketType,
    /// Timestamp carried in the header.
    pub timestamp: u16,
    /// Length of the frame including the header.
    pub total_length: usize,
    /// Decoded settings in wire order.
    pub settings: Vec<(Setting, SummaryValue), SETTINGS_MAX_COUNT>,
}

impl PacketSummary {
    /// Parses and fully decodes one frame. Fails on any malformed setting,
    /// not just on a malformed header.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let packet = Packet::new(bytes)?;
        let mut settings = Vec::new();
        for entry in packet.settings() {
            let (setting, value) = entry?;
            let value = match value {
                Value::Uint16(v) => SummaryValue::Uint16(v),
                Value::Bytes(b) => {
                    SummaryValue::Bytes(Vec::from_slice(b).map_err(|_| Error::TooManySettings)?)
                }
            };
            settings.push((setting, value)).map_err(|_| Error::TooManySettings)?;
        }
        Ok(PacketSummary {
            destination: packet.destination(),
            source: packet.source(),
            kind: packet.kind(),
            timestamp: packet.timestamp(),
            total_length: bytes.len(),
            settings,
        })
    }
}
