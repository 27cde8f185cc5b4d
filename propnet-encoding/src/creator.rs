//! Provides types and methods for creating radio packets.
//!
//! See [PacketCreator.new](struct.PacketCreator.html#method.new) for an example.

use heapless::Vec;

use crate::packet_length::packet::header::{
    DESTINATION_LEN, DESTINATION_OFFSET, HEADER_LEN, KIND_OFFSET, SOURCE_LEN, SOURCE_OFFSET,
    TIMESTAMP_LEN, TIMESTAMP_OFFSET,
};
use crate::packet_length::packet::payload::{
    PAYLOAD_MAX_LEN, SETTINGS_MAX_COUNT, SETTING_INDEX_LEN, SETTING_U16_LEN,
};
use crate::packet_length::packet::PACKET_LEN;
use crate::types::{PacketType, Setting, Value};

#[derive(Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[allow(missing_docs)]
pub enum Error {
    MissingDestination,
    MissingSource,
    MissingKind,
    MissingTimestamp,
    BufferTooShort,
    ValueKindMismatch,
    PayloadTooLong(usize),
    PacketTooLong(usize),
    StagingFull,
}

/// PacketCreator serves for creating a binary representation of one radio
/// packet: the four header fields plus an insertion-ordered staging area for
/// setting values.
///
/// # Examples
///
/// ```
/// use propnet_encoding::creator::PacketCreator;
/// use propnet_encoding::types::{PacketType, Setting, Value};
///
/// let mut creator = PacketCreator::new();
/// creator
///     .set_destination(2)
///     .set_source(1)
///     .set_kind(PacketType::Config)
///     .set_timestamp(69);
/// creator.stage(Setting::PatternLed, Value::Uint16(1)).unwrap();
/// let packet = creator.encode().unwrap();
/// assert_eq!(&packet[..], &[0x02, 0x00, 0x01, 0x00, 0x01, 0x45, 0x00, 0x03, 0x01, 0x00]);
/// ```
#[derive(Debug, Default)]
pub struct PacketCreator<'a> {
    destination: Option<u16>,
    source: Option<u16>,
    kind: Option<PacketType>,
    timestamp: Option<u16>,
    staged: Vec<(Setting, Value<'a>), SETTINGS_MAX_COUNT>,
}

impl<'a> PacketCreator<'a> {
    /// Creates a PacketCreator with nothing set and nothing staged.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the destination device address.
    pub fn set_destination(&mut self, destination: u16) -> &mut Self {
        self.destination = Some(destination);
        self
    }

    /// Sets the sending device address.
    pub fn set_source(&mut self, source: u16) -> &mut Self {
        self.source = Some(source);
        self
    }

    /// Sets the packet type.
    pub fn set_kind(&mut self, kind: PacketType) -> &mut Self {
        self.kind = Some(kind);
        self
    }

    /// Sets the timestamp carried in the header.
    pub fn set_timestamp(&mut self, timestamp: u16) -> &mut Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Stages a setting value for the payload. Values keep their staging
    /// order on the wire and re-staging an index overwrites in place. A
    /// raw-bytes value reads to the end of the payload on decode, so it
    /// belongs last.
    pub fn stage(&mut self, setting: Setting, value: Value<'a>) -> Result<&mut Self, Error> {
        if value.kind() != setting.value_kind() {
            return Err(Error::ValueKindMismatch);
        }
        if let Some(slot) = self.staged.iter_mut().find(|(staged, _)| *staged == setting) {
            slot.1 = value;
        } else {
            self.staged.push((setting, value)).map_err(|_| Error::StagingFull)?;
        }
        Ok(self)
    }

    /// Drops a staged setting. Later values close the gap, keeping their
    /// relative order.
    pub fn unstage(&mut self, setting: Setting) -> &mut Self {
        if let Some(pos) = self.staged.iter().position(|(staged, _)| *staged == setting) {
            self.staged.remove(pos);
        }
        self
    }

    /// Payload bytes currently staged.
    pub fn payload_len(&self) -> usize {
        self.staged
            .iter()
            .map(|(_, value)| SETTING_INDEX_LEN + value.encoded_len())
            .sum()
    }

    /// Builds the header. Every field must have been set; there are no
    /// defaults for addressing.
    pub fn encode_header(&self) -> Result<[u8; HEADER_LEN], Error> {
        let destination = self.destination.ok_or(Error::MissingDestination)?;
        let source = self.source.ok_or(Error::MissingSource)?;
        let kind = self.kind.ok_or(Error::MissingKind)?;
        let timestamp = self.timestamp.ok_or(Error::MissingTimestamp)?;

        let mut header = [0u8; HEADER_LEN];
        header[DESTINATION_OFFSET..DESTINATION_OFFSET + DESTINATION_LEN]
            .copy_from_slice(&destination.to_le_bytes());
        header[SOURCE_OFFSET..SOURCE_OFFSET + SOURCE_LEN].copy_from_slice(&source.to_le_bytes());
        header[KIND_OFFSET] = kind as u8;
        header[TIMESTAMP_OFFSET..TIMESTAMP_OFFSET + TIMESTAMP_LEN]
            .copy_from_slice(&timestamp.to_le_bytes());
        Ok(header)
    }

    /// Emits the staged values into `buf` in staging order and returns the
    /// number of bytes written. Nothing is written unless the whole payload
    /// fits the wire limit and the buffer.
    pub fn encode_payload(&self, buf: &mut [u8]) -> Result<usize, Error> {
        let payload_len = self.payload_len();
        if payload_len > PAYLOAD_MAX_LEN {
            return Err(Error::PayloadTooLong(payload_len));
        }
        if buf.len() < payload_len {
            return Err(Error::BufferTooShort);
        }

        let mut offset = 0;
        for (setting, value) in &self.staged {
            buf[offset] = *setting as u8;
            offset += SETTING_INDEX_LEN;
            match value {
                Value::Uint16(v) => {
                    buf[offset..offset + SETTING_U16_LEN].copy_from_slice(&v.to_le_bytes());
                    offset += SETTING_U16_LEN;
                }
                Value::Bytes(bytes) => {
                    buf[offset..offset + bytes.len()].copy_from_slice(bytes);
                    offset += bytes.len();
                }
            }
        }
        Ok(offset)
    }

    /// Builds the full packet, header plus payload. Any failure leaves no
    /// observable effect.
    pub fn encode(&self) -> Result<Vec<u8, PACKET_LEN>, Error> {
        let header = self.encode_header()?;
        let mut payload = [0u8; PAYLOAD_MAX_LEN];
        let payload_len = self.encode_payload(&mut payload)?;

        let mut packet = Vec::new();
        if packet.extend_from_slice(&header).is_err()
            || packet.extend_from_slice(&payload[..payload_len]).is_err()
        {
            return Err(Error::PacketTooLong(HEADER_LEN + payload_len));
        }
        Ok(packet)
    }
}
