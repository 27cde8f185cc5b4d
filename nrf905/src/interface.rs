use embedded_hal::spi::{Operation, SpiDevice};

use crate::mod_params::RadioError::{self, SPI};
use crate::mod_params::{MAX_PAYLOAD_LENGTH, OpCode};

pub(crate) struct SpiInterface<SPI> {
    pub(crate) spi: SPI,
}

impl<SPI> SpiInterface<SPI>
where
    SPI: SpiDevice<u8>,
{
    pub fn new(spi: SPI) -> Self {
        Self { spi }
    }

    // Write an instruction and its data bytes inside one chip select window.
    pub fn write(&mut self, op: OpCode, data: &[u8]) -> Result<(), RadioError> {
        let mut ops = [Operation::Write(&[op.value()]), Operation::Write(data)];
        self.spi.transaction(&mut ops).map_err(|_| SPI)?;
        trace!("write: {=u8:02x} -> {=[u8]:02x}", op.value(), data);

        Ok(())
    }

    // Request a read, filling the provided buffer.
    // The chip shifts its status register out while the instruction byte is
    // clocked in; that leading byte is discarded here.
    pub fn read(&mut self, op: OpCode, read_buffer: &mut [u8]) -> Result<(), RadioError> {
        self.read_with_status(op, read_buffer).map(|_| ())
    }

    // Request a read, filling the provided buffer and returning the leading
    // status byte.
    pub fn read_with_status(
        &mut self,
        op: OpCode,
        read_buffer: &mut [u8],
    ) -> Result<u8, RadioError> {
        // Status byte + the widest register (RX_PAYLOAD)
        let mut full_buffer = [0u8; 1 + MAX_PAYLOAD_LENGTH];
        let total_len = 1 + read_buffer.len();
        if total_len > full_buffer.len() {
            return Err(RadioError::PayloadSizeUnexpected(read_buffer.len()));
        }
        self.spi
            .transfer(&mut full_buffer[..total_len], &[op.value()])
            .map_err(|_| SPI)?;

        let status = full_buffer[0];
        read_buffer.copy_from_slice(&full_buffer[1..total_len]);

        trace!(
            "read: op={=u8:02x}, len={}, status={=u8:02x}, data={=[u8]:02x}",
            op.value(),
            read_buffer.len(),
            status,
            read_buffer
        );

        Ok(status)
    }
}
