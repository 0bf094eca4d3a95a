//! `embedded-io` adapters, so a ring can sit between a driver and any
//! consumer of `embedded_io::Read` / `embedded_io::Write`.

use embedded_io::{ErrorKind, ErrorType, Read, ReadReady, Write, WriteReady};

use crate::core::U8Ring;
use crate::error::U8RingError;

impl embedded_io::Error for U8RingError {
    fn kind(&self) -> ErrorKind {
        match self {
            U8RingError::ZeroSizeBuffer | U8RingError::CursorOutOfBounds { .. } => {
                ErrorKind::InvalidInput
            }
            U8RingError::BufferFull | U8RingError::BufferEmpty => ErrorKind::Other,
        }
    }
}

impl ErrorType for U8Ring<'_> {
    type Error = U8RingError;
}

/// An empty ring reads as `Ok(0)`, the same as an exhausted byte slice.
impl Read for U8Ring<'_> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Ok(U8Ring::read(self, buf))
    }
}

impl ReadReady for U8Ring<'_> {
    fn read_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_empty())
    }
}

/// A full ring refuses non-empty writes with `U8RingError::BufferFull`.
/// `Ok(0)` is only returned for an empty `buf`.
impl Write for U8Ring<'_> {
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if buf.is_empty() {
            return Ok(0);
        }
        match U8Ring::write(self, buf) {
            0 => Err(U8RingError::BufferFull),
            written => Ok(written),
        }
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl WriteReady for U8Ring<'_> {
    fn write_ready(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.is_full())
    }
}
