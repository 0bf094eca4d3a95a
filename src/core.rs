use crate::error::U8RingError;
use crate::iter::U8RingIter;

/// A zero-allocation byte ring buffer over a client-provided buffer.
///
/// One slot of the storage is always left unused, so that "full" and
/// "empty" can be told apart from the two cursors alone. A ring bound to
/// `N` bytes therefore holds at most `N - 1` bytes.
///
/// The ring borrows the storage exclusively for its whole lifetime and never
/// manages its allocation. Dropping the ring (or calling [`U8Ring::into_inner`])
/// hands the storage back to the caller.
///
/// There is no internal synchronization. A producer and a consumer living in
/// different execution contexts must provide their own ordering around the
/// ring.
pub struct U8Ring<'a> {
    buffer: &'a mut [u8],
    write_pos: usize,
    read_pos: usize,
}

impl<'a> U8Ring<'a> {
    /// Binds an empty ring to `buffer`.
    ///
    /// # Errors
    ///
    /// Returns `U8RingError::ZeroSizeBuffer` if `buffer` is empty.
    pub fn new(buffer: &'a mut [u8]) -> Result<Self, U8RingError> {
        Self::with_cursors(buffer, 0, 0)
    }

    /// Binds a ring to `buffer` whose cursors are already known, for example
    /// storage kept in retained RAM across a warm reset.
    ///
    /// The content of `buffer` is taken as is: the bytes from `read_pos` up
    /// to `write_pos` (wrapping at the end) become the unread data.
    ///
    /// # Errors
    ///
    /// Returns `U8RingError::ZeroSizeBuffer` if `buffer` is empty, and
    /// `U8RingError::CursorOutOfBounds` if either cursor is not below
    /// `buffer.len()`.
    pub fn with_cursors(
        buffer: &'a mut [u8],
        write_pos: usize,
        read_pos: usize,
    ) -> Result<Self, U8RingError> {
        if buffer.is_empty() {
            return Err(U8RingError::ZeroSizeBuffer);
        }

        let capacity = buffer.len();
        for (cursor, position) in [("write_pos", write_pos), ("read_pos", read_pos)] {
            if position >= capacity {
                return Err(U8RingError::CursorOutOfBounds {
                    cursor,
                    position,
                    capacity,
                });
            }
        }

        Ok(Self {
            buffer,
            write_pos,
            read_pos,
        })
    }

    /// Empties the ring. The stored bytes are not cleared.
    pub fn reset(&mut self) {
        self.write_pos = 0;
        self.read_pos = 0;
    }

    /// Returns the backing storage, ending the ring.
    #[must_use]
    pub fn into_inner(self) -> &'a mut [u8] {
        self.buffer
    }

    /// Length of the backing storage.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Maximum number of bytes the ring can hold at once.
    #[must_use]
    pub fn usable_capacity(&self) -> usize {
        self.capacity() - 1
    }

    #[must_use]
    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    #[must_use]
    pub fn read_pos(&self) -> usize {
        self.read_pos
    }

    /// The whole backing storage, including stale bytes outside the unread region.
    #[must_use]
    pub fn storage(&self) -> &[u8] {
        &self.buffer[..]
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.advance(self.write_pos, 1) == self.read_pos
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.write_pos == self.read_pos
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        if self.write_pos >= self.read_pos {
            self.write_pos - self.read_pos
        } else {
            self.capacity() - self.read_pos + self.write_pos
        }
    }

    /// Number of bytes that can be written before the ring is full.
    #[must_use]
    pub fn free(&self) -> usize {
        self.capacity() - self.len() - 1
    }

    // Both arguments are below capacity, so the sum cannot overflow.
    fn advance(&self, pos: usize, n: usize) -> usize {
        (pos + n) % self.capacity()
    }

    /// Copies `dest.len()` bytes starting at physical index `start`, wrapping to index 0.
    fn copy_out(&self, start: usize, dest: &mut [u8]) {
        let till_end = dest.len().min(self.capacity() - start);
        let (head, tail) = dest.split_at_mut(till_end);
        head.copy_from_slice(&self.buffer[start..start + till_end]);
        tail.copy_from_slice(&self.buffer[..tail.len()]);
    }

    /// Appends as many bytes of `data` as fit.
    ///
    /// Returns the number of bytes written, which is `min(data.len(), self.free())`.
    /// A short count is not an error: unread data is never overwritten.
    pub fn write(&mut self, data: &[u8]) -> usize {
        let count = data.len().min(self.free());
        if count == 0 {
            return 0;
        }

        let start = self.write_pos;
        let till_end = count.min(self.capacity() - start);
        let (head, tail) = data[..count].split_at(till_end);
        self.buffer[start..start + till_end].copy_from_slice(head);
        // Wrap-around part, empty if the run fits before the end
        self.buffer[..tail.len()].copy_from_slice(tail);

        self.write_pos = self.advance(start, count);
        count
    }

    /// Moves the oldest unread bytes into `dest`.
    ///
    /// Returns the number of bytes read, which is `min(dest.len(), self.len())`.
    /// Bytes past that count in `dest` are left untouched.
    pub fn read(&mut self, dest: &mut [u8]) -> usize {
        let count = self.peek(dest);
        self.read_pos = self.advance(self.read_pos, count);
        count
    }

    /// Copies the oldest unread bytes into `dest` without consuming them.
    ///
    /// Returns the same count `read` would return in the same state.
    #[must_use]
    pub fn peek(&self, dest: &mut [u8]) -> usize {
        let count = dest.len().min(self.len());
        if count == 0 {
            return 0;
        }
        self.copy_out(self.read_pos, &mut dest[..count]);
        count
    }

    /// Discards up to `n` unread bytes without copying them.
    ///
    /// Returns the number of bytes discarded.
    pub fn skip(&mut self, n: usize) -> usize {
        let count = n.min(self.len());
        self.read_pos = self.advance(self.read_pos, count);
        count
    }

    /// Appends a single byte.
    ///
    /// # Errors
    ///
    /// Returns `U8RingError::BufferFull` if there is no free slot.
    pub fn write_byte(&mut self, byte: u8) -> Result<(), U8RingError> {
        if self.is_full() {
            return Err(U8RingError::BufferFull);
        }
        self.buffer[self.write_pos] = byte;
        self.write_pos = self.advance(self.write_pos, 1);
        Ok(())
    }

    /// Removes and returns the oldest unread byte.
    ///
    /// Returns `None` if the ring is empty.
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.read_pos = self.advance(self.read_pos, 1);
        Some(byte)
    }

    /// Removes and returns the oldest unread byte.
    ///
    /// # Errors
    ///
    /// Returns `U8RingError::BufferEmpty` if the ring is empty.
    pub fn try_read_byte(&mut self) -> Result<u8, U8RingError> {
        self.read_byte().ok_or(U8RingError::BufferEmpty)
    }

    /// Returns the oldest unread byte without consuming it.
    #[must_use]
    pub fn peek_byte(&self) -> Option<u8> {
        if self.is_empty() {
            return None;
        }
        Some(self.buffer[self.read_pos])
    }

    /// Returns the unread bytes as two physical runs, oldest first.
    ///
    /// The second slice is non-empty only when the unread region wraps past
    /// the end of the storage.
    #[must_use]
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        if self.write_pos >= self.read_pos {
            (&self.buffer[self.read_pos..self.write_pos], &self.buffer[..0])
        } else {
            (&self.buffer[self.read_pos..], &self.buffer[..self.write_pos])
        }
    }

    /// Returns an iterator over the unread bytes, oldest first.
    #[must_use]
    pub fn iter(&self) -> U8RingIter<'_> {
        self.into_iter()
    }
}

impl core::fmt::Debug for U8Ring<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("U8Ring")
            .field("capacity", &self.capacity())
            .field("write_pos", &self.write_pos)
            .field("read_pos", &self.read_pos)
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::format;

    #[test]
    fn test_advance_wraps_at_capacity() {
        let mut buffer = [0u8; 10];
        let ring = U8Ring::new(&mut buffer).unwrap();

        assert_eq!(ring.advance(0, 9), 9);
        assert_eq!(ring.advance(9, 1), 0);
        assert_eq!(ring.advance(5, 7), 2);
        assert_eq!(ring.advance(4, 0), 4);
    }

    #[test]
    fn test_copy_out_splits_at_end() {
        let mut buffer = [10u8, 11, 12, 13, 14];
        let ring = U8Ring::new(&mut buffer).unwrap();

        let mut dest = [0u8; 4];
        ring.copy_out(3, &mut dest);
        assert_eq!(dest, [13, 14, 10, 11]);

        let mut dest = [0u8; 2];
        ring.copy_out(1, &mut dest);
        assert_eq!(dest, [11, 12]);
    }

    #[test]
    fn test_write_split_lands_at_index_zero() {
        let mut buffer = [0xFFu8; 6];
        let mut ring = U8Ring::with_cursors(&mut buffer, 4, 3).unwrap();

        assert_eq!(ring.write(b"abcd"), 4);
        assert_eq!(ring.write_pos, 2);
        assert_eq!(ring.read_pos, 3);
        assert_eq!(ring.storage(), &[b'c', b'd', 0xFF, 0xFF, b'a', b'b']);
    }

    #[test]
    fn test_debug_shows_cursors_not_storage() {
        let mut buffer = [0u8; 8];
        let mut ring = U8Ring::new(&mut buffer).unwrap();
        ring.write(b"abc");

        assert_eq!(
            format!("{ring:?}"),
            "U8Ring { capacity: 8, write_pos: 3, read_pos: 0, len: 3 }"
        );
    }
}
