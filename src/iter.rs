use core::slice;

use crate::core::U8Ring;

/// Iterator over the unread bytes of a `U8Ring`, oldest first
///
/// The ring is not consumed. This iterator implements `Clone` and can be
/// reversed.
#[derive(Clone, Debug)]
pub struct U8RingIter<'a> {
    head: slice::Iter<'a, u8>,
    tail: slice::Iter<'a, u8>,
}

impl<'a> Iterator for U8RingIter<'a> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.head.next().or_else(|| self.tail.next()).copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.head.len() + self.tail.len();
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for U8RingIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.tail
            .next_back()
            .or_else(|| self.head.next_back())
            .copied()
    }
}

impl ExactSizeIterator for U8RingIter<'_> {}

impl<'a> IntoIterator for &'a U8Ring<'_> {
    type Item = u8;
    type IntoIter = U8RingIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        let (head, tail) = self.as_slices();
        U8RingIter {
            head: head.iter(),
            tail: tail.iter(),
        }
    }
}
