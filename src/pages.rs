use core::ops::Range;

use crate::Address;

/// Splits a write of `len` bytes at `addr` into `(bus address, data range)`
/// chunks that never cross a page boundary.
#[derive(Debug, Clone)]
pub struct PageChunks {
    addr: Address,
    page_size: usize,
    offset: usize,
    len: usize,
}

impl PageChunks {
    pub fn new(addr: Address, len: usize, page_size: usize) -> Self {
        assert!(page_size > 0);
        Self {
            addr,
            page_size,
            offset: 0,
            len,
        }
    }
}

impl Iterator for PageChunks {
    type Item = (Address, Range<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.len {
            return None;
        }

        let room = self.page_size - self.addr % self.page_size;
        let chunk = usize::min(room, self.len - self.offset);
        let item = (self.addr, self.offset..(self.offset + chunk));

        self.addr = self.addr.wrapping_add(chunk);
        self.offset += chunk;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.offset >= self.len {
            return (0, Some(0));
        }
        let first = self.page_size - self.addr % self.page_size;
        let rest = (self.len - self.offset).saturating_sub(first);
        let count = 1 + (rest + self.page_size - 1) / self.page_size;
        (count, Some(count))
    }
}

impl ExactSizeIterator for PageChunks {}
