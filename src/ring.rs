use crate::error::LookbackError;

/// Fixed-size circular storage shared by [`HistoryRing`](crate::HistoryRing) and
/// [`MovingAverage`](crate::MovingAverage).
///
/// `current` always points at the most recently written slot. Seeding writes the same value into
/// every slot and parks `current` on the last one, so the next write lands on slot 0.
#[derive(Debug, Clone)]
pub(crate) struct Ring<T, const N: usize> {
    data: [T; N],
    current: usize,
}

impl<T: Copy + Default, const N: usize> Ring<T, N> {
    const NONZERO_CAPACITY: () = assert!(N > 0, "ring capacity must be at least 1");

    pub fn new() -> Self {
        let () = Self::NONZERO_CAPACITY;

        Ring {
            data: [T::default(); N],
            current: N - 1,
        }
    }

    pub fn rewind(&mut self) {
        self.current = N - 1;
    }

    pub fn fill(&mut self, value: T) {
        self.data = [value; N];
        self.rewind();
    }

    /// Advance to the next slot, store `value` there and hand back what it replaced.
    pub fn push(&mut self, value: T) -> T {
        self.current += 1;
        if self.current >= N {
            self.current = 0;
        }

        core::mem::replace(&mut self.data[self.current], value)
    }

    fn slot(&self, back: usize) -> usize {
        // ie: (N=4) current=1, back 0,1,2,3 => slots 1,0,3,2
        if self.current >= back {
            self.current - back
        } else {
            N + self.current - back
        }
    }

    pub fn get_last(&self, back: usize) -> T {
        self.data[self.slot(back.min(N - 1))]
    }

    pub fn try_get_last(&self, back: usize) -> Result<T, LookbackError> {
        if back >= N {
            return Err(LookbackError::OutOfRange { back, capacity: N });
        }
        Ok(self.data[self.slot(back)])
    }

    /// Resident values, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        (0..N).rev().map(move |back| self.data[self.slot(back)])
    }

    pub fn snapshot(&self) -> heapless::Vec<T, N> {
        self.iter().collect()
    }
}
