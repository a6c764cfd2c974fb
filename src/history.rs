use crate::{error::LookbackError, ring::Ring, sink::Sink};

/// The last `N` samples, addressable by how far back they were added.
///
/// The first sample after construction or [`reset`](HistoryRing::reset) is copied into every
/// slot, so lookback is always answered from `N` resident values.
#[derive(Debug, Clone)]
pub struct HistoryRing<const N: usize, T = i32> {
    ring: Ring<T, N>,
    seeded: bool,
}

impl<const N: usize, T: Copy + Default> HistoryRing<N, T> {
    pub fn new() -> Self {
        HistoryRing {
            ring: Ring::new(),
            seeded: false,
        }
    }

    pub fn filled(value: T) -> Self {
        let mut history = Self::new();
        history.fill(value);
        history
    }

    pub fn reset(&mut self) {
        log::trace!("history ring reset ({} slots)", N);
        self.seeded = false;
        self.ring.rewind();
    }

    pub fn fill(&mut self, value: T) {
        log::trace!("history ring seeded ({} slots)", N);
        self.ring.fill(value);
        self.seeded = true;
    }

    /// Store `input` over the oldest sample and pass it through unchanged.
    pub fn add(&mut self, input: T) -> T {
        if !self.seeded {
            self.fill(input);
        } else {
            self.ring.push(input);
        }
        input
    }

    /// Most recently added sample.
    pub fn get(&self) -> T {
        self.get_last(0)
    }

    /// Sample added `back` steps before the most recent one.
    ///
    /// `back >= N` is clamped to `N - 1`, the oldest resident sample.
    pub fn get_last(&self, back: usize) -> T {
        self.ring.get_last(back)
    }

    /// Like [`get_last`](HistoryRing::get_last) but refuses to clamp or read unseeded storage.
    pub fn try_get_last(&self, back: usize) -> Result<T, LookbackError> {
        if !self.seeded {
            return Err(LookbackError::Unseeded);
        }
        self.ring.try_get_last(back)
    }

    pub fn size(&self) -> usize {
        N
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Resident samples, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.ring.iter()
    }

    pub fn snapshot(&self) -> heapless::Vec<T, N> {
        self.ring.snapshot()
    }
}

impl<const N: usize, T: Copy + Default> Default for HistoryRing<N, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, T: Copy + Default> Sink<T> for HistoryRing<N, T> {
    fn reset(&mut self) {
        HistoryRing::reset(self)
    }

    fn add(&mut self, input: T) -> T {
        HistoryRing::add(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_fills_every_slot() {
        let mut h = HistoryRing::<4, u8>::new();
        assert_eq!(h.add(7), 7);
        for back in 0..4 {
            assert_eq!(h.get_last(back), 7);
        }
        assert_eq!(h.snapshot().as_slice(), &[7, 7, 7, 7]);
    }

    #[test]
    fn add_passes_input_through() {
        let mut h = HistoryRing::<3, i64>::new();
        for v in [-1, 0, 5, i64::MAX, i64::MIN] {
            assert_eq!(h.add(v), v);
            assert_eq!(h.get(), v);
        }
    }

    #[test]
    fn keeps_only_last_n() {
        let mut h = HistoryRing::<4>::new();
        h.add_all(1..=10);

        assert_eq!(h.get(), 10);
        assert_eq!(h.get_last(1), 9);
        assert_eq!(h.get_last(2), 8);
        assert_eq!(h.get_last(3), 7);
        assert_eq!(h.size(), 4);
    }

    #[test]
    fn lookback_clamps_past_capacity() {
        let mut h = HistoryRing::<4>::filled(0);
        h.add_all([1, 2, 3, 4, 5]);
        for back in [4, 5, 100, usize::MAX] {
            assert_eq!(h.get_last(back), h.get_last(3));
        }
    }

    #[test]
    fn refill_after_advancing_restarts_ring() {
        let mut h = HistoryRing::<4, i32>::new();
        h.add_all([1, 2, 3]);
        h.fill(5);
        assert_eq!(h.snapshot().as_slice(), &[5, 5, 5, 5]);

        assert_eq!(h.add(9), 9);
        assert_eq!(h.snapshot().as_slice(), &[5, 5, 5, 9]);
        assert_eq!(h.get_last(3), 5);
    }

    #[test]
    fn strict_lookback() {
        let mut h = HistoryRing::<2, i32>::new();
        assert_eq!(h.try_get_last(0), Err(LookbackError::Unseeded));

        h.add_all([4, 5]);
        assert_eq!(h.try_get_last(1), Ok(4));
        assert_eq!(
            h.try_get_last(2),
            Err(LookbackError::OutOfRange {
                back: 2,
                capacity: 2
            })
        );
    }

    #[test]
    fn reset_behaves_like_fresh_ring() {
        let mut used = HistoryRing::<3, i32>::new();
        used.add_all([9, 8, 7, 6]);
        used.reset();
        assert!(!used.is_seeded());
        used.add_all([1, 2]);

        let mut fresh = HistoryRing::<3, i32>::new();
        fresh.add_all([1, 2]);

        assert_eq!(used.snapshot(), fresh.snapshot());
        assert_eq!(used.get(), fresh.get());
    }

    #[test]
    fn iter_is_double_ended() {
        let h = {
            let mut h = HistoryRing::<3, char>::new();
            h.add_all(['a', 'b', 'c', 'd']);
            h
        };
        assert_eq!(h.iter().len(), 3);
        assert_eq!(h.iter().next(), Some('b'));
        assert_eq!(h.iter().next_back(), Some('d'));
    }
}
