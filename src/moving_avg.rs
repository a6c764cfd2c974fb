use num_traits::AsPrimitive;

use crate::{accumulator::Accumulator, error::LookbackError, ring::Ring, sink::Sink};

/// Simple moving average (boxcar filter) over the last `N` samples.
///
/// * `N` is the window length. A power of two lets the division compile to a shift.
/// * `T` is the sample type, also the type of the average.
/// * `S` is the running sum. It must hold `N` samples without overflowing: with `N = 8` and
///   samples up to 100, `T = u8` is enough but `S` needs at least `u16`. Integer sums wrap
///   silently when undersized.
///
/// The average is `sum / N` in `S`, so it truncates toward zero for integer sums. The first
/// sample after construction or [`reset`](MovingAverage::reset) is copied into every slot,
/// which makes the first average equal to that sample.
#[derive(Debug, Clone)]
pub struct MovingAverage<const N: usize = 4, T = i32, S = i64> {
    ring: Ring<T, N>,
    sum: S,
    result: T,
    seeded: bool,
}

impl<const N: usize, T, S> MovingAverage<N, T, S>
where
    T: Copy + Default + 'static + AsPrimitive<S>,
    S: Accumulator + AsPrimitive<T>,
{
    pub fn new() -> Self {
        MovingAverage {
            ring: Ring::new(),
            sum: S::zero(),
            result: T::default(),
            seeded: false,
        }
    }

    /// Window pre-filled with `initial`, whose average is `initial`.
    pub fn filled(initial: T) -> Self {
        let mut avg = Self::new();
        avg.fill(initial);
        avg
    }

    pub fn reset(&mut self) {
        log::trace!("moving average reset ({} slots)", N);
        self.seeded = false;
        self.ring.rewind();
        self.sum = S::zero();
        self.result = T::default();
    }

    pub fn fill(&mut self, value: T) {
        log::trace!("moving average seeded ({} slots)", N);
        self.ring.fill(value);
        self.sum = value.as_().acc_scale(N);
        self.result = value;
        self.seeded = true;
    }

    /// Slide the window over `input` and return the new average.
    pub fn add(&mut self, input: T) -> T {
        if !self.seeded {
            self.fill(input);
        } else {
            let evicted = self.ring.push(input);
            self.sum = self.sum.acc_sub(evicted.as_()).acc_add(input.as_());
            self.result = self.sum.acc_mean(N).as_();
        }
        self.result
    }

    /// Current average.
    pub fn get(&self) -> T {
        self.result
    }

    /// Current average.
    pub fn avg(&self) -> T {
        self.result
    }

    /// Running sum of the `N` resident samples.
    pub fn sum(&self) -> S {
        self.sum
    }

    /// Raw sample (not an average) added `back` steps before the most recent one.
    ///
    /// `back >= N` is clamped to `N - 1`, the oldest resident sample.
    pub fn get_last(&self, back: usize) -> T {
        self.ring.get_last(back)
    }

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

    /// Resident raw samples, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.ring.iter()
    }

    pub fn snapshot(&self) -> heapless::Vec<T, N> {
        self.ring.snapshot()
    }
}

impl<const N: usize, T, S> Default for MovingAverage<N, T, S>
where
    T: Copy + Default + 'static + AsPrimitive<S>,
    S: Accumulator + AsPrimitive<T>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, T, S> Sink<T> for MovingAverage<N, T, S>
where
    T: Copy + Default + 'static + AsPrimitive<S>,
    S: Accumulator + AsPrimitive<T>,
{
    fn reset(&mut self) {
        MovingAverage::reset(self)
    }

    fn add(&mut self, input: T) -> T {
        MovingAverage::add(self, input)
    }
}
