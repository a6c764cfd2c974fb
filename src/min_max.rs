use crate::sink::Sink;

/// Running minimum and maximum of every sample since the last reset.
///
/// Before the first sample [`min`](MinMaxTracker::min) and [`max`](MinMaxTracker::max) return
/// whatever the tracker last held. Check [`is_seeded`](MinMaxTracker::is_seeded) if that matters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMaxTracker<T = i32> {
    min: T,
    max: T,
    seeded: bool,
}

impl<T: PartialOrd + Copy + Default> MinMaxTracker<T> {
    /// The first added sample sets both bounds.
    pub fn new() -> Self {
        MinMaxTracker {
            min: T::default(),
            max: T::default(),
            seeded: false,
        }
    }
}

impl<T: PartialOrd + Copy> MinMaxTracker<T> {
    pub fn with_bounds(min: T, max: T) -> Self {
        MinMaxTracker {
            min,
            max,
            seeded: true,
        }
    }

    pub fn reset(&mut self) {
        log::trace!("min/max tracker reset");
        self.seeded = false;
    }

    pub fn fill(&mut self, value: T) {
        log::trace!("min/max tracker seeded");
        self.min = value;
        self.max = value;
        self.seeded = true;
    }

    /// Fold `input` into the bounds and pass it through unchanged.
    pub fn add(&mut self, input: T) -> T {
        if !self.seeded {
            self.fill(input);
        } else {
            if input > self.max {
                self.max = input;
            }
            if input < self.min {
                self.min = input;
            }
        }
        input
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }
}

impl<T: PartialOrd + Copy + Default> Default for MinMaxTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialOrd + Copy> Sink<T> for MinMaxTracker<T> {
    fn reset(&mut self) {
        MinMaxTracker::reset(self)
    }

    fn add(&mut self, input: T) -> T {
        MinMaxTracker::add(self, input)
    }
}
