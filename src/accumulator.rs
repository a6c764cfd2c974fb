use num_traits::Zero;

/// Arithmetic a [`MovingAverage`](crate::MovingAverage) needs from its running sum.
///
/// Integer accumulators wrap on overflow instead of panicking, so an undersized sum type
/// misbehaves the same way in debug and release builds. Picking a type that holds `N` samples
/// is on the caller. Floats use their plain operators.
pub trait Accumulator: Copy + Zero + 'static {
    /// `self + rhs`, wrapping for integers.
    fn acc_add(self, rhs: Self) -> Self;
    /// `self - rhs`, wrapping for integers.
    fn acc_sub(self, rhs: Self) -> Self;
    /// `self * n`, wrapping for integers. `n` is never narrowed to `Self` first.
    fn acc_scale(self, n: usize) -> Self;
    /// `self / n`, truncating toward zero for integers. `n` is never narrowed to `Self` first.
    fn acc_mean(self, n: usize) -> Self;
}

macro_rules! impl_int_accumulator {
    ($wide:ty => $($t:ty),*) => {
        $(
            impl Accumulator for $t {
                #[inline]
                fn acc_add(self, rhs: Self) -> Self {
                    self.wrapping_add(rhs)
                }
                #[inline]
                fn acc_sub(self, rhs: Self) -> Self {
                    self.wrapping_sub(rhs)
                }
                #[inline]
                fn acc_scale(self, n: usize) -> Self {
                    (self as $wide).wrapping_mul(n as $wide) as Self
                }
                #[inline]
                fn acc_mean(self, n: usize) -> Self {
                    (self as $wide / n as $wide) as Self
                }
            }
        )*
    }
}

macro_rules! impl_float_accumulator {
    ($($t:ty),*) => {
        $(
            impl Accumulator for $t {
                #[inline]
                fn acc_add(self, rhs: Self) -> Self {
                    self + rhs
                }
                #[inline]
                fn acc_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
                #[inline]
                fn acc_scale(self, n: usize) -> Self {
                    self * n as Self
                }
                #[inline]
                fn acc_mean(self, n: usize) -> Self {
                    self / n as Self
                }
            }
        )*
    }
}

impl_int_accumulator!(i128 => i8, i16, i32, i64, i128, isize);
impl_int_accumulator!(u128 => u8, u16, u32, u64, u128, usize);
impl_float_accumulator!(f32, f64);
