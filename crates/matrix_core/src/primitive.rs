use crate::classify::ScalarClass;
use crate::traits::{sealed::Sealed, Primitive, ScalarLike};
use num_traits::WrappingNeg;

// Types with a native unary minus: signed integers and floats.
macro_rules! impl_primitive_signed {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sealed for $ty {}
            impl Primitive for $ty {}

            impl ScalarLike for $ty {
                const CLASS: ScalarClass = ScalarClass::Primitive;

                #[inline]
                fn plus(self, rhs: Self) -> Self {
                    self + rhs
                }
                #[inline]
                fn minus(self, rhs: Self) -> Self {
                    self - rhs
                }
                #[inline]
                fn times(self, rhs: Self) -> Self {
                    self * rhs
                }
                #[inline]
                fn divide(self, rhs: Self) -> Self {
                    self / rhs
                }
                #[inline]
                fn negate(self) -> Self {
                    -self
                }
            }
        )*
    };
}

// Unsigned integers have no `Neg`; negation is modulo 2^N.
macro_rules! impl_primitive_unsigned {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Sealed for $ty {}
            impl Primitive for $ty {}

            impl ScalarLike for $ty {
                const CLASS: ScalarClass = ScalarClass::Primitive;

                #[inline]
                fn plus(self, rhs: Self) -> Self {
                    self + rhs
                }
                #[inline]
                fn minus(self, rhs: Self) -> Self {
                    self - rhs
                }
                #[inline]
                fn times(self, rhs: Self) -> Self {
                    self * rhs
                }
                #[inline]
                fn divide(self, rhs: Self) -> Self {
                    self / rhs
                }
                #[inline]
                fn negate(self) -> Self {
                    WrappingNeg::wrapping_neg(&self)
                }
            }
        )*
    };
}

impl_primitive_signed!(i8, i16, i32, i64, i128, isize, f32, f64);
impl_primitive_unsigned!(u8, u16, u32, u64, u128, usize);

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use crate::classify::ScalarClass;
    use crate::traits::{classify, Primitive, ScalarLike};

    fn assert_primitive<T: Primitive + ScalarLike>() {
        assert_eq!(classify::<T>(), ScalarClass::Primitive);
    }

    #[test]
    fn every_builtin_number_is_primitive() {
        assert_primitive::<i8>();
        assert_primitive::<i16>();
        assert_primitive::<i32>();
        assert_primitive::<i64>();
        assert_primitive::<i128>();
        assert_primitive::<isize>();
        assert_primitive::<u8>();
        assert_primitive::<u16>();
        assert_primitive::<u32>();
        assert_primitive::<u64>();
        assert_primitive::<u128>();
        assert_primitive::<usize>();
        assert_primitive::<f32>();
        assert_primitive::<f64>();
    }

    #[test]
    fn signed_arithmetic_matches_operators() {
        assert_eq!(7_i32.plus(-2), 5);
        assert_eq!(7_i32.minus(9), -2);
        assert_eq!((-3_i64).times(4), -12);
        assert_eq!(7_i16.divide(2), 3);
        assert_eq!(5_i8.negate(), -5);
        assert_eq!(1.5_f64.times(2.0), 3.0);
        assert_eq!(1.0_f32.divide(4.0), 0.25);
        assert_eq!(2.5_f64.negate(), -2.5);
    }

    #[test]
    fn unsigned_negation_wraps() {
        assert_eq!(1_u8.negate(), 255);
        assert_eq!(0_u32.negate(), 0);
        assert_eq!(5_u64.negate(), u64::MAX - 4);
        assert_eq!(10_usize.divide(3), 3);
    }
}
