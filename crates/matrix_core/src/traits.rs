use crate::classify::ScalarClass;
use num_complex::Complex;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// `a + b` is defined for two `Self` values and converts back into `Self`.
pub trait ClosedAdd: Sized + Add<Self, Output: Into<Self>> {}

impl<T> ClosedAdd for T where T: Add<T, Output: Into<T>> {}

/// `a - b` is defined for two `Self` values and converts back into `Self`.
pub trait ClosedSub: Sized + Sub<Self, Output: Into<Self>> {}

impl<T> ClosedSub for T where T: Sub<T, Output: Into<T>> {}

/// `a * b` is defined for two `Self` values and converts back into `Self`.
pub trait ClosedMul: Sized + Mul<Self, Output: Into<Self>> {}

impl<T> ClosedMul for T where T: Mul<T, Output: Into<T>> {}

/// `a / b` is defined for two `Self` values and converts back into `Self`.
pub trait ClosedDiv: Sized + Div<Self, Output: Into<Self>> {}

impl<T> ClosedDiv for T where T: Div<T, Output: Into<T>> {}

/// `-a` is defined for a `Self` value and converts back into `Self`.
pub trait ClosedNeg: Sized + Neg<Output: Into<Self>> {}

impl<T> ClosedNeg for T where T: Neg<Output: Into<T>> {}

/// The structural branch: all five operators exist and are closed over `Self`.
pub trait Arithmetic: ClosedAdd + ClosedSub + ClosedMul + ClosedDiv + ClosedNeg {}

impl<T> Arithmetic for T where T: ClosedAdd + ClosedSub + ClosedMul + ClosedDiv + ClosedNeg {}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Built-in integer and floating-point types.
///
/// Sealed; the implementations live in [`crate::primitive`].
pub trait Primitive: sealed::Sealed + Copy + 'static {}

/// Opt-in marker for custom numeric types such as [`crate::autodiff::Dual`].
///
/// Implementing it is only possible when the type is [`Arithmetic`], so a
/// missing operator shows up at the `impl` line:
///
/// ```compile_fail
/// use matrix_core::Composite;
/// use std::ops::{Add, Mul, Neg, Sub};
///
/// #[derive(Clone, Copy)]
/// struct NoDiv(f64);
///
/// impl Add for NoDiv { type Output = Self; fn add(self, r: Self) -> Self { NoDiv(self.0 + r.0) } }
/// impl Sub for NoDiv { type Output = Self; fn sub(self, r: Self) -> Self { NoDiv(self.0 - r.0) } }
/// impl Mul for NoDiv { type Output = Self; fn mul(self, r: Self) -> Self { NoDiv(self.0 * r.0) } }
/// impl Neg for NoDiv { type Output = Self; fn neg(self) -> Self { NoDiv(-self.0) } }
///
/// impl Composite for NoDiv {}
/// ```
///
/// Operators whose result cannot be converted back are rejected the same way:
///
/// ```compile_fail
/// use matrix_core::Composite;
/// use std::ops::{Add, Div, Mul, Neg, Sub};
///
/// #[derive(Clone, Copy)]
/// struct Flag(bool);
///
/// impl Add for Flag { type Output = bool; fn add(self, r: Self) -> bool { self.0 | r.0 } }
/// impl Sub for Flag { type Output = bool; fn sub(self, r: Self) -> bool { self.0 & !r.0 } }
/// impl Mul for Flag { type Output = bool; fn mul(self, r: Self) -> bool { self.0 & r.0 } }
/// impl Div for Flag { type Output = bool; fn div(self, r: Self) -> bool { self.0 ^ r.0 } }
/// impl Neg for Flag { type Output = bool; fn neg(self) -> bool { !self.0 } }
///
/// impl Composite for Flag {}
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not declared as a composite scalar",
    note = "implement `+ - * /` and unary `-` for `{Self}`, then add `impl matrix_core::Composite for {Self} {{}}`"
)]
pub trait Composite: Arithmetic + Copy + 'static {}

/// A type usable as the element of a matrix or vector.
///
/// Either a [`Primitive`] or a [`Composite`]. Generic code bounds its element
/// type with `T: ScalarLike` and uses the closed methods below, which behave
/// the same for both branches.
///
/// ```
/// use matrix_core::{autodiff::Dual, ScalarClass, ScalarLike};
///
/// fn dot<T: ScalarLike>(a: &[T], b: &[T], zero: T) -> T {
///     a.iter().zip(b).fold(zero, |acc, (&x, &y)| acc.plus(x.times(y)))
/// }
///
/// assert_eq!(dot(&[1, 2, 3], &[4, 5, 6], 0), 32);
/// assert_eq!(<Dual as ScalarLike>::CLASS, ScalarClass::Composite);
/// ```
///
/// Element types without the operators are rejected where the container is
/// instantiated:
///
/// ```compile_fail
/// use matrix_core::ScalarLike;
///
/// struct Grid<T: ScalarLike>(Vec<T>);
///
/// #[derive(Clone, Copy)]
/// struct Label;
///
/// let _grid = Grid::<Label>(Vec::new());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a matrix scalar",
    label = "not a built-in arithmetic type and not declared `Composite`",
    note = "custom types need `+ - * /` and unary `-` closed over `{Self}` plus `impl matrix_core::Composite for {Self} {{}}`"
)]
pub trait ScalarLike: Copy + 'static {
    /// Which branch accepted the type.
    const CLASS: ScalarClass;

    fn plus(self, rhs: Self) -> Self;
    fn minus(self, rhs: Self) -> Self;
    fn times(self, rhs: Self) -> Self;
    fn divide(self, rhs: Self) -> Self;
    /// Unary minus. Wraps for unsigned primitives.
    fn negate(self) -> Self;
}

impl<T: Composite> ScalarLike for T {
    const CLASS: ScalarClass = ScalarClass::Composite;

    #[inline]
    fn plus(self, rhs: Self) -> Self {
        (self + rhs).into()
    }
    #[inline]
    fn minus(self, rhs: Self) -> Self {
        (self - rhs).into()
    }
    #[inline]
    fn times(self, rhs: Self) -> Self {
        (self * rhs).into()
    }
    #[inline]
    fn divide(self, rhs: Self) -> Self {
        (self / rhs).into()
    }
    #[inline]
    fn negate(self) -> Self {
        (-self).into()
    }
}

impl Composite for Complex<f32> {}
impl Composite for Complex<f64> {}

/// Which branch a [`ScalarLike`] type was accepted through.
pub const fn classify<T: ScalarLike>() -> ScalarClass {
    T::CLASS
}

#[cfg(test)]
mod tests {
    use super::{classify, Arithmetic, Composite, ScalarLike};
    use crate::classify::ScalarClass;
    use num_complex::Complex;
    use std::ops::{Add, Div, Mul, Neg, Sub};

    /// Length whose operators return a wider intermediate type.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Meters(f32);

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Wide(f64);

    impl From<Wide> for Meters {
        fn from(w: Wide) -> Self {
            Meters(w.0 as f32)
        }
    }

    impl Add for Meters {
        type Output = Wide;
        fn add(self, rhs: Self) -> Wide {
            Wide(self.0 as f64 + rhs.0 as f64)
        }
    }
    impl Sub for Meters {
        type Output = Wide;
        fn sub(self, rhs: Self) -> Wide {
            Wide(self.0 as f64 - rhs.0 as f64)
        }
    }
    impl Mul for Meters {
        type Output = Wide;
        fn mul(self, rhs: Self) -> Wide {
            Wide(self.0 as f64 * rhs.0 as f64)
        }
    }
    impl Div for Meters {
        type Output = Wide;
        fn div(self, rhs: Self) -> Wide {
            Wide(self.0 as f64 / rhs.0 as f64)
        }
    }
    impl Neg for Meters {
        type Output = Wide;
        fn neg(self) -> Wide {
            Wide(-(self.0 as f64))
        }
    }

    impl Composite for Meters {}

    fn requires_arithmetic<T: Arithmetic>() {}

    fn sum<T: ScalarLike>(items: &[T], zero: T) -> T {
        items.iter().fold(zero, |acc, &x| acc.plus(x))
    }

    #[test]
    fn convertible_results_are_accepted() {
        requires_arithmetic::<Meters>();
        assert_eq!(classify::<Meters>(), ScalarClass::Composite);
        assert_eq!(Meters(3.0).plus(Meters(1.5)), Meters(4.5));
        assert_eq!(Meters(3.0).minus(Meters(1.0)), Meters(2.0));
        assert_eq!(Meters(3.0).times(Meters(2.0)), Meters(6.0));
        assert_eq!(Meters(3.0).divide(Meters(2.0)), Meters(1.5));
        assert_eq!(Meters(3.0).negate(), Meters(-3.0));
    }

    #[test]
    fn complex_numbers_are_composite() {
        assert_eq!(classify::<Complex<f64>>(), ScalarClass::Composite);
        let z = Complex::new(1.0_f64, 2.0).times(Complex::new(3.0, -1.0));
        assert_eq!(z, Complex::new(5.0, 5.0));
        assert_eq!(Complex::new(1.0_f32, -1.0).negate(), Complex::new(-1.0, 1.0));
    }

    #[test]
    fn generic_code_runs_over_both_branches() {
        assert_eq!(sum(&[1_u8, 2, 3], 0), 6);
        assert_eq!(sum(&[0.5_f64, 0.25], 0.0), 0.75);
        assert_eq!(sum(&[Meters(1.0), Meters(2.0)], Meters(0.0)), Meters(3.0));
    }
}
