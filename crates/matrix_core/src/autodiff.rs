use crate::traits::Composite;
use anyhow::{bail, Result};
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Dual number for forward-mode AD.
/// value: real part
/// derivative: infinitesimal part
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Dual {
    pub value: f64,
    pub derivative: f64,
}

impl Dual {
    pub fn new(value: f64, derivative: f64) -> Self {
        Self { value, derivative }
    }

    /// A value that does not depend on the seeded input.
    pub fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// The seeded input itself (`d/dx x = 1`).
    pub fn variable(value: f64) -> Self {
        Self::new(value, 1.0)
    }

    pub fn sin(self) -> Self {
        Self::new(self.value.sin(), self.derivative * self.value.cos())
    }

    pub fn cos(self) -> Self {
        Self::new(self.value.cos(), -self.derivative * self.value.sin())
    }

    pub fn tan(self) -> Self {
        let t = self.value.tan();
        Self::new(t, self.derivative * (1.0 + t * t))
    }

    pub fn exp(self) -> Self {
        let e = self.value.exp();
        Self::new(e, e * self.derivative)
    }

    pub fn ln(self) -> Self {
        Self::new(self.value.ln(), self.derivative / self.value)
    }

    pub fn sqrt(self) -> Self {
        let s = self.value.sqrt();
        Self::new(s, self.derivative / (2.0 * s))
    }

    pub fn powi(self, n: i32) -> Self {
        Self::new(
            self.value.powi(n),
            f64::from(n) * self.value.powi(n - 1) * self.derivative,
        )
    }

    /// x^y = exp(y * ln(x))
    pub fn powf(self, n: Self) -> Self {
        let p = self.value.powf(n.value);
        // Constant exponent: power rule, valid for x <= 0 where ln(x) is not.
        if n.derivative == 0.0 {
            return Self::new(
                p,
                n.value * self.value.powf(n.value - 1.0) * self.derivative,
            );
        }
        Self::new(
            p,
            p * (n.derivative * self.value.ln() + n.value * self.derivative / self.value),
        )
    }

    pub fn abs(self) -> Self {
        if self.value >= 0.0 {
            self
        } else {
            -self
        }
    }

    pub fn recip(self) -> Self {
        Self::one() / self
    }
}

impl From<f64> for Dual {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl Zero for Dual {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }
    fn is_zero(&self) -> bool {
        self.value == 0.0 && self.derivative == 0.0
    }
}

impl One for Dual {
    fn one() -> Self {
        Self::new(1.0, 0.0)
    }
}

impl Add for Dual {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value, self.derivative + rhs.derivative)
    }
}

impl Sub for Dual {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value, self.derivative - rhs.derivative)
    }
}

impl Mul for Dual {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.value * rhs.value,
            self.value * rhs.derivative + self.derivative * rhs.value,
        )
    }
}

impl Div for Dual {
    type Output = Self;
    fn div(self, rhs: Self) -> Self {
        let denom = rhs.value * rhs.value;
        Self::new(
            self.value / rhs.value,
            (self.derivative * rhs.value - self.value * rhs.derivative) / denom,
        )
    }
}

impl Neg for Dual {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.value, -self.derivative)
    }
}

impl AddAssign for Dual {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl SubAssign for Dual {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}
impl MulAssign for Dual {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}
impl DivAssign for Dual {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl Composite for Dual {}

/// Derivative of a scalar function at `x`.
pub fn derivative<F>(f: F, x: f64) -> f64
where
    F: Fn(Dual) -> Dual,
{
    f(Dual::variable(x)).derivative
}

/// Row-major `outputs x inputs` Jacobian of `f` at `x`.
///
/// Column j comes from one evaluation with only `x[j]` seeded. Outputs the
/// callback leaves unwritten on a pass read as zero.
pub fn jacobian<F>(f: F, x: &[f64], outputs: usize) -> Result<Vec<f64>>
where
    F: Fn(&[Dual], &mut [Dual]),
{
    if x.is_empty() {
        bail!("Jacobian requires at least one input.");
    }
    if outputs == 0 {
        bail!("Jacobian requires at least one output.");
    }

    let n = x.len();
    let mut jac = vec![0.0; outputs * n];
    let mut dual_x: Vec<Dual> = x.iter().copied().map(Dual::constant).collect();
    let mut dual_out = vec![Dual::zero(); outputs];

    for j in 0..n {
        dual_out.fill(Dual::zero());
        dual_x[j] = Dual::variable(x[j]);
        f(&dual_x, &mut dual_out);
        for i in 0..outputs {
            jac[i * n + j] = dual_out[i].derivative;
        }
        dual_x[j] = Dual::constant(x[j]);
    }

    Ok(jac)
}
