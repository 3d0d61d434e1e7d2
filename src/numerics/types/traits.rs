// src/numerics/types/traits.rs
// Scalar trait shared by every numerics type.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// FloatingPoint is the scalar every vector and quaternion is generic over.
///
/// Beyond the arithmetic operators it carries the handful of transcendental
/// functions the types need, so that `Vector3<f64>` works exactly like the
/// default `Vector3<f32>`. None of these functions check their domain: NaN
/// and infinities pass straight through.
pub trait FloatingPoint:
Copy + PartialOrd + Debug + Display
+ Add<Output = Self>
+ Sub<Output = Self>
+ Mul<Output = Self>
+ Div<Output = Self>
+ Rem<Output = Self>
+ Neg<Output = Self>
{
    fn zero() -> Self;
    fn one() -> Self;
    fn two() -> Self {
        Self::one() + Self::one()
    }

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn acos(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn to_degrees(self) -> Self;
    fn to_radians(self) -> Self;

    /// Restrict to `[min, max]`. NaN stays NaN.
    fn clamp(self, min: Self, max: Self) -> Self;

    fn is_nan(self) -> bool;
}

macro_rules! impl_floating_point {
    ($t:ty) => {
        impl FloatingPoint for $t {
            fn zero() -> Self { 0.0 }
            fn one() -> Self { 1.0 }
            fn two() -> Self { 2.0 }

            fn sqrt(self) -> Self { <$t>::sqrt(self) }
            fn abs(self) -> Self { <$t>::abs(self) }
            fn acos(self) -> Self { <$t>::acos(self) }
            fn sin(self) -> Self { <$t>::sin(self) }
            fn cos(self) -> Self { <$t>::cos(self) }
            fn to_degrees(self) -> Self { <$t>::to_degrees(self) }
            fn to_radians(self) -> Self { <$t>::to_radians(self) }
            fn clamp(self, min: Self, max: Self) -> Self { <$t>::clamp(self, min, max) }
            fn is_nan(self) -> bool { <$t>::is_nan(self) }
        }
    };
}

impl_floating_point!(f32);
impl_floating_point!(f64);
