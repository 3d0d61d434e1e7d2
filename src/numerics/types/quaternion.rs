// src/numerics/types/quaternion.rs
// Quaternion built from a scalar part and a Vector3 part.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use super::vector::Vector3;

/// Quaternion `s + v.x·i + v.y·j + v.z·k`.
///
/// Multiplication is the Hamilton product and is not commutative: `a * b`
/// and `b * a` generally differ. Unit norm is not maintained automatically;
/// call [`Quaternion::convert_to_unit_norm_quaternion`] when a rotation is
/// needed. Zero-norm quaternions produce NaN/Inf on normalization and
/// inversion rather than an error.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Quaternion<T: FloatingPoint = f32> {
    /// Scalar part
    pub s: T,
    /// Vector part
    pub v: Vector3<T>,
}

#[cfg(feature = "serde")]
impl<T> Serialize for Quaternion<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.s, &self.v).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Quaternion<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (s, v) = <(T, Vector3<T>)>::deserialize(deserializer)?;
        Ok(Quaternion { s, v })
    }
}

impl<T: FloatingPoint> Quaternion<T> {
    pub fn new(s: T, v: Vector3<T>) -> Self {
        Self { s, v }
    }

    /// `(1, (0, 0, 0))`, the neutral element of the Hamilton product.
    pub fn identity() -> Self {
        Self::new(T::one(), Vector3::zero())
    }

    /// Rotation of `degrees` around `axis`.
    ///
    /// The axis is used as given; pass a unit vector to get a unit
    /// quaternion.
    pub fn from_axis_angle(axis: Vector3<T>, degrees: T) -> Self {
        let half = degrees.to_radians() / T::two();
        Self::new(half.cos(), axis.scale(half.sin()))
    }

    /// Hamilton product `self * other`.
    pub fn multiply(&self, other: &Self) -> Self {
        let s = self.s * other.s - self.v.dot(&other.v);
        let v = other.v.scale(self.s) + self.v.scale(other.s) + self.v.cross(&other.v);
        Self::new(s, v)
    }

    /// `self * other.inverse()`.
    pub fn divide(&self, other: &Self) -> Self {
        self.multiply(&other.inverse())
    }

    /// Multiply both parts by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        Self::new(self.s * factor, self.v.scale(factor))
    }

    fn divided_by(&self, divisor: T) -> Self {
        Self::new(
            self.s / divisor,
            Vector3::new(self.v.x / divisor, self.v.y / divisor, self.v.z / divisor),
        )
    }

    /// Euclidean norm of `(s, x, y, z)`.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    pub fn norm_squared(&self) -> T {
        self.s * self.s + self.v.magnitude_square()
    }

    /// Norm of the quaternion once every component has been divided by
    /// [`Quaternion::norm`].
    ///
    /// Leaves `self` unchanged. The result is 1 up to rounding for any finite
    /// non-zero quaternion and NaN for the zero quaternion.
    pub fn normalisation(&self) -> T {
        self.normalized().norm()
    }

    /// Unit-norm copy of this quaternion.
    pub fn normalized(&self) -> Self {
        self.divided_by(self.norm())
    }

    /// Divide both parts by the norm in place.
    pub fn convert_to_unit_norm_quaternion(&mut self) {
        let norm = self.norm();
        if norm == T::zero() {
            tracing::trace!(quaternion = %self, "normalizing zero-norm quaternion");
        }
        *self = self.divided_by(norm);
    }

    /// `(s, -v)`.
    pub fn conjugate(&self) -> Self {
        let mut v = self.v;
        v.conjugate();
        Self::new(self.s, v)
    }

    /// `conjugate() / norm()²`.
    pub fn inverse(&self) -> Self {
        let norm_squared = self.norm_squared();
        if norm_squared == T::zero() {
            tracing::trace!(quaternion = %self, "inverting zero-norm quaternion");
        }
        self.conjugate().divided_by(norm_squared)
    }

    /// Write [`Quaternion::inverse`] into `out`.
    pub fn inverse_into(&self, out: &mut Self) {
        *out = self.inverse();
    }

    /// Rotate `vector` by this quaternion, `q · (0, vector) · q*`.
    ///
    /// Only meaningful for unit quaternions.
    pub fn rotate(&self, vector: &Vector3<T>) -> Vector3<T> {
        let pure = Self::new(T::zero(), *vector);
        self.multiply(&pure).multiply(&self.conjugate()).v
    }
}

impl<T: FloatingPoint> fmt::Display for Quaternion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.s, self.v)
    }
}

impl<T: FloatingPoint> Add for Quaternion<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.s + other.s, self.v + other.v)
    }
}

impl<T: FloatingPoint> AddAssign for Quaternion<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: FloatingPoint> Sub for Quaternion<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.s - other.s, self.v - other.v)
    }
}

impl<T: FloatingPoint> SubAssign for Quaternion<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: FloatingPoint> Mul for Quaternion<T> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.multiply(&other)
    }
}

impl<T: FloatingPoint> MulAssign for Quaternion<T> {
    fn mul_assign(&mut self, other: Self) {
        *self = self.multiply(&other);
    }
}

impl<T: FloatingPoint> Div for Quaternion<T> {
    type Output = Self;

    fn div(self, other: Self) -> Self {
        self.divide(&other)
    }
}

impl<T: FloatingPoint> DivAssign for Quaternion<T> {
    fn div_assign(&mut self, other: Self) {
        *self = self.divide(&other);
    }
}

macro_rules! impl_quaternion_scalar_ops {
    ($t:ty) => {
        impl Mul<$t> for Quaternion<$t> {
            type Output = Self;

            fn mul(self, scalar: $t) -> Self {
                self.scale(scalar)
            }
        }

        impl Mul<Quaternion<$t>> for $t {
            type Output = Quaternion<$t>;

            fn mul(self, quaternion: Quaternion<$t>) -> Quaternion<$t> {
                quaternion.scale(self)
            }
        }

        impl MulAssign<$t> for Quaternion<$t> {
            fn mul_assign(&mut self, scalar: $t) {
                *self = self.scale(scalar);
            }
        }

        impl Div<$t> for Quaternion<$t> {
            type Output = Self;

            fn div(self, scalar: $t) -> Self {
                self.divided_by(scalar)
            }
        }

        impl DivAssign<$t> for Quaternion<$t> {
            fn div_assign(&mut self, scalar: $t) {
                *self = self.divided_by(scalar);
            }
        }
    };
}

impl_quaternion_scalar_ops!(f32);
impl_quaternion_scalar_ops!(f64);

impl<T> AbsDiffEq for Quaternion<T>
where
    T: FloatingPoint + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.s.abs_diff_eq(&other.s, epsilon) && self.v.abs_diff_eq(&other.v, epsilon)
    }
}

impl<T> RelativeEq for Quaternion<T>
where
    T: FloatingPoint + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.s.relative_eq(&other.s, epsilon, max_relative)
            && self.v.relative_eq(&other.v, epsilon, max_relative)
    }
}

impl<T: FloatingPoint> From<[T; 4]> for Quaternion<T> {
    fn from(array: [T; 4]) -> Self {
        Self::new(array[0], Vector3::new(array[1], array[2], array[3]))
    }
}

impl<T: FloatingPoint> From<Quaternion<T>> for [T; 4] {
    fn from(q: Quaternion<T>) -> Self {
        [q.s, q.v.x, q.v.y, q.v.z]
    }
}
