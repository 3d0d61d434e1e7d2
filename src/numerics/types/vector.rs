// src/numerics/types/vector.rs
// Vector3 generic implementation with default precision f32.
// Uses the FloatingPoint trait from super::traits.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::io::{self, Write};

use approx::{AbsDiffEq, RelativeEq};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use crate::numerics::error::NumericsError;

/// Vector3 is a 3D vector with value semantics.
///
/// Every binary operator returns a new vector and leaves its operands alone;
/// the compound operators (`+=`, `*=`, `%=`, ...) mutate the left-hand side.
/// `*` between two vectors is the dot product and `%` between two vectors is
/// the cross product, while `*`, `/` and `%` with a scalar act per component.
///
/// Nothing here guards against degenerate input: dividing by zero or
/// normalizing the zero vector yields NaN/Inf components.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector3<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// Conditional impls for serde
#[cfg(feature = "serde")]
impl<T> Serialize for Vector3<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y, &self.z).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Vector3<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y, z) = <(T, T, T)>::deserialize(deserializer)?;
        Ok(Vector3 { x, y, z })
    }
}

impl<T: FloatingPoint> Vector3<T> {
    /// Construct a new Vector3. Any value is accepted, NaN and Inf included.
    pub fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Vector of all zeros
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// Vector of all ones
    pub fn one() -> Self {
        Self::new(T::one(), T::one(), T::one())
    }

    /// Multiply every component by `factor`; the named form of `v * factor`.
    pub fn scale(&self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    /// Dot product.
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length.
    pub fn magnitude(&self) -> T {
        self.magnitude_square().sqrt()
    }

    /// Squared length (avoids sqrt)
    pub fn magnitude_square(&self) -> T {
        self.dot(self)
    }

    /// Scale to unit length in place.
    ///
    /// The zero vector becomes all NaN.
    pub fn normalize(&mut self) {
        let magnitude = self.magnitude();
        if magnitude == T::zero() {
            tracing::trace!(vector = %self, "normalizing zero-length vector");
        }
        self.x = self.x / magnitude;
        self.y = self.y / magnitude;
        self.z = self.z / magnitude;
    }

    /// Unit-length copy of this vector; see [`Vector3::normalize`].
    pub fn normalized(&self) -> Self {
        let mut unit = *self;
        unit.normalize();
        unit
    }

    /// Angle between `self` and `other` in degrees.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding on (anti)parallel
    /// vectors cannot push it outside the domain of `acos`. A zero-length
    /// operand still yields NaN.
    pub fn angle(&self, other: &Self) -> T {
        let cosine = self.dot(other) / (self.magnitude() * other.magnitude());
        cosine.clamp(-T::one(), T::one()).acos().to_degrees()
    }

    /// Set every component to zero.
    pub fn set_zero(&mut self) {
        *self = Self::zero();
    }

    /// Replace every component by its absolute value.
    pub fn absolute(&mut self) {
        self.x = self.x.abs();
        self.y = self.y.abs();
        self.z = self.z.abs();
    }

    /// Negate every component in place.
    pub fn negate(&mut self) {
        *self = -*self;
    }

    /// Conjugate in place. For a pure vector this is full negation, the same
    /// as [`Vector3::negate`]; quaternion code calls it by this name.
    pub fn conjugate(&mut self) {
        self.negate();
    }

    /// Print the components to stdout.
    pub fn show(&self) {
        println!("{}", self);
    }

    /// Write the components as one line into `out`.
    pub fn show_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl<T: FloatingPoint> fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// Implement operator + for Vector3<T>
impl<T: FloatingPoint> Add for Vector3<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl<T: FloatingPoint> AddAssign for Vector3<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

// Implement operator - for Vector3<T>
impl<T: FloatingPoint> Sub for Vector3<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl<T: FloatingPoint> SubAssign for Vector3<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: FloatingPoint> Neg for Vector3<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// Vector * Vector is the dot product
impl<T: FloatingPoint> Mul for Vector3<T> {
    type Output = T;

    fn mul(self, other: Self) -> T {
        self.dot(&other)
    }
}

// Vector % Vector is the cross product
impl<T: FloatingPoint> Rem for Vector3<T> {
    type Output = Self;

    fn rem(self, other: Self) -> Self {
        self.cross(&other)
    }
}

impl<T: FloatingPoint> RemAssign for Vector3<T> {
    fn rem_assign(&mut self, other: Self) {
        *self = self.cross(&other);
    }
}

// Scalar operators are implemented per concrete float type; a blanket
// `Mul<T>` would collide with the vector-vector impls above.
macro_rules! impl_vector3_scalar_ops {
    ($t:ty) => {
        impl Mul<$t> for Vector3<$t> {
            type Output = Self;

            fn mul(self, scalar: $t) -> Self {
                self.scale(scalar)
            }
        }

        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;

            fn mul(self, vector: Vector3<$t>) -> Vector3<$t> {
                vector * self
            }
        }

        impl MulAssign<$t> for Vector3<$t> {
            fn mul_assign(&mut self, scalar: $t) {
                *self = *self * scalar;
            }
        }

        impl Div<$t> for Vector3<$t> {
            type Output = Self;

            fn div(self, scalar: $t) -> Self {
                Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
            }
        }

        impl DivAssign<$t> for Vector3<$t> {
            fn div_assign(&mut self, scalar: $t) {
                *self = *self / scalar;
            }
        }

        impl Rem<$t> for Vector3<$t> {
            type Output = Self;

            fn rem(self, scalar: $t) -> Self {
                Self::new(self.x % scalar, self.y % scalar, self.z % scalar)
            }
        }

        impl RemAssign<$t> for Vector3<$t> {
            fn rem_assign(&mut self, scalar: $t) {
                *self = *self % scalar;
            }
        }
    };
}

impl_vector3_scalar_ops!(f32);
impl_vector3_scalar_ops!(f64);

impl<T> AbsDiffEq for Vector3<T>
where
    T: FloatingPoint + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl<T> RelativeEq for Vector3<T>
where
    T: FloatingPoint + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

// Conversions between Vector3<T> and tuples

impl<T: FloatingPoint> From<(T, T, T)> for Vector3<T> {
    fn from(tuple: (T, T, T)) -> Self {
        Self::new(tuple.0, tuple.1, tuple.2)
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for (T, T, T) {
    fn from(v: Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

// Conversions between Vector3<T> and arrays [T; 3]

impl<T: FloatingPoint> From<[T; 3]> for Vector3<T> {
    fn from(array: [T; 3]) -> Self {
        Self::new(array[0], array[1], array[2])
    }
}

impl<T: FloatingPoint> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

// Conversions from references to Vector3<T>

impl<T: FloatingPoint> From<&(T, T, T)> for Vector3<T> {
    fn from(tuple: &(T, T, T)) -> Self {
        Self::from(*tuple)
    }
}

impl<T: FloatingPoint> From<&[T; 3]> for Vector3<T> {
    fn from(array: &[T; 3]) -> Self {
        Self::from(*array)
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Vector3<T> {
    type Error = NumericsError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        match *slice {
            [x, y, z] => Ok(Self::new(x, y, z)),
            _ => Err(NumericsError::SliceLength {
                expected: 3,
                actual: slice.len(),
            }),
        }
    }
}

// Reverse conversions: from &Vector3<T> into tuples and arrays

impl<T: FloatingPoint> From<&Vector3<T>> for (T, T, T) {
    fn from(v: &Vector3<T>) -> Self {
        (v.x, v.y, v.z)
    }
}

impl<T: FloatingPoint> From<&Vector3<T>> for [T; 3] {
    fn from(v: &Vector3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}
