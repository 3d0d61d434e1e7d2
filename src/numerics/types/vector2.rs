// src/numerics/types/vector2.rs
// Vector2 generic implementation with default precision f32.

use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};
use std::io::{self, Write};

use approx::{AbsDiffEq, RelativeEq};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::traits::FloatingPoint;
use crate::numerics::error::NumericsError;

/// Vector2 is a 2D vector with the same value semantics as
/// [`Vector3`](super::vector::Vector3): binary operators return new values,
/// compound operators mutate in place, and `*` between two vectors is the dot
/// product.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vector2<T: FloatingPoint = f32> {
    pub x: T,
    pub y: T,
}

#[cfg(feature = "serde")]
impl<T> Serialize for Vector2<T>
where
    T: FloatingPoint + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        (&self.x, &self.y).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> Deserialize<'de> for Vector2<T>
where
    T: FloatingPoint + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let (x, y) = <(T, T)>::deserialize(deserializer)?;
        Ok(Vector2 { x, y })
    }
}

impl<T: FloatingPoint> Vector2<T> {
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero())
    }

    pub fn one() -> Self {
        Self::new(T::one(), T::one())
    }

    pub fn scale(&self, factor: T) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean length.
    pub fn length(&self) -> T {
        self.length_squared().sqrt()
    }

    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    pub fn set_zero(&mut self) {
        *self = Self::zero();
    }

    pub fn absolute(&mut self) {
        self.x = self.x.abs();
        self.y = self.y.abs();
    }

    pub fn negate(&mut self) {
        *self = -*self;
    }

    /// Print the components to stdout.
    pub fn show(&self) {
        println!("{}", self);
    }

    pub fn show_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl<T: FloatingPoint> fmt::Display for Vector2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<T: FloatingPoint> Add for Vector2<T> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl<T: FloatingPoint> AddAssign for Vector2<T> {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl<T: FloatingPoint> Sub for Vector2<T> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl<T: FloatingPoint> SubAssign for Vector2<T> {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl<T: FloatingPoint> Neg for Vector2<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

// Vector * Vector is the dot product
impl<T: FloatingPoint> Mul for Vector2<T> {
    type Output = T;

    fn mul(self, other: Self) -> T {
        self.dot(&other)
    }
}

macro_rules! impl_vector2_scalar_ops {
    ($t:ty) => {
        impl Mul<$t> for Vector2<$t> {
            type Output = Self;

            fn mul(self, scalar: $t) -> Self {
                self.scale(scalar)
            }
        }

        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;

            fn mul(self, vector: Vector2<$t>) -> Vector2<$t> {
                vector * self
            }
        }

        impl MulAssign<$t> for Vector2<$t> {
            fn mul_assign(&mut self, scalar: $t) {
                *self = *self * scalar;
            }
        }

        impl Div<$t> for Vector2<$t> {
            type Output = Self;

            fn div(self, scalar: $t) -> Self {
                Self::new(self.x / scalar, self.y / scalar)
            }
        }

        impl DivAssign<$t> for Vector2<$t> {
            fn div_assign(&mut self, scalar: $t) {
                *self = *self / scalar;
            }
        }

        impl Rem<$t> for Vector2<$t> {
            type Output = Self;

            fn rem(self, scalar: $t) -> Self {
                Self::new(self.x % scalar, self.y % scalar)
            }
        }

        impl RemAssign<$t> for Vector2<$t> {
            fn rem_assign(&mut self, scalar: $t) {
                *self = *self % scalar;
            }
        }
    };
}

impl_vector2_scalar_ops!(f32);
impl_vector2_scalar_ops!(f64);

impl<T> AbsDiffEq for Vector2<T>
where
    T: FloatingPoint + AbsDiffEq<Epsilon = T>,
{
    type Epsilon = T;

    fn default_epsilon() -> T {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl<T> RelativeEq for Vector2<T>
where
    T: FloatingPoint + RelativeEq<Epsilon = T>,
{
    fn default_max_relative() -> T {
        T::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl<T: FloatingPoint> From<(T, T)> for Vector2<T> {
    fn from(tuple: (T, T)) -> Self {
        Self::new(tuple.0, tuple.1)
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for (T, T) {
    fn from(v: Vector2<T>) -> Self {
        (v.x, v.y)
    }
}

impl<T: FloatingPoint> From<[T; 2]> for Vector2<T> {
    fn from(array: [T; 2]) -> Self {
        Self::new(array[0], array[1])
    }
}

impl<T: FloatingPoint> From<Vector2<T>> for [T; 2] {
    fn from(v: Vector2<T>) -> Self {
        [v.x, v.y]
    }
}

impl<T: FloatingPoint> TryFrom<&[T]> for Vector2<T> {
    type Error = NumericsError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        match *slice {
            [x, y] => Ok(Self::new(x, y)),
            _ => Err(NumericsError::SliceLength {
                expected: 2,
                actual: slice.len(),
            }),
        }
    }
}
