//! # zerothree-maths
//!
//! Vector and quaternion value types for the ZeroThree engine.
//!
//! All types are `Copy` values generic over a [`FloatingPoint`] scalar
//! (`f32` by default). Arithmetic is exposed both through the `std::ops`
//! operators and through named methods, and it never fails: degenerate input
//! such as normalizing a zero vector produces NaN or infinite components that
//! propagate to the caller.
//!
//! ```rust
//! use zerothree_maths::{Quaternion, Vector3};
//!
//! let a: Vector3 = Vector3::new(3.0, 4.0, 0.0);
//! assert_eq!(a.magnitude(), 5.0);
//!
//! let b = Vector3::new(0.0, 0.0, 1.0);
//! assert_eq!(a % b, a.cross(&b));
//!
//! let turn = Quaternion::from_axis_angle(b, 90.0);
//! let rotated = turn.rotate(&Vector3::new(1.0, 0.0, 0.0));
//! assert!((rotated.y - 1.0).abs() < 1e-5);
//! ```

pub mod numerics;

pub use numerics::{FloatingPoint, NumericsError, Quaternion, Vector2, Vector3};
