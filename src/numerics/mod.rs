// src/numerics/mod.rs
// Top-level numerics module. Exposes a `types` namespace with submodules.

pub mod types {
    // The submodules live in src/numerics/types/*.rs
    pub mod traits;
    pub mod vector2;
    pub mod vector;
    pub mod quaternion;
}

pub mod error;
#[cfg(feature = "serde")]
pub mod codec;

#[cfg(feature = "serde")]
pub use codec::CodecError;
pub use error::{NumericsError, Result};
pub use types::quaternion::Quaternion;
pub use types::traits::FloatingPoint;
pub use types::vector::Vector3;
pub use types::vector2::Vector2;
