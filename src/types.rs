//! Types

use nalgebra::Scalar;
use num::Float;

/// Scalar types that can be used as mesh coordinates
pub trait RealScalar: Float + Scalar {}

impl<T: Float + Scalar> RealScalar for T {}
