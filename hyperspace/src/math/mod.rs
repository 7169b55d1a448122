use std::fmt::Debug;

use cgmath::{InnerSpace, MetricSpace, Vector2, Vector3, Vector4, Zero};

use crate::constants::NEARLY_ZERO;

mod geometry;
pub mod occlusion;
mod vector_n;

pub use geometry::{Ball, Hyperplane, Segment};
pub use vector_n::VectorN;

/// Checks whether a number is close enough to zero that floating point
/// noise could be the only reason it is not.
#[inline]
pub fn nearly_zero(num: f64) -> bool {
    num.abs() < NEARLY_ZERO
}

/// A vector with a dimension that is fixed once it is created.
///
/// Implementors provide the handful of primitive operations below; everything
/// else is derived from them. Mixing vectors of different dimensions is a
/// programming error and panics.
pub trait Vector: Clone + Debug + PartialEq + Send + Sync + 'static {
    /// The only dimension this type can hold, `None` when it is chosen at
    /// runtime.
    const FIXED_DIMENSION: Option<usize>;

    /// A vector of the given dimension with every component zero.
    fn zero(dimension: usize) -> Self;

    /// Builds a vector from its components, panicking on a wrong count for
    /// fixed-size vectors.
    fn from_components(values: &[f64]) -> Self;

    fn dimension(&self) -> usize;

    fn component(&self, idx: usize) -> f64;

    fn components(&self) -> Vec<f64> {
        (0..self.dimension()).map(|i| self.component(i)).collect()
    }

    fn set(&mut self, other: &Self);

    /// `self += other * factor`
    fn add_scaled(&mut self, other: &Self, factor: f64);

    fn scale(&mut self, factor: f64);

    fn dot(&self, other: &Self) -> f64;

    /// Overwrites every component, so undefined vectors are cleared too.
    fn set_zero(&mut self) {
        *self = Self::zero(self.dimension());
    }

    fn add(&mut self, other: &Self) {
        self.add_scaled(other, 1.0);
    }

    fn sub(&mut self, other: &Self) {
        self.add_scaled(other, -1.0);
    }

    fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    fn squared_distance_to(&self, other: &Self) -> f64 {
        self.minus(other).length_squared()
    }

    fn distance_to(&self, other: &Self) -> f64 {
        self.squared_distance_to(other).sqrt()
    }

    /// Scales to unit length. A zero vector becomes all NaN.
    fn normalize(&mut self) {
        let len = self.length();
        self.scale(1.0 / len);
    }

    fn normalized(&self) -> Self {
        let mut v = self.clone();
        v.normalize();
        v
    }

    fn plus(&self, other: &Self) -> Self {
        let mut v = self.clone();
        v.add(other);
        v
    }

    fn minus(&self, other: &Self) -> Self {
        let mut v = self.clone();
        v.sub(other);
        v
    }

    fn scaled(&self, factor: f64) -> Self {
        let mut v = self.clone();
        v.scale(factor);
        v
    }

    fn plus_scaled(&self, other: &Self, factor: f64) -> Self {
        let mut v = self.clone();
        v.add_scaled(other, factor);
        v
    }

    /// False when any component is NaN or infinite, which is how undefined
    /// results (an empty barycenter, a zero-length direction) are signalled.
    fn is_defined(&self) -> bool {
        (0..self.dimension()).all(|i| self.component(i).is_finite())
    }
}

/// A unit vector from the altered spherical angles used by the cameras.
///
/// With angles `a1..an` the components are
/// `x0 = cos(a1)..cos(an)`, `x1 = sin(a1)cos(a2)..cos(an)`,
/// `x2 = sin(a2)cos(a3)..cos(an)` and so on up to `xn = sin(an)`.
pub fn from_angles<V: Vector>(angles: &[f64]) -> V {
    let mut values = vec![0.0; angles.len() + 1];
    for (i, value) in values.iter_mut().enumerate() {
        *value = if i == 0 { 1.0 } else { angles[i - 1].sin() };
        for angle in &angles[i..] {
            *value *= angle.cos();
        }
    }
    V::from_components(&values)
}

/// Inverse of [`from_angles`] for a non-zero direction.
///
/// The first angle sits in the x0/x1 plane, every later angle `k` lifts
/// component `k + 1` out of the span of the components before it.
///
/// # Panics
///
/// A direction needs at least two dimensions to have an angle.
pub fn to_angles<V: Vector>(direction: &V) -> Vec<f64> {
    let dim = direction.dimension();
    assert!(dim >= 2, "angles need at least two dimensions, got {dim}");
    let mut angles = Vec::with_capacity(dim - 1);
    angles.push(direction.component(1).atan2(direction.component(0)));
    let mut sub_length_sq = direction.component(0).powi(2);
    for k in 1..dim - 1 {
        sub_length_sq += direction.component(k).powi(2);
        angles.push(direction.component(k + 1).atan2(sub_length_sq.sqrt()));
    }
    angles
}

macro_rules! impl_fixed_vector {
    ($ty:ident, $dim:expr) => {
        impl Vector for $ty<f64> {
            const FIXED_DIMENSION: Option<usize> = Some($dim);

            fn zero(dimension: usize) -> Self {
                assert_eq!(dimension, $dim, "vector dimension mismatch");
                <$ty<f64> as Zero>::zero()
            }

            fn from_components(values: &[f64]) -> Self {
                assert_eq!(values.len(), $dim, "vector dimension mismatch");
                let arr: [f64; $dim] = std::array::from_fn(|i| values[i]);
                arr.into()
            }

            #[inline]
            fn dimension(&self) -> usize {
                $dim
            }

            #[inline]
            fn component(&self, idx: usize) -> f64 {
                self[idx]
            }

            #[inline]
            fn set(&mut self, other: &Self) {
                *self = *other;
            }

            #[inline]
            fn add_scaled(&mut self, other: &Self, factor: f64) {
                *self += *other * factor;
            }

            #[inline]
            fn scale(&mut self, factor: f64) {
                *self *= factor;
            }

            #[inline]
            fn set_zero(&mut self) {
                *self = <$ty<f64> as Zero>::zero();
            }

            #[inline]
            fn dot(&self, other: &Self) -> f64 {
                InnerSpace::dot(*self, *other)
            }

            #[inline]
            fn squared_distance_to(&self, other: &Self) -> f64 {
                MetricSpace::distance2(*self, *other)
            }
        }
    };
}

impl_fixed_vector!(Vector2, 2);
impl_fixed_vector!(Vector3, 3);
impl_fixed_vector!(Vector4, 4);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use cgmath::{Vector2, Vector3, Vector4};

    use super::*;

    fn sample(dim: usize, seed: f64) -> VectorN {
        VectorN::new((0..dim).map(|i| (seed * (i as f64 + 1.3)).sin() * 10.0).collect())
    }

    #[test]
    fn distance_is_symmetric_and_obeys_triangle_inequality() {
        for dim in 1..9 {
            let a = sample(dim, 0.7);
            let b = sample(dim, 1.9);
            let c = sample(dim, -3.1);
            assert_abs_diff_eq!(a.distance_to(&b), b.distance_to(&a));
            assert_abs_diff_eq!(a.squared_distance_to(&b), b.squared_distance_to(&a));
            assert!(a.distance_to(&c) <= a.distance_to(&b) + b.distance_to(&c) + 1e-12);
        }
    }

    #[test]
    fn fixed_vectors_agree_with_dynamic_ones() {
        let a = Vector3::new(1.0, -2.0, 0.5);
        let b = Vector3::new(-4.0, 3.0, 2.0);
        let an = VectorN::from_components(&a.components());
        let bn = VectorN::from_components(&b.components());
        assert_abs_diff_eq!(Vector::dot(&a, &b), an.dot(&bn));
        assert_abs_diff_eq!(a.squared_distance_to(&b), an.squared_distance_to(&bn));
        assert_eq!(a.plus_scaled(&b, 2.0).components(), an.plus_scaled(&bn, 2.0).components());
    }

    #[test]
    fn zero_vector_normalizes_to_undefined() {
        let mut v = <Vector4<f64> as Vector>::zero(4);
        assert!(v.is_defined());
        Vector::normalize(&mut v);
        assert!(!v.is_defined());
    }

    #[test]
    fn set_zero_clears_undefined_components() {
        let mut v = VectorN::new(vec![f64::NAN, f64::INFINITY, 1.0]);
        v.set_zero();
        assert_eq!(v.components(), vec![0.0, 0.0, 0.0]);

        let mut v = Vector3::new(f64::NAN, f64::NEG_INFINITY, 2.0);
        Vector::set_zero(&mut v);
        assert_eq!(v, Vector3::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn angles_match_spherical_convention() {
        let theta = 0.3_f64;
        let phi = -0.8_f64;
        let v: Vector3<f64> = from_angles(&[theta, phi]);
        assert_abs_diff_eq!(v.x, phi.cos() * theta.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, phi.cos() * theta.sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(v.z, phi.sin(), epsilon = 1e-12);
        assert_abs_diff_eq!(Vector::length(&v), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn to_angles_inverts_from_angles() {
        let angles = [2.1, -0.4, 0.9, 0.2];
        let v: VectorN = from_angles(&angles);
        let back = to_angles(&v);
        for (a, b) in angles.iter().zip(back.iter()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    #[should_panic(expected = "angles need at least two dimensions")]
    fn one_dimensional_directions_have_no_angles() {
        let _ = to_angles(&VectorN::new(vec![1.0]));
    }

    #[test]
    #[should_panic(expected = "vector dimension mismatch")]
    fn wrong_component_count_panics() {
        let _ = <Vector2<f64> as Vector>::from_components(&[1.0, 2.0, 3.0]);
    }
}
