use std::fmt::{self, Display};

use super::Vector;

/// Heap backed vector for worlds with five or more dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorN {
    values: Vec<f64>,
}

impl VectorN {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Unit vector along axis `axis`.
    pub fn unit(dimension: usize, axis: usize) -> Self {
        let mut values = vec![0.0; dimension];
        values[axis] = 1.0;
        Self { values }
    }

    #[inline]
    fn check_dimension(&self, other: &VectorN) {
        assert_eq!(
            self.values.len(),
            other.values.len(),
            "vector dimension mismatch"
        );
    }
}

impl Vector for VectorN {
    const FIXED_DIMENSION: Option<usize> = None;

    fn zero(dimension: usize) -> Self {
        Self {
            values: vec![0.0; dimension],
        }
    }

    fn from_components(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    #[inline]
    fn dimension(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn component(&self, idx: usize) -> f64 {
        self.values[idx]
    }

    fn components(&self) -> Vec<f64> {
        self.values.clone()
    }

    fn set(&mut self, other: &Self) {
        self.check_dimension(other);
        self.values.copy_from_slice(&other.values);
    }

    fn set_zero(&mut self) {
        self.values.fill(0.0);
    }

    fn add_scaled(&mut self, other: &Self, factor: f64) {
        self.check_dimension(other);
        for (a, b) in self.values.iter_mut().zip(other.values.iter()) {
            *a += b * factor;
        }
    }

    fn scale(&mut self, factor: f64) {
        for a in self.values.iter_mut() {
            *a *= factor;
        }
    }

    fn dot(&self, other: &Self) -> f64 {
        self.check_dimension(other);
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| a * b)
            .sum()
    }

    fn squared_distance_to(&self, other: &Self) -> f64 {
        self.check_dimension(other);
        self.values
            .iter()
            .zip(other.values.iter())
            .map(|(a, b)| (a - b) * (a - b))
            .sum()
    }
}

impl Display for VectorN {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "vector dimension mismatch")]
    fn mixing_dimensions_fails_fast() {
        let mut a = VectorN::zero(5);
        a.add(&VectorN::zero(6));
    }

    #[test]
    fn display_uses_round_brackets() {
        let v = VectorN::new(vec![1.0, -2.5, 0.0]);
        assert_eq!(v.to_string(), "(1, -2.5, 0)");
    }

    #[test]
    fn unit_vectors_are_orthonormal() {
        let a = VectorN::unit(6, 2);
        let b = VectorN::unit(6, 5);
        assert_eq!(a.dot(&b), 0.0);
        assert_eq!(a.length(), 1.0);
    }
}
