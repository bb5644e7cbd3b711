use std::ops::{Add, Sub, Neg, Mul, AddAssign, SubAssign, MulAssign};

use crate::error::Error;

/// A mutable 3d vector with an optional magnitude clamp.
///
/// The components are plain public fields. The clamp (`limit`) is private:
/// while it is positive, every mutating operation of the type leaves the
/// magnitude at or below it. A limit of zero means unbounded.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    limit: f64
}

// Equality is component-wise; the clamp is policy, not identity.
impl PartialEq for Vector3 {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y && self.z == other.z
    }
}

impl Vector3 {
    /// Create a vector from three finite components. The clamp starts
    /// unbounded.
    pub fn new(x: f64, y: f64, z: f64) -> Result<Vector3, Error> {
        for (name, value) in &[("x", x), ("y", y), ("z", z)] {
            if !value.is_finite() {
                return Err(Error::InvalidArgument(
                    format!("component {} must be finite, got {}", name, value)));
            }
        }
        Ok(Vector3 { x, y, z, limit: 0.0 })
    }

    /// Create a vector in the xy-plane, `z = 0`.
    pub fn from_xy(x: f64, y: f64) -> Result<Vector3, Error> {
        Vector3::new(x, y, 0.0)
    }

    /// Assign all three components, then apply the magnitude clamp.
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self.apply_limit();
        self
    }

    /// Rotate the xy-components about the origin by `angle` radians; z is
    /// unaffected. An angle of exactly zero is a no-op.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        if angle != 0.0 {
            let (sin, cos) = angle.sin_cos();
            let x = cos * self.x - sin * self.y;
            let y = sin * self.x + cos * self.y;
            let z = self.z;
            self.set(x, y, z);
        }
        self
    }

    /// Scale this vector to unit magnitude, in place.
    pub fn normalize(&mut self) -> Result<&mut Self, Error> {
        let mag = self.mag();
        if mag == 0.0 {
            return Err(Error::DivideByZero(
                "cannot normalize a vector of magnitude zero".to_string()));
        }
        self.x /= mag;
        self.y /= mag;
        self.z /= mag;
        Ok(self)
    }

    /// Set the magnitude clamp. Zero removes the clamp; a lower value than
    /// the current one is allowed and takes effect immediately.
    pub fn set_limit(&mut self, limit: f64) -> Result<(), Error> {
        if !limit.is_finite() || limit < 0.0 {
            return Err(Error::InvalidArgument(
                format!("limit must be finite and non-negative, got {}", limit)));
        }
        self.limit = limit;
        self.apply_limit();
        Ok(())
    }

    /// The current magnitude clamp, zero meaning unbounded.
    pub fn limit(&self) -> f64 {
        self.limit
    }

    fn apply_limit(&mut self) {
        if self.limit > 0.0 {
            let mag = self.mag();
            if mag > self.limit {
                let scale = self.limit / mag;
                self.x *= scale;
                self.y *= scale;
                self.z *= scale;
            }
        }
    }

    pub fn dot(&self, other: Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-hand-rule cross product.
    pub fn cross(&self, other: Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
            limit: 0.0
        }
    }

    pub fn mag(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to `other`; neither operand is mutated.
    pub fn dist(&self, other: Vector3) -> f64 {
        (*self - other).mag()
    }

    /// A copy of the components with the clamp dropped.
    pub fn get(&self) -> Vector3 {
        Vector3 { x: self.x, y: self.y, z: self.z, limit: 0.0 }
    }

    /// Print the `(x, y, z)` tuple to stdout.
    pub fn print(&self) {
        println!("{}", self);
    }

    /// Divide each component of `v` by `scalar`.
    pub fn div(v: Vector3, scalar: f64) -> Result<Vector3, Error> {
        if scalar == 0.0 {
            return Err(Error::DivideByZero(
                "cannot divide a vector by zero".to_string()));
        }
        Ok(Vector3 { x: v.x / scalar, y: v.y / scalar, z: v.z / scalar, limit: 0.0 })
    }

    /// The unit vector in the direction of `v`.
    pub fn unit_vector(v: Vector3) -> Result<Vector3, Error> {
        let mag = v.mag();
        if mag == 0.0 {
            return Err(Error::DivideByZero(
                "a vector of magnitude zero has no direction".to_string()));
        }
        Vector3::div(v, mag)
    }

    /// The angle between two vectors in radians, in `[0, pi]`.
    pub fn angle_between(v1: Vector3, v2: Vector3) -> Result<f64, Error> {
        let mags = v1.mag() * v2.mag();
        if mags == 0.0 {
            return Err(Error::DivideByZero(
                "the angle to a vector of magnitude zero is undefined".to_string()));
        }
        // rounding can push the cosine just outside acos' domain
        let cos = (v1.dot(v2) / mags).max(-1.0).min(1.0);
        Ok(cos.acos())
    }
}

impl std::fmt::Display for Vector3 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;

    fn add(self, other: Self) -> Self {
        Vector3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
            limit: 0.0
        }
    }
}

impl Sub for Vector3 {
    type Output = Vector3;

    fn sub(self, other: Self) -> Self {
        Vector3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
            limit: 0.0
        }
    }
}

impl Neg for Vector3 {
    type Output = Vector3;

    fn neg(self) -> Self {
        Vector3 { x: -self.x, y: -self.y, z: -self.z, limit: 0.0 }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;

    fn mul(self, scalar: f64) -> Self {
        Vector3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
            limit: 0.0
        }
    }
}

// The in-place forms go through `set`, so the clamp applies.
impl AddAssign for Vector3 {
    fn add_assign(&mut self, other: Self) {
        self.set(self.x + other.x, self.y + other.y, self.z + other.z);
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, other: Self) {
        self.set(self.x - other.x, self.y - other.y, self.z - other.z);
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, scalar: f64) {
        self.set(self.x * scalar, self.y * scalar, self.z * scalar);
    }
}

impl num_traits::identities::Zero for Vector3 {
    fn zero() -> Self {
        Vector3 { x: 0.0, y: 0.0, z: 0.0, limit: 0.0 }
    }

    fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }
}
