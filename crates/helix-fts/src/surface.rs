use std::fmt;

use helix_core::{ErrorInfo, HelixError, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Discriminates the concrete surface behind a [`Surface`] trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceKind {
    /// Infinite plane.
    Plane,
    /// Infinite circular cylinder.
    Cylinder,
}

/// Geometric surface a trajectory state can be anchored to.
pub trait Surface: fmt::Debug + Send + Sync {
    /// Returns the concrete surface family.
    fn kind(&self) -> SurfaceKind;

    /// Returns the local planar approximation of the surface at `point`.
    fn tangent_plane(&self, point: &Point3) -> Plane;
}

/// Infinite plane through `origin` with unit `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    origin: Point3,
    normal: Vector3,
}

impl Plane {
    /// Creates a plane, normalising `normal`.
    pub fn new(origin: Point3, normal: Vector3) -> Result<Self, HelixError> {
        let normal = unit_or_err(normal, "plane normal")?;
        Ok(Self { origin, normal })
    }

    /// Point on the plane.
    pub fn origin(&self) -> Point3 {
        self.origin
    }

    /// Unit normal of the plane.
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Signed distance of `point` from the plane along the normal.
    pub fn signed_distance(&self, point: &Point3) -> f64 {
        (point - self.origin).dot(&self.normal)
    }
}

impl Surface for Plane {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Plane
    }

    fn tangent_plane(&self, _point: &Point3) -> Plane {
        *self
    }
}

/// Infinite circular cylinder of `radius` around the line through `origin` along `axis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cylinder {
    origin: Point3,
    axis: Vector3,
    radius: f64,
}

impl Cylinder {
    /// Creates a cylinder, normalising `axis`.
    pub fn new(origin: Point3, axis: Vector3, radius: f64) -> Result<Self, HelixError> {
        if !(radius > 0.0) || !radius.is_finite() {
            let info = ErrorInfo::new("invalid-radius", "cylinder radius must be positive")
                .with_context("radius", radius.to_string());
            return Err(HelixError::Geometry(info));
        }
        let axis = unit_or_err(axis, "cylinder axis")?;
        Ok(Self {
            origin,
            axis,
            radius,
        })
    }

    /// Cylinder radius.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Unit axis direction.
    pub fn axis(&self) -> Vector3 {
        self.axis
    }

    /// Point on the axis.
    pub fn origin(&self) -> Point3 {
        self.origin
    }
}

impl Surface for Cylinder {
    fn kind(&self) -> SurfaceKind {
        SurfaceKind::Cylinder
    }

    fn tangent_plane(&self, point: &Point3) -> Plane {
        let offset = point - self.origin;
        let along = offset.dot(&self.axis);
        let radial = offset - self.axis * along;
        // A point on the axis has no preferred azimuth; pick one perpendicular to it.
        let normal = radial
            .try_normalize(f64::EPSILON)
            .unwrap_or_else(|| any_perpendicular(&self.axis));
        Plane {
            origin: self.origin + self.axis * along + normal * self.radius,
            normal,
        }
    }
}

fn unit_or_err(vector: Vector3, what: &str) -> Result<Vector3, HelixError> {
    vector.try_normalize(f64::EPSILON).ok_or_else(|| {
        HelixError::Geometry(
            ErrorInfo::new("degenerate-direction", format!("{what} must be non-zero"))
                .with_context("vector", format!("{:?}", vector.as_slice())),
        )
    })
}

fn any_perpendicular(axis: &Vector3) -> Vector3 {
    let seed = if axis.x.abs() < 0.9 {
        Vector3::x()
    } else {
        Vector3::y()
    };
    axis.cross(&seed).normalize()
}
