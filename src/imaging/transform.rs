//! 2D affine transforms and the orientation-correction table.
//!
//! Coordinates are image space: origin at the top-left, `y` growing
//! downward, so a positive rotation turns content clockwise on screen.
//!
//! A transform maps a point as
//!
//! ```text
//! x' = a·x + c·y + tx
//! y' = b·x + d·y + ty
//! ```
//!
//! The builder methods ([`translated`](AffineTransform::translated),
//! [`scaled`](AffineTransform::scaled), [`rotated`](AffineTransform::rotated))
//! prepend their operation: in `t.translated(w, 0).scaled(-1, 1)` the scale is
//! applied to a point first, then the translation.

use super::orientation::Orientation;
use super::params::TargetGeometry;
use std::f64::consts::{FRAC_PI_2, PI};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffineTransform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl AffineTransform {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// Rotation by `angle` radians. Quarter turns come out exact.
    pub fn rotation(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let (sin, cos) = (snap(sin), snap(cos));
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// `self ∘ first`: apply `first`, then `self`.
    pub fn concat(self, first: Self) -> Self {
        Self {
            a: self.a * first.a + self.c * first.b,
            b: self.b * first.a + self.d * first.b,
            c: self.a * first.c + self.c * first.d,
            d: self.b * first.c + self.d * first.d,
            tx: self.a * first.tx + self.c * first.ty + self.tx,
            ty: self.b * first.tx + self.d * first.ty + self.ty,
        }
    }

    pub fn translated(self, tx: f64, ty: f64) -> Self {
        self.concat(Self::translation(tx, ty))
    }

    pub fn scaled(self, sx: f64, sy: f64) -> Self {
        self.concat(Self::scale(sx, sy))
    }

    pub fn rotated(self, angle: f64) -> Self {
        self.concat(Self::rotation(angle))
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.a * x + self.c * y + self.tx,
            self.b * x + self.d * y + self.ty,
        )
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform, or `None` if the matrix is singular.
    pub fn invert(&self) -> Option<Self> {
        let det = self.determinant();
        if det.abs() < f64::EPSILON {
            return None;
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(Self {
            a,
            b,
            c,
            d,
            tx: -(a * self.tx + c * self.ty),
            ty: -(b * self.tx + d * self.ty),
        })
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

fn snap(v: f64) -> f64 {
    let r = v.round();
    if (v - r).abs() < 1e-12 { r } else { v }
}

/// Transform that places the draw rectangle on a `target` canvas so the
/// content appears upright.
///
/// The draw rectangle is the canvas itself, or the canvas with its axes
/// swapped for quarter-turn orientations (see
/// [`calculate_draw_dimensions`](super::calculations::calculate_draw_dimensions)).
/// Each case is a fixed composition; `w`/`h` are the canvas extents that pull
/// the mirrored or rotated content back into `[0,w]×[0,h]`.
pub fn orientation_transform(orientation: Orientation, target: TargetGeometry) -> AffineTransform {
    let w = f64::from(target.width);
    let h = f64::from(target.height);
    let t = AffineTransform::IDENTITY;

    match orientation {
        Orientation::Upright => t,
        Orientation::FlipHorizontal => t.translated(w, 0.0).scaled(-1.0, 1.0),
        Orientation::Rotate180 => t.translated(w, h).rotated(PI),
        Orientation::FlipVertical => t.translated(0.0, h).scaled(1.0, -1.0),
        Orientation::Transpose => t.scaled(-1.0, 1.0).rotated(FRAC_PI_2),
        Orientation::Rotate90Cw => t.translated(w, 0.0).rotated(FRAC_PI_2),
        Orientation::Transverse => t.translated(w, h).scaled(-1.0, 1.0).rotated(-FRAC_PI_2),
        Orientation::Rotate90Ccw => t.translated(0.0, h).rotated(-FRAC_PI_2),
    }
}
