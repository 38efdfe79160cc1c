use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Index, IndexMut};

/// One of the three lattice axes. Axes never interact during a motion step,
/// which is what makes per-axis period detection possible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Key used for this axis in the `<x=.., y=.., z=..>` input format.
    pub fn key(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Integer 3-vector used for both positions and velocities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0, y: 0, z: 0 };

    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    /// Sum of absolute components, saturating at `i64::MAX`.
    pub fn manhattan(self) -> i64 {
        self.x
            .saturating_abs()
            .saturating_add(self.y.saturating_abs())
            .saturating_add(self.z.saturating_abs())
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Index<Axis> for Vec3 {
    type Output = i64;

    fn index(&self, axis: Axis) -> &i64 {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
            Axis::Z => &self.z,
        }
    }
}

impl IndexMut<Axis> for Vec3 {
    fn index_mut(&mut self, axis: Axis) -> &mut i64 {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
            Axis::Z => &mut self.z,
        }
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<x={}, y={}, z={}>", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_sums_absolute_components() {
        assert_eq!(Vec3::new(-1, 2, -3).manhattan(), 6);
        assert_eq!(Vec3::ZERO.manhattan(), 0);
    }

    #[test]
    fn manhattan_saturates() {
        assert_eq!(Vec3::new(i64::MIN, 0, 0).manhattan(), i64::MAX);
        assert_eq!(Vec3::new(i64::MAX, i64::MAX, 1).manhattan(), i64::MAX);
    }

    #[test]
    fn add_assign_accumulates() {
        let mut v = Vec3::new(1, 2, 3);
        v += Vec3::new(-2, 0, 4);
        assert_eq!(v, Vec3::new(-1, 2, 7));
    }

    #[test]
    fn index_by_axis() {
        let mut v = Vec3::new(5, 6, 7);
        assert_eq!(v[Axis::X], 5);
        assert_eq!(v[Axis::Y], 6);
        assert_eq!(v[Axis::Z], 7);
        v[Axis::Y] = -6;
        assert_eq!(v.y, -6);
    }

    #[test]
    fn display_matches_input_format() {
        assert_eq!(Vec3::new(-1, 0, 2).to_string(), "<x=-1, y=0, z=2>");
    }

    #[test]
    fn axis_order_is_x_y_z() {
        let keys: Vec<_> = Axis::ALL.iter().map(|a| a.key()).collect();
        assert_eq!(keys, ["x", "y", "z"]);
        assert_eq!(Axis::Z.index(), 2);
    }
}
