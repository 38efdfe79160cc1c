use serde::{Deserialize, Serialize};

/// Velocity change that `b` exerts on `a` along one axis.
#[inline]
pub fn gravity(a: i64, b: i64) -> i64 {
    b.cmp(&a) as i64
}

/// One axis of every moon. Each axis evolves independently of the other
/// two, so an `AxisState` can be stepped on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxisState {
    pub positions: Vec<i64>,
    pub velocities: Vec<i64>,
}

impl AxisState {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Same rule as [`MoonSystem::step`](crate::system::MoonSystem::step),
    /// restricted to this axis.
    pub fn step(&mut self) {
        let n = self.positions.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let pull = gravity(self.positions[i], self.positions[j]);
                self.velocities[i] += pull;
                self.velocities[j] -= pull;
            }
        }
        for (p, v) in self.positions.iter_mut().zip(&self.velocities) {
            *p += v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use crate::vector::Axis;

    #[test]
    fn gravity_pulls_towards_other() {
        assert_eq!(gravity(3, 5), 1);
        assert_eq!(gravity(5, 3), -1);
        assert_eq!(gravity(4, 4), 0);
    }

    #[test]
    fn gravity_at_extremes() {
        assert_eq!(gravity(i64::MIN, i64::MAX), 1);
        assert_eq!(gravity(i64::MAX, i64::MIN), -1);
        assert_eq!(gravity(-5_000_000_000_000_000_000, 5_000_000_000_000_000_000), 1);
    }

    #[test]
    fn axis_step_matches_full_step() {
        let mut system = second_sample();
        let mut axes: Vec<AxisState> = Axis::ALL.iter().map(|&a| system.axis_state(a)).collect();

        for _ in 0..37 {
            system.step();
            for state in &mut axes {
                state.step();
            }
        }

        for (axis, state) in Axis::ALL.iter().zip(&axes) {
            assert_eq!(&system.axis_state(*axis), state, "axis {axis} diverged");
        }
    }

    #[test]
    fn empty_axis_step_is_noop() {
        let mut state = AxisState::default();
        state.step();
        assert!(state.is_empty());
    }
}
