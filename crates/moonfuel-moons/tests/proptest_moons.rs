//! Property-based tests for the moon simulation.
//!
//! Uses proptest to generate small random systems and verify conservation
//! and periodicity invariants.

use moonfuel_moons::axis::AxisState;
use moonfuel_moons::period::axis_period;
use moonfuel_moons::{Axis, Moon, MoonSystem, Vec3};
use proptest::prelude::*;

// ===========================================================================
// Generators
// ===========================================================================

fn arb_moon() -> impl Strategy<Value = Moon> {
    (-15i64..=15, -15i64..=15, -15i64..=15).prop_map(|(x, y, z)| Moon::at_rest(Vec3::new(x, y, z)))
}

fn arb_system(max_moons: usize) -> impl Strategy<Value = MoonSystem> {
    proptest::collection::vec(arb_moon(), 0..=max_moons).prop_map(MoonSystem::new)
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Velocities of a system started at rest always sum to zero per axis.
    #[test]
    fn momentum_conserved(mut system in arb_system(5), steps in 0u64..200) {
        system.simulate(steps);
        let total = system.moons().iter().fold(Vec3::ZERO, |acc, m| acc + m.velocity);
        prop_assert_eq!(total, Vec3::ZERO);
    }

    /// Stepping an axis alone agrees with stepping the whole system.
    #[test]
    fn axes_evolve_independently(mut system in arb_system(5), steps in 0usize..100) {
        let mut axes: Vec<AxisState> = Axis::ALL.iter().map(|&a| system.axis_state(a)).collect();
        for _ in 0..steps {
            system.step();
            for state in &mut axes {
                state.step();
            }
        }
        for (axis, state) in Axis::ALL.iter().zip(&axes) {
            prop_assert_eq!(&system.axis_state(*axis), state);
        }
    }

    /// Each axis returns to its start after its period, and the system
    /// period is a common multiple of all three.
    #[test]
    fn period_returns_to_start(system in arb_system(3)) {
        let report = system.period(Some(1_000_000)).unwrap();
        for axis in Axis::ALL {
            let initial = system.axis_state(axis);
            let mut state = initial.clone();
            for _ in 0..report.axis(axis) {
                state.step();
            }
            prop_assert_eq!(&state, &initial);
            prop_assert_eq!(report.steps % report.axis(axis), 0);
        }
    }

    /// No axis returns to its start before its reported period.
    #[test]
    fn axis_period_is_minimal(system in arb_system(3)) {
        for axis in Axis::ALL {
            let initial = system.axis_state(axis);
            let period = axis_period(axis, &initial, Some(1_000_000)).unwrap();
            let mut state = initial.clone();
            for _ in 1..period {
                state.step();
                prop_assert_ne!(&state, &initial);
            }
        }
    }
}
