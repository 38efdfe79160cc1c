//! Sample systems from the puzzle statement, shared by unit tests,
//! integration tests, and benchmarks (via the `test-utils` feature).

use crate::system::MoonSystem;

pub const FIRST_SAMPLE: &str = "\
<x=-1, y=0, z=2>
<x=2, y=-10, z=-7>
<x=4, y=-8, z=8>
<x=3, y=5, z=-1>
";

pub const FIRST_SAMPLE_ENERGY_AFTER_10: i64 = 179;
pub const FIRST_SAMPLE_PERIOD: u64 = 2772;

pub const SECOND_SAMPLE: &str = "\
<x=-8, y=-10, z=0>
<x=5, y=5, z=10>
<x=2, y=-7, z=3>
<x=9, y=-8, z=-3>
";

pub const SECOND_SAMPLE_ENERGY_AFTER_100: i64 = 1940;
pub const SECOND_SAMPLE_PERIOD: u64 = 4_686_774_924;

pub fn first_sample() -> MoonSystem {
    FIRST_SAMPLE.parse().expect("first sample parses")
}

pub fn second_sample() -> MoonSystem {
    SECOND_SAMPLE.parse().expect("second sample parses")
}
