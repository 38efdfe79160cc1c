use crate::vector::Axis;

/// Errors produced while loading or analysing a moon system.
#[derive(Debug, thiserror::Error)]
pub enum MoonError {
    /// A line of the input could not be read as `<x=.., y=.., z=..>`.
    #[error("line {line}: {detail}")]
    Parse { line: usize, detail: String },

    /// The axis did not return to its starting state within the step limit.
    #[error("{axis} axis did not repeat within {limit} steps")]
    PeriodNotFound { axis: Axis, limit: u64 },

    /// The least common multiple of the axis periods does not fit in a u64.
    #[error("system period overflows u64 (axis periods {axes:?})")]
    PeriodOverflow { axes: [u64; 3] },
}
