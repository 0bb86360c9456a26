// Opportunity scoring: saturation/efficiency formulas and the filter-and-rank step.

pub mod opportunity;
pub mod rank;
