// Published methodology constants
pub const DEVIATION_MULTIPLIER: f64 = 2.5;
pub const ABSOLUTE_GAP: i32 = 100;
pub const DOUBLE_WEIGHT_FRACTION: f64 = 0.25;
// Rounds remain eligible for this long leading up to a publication date
pub const ELIGIBILITY_MONTHS: u32 = 12;
