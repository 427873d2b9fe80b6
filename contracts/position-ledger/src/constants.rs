pub const BASIS_POINTS: u32 = 10_000;
pub const DEFAULT_COLLATERAL_RATIO_BPS: u32 = 15_000; // 150%
pub const DEFAULT_WEEKLY_INTEREST_RATE_BPS: u32 = 500; // 5% per completed week
pub const WEEK_SECONDS: u64 = 7 * 24 * 60 * 60;

pub const TTL_THRESHOLD: u32 = 100_000;
pub const TTL_EXTEND_TO: u32 = 200_000;
