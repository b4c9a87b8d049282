//! Id and timestamp helpers

/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Custom epoch for resource ids: 2024-01-01 00:00:00 UTC
const EPOCH_MS: i64 = 1_704_067_200_000;

/// Generate a Snowflake-style i64 resource id.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER so the
/// storefront can handle ids without string conversion):
///   - 41 bits: milliseconds since the custom epoch (~69 years)
///   - 12 bits: random (4096 values per ms, enough for a single restaurant)
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    let ts = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    (ts << 12) | rand_bits
}
