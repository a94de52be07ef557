/// Scored layout candidates
pub mod candidate;
/// Omit/pad/clip cost model
pub mod cost;
/// Exact grid factorizations of a tile count
pub mod factorization;
/// Search driver and search limits
pub mod optimizer;
/// Deterministic candidate ordering
pub mod ranking;
/// Integer cell scales for a fixed grid
pub mod scale;
