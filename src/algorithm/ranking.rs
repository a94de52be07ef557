use crate::algorithm::candidate::GridCandidate;
use std::cmp::Ordering;

/// Total order over candidates, best first
///
/// Lower total cost wins. Ties fall through to fewer omitted tiles, fewer
/// adjusted pixels, a squarer grid, larger cells and finally fewer columns,
/// so identical inputs always produce the same winner.
pub fn compare_candidates(a: &GridCandidate, b: &GridCandidate) -> Ordering {
    a.cost
        .total
        .total_cmp(&b.cost.total)
        .then_with(|| a.omitted_tiles.cmp(&b.omitted_tiles))
        .then_with(|| a.adjustment.total().cmp(&b.adjustment.total()))
        .then_with(|| a.aspect_skew().cmp(&b.aspect_skew()))
        .then_with(|| b.scale.cmp(&a.scale))
        .then_with(|| a.cols.cmp(&b.cols))
}

/// Sort candidates best first
pub fn rank_candidates(candidates: &mut [GridCandidate]) {
    candidates.sort_by(compare_candidates);
}

/// Best candidate of an iterator
pub fn best_candidate<I>(candidates: I) -> Option<GridCandidate>
where
    I: IntoIterator<Item = GridCandidate>,
{
    candidates.into_iter().min_by(compare_candidates)
}

/// Keep the first `limit` candidates of an already ranked list
pub fn top_k(mut ranked: Vec<GridCandidate>, limit: usize) -> Vec<GridCandidate> {
    ranked.truncate(limit);
    ranked
}
