//! Tests for integer cell scale exploration

#[cfg(test)]
mod tests {
    use collagrid::algorithm::factorization::GridShape;
    use collagrid::algorithm::scale::{evaluate_scale, explore_scales, minimum_scale, scale_range};
    use collagrid::{AxisAdjustment, CanvasSpec, SearchLimits, TileAspect};

    fn canvas(side: u32) -> CanvasSpec {
        CanvasSpec::new(side, TileAspect::default()).expect("valid canvas")
    }

    // Tests the minimum scale honours the minimum cell side
    // Verified by dividing by the longer term
    #[test]
    fn test_minimum_scale() {
        let aspect = TileAspect::default();
        assert_eq!(minimum_scale(aspect, &SearchLimits::default()), 1);

        let limits = SearchLimits {
            min_cell_side: 300,
            ..SearchLimits::default()
        };
        assert_eq!(minimum_scale(aspect, &limits), 100);

        let limits = SearchLimits {
            min_cell_side: 301,
            ..SearchLimits::default()
        };
        assert_eq!(minimum_scale(aspect, &limits), 101);
    }

    // Tests the range spans both exact fits widened by the margin
    // Verified by using only the horizontal exact fit
    #[test]
    fn test_scale_range() {
        let limits = SearchLimits::default();

        assert_eq!(scale_range(GridShape::new(4, 3), &canvas(4096), &limits), 339..=343);
        assert_eq!(scale_range(GridShape::new(37, 27), &canvas(4096), &limits), 34..=39);
        assert_eq!(scale_range(GridShape::new(1, 1), &canvas(2), &limits), 1..=2);
    }

    // Tests the range may be empty when cells would be too small
    // Verified by ignoring the minimum scale
    #[test]
    fn test_scale_range_empty() {
        let limits = SearchLimits {
            min_cell_side: 300,
            ..SearchLimits::default()
        };

        assert!(scale_range(GridShape::new(37, 27), &canvas(4096), &limits).is_empty());
    }

    // Tests a single scale's geometry
    // Verified by multiplying by rows for the width
    #[test]
    fn test_evaluate_scale() {
        let fit = evaluate_scale(GridShape::new(4, 3), 341, &canvas(4096), &SearchLimits::default())
            .expect("within clipping limit");

        assert_eq!(fit.scale, 341);
        assert_eq!((fit.cell_width, fit.cell_height), (1023, 1364));
        assert_eq!((fit.montage_width, fit.montage_height), (4092, 4092));
        assert_eq!(fit.adjustment.horizontal, AxisAdjustment::Pad(4));
        assert_eq!(fit.adjustment.vertical, AxisAdjustment::Pad(4));
    }

    // Tests scales cropping too much of an edge cell are rejected
    // Verified by comparing against the whole clip instead of per edge
    #[test]
    fn test_evaluate_scale_clip_limit() {
        let limits = SearchLimits::default();
        let shape = GridShape::new(37, 27);

        assert!(evaluate_scale(shape, 37, &canvas(4096), &limits).is_some());
        assert!(evaluate_scale(shape, 38, &canvas(4096), &limits).is_none());
        assert!(evaluate_scale(GridShape::new(1, 1), 2, &canvas(2), &limits).is_none());

        let strict = SearchLimits {
            max_clip_fraction: 0.0,
            ..SearchLimits::default()
        };
        assert!(evaluate_scale(shape, 37, &canvas(4096), &strict).is_none());
    }

    // Tests padding-only scales below the largest one are dropped
    // Verified by keeping every padding scale
    #[test]
    fn test_explore_scales() {
        let limits = SearchLimits::default();

        let scales: Vec<u32> = explore_scales(GridShape::new(4, 3), &canvas(4096), &limits)
            .iter()
            .map(|fit| fit.scale)
            .collect();
        assert_eq!(scales, vec![341, 342, 343]);

        let scales: Vec<u32> = explore_scales(GridShape::new(37, 27), &canvas(4096), &limits)
            .iter()
            .map(|fit| fit.scale)
            .collect();
        assert_eq!(scales, vec![36, 37]);
    }

    // Tests grids with no surviving scale return nothing
    // Verified by skipping the clip check
    #[test]
    fn test_explore_scales_infeasible() {
        let fits = explore_scales(GridShape::new(1, 1), &canvas(1), &SearchLimits::default());

        assert!(fits.is_empty());
    }
}
