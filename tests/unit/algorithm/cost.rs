//! Tests for the omit/pad/clip cost model

#[cfg(test)]
mod tests {
    use collagrid::io::configuration::{CLIP_COST, OMIT_BASE_COST, PAD_COST};
    use collagrid::{CostWeights, EdgeAdjustment, LayoutError, OmitScaling};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // Tests defaults come from the configuration constants
    // Verified by swapping pad and clip defaults
    #[test]
    fn test_default_weights() {
        let weights = CostWeights::default();

        assert!(close(weights.omit_base_cost(), OMIT_BASE_COST));
        assert!(close(weights.pad_cost(), PAD_COST));
        assert!(close(weights.clip_cost(), CLIP_COST));
        assert_eq!(weights.omit_scaling(), OmitScaling::PerTile);
    }

    // Tests negative and non-finite weights are rejected by name
    // Verified by accepting negative weights
    #[test]
    fn test_weight_validation() {
        assert!(CostWeights::new(0.0, 0.0, 0.0).is_ok());
        assert!(matches!(
            CostWeights::new(-1.0, 1.0, 2.0),
            Err(LayoutError::InvalidParameter { parameter: "omit_base_cost", .. })
        ));
        assert!(matches!(
            CostWeights::new(1500.0, f64::NAN, 2.0),
            Err(LayoutError::InvalidParameter { parameter: "pad_cost", .. })
        ));
        assert!(matches!(
            CostWeights::new(1500.0, 1.0, f64::INFINITY),
            Err(LayoutError::InvalidParameter { parameter: "clip_cost", .. })
        ));
    }

    // Tests per-tile omission is linear in omitted tiles
    // Verified by dividing by the pool size
    #[test]
    fn test_per_tile_omit_cost() {
        let weights = CostWeights::default();

        assert!(close(weights.omit_cost(0, 999), 0.0));
        assert!(close(weights.omit_cost(1, 7), 1500.0));
        assert!(close(weights.omit_cost(27, 999), 40_500.0));
    }

    // Tests pool-fraction omission divides by the pool
    // Verified by ignoring the configured scaling
    #[test]
    fn test_fraction_of_pool_omit_cost() {
        let weights = CostWeights::default().with_omit_scaling(OmitScaling::FractionOfPool);

        assert!(close(weights.omit_cost(27, 999), 1500.0 * 27.0 / 999.0));
        assert!(close(weights.omit_cost(1, 2), 750.0));
        assert!(close(weights.omit_cost(0, 0), 0.0));
    }

    // Tests omission cost never decreases as more tiles are omitted
    // Verified by subtracting omitted tiles
    #[test]
    fn test_omit_cost_is_monotone() {
        for scaling in [OmitScaling::PerTile, OmitScaling::FractionOfPool] {
            let weights = CostWeights::default().with_omit_scaling(scaling);
            let mut previous = 0.0;
            for omitted in 0..=50 {
                let cost = weights.omit_cost(omitted, 50);
                assert!(cost >= previous);
                previous = cost;
            }
        }
    }

    // Tests padding and clipping are weighted separately
    // Verified by using the pad weight for clipping
    #[test]
    fn test_fit_cost() {
        let weights = CostWeights::new(1500.0, 1.0, 2.0).expect("valid weights");

        assert!(close(weights.fit_cost(67, 12), 91.0));
        assert!(close(weights.fit_cost(0, 0), 0.0));
        assert!(close(weights.fit_cost(100, 11), 122.0));
    }

    // Tests the total never falls as padding or clipping grows on one axis
    // Verified by giving padding a negative weight
    #[test]
    fn test_fit_cost_is_monotone() {
        for weights in [CostWeights::default(), CostWeights::new(0.0, 0.0, 0.0).expect("valid weights")] {
            let mut previous = weights.score(3, 10, &EdgeAdjustment::between(4096, 4000, 4096)).total;
            for pad in 1..=200 {
                let adjustment = EdgeAdjustment::between(4096 - pad, 4000, 4096);
                let total = weights.score(3, 10, &adjustment).total;
                assert!(total >= previous, "padding {pad} lowered the cost");
                previous = total;
            }

            let mut previous = weights.score(3, 10, &EdgeAdjustment::between(4096, 4000, 4096)).total;
            for clip in 1..=200 {
                let adjustment = EdgeAdjustment::between(4096 + clip, 4000, 4096);
                let total = weights.score(3, 10, &adjustment).total;
                assert!(total >= previous, "clipping {clip} lowered the cost");
                previous = total;
            }
        }
    }

    // Tests the breakdown adds up to the total
    // Verified by leaving omission out of the total
    #[test]
    fn test_score() {
        let weights = CostWeights::default();
        let adjustment = EdgeAdjustment::between(4095, 3640, 4096);
        let breakdown = weights.score(1, 7, &adjustment);

        assert!(close(breakdown.omit, 1500.0));
        assert!(close(breakdown.fit, 457.0));
        assert!(close(breakdown.total, 1957.0));
    }

    // Tests scaling names used in configuration files
    // Verified by renaming a variant
    #[test]
    fn test_omit_scaling_serde() {
        let json = serde_json::to_string(&OmitScaling::FractionOfPool).expect("serializable");
        assert_eq!(json, "\"fraction_of_pool\"");

        let parsed: OmitScaling = serde_json::from_str("\"per_tile\"").expect("deserializable");
        assert_eq!(parsed, OmitScaling::PerTile);
    }
}
