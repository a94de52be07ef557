//! Tests for tile aspect parsing and canvas validation

#[cfg(test)]
mod tests {
    use collagrid::io::configuration::{DEFAULT_CANVAS_SIDE, MAX_ASPECT_TERM, MAX_CANVAS_SIDE};
    use collagrid::{CanvasSpec, LayoutError, TileAspect};

    // Tests tile dimensions are stored in lowest terms
    // Verified by storing the raw dimensions
    #[test]
    fn test_aspect_reduces() {
        let aspect = TileAspect::new(111, 148).expect("valid aspect");
        assert_eq!((aspect.width(), aspect.height()), (3, 4));
        assert_eq!(aspect, TileAspect::new(300, 400).expect("valid aspect"));
        assert_eq!(aspect, TileAspect::default());
    }

    // Tests zero and oversized aspects are rejected
    // Verified by removing the term limit
    #[test]
    fn test_aspect_validation() {
        assert!(matches!(
            TileAspect::new(0, 4),
            Err(LayoutError::InvalidParameter { parameter: "tile_aspect", .. })
        ));
        assert!(TileAspect::new(MAX_ASPECT_TERM + 1, 1).is_err());
        assert!(TileAspect::new(MAX_ASPECT_TERM, 1).is_ok());
        assert!(matches!(
            TileAspect::new(10_007, 10_009),
            Err(LayoutError::InvalidParameter { parameter: "tile_aspect", .. })
        ));
        // Large terms that reduce below the limit are fine
        assert!(TileAspect::new(30_000, 40_000).is_ok());
    }

    // Tests derived geometry of an aspect
    // Verified by swapping width and height in the cell
    #[test]
    fn test_aspect_geometry() {
        let aspect = TileAspect::new(3, 4).expect("valid aspect");

        assert_eq!(aspect.cell(37), (111, 148));
        assert_eq!(aspect.cell(1), (3, 4));
        assert_eq!(aspect.shortest_term(), 3);
        assert!((aspect.square_grid_ratio() - 4.0 / 3.0).abs() < f64::EPSILON);

        let landscape = TileAspect::new(16, 9).expect("valid aspect");
        assert_eq!(landscape.shortest_term(), 9);
        assert!((landscape.square_grid_ratio() - 9.0 / 16.0).abs() < f64::EPSILON);
    }

    // Tests every accepted aspect notation
    // Verified by dropping the colon separator
    #[test]
    fn test_aspect_parse() {
        let expected = TileAspect::new(3, 4).expect("valid aspect");

        for text in ["300x400", "3:4", " 3X4 ", "111x148"] {
            assert_eq!(text.parse::<TileAspect>().expect("parsable"), expected);
        }
        for text in ["", "34", "3x", "ax4", "3x-4", "0x4"] {
            assert!(text.parse::<TileAspect>().is_err(), "{text:?} should fail");
        }
    }

    // Tests aspect display in W:H form
    // Verified by printing the unreduced terms
    #[test]
    fn test_aspect_display() {
        assert_eq!(TileAspect::new(237, 316).expect("valid aspect").to_string(), "3:4");
    }

    // Tests canvas side bounds
    // Verified by allowing a zero side
    #[test]
    fn test_canvas_validation() {
        let aspect = TileAspect::default();

        assert!(CanvasSpec::new(0, aspect).is_err());
        assert!(CanvasSpec::new(MAX_CANVAS_SIDE + 1, aspect).is_err());
        assert!(CanvasSpec::new(1, aspect).is_ok());
        assert!(CanvasSpec::new(MAX_CANVAS_SIDE, aspect).is_ok());
    }

    // Tests default canvas matches the 4K master
    // Verified by changing the default side
    #[test]
    fn test_canvas_default() {
        let canvas = CanvasSpec::default();

        assert_eq!(canvas.side(), DEFAULT_CANVAS_SIDE);
        assert_eq!(canvas.aspect(), TileAspect::default());
    }
}
