//! Tests for build manifest contents and persistence

#[cfg(test)]
mod tests {
    use collagrid::io::configuration::MANIFEST_ALGORITHM;
    use collagrid::io::manifest::{BuildManifest, CompositorGeometry};
    use collagrid::io::pool::TileEntry;
    use collagrid::{CanvasSpec, CostWeights, FitStrategy, GridCandidate, TileAspect, optimize};
    use std::path::Path;
    use std::time::{Duration, SystemTime};

    fn canvas() -> CanvasSpec {
        CanvasSpec::new(4096, TileAspect::new(111, 148).expect("valid aspect")).expect("valid canvas")
    }

    fn layout() -> GridCandidate {
        optimize(999, canvas(), CostWeights::default()).expect("feasible layout")
    }

    fn tiles(count: usize) -> Vec<TileEntry> {
        (0..count)
            .map(|index| {
                let name = format!("photo_{index:04}.png");
                TileEntry {
                    path: Path::new("/tiles").join(&name),
                    name,
                    modified: SystemTime::UNIX_EPOCH + Duration::from_secs(index as u64),
                }
            })
            .collect()
    }

    // Tests compositor parameters derived from the layout
    // Verified by dropping the sign of clip offsets
    #[test]
    fn test_compositor_geometry() {
        let geometry = CompositorGeometry::for_layout(&layout(), &canvas());

        assert_eq!(geometry.tile, "37x27");
        assert_eq!(geometry.geometry, "111x148+0+0");
        assert_eq!(geometry.offset_x, -5);
        assert_eq!(geometry.offset_y, 50);
        assert_eq!(geometry.extent, "4096x4096");
    }

    // Tests the manifest records the layout and the selected tiles
    // Verified by recording the pool size as the photo count
    #[test]
    fn test_new() {
        let selected = tiles(999);
        let manifest = BuildManifest::new(canvas(), layout(), &selected, 1200);

        assert_eq!(manifest.algorithm, MANIFEST_ALGORITHM);
        assert_eq!(manifest.photo_count, 999);
        assert_eq!(manifest.total_available, 1200);
        assert_eq!(manifest.strategy, FitStrategy::ClipHorizontalPadVertical);
        assert_eq!(
            manifest.photos.first().map(|photo| photo.filename.as_str()),
            Some("photo_0000.png")
        );
        assert!(manifest.created_at > 0);
    }

    // Tests the JSON layout of a manifest
    // Verified by renaming the photos field
    #[test]
    fn test_to_json() {
        let manifest = BuildManifest::new(canvas(), layout(), &tiles(3), 3);
        let json: serde_json::Value =
            serde_json::from_str(&manifest.to_json().expect("serializable")).expect("valid json");

        assert_eq!(json["algorithm"], "montage-grid");
        assert_eq!(json["canvas"]["side"], 4096);
        assert_eq!(json["canvas"]["aspect"]["width"], 3);
        assert_eq!(json["layout"]["cols"], 37);
        assert_eq!(json["layout"]["adjustment"]["horizontal"]["kind"], "clip");
        assert_eq!(json["strategy"], "clip_horizontal_pad_vertical");
        assert_eq!(json["compositor"]["tile"], "37x27");
        assert_eq!(json["photo_count"], 3);
        assert_eq!(json["photos"][2]["filename"], "photo_0002.png");
    }

    // Tests writing creates missing parent directories
    // Verified by removing create_dir_all
    #[test]
    fn test_write_to() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("builds").join("2024").join("manifest.json");
        let manifest = BuildManifest::new(canvas(), layout(), &tiles(2), 2);

        manifest.write_to(&path).expect("writable");

        let written = std::fs::read_to_string(&path).expect("readable");
        assert_eq!(written, manifest.to_json().expect("serializable"));
    }

    // Tests write failures carry the destination path
    // Verified by ignoring write errors
    #[test]
    fn test_write_to_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").expect("writable");
        let manifest = BuildManifest::new(canvas(), layout(), &tiles(1), 1);

        let error = manifest
            .write_to(&blocker.join("manifest.json"))
            .expect_err("parent is a file");
        assert!(error.to_string().contains("file"));
    }
}
