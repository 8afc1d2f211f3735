#[cfg(test)]
mod tests {
    use iconforge::generator::{
        ArtifactKind, Generator, SettingsBuilder, FLAT_TARGETS, ICNS_SIZES, ICO_SIZES,
    };
    use iconforge::Error;
    use image::{Rgba, RgbaImage};
    use std::fs;
    use std::path::Path;

    fn write_source(path: &Path, width: u32, height: u32, color: [u8; 4]) {
        let img = RgbaImage::from_pixel(width, height, Rgba(color));
        img.save(path).expect("failed to write source image");
    }

    fn generator_for(source: &Path, dest: &Path) -> Generator {
        let settings = SettingsBuilder::new()
            .source_path(source)
            .dest_dir(dest)
            .build()
            .expect("settings should build");
        Generator::new(settings).expect("source should load")
    }

    #[tokio::test]
    async fn test_full_run_produces_every_artifact() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 512, 512, [10, 120, 200, 255]);

        let report = generator_for(&source, &dest)
            .generate()
            .await
            .expect("run should complete");

        // 13 flat targets + ICNS + ICO
        assert_eq!(report.outcomes().len(), FLAT_TARGETS.len() + 2);
        assert!(report.all_succeeded(), "all artifacts should succeed");
        assert_eq!(report.generated_count(), 15);
        assert!(report.total_bytes() > 0);

        for target in FLAT_TARGETS {
            assert!(dest.join(target.file_name).is_file(), "{} missing", target.file_name);
        }
        assert!(dest.join("icon.icns").is_file());
        assert!(dest.join("icon.ico").is_file());
    }

    #[tokio::test]
    async fn test_flat_pngs_have_exact_dimensions() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 512, 512, [255, 255, 255, 255]);

        generator_for(&source, &dest)
            .generate()
            .await
            .expect("run should complete");

        for target in FLAT_TARGETS {
            let path = dest.join(target.file_name);
            let (width, height) =
                image::image_dimensions(&path).expect("output should be a decodable PNG");
            assert_eq!((width, height), (target.size, target.size), "{}", target.file_name);
        }
    }

    #[tokio::test]
    async fn test_icns_contains_every_candidate_size() {
        use icns::{IconFamily, IconType};
        use std::io::BufReader;

        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 256, 256, [0, 0, 0, 255]);

        generator_for(&source, &dest)
            .generate()
            .await
            .expect("run should complete");

        let file = BufReader::new(fs::File::open(dest.join("icon.icns")).expect("open icns"));
        let family = IconFamily::read(file).expect("icon.icns should parse");

        let expected = [
            (IconType::RGBA32_16x16, 16),
            (IconType::RGBA32_32x32, 32),
            (IconType::RGBA32_64x64, 64),
            (IconType::RGBA32_128x128, 128),
            (IconType::RGBA32_256x256, 256),
            (IconType::RGBA32_512x512, 512),
            (IconType::RGBA32_512x512_2x, 1024),
        ];
        assert_eq!(expected.len(), ICNS_SIZES.len());
        for (icon_type, size) in expected {
            let image = family
                .get_icon_with_type(icon_type)
                .unwrap_or_else(|e| panic!("missing {}px element: {}", size, e));
            assert_eq!(image.width(), size);
            assert_eq!(image.height(), size);
        }
    }

    #[tokio::test]
    async fn test_ico_contains_every_candidate_size() {
        use ico::IconDir;
        use std::io::BufReader;

        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 256, 256, [0, 255, 0, 255]);

        generator_for(&source, &dest)
            .generate()
            .await
            .expect("run should complete");

        let file = BufReader::new(fs::File::open(dest.join("icon.ico")).expect("open ico"));
        let icon_dir = IconDir::read(file).expect("icon.ico should parse");

        let mut sizes: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, ICO_SIZES.to_vec());
        for entry in icon_dir.entries() {
            assert_eq!(entry.width(), entry.height(), "ICO entries must be square");
        }
    }

    #[tokio::test]
    async fn test_runs_are_idempotent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 256, 256, [40, 40, 40, 255]);

        generator_for(&source, &dest)
            .generate()
            .await
            .expect("first run should complete");
        let first: Vec<(String, Vec<u8>)> = ["32x32.png", "icon.icns", "icon.ico"]
            .iter()
            .map(|name| (name.to_string(), fs::read(dest.join(name)).expect("read artifact")))
            .collect();

        generator_for(&source, &dest)
            .generate()
            .await
            .expect("second run should complete");

        for (name, bytes) in first {
            let again = fs::read(dest.join(&name)).expect("read artifact");
            assert_eq!(bytes, again, "{} changed between identical runs", name);
        }
    }

    #[tokio::test]
    async fn test_missing_source_leaves_destination_untouched() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dest = temp.path().join("icons");
        fs::create_dir_all(&dest).expect("pre-create destination");
        fs::write(dest.join("keep.txt"), b"existing").expect("write sentinel");

        let settings = SettingsBuilder::new()
            .source_path(temp.path().join("no-such.png"))
            .dest_dir(&dest)
            .build()
            .expect("settings should build");

        let err = Generator::new(settings).expect_err("missing source must fail");
        assert!(matches!(err, Error::SourceNotFound { .. }), "got: {err}");

        let entries: Vec<_> = fs::read_dir(&dest)
            .expect("read destination")
            .map(|e| e.expect("dir entry").file_name())
            .collect();
        assert_eq!(entries, ["keep.txt"], "destination must be untouched");
    }

    #[tokio::test]
    async fn test_undecodable_source_reports_image_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("broken.png");
        fs::write(&source, b"this is not image data").expect("write bogus source");

        let settings = SettingsBuilder::new()
            .source_path(&source)
            .dest_dir(temp.path().join("icons"))
            .build()
            .expect("settings should build");

        let err = Generator::new(settings).err().expect("undecodable source must fail");
        assert!(
            err.to_string().contains("decoding source image"),
            "error should name the decode step: {err}"
        );
        let suggestions = err.recovery_suggestions();
        assert!(
            suggestions.iter().any(|s| s.contains("Re-export")),
            "suggestions should address the source image, got {suggestions:?}"
        );
    }

    #[tokio::test]
    async fn test_failed_flat_target_does_not_abort_the_run() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 256, 256, [60, 60, 60, 255]);

        // A directory squatting on the output path makes that one write fail.
        fs::create_dir_all(dest.join("32x32.png")).expect("pre-create blocking directory");

        let report = generator_for(&source, &dest)
            .generate()
            .await
            .expect("run should still complete");

        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.generated_count(), 14);
        let failed = report.failures().next().expect("one failed outcome");
        assert_eq!(failed.name, "32x32.png");

        for target in FLAT_TARGETS.iter().filter(|t| t.file_name != "32x32.png") {
            assert!(dest.join(target.file_name).is_file(), "{} missing", target.file_name);
        }
        assert!(dest.join("icon.icns").is_file());
        assert!(dest.join("icon.ico").is_file());
    }

    #[tokio::test]
    async fn test_non_square_source_is_forced_square() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("wide.png");
        let dest = temp.path().join("icons");
        write_source(&source, 100, 50, [200, 100, 0, 255]);

        let report = generator_for(&source, &dest)
            .generate()
            .await
            .expect("run should complete");
        assert!(report.all_succeeded());

        for target in FLAT_TARGETS {
            let (width, height) =
                image::image_dimensions(dest.join(target.file_name)).expect("decodable PNG");
            assert_eq!((width, height), (target.size, target.size), "{}", target.file_name);
        }
    }

    #[tokio::test]
    async fn test_solid_color_survives_resampling() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("solid.png");
        let dest = temp.path().join("icons");
        let color = [180, 20, 60, 255];
        write_source(&source, 512, 512, color);

        generator_for(&source, &dest)
            .generate()
            .await
            .expect("run should complete");

        let small = image::open(dest.join("32x32.png"))
            .expect("32x32.png should decode")
            .to_rgba8();
        assert_eq!(small.dimensions(), (32, 32));
        for pixel in small.pixels() {
            for channel in 0..4 {
                let diff = (pixel.0[channel] as i16 - color[channel] as i16).abs();
                assert!(diff <= 2, "pixel {:?} deviates from {:?}", pixel.0, color);
            }
        }
    }

    #[tokio::test]
    async fn test_kind_filter_runs_only_selected_passes() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 256, 256, [1, 2, 3, 255]);

        let settings = SettingsBuilder::new()
            .source_path(&source)
            .dest_dir(&dest)
            .artifact_kinds(vec![ArtifactKind::Ico])
            .build()
            .expect("settings should build");
        let report = Generator::new(settings)
            .expect("source should load")
            .generate()
            .await
            .expect("run should complete");

        assert_eq!(report.outcomes().len(), 1);
        assert_eq!(report.outcomes()[0].kind, ArtifactKind::Ico);

        let entries: Vec<_> = fs::read_dir(&dest)
            .expect("read destination")
            .map(|e| e.expect("dir entry").file_name())
            .collect();
        assert_eq!(entries, ["icon.ico"], "only the ICO pass should have run");
    }

    #[tokio::test]
    async fn test_report_records_artifact_metadata() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 256, 256, [9, 9, 9, 255]);

        let report = generator_for(&source, &dest)
            .generate()
            .await
            .expect("run should complete");

        for artifact in report.generated() {
            let on_disk = fs::metadata(&artifact.path).expect("artifact exists").len();
            assert_eq!(artifact.size, on_disk, "{} size mismatch", artifact.path.display());
            assert_eq!(artifact.checksum.len(), 64);
            assert!(!artifact.sizes.is_empty());
        }

        let icns = report
            .generated()
            .find(|a| a.kind == ArtifactKind::Icns)
            .expect("ICNS artifact");
        assert_eq!(icns.sizes, ICNS_SIZES.to_vec());
        assert_eq!(icns.describe_sizes(), "7 sizes, primary 1024x1024");
    }
}
