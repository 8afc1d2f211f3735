#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::path::Path;

    fn write_source(path: &Path, size: u32) {
        let img = image::RgbaImage::from_pixel(size, size, image::Rgba([30, 90, 160, 255]));
        img.save(path).expect("failed to write source image");
    }

    fn iconforge() -> Command {
        Command::cargo_bin("iconforge").expect("binary should build")
    }

    #[test]
    fn test_missing_source_exits_one_with_error_on_stderr() {
        let temp = tempfile::tempdir().expect("tempdir");
        let dest = temp.path().join("icons");

        iconforge()
            .arg("generate")
            .arg(temp.path().join("no-such.png"))
            .arg("--output")
            .arg(&dest)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("not found"));

        assert!(!dest.exists(), "failed run must not create the destination");
    }

    #[test]
    fn test_generate_writes_the_full_icon_set() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 256);

        iconforge()
            .arg("generate")
            .arg(&source)
            .arg("--output")
            .arg(&dest)
            .assert()
            .success()
            .stdout(predicate::str::contains("Generated 32x32.png"))
            .stdout(predicate::str::contains("icon.icns"))
            .stdout(predicate::str::contains("icon.ico"));

        assert!(dest.join("32x32.png").is_file());
        assert!(dest.join("StoreLogo.png").is_file());
        assert!(dest.join("icon.icns").is_file());
        assert!(dest.join("icon.ico").is_file());
    }

    #[test]
    fn test_only_filter_restricts_the_run() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 256);

        iconforge()
            .arg("generate")
            .arg(&source)
            .arg("--output")
            .arg(&dest)
            .arg("--only")
            .arg("ico")
            .assert()
            .success();

        assert!(dest.join("icon.ico").is_file());
        assert!(!dest.join("icon.icns").exists());
        assert!(!dest.join("32x32.png").exists());
    }

    #[test]
    fn test_unknown_only_kind_is_rejected() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        write_source(&source, 64);

        iconforge()
            .arg("generate")
            .arg(&source)
            .arg("--only")
            .arg("svg")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("svg"));
    }

    #[test]
    fn test_preview_lists_the_plan_and_writes_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 128);

        iconforge()
            .arg("preview")
            .arg(&source)
            .arg("--output")
            .arg(&dest)
            .assert()
            .success()
            .stdout(predicate::str::contains("32x32.png"))
            .stdout(predicate::str::contains("icon.icns"))
            .stdout(predicate::str::contains("icon.ico"));

        assert!(!dest.exists(), "preview must not write anything");
    }

    #[test]
    fn test_preview_warns_on_missing_source_but_succeeds() {
        let temp = tempfile::tempdir().expect("tempdir");

        iconforge()
            .arg("preview")
            .arg(temp.path().join("no-such.png"))
            .assert()
            .success()
            .stdout(predicate::str::contains("not readable"));
    }

    #[test]
    fn test_quiet_generate_prints_nothing_on_success() {
        let temp = tempfile::tempdir().expect("tempdir");
        let source = temp.path().join("app.png");
        let dest = temp.path().join("icons");
        write_source(&source, 128);

        iconforge()
            .arg("generate")
            .arg(&source)
            .arg("--output")
            .arg(&dest)
            .arg("--quiet")
            .assert()
            .success()
            .stdout(predicate::str::is_empty());

        assert!(dest.join("icon.ico").is_file());
    }
}
