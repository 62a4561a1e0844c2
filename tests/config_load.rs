use facility_black::config::Config;
use std::fs;

#[test]
fn create_default_then_load_round_trips() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("facility-black.toml");
    let path = path.to_string_lossy().to_string();

    Config::create_default(&path).unwrap();
    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("[display]"));
    assert!(!text.contains("seed"), "unset seed should not be written: {}", text);

    let cfg = Config::load(&path).unwrap();
    assert!(cfg.display.slow_print);
    assert_eq!(cfg.display.char_delay_ms, 30);
    assert!(cfg.game.show_intro);
    assert_eq!(cfg.logging.file_path(), Some("facility-black.log"));
}

#[test]
fn load_reads_overrides() {
    let td = tempfile::tempdir().unwrap();
    let path = td.path().join("custom.toml");
    fs::write(
        &path,
        "[game]\nseed = 31337\nshow_intro = false\n\n[logging]\nlevel = \"info\"\nfile = \"\"\n",
    )
    .unwrap();
    let cfg = Config::load(&path.to_string_lossy()).unwrap();
    assert_eq!(cfg.game.seed, Some(31337));
    assert!(!cfg.game.show_intro);
    assert_eq!(cfg.logging.level_filter(), log::LevelFilter::Info);
    assert_eq!(cfg.logging.file_path(), None);
}

#[test]
fn missing_or_broken_files_are_errors() {
    let td = tempfile::tempdir().unwrap();
    let missing = td.path().join("nope.toml");
    let err = Config::load(&missing.to_string_lossy()).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));

    let broken = td.path().join("broken.toml");
    fs::write(&broken, "[display\nslow_print = maybe").unwrap();
    let err = Config::load(&broken.to_string_lossy()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn optional_load_tolerates_only_a_missing_file() {
    let td = tempfile::tempdir().unwrap();

    let missing = td.path().join("absent.toml");
    assert!(Config::load_optional(&missing.to_string_lossy())
        .unwrap()
        .is_none());

    let good = td.path().join("good.toml");
    fs::write(&good, "[game]\nseed = 5\n").unwrap();
    let cfg = Config::load_optional(&good.to_string_lossy())
        .unwrap()
        .expect("config present");
    assert_eq!(cfg.game.seed, Some(5));

    let broken = td.path().join("broken.toml");
    fs::write(&broken, "[display\nslow_print = maybe").unwrap();
    let err = Config::load_optional(&broken.to_string_lossy()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));

    let wrong_type = td.path().join("wrong_type.toml");
    fs::write(&wrong_type, "[game]\nseed = \"soon\"\n").unwrap();
    assert!(Config::load_optional(&wrong_type.to_string_lossy()).is_err());
}

#[test]
fn optional_load_reports_unreadable_paths() {
    // A directory exists but cannot be read as a file.
    let td = tempfile::tempdir().unwrap();
    let err = Config::load_optional(&td.path().to_string_lossy()).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}
