#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use tempo::libs::config::{Config, TrackerConfig};
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    // Read, save, re-read and delete share one test: they all touch the
    // same config path under the redirected home directory.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(_ctx: &mut ConfigTestContext) {
        // Missing file yields defaults.
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.tracker().poll_interval, 60);

        // Saved settings round-trip.
        let config = Config {
            db_path: None,
            tracker: Some(TrackerConfig { poll_interval: 15 }),
        };
        config.save().unwrap();

        let read_back = Config::read().unwrap();
        assert_eq!(read_back, config);
        assert_eq!(read_back.tracker().poll_interval, 15);

        // Default db path lands in the data directory.
        let db_path = read_back.db_path().unwrap();
        assert!(db_path.ends_with("tempo.db"));

        // Delete restores the defaults.
        Config::delete().unwrap();
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
