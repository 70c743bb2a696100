#[cfg(test)]
mod tests {
    use dewit::db::db::Db;
    use dewit::db::repository::{Repository, SqliteRepository};
    use dewit::libs::config::{ConfigItem, ConfigurationService, DEFAULT_EXPORT_TITLE, EXPORT_CSV_TITLE, EXPORT_JSON_TITLE};
    use dewit::libs::error::DewitError;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        db: Db,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("dewit_tasks.db")).unwrap();
            ConfigTestContext { db, _temp_dir: temp_dir }
        }
    }

    impl ConfigTestContext {
        fn service(&self) -> ConfigurationService<SqliteRepository<'_, ConfigItem>> {
            ConfigurationService::new(SqliteRepository::new(&self.db.conn))
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_set_and_get_case_insensitive(ctx: &mut ConfigTestContext) {
        let config = ctx.service();

        config.set_value("Export.Json.Title", "backup").unwrap();
        assert_eq!(config.get_value("export.json.title").unwrap().as_deref(), Some("backup"));
        assert!(config.key_exists("EXPORT.JSON.TITLE").unwrap());
        assert!(config.get_value("missing").unwrap().is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_set_existing_key_updates_in_place(ctx: &mut ConfigTestContext) {
        let config = ctx.service();
        config.set_value("theme", "dark").unwrap();
        config.set_value("THEME", "light").unwrap();

        let items = SqliteRepository::<ConfigItem>::new(&ctx.db.conn).list().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].key, "theme");
        assert_eq!(items[0].value, "light");
        assert!(items[0].updated_at >= items[0].created_at);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_key_rejected(ctx: &mut ConfigTestContext) {
        let config = ctx.service();
        assert!(matches!(config.set_value("", "x"), Err(DewitError::InvalidInput(_))));
        assert!(matches!(config.set_value("   ", "x"), Err(DewitError::InvalidInput(_))));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_value(ctx: &mut ConfigTestContext) {
        let config = ctx.service();
        config.set_value("a", "1").unwrap();

        config.delete_value("A").unwrap();
        assert!(!config.key_exists("a").unwrap());

        // deleting again is not an error
        config.delete_value("a").unwrap();
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_get_all_sorted(ctx: &mut ConfigTestContext) {
        let config = ctx.service();
        config.set_value("b", "2").unwrap();
        config.set_value("a", "1").unwrap();

        assert_eq!(
            config.get_all().unwrap(),
            vec![("a".to_string(), "1".to_string()), ("b".to_string(), "2".to_string())]
        );
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_export_title_defaults(ctx: &mut ConfigTestContext) {
        let config = ctx.service();
        assert_eq!(config.export_title("json").unwrap(), DEFAULT_EXPORT_TITLE);

        config.set_value(EXPORT_JSON_TITLE, "my_tasks").unwrap();
        config.set_value(EXPORT_CSV_TITLE, "  ").unwrap();
        assert_eq!(config.export_title("json").unwrap(), "my_tasks");
        assert_eq!(config.export_title("csv").unwrap(), DEFAULT_EXPORT_TITLE);
    }
}
