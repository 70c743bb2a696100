#[cfg(test)]
mod tests {
    use dewit::db::db::{Db, DB_FILE_NAME};
    use dewit::libs::data_storage::{DataStorage, DB_PATH_ENV};
    use std::env;

    #[test]
    fn test_get_path_creates_base_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().join("config").join("dewit");
        let storage = DataStorage::with_base(&base);

        let path = storage.get_path("file.txt").unwrap();

        assert!(base.is_dir());
        assert_eq!(path, base.join("file.txt"));
        assert_eq!(storage.base_path(), base.as_path());
    }

    #[test]
    fn test_db_path_honors_override() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = temp_dir.path().join("base");
        let custom = temp_dir.path().join("elsewhere").join("custom.db");
        let storage = DataStorage::with_base(&base);

        env::set_var(DB_PATH_ENV, &custom);
        let overridden = storage.db_path(DB_FILE_NAME).unwrap();
        assert_eq!(overridden, custom);
        assert!(custom.parent().unwrap().is_dir());

        let db = Db::new().unwrap();
        drop(db);
        assert!(custom.is_file());

        env::set_var(DB_PATH_ENV, "  ");
        assert_eq!(storage.db_path(DB_FILE_NAME).unwrap(), base.join(DB_FILE_NAME));

        env::remove_var(DB_PATH_ENV);
    }
}
