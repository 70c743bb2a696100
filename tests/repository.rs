#[cfg(test)]
mod tests {
    use dewit::db::db::Db;
    use dewit::db::repository::{Repository, SqliteRepository};
    use dewit::libs::config::ConfigItem;
    use dewit::libs::error::DewitError;
    use dewit::libs::tags::Tags;
    use dewit::libs::task::{TaskItem, TaskStatus};

    #[test]
    fn test_add_assigns_id_and_get_by_id() {
        let db = Db::open_in_memory().unwrap();
        let repo = SqliteRepository::<TaskItem>::new(&db.conn);

        let mut task = TaskItem::new("Read docs", TaskStatus::Later, Tags::from_csv("reading"));
        repo.add(&mut task).unwrap();

        assert!(task.id > 0);
        assert_eq!(repo.get_by_id(task.id).unwrap(), Some(task));
        assert_eq!(repo.get_by_id(9999).unwrap(), None);
    }

    #[test]
    fn test_ids_are_not_reused() {
        let db = Db::open_in_memory().unwrap();
        let repo = SqliteRepository::<TaskItem>::new(&db.conn);

        let mut first = TaskItem::new("one", TaskStatus::Doing, Tags::default());
        let mut second = TaskItem::new("two", TaskStatus::Doing, Tags::default());
        repo.add(&mut first).unwrap();
        repo.add(&mut second).unwrap();
        repo.remove(&second).unwrap();

        let mut third = TaskItem::new("three", TaskStatus::Doing, Tags::default());
        repo.add(&mut third).unwrap();

        assert!(third.id > second.id);
        assert_eq!(repo.list().unwrap().len(), 2);
    }

    #[test]
    fn test_update_persists_all_columns() {
        let db = Db::open_in_memory().unwrap();
        let repo = SqliteRepository::<ConfigItem>::new(&db.conn);

        let mut item = ConfigItem::new("export.csv.title", "first");
        repo.add(&mut item).unwrap();

        item.value = "second".to_string();
        repo.update(&item).unwrap();

        let stored = repo.get_by_id(item.id).unwrap().unwrap();
        assert_eq!(stored.value, "second");
        assert_eq!(stored.key, "export.csv.title");
    }

    #[test]
    fn test_update_and_remove_missing_row() {
        let db = Db::open_in_memory().unwrap();
        let repo = SqliteRepository::<TaskItem>::new(&db.conn);

        let mut ghost = TaskItem::new("ghost", TaskStatus::Doing, Tags::default());
        ghost.id = 404;

        assert!(matches!(repo.update(&ghost), Err(DewitError::Persistence(_))));
        assert!(matches!(repo.remove(&ghost), Err(DewitError::Persistence(_))));
    }
}
