#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use dewit::db::db::Db;
    use dewit::db::repository::SqliteRepository;
    use dewit::libs::error::DewitError;
    use dewit::libs::sanitizer::{deduplicate_tags, sanitize_tags};
    use dewit::libs::tags::Tags;
    use dewit::libs::task::{TaskDuration, TaskItem, TaskQuery, TaskService, TaskSort, TaskStatus, TaskUpdate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        db: Db,
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db = Db::open(&temp_dir.path().join("dewit_tasks.db")).unwrap();
            TaskTestContext { db, _temp_dir: temp_dir }
        }
    }

    impl TaskTestContext {
        fn service(&self) -> TaskService<SqliteRepository<'_, TaskItem>> {
            TaskService::new(SqliteRepository::new(&self.db.conn))
        }
    }

    fn all() -> TaskQuery {
        TaskQuery {
            duration: TaskDuration::All,
            ..TaskQuery::default()
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_task_stores_sanitized_tags(ctx: &mut TaskTestContext) {
        let service = ctx.service();
        let raw_tags = "Work, Testing!,work";

        service.add_task("Write tests", TaskStatus::Doing, Some(raw_tags)).unwrap();

        let tasks = service.get_tasks(&all()).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].description, "Write tests");
        assert_eq!(tasks[0].tags.to_csv(), deduplicate_tags(&sanitize_tags(raw_tags)));
        assert_eq!(tasks[0].status, TaskStatus::Doing);
        assert!(tasks[0].completed_on.is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_add_task_rejects_blank_title(ctx: &mut TaskTestContext) {
        let service = ctx.service();

        assert!(matches!(service.add_task("", TaskStatus::Doing, None), Err(DewitError::InvalidInput(_))));
        assert!(matches!(service.add_task("   ", TaskStatus::Later, None), Err(DewitError::InvalidInput(_))));
        assert!(service.get_tasks(&all()).unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_task(ctx: &mut TaskTestContext) {
        let service = ctx.service();
        let task = service.add_task("Ship release", TaskStatus::Later, None).unwrap();

        let before = Local::now().naive_local();
        let done = service.complete_task(task.id, Some("")).unwrap();

        assert_eq!(done.status, TaskStatus::Done);
        assert!(done.completed_on.unwrap() >= before);

        let stored = service.get_task(task.id).unwrap().unwrap();
        assert_eq!(stored.status, TaskStatus::Done);
        assert_eq!(stored.completed_on, done.completed_on);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_task_with_explicit_time(ctx: &mut TaskTestContext) {
        let service = ctx.service();
        let task = service.add_task("Review PR", TaskStatus::Doing, None).unwrap();

        let done = service.complete_task(task.id, Some("2026-02-19 14:30")).unwrap();
        assert_eq!(done.completed_on.unwrap().format("%Y-%m-%d %H:%M").to_string(), "2026-02-19 14:30");

        let err = service.complete_task(task.id, Some("whenever")).unwrap_err();
        assert!(matches!(err, DewitError::InvalidInput(_)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_complete_missing_task(ctx: &mut TaskTestContext) {
        let err = ctx.service().complete_task(999, Some("")).unwrap_err();
        assert!(matches!(err, DewitError::NotFound(_)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_task(ctx: &mut TaskTestContext) {
        let service = ctx.service();
        let task = service.add_task("Temporary", TaskStatus::Doing, None).unwrap();

        service.delete_task(task.id).unwrap();
        assert!(service.get_task(task.id).unwrap().is_none());
        assert!(matches!(service.delete_task(task.id), Err(DewitError::NotFound(_))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_title_and_tags(ctx: &mut TaskTestContext) {
        let service = ctx.service();
        let task = service.add_task("Draft", TaskStatus::Doing, Some("a,b")).unwrap();

        let update = TaskUpdate {
            title: Some("Final".to_string()),
            add_tags: Some("C, d".to_string()),
            remove_tags: Some("a".to_string()),
            reset_tags: false,
        };
        let updated = service.update_task_details(task.id, &update).unwrap();

        assert_eq!(updated.description, "Final");
        assert_eq!(updated.tags.to_csv(), "b,c,d");
        assert_eq!(service.get_task(task.id).unwrap().unwrap(), updated);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_empty_title_keeps_existing(ctx: &mut TaskTestContext) {
        let service = ctx.service();
        let task = service.add_task("Keep me", TaskStatus::Doing, None).unwrap();

        let update = TaskUpdate {
            title: Some(String::new()),
            ..TaskUpdate::default()
        };
        assert_eq!(service.update_task_details(task.id, &update).unwrap().description, "Keep me");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_reset_tags_wins(ctx: &mut TaskTestContext) {
        let service = ctx.service();
        let task = service.add_task("Tagged", TaskStatus::Doing, Some("x,y")).unwrap();

        let update = TaskUpdate {
            add_tags: Some("z".to_string()),
            remove_tags: Some("x".to_string()),
            reset_tags: true,
            ..TaskUpdate::default()
        };
        let updated = service.update_task_details(task.id, &update).unwrap();
        assert!(updated.tags.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_missing_task(ctx: &mut TaskTestContext) {
        let err = ctx.service().update_task_details(42, &TaskUpdate::default()).unwrap_err();
        assert!(matches!(err, DewitError::NotFound(_)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_today_excludes_old_tasks(ctx: &mut TaskTestContext) {
        let service = ctx.service();
        service.add_task("Fresh", TaskStatus::Doing, None).unwrap();

        let mut old = TaskItem::new("Stale", TaskStatus::Doing, Tags::default());
        old.added_on = Local::now().naive_local() - Duration::days(10);
        service.import_task(old).unwrap();

        let today = service.get_tasks(&TaskQuery::default()).unwrap();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].description, "Fresh");

        let month = service
            .get_tasks(&TaskQuery {
                duration: TaskDuration::Month,
                ..TaskQuery::default()
            })
            .unwrap();
        assert_eq!(month.len(), 2);

        let week = service
            .get_tasks(&TaskQuery {
                duration: TaskDuration::Week,
                ..TaskQuery::default()
            })
            .unwrap();
        assert_eq!(week.len(), 1);
    }

    fn import_days_ago(service: &TaskService<SqliteRepository<'_, TaskItem>>, title: &str, days: i64) {
        let mut task = TaskItem::new(title, TaskStatus::Doing, Tags::default());
        task.added_on = (Local::now().date_naive() - Duration::days(days)).and_hms_opt(12, 0, 0).unwrap();
        service.import_task(task).unwrap();
    }

    fn titles(service: &TaskService<SqliteRepository<'_, TaskItem>>, duration: TaskDuration) -> Vec<String> {
        let query = TaskQuery {
            duration,
            ..TaskQuery::default()
        };
        let mut titles: Vec<String> = service.get_tasks(&query).unwrap().into_iter().map(|t| t.description).collect();
        titles.sort();
        titles
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_duration_windows_count_whole_days(ctx: &mut TaskTestContext) {
        let service = ctx.service();
        for (title, days) in [("d00", 0), ("d01", 1), ("d06", 6), ("d07", 7), ("d29", 29), ("d30", 30)] {
            import_days_ago(&service, title, days);
        }

        assert_eq!(titles(&service, TaskDuration::Today), ["d00"]);
        assert_eq!(titles(&service, TaskDuration::Yesterday), ["d00"]);
        assert_eq!(titles(&service, TaskDuration::Week), ["d00", "d01", "d06"]);
        assert_eq!(titles(&service, TaskDuration::Month), ["d00", "d01", "d06", "d07", "d29"]);
        assert_eq!(titles(&service, TaskDuration::All).len(), 6);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_filter_by_status_search_and_tags(ctx: &mut TaskTestContext) {
        let service = ctx.service();
        service.add_task("Fix login bug", TaskStatus::Doing, Some("backend,urgent")).unwrap();
        service.add_task("Write blog post", TaskStatus::Later, Some("writing")).unwrap();
        let done = service.add_task("Fix typo", TaskStatus::Doing, Some("docs")).unwrap();
        service.complete_task(done.id, None).unwrap();

        let doing = service
            .get_tasks(&TaskQuery {
                status: Some(TaskStatus::Doing),
                ..all()
            })
            .unwrap();
        assert_eq!(doing.len(), 1);
        assert_eq!(doing[0].description, "Fix login bug");

        let fixes = service
            .get_tasks(&TaskQuery {
                search: Some("FIX".to_string()),
                ..all()
            })
            .unwrap();
        assert_eq!(fixes.len(), 2);

        // substring match per requested tag, all must match
        let tagged = service
            .get_tasks(&TaskQuery {
                tags: Some("back,urg".to_string()),
                ..all()
            })
            .unwrap();
        assert_eq!(tagged.len(), 1);

        let none = service
            .get_tasks(&TaskQuery {
                tags: Some("backend,writing".to_string()),
                ..all()
            })
            .unwrap();
        assert!(none.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_sorting(ctx: &mut TaskTestContext) {
        let service = ctx.service();

        let mut first = TaskItem::new("First", TaskStatus::Later, Tags::default());
        first.added_on = Local::now().naive_local() - Duration::hours(2);
        service.import_task(first).unwrap();

        let mut second = TaskItem::new("Second", TaskStatus::Doing, Tags::default());
        second.added_on = Local::now().naive_local() - Duration::hours(1);
        service.import_task(second).unwrap();

        let mut third = TaskItem::new("Third", TaskStatus::Done, Tags::default());
        third.added_on = Local::now().naive_local() - Duration::minutes(30);
        service.import_task(third).unwrap();

        let by_date: Vec<String> = service.get_tasks(&all()).unwrap().into_iter().map(|t| t.description).collect();
        assert_eq!(by_date, ["Third", "Second", "First"]);

        let by_status: Vec<TaskStatus> = service
            .get_tasks(&TaskQuery {
                sort: TaskSort::Status,
                ..all()
            })
            .unwrap()
            .into_iter()
            .map(|t| t.status)
            .collect();
        assert_eq!(by_status, [TaskStatus::Doing, TaskStatus::Done, TaskStatus::Later]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_import_assigns_new_id(ctx: &mut TaskTestContext) {
        let service = ctx.service();
        let mut task = TaskItem::new("Imported", TaskStatus::Done, Tags::from_csv("x"));
        task.id = 500;

        let imported = service.import_task(task).unwrap();
        assert_ne!(imported.id, 500);
        assert_eq!(service.get_task(imported.id).unwrap().unwrap().description, "Imported");
    }
}
