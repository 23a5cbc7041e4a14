#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, TimeZone};
    use serde_json::json;
    use taskdeck::api::{RawTodo, RawUser};
    use taskdeck::libs::clock::{Clock, FixedClock};
    use taskdeck::libs::task::{Task, TaskKind, DEFAULT_PRIORITY};
    use taskdeck::libs::user::User;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_task_created_with_correct_properties() {
        let task = Task::new(1, "Test Task", false, 1, now());
        assert_eq!(task.id, 1);
        assert_eq!(task.title, "Test Task");
        assert!(!task.completed);
        assert_eq!(task.user_id, 1);
        assert_eq!(task.kind, TaskKind::Plain);
    }

    #[test]
    fn test_raw_todo_coerces_title_and_completed() {
        let raw: RawTodo = serde_json::from_value(json!({
            "id": 4, "title": 42, "completed": 1, "userId": 2, "extra": "ignored"
        }))
        .unwrap();
        assert_eq!(raw.title, "42");
        assert!(raw.completed);

        let raw: RawTodo = serde_json::from_value(json!({
            "id": 5, "title": null, "completed": "", "userId": 2
        }))
        .unwrap();
        assert_eq!(raw.title, "");
        assert!(!raw.completed);

        let raw: RawTodo = serde_json::from_value(json!({ "id": 6, "userId": 2 })).unwrap();
        assert_eq!(raw.title, "");
        assert!(!raw.completed);
    }

    #[test]
    fn test_raw_todo_title_stringification() {
        let title = |value: serde_json::Value| -> String {
            let raw: RawTodo = serde_json::from_value(json!({ "id": 1, "title": value, "userId": 1 })).unwrap();
            raw.title
        };

        assert_eq!(title(json!(1.0)), "1");
        assert_eq!(title(json!(2.5)), "2.5");
        assert_eq!(title(json!(-0.0)), "0");
        assert_eq!(title(json!([1, 2])), "1,2");
        assert_eq!(title(json!(["a", null, [3, 4]])), "a,,3,4");
        assert_eq!(title(json!(true)), "true");
        assert_eq!(title(json!({ "text": "x" })), "[object Object]");
    }

    #[test]
    fn test_raw_user_tolerates_missing_and_extra_fields() {
        let raw: RawUser = serde_json::from_value(json!({
            "id": 1, "name": "Leanne Graham", "address": { "city": "Gwenborough" }
        }))
        .unwrap();
        assert_eq!(raw.name.as_deref(), Some("Leanne Graham"));
        assert_eq!(raw.username, None);
        assert_eq!(raw.email, None);
    }

    #[test]
    fn test_status_and_toggle() {
        let mut task = Task::new(1, "Water plants", false, 1, now());
        assert_eq!(task.status(now()), "Pending");

        task.toggle();
        assert!(task.completed);
        assert_eq!(task.status(now()), "Completed");

        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn test_plain_task_overdue_after_seven_days() {
        let fresh = Task::new(1, "Fresh", false, 1, now() - Duration::days(7));
        assert!(!fresh.is_overdue(now()));

        let stale = Task::new(2, "Stale", false, 1, now() - Duration::days(8));
        assert!(stale.is_overdue(now()));

        let mut done = stale.clone();
        done.toggle();
        assert!(!done.is_overdue(now()));
    }

    #[test]
    fn test_priority_task_due_date_shadows_seven_day_rule() {
        let old = now() - Duration::days(13);

        let not_yet_due = Task::new(10, "Ship it", false, 1, old).with_priority(Some("high"), Some(now() + Duration::days(2)));
        assert!(!not_yet_due.is_overdue(now()));

        let past_due = Task::new(20, "Ship it", false, 1, now()).with_priority(Some("high"), Some(now() - Duration::hours(1)));
        assert!(past_due.is_overdue(now()));

        let no_due = Task::new(30, "Ship it", false, 1, old).with_priority(None, None);
        assert_eq!(no_due.priority(), Some(DEFAULT_PRIORITY));
        assert!(no_due.is_overdue(now()));
    }

    #[test]
    fn test_priority_status_string() {
        let due = now() - Duration::days(1);
        let mut task = Task::new(10, "Deploy", false, 1, now()).with_priority(Some("high"), Some(due));
        assert_eq!(task.status(now()), "Pending [high] (Overdue)");

        task.toggle();
        assert_eq!(task.status(now()), "Completed [high]");
        assert!(task.status(now()).starts_with("Completed"));
    }

    #[test]
    fn test_to_line() {
        let pending = Task::new(1, "delectus aut autem", false, 1, now());
        assert_eq!(pending.to_line(now()), "#1 [User 1] Pending — delectus aut autem");

        let overdue = Task::new(2, "late", false, 3, now() - Duration::days(10));
        assert_eq!(overdue.to_line(now()), "#2 [User 3] Overdue — late");

        let priority = Task::new(10, "urgent", true, 1, now()).with_priority(Some("high"), None);
        assert_eq!(priority.to_line(now()), "#10 [User 1] Completed [high] — urgent");
    }

    #[test]
    fn test_fixed_clock_backdates_creation() {
        let clock = FixedClock::new(now()).with_backdate(9);
        assert_eq!(clock.creation_stamp(), now() - Duration::days(9));
    }

    #[test]
    fn test_user_completion_rate() {
        let arena = vec![
            Task::new(1, "a", true, 1, now()),
            Task::new(2, "b", false, 1, now()),
            Task::new(3, "c", false, 1, now()),
        ];
        let mut user = User::new(1, Some("Leanne"), None, Some("Bret"));
        assert_eq!(user.completion_rate(&arena), 0);

        for index in 0..arena.len() {
            user.add_task(index);
        }
        assert_eq!(user.completion_rate(&arena), 33);

        user.add_task(0);
        assert_eq!(user.completion_rate(&arena), 50);
    }

    #[test]
    fn test_user_completion_rate_rounds_half_up() {
        let arena: Vec<Task> = (1..=8).map(|id| Task::new(id, "t", id <= 3, 1, now())).collect();
        let mut user = User::new(1, None, None, None);
        (0..arena.len()).for_each(|index| user.add_task(index));
        // 3 of 8 is 37.5%
        assert_eq!(user.completion_rate(&arena), 38);
    }

    #[test]
    fn test_user_tasks_by_status() {
        let arena = vec![
            Task::new(1, "a", true, 1, now()),
            Task::new(2, "b", false, 1, now()),
            Task::new(10, "c", true, 1, now()).with_priority(Some("high"), None),
        ];
        let mut user = User::new(1, None, None, None);
        (0..arena.len()).for_each(|index| user.add_task(index));

        let completed: Vec<u32> = user.tasks_by_status(&arena, "Completed", now()).iter().map(|task| task.id).collect();
        assert_eq!(completed, vec![1, 10]);

        let pending: Vec<u32> = user.tasks_by_status(&arena, "Pending", now()).iter().map(|task| task.id).collect();
        assert_eq!(pending, vec![2]);
    }

    #[test]
    fn test_user_label() {
        let user = User::new(1, Some("Leanne Graham"), Some("Sincere@april.biz"), Some("Bret"));
        assert_eq!(user.label(), "Leanne Graham (@Bret)");

        let anonymous = User::new(7, None, None, None);
        assert_eq!(anonymous.label(), "Unknown (@user7)");
    }
}
