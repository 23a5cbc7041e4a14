#[cfg(test)]
mod tests {
    use chrono::{DateTime, Duration, Local, TimeZone};
    use std::collections::BTreeSet;
    use taskdeck::libs::manager::LeaderboardRow;
    use taskdeck::libs::messages::Message;
    use taskdeck::libs::processor::Statistics;
    use taskdeck::libs::task::Task;
    use taskdeck::libs::view::View;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn tasks() -> Vec<Task> {
        (1..=12)
            .map(|id| Task::new(id, &format!("task number {}", id), id % 2 == 0, 1, now()))
            .collect()
    }

    #[test]
    fn test_tasks_table_respects_limit() {
        let tasks = tasks();
        let refs: Vec<&Task> = tasks.iter().collect();

        // header plus rows
        assert_eq!(View::tasks_table(&refs, 5, now()).len(), 6);
        assert_eq!(View::tasks_table(&refs, 50, now()).len(), 13);
    }

    #[test]
    fn test_tasks_table_shows_due_date() {
        let task = Task::new(10, "ship", false, 1, now()).with_priority(Some("high"), Some(now() + Duration::days(2)));
        let table = View::tasks_table(&[&task], 10, now());

        let rendered = table.to_string();
        assert!(rendered.contains("2025-06-03"));
        assert!(rendered.contains("Pending [high]"));
    }

    #[test]
    fn test_statistics_table() {
        let stats = Statistics {
            total_tasks: 3,
            completed_tasks: 1,
            pending_tasks: 2,
            overdue_tasks: 0,
            unique_users: 2,
        };
        assert_eq!(View::statistics_table(&stats).len(), 2);
    }

    #[test]
    fn test_leaderboard_table() {
        let rows = vec![
            LeaderboardRow {
                id: 2,
                name: Some("Ervin Howell".to_string()),
                username: Some("Antonette".to_string()),
                completion_rate: 50,
            },
            LeaderboardRow {
                id: 7,
                name: None,
                username: None,
                completion_rate: 0,
            },
        ];
        let rendered = View::leaderboard_table(&rows).to_string();

        assert!(rendered.contains("Ervin Howell (@Antonette)"));
        assert!(rendered.contains("Unknown (@user7)"));
        assert!(rendered.contains("50%"));
    }

    #[test]
    fn test_tags_line_is_sorted() {
        let tags: BTreeSet<String> = ["release", "module", "parser"].iter().map(|tag| tag.to_string()).collect();
        assert_eq!(View::tags_line(&tags), "module,parser,release");
        assert_eq!(View::tags_line(&BTreeSet::new()), "");
    }

    #[test]
    fn test_message_text() {
        assert_eq!(Message::MoreTasks(3).to_string(), "... and 3 more");
        assert_eq!(
            Message::SearchResults {
                count: 2,
                keywords: "foo bar".to_string()
            }
            .to_string(),
            "Found 2 result(s) for: foo bar"
        );
        assert_eq!(Message::DataLoaded { users: 10, tasks: 200 }.to_string(), "Loaded 10 users and 200 tasks");
        assert_eq!(Message::InvalidUserId("x".to_string()).to_string(), "'x' is not a valid user id");
    }
}
