//! Query and aggregation functions over task collections.
//!
//! Everything here is a single pass over a slice and never mutates its
//! input. Functions whose result depends on time take `now` explicitly.

use super::clock::Clock;
use super::task::{Task, STATUS_COMPLETED};
use crate::api::RawTodo;
use chrono::{DateTime, Duration, Local};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt::Display;

/// Minimum length of a title word to count as a tag.
pub const MIN_TAG_LEN: usize = 6;

/// Priority assigned to every tenth todo by [`to_task_instances`].
pub const PROMOTED_PRIORITY: &str = "high";

/// Days between conversion and the due date of promoted todos.
pub const PROMOTED_DUE_DAYS: i64 = 2;

/// Status filter used when the caller does not name one.
pub const DEFAULT_STATUS: &str = STATUS_COMPLETED;

/// Identifier given either as a number or as numeric text.
///
/// Text is trimmed before parsing. Anything that does not parse as an
/// identifier converts to `None` and matches nothing.
pub trait IdInput: Display {
    fn to_id(&self) -> Option<u32>;
}

macro_rules! impl_id_input_for_int {
    ($($ty:ty),*) => {
        $(impl IdInput for $ty {
            fn to_id(&self) -> Option<u32> {
                u32::try_from(*self).ok()
            }
        })*
    };
}

impl_id_input_for_int!(u32, u64, usize, i32, i64);

const RADIX_PREFIXES: [(&str, u32); 6] = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];

/// Accepts decimal, exponent and `0x`/`0o`/`0b` forms as long as the value
/// is a whole number within `u32`, so `"1.0"`, `"1e0"` and `"0x1"` all give 1.
impl IdInput for str {
    fn to_id(&self) -> Option<u32> {
        let text = self.trim();

        let prefixed = RADIX_PREFIXES
            .iter()
            .find_map(|(prefix, radix)| text.strip_prefix(prefix).map(|digits| (digits, *radix)));
        if let Some((digits, radix)) = prefixed {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u32::from_str_radix(digits, radix).ok();
        }

        let number: f64 = text.parse().ok()?;
        let whole = number.is_finite() && number.fract() == 0.0;
        (whole && (0.0..=f64::from(u32::MAX)).contains(&number)).then_some(number as u32)
    }
}

impl IdInput for &str {
    fn to_id(&self) -> Option<u32> {
        (**self).to_id()
    }
}

impl IdInput for String {
    fn to_id(&self) -> Option<u32> {
        self.as_str().to_id()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub overdue_tasks: usize,
    pub unique_users: usize,
}

/// Converts raw todos into tasks. With `as_priority`, every id divisible by
/// ten becomes a `high` priority task due two days from now.
pub fn to_task_instances(todos: &[RawTodo], as_priority: bool, clock: &dyn Clock) -> Vec<Task> {
    todos
        .iter()
        .map(|raw| {
            let task = Task::from_raw(raw, clock.creation_stamp());
            if as_priority && raw.id % 10 == 0 {
                let due_date = clock.now() + Duration::days(PROMOTED_DUE_DAYS);
                task.with_priority(Some(PROMOTED_PRIORITY), Some(due_date))
            } else {
                task
            }
        })
        .collect()
}

pub fn filter_by_status<'a>(tasks: &'a [Task], status: &str, now: DateTime<Local>) -> Vec<&'a Task> {
    tasks.iter().filter(|task| task.status(now).starts_with(status)).collect()
}

pub fn filter_by_user<'a, K: IdInput + ?Sized>(tasks: &'a [Task], user_id: &K) -> Vec<&'a Task> {
    match user_id.to_id() {
        Some(user_id) => tasks.iter().filter(|task| task.user_id == user_id).collect(),
        None => Vec::new(),
    }
}

/// Tasks whose title contains every keyword, ignoring case.
pub fn search_tasks<'a, K: Display>(tasks: &'a [Task], keywords: &[K]) -> Vec<&'a Task> {
    let needles: Vec<String> = keywords.iter().map(|keyword| keyword.to_string().to_lowercase()).collect();

    tasks
        .iter()
        .filter(|task| {
            let title = task.title.to_lowercase();
            needles.iter().all(|needle| title.contains(needle.as_str()))
        })
        .collect()
}

pub fn group_by_user(tasks: &[Task]) -> BTreeMap<u32, Vec<&Task>> {
    let mut groups: BTreeMap<u32, Vec<&Task>> = BTreeMap::new();
    for task in tasks {
        groups.entry(task.user_id).or_default().push(task);
    }
    groups
}

/// Lowercase title words of at least [`MIN_TAG_LEN`] characters.
///
/// `None` yields an empty set.
pub fn unique_tags(tasks: Option<&[Task]>) -> BTreeSet<String> {
    let mut tags = BTreeSet::new();
    let Some(tasks) = tasks else {
        return tags;
    };

    for task in tasks {
        task.title
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|word| word.chars().count() >= MIN_TAG_LEN)
            .for_each(|word| {
                tags.insert(word.to_lowercase());
            });
    }

    tags
}

pub fn calculate_statistics(tasks: &[Task], now: DateTime<Local>) -> Statistics {
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|task| task.completed).count();
    let overdue_tasks = tasks.iter().filter(|task| task.is_overdue(now)).count();
    let unique_users = tasks.iter().map(|task| task.user_id).collect::<HashSet<_>>().len();

    Statistics {
        total_tasks,
        completed_tasks,
        pending_tasks: total_tasks - completed_tasks,
        overdue_tasks,
        unique_users,
    }
}
