use std::fmt::Write;

use crate::application::Desk;
use crate::message::TaskFilter;

pub fn view(desk: &Desk) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== Todos ==");
    let _ = writeln!(
        out,
        "Active: {}  Completed: {}  Filter: {}  New-task priority: {}",
        desk.active_count(),
        desk.completed_count(),
        desk.task_filter().label(),
        desk.new_task_priority().label(),
    );

    let tasks = desk.filtered_tasks();
    if tasks.is_empty() {
        let line = match desk.task_filter() {
            TaskFilter::All => "No tasks yet. Add your first task!",
            TaskFilter::Active => "No active tasks. Great job!",
            TaskFilter::Completed => "No completed tasks yet.",
        };
        let _ = writeln!(out, "{}", line);
        return out;
    }

    for (i, task) in tasks.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. [{}] {} ({}, {})",
            i + 1,
            if task.completed { "x" } else { " " },
            task.text,
            task.priority.label(),
            task.created_at.format("%Y-%m-%d"),
        );
    }
    out
}
