//! Derived task figures for the dashboard and task list.

#[cfg(test)]
#[path = "task_summary_test.rs"]
mod task_summary_test;

use std::collections::BTreeSet;

use crate::net::types::{Area, Task, TaskStatus, User};

/// Label for tasks with no (or an unknown) area.
pub const NO_AREA_LABEL: &str = "Sin área";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskSummary {
    pub total: usize,
    /// Counts in [`TaskStatus::ALL`] order.
    pub by_status: Vec<(TaskStatus, usize)>,
    pub overdue: usize,
    /// Completed / total, `0.0` when there are no tasks.
    pub completion_rate: f64,
}

/// Summarize `tasks`. `today` is `YYYY-MM-DD`; a task is overdue when its
/// due date is strictly before it and it is not completed.
pub fn summarize(tasks: &[Task], today: &str) -> TaskSummary {
    let by_status: Vec<(TaskStatus, usize)> = TaskStatus::ALL
        .into_iter()
        .map(|status| (status, tasks.iter().filter(|t| t.estado == status).count()))
        .collect();
    let completed = tasks.iter().filter(|t| t.estado == TaskStatus::Completada).count();
    let overdue = tasks
        .iter()
        .filter(|t| t.estado != TaskStatus::Completada)
        .filter(|t| t.fecha_limite.as_deref().is_some_and(|due| !today.is_empty() && due < today))
        .count();
    let completion_rate = if tasks.is_empty() { 0.0 } else { as_f64(completed) / as_f64(tasks.len()) };
    TaskSummary { total: tasks.len(), by_status, overdue, completion_rate }
}

pub fn filter_by_status(tasks: &[Task], status: Option<TaskStatus>) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| status.is_none_or(|s| t.estado == s))
        .cloned()
        .collect()
}

/// Per-area task counts bucketed by due month (`YYYY-MM`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaSeries {
    pub months: Vec<String>,
    /// `(area label, count per month)` in area order; the no-area bucket is
    /// last and only present when non-empty.
    pub series: Vec<(String, Vec<f64>)>,
}

pub fn tasks_per_area_by_month(tasks: &[Task], areas: &[Area]) -> AreaSeries {
    let month_of = |t: &Task| t.fecha_limite.as_deref().and_then(|d| d.get(..7)).map(str::to_owned);
    let months: Vec<String> = tasks.iter().filter_map(month_of).collect::<BTreeSet<_>>().into_iter().collect();

    let count = |matches: &dyn Fn(&Task) -> bool| -> Vec<f64> {
        months
            .iter()
            .map(|m| as_f64(tasks.iter().filter(|t| matches(t) && month_of(t).as_ref() == Some(m)).count()))
            .collect()
    };

    let mut series: Vec<(String, Vec<f64>)> = areas
        .iter()
        .map(|a| (a.nombre.clone(), count(&|t: &Task| t.area_id.as_deref() == Some(a.id.as_str()))))
        .collect();
    let known = |t: &Task| t.area_id.as_deref().is_some_and(|id| areas.iter().any(|a| a.id == id));
    let orphans = count(&|t: &Task| !known(t));
    if orphans.iter().any(|n| *n > 0.0) {
        series.push((NO_AREA_LABEL.to_owned(), orphans));
    }
    AreaSeries { months, series }
}

#[allow(clippy::cast_precision_loss)]
fn as_f64(n: usize) -> f64 {
    n as f64
}

pub fn area_name(areas: &[Area], id: Option<&str>) -> String {
    id.and_then(|id| areas.iter().find(|a| a.id == id))
        .map_or_else(|| NO_AREA_LABEL.to_owned(), |a| a.nombre.clone())
}

pub fn user_name(users: &[User], id: Option<&str>) -> String {
    id.and_then(|id| users.iter().find(|u| u.id == id))
        .map_or_else(|| "Sin asignar".to_owned(), |u| u.nombre.clone())
}
