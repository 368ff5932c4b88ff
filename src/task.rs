//! Task data structure.
//!
//! This module defines the core `Task` struct representing a single to-do
//! item for the duration of a console session.

use crate::fields::{Difficulty, Status};

/// A to-do item held in memory for the lifetime of the session.
///
/// The `id` is assigned by the store at creation time and never reused, so
/// filtered and searched views can refer back to a task without relying on
/// its position in the collection. Dates are plain display strings; the
/// console never parses them.
#[derive(Debug, Clone)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: Status,
    pub difficulty: Difficulty,
    /// Due date in DD/MM/YYYY display form, free text.
    pub due: String,
    /// Local date the task was created, immutable thereafter.
    pub created: String,
}
