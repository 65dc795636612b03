//! # Waypoints
//!
//! A user-specified bundle of names driving a path query: an ordered list
//! of through-points (the first is the start, the last is the finish) and
//! an unordered set of names to avoid.

use std::collections::BTreeSet;

/// Start/finish/through/avoid names for a path query, unresolved.
#[derive(Debug, Clone, Default)]
pub struct Waypoints {
    through: Vec<String>,
    avoid: BTreeSet<String>,
}

impl Waypoints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct waypoints from just a start and a finish name.
    #[must_use]
    pub fn start_finish(start: impl Into<String>, finish: impl Into<String>) -> Self {
        let mut w = Self::new();
        w.through.push(start.into());
        w.through.push(finish.into());
        w
    }

    /// Insert an interior through-point before the finish name.
    pub fn add_through(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.through.is_empty() {
            self.through.push(name);
        } else {
            let finish = self.through.len() - 1;
            self.through.insert(finish, name);
        }
    }

    pub fn add_avoid(&mut self, name: impl Into<String>) {
        self.avoid.insert(name.into());
    }

    #[must_use]
    pub fn start(&self) -> Option<&str> {
        self.through.first().map(String::as_str)
    }

    #[must_use]
    pub fn finish(&self) -> Option<&str> {
        self.through.last().map(String::as_str)
    }

    /// Through-points strictly between start and finish, in order.
    #[must_use]
    pub fn interior(&self) -> &[String] {
        if self.through.len() <= 2 {
            &[]
        } else {
            &self.through[1..self.through.len() - 1]
        }
    }

    /// Every through-point in order, including start and finish.
    #[must_use]
    pub fn all_through(&self) -> &[String] {
        &self.through
    }

    #[must_use]
    pub fn avoid_names(&self) -> impl Iterator<Item = &str> {
        self.avoid.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.through.is_empty()
    }
}
