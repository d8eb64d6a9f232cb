use std::collections::HashMap;

use crate::services::tracklist::dedup_keeping_first;

/// Mutations that bring a destination playlist in line with its sources.
#[derive(Debug, PartialEq)]
pub struct PlaylistDiff {
    /// Source tracks missing from the destination, in first-occurrence order.
    pub to_add: Vec<String>,
    /// Destination tracks no longer in any source, sorted.
    pub to_remove: Vec<String>,
}

impl PlaylistDiff {
    /// Compare the destination's tracks against the concatenated source
    /// tracks.
    pub fn between(destination: &[String], sources: &[String]) -> Self {
        // false = in the destination but not yet seen in any source.
        let mut retained: HashMap<&str, bool> = destination
            .iter()
            .map(|uri| (uri.as_str(), false))
            .collect();

        let mut to_add = Vec::new();
        for uri in sources {
            match retained.get_mut(uri.as_str()) {
                Some(seen) => *seen = true,
                None => to_add.push(uri.clone()),
            }
        }
        let to_add = dedup_keeping_first(&to_add);

        let mut to_remove: Vec<String> = retained
            .iter()
            .filter(|(_, seen)| !**seen)
            .map(|(uri, _)| uri.to_string())
            .collect();
        // HashMap iteration order is arbitrary; sort so runs are reproducible.
        to_remove.sort();

        Self { to_add, to_remove }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}
