//! Dependency graph pre-validation.
//!
//! The scheduler itself never detects cycles: its single-pass gate only
//! consults already-recorded results, so a cyclic dependency set simply
//! fails every member as unmet on one pass. Callers who want a proper
//! diagnostic run this validation over the declared `depends_on` edges
//! at configuration time, before scheduling.

use std::collections::HashMap;

use crate::check::Check;
use crate::error::{MedkitError, Result};

/// Declared dependency edges between checks, by name.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Check names in declaration order (for deterministic traversal).
    names: Vec<String>,
    /// Map of check name to its direct dependencies.
    dependencies: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Build the graph from a run's check list.
    ///
    /// Dependencies naming checks outside the list are kept as edges to
    /// leaf nodes: they cannot form a cycle, and at run time they simply
    /// gate-fail as never-passed.
    pub fn from_checks(checks: &[Box<dyn Check>]) -> Self {
        let mut graph = Self::default();
        for check in checks {
            graph.add(check.name(), check.depends_on());
        }
        graph
    }

    /// Add a single check with its dependencies.
    pub fn add(&mut self, name: impl Into<String>, depends_on: Vec<String>) {
        let name = name.into();
        if !self.dependencies.contains_key(&name) {
            self.names.push(name.clone());
        }
        self.dependencies.entry(name).or_default().extend(depends_on);
    }

    /// Reject the graph if any dependency cycle exists.
    pub fn validate(&self) -> Result<()> {
        match self.find_cycle() {
            Some(cycle) => Err(MedkitError::CircularDependency {
                cycle: cycle.join(" -> "),
            }),
            None => Ok(()),
        }
    }

    /// Find a cycle via DFS coloring, returning its path if one exists.
    pub fn find_cycle(&self) -> Option<Vec<String>> {
        #[derive(Clone, Copy, PartialEq)]
        enum State {
            Unvisited,
            Visiting,
            Visited,
        }

        let mut state: HashMap<&str, State> = self
            .names
            .iter()
            .map(|n| (n.as_str(), State::Unvisited))
            .collect();

        fn dfs<'a>(
            node: &'a str,
            graph: &'a DependencyGraph,
            state: &mut HashMap<&'a str, State>,
            path: &mut Vec<String>,
        ) -> Option<Vec<String>> {
            state.insert(node, State::Visiting);
            path.push(node.to_string());

            if let Some(deps) = graph.dependencies.get(node) {
                for dep in deps {
                    match state.get(dep.as_str()) {
                        Some(State::Visiting) => {
                            let start = path.iter().position(|n| n == dep).unwrap();
                            let mut cycle: Vec<String> = path[start..].to_vec();
                            cycle.push(dep.clone());
                            return Some(cycle);
                        }
                        Some(State::Unvisited) => {
                            if let Some(cycle) = dfs(dep, graph, state, path) {
                                return Some(cycle);
                            }
                        }
                        // External dependency or already-cleared subtree.
                        Some(State::Visited) | None => {}
                    }
                }
            }

            path.pop();
            state.insert(node, State::Visited);
            None
        }

        let mut path = Vec::new();
        for name in &self.names {
            if state.get(name.as_str()) == Some(&State::Unvisited) {
                if let Some(cycle) = dfs(name, self, &mut state, &mut path) {
                    return Some(cycle);
                }
            }
        }

        None
    }
}
