//! DependencyGraph entity - the reverse dependency map
//!
//! Maps an imported file to the ordered set of files importing it. Owned by a
//! watch session; entries are only ever appended. Imports removed from a
//! file are not pruned when it is re-parsed.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

use super::SourceFile;

/// Reverse dependency map: imported file -> files that import it
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    dependents: IndexMap<PathBuf, IndexSet<PathBuf>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `importer` imports `imported`.
    ///
    /// Returns `false` if the edge was already present.
    pub fn register(&mut self, imported: impl Into<PathBuf>, importer: &Path) -> bool {
        self.dependents
            .entry(imported.into())
            .or_default()
            .insert(importer.to_path_buf())
    }

    /// Register every import of `file`, returning how many edges were new.
    pub fn register_file(&mut self, file: &SourceFile) -> usize {
        file.imports()
            .iter()
            .filter(|target| self.register((*target).clone(), file.path()))
            .count()
    }

    /// Files that directly import `file`, in registration order.
    pub fn dependents_of(&self, file: &Path) -> impl Iterator<Item = &Path> {
        self.dependents
            .get(file)
            .into_iter()
            .flat_map(|set| set.iter().map(PathBuf::as_path))
    }

    pub fn contains_edge(&self, imported: &Path, importer: &Path) -> bool {
        self.dependents
            .get(imported)
            .map(|set| set.contains(importer))
            .unwrap_or(false)
    }

    /// Compilation order for a change on `trigger`: the trigger itself, then
    /// every transitive dependent in depth-first preorder.
    ///
    /// Each file appears once, even with diamonds or import cycles.
    pub fn cascade(&self, trigger: &Path) -> Vec<PathBuf> {
        let mut order = Vec::new();
        let mut visited: HashSet<PathBuf> = HashSet::new();
        let mut stack = vec![trigger.to_path_buf()];

        while let Some(file) = stack.pop() {
            if !visited.insert(file.clone()) {
                continue;
            }
            if let Some(dependents) = self.dependents.get(&file) {
                // Reverse so the first registered dependent is visited first
                for dependent in dependents.iter().rev() {
                    if !visited.contains(dependent) {
                        stack.push(dependent.clone());
                    }
                }
            }
            order.push(file);
        }

        order
    }

    /// Total number of import edges
    pub fn edge_count(&self) -> usize {
        self.dependents.values().map(IndexSet::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(s: &str) -> PathBuf {
        PathBuf::from(s)
    }

    #[test]
    fn register_suppresses_duplicates() {
        let mut graph = DependencyGraph::new();
        assert!(graph.register(p("/s/base.less"), &p("/s/theme.less")));
        assert!(!graph.register(p("/s/base.less"), &p("/s/theme.less")));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn dependents_keep_insertion_order() {
        let mut graph = DependencyGraph::new();
        graph.register(p("/s/base.less"), &p("/s/z.less"));
        graph.register(p("/s/base.less"), &p("/s/a.less"));
        graph.register(p("/s/base.less"), &p("/s/m.less"));

        let dependents: Vec<_> = graph.dependents_of(&p("/s/base.less")).collect();
        assert_eq!(
            dependents,
            vec![
                Path::new("/s/z.less"),
                Path::new("/s/a.less"),
                Path::new("/s/m.less")
            ]
        );
    }

    #[test]
    fn dependents_of_unknown_file_is_empty() {
        let graph = DependencyGraph::new();
        assert_eq!(graph.dependents_of(&p("/s/none.less")).count(), 0);
    }

    #[test]
    fn register_file_counts_new_edges() {
        let mut graph = DependencyGraph::new();
        let file = SourceFile::new("/s/theme.less")
            .with_imports(vec![p("/s/base.less"), p("/s/vars.less"), p("/s/base.less")]);

        assert_eq!(graph.register_file(&file), 2);
        assert_eq!(graph.register_file(&file), 0);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn cascade_without_dependents_is_just_trigger() {
        let graph = DependencyGraph::new();
        assert_eq!(graph.cascade(&p("/s/a.less")), vec![p("/s/a.less")]);
    }

    #[test]
    fn cascade_direct_dependent_follows_trigger() {
        let mut graph = DependencyGraph::new();
        graph.register(p("/s/base.less"), &p("/s/theme.less"));

        assert_eq!(
            graph.cascade(&p("/s/base.less")),
            vec![p("/s/base.less"), p("/s/theme.less")]
        );
    }

    #[test]
    fn cascade_diamond_visits_each_once() {
        let mut graph = DependencyGraph::new();
        graph.register(p("/s/c.less"), &p("/s/a.less"));
        graph.register(p("/s/c.less"), &p("/s/b.less"));
        graph.register(p("/s/a.less"), &p("/s/top.less"));
        graph.register(p("/s/b.less"), &p("/s/top.less"));

        assert_eq!(
            graph.cascade(&p("/s/c.less")),
            vec![p("/s/c.less"), p("/s/a.less"), p("/s/top.less"), p("/s/b.less")]
        );
    }

    #[test]
    fn cascade_cycle_terminates() {
        let mut graph = DependencyGraph::new();
        graph.register(p("/s/a.less"), &p("/s/b.less"));
        graph.register(p("/s/b.less"), &p("/s/a.less"));

        assert_eq!(
            graph.cascade(&p("/s/a.less")),
            vec![p("/s/a.less"), p("/s/b.less")]
        );
    }

    #[test]
    fn cascade_is_depth_first_preorder() {
        // root <- x <- x1, root <- y
        let mut graph = DependencyGraph::new();
        graph.register(p("/s/root.less"), &p("/s/x.less"));
        graph.register(p("/s/root.less"), &p("/s/y.less"));
        graph.register(p("/s/x.less"), &p("/s/x1.less"));

        assert_eq!(
            graph.cascade(&p("/s/root.less")),
            vec![
                p("/s/root.less"),
                p("/s/x.less"),
                p("/s/x1.less"),
                p("/s/y.less")
            ]
        );
    }

    #[test]
    fn cascade_shared_dependent_reached_first_through_earlier_branch() {
        // c <- a, c <- b, a <- b
        let mut graph = DependencyGraph::new();
        graph.register(p("/s/c.less"), &p("/s/a.less"));
        graph.register(p("/s/c.less"), &p("/s/b.less"));
        graph.register(p("/s/a.less"), &p("/s/b.less"));

        assert_eq!(
            graph.cascade(&p("/s/c.less")),
            vec![p("/s/c.less"), p("/s/a.less"), p("/s/b.less")]
        );
    }
}
