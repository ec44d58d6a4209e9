//! Dependency graph over named definitions.
//!
//! Edges come from [`get_references`]: definition `A` depends on `B` when
//! `A` references the name `B` and `B` is defined in the same graph. Names
//! with no definition in the graph (builtins, parameters, outer scopes) are
//! kept aside as unknown references.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use crate::CycleError;
use crate::ast::Definition;
use crate::config::Config;
use crate::def_id::DefId;
use crate::refs::get_references;

#[derive(Clone, Debug, Default)]
struct Entry {
    deps: IndexSet<DefId>,
    unknown: IndexSet<String>,
}

/// Direct dependencies between named definitions.
///
/// Definitions sharing a name are merged into one node.
#[derive(Clone, Debug)]
pub struct DependencyGraph {
    defs: IndexMap<String, Entry>,
    config: Config,
}

impl DependencyGraph {
    /// Build a graph with the default [`Config`].
    pub fn new<'a, I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = &'a Definition>,
    {
        Self::with_config(definitions, Config::default())
    }

    pub fn with_config<'a, I>(definitions: I, config: Config) -> Self
    where
        I: IntoIterator<Item = &'a Definition>,
    {
        let definitions: Vec<&Definition> = definitions.into_iter().collect();

        // Register every name first so forward references resolve.
        let mut defs: IndexMap<String, Entry> = IndexMap::with_capacity(definitions.len());
        for def in &definitions {
            defs.entry(def.name().to_owned()).or_default();
        }
        tracing::debug!(definitions = defs.len(), "building dependency graph");

        for def in definitions {
            let mut refs = get_references(def);
            if config.function_bodies {
                refs = refs.with_function_bodies();
            }

            let mut deps = IndexSet::new();
            let mut unknown = IndexSet::new();
            for name in refs {
                match defs.get_index_of(name) {
                    Some(index) => {
                        deps.insert(DefId::from_raw(index as u32));
                    }
                    None => {
                        unknown.insert(name.to_owned());
                    }
                }
            }
            tracing::trace!(
                name = def.name(),
                dependencies = deps.len(),
                unknown = unknown.len(),
                "collected references"
            );

            if let Some(entry) = defs.get_mut(def.name()) {
                entry.deps.extend(deps);
                entry.unknown.extend(unknown);
            }
        }

        Self { defs, config }
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn def_id(&self, name: &str) -> Option<DefId> {
        self.defs
            .get_index_of(name)
            .map(|index| DefId::from_raw(index as u32))
    }

    /// Resolve a DefId back to its name.
    ///
    /// # Panics
    /// Panics if the id was not created by this graph.
    pub fn name(&self, id: DefId) -> &str {
        self.defs
            .get_index(id.index())
            .map(|(name, _)| name.as_str())
            .unwrap_or_else(|| panic!("DependencyGraph: {id:?} not found"))
    }

    /// All definitions, in definition order.
    pub fn ids(&self) -> impl Iterator<Item = DefId> + '_ {
        (0..self.defs.len()).map(|index| DefId::from_raw(index as u32))
    }

    /// Direct dependencies of `id`, in first-referenced order.
    pub fn dependencies(&self, id: DefId) -> impl Iterator<Item = DefId> + '_ {
        self.entry(id).deps.iter().copied()
    }

    /// Referenced names of `id` that no definition in the graph provides.
    pub fn unknown_references(&self, id: DefId) -> impl Iterator<Item = &str> + '_ {
        self.entry(id).unknown.iter().map(String::as_str)
    }

    /// Strongly connected components that form cycles, dependencies first.
    ///
    /// Members of each cycle are listed in definition order. A definition
    /// referencing itself is a cycle unless the config allows self-references.
    pub fn cycles(&self) -> Vec<Vec<DefId>> {
        let cycles: Vec<_> = self
            .components()
            .into_iter()
            .filter(|component| self.is_cyclic(component))
            .collect();
        tracing::debug!(cycles = cycles.len(), "cycle detection finished");
        cycles
    }

    /// Definitions ordered so every definition follows its dependencies.
    ///
    /// Fails with the first cycle found.
    pub fn evaluation_order(&self) -> Result<Vec<DefId>, CycleError> {
        let components = self.components();
        if let Some(cycle) = components.iter().find(|c| self.is_cyclic(c)) {
            return Err(CycleError {
                names: cycle.iter().map(|&id| self.name(id).to_owned()).collect(),
            });
        }
        Ok(components.into_iter().flatten().collect())
    }

    fn entry(&self, id: DefId) -> &Entry {
        self.defs
            .get_index(id.index())
            .map(|(_, entry)| entry)
            .unwrap_or_else(|| panic!("DependencyGraph: {id:?} not found"))
    }

    fn is_cyclic(&self, component: &[DefId]) -> bool {
        match component {
            [id] => !self.config.allow_self_references && self.entry(*id).deps.contains(id),
            _ => true,
        }
    }

    fn components(&self) -> Vec<Vec<DefId>> {
        let mut tarjan = Tarjan::new(self);
        for id in self.ids() {
            if tarjan.indices[id.index()].is_none() {
                tarjan.connect(id);
            }
        }
        tarjan.components
    }
}

impl fmt::Display for DependencyGraph {
    /// One line per definition: `Name -> Dep, Dep [unknown: X, Y]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.ids() {
            write!(f, "{}", self.name(id))?;

            let deps: Vec<&str> = self.dependencies(id).map(|d| self.name(d)).collect();
            if !deps.is_empty() {
                write!(f, " -> {}", deps.join(", "))?;
            }

            let unknown: Vec<&str> = self.unknown_references(id).collect();
            if !unknown.is_empty() {
                write!(f, " [unknown: {}]", unknown.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Tarjan's strongly connected components.
///
/// Components are emitted after everything they depend on, which is exactly
/// evaluation order.
struct Tarjan<'g> {
    graph: &'g DependencyGraph,
    next_index: u32,
    indices: Vec<Option<u32>>,
    lowlinks: Vec<u32>,
    on_stack: Vec<bool>,
    stack: Vec<DefId>,
    components: Vec<Vec<DefId>>,
}

impl<'g> Tarjan<'g> {
    fn new(graph: &'g DependencyGraph) -> Self {
        let n = graph.len();
        Self {
            graph,
            next_index: 0,
            indices: vec![None; n],
            lowlinks: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            components: Vec::new(),
        }
    }

    fn visit(&mut self, v: DefId) {
        let index = self.next_index;
        self.next_index += 1;
        self.indices[v.index()] = Some(index);
        self.lowlinks[v.index()] = index;
        self.stack.push(v);
        self.on_stack[v.index()] = true;
    }

    /// Walks everything reachable from `root` with an explicit frame stack,
    /// so long dependency chains cannot exhaust the call stack.
    fn connect(&mut self, root: DefId) {
        let graph = self.graph;

        // (definition, index of the next dependency to follow)
        let mut frames: Vec<(DefId, usize)> = vec![(root, 0)];
        self.visit(root);

        while let Some(frame) = frames.last_mut() {
            let (v, next) = *frame;
            if let Some(&w) = graph.entry(v).deps.get_index(next) {
                frame.1 += 1;
                match self.indices[w.index()] {
                    None => {
                        self.visit(w);
                        frames.push((w, 0));
                    }
                    Some(w_index) if self.on_stack[w.index()] => {
                        self.lowlinks[v.index()] = self.lowlinks[v.index()].min(w_index);
                    }
                    Some(_) => {}
                }
                continue;
            }

            frames.pop();
            let v_low = self.lowlinks[v.index()];
            if let Some(&(parent, _)) = frames.last() {
                self.lowlinks[parent.index()] = self.lowlinks[parent.index()].min(v_low);
            }
            if Some(v_low) == self.indices[v.index()] {
                self.emit(v);
            }
        }
    }

    fn emit(&mut self, root: DefId) {
        let mut component = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w.index()] = false;
            component.push(w);
            if w == root {
                break;
            }
        }
        component.sort();
        self.components.push(component);
    }
}
