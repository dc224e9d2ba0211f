//! Static checks over a dataset.
//!
//! Looks at which placeholders each template and candidate references,
//! without expanding anything, and reports data that would make expansion
//! fail or loop.

use std::collections::{BTreeMap, BTreeSet};

use crate::expander::Expander;
use crate::expander::error::{DatasetWarning, Origin, compute_suggestions};
use crate::parser::parse_template;
use crate::types::Dataset;

/// Runs all dataset checks, returning findings in a stable order.
///
/// Markers are read the way `expander` would read them, so optional-marker
/// suffixes are stripped only when that expander has them enabled.
pub fn lint_dataset(dataset: &Dataset, expander: &Expander) -> Vec<DatasetWarning> {
    let mut warnings = Vec::new();
    if dataset.templates.is_empty() {
        warnings.push(DatasetWarning::NoTemplates);
    }

    let mut referenced: BTreeSet<String> = BTreeSet::new();
    for (index, template) in dataset.templates.iter().enumerate() {
        for key in referenced_keys(template, expander) {
            check_known(&key, Origin::Template(index), dataset, &mut warnings);
            referenced.insert(key);
        }
    }

    let mut graph: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for (name, candidates) in &dataset.assets {
        if candidates.is_empty() {
            warnings.push(DatasetWarning::EmptyCandidates { name: name.clone() });
        }
        let keys: BTreeSet<String> = candidates
            .iter()
            .flat_map(|candidate| referenced_keys(candidate, expander))
            .collect();
        let mut edges = BTreeSet::new();
        for key in keys {
            if check_known(&key, Origin::Asset(name.clone()), dataset, &mut warnings) {
                edges.insert(key.clone());
            }
            if &key != name {
                referenced.insert(key);
            }
        }
        graph.insert(name.clone(), edges);
    }

    for chain in find_cycles(&graph) {
        warnings.push(DatasetWarning::Cycle { chain });
    }

    for name in dataset.assets.names() {
        if !referenced.contains(name) {
            warnings.push(DatasetWarning::UnusedAsset {
                name: name.to_string(),
            });
        }
    }

    warnings
}

/// Distinct asset keys referenced by one string.
fn referenced_keys(text: &str, expander: &Expander) -> BTreeSet<String> {
    parse_template(text)
        .markers()
        .map(|marker| expander.marker_key(marker).to_string())
        .collect()
}

/// Report `key` if the assets lack it. Returns whether it is known.
fn check_known(
    key: &str,
    origin: Origin,
    dataset: &Dataset,
    warnings: &mut Vec<DatasetWarning>,
) -> bool {
    if dataset.assets.contains(key) {
        return true;
    }
    warnings.push(DatasetWarning::UnknownPlaceholder {
        name: key.to_string(),
        origin,
        suggestions: compute_suggestions(key, dataset.assets.names()),
    });
    false
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    OnStack,
    Done,
}

/// Depth-first search reporting one chain per back edge.
fn find_cycles(graph: &BTreeMap<String, BTreeSet<String>>) -> Vec<Vec<String>> {
    let mut state: BTreeMap<&str, VisitState> = BTreeMap::new();
    let mut stack: Vec<&str> = Vec::new();
    let mut cycles = Vec::new();
    for start in graph.keys() {
        if !state.contains_key(start.as_str()) {
            visit(start, graph, &mut state, &mut stack, &mut cycles);
        }
    }
    cycles
}

fn visit<'g>(
    node: &'g str,
    graph: &'g BTreeMap<String, BTreeSet<String>>,
    state: &mut BTreeMap<&'g str, VisitState>,
    stack: &mut Vec<&'g str>,
    cycles: &mut Vec<Vec<String>>,
) {
    state.insert(node, VisitState::OnStack);
    stack.push(node);

    if let Some(edges) = graph.get(node) {
        for next in edges {
            match state.get(next.as_str()).copied() {
                None => visit(next, graph, state, stack, cycles),
                Some(VisitState::OnStack) => {
                    let start = stack
                        .iter()
                        .position(|n| *n == next.as_str())
                        .unwrap_or(0);
                    let mut chain: Vec<String> =
                        stack[start..].iter().map(ToString::to_string).collect();
                    chain.push(next.clone());
                    cycles.push(chain);
                }
                Some(VisitState::Done) => {}
            }
        }
    }

    stack.pop();
    state.insert(node, VisitState::Done);
}
