//! Static checks over a machine's transition graph.

use crate::analysis::violations::GraphViolation;
use crate::core::StateMachine;
use std::collections::HashSet;

/// Report every dangling allowed-transitions entry.
///
/// Violations come out in registration order, then declaration order
/// within a state. A machine with no violations returns an empty vec.
pub fn analyze(machine: &StateMachine) -> Vec<GraphViolation> {
    let mut violations = Vec::new();
    for name in machine.states() {
        let Some(definition) = machine.definition(name) else {
            continue;
        };
        for target in definition.allowed_transitions() {
            if !machine.contains(target) {
                violations.push(GraphViolation::DanglingTarget {
                    state: name.to_string(),
                    target: target.clone(),
                });
            }
        }
    }
    violations
}

/// The set of states reachable from `root` by following allowed
/// transitions, in breadth-first discovery order. Includes `root` itself
/// when it is registered; empty otherwise. Dangling targets are skipped,
/// matching engine behavior.
pub fn reachable_from<'a>(machine: &'a StateMachine, root: &str) -> Vec<&'a str> {
    let Some(definition) = machine.definition(root) else {
        return Vec::new();
    };

    let mut visited: HashSet<&str> = HashSet::new();
    let mut order = Vec::new();
    let mut queue = std::collections::VecDeque::new();

    visited.insert(definition.name());
    order.push(definition.name());
    queue.push_back(definition);

    while let Some(current) = queue.pop_front() {
        for target in current.allowed_transitions() {
            let Some(next) = machine.definition(target) else {
                continue;
            };
            if visited.insert(next.name()) {
                order.push(next.name());
                queue.push_back(next);
            }
        }
    }

    order
}

/// Full graph report: dangling targets plus every state unreachable
/// from `root`.
pub fn analyze_from(machine: &StateMachine, root: &str) -> Vec<GraphViolation> {
    let mut violations = analyze(machine);
    let reachable: HashSet<&str> = reachable_from(machine, root).into_iter().collect();

    for name in machine.states() {
        if !reachable.contains(name) {
            violations.push(GraphViolation::Unreachable {
                state: name.to_string(),
            });
        }
    }

    violations
}
