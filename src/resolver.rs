//! Dependency resolution over the structural metadata graph.
//!
//! Strong references between sets form a DAG over instance UIDs. A
//! three-color depth-first search orders the nodes leaves-first so that
//! rich objects can be materialized after all of their dependents.

use crate::error::{MxfError, Result};
use crate::types::MxfUid;

/// One node of the dependency graph, in first-encounter order.
#[derive(Debug, Clone)]
pub(crate) struct GraphNode {
    /// Instance UID of the set.
    pub(crate) uid: MxfUid,
    /// Indices of the nodes this set depends on.
    pub(crate) depends: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    None,
    Temporary,
    Permanent,
}

/// Topologically sort the graph, dependencies first.
///
/// Ties are broken by first-encounter order, keeping the output
/// deterministic. A back edge to a temporarily marked node is a cycle.
pub(crate) fn topological_order(nodes: &[GraphNode]) -> Result<Vec<usize>> {
    let mut marks = vec![Mark::None; nodes.len()];
    let mut order = Vec::with_capacity(nodes.len());
    for index in 0..nodes.len() {
        if marks[index] == Mark::None {
            visit(nodes, &mut marks, index, &mut order)?;
        }
    }
    Ok(order)
}

fn visit(
    nodes: &[GraphNode],
    marks: &mut [Mark],
    index: usize,
    order: &mut Vec<usize>,
) -> Result<()> {
    match marks[index] {
        Mark::Temporary => return Err(MxfError::CyclicGraph),
        Mark::Permanent => return Ok(()),
        Mark::None => {}
    }
    marks[index] = Mark::Temporary;
    for neighbor in 0..nodes[index].depends.len() {
        let dep = nodes[index].depends[neighbor];
        visit(nodes, marks, dep, order)?;
    }
    marks[index] = Mark::Permanent;
    order.push(index);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uid(n: u8) -> MxfUid {
        MxfUid::from_ul([n; 16])
    }

    fn node(n: u8, depends: Vec<usize>) -> GraphNode {
        GraphNode {
            uid: uid(n),
            depends,
        }
    }

    #[test]
    fn test_leaves_come_first() {
        // 0 -> 1 -> 2, so 2 must come first
        let nodes = vec![node(0, vec![1]), node(1, vec![2]), node(2, vec![])];
        let order = topological_order(&nodes).unwrap();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_diamond() {
        // 0 depends on 1 and 2, both depend on 3
        let nodes = vec![
            node(0, vec![1, 2]),
            node(1, vec![3]),
            node(2, vec![3]),
            node(3, vec![]),
        ];
        let order = topological_order(&nodes).unwrap();
        let position = |i: usize| order.iter().position(|&x| x == i).unwrap();
        assert!(position(3) < position(1));
        assert!(position(3) < position(2));
        assert!(position(1) < position(0));
        assert!(position(2) < position(0));
    }

    #[test]
    fn test_cycle_detected() {
        let nodes = vec![node(0, vec![1]), node(1, vec![0])];
        assert!(matches!(
            topological_order(&nodes),
            Err(MxfError::CyclicGraph)
        ));
    }

    #[test]
    fn test_self_cycle_detected() {
        let nodes = vec![node(0, vec![0])];
        assert!(matches!(
            topological_order(&nodes),
            Err(MxfError::CyclicGraph)
        ));
    }

    #[test]
    fn test_first_encounter_order_is_stable() {
        // Independent nodes keep their decode order
        let nodes = vec![node(0, vec![]), node(1, vec![]), node(2, vec![])];
        let order = topological_order(&nodes).unwrap();
        assert_eq!(order, vec![0, 1, 2]);
    }
}
