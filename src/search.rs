//! This module implements the best-first search over a [Layout]. It follows the shape of
//! [pathfinding's astar function](https://docs.rs/pathfinding/latest/pathfinding/directed/astar/index.html):
//! an insertion-ordered map holds one entry per discovered cell and a binary heap holds indices
//! into it, with stale heap entries skipped lazily instead of decreasing keys in place.
use crate::edge::PathEdge;
use crate::layout::Layout;
use crate::{DIAGONAL_COST, ORTHOGONAL_COST};
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

#[derive(Clone, Debug)]
struct SmallestCostHolder {
    estimated_cost: f64,
    cost: f64,
    index: usize,
}

impl Eq for SmallestCostHolder {}

impl PartialEq for SmallestCostHolder {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for SmallestCostHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestCostHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost first. Ties go to the cell discovered first, which is the first
        // minimum in frontier order since cells keep their discovery position until expanded.
        match other.estimated_cost.total_cmp(&self.estimated_cost) {
            Ordering::Equal => other.index.cmp(&self.index),
            s => s,
        }
    }
}

/// Per-cell search state. The start is the only cell without an edge.
#[derive(Clone, Copy, Debug)]
struct SearchNode {
    edge: Option<PathEdge>,
    closed: bool,
}

impl SearchNode {
    fn g(&self) -> f64 {
        self.edge.map_or(0.0, |edge| edge.g)
    }
}

/// Frontier, visited set and best-edge annotations of one search run. Kept between runs so
/// allocations are reused; every run starts by clearing it.
#[derive(Clone, Debug, Default)]
pub(crate) struct SearchContext {
    to_see: BinaryHeap<SmallestCostHolder>,
    nodes: FxIndexMap<Point, SearchNode>,
    end: Option<Point>,
    found: bool,
    expanded: usize,
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext::default()
    }

    pub fn clear(&mut self) {
        self.to_see.clear();
        self.nodes.clear();
        self.end = None;
        self.found = false;
        self.expanded = 0;
    }

    /// Runs a complete search from the layout's start to its end. Returns whether the end was
    /// reached; on `false` the frontier was exhausted.
    pub fn run(&mut self, layout: &Layout, heuristic_factor: f64) -> bool {
        self.clear();
        let start = layout.start();
        let end = layout.end();
        self.end = Some(end);
        self.nodes.insert(
            start,
            SearchNode {
                edge: None,
                closed: false,
            },
        );
        self.to_see.push(SmallestCostHolder {
            estimated_cost: 0.0,
            cost: 0.0,
            index: 0,
        });
        let heuristic = |p: &Point| euclidean_distance(p, &end) * heuristic_factor;

        while let Some(SmallestCostHolder { cost, index, .. }) = self.to_see.pop() {
            let (current, current_g) = {
                let Some((&point, node)) = self.nodes.get_index_mut(index) else {
                    continue;
                };
                // A cell may sit in the heap several times if a cheaper edge to it was found
                // later. Only the entry matching its current edge is expanded.
                if node.closed || cost > node.g() {
                    continue;
                }
                node.closed = true;
                (point, node.g())
            };
            self.expanded += 1;
            if current == end {
                self.found = true;
                return true;
            }
            for (neighbour, diagonal) in layout.neighbourhood(&current) {
                if neighbour.is_obstacle() {
                    continue;
                }
                let new_cost = current_g + if diagonal { DIAGONAL_COST } else { ORTHOGONAL_COST };
                let edge;
                let n;
                match self.nodes.entry(neighbour.point) {
                    Vacant(e) => {
                        edge = PathEdge::new(current, new_cost, heuristic(e.key()), diagonal);
                        n = e.index();
                        e.insert(SearchNode {
                            edge: Some(edge),
                            closed: false,
                        });
                    }
                    Occupied(mut e) => {
                        n = e.index();
                        let node = e.get_mut();
                        if node.closed || node.g() <= new_cost {
                            continue;
                        }
                        edge = PathEdge::new(current, new_cost, heuristic(&neighbour.point), diagonal);
                        node.edge = Some(edge);
                    }
                }
                self.to_see.push(SmallestCostHolder {
                    estimated_cost: edge.f(),
                    cost: new_cost,
                    index: n,
                });
            }
        }
        false
    }

    /// The best edge currently known for a point.
    pub fn edge(&self, point: &Point) -> Option<&PathEdge> {
        self.nodes.get(point).and_then(|node| node.edge.as_ref())
    }

    /// The end's edge if the last run reached it.
    pub fn end_edge(&self) -> Option<&PathEdge> {
        if !self.found {
            return None;
        }
        self.end.as_ref().and_then(|end| self.edge(end))
    }

    /// Walks the edges back from the end and returns the cells after the start up to and
    /// including the end, in start to end order.
    pub fn reverse_path(&self) -> Option<Vec<Point>> {
        let end = if self.found { self.end? } else { return None };
        let mut path: Vec<Point> = std::iter::successors(Some(end), |point| {
            self.edge(point).map(|edge| edge.target)
        })
        // The last point of the chain is the start, which has no edge.
        .take_while(|point| self.edge(point).is_some())
        .collect();
        path.reverse();
        Some(path)
    }

    /// Number of cells expanded by the last run.
    pub fn expanded(&self) -> usize {
        self.expanded
    }
}

pub fn euclidean_distance(p1: &Point, p2: &Point) -> f64 {
    let dx = (p2.x - p1.x) as f64;
    let dy = (p2.y - p1.y) as f64;
    ((dx * dx) + (dy * dy)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rows: &[&[u32]]) -> (SearchContext, bool) {
        let layout = Layout::from_rows(rows).unwrap();
        let mut context = SearchContext::new();
        let found = context.run(&layout, 1.0);
        (context, found)
    }

    #[test]
    fn heap_pops_smallest_estimate_then_earliest_index() {
        let mut heap = BinaryHeap::new();
        for (estimated_cost, index) in [(3.0, 0), (1.0, 5), (1.0, 2), (2.0, 1)] {
            heap.push(SmallestCostHolder {
                estimated_cost,
                cost: 0.0,
                index,
            });
        }
        let order = std::iter::from_fn(|| heap.pop().map(|h| h.index)).collect::<Vec<_>>();
        assert_eq!(order, vec![2, 5, 1, 0]);
    }

    #[test]
    fn euclidean_distance_is_straight_line() {
        assert_eq!(euclidean_distance(&Point::new(0, 0), &Point::new(3, 4)), 5.0);
        assert_eq!(euclidean_distance(&Point::new(2, 2), &Point::new(2, 2)), 0.0);
    }

    #[test]
    fn orthogonal_and_diagonal_step_costs() {
        let (context, found) = run(&[&[1, 0, 0], &[0, 0, 0], &[0, 0, 2]]);
        assert!(found);
        let end = context.end_edge().unwrap();
        assert!(end.diagonal);
        assert_eq!(end.g, 2.0 * DIAGONAL_COST);
        let side = context.edge(&Point::new(0, 1)).unwrap();
        assert_eq!(side.g, ORTHOGONAL_COST);
        assert!(!side.diagonal);
    }

    /// A cell keeps the cheapest edge seen while it is on the frontier.
    #[test]
    fn costlier_edge_does_not_replace_frontier_edge() {
        // Reaching (1, 1) through (0, 1) costs more than the diagonal step from the start.
        let (context, found) = run(&[&[1, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 2]]);
        assert!(found);
        let edge = context.edge(&Point::new(1, 1)).unwrap();
        assert_eq!(edge.target, Point::new(0, 0));
        assert_eq!(edge.g, DIAGONAL_COST);
    }

    #[test]
    fn exhausted_frontier_reports_failure() {
        let (context, found) = run(&[&[1, 3, 0], &[3, 3, 0], &[0, 0, 2]]);
        assert!(!found);
        assert!(context.end_edge().is_none());
        assert!(context.reverse_path().is_none());
        // Only the start was expanded.
        assert_eq!(context.expanded(), 1);
    }

    #[test]
    fn rerun_clears_previous_state() {
        let layout = Layout::from_rows(&[&[1u32, 0, 2][..]]).unwrap();
        let mut context = SearchContext::new();
        assert!(context.run(&layout, 1.0));
        let first = context.reverse_path().unwrap();
        assert!(context.run(&layout, 1.0));
        assert_eq!(context.reverse_path().unwrap(), first);
        assert_eq!(first, vec![Point::new(0, 1), Point::new(0, 2)]);
    }
}
