//! Shortest-path search over the world graph.
//!
//! Classic priority-queue Dijkstra, returning not just the cost but an
//! ordered trace of the hops taken, each annotated with the mode used to
//! arrive. All edge weights are non-negative by construction, so the
//! first pop of the destination is optimal.
//!
//! Complexity is O((V+E) log V) with E up to O(V²) from the universal
//! walking layer. That is acceptable for the map sizes this serves; very
//! large location sets would need a sparser walking policy first.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashSet};

use crate::domain::{Point, TransportMode, TravelTime};
use crate::graph::WorldGraph;

/// One visited node in a completed search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hop {
    /// The point arrived at.
    pub point: Point,
    /// Total travel time from the origin to this point.
    pub cumulative: TravelTime,
    /// Mode used to arrive here; `None` only for the origin hop.
    pub arrival_mode: Option<TransportMode>,
}

/// The ordered hop sequence of a completed search, origin first.
#[derive(Debug, Clone, Default)]
pub struct SearchTrace {
    hops: Vec<Hop>,
}

impl SearchTrace {
    /// The hops in travel order.
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Total travel time: the final hop's cumulative time.
    pub fn total_time(&self) -> TravelTime {
        self.hops.last().map(|h| h.cumulative).unwrap_or_default()
    }
}

/// A frontier entry awaiting its pop.
///
/// Ordered min-first by cost, then by insertion sequence so that equal
/// costs resolve deterministically (FIFO) without a decrease-key
/// operation; stale duplicates are skipped via the finalized set instead.
struct QueueEntry {
    cost: TravelTime,
    seq: u64,
    point: Point,
    arrival_mode: Option<TransportMode>,
    hops: Vec<Hop>,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap; earlier insertion wins ties.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Find the least-total-time trace from `origin` to `destination`.
///
/// Returns `None` when the destination is unreachable, which for a built
/// graph means it is not a known location (walking connects everything
/// else). An origin equal to the destination yields a single-hop trace.
pub fn shortest_path(
    graph: &WorldGraph,
    origin: Point,
    destination: Point,
) -> Option<SearchTrace> {
    let mut heap = BinaryHeap::new();
    let mut finalized: HashSet<Point> = HashSet::new();
    let mut seq = 0u64;

    heap.push(QueueEntry {
        cost: TravelTime::ZERO,
        seq,
        point: origin,
        arrival_mode: None,
        hops: Vec::new(),
    });

    while let Some(entry) = heap.pop() {
        if !finalized.insert(entry.point) {
            continue;
        }

        let mut hops = entry.hops;
        hops.push(Hop {
            point: entry.point,
            cumulative: entry.cost,
            arrival_mode: entry.arrival_mode,
        });

        if entry.point == destination {
            return Some(SearchTrace { hops });
        }

        for edge in graph.edges(entry.point) {
            if finalized.contains(&edge.to) {
                continue;
            }
            seq += 1;
            heap.push(QueueEntry {
                cost: entry.cost + edge.travel_time,
                seq,
                point: edge.to,
                arrival_mode: Some(edge.mode),
                hops: hops.clone(),
            });
        }
    }

    None
}
