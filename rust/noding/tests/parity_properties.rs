// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use ifc_lite_noding::{
    node, BasicSegmentString, BoundarySegmentMap, Coordinate, Segment, SegmentMapArena,
    SegmentSet, SegmentString,
};
use proptest::prelude::*;
use rustc_hash::FxHashMap;

/// Small integer grid so that random polylines actually share edges.
fn grid_point() -> impl Strategy<Value = [f64; 2]> {
    (0i32..4, 0i32..4).prop_map(|(x, y)| [x as f64, y as f64])
}

fn polyline() -> impl Strategy<Value = Vec<[f64; 2]>> {
    prop::collection::vec(grid_point(), 0..8)
}

fn undirected(p: [f64; 2], q: [f64; 2]) -> ([i64; 2], [i64; 2]) {
    let a = [p[0] as i64, p[1] as i64];
    let b = [q[0] as i64, q[1] as i64];
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

proptest! {
    #[test]
    fn segment_equality_is_symmetric(
        ax in -1e6f64..1e6, ay in -1e6f64..1e6,
        bx in -1e6f64..1e6, by in -1e6f64..1e6,
    ) {
        let mut arena = SegmentMapArena::new();
        let k0 = arena.insert(BoundarySegmentMap::new(0, 1));
        let k1 = arena.insert(BoundarySegmentMap::new(1, 1));

        let a = Coordinate::new(ax, ay);
        let b = Coordinate::new(bx, by);
        let fwd = Segment::new(a, b, k0, 0);
        let rev = Segment::new(b, a, k1, 0);
        prop_assert_eq!(fwd, rev);

        let mut set = SegmentSet::new();
        prop_assert!(set.toggle(fwd));
        prop_assert!(!set.toggle(rev));
        prop_assert!(set.is_empty());
    }

    #[test]
    fn chains_cover_exactly_the_odd_edges(lines in prop::collection::vec(polyline(), 0..6)) {
        let inputs: Vec<BasicSegmentString<usize>> = lines
            .iter()
            .enumerate()
            .map(|(i, pts)| BasicSegmentString::from_points(pts.iter().copied(), i))
            .collect();

        let mut counts: FxHashMap<([i64; 2], [i64; 2]), usize> = FxHashMap::default();
        for pts in &lines {
            for w in pts.windows(2) {
                *counts.entry(undirected(w[0], w[1])).or_insert(0) += 1;
            }
        }
        let odd = counts.values().filter(|&&c| c % 2 == 1).count();

        let chains = node(&inputs);
        let mut emitted: FxHashMap<([i64; 2], [i64; 2]), usize> = FxHashMap::default();
        for chain in &chains {
            prop_assert!(chain.size() >= 2);
            let pts: Vec<[f64; 2]> = chain.coordinates().map(|c| [c.x, c.y]).collect();
            for w in pts.windows(2) {
                *emitted.entry(undirected(w[0], w[1])).or_insert(0) += 1;
            }
        }

        // Every odd edge is emitted exactly once, nothing else is emitted.
        prop_assert_eq!(emitted.len(), odd);
        for (edge, n) in &emitted {
            prop_assert_eq!(*n, 1);
            prop_assert_eq!(counts[edge] % 2, 1);
        }
    }

    #[test]
    fn chains_are_in_order_windows_of_their_source(lines in prop::collection::vec(polyline(), 1..6)) {
        let inputs: Vec<BasicSegmentString<usize>> = lines
            .iter()
            .enumerate()
            .map(|(i, pts)| BasicSegmentString::from_points(pts.iter().copied(), i))
            .collect();

        let chains = node(&inputs);

        // Chains are grouped by source in input order.
        let sources: Vec<usize> = chains.iter().map(|c| *c.data()).collect();
        let mut sorted = sources.clone();
        sorted.sort_unstable();
        prop_assert_eq!(&sources, &sorted);

        // Each chain is a sub-slice of its source, non-overlapping in edges.
        for (idx, input) in inputs.iter().enumerate() {
            let src = input.as_slice();
            let mut min_start = 0;
            for chain in chains.iter().filter(|c| *c.data() == idx) {
                let len = chain.size();
                let start = (min_start..src.len())
                    .find(|&s| s + len <= src.len() && src[s..s + len] == *chain.as_slice());
                prop_assert!(start.is_some());
                let start = start.unwrap_or_default();
                min_start = start + len - 1;
            }
        }
    }
}
