//! Deterministic synthetic edge lists. All O(nodes + edges), single-threaded.

use std::collections::VecDeque;

use csr_graph_core::NodeId;

pub type EdgeList = Vec<(NodeId, NodeId)>;

/// A named generator: `(mode, description, function)`.
pub type Generator = (&'static str, &'static str, fn(u64) -> EdgeList);

pub const GENERATORS: [Generator; 6] = [
    ("star", "Star with short chains and a 3-cycle", gen_star_cycles),
    ("linear", "Linear chain 0→1→…→n-1", gen_linear),
    ("tree", "Branching tree (deep paths)", gen_tree),
    ("scalefree", "Preferential attachment via edge sampling (hub-and-spoke)", gen_scale_free),
    ("smallworld", "Watts-Strogatz ring lattice + shortcuts", gen_small_world),
    ("random", "Erdos-Renyi uniform random edges", gen_random),
];

pub fn find(mode: &str) -> Option<Generator> {
    GENERATORS.iter().copied().find(|(name, _, _)| *name == mode)
}

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn id(n: u64) -> NodeId {
    n as NodeId
}

/// Hub 0 pointing at every other node, plus short chains every fifth node
/// and a 5→10→15→5 cycle. The cycle needs node 15 to exist, so it is only
/// added when there are more than 15 nodes.
pub fn gen_star_cycles(node_count: u64) -> EdgeList {
    let mut edges = Vec::new();
    for i in 1..node_count {
        edges.push((0, id(i)));
    }
    let mut i = 1;
    while i + 1 < node_count {
        edges.push((id(i), id(i + 1)));
        if i + 2 < node_count {
            edges.push((id(i + 1), id(i + 2)));
        }
        i += 5;
    }
    if node_count > 15 {
        edges.extend([(5, 10), (10, 15), (15, 5)]);
    }
    edges
}

/// Chain 0→1→…→n-1. BFS depth `d` from 0 reaches exactly `d + 1` nodes.
pub fn gen_linear(node_count: u64) -> EdgeList {
    (0..node_count.saturating_sub(1))
        .map(|i| (id(i), id(i + 1)))
        .collect()
}

/// Each node spawns three children, breadth first. Log depth, exponential width.
pub fn gen_tree(node_count: u64) -> EdgeList {
    let branching = 3u64;
    let mut edges = Vec::with_capacity(node_count as usize);
    let mut next_id: u64 = 1;
    let mut frontier: VecDeque<u64> = VecDeque::from([0]);

    while next_id < node_count {
        let Some(parent) = frontier.pop_front() else {
            break;
        };
        for _ in 0..branching {
            if next_id >= node_count {
                break;
            }
            edges.push((id(parent), id(next_id)));
            frontier.push_back(next_id);
            next_id += 1;
        }
    }
    edges
}

/// Preferential attachment by picking a random endpoint of an existing edge.
/// Nodes with more edges are proportionally more likely to be picked.
pub fn gen_scale_free(node_count: u64) -> EdgeList {
    let edges_per_node = 10u64;
    let seed = 5u64.min(node_count);
    let mut rng = FastRng::new(12345);
    let mut edges = Vec::with_capacity((node_count * edges_per_node) as usize);
    let mut endpoints: Vec<u64> = Vec::with_capacity((node_count * edges_per_node * 2) as usize);

    // Seed: small clique
    for i in 0..seed {
        for j in (i + 1)..seed {
            edges.push((id(i), id(j)));
            endpoints.extend([i, j]);
        }
    }

    for new_node in seed..node_count {
        if endpoints.is_empty() {
            break;
        }
        for _ in 0..edges_per_node.min(new_node) {
            let target = endpoints[rng.next(endpoints.len() as u64) as usize];
            if target != new_node {
                edges.push((id(new_node), id(target)));
                endpoints.extend([new_node, target]);
            }
        }
    }
    edges
}

/// Ring lattice where each node links to its K forward neighbors, each link
/// rewired to a random node with probability p.
pub fn gen_small_world(node_count: u64) -> EdgeList {
    let k = 10u64.min(node_count.saturating_sub(1));
    let p = 0.05f64;
    let mut rng = FastRng::new(67890);
    let mut edges = Vec::with_capacity((node_count * k) as usize);

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            let target = if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                if rewired != i {
                    rewired
                } else {
                    neighbor
                }
            } else {
                neighbor
            };
            edges.push((id(i), id(target)));
        }
    }
    edges
}

/// Uniform random edges, about ten per node, no self-loops.
pub fn gen_random(node_count: u64) -> EdgeList {
    if node_count < 2 {
        return Vec::new();
    }
    let mut rng = FastRng::new(54321);
    let target_edges = node_count * 10;
    let mut edges = Vec::with_capacity(target_edges as usize);
    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            edges.push((id(from), id(to)));
        }
    }
    edges
}
