//! Dinic max-flow and the lower-bound feasibility reduction on top of it.

use std::collections::VecDeque;

/// Capacity used for arcs that must never limit the flow.
pub const UNBOUNDED: i64 = i64::MAX / 4;

#[derive(Debug, Clone, Copy)]
struct Edge {
    to: usize,
    cap: i64,
    /// Index of the paired reverse arc in `arcs`.
    rev: usize,
}

/// Residual network solved with Dinic's blocking-flow algorithm.
#[derive(Debug, Clone)]
pub struct FlowNetwork {
    adjacency: Vec<Vec<usize>>,
    arcs: Vec<Edge>,
    initial: Vec<i64>,
}

/// Handle to an arc added with [`FlowNetwork::add_arc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcId(usize);

impl FlowNetwork {
    /// Creates a network with `nodes` isolated nodes.
    pub fn new(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
            arcs: Vec::new(),
            initial: Vec::new(),
        }
    }

    /// Number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Adds an arc `from -> to` with capacity `cap` and its residual twin.
    pub fn add_arc(&mut self, from: usize, to: usize, cap: i64) -> ArcId {
        let id = self.arcs.len();
        self.arcs.push(Edge {
            to,
            cap,
            rev: id + 1,
        });
        self.arcs.push(Edge {
            to: from,
            cap: 0,
            rev: id,
        });
        self.initial.push(cap);
        self.initial.push(0);
        self.adjacency[from].push(id);
        self.adjacency[to].push(id + 1);
        ArcId(id)
    }

    /// Flow currently routed over `arc`.
    pub fn flow(&self, arc: ArcId) -> i64 {
        self.initial[arc.0] - self.arcs[arc.0].cap
    }

    /// Pushes as much flow as possible from `source` to `sink` and returns the amount.
    pub fn max_flow(&mut self, source: usize, sink: usize) -> i64 {
        if source == sink {
            return 0;
        }
        let mut total = 0i64;
        let mut level = vec![-1i32; self.num_nodes()];
        let mut cursor = vec![0usize; self.num_nodes()];
        while self.build_levels(source, sink, &mut level) {
            cursor.iter_mut().for_each(|c| *c = 0);
            loop {
                let pushed = self.augment(source, sink, UNBOUNDED, &level, &mut cursor);
                if pushed == 0 {
                    break;
                }
                total += pushed;
            }
        }
        total
    }

    fn build_levels(&self, source: usize, sink: usize, level: &mut [i32]) -> bool {
        level.iter_mut().for_each(|l| *l = -1);
        level[source] = 0;
        let mut queue = VecDeque::from([source]);
        while let Some(node) = queue.pop_front() {
            for &id in &self.adjacency[node] {
                let arc = &self.arcs[id];
                if arc.cap > 0 && level[arc.to] < 0 {
                    level[arc.to] = level[node] + 1;
                    queue.push_back(arc.to);
                }
            }
        }
        level[sink] >= 0
    }

    fn augment(
        &mut self,
        node: usize,
        sink: usize,
        limit: i64,
        level: &[i32],
        cursor: &mut [usize],
    ) -> i64 {
        if node == sink {
            return limit;
        }
        while cursor[node] < self.adjacency[node].len() {
            let id = self.adjacency[node][cursor[node]];
            let Edge { to, cap, rev } = self.arcs[id];
            if cap > 0 && level[to] == level[node] + 1 {
                let pushed = self.augment(to, sink, limit.min(cap), level, cursor);
                if pushed > 0 {
                    self.arcs[id].cap -= pushed;
                    self.arcs[rev].cap += pushed;
                    return pushed;
                }
            }
            cursor[node] += 1;
        }
        0
    }
}

/// Flow network whose arcs carry `[lower, upper]` capacity ranges.
///
/// Lower bounds are removed by the standard transform: each arc keeps
/// `upper - lower` residual capacity and its lower bound becomes a supply at
/// the head and a demand at the tail. A super-source feeds all supplies, a
/// super-sink drains all demands, and a feasible circulation exists iff that
/// auxiliary max-flow saturates every supply arc.
#[derive(Debug, Clone)]
pub struct BoundedFlow {
    network: FlowNetwork,
    balance: Vec<i64>,
    lowers: Vec<i64>,
    arcs: Vec<ArcId>,
    nodes: usize,
}

/// Handle to an arc added with [`BoundedFlow::add_arc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedArcId(usize);

impl BoundedFlow {
    /// Creates a problem over `nodes` nodes. Two auxiliary nodes are appended internally.
    pub fn new(nodes: usize) -> Self {
        Self {
            network: FlowNetwork::new(nodes + 2),
            balance: vec![0; nodes],
            lowers: Vec::new(),
            arcs: Vec::new(),
            nodes,
        }
    }

    /// Adds an arc whose flow must lie in `[lower, upper]`. Requires `lower <= upper`.
    pub fn add_arc(&mut self, from: usize, to: usize, lower: i64, upper: i64) -> BoundedArcId {
        debug_assert!(0 <= lower && lower <= upper);
        let arc = self.network.add_arc(from, to, upper - lower);
        self.balance[to] += lower;
        self.balance[from] -= lower;
        self.lowers.push(lower);
        self.arcs.push(arc);
        BoundedArcId(self.arcs.len() - 1)
    }

    /// Solves the feasibility problem. Returns true when a feasible circulation exists.
    ///
    /// Must be called at most once per problem.
    pub fn solve(&mut self) -> bool {
        let super_source = self.nodes;
        let super_sink = self.nodes + 1;
        let mut required = 0i64;
        for node in 0..self.nodes {
            let balance = self.balance[node];
            if balance > 0 {
                self.network.add_arc(super_source, node, balance);
                required += balance;
            } else if balance < 0 {
                self.network.add_arc(node, super_sink, -balance);
            }
        }
        let routed = self.network.max_flow(super_source, super_sink);
        log::debug!("bounded flow: routed {routed} of {required} mandatory units");
        routed == required
    }

    /// Flow over `arc` in the solved circulation, lower bound included.
    pub fn flow(&self, arc: BoundedArcId) -> i64 {
        self.lowers[arc.0] + self.network.flow(self.arcs[arc.0])
    }
}
