use binmat_core::errors::ErrorInfo;
use binmat_core::{
    BinaryMatrix, BinmatError, FixedInstance, IntervalInstance, RandomGenerator, RngHandle,
};
use binmat_realize::{realize_fixed, realize_interval};
use rand::Rng;

use crate::config::{FixedChainKind, IntervalChainKind};
use crate::metrics::{ChainStats, MoveKind};
use crate::moves_fixed;
use crate::moves_interval::{self, IntervalState};

/// Markov chain over matrices with fixed margins.
///
/// The chain is never restarted: each [`draw`](RandomGenerator::draw) advances
/// the current matrix by `steps` moves and returns a copy of the result.
#[derive(Debug, Clone)]
pub struct FixedMarginChain {
    matrix: BinaryMatrix,
    edges: Vec<(usize, usize)>,
    kind: FixedChainKind,
    steps: usize,
    rng: RngHandle,
    stats: ChainStats,
}

impl FixedMarginChain {
    /// Starts the chain from a constructive realization of `instance`.
    ///
    /// Fails with [`BinmatError::Infeasible`] when the margins are not realizable.
    pub fn new(
        instance: &FixedInstance,
        kind: FixedChainKind,
        steps: usize,
        seed: u64,
    ) -> Result<Self, BinmatError> {
        let initial = realize_fixed(instance)?;
        Ok(Self::start(initial, kind, steps, seed))
    }

    /// Starts the chain from a caller supplied matrix with exactly the margins of `instance`.
    pub fn with_initial(
        instance: &FixedInstance,
        initial: BinaryMatrix,
        kind: FixedChainKind,
        steps: usize,
        seed: u64,
    ) -> Result<Self, BinmatError> {
        if !instance.is_satisfied_by(&initial) {
            return Err(BinmatError::InvalidInstance(
                ErrorInfo::new("initial-state-mismatch", "initial matrix violates the margins")
                    .with_context("rows", initial.num_rows())
                    .with_context("cols", initial.num_cols()),
            ));
        }
        Ok(Self::start(initial, kind, steps, seed))
    }

    fn start(initial: BinaryMatrix, kind: FixedChainKind, steps: usize, seed: u64) -> Self {
        let edges = match kind {
            FixedChainKind::EdgeSwitch => moves_fixed::edge_list(&initial),
            FixedChainKind::KtvSwitch | FixedChainKind::Curveball => Vec::new(),
        };
        log::debug!(
            "{:?} chain on {}x{} matrix, {} steps per sample",
            kind,
            initial.num_rows(),
            initial.num_cols(),
            steps
        );
        Self {
            matrix: initial,
            edges,
            kind,
            steps,
            rng: RngHandle::from_seed(seed),
            stats: ChainStats::default(),
        }
    }

    /// Performs a single move and returns whether the matrix changed.
    pub fn step(&mut self) -> bool {
        let changed = match self.kind {
            FixedChainKind::KtvSwitch => moves_fixed::propose_switch(&mut self.matrix, &mut self.rng),
            FixedChainKind::EdgeSwitch => {
                moves_fixed::propose_edge_switch(&mut self.matrix, &mut self.edges, &mut self.rng)
            }
            FixedChainKind::Curveball => {
                moves_fixed::propose_curveball(&mut self.matrix, &mut self.rng)
            }
        };
        self.stats.record(self.kind.move_kind(), changed);
        changed
    }

    /// Current matrix.
    pub fn current(&self) -> &BinaryMatrix {
        &self.matrix
    }

    /// Move set of the chain.
    pub fn kind(&self) -> FixedChainKind {
        self.kind
    }

    /// Moves applied per sample.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Proposal and acceptance counters.
    pub fn stats(&self) -> &ChainStats {
        &self.stats
    }

    /// Seed the chain was started with.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl RandomGenerator for FixedMarginChain {
    fn draw(&mut self) -> BinaryMatrix {
        for _ in 0..self.steps {
            self.step();
        }
        self.stats.record_sample();
        self.matrix.clone()
    }

    fn shape(&self) -> (usize, usize) {
        (self.matrix.num_rows(), self.matrix.num_cols())
    }
}

/// Markov chain over matrices whose sums lie inside interval bounds.
#[derive(Debug, Clone)]
pub struct IntervalMarginChain {
    state: IntervalState,
    kind: IntervalChainKind,
    steps: usize,
    rng: RngHandle,
    stats: ChainStats,
}

impl IntervalMarginChain {
    /// Starts the chain from the bounded-flow realization of `instance`.
    ///
    /// Fails with [`BinmatError::Infeasible`] when the bounds are not realizable.
    pub fn new(
        instance: &IntervalInstance,
        kind: IntervalChainKind,
        steps: usize,
        seed: u64,
    ) -> Result<Self, BinmatError> {
        let initial = realize_interval(instance)?;
        log::debug!(
            "{:?} interval chain on {}x{} matrix, {} steps per sample",
            kind,
            initial.num_rows(),
            initial.num_cols(),
            steps
        );
        Ok(Self {
            state: IntervalState::new(instance, initial),
            kind,
            steps,
            rng: RngHandle::from_seed(seed),
            stats: ChainStats::default(),
        })
    }

    /// Performs a single move and returns whether the matrix changed.
    pub fn step(&mut self) -> bool {
        let moves = self.kind.moves();
        let kind = moves[self.rng.gen_range(0..moves.len())];
        let changed = match kind {
            MoveKind::Flip => moves_interval::propose_flip(&mut self.state, &mut self.rng),
            MoveKind::InformedFlip => {
                moves_interval::propose_informed_flip(&mut self.state, &mut self.rng)
            }
            MoveKind::RowShift => moves_interval::propose_row_shift(&mut self.state, &mut self.rng),
            MoveKind::ColumnShift => {
                moves_interval::propose_column_shift(&mut self.state, &mut self.rng)
            }
            MoveKind::Switch => moves_interval::propose_switch(&mut self.state, &mut self.rng),
            MoveKind::EdgeSwitch | MoveKind::Curveball => {
                unreachable!("{kind:?} is not part of an interval move set")
            }
        };
        self.stats.record(kind, changed);
        changed
    }

    /// Current matrix.
    pub fn current(&self) -> &BinaryMatrix {
        self.state.matrix()
    }

    /// Move set of the chain.
    pub fn kind(&self) -> IntervalChainKind {
        self.kind
    }

    /// Moves applied per sample.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Proposal and acceptance counters.
    pub fn stats(&self) -> &ChainStats {
        &self.stats
    }

    /// Seed the chain was started with.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl RandomGenerator for IntervalMarginChain {
    fn draw(&mut self) -> BinaryMatrix {
        for _ in 0..self.steps {
            self.step();
        }
        self.stats.record_sample();
        self.state.matrix().clone()
    }

    fn shape(&self) -> (usize, usize) {
        let matrix = self.state.matrix();
        (matrix.num_rows(), matrix.num_cols())
    }
}
