use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Kind of elementary move performed by a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MoveKind {
    /// Checkerboard 2x2 switch.
    Switch,
    /// Switch proposed on two one-entries.
    EdgeSwitch,
    /// Curveball trade between two rows.
    Curveball,
    /// Toggle of a uniformly chosen cell.
    Flip,
    /// Toggle proposed from rows and columns with slack, Metropolis–Hastings corrected.
    InformedFlip,
    /// Move of a one along a row.
    RowShift,
    /// Move of a one along a column.
    ColumnShift,
}

impl MoveKind {
    /// Stable label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveKind::Switch => "switch",
            MoveKind::EdgeSwitch => "edge-switch",
            MoveKind::Curveball => "curveball",
            MoveKind::Flip => "flip",
            MoveKind::InformedFlip => "informed-flip",
            MoveKind::RowShift => "row-shift",
            MoveKind::ColumnShift => "column-shift",
        }
    }
}

/// Proposal and acceptance counters of one chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStats {
    proposed: BTreeMap<MoveKind, u64>,
    accepted: BTreeMap<MoveKind, u64>,
    samples: u64,
}

impl ChainStats {
    /// Records one step of `kind`. Rejected moves still count as proposed.
    pub fn record(&mut self, kind: MoveKind, accepted: bool) {
        *self.proposed.entry(kind).or_insert(0) += 1;
        if accepted {
            *self.accepted.entry(kind).or_insert(0) += 1;
        }
    }

    pub(crate) fn record_sample(&mut self) {
        self.samples += 1;
    }

    /// Total number of steps taken.
    pub fn steps(&self) -> u64 {
        self.proposed.values().sum()
    }

    /// Number of steps that changed the matrix.
    pub fn transitions(&self) -> u64 {
        self.accepted.values().sum()
    }

    /// Number of samples emitted.
    pub fn samples(&self) -> u64 {
        self.samples
    }

    /// Steps proposed for `kind`.
    pub fn proposed(&self, kind: MoveKind) -> u64 {
        self.proposed.get(&kind).copied().unwrap_or(0)
    }

    /// Steps accepted for `kind`.
    pub fn accepted(&self, kind: MoveKind) -> u64 {
        self.accepted.get(&kind).copied().unwrap_or(0)
    }

    /// Acceptance rate per move kind, keyed by [`MoveKind::as_str`].
    pub fn acceptance_rates(&self) -> BTreeMap<String, f64> {
        self.proposed
            .iter()
            .map(|(kind, &proposed)| {
                let accepted = self.accepted(*kind);
                let rate = if proposed == 0 {
                    0.0
                } else {
                    accepted as f64 / proposed as f64
                };
                (kind.as_str().to_string(), rate)
            })
            .collect()
    }
}
