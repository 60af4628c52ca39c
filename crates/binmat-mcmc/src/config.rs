use serde::{Deserialize, Serialize};

use crate::metrics::MoveKind;

/// Move sets available for fixed-margin chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixedChainKind {
    /// Checkerboard 2x2 switch on uniformly chosen rows and columns.
    KtvSwitch,
    /// Switch proposed on two uniformly chosen one-entries.
    EdgeSwitch,
    /// Curveball trade between two uniformly chosen rows.
    Curveball,
}

impl FixedChainKind {
    /// The single move kind this chain performs on every step.
    pub fn move_kind(&self) -> MoveKind {
        match self {
            FixedChainKind::KtvSwitch => MoveKind::Switch,
            FixedChainKind::EdgeSwitch => MoveKind::EdgeSwitch,
            FixedChainKind::Curveball => MoveKind::Curveball,
        }
    }

    /// Name of the chain as accepted by method selection.
    pub fn as_str(&self) -> &'static str {
        match self {
            FixedChainKind::KtvSwitch => "ktv-switch",
            FixedChainKind::EdgeSwitch => "edge-switch",
            FixedChainKind::Curveball => "curveball",
        }
    }
}

/// Move sets available for interval-margin chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntervalChainKind {
    /// Uniform mixture of flip, row shift, column shift and switch.
    Simple,
    /// As [`IntervalChainKind::Simple`] with a bound-aware flip proposal.
    Informed,
}

impl IntervalChainKind {
    /// Moves drawn with equal probability on every step.
    pub fn moves(&self) -> [MoveKind; 4] {
        let flip = match self {
            IntervalChainKind::Simple => MoveKind::Flip,
            IntervalChainKind::Informed => MoveKind::InformedFlip,
        };
        [flip, MoveKind::RowShift, MoveKind::ColumnShift, MoveKind::Switch]
    }

    /// Name of the chain as accepted by method selection.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalChainKind::Simple => "simple",
            IntervalChainKind::Informed => "informed",
        }
    }
}
