use std::fmt;
use std::str::FromStr;

use binmat_core::{BinmatError, ErrorInfo};
use binmat_mcmc::{FixedChainKind, IntervalChainKind};
use serde::{Deserialize, Serialize};

/// Sampling methods accepted for fixed margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixedMethod {
    /// Exact uniform sampler.
    Exact,
    /// Classical switch chain.
    KtvSwitch,
    /// Edge switch chain.
    EdgeSwitch,
    /// Curveball chain.
    Curveball,
}

impl FixedMethod {
    /// Every fixed-margin method, in vocabulary order.
    pub const ALL: [FixedMethod; 4] = [
        FixedMethod::Exact,
        FixedMethod::KtvSwitch,
        FixedMethod::EdgeSwitch,
        FixedMethod::Curveball,
    ];

    /// Method name as written in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            FixedMethod::Exact => "exact",
            FixedMethod::KtvSwitch => FixedChainKind::KtvSwitch.as_str(),
            FixedMethod::EdgeSwitch => FixedChainKind::EdgeSwitch.as_str(),
            FixedMethod::Curveball => FixedChainKind::Curveball.as_str(),
        }
    }

    /// Chain backing this method, or `None` for the exact sampler.
    pub fn chain_kind(&self) -> Option<FixedChainKind> {
        match self {
            FixedMethod::Exact => None,
            FixedMethod::KtvSwitch => Some(FixedChainKind::KtvSwitch),
            FixedMethod::EdgeSwitch => Some(FixedChainKind::EdgeSwitch),
            FixedMethod::Curveball => Some(FixedChainKind::Curveball),
        }
    }
}

impl FromStr for FixedMethod {
    type Err = BinmatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        FixedMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == name)
            .ok_or_else(|| unknown(name, "fixed", FixedMethod::ALL.map(|m| m.as_str())))
    }
}

impl fmt::Display for FixedMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampling methods accepted for interval margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IntervalMethod {
    /// Exact uniform sampler.
    Exact,
    /// Flip, shift and switch mixture.
    Simple,
    /// Mixture with the bound-aware flip.
    Informed,
}

impl IntervalMethod {
    /// Every interval-margin method, in vocabulary order.
    pub const ALL: [IntervalMethod; 3] =
        [IntervalMethod::Exact, IntervalMethod::Simple, IntervalMethod::Informed];

    /// Method name as written in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            IntervalMethod::Exact => "exact",
            IntervalMethod::Simple => IntervalChainKind::Simple.as_str(),
            IntervalMethod::Informed => IntervalChainKind::Informed.as_str(),
        }
    }

    /// Chain backing this method, or `None` for the exact sampler.
    pub fn chain_kind(&self) -> Option<IntervalChainKind> {
        match self {
            IntervalMethod::Exact => None,
            IntervalMethod::Simple => Some(IntervalChainKind::Simple),
            IntervalMethod::Informed => Some(IntervalChainKind::Informed),
        }
    }
}

impl FromStr for IntervalMethod {
    type Err = BinmatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        IntervalMethod::ALL
            .into_iter()
            .find(|method| method.as_str() == name)
            .ok_or_else(|| unknown(name, "interval", IntervalMethod::ALL.map(|m| m.as_str())))
    }
}

impl fmt::Display for IntervalMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn unknown<const N: usize>(name: &str, margins: &str, valid: [&str; N]) -> BinmatError {
    BinmatError::UnknownGenerator(
        ErrorInfo::new("unknown-method", format!("no {margins}-margin method named '{name}'"))
            .with_context("method", name)
            .with_context("margins", margins)
            .with_hint(format!("expected one of: {}", valid.join(", "))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for method in FixedMethod::ALL {
            assert_eq!(method.as_str().parse::<FixedMethod>().unwrap(), method);
        }
        for method in IntervalMethod::ALL {
            assert_eq!(method.to_string().parse::<IntervalMethod>().unwrap(), method);
        }
    }

    #[test]
    fn chain_names_belong_to_their_margins() {
        assert!("curveball".parse::<IntervalMethod>().is_err());
        assert!("informed".parse::<FixedMethod>().is_err());
        let err = "Exact".parse::<FixedMethod>().unwrap_err();
        assert_eq!(err.info().code, "unknown-method");
        assert!(err.info().hint.as_deref().unwrap().contains("ktv-switch"));
    }
}
