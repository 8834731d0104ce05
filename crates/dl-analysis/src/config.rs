//! Analyzer configuration.

use serde::{Deserialize, Serialize};

/// Configuration for [`DileptonAnalyzer`](crate::DileptonAnalyzer).
///
/// Carries the two collection labels the analyzer reads from each event,
/// plus the kinematic thresholds for the dimuon pairing. All fields default
/// to the standard values, so an empty config file (`{}`) is valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Label of the electron collection in the event record.
    pub electron_src: String,
    /// Label of the muon collection in the event record.
    pub muon_src: String,
    /// Minimum pt (exclusive) for a muon to enter the mass pairing.
    pub pair_min_pt: f64,
    /// Maximum |eta| (exclusive) for a muon to enter the mass pairing.
    pub pair_max_abs_eta: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            electron_src: "slimmedElectrons".to_owned(),
            muon_src: "slimmedMuons".to_owned(),
            pair_min_pt: 20.0,
            pair_max_abs_eta: 2.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let cfg: AnalyzerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.electron_src, "slimmedElectrons");
        assert_eq!(cfg.muon_src, "slimmedMuons");
        assert_eq!(cfg.pair_min_pt, 20.0);
        assert_eq!(cfg.pair_max_abs_eta, 2.1);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let cfg: AnalyzerConfig =
            serde_json::from_str(r#"{"muon_src": "looseMuons", "pair_min_pt": 25.0}"#).unwrap();
        assert_eq!(cfg.muon_src, "looseMuons");
        assert_eq!(cfg.pair_min_pt, 25.0);
        assert_eq!(cfg.electron_src, "slimmedElectrons");
    }
}
