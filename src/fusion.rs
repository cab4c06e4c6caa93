use crate::error::FvResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use strum_macros::Display;
use tracing::info;

/// Host/target gene pair shown on one card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FusionPair {
    #[serde(rename = "hgene_name")]
    pub host_gene_name: String,
    #[serde(rename = "tgene_name")]
    pub target_gene_name: String,
    #[serde(rename = "hgene_seq", default)]
    pub host_sequence: String,
    #[serde(rename = "tgene_seq", default)]
    pub target_sequence: String,
    #[serde(rename = "seq_desc", default, skip_serializing_if = "Option::is_none")]
    pub analysis_description: Option<String>,
    #[serde(rename = "isOutOfFrame", default)]
    pub is_out_of_frame: bool,
    #[serde(rename = "isAnalyzed", default)]
    pub is_analyzed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum StatusBadge {
    #[strum(serialize = "In Frame")]
    InFrame,
    #[strum(serialize = "Out of Frame")]
    OutOfFrame,
    #[strum(serialize = "Analyzed")]
    Analyzed,
    #[strum(serialize = "Pending")]
    Pending,
}

impl StatusBadge {
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::OutOfFrame | Self::Pending)
    }
}

impl FusionPair {
    /// Frame badge first, then analysis badge.
    pub fn badges(&self) -> [StatusBadge; 2] {
        let frame = if self.is_out_of_frame {
            StatusBadge::OutOfFrame
        } else {
            StatusBadge::InFrame
        };
        let analysis = if self.is_analyzed {
            StatusBadge::Analyzed
        } else {
            StatusBadge::Pending
        };
        [frame, analysis]
    }

    /// Description, if present and not blank.
    pub fn description(&self) -> Option<&str> {
        self.analysis_description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }
}

pub fn load_pairs<P: AsRef<Path>>(path: P) -> FvResult<Vec<FusionPair>> {
    let content = fs::read_to_string(&path)?;
    let pairs: Vec<FusionPair> = serde_json::from_str(&content)?;
    info!(
        "📂 Loaded {} fusion pairs from {}",
        pairs.len(),
        path.as_ref().display()
    );
    Ok(pairs)
}
