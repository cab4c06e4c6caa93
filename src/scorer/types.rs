use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredResidue {
    // 1-based
    pub position: usize,
    #[serde(rename = "aminoAcid")]
    pub symbol: char,
    #[serde(rename = "pValue")]
    pub raw_score: f64,
}

/// One chart point: the raw residue plus its trailing-window mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothedPoint {
    #[serde(flatten)]
    pub residue: ScoredResidue,
    pub rolling_mean: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothedSeries {
    pub window: usize,
    pub points: Vec<SmoothedPoint>,
}

impl SmoothedSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn smoothed_values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.rolling_mean).collect()
    }
}
