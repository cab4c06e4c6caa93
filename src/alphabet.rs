use strum::IntoEnumIterator;
use strum_macros::EnumIter;

/// Fallback score for any symbol outside the reference table
/// (ambiguous codes like `X`, stop `*`, gaps).
pub const DEFAULT_FALLBACK: f64 = 5.0;

/// The 20 standard amino acids, in legend order.
#[derive(Debug, Clone, Copy, EnumIter, PartialEq, Eq, Hash)]
pub enum AminoAcid {
    Alanine,
    Arginine,
    Asparagine,
    AsparticAcid,
    Cysteine,
    GlutamicAcid,
    Glutamine,
    Glycine,
    Histidine,
    Isoleucine,
    Leucine,
    Lysine,
    Methionine,
    Phenylalanine,
    Proline,
    Serine,
    Threonine,
    Tryptophan,
    Tyrosine,
    Valine,
}

impl AminoAcid {
    pub fn code(&self) -> char {
        match self {
            Self::Alanine => 'A',
            Self::Arginine => 'R',
            Self::Asparagine => 'N',
            Self::AsparticAcid => 'D',
            Self::Cysteine => 'C',
            Self::GlutamicAcid => 'E',
            Self::Glutamine => 'Q',
            Self::Glycine => 'G',
            Self::Histidine => 'H',
            Self::Isoleucine => 'I',
            Self::Leucine => 'L',
            Self::Lysine => 'K',
            Self::Methionine => 'M',
            Self::Phenylalanine => 'F',
            Self::Proline => 'P',
            Self::Serine => 'S',
            Self::Threonine => 'T',
            Self::Tryptophan => 'W',
            Self::Tyrosine => 'Y',
            Self::Valine => 'V',
        }
    }

    // Isoelectric points (pI), shown in the UI as "P-Value".
    pub fn reference_score(&self) -> f64 {
        match self {
            Self::Alanine => 6.11,
            Self::Arginine => 10.76,
            Self::Asparagine => 5.4,
            Self::AsparticAcid => 2.98,
            Self::Cysteine => 5.15,
            Self::GlutamicAcid => 3.08,
            Self::Glutamine => 5.65,
            Self::Glycine => 6.06,
            Self::Histidine => 7.64,
            Self::Isoleucine => 6.04,
            Self::Leucine => 6.04,
            Self::Lysine => 9.47,
            Self::Methionine => 5.71,
            Self::Phenylalanine => 5.76,
            Self::Proline => 6.30,
            Self::Serine => 5.70,
            Self::Threonine => 5.60,
            Self::Tryptophan => 5.88,
            Self::Tyrosine => 5.63,
            Self::Valine => 6.02,
        }
    }
}

pub fn reference_entries() -> Vec<(char, f64)> {
    AminoAcid::iter()
        .map(|aa| (aa.code(), aa.reference_score()))
        .collect()
}
