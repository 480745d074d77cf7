/// Coarse rating derived from a 0-100 sustainability score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SustainabilityBand {
    Excellent,
    Good,
    Average,
    Poor,
}

impl SustainabilityBand {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Average,
            _ => Self::Poor,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Poor => "Poor",
        }
    }

    /// Hex colour used when rendering the band.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#28a745",
            Self::Good => "#ffc107",
            Self::Average => "#fd7e14",
            Self::Poor => "#dc3545",
        }
    }
}
