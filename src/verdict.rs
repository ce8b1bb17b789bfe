use ratatui::style::Color;
use serde::Serialize;

/// Upper bound (inclusive) of the high-risk tier.
pub const HIGH_RISK_MAX: u8 = 40;
/// Upper bound (inclusive) of the caution tier.
pub const CAUTION_MAX: u8 = 75;

/// Score band, each with its own color and wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    HighRisk,
    Caution,
    Safe,
}

impl Tier {
    #[must_use]
    pub const fn for_score(score: u8) -> Self {
        match score {
            0..=HIGH_RISK_MAX => Self::HighRisk,
            41..=CAUTION_MAX => Self::Caution,
            _ => Self::Safe,
        }
    }

    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::HighRisk => "#ef4444",
            Self::Caution => "#f59e0b",
            Self::Safe => "#22c55e",
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::HighRisk => Color::Rgb(0xef, 0x44, 0x44),
            Self::Caution => Color::Rgb(0xf5, 0x9e, 0x0b),
            Self::Safe => Color::Rgb(0x22, 0xc5, 0x5e),
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HighRisk => "High Risk",
            Self::Caution => "Caution",
            Self::Safe => "Safe",
        }
    }

    /// Sentence shown under the trust wheel.
    #[must_use]
    pub const fn headline(self) -> &'static str {
        match self {
            Self::HighRisk => "Do Not Trust",
            Self::Caution => "Proceed with Caution",
            Self::Safe => "Looks Safe",
        }
    }
}

/// Everything the trust wheel needs, derived from the score alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictPresentation {
    pub score: u8,
    pub tier: Tier,
    pub color: Color,
    pub label: &'static str,
    pub headline: &'static str,
    pub gauge_fraction: f64,
}

/// Clamp a raw service score into 0..=100.
#[must_use]
pub fn clamp_score(score: i64) -> u8 {
    // Safe: clamped into u8 range first
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        score.clamp(0, 100) as u8
    }
}

/// Map a trust score to its presentation.
///
/// Out-of-range scores are clamped first, so the gauge never over- or under-fills.
#[must_use]
pub fn render(score: i64) -> VerdictPresentation {
    let score = clamp_score(score);
    let tier = Tier::for_score(score);

    VerdictPresentation {
        score,
        tier,
        color: tier.color(),
        label: tier.label(),
        headline: tier.headline(),
        gauge_fraction: f64::from(score) / 100.0,
    }
}
