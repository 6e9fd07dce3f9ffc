//! Classification of raw recommendation scores into display categories.
//!
//! The feed carries a numeric score in `[-1, 1]`; everything here is pure and
//! total, so render code can call it per record without precondition checks.

use serde::Serialize;

use crate::format::score_text;

/// The classifier's output bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Score at or above the buy floor (0.2).
    Buy,
    /// Score strictly between -0.2 and 0.2.
    Hold,
    /// Score at or below -0.2.
    Sell,
    /// No usable score.
    Unknown,
}

/// How one recommendation value should be displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationDisplay {
    /// The display bucket.
    pub category: Category,
    /// Japanese display label (「買い推奨」 etc.); `-` for unknown.
    pub label: &'static str,
    /// Clamped score retained for display; `None` for [`Category::Unknown`].
    pub score: Option<f64>,
    /// CSS class hook for the rendering shell; empty for unknown.
    pub style_hint: &'static str,
}

impl RecommendationDisplay {
    /// `「買い推奨 (0.40)」`-style cell text, or `-` when there is no score.
    #[must_use]
    pub fn text(&self) -> String {
        if self.score.is_none() {
            "-".to_string()
        } else {
            format!("{} ({})", self.label, score_text(self.score))
        }
    }
}

/// Clamp a raw score into `[-1, 1]`. Absent or non-finite input is `None`.
///
/// Idempotent: `clamp_score(clamp_score(v)) == clamp_score(v)`.
#[must_use]
pub fn clamp_score(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite()).map(|v| v.clamp(-1.0, 1.0))
}

/// Map a raw recommendation value to its display category, label, and score.
///
/// Thresholds on the clamped score `s`:
///
/// | range              | category | label          |
/// |--------------------|----------|----------------|
/// | `s > 0.6`          | buy      | 強い買い推奨   |
/// | `0.2 <= s <= 0.6`  | buy      | 買い推奨       |
/// | `-0.2 < s < 0.2`   | hold     | 中立           |
/// | `-0.6 <= s <= -0.2`| sell     | 売り推奨       |
/// | `s < -0.6`         | sell     | 強い売り推奨   |
#[must_use]
pub fn classify(value: Option<f64>) -> RecommendationDisplay {
    let Some(score) = clamp_score(value) else {
        return RecommendationDisplay {
            category: Category::Unknown,
            label: "-",
            score: None,
            style_hint: "",
        };
    };

    let (category, label, style_hint) = if score > 0.6 {
        (Category::Buy, "強い買い推奨", "recommendation-buy")
    } else if score >= 0.2 {
        (Category::Buy, "買い推奨", "recommendation-buy")
    } else if score > -0.2 {
        (Category::Hold, "中立", "recommendation-hold")
    } else if score >= -0.6 {
        (Category::Sell, "売り推奨", "recommendation-sell")
    } else {
        (Category::Sell, "強い売り推奨", "recommendation-sell")
    };

    RecommendationDisplay {
        category,
        label,
        score: Some(score),
        style_hint,
    }
}
