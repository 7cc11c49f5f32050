//! Budget fit: how well a price sits inside a traveller's budget tier.

use catalog::BudgetTier;

/// Multiplier used when the traveller has no recognised tier.
pub const NEUTRAL_BUDGET_SCORE: f64 = 0.5;

/// Score a price against a tier, in `0.0..=1.0`.
///
/// - inside the inclusive `[min, max]` range: 1.0
/// - below `min`: `1 - (min - price) / min`, floored at 0
/// - above `max`: `1 - (price - max) / max`, floored at 0
/// - no tier: [`NEUTRAL_BUDGET_SCORE`]
pub fn budget_score(price: f64, tier: Option<BudgetTier>) -> f64 {
    let Some(tier) = tier else {
        return NEUTRAL_BUDGET_SCORE;
    };
    let (min, max) = tier.range();

    if price >= min && price <= max {
        return 1.0;
    }
    // min == 0 can't be reached here: any price below it would be negative
    if price < min {
        if min <= 0.0 {
            return 0.0;
        }
        return (1.0 - (min - price) / min).max(0.0);
    }
    if max <= 0.0 {
        return 0.0;
    }
    (1.0 - (price - max) / max).max(0.0)
}
