mod general;
mod purpose;

pub use general::score_general;
pub use purpose::score_purpose;

/// Score of the first `(minimum, score)` tier the value reaches, highest tier first.
/// Absent values and values below every tier take `fallback`.
pub(crate) fn tiered(value: Option<u32>, tiers: &[(u32, u8)], fallback: u8) -> u8 {
    value
        .and_then(|value| {
            tiers
                .iter()
                .find(|(minimum, _)| value >= *minimum)
                .map(|(_, score)| *score)
        })
        .unwrap_or(fallback)
}

pub(crate) fn size_reason(gb: Option<u32>) -> String {
    match gb {
        Some(gb) => format!("{gb} GB"),
        None => "Not specified".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::tiered;

    #[test]
    fn tiered_picks_first_reached_threshold() {
        let tiers = [(16, 100), (8, 80), (1, 40)];
        assert_eq!(tiered(Some(32), &tiers, 30), 100);
        assert_eq!(tiered(Some(16), &tiers, 30), 100);
        assert_eq!(tiered(Some(15), &tiers, 30), 80);
        assert_eq!(tiered(Some(4), &tiers, 30), 40);
        assert_eq!(tiered(None, &tiers, 30), 30);
    }
}
