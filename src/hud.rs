//! Text and progress values for the presentation layer.

/// Rotating messages for collectibles without a fixed one.
pub const PICKUP_PHRASES: [&str; 5] = [
    "Clean water collected!",
    "Another step to safe wells!",
    "Helping a village!",
    "Water is life!",
    "One drop at a time!",
];

/// Phrase for the `n`-th tracked pickup of the session (1-based; 0 is treated as 1).
pub fn pickup_phrase(n: usize) -> &'static str {
    PICKUP_PHRASES[n.saturating_sub(1) % PICKUP_PHRASES.len()]
}

/// `MM:SS`, minutes unbounded.
pub fn timer_text(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

pub fn score_text(score: u32) -> String {
    format!("Score: {score:03}")
}

/// Share of tracked collectibles picked up, in percent.
pub fn progress_percent(collected: usize, total: usize) -> f32 {
    if total == 0 {
        return 0.0;
    }
    collected.min(total) as f32 / total as f32 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_text() {
        assert_eq!(timer_text(0), "00:00");
        assert_eq!(timer_text(75), "01:15");
        assert_eq!(timer_text(6000), "100:00");
    }

    #[test]
    fn test_score_text_pads() {
        assert_eq!(score_text(0), "Score: 000");
        assert_eq!(score_text(100), "Score: 100");
        assert_eq!(score_text(1600), "Score: 1600");
    }

    #[test]
    fn test_progress_percent() {
        assert_eq!(progress_percent(0, 0), 0.0);
        assert_eq!(progress_percent(0, 5), 0.0);
        assert!((progress_percent(2, 5) - 40.0).abs() < 1e-4);
        assert_eq!(progress_percent(5, 5), 100.0);
    }

    #[test]
    fn test_pickup_phrase_rotates() {
        assert_eq!(pickup_phrase(1), PICKUP_PHRASES[0]);
        assert_eq!(pickup_phrase(0), PICKUP_PHRASES[0]);
        assert_eq!(pickup_phrase(5), PICKUP_PHRASES[4]);
        assert_eq!(pickup_phrase(6), PICKUP_PHRASES[0]);
    }
}
