//! Progress-bar math for the quiz UI.

use serde::Serialize;

/// Snapshot of quiz completion as shown by the progress bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizProgress {
    /// Whole percent, floored.
    pub value: u8,
    /// The percent followed by a percent sign, e.g. `"20%"`.
    pub label: String,
}

/// Computes `floor(100 * answered / total)` and its display label.
/// Callers guarantee `answered <= total` and `total >= 1`.
pub fn progress(answered_count: usize, num_questions: usize) -> QuizProgress {
    let value = (answered_count * 100 / num_questions) as u8;
    QuizProgress {
        value,
        label: format!("{value}%"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_of_ten_is_twenty_percent() {
        let p = progress(2, 10);
        assert_eq!(p.value, 20);
        assert_eq!(p.label, "20%");
    }

    #[test]
    fn test_zero_answered_is_zero_percent() {
        assert_eq!(progress(0, 10).label, "0%");
    }

    #[test]
    fn test_all_answered_is_one_hundred_percent() {
        let p = progress(15, 15);
        assert_eq!(p.value, 100);
        assert_eq!(p.label, "100%");
    }

    #[test]
    fn test_percent_is_floored() {
        // 1/3 → 33.33 → 33
        assert_eq!(progress(1, 3).value, 33);
        // 2/3 → 66.67 → 66
        assert_eq!(progress(2, 3).value, 66);
        // 7/9 → 77.78 → 77
        assert_eq!(progress(7, 9).value, 77);
    }

    #[test]
    fn test_floor_holds_for_all_counts_up_to_total() {
        for total in 1..=25usize {
            for answered in 0..=total {
                let p = progress(answered, total);
                assert_eq!(p.value as usize, answered * 100 / total);
                assert_eq!(p.label, format!("{}%", p.value));
            }
        }
    }
}
