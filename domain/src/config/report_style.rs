//! Report style value object

use serde::{Deserialize, Serialize};

/// Layout of a rendered results row
///
/// ```text
/// Red                  :  1 (50.0%) ##########
/// └── label_width ───┘                └ one bar_mark per bar_step percent
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStyle {
    /// Percentage points per bar mark
    pub bar_step: u32,
    /// Character repeated to draw the bar
    pub bar_mark: char,
    /// Minimum width of the option column
    pub label_width: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            bar_step: 5,
            bar_mark: '#',
            label_width: 20,
        }
    }
}

impl ReportStyle {
    /// Number of bar marks for `percentage`, rounded down
    pub fn bar_length(&self, percentage: f64) -> usize {
        if self.bar_step == 0 || !percentage.is_finite() || percentage <= 0.0 {
            return 0;
        }
        (percentage / f64::from(self.bar_step)).floor() as usize
    }

    /// The bar drawn for `percentage`
    pub fn bar(&self, percentage: f64) -> String {
        std::iter::repeat_n(self.bar_mark, self.bar_length(percentage)).collect()
    }
}
