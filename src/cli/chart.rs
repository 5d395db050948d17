//! Text bar chart for the yearly requirement series

use crate::cli::helpers::group_digits;

const BAR_WIDTH: usize = 40;

/// Render one horizontal bar per year, scaled to the peak value.
/// Non-zero values always get at least one cell.
pub fn render(series: &[u64]) -> String {
    let peak = series.iter().copied().max().unwrap_or(0);
    let mut out = String::new();

    for (index, &value) in series.iter().enumerate() {
        let cells = if peak == 0 {
            0
        } else {
            let scaled = (value as u128 * BAR_WIDTH as u128 / peak as u128) as usize;
            if value > 0 {
                scaled.max(1)
            } else {
                0
            }
        };
        out.push_str(&format!(
            "{:>7}  {:<width$}  {}\n",
            format!("Year {}", index + 1),
            "█".repeat(cells),
            group_digits(value),
            width = BAR_WIDTH,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_year_fills_the_full_width() {
        let chart = render(&[10, 40]);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(&"█".repeat(10)));
        assert!(lines[1].contains(&"█".repeat(40)));
        assert!(lines[1].ends_with("40"));
    }

    #[test]
    fn test_small_nonzero_values_still_draw_a_cell() {
        let chart = render(&[1, 1000]);
        assert!(chart.lines().next().unwrap().contains('█'));
    }

    #[test]
    fn test_all_zero_series_draws_no_bars() {
        let chart = render(&[0, 0]);
        assert!(!chart.contains('█'));
        assert_eq!(chart.lines().count(), 2);
    }

    #[test]
    fn test_counts_use_thousands_separators() {
        let chart = render(&[1500]);
        assert!(chart.contains("1,500"));
    }
}
