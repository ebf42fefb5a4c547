//! Terminal and file renderings of pricing results.

use std::fmt::Write as _;
use std::io::Write;
use std::str::FromStr;

use pricer_models::analytical::ValueCurve;

use crate::{CliError, Result};

/// Plot area width in characters.
pub const CHART_WIDTH: usize = 60;

/// Plot area height in rows.
pub const CHART_HEIGHT: usize = 16;

const CURVE_MARK: char = '*';
const STRIKE_MARK: char = '|';
const ATM_MARK: char = 'o';

/// Output format for price, Greeks and implied volatility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json",
                other
            ))),
        }
    }
}

/// Output format for value curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotFormat {
    Ascii,
    Csv,
    Json,
}

impl FromStr for PlotFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "ascii" => Ok(PlotFormat::Ascii),
            "csv" => Ok(PlotFormat::Csv),
            "json" => Ok(PlotFormat::Json),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: ascii, csv, json",
                other
            ))),
        }
    }
}

/// Two-column box table.
pub fn render_table(headers: (&str, &str), rows: &[(String, String)]) -> String {
    let left = rows
        .iter()
        .map(|(k, _)| k.chars().count())
        .chain(std::iter::once(headers.0.chars().count()))
        .max()
        .unwrap_or(0);
    let right = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .chain(std::iter::once(headers.1.chars().count()))
        .max()
        .unwrap_or(0);

    let rule = |l: &str, m: &str, r: &str| {
        format!("{}{}{}{}{}\n", l, "─".repeat(left + 2), m, "─".repeat(right + 2), r)
    };

    let mut out = String::new();
    out.push_str(&rule("┌", "┬", "┐"));
    out.push_str(&format!(
        "│ {:<lw$} │ {:<rw$} │\n",
        headers.0,
        headers.1,
        lw = left,
        rw = right
    ));
    out.push_str(&rule("├", "┼", "┤"));
    for (k, v) in rows {
        out.push_str(&format!("│ {:<lw$} │ {:>rw$} │\n", k, v, lw = left, rw = right));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

/// Plots the curve as a character grid.
///
/// `*` traces the value, `|` marks the strike column and `o` the sample
/// closest to the strike, labelled `ATM`.
pub fn render_ascii_chart(curve: &ValueCurve<f64>, title: &str) -> String {
    let points = curve.points();
    let n = points.len();
    let width = CHART_WIDTH.min(n).max(2);
    let height = CHART_HEIGHT;

    let (v_min, v_max) = curve.value_range();
    let span = if v_max > v_min { v_max - v_min } else { 1.0 };
    let s_min = points[0].spot;
    let s_max = points[n - 1].spot;

    let col_of_index = |i: usize| (i * (width - 1) + (n - 1) / 2) / (n - 1);
    let row_of_value = |v: f64| {
        let r = ((v_max - v) / span * (height - 1) as f64).round();
        (r.max(0.0) as usize).min(height - 1)
    };

    let mut grid = vec![vec![' '; width]; height];

    let strike = curve.strike();
    if strike >= s_min && strike <= s_max {
        let col = ((strike - s_min) / (s_max - s_min) * (width - 1) as f64).round() as usize;
        for row in grid.iter_mut() {
            row[col.min(width - 1)] = STRIKE_MARK;
        }
    }

    for (i, p) in points.iter().enumerate() {
        grid[row_of_value(p.value)][col_of_index(i)] = CURVE_MARK;
    }

    let atm = curve.atm_point();
    let atm_col = col_of_index(curve.atm_index());
    let atm_row = row_of_value(atm.value);
    grid[atm_row][atm_col] = ATM_MARK;
    if atm_row > 0 {
        let label_start = atm_col.saturating_sub(1).min(width.saturating_sub(3));
        for (offset, ch) in "ATM".chars().enumerate() {
            if let Some(cell) = grid[atm_row - 1].get_mut(label_start + offset) {
                *cell = ch;
            }
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out);
    for (r, row) in grid.iter().enumerate() {
        let label = if r == 0 {
            format!("{:>10.2}", v_max)
        } else if r == height - 1 {
            format!("{:>10.2}", v_min)
        } else {
            " ".repeat(10)
        };
        let line: String = row.iter().collect();
        let _ = writeln!(out, "{} ┤{}", label, line.trim_end());
    }
    let _ = writeln!(out, "{} └{}", " ".repeat(10), "─".repeat(width));

    let left = format!("{:.2}", s_min);
    let right = format!("{:.2}", s_max);
    let gap = (width + 1).saturating_sub(left.len() + right.len()).max(1);
    let _ = writeln!(out, "{}  {}{}{}", " ".repeat(10), left, " ".repeat(gap), right);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "  {} value   {} strike K = {:.2}   {} ATM (S = {:.2}, V = {:.4})",
        CURVE_MARK, STRIKE_MARK, strike, ATM_MARK, atm.spot, atm.value
    );
    out
}

/// Writes `spot,value` rows with a header line.
pub fn write_curve_csv<W: Write>(curve: &ValueCurve<f64>, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in curve.points() {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::analytical::{BlackScholes, CurveSpec};

    fn curve(option_type: &str, points: usize) -> ValueCurve<f64> {
        let bs = BlackScholes::new(100.0, 100.0, 1.0, 0.05, 0.2, option_type).unwrap();
        ValueCurve::sample(&bs, CurveSpec::new(0.5, 1.5, points)).unwrap()
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(CliError::InvalidArgument(_))
        ));

        assert_eq!("ascii".parse::<PlotFormat>().unwrap(), PlotFormat::Ascii);
        assert_eq!("Csv".parse::<PlotFormat>().unwrap(), PlotFormat::Csv);
        assert_eq!("json".parse::<PlotFormat>().unwrap(), PlotFormat::Json);
        assert!("table".parse::<PlotFormat>().is_err());
    }

    #[test]
    fn test_table_layout() {
        let rows = vec![
            ("Delta".to_string(), "0.6368".to_string()),
            ("Theta".to_string(), "-0.0176".to_string()),
        ];
        let table = render_table(("Greek", "Value"), &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with('┌'));
        assert_eq!(lines[1], "│ Greek │ Value   │");
        assert_eq!(lines[3], "│ Delta │  0.6368 │");
        assert_eq!(lines[4], "│ Theta │ -0.0176 │");
        assert!(lines[5].starts_with('└'));
    }

    #[test]
    fn test_chart_has_markers() {
        let chart = render_ascii_chart(&curve("call", 300), "Call Option Value vs Underlying");

        assert!(chart.starts_with("Call Option Value vs Underlying"));
        assert!(chart.contains("ATM"));
        assert!(chart.contains(ATM_MARK));
        assert!(chart.contains(STRIKE_MARK));
        assert!(chart.contains(CURVE_MARK));
        assert!(chart.contains("strike K = 100.00"));
        assert!(chart.contains("50.00"));
        assert!(chart.contains("150.00"));
    }

    #[test]
    fn test_chart_dimensions() {
        let chart = render_ascii_chart(&curve("put", 300), "Put");
        let plot_rows = chart.lines().filter(|l| l.contains('┤')).count();
        assert_eq!(plot_rows, CHART_HEIGHT);
        for line in chart.lines().filter(|l| l.contains('┤')) {
            let plot = line.split('┤').nth(1).unwrap();
            assert!(plot.chars().count() <= CHART_WIDTH);
        }
    }

    #[test]
    fn test_chart_with_two_points() {
        let chart = render_ascii_chart(&curve("call", 2), "Tiny");
        assert!(chart.contains(ATM_MARK));
    }

    #[test]
    fn test_call_chart_rises_left_to_right() {
        let chart = render_ascii_chart(&curve("call", 60), "Call");
        let rows: Vec<&str> = chart.lines().filter(|l| l.contains('┤')).collect();
        // Top row holds the rightmost (largest) value, bottom row the leftmost
        let top = rows[0].split('┤').nth(1).unwrap();
        let bottom = rows[CHART_HEIGHT - 1].split('┤').nth(1).unwrap();
        assert_eq!(top.trim_end().chars().last(), Some(CURVE_MARK));
        assert_eq!(bottom.chars().next(), Some(CURVE_MARK));
    }

    #[test]
    fn test_csv_output() {
        let mut buffer = Vec::new();
        write_curve_csv(&curve("call", 3), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "spot,value");
        assert!(lines[1].starts_with("50.0,"));
        assert!(lines[3].starts_with("150.0,"));
    }
}
