// Stacked terminal line charts: price + moving average, MACD + signal, RSI.
use crate::config::settings::ChartSettings;
use crate::services::Analysis;
use chrono::NaiveDate;
use shared::models::IndicatorSeries;

const AXIS_LABEL_WIDTH: usize = 10;

/// One plotted line. Later lines are drawn over earlier ones.
struct Line<'a> {
    label: String,
    glyph: char,
    values: &'a [Option<f64>],
}

/// Horizontal reference line, e.g. RSI 70/30 or the MACD zero line.
struct Reference {
    value: f64,
    glyph: char,
}

struct Panel<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    references: Vec<Reference>,
    fixed_range: Option<(f64, f64)>,
}

pub fn render_chart(analysis: &Analysis<'_>, settings: &ChartSettings) -> String {
    let closes: IndicatorSeries = analysis.observations.iter().map(|o| Some(o.close)).collect();
    let dates: Vec<NaiveDate> = analysis.observations.iter().map(|o| o.date).collect();

    let panels = [
        Panel {
            title: "Stock Price and Moving Average",
            lines: vec![
                Line { label: "Close Price".to_string(), glyph: '*', values: &closes },
                Line {
                    label: format!("Moving Average {}", analysis.moving_average_name),
                    glyph: '+',
                    values: &analysis.moving_average,
                },
            ],
            references: Vec::new(),
            fixed_range: None,
        },
        Panel {
            title: "MACD",
            lines: vec![
                Line { label: "MACD".to_string(), glyph: '*', values: &analysis.macd.macd },
                Line { label: "Signal Line".to_string(), glyph: '+', values: &analysis.macd.signal },
            ],
            references: vec![Reference { value: 0.0, glyph: '.' }],
            fixed_range: None,
        },
        Panel {
            title: "Relative Strength Index (RSI)",
            lines: vec![Line { label: "RSI".to_string(), glyph: '*', values: &analysis.rsi }],
            references: vec![
                Reference { value: settings.rsi_overbought, glyph: '-' },
                Reference { value: settings.rsi_oversold, glyph: '-' },
            ],
            fixed_range: Some((0.0, 100.0)),
        },
    ];

    panels
        .iter()
        .map(|panel| render_panel(panel, &dates, settings))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_panel(panel: &Panel<'_>, dates: &[NaiveDate], settings: &ChartSettings) -> String {
    let mut out = format!("{}\n", panel.title);

    let columns: Vec<Vec<Option<f64>>> = panel
        .lines
        .iter()
        .map(|line| bucket(line.values, settings.width))
        .collect();

    let Some((min, max)) = panel.fixed_range.or_else(|| value_range(&columns)) else {
        out.push_str("  (no data)\n");
        return out;
    };

    let height = settings.panel_height.max(2);
    let width = columns.first().map_or(0, Vec::len);
    let mut grid = vec![vec![' '; width]; height];

    let to_row = |value: f64| -> Option<usize> {
        if !value.is_finite() || value < min || value > max {
            return None;
        }
        let frac = (max - value) / (max - min);
        Some((frac * (height - 1) as f64).round() as usize)
    };

    let mut labelled_rows: Vec<(usize, f64)> = vec![(0, max), (height - 1, min)];
    for reference in &panel.references {
        if let Some(row) = to_row(reference.value) {
            grid[row].iter_mut().for_each(|cell| *cell = reference.glyph);
            labelled_rows.push((row, reference.value));
        }
    }
    for (line, column_values) in panel.lines.iter().zip(columns.iter()) {
        for (col, value) in column_values.iter().enumerate() {
            if let Some(row) = value.and_then(to_row) {
                grid[row][col] = line.glyph;
            }
        }
    }

    for (row, cells) in grid.iter().enumerate() {
        let label = labelled_rows
            .iter()
            .rev()
            .find(|(r, _)| *r == row)
            .map(|(_, v)| format_axis_value(*v))
            .unwrap_or_default();
        let body: String = cells.iter().collect();
        out.push_str(&format!("{:>w$} |{}\n", label, body.trim_end(), w = AXIS_LABEL_WIDTH));
    }
    out.push_str(&format!("{:>w$} +{}\n", "", "-".repeat(width), w = AXIS_LABEL_WIDTH));

    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        let first = first.to_string();
        let last = last.to_string();
        let gap = width.saturating_sub(first.len() + last.len()).max(1);
        out.push_str(&format!("{:>w$}  {}{}{}\n", "", first, " ".repeat(gap), last, w = AXIS_LABEL_WIDTH));
    }

    let legend: Vec<String> = panel
        .lines
        .iter()
        .map(|line| format!("{} {}", line.glyph, line.label))
        .collect();
    out.push_str(&format!("{:>w$}  {}\n", "", legend.join("   "), w = AXIS_LABEL_WIDTH));
    out
}

/// Reduces a series to at most `width` columns, keeping the last defined value
/// of each bucket. Shorter series keep one column per observation.
fn bucket(values: &[Option<f64>], width: usize) -> Vec<Option<f64>> {
    let n = values.len();
    if n <= width || width == 0 {
        return values.to_vec();
    }
    (0..width)
        .map(|col| {
            let start = col * n / width;
            let end = ((col + 1) * n / width).max(start + 1);
            values[start..end].iter().rev().find_map(|v| *v)
        })
        .collect()
}

fn value_range(columns: &[Vec<Option<f64>>]) -> Option<(f64, f64)> {
    let (min, max) = columns
        .iter()
        .flatten()
        .flatten()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if min > max {
        return None;
    }
    if min == max {
        let pad = if min == 0.0 { 1.0 } else { min.abs() * 0.01 };
        return Some((min - pad, max + pad));
    }
    Some((min, max))
}

fn format_axis_value(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.2}", value)
    }
}
