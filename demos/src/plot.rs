//! Plotting collaborator for the driver.
//!
//! Writes `(x, y)` samples to CSV for external plotting tools and renders a
//! coarse ASCII plot for the terminal.

use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `x,cos_x` rows to `path`.
pub fn write_csv(path: &Path, x: &[f64], y: &[f64]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    writeln!(file, "x,cos_x")?;
    for (xi, yi) in x.iter().zip(y) {
        writeln!(file, "{},{}", xi, yi)?;
    }
    file.flush()?;

    debug!("wrote {} rows to {}", x.len().min(y.len()), path.display());
    Ok(())
}

/// Render `(x, y)` on a `width` x `height` character grid.
///
/// Returns an empty string when there is nothing to draw.
pub fn render_ascii(x: &[f64], y: &[f64], width: usize, height: usize) -> String {
    let n = x.len().min(y.len());
    if n == 0 || width < 2 || height < 2 {
        return String::new();
    }

    let (x_min, x_max) = bounds(&x[..n]);
    let (y_min, y_max) = bounds(&y[..n]);
    let x_span = if x_max > x_min { x_max - x_min } else { 1.0 };
    let y_span = if y_max > y_min { y_max - y_min } else { 1.0 };

    let mut grid = vec![vec![' '; width]; height];

    // Zero line
    if y_min <= 0.0 && y_max >= 0.0 {
        let row = to_cell(0.0 - y_min, y_span, height);
        for cell in grid[height - 1 - row].iter_mut() {
            *cell = '-';
        }
    }

    for (&xi, &yi) in x[..n].iter().zip(&y[..n]) {
        if !xi.is_finite() || !yi.is_finite() {
            continue;
        }
        let col = to_cell(xi - x_min, x_span, width);
        let row = to_cell(yi - y_min, y_span, height);
        grid[height - 1 - row][col] = '*';
    }

    let mut out = String::new();
    for (i, row) in grid.iter().enumerate() {
        let label = match i {
            0 => format!("{:>6.2}", y_max),
            _ if i == height - 1 => format!("{:>6.2}", y_min),
            _ => " ".repeat(6),
        };
        out.push_str(&label);
        out.push_str(" |");
        out.extend(row.iter());
        out.push('\n');
    }
    out.push_str(&format!(
        "{:>6} +{}\n{:>8}{:<w$.2}{:>8.2}\n",
        "",
        "-".repeat(width),
        "",
        x_min,
        x_max,
        w = width.saturating_sub(8)
    ));

    out
}

fn bounds(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

fn to_cell(offset: f64, span: f64, cells: usize) -> usize {
    let pos = (offset / span * (cells - 1) as f64).round();
    (pos.max(0.0) as usize).min(cells - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty() {
        assert!(render_ascii(&[], &[], 10, 5).is_empty());
    }

    #[test]
    fn test_render_marks_points() {
        let x = [0.0, 1.0, 2.0];
        let y = [1.0, 0.0, -1.0];
        let plot = render_ascii(&x, &y, 3, 3);

        let rows: Vec<&str> = plot.lines().collect();
        assert!(rows[0].ends_with("*  "));
        assert!(rows[1].ends_with("-*-"));
        assert!(rows[2].ends_with("  *"));
    }

    #[test]
    fn test_write_csv() {
        let path = std::env::temp_dir().join("cosine_demo_plot_test.csv");
        write_csv(&path, &[0.0, 0.5], &[1.0, 0.5_f64.cos()]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "x,cos_x");
        assert_eq!(lines[1], "0,1");
        assert_eq!(lines.len(), 3);

        std::fs::remove_file(&path).unwrap();
    }
}
