//! Chart, list and summary rendering
//!
//! Pure functions that return the rendered string; printing is the caller's
//! job. Glyph and color choices follow the detected terminal capabilities,
//! so every renderer degrades cleanly to plain ASCII.

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::histogram::Histogram;
use crate::models::{DateSource, ResolvedDate};
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme;

/// Width of the `YYYY-MM` label column
const LABEL_WIDTH: usize = 7;

/// Bar column bounds; terminals narrower than the minimum still get a bar
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 60;

/// Render one bar row per `(year, month)` bucket, chronologically.
///
/// Bars are scaled against the largest bucket; a non-empty bucket always
/// shows at least one glyph.
pub fn render_histogram(hist: &Histogram, caps: &TerminalCapabilities) -> String {
    if hist.is_empty() {
        return String::new();
    }

    let glyph = theme::bar_glyph(caps.supports_unicode);
    let max = hist.max_count();
    let count_width = max.to_string().len();
    let avail = usize::from(caps.width)
        .saturating_sub(LABEL_WIDTH + count_width + 2)
        .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);

    let mut out = String::new();
    for ((year, month), count) in hist.buckets() {
        let len = (count * avail).div_ceil(max);
        let bar = paint(&glyph.repeat(len), caps);
        let pad = " ".repeat(avail - len);
        out.push_str(&format!(
            "{:04}-{:02} {}{} {:>count_width$}\n",
            year, month, bar, pad, count
        ));
    }
    out
}

/// Render one `date  source  path` row per resolved file.
pub fn render_list(resolutions: &[ResolvedDate], caps: &TerminalCapabilities) -> String {
    let mut out = String::new();
    for resolved in resolutions {
        let row = format!(
            "{}  {:<8}  {}",
            resolved.date,
            resolved.source.name(),
            resolved.path.display()
        );
        out.push_str(&fit_width(&row, caps.width.into(), caps.supports_unicode));
        out.push('\n');
    }
    out
}

/// One-line run summary: file count, month span, per-tier counts.
pub fn render_summary(
    resolutions: &[ResolvedDate],
    hist: &Histogram,
    caps: &TerminalCapabilities,
) -> String {
    let sep = theme::separator_glyph(caps.supports_unicode);

    let mut parts = vec![format!("{} files", resolutions.len())];
    if let Some(((first_y, first_m), (last_y, last_m))) = hist.span() {
        parts.push(format!(
            "{:04}-{:02} to {:04}-{:02}",
            first_y, first_m, last_y, last_m
        ));
    }
    let tiers = tier_counts(resolutions);
    if !tiers.is_empty() {
        parts.push(tiers);
    }

    let line = parts.join(&format!(" {} ", sep));
    if caps.supports_color {
        format!("{}\n", line.with(theme::colors::DIM))
    } else {
        line + "\n"
    }
}

fn tier_counts(resolutions: &[ResolvedDate]) -> String {
    const ORDER: [DateSource; 4] = [
        DateSource::Header,
        DateSource::Filename,
        DateSource::Repo,
        DateSource::Mtime,
    ];

    ORDER
        .iter()
        .filter_map(|source| {
            let n = resolutions.iter().filter(|r| r.source == *source).count();
            (n > 0).then(|| format!("{} {}", source.name(), n))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn paint(s: &str, caps: &TerminalCapabilities) -> String {
    if caps.supports_color {
        format!("{}", s.with(theme::colors::INFO))
    } else {
        s.to_string()
    }
}

/// Truncate a row to the terminal width, ending with an ellipsis.
fn fit_width(row: &str, width: usize, supports_unicode: bool) -> String {
    if UnicodeWidthStr::width(row) <= width {
        return row.to_string();
    }

    let ellipsis = if supports_unicode { "…" } else { "..." };
    let keep = width.saturating_sub(UnicodeWidthStr::width(ellipsis));

    let mut taken = String::new();
    let mut taken_width = 0;
    for ch in row.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if taken_width + w > keep {
            break;
        }
        taken_width += w;
        taken.push(ch);
    }
    taken.push_str(ellipsis);
    taken
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::path::PathBuf;

    fn plain_caps() -> TerminalCapabilities {
        TerminalCapabilities {
            is_tty: false,
            supports_color: false,
            supports_unicode: true,
            is_ci: false,
            width: 80,
        }
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_hist() -> Histogram {
        [ymd(2020, 1, 3), ymd(2021, 5, 1), ymd(2021, 5, 14)]
            .into_iter()
            .collect()
    }

    #[test]
    fn histogram_has_one_row_per_bucket() {
        let out = render_histogram(&sample_hist(), &plain_caps());
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("2020-01"));
        assert!(out.contains("2021-05"));
    }

    #[test]
    fn histogram_bars_scale_with_counts() {
        let out = render_histogram(&sample_hist(), &plain_caps());
        let small = out.lines().find(|l| l.starts_with("2020-01")).unwrap();
        let large = out.lines().find(|l| l.starts_with("2021-05")).unwrap();
        let bars = |line: &str| line.matches(theme::glyphs::BAR).count();
        assert!(bars(small) >= 1);
        assert!(bars(large) > bars(small));
    }

    #[test]
    fn histogram_ascii_fallback() {
        let mut caps = plain_caps();
        caps.supports_unicode = false;
        let out = render_histogram(&sample_hist(), &caps);
        assert!(out.contains('#'));
        assert!(!out.contains(theme::glyphs::BAR));
    }

    #[test]
    fn histogram_empty_renders_nothing() {
        let out = render_histogram(&Histogram::new(), &plain_caps());
        assert!(out.is_empty());
    }

    #[test]
    fn histogram_narrow_terminal_still_renders() {
        let mut caps = plain_caps();
        caps.width = 8;
        let out = render_histogram(&sample_hist(), &caps);
        assert_eq!(out.lines().count(), 2);
    }

    #[test]
    fn list_shows_date_source_and_path() {
        let resolutions = vec![ResolvedDate {
            date: ymd(2021, 5, 1),
            source: DateSource::Header,
            path: PathBuf::from("posts/hello.md"),
        }];
        let out = render_list(&resolutions, &plain_caps());
        assert!(out.contains("2021-05-01"));
        assert!(out.contains("header"));
        assert!(out.contains("posts/hello.md"));
    }

    #[test]
    fn list_truncates_long_rows() {
        let mut caps = plain_caps();
        caps.width = 30;
        let resolutions = vec![ResolvedDate {
            date: ymd(2021, 5, 1),
            source: DateSource::Header,
            path: PathBuf::from("a/very/long/nested/path/to/a/post/file.md"),
        }];
        let out = render_list(&resolutions, &caps);
        let row = out.lines().next().unwrap();
        assert!(UnicodeWidthStr::width(row) <= 30);
        assert!(row.ends_with('…'));
    }

    #[test]
    fn summary_counts_files_and_tiers() {
        let resolutions = vec![
            ResolvedDate {
                date: ymd(2021, 5, 1),
                source: DateSource::Header,
                path: PathBuf::from("a.md"),
            },
            ResolvedDate {
                date: ymd(2020, 1, 3),
                source: DateSource::Mtime,
                path: PathBuf::from("b.md"),
            },
        ];
        let hist: Histogram = resolutions.iter().map(|r| r.date).collect();
        let out = render_summary(&resolutions, &hist, &plain_caps());
        assert!(out.contains("2 files"));
        assert!(out.contains("2020-01 to 2021-05"));
        assert!(out.contains("header 1"));
        assert!(out.contains("mtime 1"));
        assert!(!out.contains("repo"));
    }

    #[test]
    fn summary_empty_run() {
        let out = render_summary(&[], &Histogram::new(), &plain_caps());
        assert!(out.contains("0 files"));
    }
}
