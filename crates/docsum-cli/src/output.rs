use std::io::Write;

use docsum_core::{Analysis, TopicCount};
use owo_colors::OwoColorize;

/// Whether to use colored output.
#[derive(Debug, Clone, Copy)]
pub struct ColorMode(pub bool);

impl ColorMode {
    pub fn enabled(&self) -> bool {
        self.0
    }
}

/// Print a summary, or the notice that replaces it.
pub fn print_analysis(
    w: &mut dyn Write,
    analysis: &Analysis,
    color: ColorMode,
) -> std::io::Result<()> {
    let rendered = analysis.render();

    if analysis.summary().is_none() {
        if color.enabled() {
            writeln!(w, "{}", rendered.yellow())?;
        } else {
            writeln!(w, "{}", rendered)?;
        }
        return Ok(());
    }

    for line in rendered.lines() {
        if !color.enabled() {
            writeln!(w, "{}", line)?;
        } else if line.starts_with('#') {
            writeln!(w, "{}", line.bold().cyan())?;
        } else if line.starts_with('_') {
            writeln!(w, "{}", line.dimmed())?;
        } else {
            writeln!(w, "{}", line)?;
        }
    }
    Ok(())
}

/// Print per-category match counts, marking the ones that would be reported.
pub fn print_topic_report(
    w: &mut dyn Write,
    counts: &[TopicCount],
    min_matches: usize,
    max_topics: usize,
    color: ColorMode,
) -> std::io::Result<()> {
    let width = counts.iter().map(|c| c.label.len()).max().unwrap_or(0);

    for count in counts {
        let line = format!("{:<width$}  {:>5}", count.label, count.matches);
        let qualifies = count.matches >= min_matches;
        match (qualifies, color.enabled()) {
            (true, true) => writeln!(w, "{}", line.green())?,
            (true, false) => writeln!(w, "{}  *", line)?,
            (false, true) => writeln!(w, "{}", line.dimmed())?,
            (false, false) => writeln!(w, "{}", line)?,
        }
    }

    writeln!(w)?;
    let note = format!(
        "Categories with at least {} matches are reported (top {} by count).",
        min_matches, max_topics
    );
    if color.enabled() {
        writeln!(w, "{}", note.dimmed())?;
    } else {
        writeln!(w, "{}", note)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsum_core::{INSUFFICIENT_CONTENT_NOTICE, Summarizer};

    fn plain(analysis: &Analysis) -> String {
        let mut buf = Vec::new();
        print_analysis(&mut buf, analysis, ColorMode(false)).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_notice_printed_verbatim() {
        let analysis = Summarizer::new().analyze_text("Too short.");
        assert_eq!(plain(&analysis), format!("{}\n", INSUFFICIENT_CONTENT_NOTICE));
    }

    #[test]
    fn test_plain_summary_matches_rendering() {
        let text = "The quarterly review covered every regional office in detail. \
                    Each office reported its figures for the full period. \
                    The board discussed the figures at length before closing.";
        let analysis = Summarizer::new().analyze_text(text);
        assert_eq!(plain(&analysis), format!("{}\n", analysis.render()));
    }

    #[test]
    fn test_topic_report_marks_qualifying_categories() {
        let counts = vec![
            TopicCount {
                label: "Data & Analytics".to_string(),
                matches: 4,
            },
            TopicCount {
                label: "Recommendations".to_string(),
                matches: 1,
            },
        ];
        let mut buf = Vec::new();
        print_topic_report(&mut buf, &counts, 3, 4, ColorMode(false)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Data & Analytics      4  *");
        assert_eq!(lines[1], "Recommendations       1");
    }

    #[test]
    fn test_topic_report_note_uses_configured_limits() {
        let counts = vec![TopicCount {
            label: "Technical Details".to_string(),
            matches: 5,
        }];
        let mut buf = Vec::new();
        print_topic_report(&mut buf, &counts, 5, 2, ColorMode(false)).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert_eq!(
            out.lines().last(),
            Some("Categories with at least 5 matches are reported (top 2 by count).")
        );
    }
}
