//! Markdown rendering of a [`SummaryResult`].
//!
//! Sections always appear in the same order: overview, topics, key points,
//! introduction, conclusion, analysis, provenance note. Empty sections are
//! skipped, never reordered.
//!
//! Key points and excerpts are stored without their terminal punctuation, so
//! the renderer closes each one with `.`. A sentence that ended in `?` or `!`
//! in the source is printed with a period.

use std::fmt::Write;

use crate::summary::SummaryResult;

/// Render `summary` as markdown.
pub fn render_markdown(summary: &SummaryResult) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_markdown(&mut out, summary);
    out
}

fn write_markdown(out: &mut String, summary: &SummaryResult) -> std::fmt::Result {
    writeln!(out, "## Document Summary")?;
    writeln!(out)?;
    writeln!(
        out,
        "**Overview:** {} {}, {} words (~{} {})",
        summary.document_count,
        plural(summary.document_count, "document", "documents"),
        summary.word_count,
        summary.page_estimate,
        plural(summary.page_estimate, "page", "pages"),
    )?;

    if !summary.topics.is_empty() {
        writeln!(out)?;
        writeln!(out, "### Main Topics")?;
        for topic in &summary.topics {
            writeln!(out, "- {topic}")?;
        }
    }

    if !summary.key_points.is_empty() {
        writeln!(out)?;
        writeln!(out, "### Key Points")?;
        for (i, point) in summary.key_points.iter().enumerate() {
            writeln!(out, "{}. {}.", i + 1, point)?;
        }
    }

    if let Some(intro) = &summary.introduction {
        writeln!(out)?;
        writeln!(out, "### Introduction")?;
        writeln!(out, "{intro}.")?;
    }

    if let Some(conclusion) = &summary.conclusion {
        writeln!(out)?;
        writeln!(out, "### Conclusion")?;
        writeln!(out, "{conclusion}.")?;
    }

    writeln!(out)?;
    writeln!(out, "### Analysis")?;
    writeln!(out, "- Content depth: {}", summary.depth)?;
    writeln!(out, "- Structure: {}", summary.structure)?;
    writeln!(out, "- Key points extracted: {}", summary.key_points.len())?;

    writeln!(out)?;
    write!(
        out,
        "_Extractive summary: every point above is quoted from the source {}._",
        plural(summary.document_count, "document", "documents")
    )?;
    Ok(())
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::{DepthLabel, StructureLabel};

    fn sample() -> SummaryResult {
        SummaryResult {
            document_count: 2,
            word_count: 640,
            page_estimate: 3,
            topics: vec![
                "Results & Findings".to_string(),
                "Data & Analytics".to_string(),
            ],
            key_points: vec![
                "The trial showed a clear improvement".to_string(),
                "Costs fell by a third over the period".to_string(),
            ],
            introduction: Some("This report covers the pilot".to_string()),
            conclusion: Some("The pilot should be extended".to_string()),
            depth: DepthLabel::Detailed,
            structure: StructureLabel::Focused,
        }
    }

    #[test]
    fn test_render_full_summary() {
        let expected = "\
## Document Summary

**Overview:** 2 documents, 640 words (~3 pages)

### Main Topics
- Results & Findings
- Data & Analytics

### Key Points
1. The trial showed a clear improvement.
2. Costs fell by a third over the period.

### Introduction
This report covers the pilot.

### Conclusion
The pilot should be extended.

### Analysis
- Content depth: Detailed
- Structure: Focused
- Key points extracted: 2

_Extractive summary: every point above is quoted from the source documents._";
        assert_eq!(render_markdown(&sample()), expected);
    }

    #[test]
    fn test_render_skips_empty_sections() {
        let summary = SummaryResult {
            document_count: 1,
            page_estimate: 1,
            topics: Vec::new(),
            key_points: Vec::new(),
            introduction: None,
            conclusion: None,
            ..sample()
        };
        let rendered = render_markdown(&summary);
        assert!(rendered.contains("1 document, 640 words (~1 page)"));
        assert!(!rendered.contains("### Main Topics"));
        assert!(!rendered.contains("### Key Points"));
        assert!(!rendered.contains("### Introduction"));
        assert!(!rendered.contains("### Conclusion"));
        assert!(rendered.contains("- Key points extracted: 0"));
    }

    #[test]
    fn test_render_section_order() {
        let rendered = render_markdown(&sample());
        let positions: Vec<usize> = [
            "**Overview:**",
            "### Main Topics",
            "### Key Points",
            "### Introduction",
            "### Conclusion",
            "### Analysis",
            "_Extractive summary",
        ]
        .iter()
        .map(|marker| rendered.find(marker).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_question_is_rendered_with_a_period() {
        let analysis = crate::Summarizer::new().analyze_text(
            "Did the pilot reduce the monthly operating costs for every site? \
             The figures collected over the year suggest that it clearly did so.",
        );
        let rendered = analysis.render();
        assert!(rendered.contains(
            "Did the pilot reduce the monthly operating costs for every site. \
             The figures collected over the year suggest that it clearly did so."
        ));
        assert!(!rendered.contains('?'));
    }
}
