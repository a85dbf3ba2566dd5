use std::io::Write;

use wcag_contrast::wcag::{AAA_LARGE, AAA_NORMAL, AA_LARGE, AA_NORMAL};
use wcag_contrast::{Compliance, ContrastReport, Level, Recommendation};

use crate::brush::{self, Brush};
use crate::error::Result;

const RULE_WIDTH: usize = 80;

pub struct Output<'a> {
    pub handle: &'a mut dyn Write,
    brush: Brush,
    reports_shown: usize,
}

impl Output<'_> {
    pub fn new(handle: &mut dyn Write, brush: Brush) -> Output {
        Output {
            handle,
            brush,
            reports_shown: 0,
        }
    }

    pub fn reports_shown(&self) -> usize {
        self.reports_shown
    }

    fn rule(&mut self) -> Result<()> {
        writeln!(self.handle, "{}", "=".repeat(RULE_WIDTH))?;
        Ok(())
    }

    pub fn show_header(&mut self, background: &str) -> Result<()> {
        let title = self.brush.paint("COLOR CONTRAST ANALYSIS", brush::HEADING);
        self.rule()?;
        writeln!(self.handle, "{}", title)?;
        self.rule()?;
        writeln!(self.handle)?;
        writeln!(self.handle, "Background: {}", background)?;
        writeln!(self.handle)?;
        Ok(())
    }

    fn paint_level(&self, level: Level, text_size: &str) -> String {
        let style = if level.passes() {
            brush::PASS
        } else {
            brush::FAIL
        };
        self.brush.paint(level.describe(text_size), style)
    }

    fn compliance_line(&self, compliance: &Compliance) -> String {
        format!(
            "{} | {}",
            self.paint_level(compliance.normal_text(), "normal"),
            self.paint_level(compliance.large_text(), "large")
        )
    }

    fn recommendation_line(&self, recommendation: Recommendation) -> String {
        let style = match recommendation {
            Recommendation::Excellent | Recommendation::Good => brush::PASS,
            Recommendation::LargeTextOnly => brush::HINT,
            Recommendation::Insufficient => brush::FAIL,
        };
        self.brush.paint(recommendation, style)
    }

    /// Print the analysis of one foreground color. `label` is the color as the user spelled it.
    pub fn show_report(&mut self, label: &str, report: &ContrastReport) -> Result<()> {
        let compliance = self.compliance_line(&report.compliance);
        let recommendation = self.recommendation_line(report.recommendation);

        writeln!(self.handle, "Foreground: {}", label)?;
        writeln!(self.handle, "  Contrast Ratio: {:.2}:1", report.ratio)?;
        writeln!(self.handle, "  Compliance: {}", compliance)?;
        writeln!(self.handle, "  Recommendation: {}", recommendation)?;

        if let (Some(alternative), Some(ratio)) = (report.suggestion, report.suggestion_ratio()) {
            let alternative = self.brush.paint(alternative, brush::HINT);
            writeln!(
                self.handle,
                "  Suggested alternative: {} (ratio: {:.2}:1)",
                alternative, ratio
            )?;
        }

        writeln!(self.handle)?;
        self.reports_shown += 1;

        Ok(())
    }

    pub fn show_standards(&mut self) -> Result<()> {
        let title = self.brush.paint("WCAG Standards:", brush::HEADING);
        self.rule()?;
        writeln!(self.handle)?;
        writeln!(self.handle, "{}", title)?;
        writeln!(self.handle, "  AA (normal text): {:.1}:1 minimum", AA_NORMAL)?;
        writeln!(self.handle, "  AA (large text):  {:.1}:1 minimum", AA_LARGE)?;
        writeln!(self.handle, "  AAA (normal text): {:.1}:1 minimum", AAA_NORMAL)?;
        writeln!(self.handle, "  AAA (large text):  {:.1}:1 minimum", AAA_LARGE)?;
        writeln!(self.handle)?;
        writeln!(self.handle, "Large text = 18pt+ or 14pt+ bold")?;
        self.rule()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcag_contrast::{Color, DEFAULT_TARGET_RATIO};

    fn render(f: impl FnOnce(&mut Output) -> Result<()>) -> String {
        let mut buffer = Vec::new();
        let mut out = Output::new(&mut buffer, Brush::new(false));
        f(&mut out).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn report_with_suggestion() {
        let fg = Color::from_rgb(0x8a, 0x9a, 0x5b);
        let bg = Color::from_rgb(0xfa, 0xfa, 0xf5);
        let report = ContrastReport::new(fg, bg, DEFAULT_TARGET_RATIO);

        let text = render(|out| out.show_report("#8A9A5B", &report));
        assert_eq!(
            "Foreground: #8A9A5B\n\
             \x20 Contrast Ratio: 2.93:1\n\
             \x20 Compliance: ✗ Fails AA (normal text) | ✗ Fails AA (large text)\n\
             \x20 Recommendation: Insufficient contrast. Do not use for text. Decorative elements only.\n\
             \x20 Suggested alternative: #606b3f (ratio: 5.46:1)\n\n",
            text
        );
    }

    #[test]
    fn report_without_suggestion() {
        let report = ContrastReport::new(Color::black(), Color::white(), DEFAULT_TARGET_RATIO);
        let text = render(|out| out.show_report("000", &report));
        assert!(text.contains("Contrast Ratio: 21.00:1"));
        assert!(text.contains("✓ AAA (normal text) | ✓ AAA (large text)"));
        assert!(!text.contains("Suggested alternative"));
    }

    #[test]
    fn counts_reports() {
        let mut buffer = Vec::new();
        let mut out = Output::new(&mut buffer, Brush::new(false));
        let report = ContrastReport::new(Color::black(), Color::white(), DEFAULT_TARGET_RATIO);
        out.show_report("#000000", &report).unwrap();
        out.show_report("#000000", &report).unwrap();
        assert_eq!(2, out.reports_shown());
    }

    #[test]
    fn standards_legend() {
        let text = render(|out| out.show_standards());
        assert!(text.contains("  AA (normal text): 4.5:1 minimum\n"));
        assert!(text.contains("  AAA (normal text): 7.0:1 minimum\n"));
        assert!(text.ends_with(&format!("bold\n{}\n", "=".repeat(80))));
    }
}
