use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::indicators::{Assessment, RiskLevel};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a risk score with one decimal place
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

fn colorize_level(text: &str, level: RiskLevel, use_colors: bool) -> String {
    if use_colors {
        match level {
            RiskLevel::Low => text.green().to_string(),
            RiskLevel::Medium => text.yellow().to_string(),
            RiskLevel::High => text.red().to_string(),
        }
    } else {
        text.to_string()
    }
}

fn format_level(level: RiskLevel, use_colors: bool) -> String {
    // Pad before coloring so ANSI codes don't break alignment
    colorize_level(&format!("{:<6}", level.as_str()), level, use_colors)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a region name to fit available width, accounting for Unicode
fn truncate_region(region: &str, max_width: usize) -> String {
    let chars: Vec<char> = region.chars().collect();
    if chars.len() <= max_width {
        region.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format assessments as a ranked table with columns: Index, Score,
/// Level, Region. No headers.
/// Index column: 3 chars, right-aligned. Score column: 5 chars ("100.0").
pub fn format_assessment_table(assessments: &[Assessment], use_colors: bool) -> String {
    if assessments.is_empty() {
        return "No regions assessed.".to_string();
    }

    let term_width = get_terminal_width();

    let index_width = 3;
    let score_width = 5;
    let level_width = 6;
    let separator = "  ";

    assessments
        .iter()
        .enumerate()
        .map(|(idx, assessment)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_padded = format!(
                "{:>width$}",
                format_score(assessment.risk_score),
                width = score_width
            );
            let level_str = format_level(assessment.risk_level, use_colors);

            let fixed_width = index_width + 1 + score_width + level_width + separator.len() * 3;
            let region = if let Some(width) = term_width {
                if width > fixed_width + 10 {
                    truncate_region(&assessment.region, width - fixed_width)
                } else {
                    truncate_region(&assessment.region, 20)
                }
            } else {
                assessment.region.clone()
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}",
                    index_str.dimmed(),
                    score_padded.bold(),
                    separator,
                    level_str,
                    separator,
                    region
                )
            } else {
                format!(
                    "{} {}{}{}{}{}",
                    index_str, score_padded, separator, level_str, separator, region
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single assessment with detailed multi-line output (for
/// verbose mode)
pub fn format_assessment_detail(assessment: &Assessment, use_colors: bool) -> String {
    let factors = assessment.contributing_factors.join(", ");
    let actions = assessment
        .recommended_actions
        .iter()
        .map(|action| format!("    - {}", action))
        .collect::<Vec<_>>()
        .join("\n");
    let level_str = colorize_level(
        assessment.risk_level.as_str(),
        assessment.risk_level,
        use_colors,
    );

    if use_colors {
        format!(
            "{}\n  Score: {}\n  Level: {}\n  Factors: {}\n  Actions:\n{}",
            assessment.region.bold(),
            format_score(assessment.risk_score).bold(),
            level_str,
            factors,
            actions
        )
    } else {
        format!(
            "{}\n  Score: {}\n  Level: {}\n  Factors: {}\n  Actions:\n{}",
            assessment.region,
            format_score(assessment.risk_score),
            level_str,
            factors,
            actions
        )
    }
}

/// Format assessments as tab-separated values for scripting
/// Columns: region, score, level, factors, actions (no headers, no colors)
pub fn format_tsv(assessments: &[Assessment]) -> String {
    if assessments.is_empty() {
        return String::new();
    }

    assessments
        .iter()
        .map(|assessment| {
            format!(
                "{}\t{:.2}\t{}\t{}\t{}",
                assessment.region,
                assessment.risk_score,
                assessment.risk_level,
                assessment.contributing_factors.join(";"),
                assessment.recommended_actions.join(";")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_assessment() -> Assessment {
        Assessment {
            region: "Sahelia".to_string(),
            risk_score: 72.5,
            risk_level: RiskLevel::High,
            contributing_factors: vec![
                "High food prices".to_string(),
                "Low rainfall".to_string(),
                "High inflation".to_string(),
            ],
            recommended_actions: vec![
                "Implement drought-resistant farming techniques and irrigation systems"
                    .to_string(),
                "Establish emergency food reserves and price stabilization measures".to_string(),
            ],
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(72.5), "72.5");
        assert_eq!(format_score(100.0), "100.0");
        assert_eq!(format_score(0.0), "0.0");
    }

    #[test]
    fn test_format_table_empty() {
        let assessments: Vec<Assessment> = vec![];
        assert_eq!(
            format_assessment_table(&assessments, false),
            "No regions assessed."
        );
    }

    #[test]
    fn test_format_table_single() {
        let assessments = vec![sample_assessment()];
        let result = format_assessment_table(&assessments, false);
        assert!(result.contains(" 1."));
        assert!(result.contains("72.5"));
        assert!(result.contains("HIGH"));
        assert!(result.contains("Sahelia"));
    }

    #[test]
    fn test_format_table_index_sequence() {
        let mut second = sample_assessment();
        second.region = "Verdania".to_string();
        second.risk_score = 10.0;
        second.risk_level = RiskLevel::Low;

        let assessments = vec![sample_assessment(), second];
        let result = format_assessment_table(&assessments, false);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" 1."));
        assert!(lines[0].contains("HIGH"));
        assert!(lines[1].contains(" 2."));
        assert!(lines[1].contains("LOW"));
        assert!(lines[1].contains("Verdania"));
    }

    #[test]
    fn test_format_detail() {
        let result = format_assessment_detail(&sample_assessment(), false);
        assert!(result.contains("Sahelia"));
        assert!(result.contains("Score: 72.5"));
        assert!(result.contains("Level: HIGH"));
        assert!(result.contains("Factors: High food prices, Low rainfall, High inflation"));
        assert!(result.contains("    - Implement drought-resistant"));
    }

    #[test]
    fn test_format_tsv_empty() {
        let assessments: Vec<Assessment> = vec![];
        assert_eq!(format_tsv(&assessments), "");
    }

    #[test]
    fn test_format_tsv_columns() {
        let assessments = vec![sample_assessment()];
        let result = format_tsv(&assessments);
        assert_eq!(result.split('\t').count(), 5);
        assert!(result.starts_with("Sahelia\t72.50\tHIGH\t"));
        assert!(result.contains("High food prices;Low rainfall;High inflation"));
    }

    #[test]
    fn test_truncate_region_short() {
        assert_eq!(truncate_region("Sahelia", 20), "Sahelia");
    }

    #[test]
    fn test_truncate_region_long() {
        assert_eq!(
            truncate_region("Autonomous Highland Territories", 15),
            "Autonomous H..."
        );
    }

    #[test]
    fn test_truncate_region_very_narrow() {
        assert_eq!(truncate_region("Sahelia", 3), "Sah");
    }

    #[test]
    fn test_format_level_padding() {
        assert_eq!(format_level(RiskLevel::Low, false), "LOW   ");
        assert_eq!(format_level(RiskLevel::Medium, false), "MEDIUM");
    }
}
