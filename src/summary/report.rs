use super::TrendSummary;

const BANNER_WIDTH: usize = 60;
const REPORT_TITLE: &str = "  NEWS TRENDS SUMMARY";

/// Render trend summaries as a plain-text report.
///
/// The report opens with a banner, the title, the banner again and a blank
/// line; each trend block ends with a blank line; the closing banner matches
/// the opening one.
pub fn render_text_report(summaries: &[TrendSummary]) -> String {
    let banner = "=".repeat(BANNER_WIDTH);
    let mut lines: Vec<String> = vec![
        banner.clone(),
        REPORT_TITLE.to_string(),
        banner.clone(),
        String::new(),
    ];

    for s in summaries {
        lines.push(format!("#{}  {}", s.rank, s.headline));
        lines.push(format!(
            "    Score: {:.2}  |  {} articles  |  {} sources",
            s.score, s.article_count, s.source_count
        ));
        if !s.countries.is_empty() {
            lines.push(format!("    Countries: {}", s.countries.join(", ")));
        }
        lines.push(format!("    Date range: {}", s.date_range));
        lines.push("    Links:".to_string());
        for url in &s.top_urls {
            lines.push(format!("      - {}", url));
        }
        lines.push(String::new());
    }

    lines.push(banner);
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(rank: usize, countries: &[&str]) -> TrendSummary {
        TrendSummary {
            rank,
            headline: format!("Headline {}", rank),
            score: 0.8765,
            article_count: 3,
            source_count: 2,
            countries: countries.iter().map(|c| c.to_string()).collect(),
            date_range: "Feb 14, 2026".to_string(),
            top_urls: vec!["https://a.com/1".to_string(), "https://b.com/2".to_string()],
        }
    }

    #[test]
    fn test_empty_report() {
        let banner = "=".repeat(60);
        assert_eq!(
            render_text_report(&[]),
            format!("{}\n  NEWS TRENDS SUMMARY\n{}\n\n{}", banner, banner, banner)
        );
    }

    #[test]
    fn test_report_blocks() {
        let report = render_text_report(&[summary(1, &["FR", "US"]), summary(2, &[])]);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[4], "#1  Headline 1");
        assert_eq!(lines[5], "    Score: 0.88  |  3 articles  |  2 sources");
        assert_eq!(lines[6], "    Countries: FR, US");
        assert_eq!(lines[7], "    Date range: Feb 14, 2026");
        assert_eq!(lines[8], "    Links:");
        assert_eq!(lines[9], "      - https://a.com/1");
        assert_eq!(lines[10], "      - https://b.com/2");
        assert_eq!(lines[11], "");
        assert_eq!(lines[12], "#2  Headline 2");
        assert_eq!(lines[13], "    Score: 0.88  |  3 articles  |  2 sources");
        assert_eq!(lines[14], "    Date range: Feb 14, 2026");
        assert_eq!(lines.first(), lines.last());
        assert_eq!(render_text_report(&[summary(1, &[])]), render_text_report(&[summary(1, &[])]));
    }
}
