// src/notify/report.rs
use chrono::{DateTime, Local};
use html_escape::encode_text;
use std::fmt::Write as _;

/// Rows found in this run that no earlier run reported.
#[derive(Debug, Clone)]
pub struct Report {
    pub entries: Vec<String>,
    pub generated_at: DateTime<Local>,
}

impl Report {
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries,
            generated_at: Local::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn subject(&self) -> String {
        match self.len() {
            0 => format!(
                "Internship Sniper: nothing new today ({})",
                self.generated_at.format("%Y-%m-%d")
            ),
            1 => "🎯 Internship Sniper: Found 1 Opportunity!".to_string(),
            n => format!("🎯 Internship Sniper: Found {n} Opportunities!"),
        }
    }

    pub fn plain_body(&self) -> String {
        let mut body = String::new();
        if self.is_empty() {
            body.push_str("No new freshman/early programs showed up in today's scan.\n");
            let _ = writeln!(body, "Checked at {}.", self.stamp());
            body.push_str("\n- Internship Sniper\n");
            return body;
        }

        body.push_str("The bot found the following new freshman/sophomore programs:\n\n");
        for e in &self.entries {
            let _ = writeln!(body, "- {e}");
        }
        body.push_str("\nGood luck!\n- Internship Sniper\n");
        body
    }

    /// Same content as `plain_body`, rows laid out as an HTML table.
    pub fn html_body(&self) -> String {
        let mut html = String::from("<html><body>");
        if self.is_empty() {
            let _ = write!(
                html,
                "<p>No new freshman/early programs showed up in today's scan.</p><p>Checked at {}.</p>",
                encode_text(&self.stamp())
            );
        } else {
            html.push_str(
                "<p>The bot found the following new freshman/sophomore programs:</p>\
                 <table border=\"1\" cellpadding=\"4\" cellspacing=\"0\">",
            );
            for e in &self.entries {
                html.push_str("<tr>");
                for cell in cells(e) {
                    let _ = write!(html, "<td>{}</td>", encode_text(cell));
                }
                html.push_str("</tr>");
            }
            html.push_str("</table><p>Good luck!</p>");
        }
        html.push_str("</body></html>");
        html
    }

    fn stamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M").to_string()
    }
}

/// `| a | b |` → `["a", "b"]`; a row without delimiters is one cell.
fn cells(row: &str) -> Vec<&str> {
    let inner = row.trim();
    let inner = inner.strip_prefix('|').unwrap_or(inner);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(str::trim).collect()
}
