// src/filter.rs
//! Line filter: picks markdown table rows that mention an allowed keyword and
//! none of the blocked ones. Matching is plain case-insensitive containment,
//! so "insight" also hits "Insightful Program".

use once_cell::sync::OnceCell;
use regex::Regex;

const DELIMITER: char = '|';
const SEPARATOR_MARKER: &str = "---";

#[derive(Debug, Clone)]
pub struct LineFilter {
    // stored lowercased
    keywords: Vec<String>,
    block: Vec<String>,
    replace_delimiters: bool,
}

impl LineFilter {
    pub fn new<K, B>(keywords: K, block: B) -> Self
    where
        K: IntoIterator,
        K::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        Self {
            keywords: lowercase_non_empty(keywords),
            block: lowercase_non_empty(block),
            replace_delimiters: false,
        }
    }

    pub fn with_replace_delimiters(mut self, on: bool) -> Self {
        self.replace_delimiters = on;
        self
    }

    /// Table data rows that pass the keyword policy, cleaned, in document order.
    pub fn filter(&self, raw: &str) -> Vec<String> {
        raw.lines()
            .filter(|line| is_data_row(line))
            .filter(|line| self.allows(line))
            .map(|line| self.clean(line))
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// Keyword policy only; table shape is not checked here.
    pub fn allows(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        let hit = self.keywords.iter().any(|k| lower.contains(k.as_str()));
        hit && !self.block.iter().any(|b| lower.contains(b.as_str()))
    }

    fn clean(&self, line: &str) -> String {
        if !self.replace_delimiters {
            return line.trim().to_string();
        }
        static RE_WS: OnceCell<Regex> = OnceCell::new();
        let re_ws = RE_WS.get_or_init(|| Regex::new(r"\s+").expect("static regex"));
        let spaced = line.replace(DELIMITER, " ");
        re_ws.replace_all(spaced.trim(), " ").into_owned()
    }
}

/// Has a cell delimiter and is not a `|---|---|` formatting row.
pub fn is_data_row(line: &str) -> bool {
    line.contains(DELIMITER) && !line.contains(SEPARATOR_MARKER)
}

fn lowercase_non_empty<I>(items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_BLOCK: [&str; 0] = [];

    #[test]
    fn keeps_matching_rows_only() {
        let doc = "# Listings\n\
                   | Company | Role | Location |\n\
                   | ------- | ---- | -------- |\n\
                   | Acme | Freshman Program | Remote |\n\
                   | Beta | Senior Role | NY |\n\
                   Freshman programs are great\n";
        let f = LineFilter::new(["Freshman"], NO_BLOCK);
        assert_eq!(f.filter(doc), vec!["| Acme | Freshman Program | Remote |"]);
    }

    #[test]
    fn block_word_vetoes_match() {
        let doc = "| Acme | Freshman Program (Closed) |\n";
        let f = LineFilter::new(["Freshman"], ["Closed"]);
        assert!(f.filter(doc).is_empty());
    }

    #[test]
    fn partial_words_and_case_are_ignored() {
        let f = LineFilter::new(["insight"], NO_BLOCK);
        assert_eq!(
            f.filter("  | Beta | Insightful Program |  "),
            vec!["| Beta | Insightful Program |"]
        );
        assert!(f.allows("| X | INSIGHT DAY |"));
    }

    #[test]
    fn empty_document_and_blank_keywords() {
        let f = LineFilter::new(["", "  "], NO_BLOCK);
        assert!(f.filter("").is_empty());
        assert!(f.filter("| anything | at all |").is_empty());
    }

    #[test]
    fn crlf_lines_are_trimmed() {
        let f = LineFilter::new(["acme"], NO_BLOCK);
        assert_eq!(f.filter("| Acme | A |\r\n| Acme | B |\r\n"), vec!["| Acme | A |", "| Acme | B |"]);
    }

    #[test]
    fn delimiters_can_be_replaced() {
        let f = LineFilter::new(["Freshman"], NO_BLOCK).with_replace_delimiters(true);
        assert_eq!(
            f.filter("| Acme |  Freshman Program | Remote |"),
            vec!["Acme Freshman Program Remote"]
        );
    }

    #[test]
    fn separator_marker_drops_row_even_with_keyword() {
        let f = LineFilter::new(["Freshman"], NO_BLOCK);
        assert!(f.filter("| Freshman --- Acme |").is_empty());
        assert!(!is_data_row("|---| Freshman |"));
    }

    #[test]
    fn duplicates_survive_filtering() {
        let f = LineFilter::new(["acme"], NO_BLOCK);
        assert_eq!(f.filter("| Acme |\n| Acme |\n").len(), 2);
    }
}
