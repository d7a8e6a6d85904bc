use std::fmt::Display;

/// Output format configuration
#[derive(Clone, Debug)]
pub struct OutputFormat {
    pub raw: bool,
}

impl OutputFormat {
    pub fn new(raw: bool) -> Self {
        Self { raw }
    }

    /// Print key-value pairs - either raw (tab-separated) or column-aligned
    pub fn print_key_value<K, V>(&self, pairs: &[(K, V)])
    where
        K: Display + AsRef<str>,
        V: Display + AsRef<str>,
    {
        for line in self.format_pairs(pairs) {
            println!("{line}");
        }
    }

    fn format_pairs<K, V>(&self, pairs: &[(K, V)]) -> Vec<String>
    where
        K: Display + AsRef<str>,
        V: Display + AsRef<str>,
    {
        if self.raw {
            // Raw output: tab-separated values
            return pairs
                .iter()
                .map(|(key, value)| format!("{key}\t{value}"))
                .collect();
        }

        // Formatted output: keys padded to a common width like `column -t`
        let width = pairs
            .iter()
            .map(|(key, _)| key.as_ref().len())
            .max()
            .unwrap_or(0);

        pairs
            .iter()
            .map(|(key, value)| format!("{:<width$}  {}", key.as_ref(), value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_output_is_tab_separated() {
        let format = OutputFormat::new(true);
        let lines = format.format_pairs(&[("id", "abc123"), ("status", "available")]);

        assert_eq!(lines, vec!["id\tabc123", "status\tavailable"]);
    }

    #[test]
    fn formatted_output_aligns_values() {
        let format = OutputFormat::new(false);
        let lines = format.format_pairs(&[("id", "abc123"), ("status", "available")]);

        assert_eq!(lines, vec!["id      abc123", "status  available"]);
    }

    #[test]
    fn empty_pairs_print_nothing() {
        let format = OutputFormat::new(false);
        let lines = format.format_pairs::<&str, &str>(&[]);

        assert!(lines.is_empty());
    }
}
