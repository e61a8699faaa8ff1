//! Environment variable validation with helpful warnings
//!
//! Invalid values never abort a command: the override is dropped, the
//! configured value stays, and a warning is collected for display.

/// What a variable accepts
#[derive(Debug, Clone, Copy)]
pub enum Expected<'a> {
    /// One of a fixed set of names (typos get a suggestion)
    OneOf(&'a [&'a str]),
    /// Free-form description, e.g. "a whole number of seconds"
    Described(&'a str),
}

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    expected: Expected<'a>,
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, expected: Expected<'a>) -> Self {
        Self { var_name, expected }
    }

    /// Parse `value`, pushing a warning and returning `None` when invalid
    pub fn parse<T, F>(&self, value: &str, parser: F, warnings: &mut Vec<String>) -> Option<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let parsed = parser(value);
        if parsed.is_none() {
            warnings.push(self.warning(value));
        }
        parsed
    }

    fn warning(&self, value: &str) -> String {
        match self.expected {
            Expected::OneOf(valid) => format!(
                "Invalid {} value '{}'{}. Valid values: {}",
                self.var_name,
                value,
                suggest(value, valid),
                valid.join(", ")
            ),
            Expected::Described(what) => format!(
                "Invalid {} value '{}', expected {}",
                self.var_name, value, what
            ),
        }
    }
}

/// ". Did you mean 'x'?" when a candidate is within two edits
fn suggest(value: &str, valid: &[&str]) -> String {
    match closest(&value.to_lowercase(), valid) {
        Some(suggested) if suggested != value => format!(". Did you mean '{}'?", suggested),
        _ => String::new(),
    }
}

/// Closest candidate within two edits
pub fn closest<'c>(input: &str, candidates: &[&'c str]) -> Option<&'c str> {
    candidates
        .iter()
        .map(|c| (*c, levenshtein(input, c)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(c, _)| c)
}

/// Simple Levenshtein distance for typo detection
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: &[&str] = &["auto", "always", "never"];

    #[test]
    fn test_levenshtein_edits() {
        assert_eq!(levenshtein("url", "url"), 0);
        assert_eq!(levenshtein("timeout", "timout"), 1);
        assert_eq!(levenshtein("", "wait"), 4);
    }

    #[test]
    fn test_valid_value_has_no_warning() {
        let validator = EnvVarValidator::new("DECKHAND_COLOR", Expected::OneOf(COLORS));
        let mut warnings = Vec::new();
        let parsed = validator.parse("never", |s| COLORS.iter().position(|c| *c == s), &mut warnings);
        assert_eq!(parsed, Some(2));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_typo_gets_suggestion() {
        let validator = EnvVarValidator::new("DECKHAND_COLOR", Expected::OneOf(COLORS));
        let mut warnings = Vec::new();
        let parsed: Option<()> = validator.parse("allways", |_| None, &mut warnings);

        assert!(parsed.is_none());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Did you mean 'always'?"), "{}", warnings[0]);
        assert!(warnings[0].contains("Valid values: auto, always, never"));
    }

    #[test]
    fn test_distant_value_gets_no_suggestion() {
        let validator = EnvVarValidator::new("DECKHAND_COLOR", Expected::OneOf(COLORS));
        let mut warnings = Vec::new();
        let _: Option<()> = validator.parse("something_else", |_| None, &mut warnings);
        assert!(!warnings[0].contains("Did you mean"));
    }

    #[test]
    fn test_described_value_warning() {
        let validator = EnvVarValidator::new(
            "DECKHAND_WAIT_TIMEOUT_SECS",
            Expected::Described("a whole number of seconds"),
        );
        let mut warnings = Vec::new();
        let parsed = validator.parse("soon", |s| s.parse::<u64>().ok(), &mut warnings);

        assert!(parsed.is_none());
        assert_eq!(
            warnings[0],
            "Invalid DECKHAND_WAIT_TIMEOUT_SECS value 'soon', expected a whole number of seconds"
        );
    }
}
