use regex::Regex;

/// How a language tag is matched against a profile.
///
/// Containment covers the usual free-form tags ("Python 3", "java se").
/// Equality exists for tags like "c" where substring matching would
/// swallow half the registry.
#[derive(Clone, Copy, Debug)]
pub enum TagRule {
    /// Case-insensitive substring containment.
    Contains(&'static str),
    /// Whole-tag equality after trimming.
    Equals(&'static str),
}

/// What the first capture group of a recognizer holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureRule {
    /// The capture is the final printed text; quotes and trailing escapes
    /// are already excluded by the pattern itself.
    Literal,
    /// The capture is an argument expression that still needs resolution
    /// against the symbol table.
    Expression,
}

/// Single output-statement recognizer: a compiled pattern plus the rule
/// for interpreting its first capture group.
#[derive(Clone, Debug)]
pub struct OutputRecognizer {
    pattern: Regex,
    rule: CaptureRule,
}

impl OutputRecognizer {
    pub(crate) fn expression(pattern: &str) -> Self {
        Self::compile(pattern, CaptureRule::Expression)
    }

    pub(crate) fn literal(pattern: &str) -> Self {
        Self::compile(pattern, CaptureRule::Literal)
    }

    fn compile(pattern: &str, rule: CaptureRule) -> Self {
        // Builtin patterns are fixed strings covered by registry tests.
        let pattern = Regex::new(pattern).expect("invalid builtin recognizer pattern");
        Self { pattern, rule }
    }

    /// First match anywhere in the source text, if any.
    pub fn capture<'t>(&self, source: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    pub fn rule(&self) -> CaptureRule {
        self.rule
    }
}

/// Immutable per-language table of output recognizers, tag rules, and
/// cosmetic banner lines. Built once at registry init, never mutated.
#[derive(Clone, Debug)]
pub struct LanguageProfile {
    id: &'static str,
    display_name: &'static str,
    tag_rules: Vec<TagRule>,
    recognizers: Vec<OutputRecognizer>,
    banner_templates: Vec<&'static str>,
    source_file: &'static str,
}

impl LanguageProfile {
    pub(crate) fn new(
        id: &'static str,
        display_name: &'static str,
        tag_rules: Vec<TagRule>,
        recognizers: Vec<OutputRecognizer>,
        banner_templates: Vec<&'static str>,
        source_file: &'static str,
    ) -> Self {
        Self {
            id,
            display_name,
            tag_rules,
            recognizers,
            banner_templates,
            source_file,
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn display_name(&self) -> &'static str {
        self.display_name
    }

    /// Conventional file name shown in banner lines (e.g. "Main.java").
    pub fn source_file(&self) -> &'static str {
        self.source_file
    }

    pub fn file_extension(&self) -> &'static str {
        self.source_file
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or(self.source_file)
    }

    /// Recognizers in priority order; the predictor stops at the first
    /// one that matches anywhere in the source.
    pub fn recognizers(&self) -> &[OutputRecognizer] {
        &self.recognizers
    }

    /// Banner templates rendered with the profile's source file name.
    /// Purely cosmetic: they mimic a toolchain invocation.
    pub fn banner_lines(&self) -> Vec<String> {
        self.banner_templates
            .iter()
            .map(|template| template.replace("{file}", self.source_file))
            .collect()
    }

    /// Matches a pre-normalized (trimmed, lowercased) tag.
    pub(crate) fn matches_tag(&self, tag: &str) -> bool {
        self.tag_rules.iter().any(|rule| match rule {
            TagRule::Contains(fragment) => tag.contains(fragment),
            TagRule::Equals(fragment) => tag == *fragment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> LanguageProfile {
        LanguageProfile::new(
            "python",
            "Python 3",
            vec![TagRule::Contains("python"), TagRule::Equals("py")],
            vec![OutputRecognizer::expression(r"print\s*\(\s*(.+?)\s*\)")],
            vec!["$ python3 {file}"],
            "main.py",
        )
    }

    #[test]
    fn test_tag_rule_containment() {
        let profile = sample_profile();
        assert!(profile.matches_tag("python"));
        assert!(profile.matches_tag("python 3"));
        assert!(profile.matches_tag("py"));
        assert!(!profile.matches_tag("pytorch")); // "py" is equality-only
        assert!(!profile.matches_tag("java"));
    }

    #[test]
    fn test_banner_rendering_substitutes_file() {
        let profile = sample_profile();
        assert_eq!(profile.banner_lines(), vec!["$ python3 main.py"]);
    }

    #[test]
    fn test_file_extension() {
        let profile = sample_profile();
        assert_eq!(profile.file_extension(), "py");
    }

    #[test]
    fn test_recognizer_captures_first_match() {
        let profile = sample_profile();
        let rec = &profile.recognizers()[0];
        assert_eq!(rec.capture("print(x)\nprint(y)"), Some("x"));
        assert_eq!(rec.capture("no output here"), None);
    }
}
