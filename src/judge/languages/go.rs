use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "go",
        "Go",
        vec![TagRule::Contains("golang"), TagRule::Equals("go")],
        vec![OutputRecognizer::expression(
            r"fmt\.Print(?:ln|f)?\s*\(\s*(.+?)\s*\)",
        )],
        vec!["$ go run {file}"],
        "main.go",
    )
}
