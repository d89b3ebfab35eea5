use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "swift",
        "Swift",
        vec![TagRule::Contains("swift")],
        vec![OutputRecognizer::expression(r"print\s*\(\s*(.+?)\s*\)")],
        vec!["$ swift {file}"],
        "main.swift",
    )
}
