use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "dart",
        "Dart",
        vec![TagRule::Contains("dart"), TagRule::Contains("flutter")],
        vec![OutputRecognizer::expression(r"print\s*\(\s*(.+?)\s*\)\s*;?")],
        vec!["$ dart run {file}"],
        "main.dart",
    )
}
