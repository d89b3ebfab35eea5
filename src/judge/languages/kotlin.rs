use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "kotlin",
        "Kotlin",
        vec![TagRule::Contains("kotlin"), TagRule::Equals("kt")],
        vec![OutputRecognizer::expression(r"print(?:ln)?\s*\(\s*(.+?)\s*\)")],
        vec![
            "$ kotlinc {file} -include-runtime -d main.jar",
            "$ java -jar main.jar",
        ],
        "main.kt",
    )
}
