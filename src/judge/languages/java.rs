use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "java",
        "Java",
        vec![TagRule::Contains("java")],
        vec![OutputRecognizer::expression(
            r"System\.out\.print(?:ln)?\s*\(\s*(.+?)\s*\)\s*;?",
        )],
        vec!["$ javac {file}", "$ java Main"],
        "Main.java",
    )
}
