use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "python",
        "Python 3",
        vec![
            TagRule::Contains("python"),
            TagRule::Equals("py"),
            TagRule::Equals("py3"),
        ],
        vec![OutputRecognizer::expression(r"print\s*\(\s*(.+?)\s*\)")],
        vec!["$ python3 {file}"],
        "main.py",
    )
}
