use crate::judge::profile::{LanguageProfile, OutputRecognizer, TagRule};

pub(crate) fn profile() -> LanguageProfile {
    LanguageProfile::new(
        "csharp",
        "C#",
        vec![
            TagRule::Contains("c#"),
            TagRule::Contains("csharp"),
            TagRule::Contains("sharp"),
            TagRule::Equals("cs"),
        ],
        vec![OutputRecognizer::expression(
            r"Console\.Write(?:Line)?\s*\(\s*(.+?)\s*\)\s*;?",
        )],
        vec!["$ dotnet run"],
        "Program.cs",
    )
}
