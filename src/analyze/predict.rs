use crate::analyze::strip_quotes;
use crate::analyze::symbols::SymbolTable;
use crate::judge::profile::{CaptureRule, LanguageProfile};

/// Predict what the snippet would print when run.
///
/// Recognizers are tried in the profile's priority order against the
/// whole source text; the first one that matches anywhere wins and no
/// further statements are considered, even if multiple output calls
/// exist. Only the first recognized call is ever predicted.
///
/// Returns `None` when no recognizer matches. The caller cannot tell
/// that apart from a program that legitimately prints nothing; the
/// grading layer treats both identically.
pub fn predict_output(
    source: &str,
    profile: &LanguageProfile,
    symbols: &SymbolTable,
) -> Option<String> {
    for recognizer in profile.recognizers() {
        let Some(capture) = recognizer.capture(source) else {
            continue;
        };
        let printed = match recognizer.rule() {
            CaptureRule::Literal => capture.to_string(),
            CaptureRule::Expression => resolve(capture, symbols),
        };
        log::debug!(
            "predicted output for {} via recognizer: {:?}",
            profile.id(),
            printed
        );
        return Some(printed);
    }
    None
}

/// Resolve a captured argument expression into its best-guess printed
/// value: quoted literals are unquoted, bare identifiers go through the
/// symbol table, and anything else passes through verbatim.
fn resolve(expression: &str, symbols: &SymbolTable) -> String {
    let expression = expression.trim();
    if let Some(literal) = strip_quotes(expression) {
        return literal.to_string();
    }
    let name = expression.trim_start_matches('$');
    if let Some(value) = symbols.get(name) {
        return value.clone();
    }
    expression.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::symbols::build_symbols;
    use crate::judge::registry::resolve_profile;

    fn predict(tag: &str, source: &str) -> Option<String> {
        let profile = resolve_profile(tag);
        let symbols = build_symbols(source);
        predict_output(source, profile, &symbols)
    }

    #[test]
    fn test_quoted_literal_is_returned_exactly() {
        assert_eq!(predict("python", "print(\"Hello, World!\")").as_deref(), Some("Hello, World!"));
        assert_eq!(predict("python", "print('single')").as_deref(), Some("single"));
    }

    #[test]
    fn test_variable_reference_resolves_through_symbols() {
        assert_eq!(
            predict("python", "x = \"ready\"\nprint(x)").as_deref(),
            Some("ready")
        );
        assert_eq!(
            predict("java", "String x = \"done\";\nSystem.out.println(x);").as_deref(),
            Some("done")
        );
    }

    #[test]
    fn test_unresolved_expression_passes_through_verbatim() {
        assert_eq!(predict("python", "print(40 + 2)").as_deref(), Some("40 + 2"));
        assert_eq!(predict("python", "print(missing)").as_deref(), Some("missing"));
    }

    #[test]
    fn test_only_first_recognized_call_is_predicted() {
        assert_eq!(
            predict("python", "print(\"first\")\nprint(\"second\")").as_deref(),
            Some("first")
        );
    }

    #[test]
    fn test_no_recognizer_match_returns_none() {
        assert_eq!(predict("python", "x = 1\ny = 2"), None);
        assert_eq!(predict("java", "int x = 1;"), None);
        assert_eq!(predict("python", ""), None);
    }

    #[test]
    fn test_rust_plain_literal() {
        assert_eq!(predict("rust", "println!(\"42\")").as_deref(), Some("42"));
    }

    #[test]
    fn test_rust_single_placeholder_format() {
        assert_eq!(
            predict("rust", "let x = \"hi\";\nprintln!(\"{}\", x);").as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn test_c_printf_drops_trailing_newline_escape() {
        assert_eq!(
            predict("c", "printf(\"hello\\n\");").as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn test_c_single_format_argument() {
        assert_eq!(
            predict("c", "char *s = \"ok\";\nprintf(\"%s\\n\", s);").as_deref(),
            Some("ok")
        );
    }

    #[test]
    fn test_cpp_stream_first_operand() {
        assert_eq!(
            predict("c++", "string x = \"flow\";\ncout << x << endl;").as_deref(),
            Some("flow")
        );
        assert_eq!(
            predict("c++", "std::cout << \"direct\";").as_deref(),
            Some("direct")
        );
    }

    #[test]
    fn test_php_echo_with_variable() {
        assert_eq!(
            predict("php", "$msg = \"hi\";\necho $msg;").as_deref(),
            Some("hi")
        );
    }

    #[test]
    fn test_ruby_puts() {
        assert_eq!(predict("ruby", "x = \"gem\"\nputs x").as_deref(), Some("gem"));
    }

    #[test]
    fn test_go_println() {
        assert_eq!(
            predict("go", "x := \"gopher\"\nfmt.Println(x)").as_deref(),
            Some("gopher")
        );
    }

    #[test]
    fn test_csharp_writeline() {
        assert_eq!(
            predict("c#", "string x = \"net\";\nConsole.WriteLine(x);").as_deref(),
            Some("net")
        );
    }

    #[test]
    fn test_default_profile_for_unknown_tag() {
        assert_eq!(
            predict("whitespace", "console.log(\"fallback\");").as_deref(),
            Some("fallback")
        );
    }
}
