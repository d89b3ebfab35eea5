use crate::judge::profile::LanguageProfile;

/// Fallback line shown when no output statement was recognized. This is
/// also what a legitimately silent program produces; the two cases are
/// indistinguishable here.
pub const NO_OUTPUT_LINE: &str = "(no output produced)";

/// Assemble the display log for one run: the profile's cosmetic banner
/// lines followed by the predicted output, or the fallback line when
/// nothing was predicted. Pure aggregation; the lifecycle controller
/// owns when this happens, not how it is formatted.
pub fn compose_log(profile: &LanguageProfile, predicted: Option<&str>) -> Vec<String> {
    let mut log = profile.banner_lines();
    match predicted {
        Some(output) => log.push(output.to_string()),
        None => log.push(NO_OUTPUT_LINE.to_string()),
    }
    log
}
