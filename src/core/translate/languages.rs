/// Locale code to English display name.
///
/// Both the short codes common in existing projects (`dk`, `cn`, `jp`, ...)
/// and their ISO 639-1 forms are listed.
const LANGUAGES: &[(&str, &str)] = &[
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("dk", "Danish"),
    ("da", "Danish"),
    ("cn", "Chinese"),
    ("zh", "Chinese"),
    ("ru", "Russian"),
    ("it", "Italian"),
    ("nl", "Dutch"),
    ("pt", "Portuguese"),
    ("tr", "Turkish"),
    ("pl", "Polish"),
    ("ua", "Ukrainian"),
    ("uk", "Ukrainian"),
    ("fi", "Finnish"),
    ("no", "Norwegian"),
    ("nb", "Norwegian"),
    ("sv", "Swedish"),
    ("cz", "Czech"),
    ("cs", "Czech"),
    ("gr", "Greek"),
    ("el", "Greek"),
    ("jp", "Japanese"),
    ("ja", "Japanese"),
    ("kr", "Korean"),
    ("ko", "Korean"),
    ("ro", "Romanian"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("sk", "Slovak"),
    ("hi", "Hindi"),
    ("ta", "Tamil"),
    ("id", "Indonesian"),
    ("vn", "Vietnamese"),
    ("vi", "Vietnamese"),
];

/// Display name sent to the translation primitive. Unknown codes pass through.
///
/// Region subtags fall back to the base language (`pt-BR` -> `Portuguese`).
pub fn display_name(code: &str) -> &str {
    let lookup = |c: &str| {
        LANGUAGES
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(c))
            .map(|(_, name)| *name)
    };

    lookup(code)
        .or_else(|| code.split(['-', '_']).next().and_then(lookup))
        .unwrap_or(code)
}
