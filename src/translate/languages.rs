/// Languages offered by the demo page, paired with the two-letter (or
/// region) codes Google Translate expects in its `sl`/`tl` parameters.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("English", "en"),
    ("Spanish", "es"),
    ("French", "fr"),
    ("German", "de"),
    ("Italian", "it"),
    ("Chinese", "zh-CN"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Russian", "ru"),
    ("Portuguese", "pt"),
    ("Arabic", "ar"),
];

pub fn code_for(name: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(lang, _)| *lang == name)
        .map(|(_, code)| *code)
}
