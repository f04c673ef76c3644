//! Platform-constrained titles and descriptions.

use crate::PlatformConfig;
use reelsmith_core::{SeoCopy, normalize_platform_key};

/// First `limit` characters of `text`, never splitting a code point.
fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

/// Format a title and description for one platform.
///
/// The title and description are cut to the platform limits, then a blank
/// line and a hashtag line built from the first `hashtag_limit` keywords
/// follow the description. The whole description is trimmed, so an empty
/// hashtag line leaves nothing behind.
///
/// # Examples
///
/// ```
/// use reelsmith_pipeline::PlatformConfig;
/// use reelsmith_pipeline::seo::format_metadata;
///
/// let copy = format_metadata(
///     "youtube",
///     "Demo",
///     "Watch the launch.",
///     &["grow reach".to_string(), "demo launch".to_string()],
///     &PlatformConfig::default(),
/// );
/// assert_eq!(copy.description(), "Watch the launch.\n\n#growreach #demolaunch");
/// ```
pub fn format_metadata(
    platform: &str,
    title: &str,
    description: &str,
    keywords: &[String],
    config: &PlatformConfig,
) -> SeoCopy {
    let key = normalize_platform_key(platform);
    let requirements = config.requirements_for(&key);

    let title = truncate_chars(title, *requirements.title_limit());
    let description = truncate_chars(description, *requirements.description_limit());

    let tagged: Vec<String> = keywords
        .iter()
        .take(*requirements.hashtag_limit())
        .cloned()
        .collect();
    let hashtags = tagged
        .iter()
        .map(|keyword| {
            let compact: String = keyword.chars().filter(|c| !c.is_whitespace()).collect();
            format!("#{}", compact)
        })
        .collect::<Vec<_>>()
        .join(" ");

    let full = format!("{}\n\n{}", description, hashtags);
    SeoCopy::new(key, title, full.trim(), tagged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars_respects_code_points() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("🎬🎬🎬", 1), "🎬");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }
}
