//! Genre list handling.
//!
//! Genres are stored as a proper text-array column; the curly-brace
//! delimited encoding (`{Jazz,Folk}`) survives only as a legacy-import
//! boundary for data exported from the old directory.

/// Decode a legacy `{a,b,c}` genre string into an ordered list.
///
/// Tolerates the quoting the old exporter produced (`{"R&B","Hip-Hop"}`),
/// trims whitespace, and drops empty segments so `{}` decodes to an empty
/// list rather than `[""]`.
///
/// # Examples
///
/// ```
/// use marquee_core::decode_legacy_genres;
///
/// let genres = decode_legacy_genres("{Jazz,Folk}");
/// assert_eq!(genres, vec!["Jazz".to_string(), "Folk".to_string()]);
/// assert!(decode_legacy_genres("{}").is_empty());
/// ```
pub fn decode_legacy_genres(encoded: &str) -> Vec<String> {
    let inner = encoded
        .trim()
        .trim_start_matches('{')
        .trim_end_matches('}');
    inner
        .split(',')
        .map(|genre| genre.trim().trim_matches('"').to_string())
        .filter(|genre| !genre.is_empty())
        .collect()
}

/// Encode an ordered genre list into the legacy `{a,b,c}` form.
///
/// Inverse of [`decode_legacy_genres`] for genre names free of commas and
/// braces, which is all the legacy exporter ever emitted.
pub fn encode_legacy_genres(genres: &[String]) -> String {
    format!("{{{}}}", genres.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_plain_list() {
        assert_eq!(
            decode_legacy_genres("{Jazz,Reggae,Swing,Classical,Folk}"),
            vec!["Jazz", "Reggae", "Swing", "Classical", "Folk"]
        );
    }

    #[test]
    fn decodes_quoted_entries() {
        assert_eq!(
            decode_legacy_genres("{\"Rock n Roll\",\"R&B\",Hip-Hop}"),
            vec!["Rock n Roll", "R&B", "Hip-Hop"]
        );
    }

    #[test]
    fn empty_braces_decode_to_empty_list() {
        assert!(decode_legacy_genres("{}").is_empty());
        assert!(decode_legacy_genres("").is_empty());
    }

    #[test]
    fn round_trip_preserves_order() {
        let genres = vec!["Jazz".to_string(), "Folk".to_string()];
        let encoded = encode_legacy_genres(&genres);
        assert_eq!(encoded, "{Jazz,Folk}");
        assert_eq!(decode_legacy_genres(&encoded), genres);
    }
}
