/// Helpers shared by the customer and product tables.
use leptos::prelude::*;

/// Splits `text` into `(segment, is_match)` pieces around case-insensitive
/// occurrences of `filter`. Text whose lowercase form changes byte length
/// is returned whole, since offsets would no longer line up.
pub fn match_segments<'a>(text: &'a str, filter: &str) -> Vec<(&'a str, bool)> {
    let needle = filter.trim().to_lowercase();
    let haystack = text.to_lowercase();
    if needle.is_empty() || haystack.len() != text.len() {
        return vec![(text, false)];
    }

    let mut segments = Vec::new();
    let mut last = 0;
    while let Some(pos) = haystack[last..].find(&needle) {
        let start = last + pos;
        let end = start + needle.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            break;
        }
        if start > last {
            segments.push((&text[last..start], false));
        }
        segments.push((&text[start..end], true));
        last = end;
    }
    if last < text.len() {
        segments.push((&text[last..], false));
    }
    segments
}

/// Search hits wrapped in `<mark>`.
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    match_segments(text, filter)
        .into_iter()
        .map(|(segment, is_match)| {
            let segment = segment.to_string();
            if is_match {
                view! { <mark class="search-hit">{segment}</mark> }.into_any()
            } else {
                view! { <span>{segment}</span> }.into_any()
            }
        })
        .collect_view()
        .into_any()
}

pub fn row_class(is_selected: bool) -> &'static str {
    if is_selected {
        "table-row--clickable table-row--selected"
    } else {
        "table-row--clickable"
    }
}

pub fn or_dash(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_segments_case_insensitive() {
        assert_eq!(
            match_segments("Camiseta Básica camiseta", "CAMI"),
            vec![("Cami", true), ("seta Básica ", false), ("cami", true), ("seta", false)]
        );
    }

    #[test]
    fn test_match_segments_without_filter() {
        assert_eq!(match_segments("Tênis", "  "), vec![("Tênis", false)]);
        assert_eq!(match_segments("Tênis", "x"), vec![("Tênis", false)]);
    }

    #[test]
    fn test_match_segments_reuses_filter_across_columns() {
        let search = String::from("sp");
        assert_eq!(match_segments("CUST-SP-0042", &search), vec![("CUST-", false), ("SP", true), ("-0042", false)]);
        assert_eq!(match_segments("São Paulo, SP", &search), vec![("São Paulo, ", false), ("SP", true)]);
        assert_eq!(search, "sp");
    }

    #[test]
    fn test_or_dash() {
        assert_eq!(or_dash(None), "-");
        assert_eq!(or_dash(Some(" ".into())), "-");
        assert_eq!(or_dash(Some("SP".into())), "SP");
    }
}
