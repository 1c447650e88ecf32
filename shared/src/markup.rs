//! HTML fragments and text labels derived from POI data.
//!
//! Everything that ends up inside markup goes through [`escape_html`] first;
//! POI content comes from a static file nobody validates.

use crate::poi::Poi;

/// Escape `&`, `<`, `>`, `"` and `'` for interpolation into HTML text or
/// attribute values.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Class token for a category label: `cat-` + lowercase, whitespace runs as `-`.
pub fn category_class(category: &str) -> String {
    let lowered = category.to_lowercase();
    let mut out = String::with_capacity(lowered.len() + 4);
    out.push_str("cat-");
    let mut in_space = false;
    for ch in lowered.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('-');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

/// Popup body bound to a POI marker.
pub fn popup_html(poi: &Poi) -> String {
    let mut html = String::with_capacity(256);
    html.push_str(r#"<div class="popup">"#);
    html.push_str(&format!(
        r#"<div class="popup-title">{}</div><div class="popup-meta">{}</div><p class="popup-desc">{}</p>"#,
        escape_html(&poi.name),
        escape_html(&poi.category),
        escape_html(&poi.desc),
    ));
    if let Some(url) = poi.link() {
        html.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noopener">Apri link</a>"#,
            escape_html(url)
        ));
    }
    html.push_str("</div>");
    html
}

/// `"Punti visibili: {visible} / {total}"`.
pub fn count_label(visible: usize, total: usize) -> String {
    format!("Punti visibili: {visible} / {total}")
}

/// Accessible label of a list row.
pub fn row_label(poi: &Poi) -> String {
    format!("Apri {}", poi.name)
}

#[cfg(test)]
mod tests {
    use super::{category_class, count_label, escape_html, popup_html};
    use crate::poi::{Poi, PoiId};

    fn hostile() -> Poi {
        Poi {
            id: PoiId::Number(7),
            name: "<script>".into(),
            category: "Arte & Storia".into(),
            desc: r#""quoted" & special"#.into(),
            lat: 45.0,
            lon: 11.0,
            url: None,
        }
    }

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom's & co</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom&#39;s &amp; co&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn ampersand_is_not_double_escaped_in_one_pass() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn popup_escapes_untrusted_fields() {
        let html = popup_html(&hostile());
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;quoted&quot; &amp; special"));
        assert!(html.contains("Arte &amp; Storia"));
        assert!(!html.contains("<script>"));
        assert!(!html.contains(r#""quoted""#));
    }

    #[test]
    fn popup_link_is_optional_and_escaped() {
        assert!(!popup_html(&hostile()).contains("<a "));

        let mut poi = hostile();
        poi.url = Some(r#"https://example.org/?q="x"&y=1"#.into());
        let html = popup_html(&poi);
        assert!(html.contains(
            r#"<a href="https://example.org/?q=&quot;x&quot;&amp;y=1" target="_blank" rel="noopener">Apri link</a>"#
        ));
    }

    #[test]
    fn category_class_collapses_whitespace() {
        assert_eq!(category_class("Arte"), "cat-arte");
        assert_eq!(category_class("Punti  di\tInteresse"), "cat-punti-di-interesse");
        assert_eq!(category_class("Cibo e Vino"), "cat-cibo-e-vino");
    }

    #[test]
    fn count_label_reads_visible_over_total() {
        assert_eq!(count_label(3, 10), "Punti visibili: 3 / 10");
        assert!(count_label(0, 0).ends_with("0 / 0"));
    }
}
