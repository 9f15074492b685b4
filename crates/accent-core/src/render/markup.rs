use crate::settings::{MarkupFlavor, MarkupSettings};

use super::{AccentSpan, AccentStyle};

/// Concatenate the HTML of every span.
pub fn to_markup(markup: &MarkupSettings, spans: &[AccentSpan]) -> String {
    let mut out = String::with_capacity(spans.len() * 96);
    for span in spans {
        push_span(markup, span, &mut out);
    }
    out
}

pub fn push_span(markup: &MarkupSettings, span: &AccentSpan, out: &mut String) {
    push_open_tag(markup, span.style, out);
    push_escaped(&span.text, out);
    out.push_str("</span>");
}

fn push_open_tag(markup: &MarkupSettings, style: AccentStyle, out: &mut String) {
    out.push_str("<span class=\"");
    out.push_str(&markup.css_class);
    out.push('"');
    let Some(file) = style.image() else {
        out.push('>');
        return;
    };
    let base = markup.image_base.trim_end_matches('/');
    match markup.flavor {
        MarkupFlavor::Background => {
            out.push_str(" style=\"background-image: url(");
            push_escaped(base, out);
            out.push('/');
            out.push_str(file);
            out.push_str(");\">");
        }
        MarkupFlavor::Img => {
            out.push_str("><img src=\"");
            push_escaped(base, out);
            out.push('/');
            out.push_str(file);
            out.push_str("\">");
        }
    }
}

fn push_escaped(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn markup(flavor: MarkupFlavor) -> MarkupSettings {
        MarkupSettings {
            flavor,
            image_base: "/static/images/".to_string(),
            css_class: "accent".to_string(),
        }
    }

    fn span(style: AccentStyle, text: &str) -> AccentSpan {
        AccentSpan {
            style,
            text: text.to_string(),
        }
    }

    #[test]
    fn background_flavor() {
        let html = to_markup(
            &markup(MarkupFlavor::Background),
            &[span(AccentStyle::Peak, "カ")],
        );
        assert_eq!(
            html,
            "<span class=\"accent\" style=\"background-image: url(/static/images/accent_peak.png);\">カ</span>"
        );
    }

    #[test]
    fn img_flavor() {
        let html = to_markup(&markup(MarkupFlavor::Img), &[span(AccentStyle::FlatEnd, "ン")]);
        assert_eq!(
            html,
            "<span class=\"accent\"><img src=\"/static/images/accent_end_flat.png\">ン</span>"
        );
    }

    #[test]
    fn empty_style_has_no_image() {
        for flavor in [MarkupFlavor::Background, MarkupFlavor::Img] {
            let html = to_markup(&markup(flavor), &[span(AccentStyle::Empty, "ア")]);
            assert_eq!(html, "<span class=\"accent\">ア</span>");
        }
    }

    #[test]
    fn text_is_escaped() {
        let html = to_markup(
            &markup(MarkupFlavor::Background),
            &[span(AccentStyle::Empty, "<")],
        );
        assert_eq!(html, "<span class=\"accent\">&lt;</span>");
        let html = to_markup(
            &markup(MarkupFlavor::Background),
            &[span(AccentStyle::Empty, "a&\"'>")],
        );
        assert_eq!(html, "<span class=\"accent\">a&amp;&quot;&#39;&gt;</span>");
    }

    #[test]
    fn spans_are_concatenated_in_order() {
        let html = to_markup(
            &markup(MarkupFlavor::Background),
            &[span(AccentStyle::Empty, "ア"), span(AccentStyle::Empty, "イ")],
        );
        assert_eq!(html, "<span class=\"accent\">ア</span><span class=\"accent\">イ</span>");
    }
}
