use std::fmt::Write as _;

use crate::dom::{Document, NodeId};

/// Escapes text for use in XML content and double-quoted attributes.
#[must_use]
pub fn escape_xml(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    escape_xml_into(&mut out, raw);
    out
}

fn escape_xml_into(out: &mut String, raw: &str) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

pub(super) fn write_element(document: &Document, node: NodeId, out: &mut String) {
    let Some(element) = document.element(node) else {
        return;
    };

    out.push('<');
    out.push_str(element.tag());
    for (name, value) in element.attributes() {
        let _ = write!(out, " {name}=\"");
        escape_xml_into(out, value);
        out.push('"');
    }
    if !element.styles.is_empty() {
        out.push_str(" style=\"");
        for (idx, (property, value)) in element.styles.iter().enumerate() {
            if idx > 0 {
                out.push(' ');
            }
            escape_xml_into(out, property);
            out.push_str(": ");
            escape_xml_into(out, value);
            out.push(';');
        }
        out.push('"');
    }

    if element.children().is_empty() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in element.children() {
        write_element(document, *child, out);
    }
    let _ = write!(out, "</{}>", element.tag());
}
