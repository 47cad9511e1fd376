//! Report Export
//!
//! Renders tabular rows as an XML report and hands it to the browser as
//! a downloaded file via a Blob URL.

use wasm_bindgen::JsCast;

/// Render rows as `<report><row><key>value</key>…</row>…</report>`.
/// Keys come from the caller and must be valid XML names.
pub fn render_xml(rows: &[Vec<(String, String)>]) -> String {
    let mut xml = String::from("<?xml version='1.0' encoding='UTF-8'?>\n<report>\n");
    for row in rows {
        xml.push_str("  <row>\n");
        for (key, value) in row {
            xml.push_str(&format!("    <{k}>{v}</{k}>\n", k = key, v = escape(value)));
        }
        xml.push_str("  </row>\n");
    }
    xml.push_str("</report>");
    xml
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Trigger a browser download of `{file_name}.xml`. Failures along the
/// Blob/anchor path are silently dropped; export is best-effort.
pub fn download_xml(file_name: &str, rows: &[Vec<(String, String)>]) {
    let xml = render_xml(rows);
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(&xml));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/xml");
    let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options) else {
        return;
    };
    let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
        return;
    };

    if let Ok(anchor) = document
        .create_element("a")
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().map_err(Into::into))
    {
        anchor.set_href(&url);
        anchor.set_download(&format!("{}.xml", file_name));
        anchor.click();
    }
    let _ = web_sys::Url::revoke_object_url(&url);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn renders_rows_in_order() {
        let xml = render_xml(&[
            row(&[("name", "Dune"), ("price", "10")]),
            row(&[("name", "Emma")]),
        ]);
        assert!(xml.starts_with("<?xml version='1.0' encoding='UTF-8'?>\n<report>"));
        assert!(xml.contains("<name>Dune</name>"));
        assert!(xml.contains("<price>10</price>"));
        assert!(xml.contains("<name>Emma</name>"));
        assert!(xml.ends_with("</report>"));
        assert!(xml.find("Dune").unwrap() < xml.find("Emma").unwrap());
    }

    #[test]
    fn escapes_markup_in_values() {
        let xml = render_xml(&[row(&[("name", "Cats & <Dogs>")])]);
        assert!(xml.contains("<name>Cats &amp; &lt;Dogs&gt;</name>"));
    }

    #[test]
    fn empty_report_has_no_rows() {
        let xml = render_xml(&[]);
        assert!(!xml.contains("<row>"));
    }
}
