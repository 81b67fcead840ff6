use std::io::{Cursor, Read};

use docrelay::infrastructure::conversion::build_docx;

fn read_entry(data: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(data.to_vec())).unwrap();
    let mut entry = archive.by_name(name).unwrap();
    let mut content = String::new();
    entry.read_to_string(&mut content).unwrap();
    content
}

#[test]
fn given_paragraphs_when_building_docx_then_required_parts_present() {
    let data = build_docx(&["hello".to_string()]).unwrap();

    let mut archive = zip::ZipArchive::new(Cursor::new(data)).unwrap();
    for name in ["[Content_Types].xml", "_rels/.rels", "word/document.xml"] {
        assert!(archive.by_name(name).is_ok(), "missing {name}");
    }
}

#[test]
fn given_paragraphs_when_building_docx_then_each_lands_in_own_paragraph_element() {
    let data = build_docx(&["one".to_string(), "two".to_string()]).unwrap();

    let xml = read_entry(&data, "word/document.xml");

    assert_eq!(xml.matches("<w:p>").count(), 2);
    assert!(xml.contains(">one</w:t>"));
    assert!(xml.contains(">two</w:t>"));
}

#[test]
fn given_special_characters_when_building_docx_then_xml_escaped() {
    let data = build_docx(&["a < b & \"c\"".to_string()]).unwrap();

    let xml = read_entry(&data, "word/document.xml");

    assert!(xml.contains("a &lt; b &amp; &quot;c&quot;"));
}

#[test]
fn given_no_paragraphs_when_building_docx_then_body_still_valid() {
    let data = build_docx(&[]).unwrap();

    let xml = read_entry(&data, "word/document.xml");

    assert!(xml.contains("<w:body><w:p/></w:body>"));
}
