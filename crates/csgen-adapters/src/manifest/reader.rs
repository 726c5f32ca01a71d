//! Manifest parsing with quick-xml.

use std::borrow::Cow;

use csgen_core::domain::{Attribute, Element, ManifestDocument, ManifestNode, XmlDeclaration};
use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use thiserror::Error;

/// Parse failure with the byte offset it was detected at.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} (at byte {position})")]
pub struct ReadError {
    pub position: u64,
    pub message: String,
}

/// Build a [`ManifestDocument`] from XML text.
///
/// Whitespace-only text between elements is dropped; everything else is
/// kept in document order.
pub fn read_document(source: &str) -> Result<ManifestDocument, ReadError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut reader = Reader::from_str(source);
    reader.config_mut().trim_text(true);

    let mut document = ManifestDocument::default();
    let mut open: Vec<Element> = Vec::new();

    loop {
        let position = reader.buffer_position() as u64;
        let fail = |message: String| ReadError { position, message };

        let event = reader.read_event().map_err(|e| fail(e.to_string()))?;
        match event {
            Event::Start(start) => open.push(element_from(&start).map_err(fail)?),
            Event::Empty(start) => {
                let element = element_from(&start).map_err(fail)?;
                attach(&mut document, &mut open, ManifestNode::Element(element));
            }
            Event::End(_) => {
                let element = open
                    .pop()
                    .ok_or_else(|| fail("closing tag without an open element".into()))?;
                attach(&mut document, &mut open, ManifestNode::Element(element));
            }
            Event::Text(text) => {
                let text = text.unescape().map_err(|e| fail(e.to_string()))?;
                attach(&mut document, &mut open, ManifestNode::Text(text.into_owned()));
            }
            Event::CData(data) => {
                let data = utf8(&data).map_err(fail)?;
                attach(&mut document, &mut open, ManifestNode::CData(data.into_owned()));
            }
            Event::Comment(comment) => {
                let comment = utf8(&comment).map_err(fail)?;
                attach(&mut document, &mut open, ManifestNode::Comment(comment.into_owned()));
            }
            Event::PI(pi) => {
                let pi = utf8(&pi).map_err(fail)?;
                attach(
                    &mut document,
                    &mut open,
                    ManifestNode::ProcessingInstruction(pi.into_owned()),
                );
            }
            Event::DocType(doctype) => {
                let doctype = utf8(&doctype).map_err(fail)?;
                attach(
                    &mut document,
                    &mut open,
                    ManifestNode::DocType(doctype.trim().to_owned()),
                );
            }
            Event::Decl(decl) => {
                let version = decl.version().map_err(|e| fail(e.to_string()))?;
                let encoding = match decl.encoding() {
                    Some(value) => Some(value.map_err(|e| fail(e.to_string()))?),
                    None => None,
                };
                let standalone = match decl.standalone() {
                    Some(value) => Some(value.map_err(|e| fail(e.to_string()))?),
                    None => None,
                };
                document.declaration = Some(XmlDeclaration {
                    version: utf8(&version).map_err(fail)?.into_owned(),
                    encoding: encoding
                        .map(|e| utf8(&e).map(Cow::into_owned))
                        .transpose()
                        .map_err(fail)?,
                    standalone: standalone
                        .map(|s| utf8(&s).map(Cow::into_owned))
                        .transpose()
                        .map_err(fail)?,
                });
            }
            Event::Eof => break,
        }
    }

    if let Some(unclosed) = open.last() {
        return Err(ReadError {
            position: reader.buffer_position() as u64,
            message: format!("unclosed element <{}>", unclosed.name),
        });
    }
    if document.root().is_none() {
        return Err(ReadError {
            position: 0,
            message: "document has no root element".into(),
        });
    }

    Ok(document)
}

fn element_from(start: &BytesStart<'_>) -> Result<Element, String> {
    let mut element = Element::new(utf8(start.name().as_ref())?.into_owned());
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| e.to_string())?;
        let name = utf8(attribute.key.as_ref())?.into_owned();
        let value = attribute.unescape_value().map_err(|e| e.to_string())?;
        element.attributes.push(Attribute::new(name, value.into_owned()));
    }
    Ok(element)
}

fn attach(document: &mut ManifestDocument, open: &mut [Element], node: ManifestNode) {
    match open.last_mut() {
        Some(parent) => parent.children.push(node),
        None => document.nodes.push(node),
    }
}

fn utf8(bytes: &[u8]) -> Result<Cow<'_, str>, String> {
    std::str::from_utf8(bytes)
        .map(Cow::Borrowed)
        .map_err(|e| format!("invalid UTF-8: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<!-- Puzzle project -->
<VisualStudioProject>
    <CSHARP
        ProjectType = "Local"
        ProductVersion = "7.10.3077"
    >
        <Build>
            <Settings RootNamespace = "Puzzle" />
        </Build>
        <Files>
            <Include>
                <File
                    RelPath = "App.ico"
                    BuildAction = "Content"
                />
                <File RelPath = "Model\Board.cs" SubType = "Code" BuildAction = "Compile" />
            </Include>
        </Files>
    </CSHARP>
</VisualStudioProject>
"#;

    #[test]
    fn reads_declaration_comments_and_tree() {
        let doc = read_document(PROJECT).unwrap();

        let decl = doc.declaration.as_ref().unwrap();
        assert_eq!(decl.version, "1.0");
        assert_eq!(decl.encoding.as_deref(), Some("utf-8"));
        assert_eq!(doc.nodes[0], ManifestNode::Comment(" Puzzle project ".into()));

        let root = doc.root().unwrap();
        assert_eq!(root.name, "VisualStudioProject");
        let csharp = root.first_child("CSHARP").unwrap();
        let names: Vec<_> = csharp.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["ProjectType", "ProductVersion"]);
    }

    #[test]
    fn include_entries_keep_order_and_values() {
        let doc = read_document(PROJECT).unwrap();
        let include = doc.insertion_point(&Default::default()).unwrap();
        let rels: Vec<_> = include
            .child_elements()
            .map(|e| e.attribute("RelPath").unwrap())
            .collect();
        assert_eq!(rels, ["App.ico", "Model\\Board.cs"]);
    }

    #[test]
    fn formatting_whitespace_is_dropped() {
        let doc = read_document("<a>\n    <b />\n</a>").unwrap();
        assert_eq!(doc.root().unwrap().children.len(), 1);
    }

    #[test]
    fn entities_are_unescaped() {
        let doc = read_document(r#"<a k="x &amp; y">1 &lt; 2</a>"#).unwrap();
        let root = doc.root().unwrap();
        assert_eq!(root.attribute("k"), Some("x & y"));
        assert_eq!(root.children, [ManifestNode::Text("1 < 2".into())]);
    }

    #[test]
    fn cdata_and_processing_instructions_survive() {
        let doc = read_document("<?tool run?><a><![CDATA[<raw>]]></a>").unwrap();
        assert_eq!(doc.nodes[0], ManifestNode::ProcessingInstruction("tool run".into()));
        assert_eq!(
            doc.root().unwrap().children,
            [ManifestNode::CData("<raw>".into())]
        );
        assert!(doc.declaration.is_none());
    }

    #[test]
    fn malformed_documents_are_rejected() {
        assert!(read_document("<a><b></a>").is_err());
        assert!(read_document("<a>").is_err());
        assert!(read_document("").is_err());
        assert!(read_document("<!-- only a comment -->").is_err());
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let doc = read_document("\u{feff}<VisualStudioProject />").unwrap();
        assert_eq!(doc.root().unwrap().name, "VisualStudioProject");
    }
}
