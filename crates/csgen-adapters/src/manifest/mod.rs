//! Project manifest codec: quick-xml reader + Visual Studio style writer.

mod reader;
mod writer;

pub use reader::{ReadError, read_document};
pub use writer::{VisualStudioWriter, WriterOptions};

use csgen_core::{
    application::{ApplicationError, ports::ManifestCodec},
    domain::ManifestDocument,
    error::CsgenResult,
};
use tracing::{debug, instrument};

/// [`ManifestCodec`] for Visual Studio .NET `.csproj` files.
#[derive(Debug, Clone, Default)]
pub struct XmlManifestCodec {
    writer: VisualStudioWriter,
}

impl XmlManifestCodec {
    pub fn new(options: WriterOptions) -> Self {
        Self {
            writer: VisualStudioWriter::new(options),
        }
    }
}

impl ManifestCodec for XmlManifestCodec {
    #[instrument(skip_all, fields(bytes = source.len()))]
    fn parse(&self, source: &str) -> CsgenResult<ManifestDocument> {
        let document = read_document(source).map_err(|e| ApplicationError::ManifestParse {
            reason: e.to_string(),
        })?;
        debug!(nodes = document.nodes.len(), "Manifest parsed");
        Ok(document)
    }

    #[instrument(skip_all)]
    fn serialize(&self, document: &ManifestDocument) -> CsgenResult<String> {
        if document.root().is_none() {
            return Err(ApplicationError::ManifestSerialize {
                reason: "document has no root element".into(),
            }
            .into());
        }
        Ok(self.writer.write(document))
    }
}

#[cfg(test)]
mod tests {
    use csgen_core::domain::{Element, FileDeclaration, InsertionPath, ManifestPatcher};

    use super::*;

    const EMPTY_INCLUDE: &str = "<VisualStudioProject>\r\n    <CSHARP\r\n        ProjectType = \"Local\"\r\n    >\r\n        <Files>\r\n            <Include />\r\n        </Files>\r\n    </CSHARP>\r\n</VisualStudioProject>\r\n";

    #[test]
    fn canonical_document_round_trips_byte_for_byte() {
        let codec = XmlManifestCodec::default();
        let doc = codec.parse(EMPTY_INCLUDE).unwrap();
        assert_eq!(codec.serialize(&doc).unwrap(), EMPTY_INCLUDE);
    }

    #[test]
    fn reparse_after_write_is_structurally_equal() {
        let codec = XmlManifestCodec::default();
        let source = r#"<?xml version="1.0"?>
<!-- c -->
<VisualStudioProject><CSHARP ProjectType="Local"><Files><Include>
<File RelPath="A.cs" SubType="Code"/></Include><Exclude/></Files></CSHARP></VisualStudioProject>"#;
        let doc = codec.parse(source).unwrap();
        let again = codec.parse(&codec.serialize(&doc).unwrap()).unwrap();
        assert_eq!(doc, again);
    }

    #[test]
    fn patched_entries_are_written_after_existing_ones() {
        let codec = XmlManifestCodec::new(WriterOptions {
            indent: 4,
            crlf: false,
        });
        let mut doc = codec
            .parse("<VisualStudioProject><CSHARP><Files><Include><File RelPath=\"Main.cs\"/></Include></Files></CSHARP></VisualStudioProject>")
            .unwrap();

        let mut patcher = ManifestPatcher::locate(&mut doc, &InsertionPath::default()).unwrap();
        patcher.append(
            &FileDeclaration::new("Views/LoginView.cs", "view.cs")
                .with_attribute("sub_type", "Code")
                .with_attribute("build_action", "Compile"),
        );

        let out = codec.serialize(&doc).unwrap();
        let expected_tail = "                <File\n                    RelPath = \"Main.cs\"\n                />\n                <File\n                    SubType = \"Code\"\n                    BuildAction = \"Compile\"\n                    RelPath = \"Views\\LoginView.cs\"\n                />\n            </Include>\n";
        assert!(out.contains(expected_tail), "{out}");
    }

    #[test]
    fn parse_errors_are_manifest_errors() {
        let err = XmlManifestCodec::default().parse("<a><b></a>").unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse project file"));
    }

    #[test]
    fn serializing_an_empty_document_fails() {
        let err = XmlManifestCodec::default()
            .serialize(&ManifestDocument::default())
            .unwrap_err();
        assert!(err.to_string().contains("no root element"));

        let ok = XmlManifestCodec::default().serialize(&ManifestDocument::new(Element::new("A")));
        assert!(ok.is_ok());
    }
}
