//! Visual Studio .NET style manifest writer.
//!
//! ```text
//! <VisualStudioProject>
//!     <CSHARP
//!         ProjectType = "Local"
//!     >
//!         <Files>
//!             <Include>
//!                 <File
//!                     RelPath = "Model\Board.cs"
//!                     BuildAction = "Compile"
//!                 />
//!             </Include>
//!         </Files>
//!     </CSHARP>
//! </VisualStudioProject>
//! ```

use csgen_core::domain::{Element, ManifestDocument, ManifestNode, XmlDeclaration};
use quick_xml::escape::{escape, partial_escape};
use serde::{Deserialize, Serialize};

/// Layout knobs for [`VisualStudioWriter`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterOptions {
    /// Spaces per nesting level.
    pub indent: usize,
    /// Use `\r\n` line endings.
    pub crlf: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self {
            indent: 4,
            crlf: true,
        }
    }
}

impl WriterOptions {
    fn newline(&self) -> &'static str {
        if self.crlf { "\r\n" } else { "\n" }
    }
}

/// Serialises a [`ManifestDocument`] one attribute per line, the way
/// Visual Studio .NET writes project files.
#[derive(Debug, Clone, Default)]
pub struct VisualStudioWriter {
    options: WriterOptions,
}

impl VisualStudioWriter {
    pub fn new(options: WriterOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &WriterOptions {
        &self.options
    }

    pub fn write(&self, document: &ManifestDocument) -> String {
        let mut out = Output {
            buf: String::new(),
            options: &self.options,
        };

        if let Some(declaration) = &document.declaration {
            out.line(0, &declaration_line(declaration));
        }
        for node in &document.nodes {
            out.node(0, node);
        }

        out.buf
    }
}

struct Output<'a> {
    buf: String,
    options: &'a WriterOptions,
}

impl Output<'_> {
    fn pad(&mut self, depth: usize) {
        self.buf
            .extend(std::iter::repeat_n(' ', depth * self.options.indent));
    }

    fn line(&mut self, depth: usize, text: &str) {
        self.pad(depth);
        self.buf.push_str(text);
        self.buf.push_str(self.options.newline());
    }

    fn node(&mut self, depth: usize, node: &ManifestNode) {
        match node {
            ManifestNode::Element(element) => self.element(depth, element),
            ManifestNode::Text(text) => self.line(depth, &partial_escape(text.as_str())),
            ManifestNode::CData(data) => self.line(depth, &format!("<![CDATA[{data}]]>")),
            ManifestNode::Comment(comment) => self.line(depth, &format!("<!--{comment}-->")),
            ManifestNode::ProcessingInstruction(pi) => self.line(depth, &format!("<?{pi}?>")),
            ManifestNode::DocType(doctype) => self.line(depth, &format!("<!DOCTYPE {doctype}>")),
        }
    }

    fn element(&mut self, depth: usize, element: &Element) {
        let name = &element.name;

        if element.attributes.is_empty() {
            if element.children.is_empty() {
                self.line(depth, &format!("<{name} />"));
            } else if element.is_text_only() {
                self.line(depth, &format!("<{name}>{}</{name}>", inline(element)));
            } else {
                self.line(depth, &format!("<{name}>"));
                self.children(depth + 1, element);
                self.line(depth, &format!("</{name}>"));
            }
            return;
        }

        self.line(depth, &format!("<{name}"));
        for attribute in &element.attributes {
            self.line(
                depth + 1,
                &format!("{} = \"{}\"", attribute.name, escape(attribute.value.as_str())),
            );
        }

        if element.children.is_empty() {
            self.line(depth, "/>");
        } else {
            self.line(depth, ">");
            self.children(depth + 1, element);
            self.line(depth, &format!("</{name}>"));
        }
    }

    fn children(&mut self, depth: usize, element: &Element) {
        for child in &element.children {
            self.node(depth, child);
        }
    }
}

fn inline(element: &Element) -> String {
    element
        .children
        .iter()
        .map(|child| match child {
            ManifestNode::Text(text) => partial_escape(text.as_str()).into_owned(),
            ManifestNode::CData(data) => format!("<![CDATA[{data}]]>"),
            _ => String::new(),
        })
        .collect()
}

fn declaration_line(declaration: &XmlDeclaration) -> String {
    let mut line = format!("<?xml version=\"{}\"", declaration.version);
    if let Some(encoding) = &declaration.encoding {
        line.push_str(&format!(" encoding=\"{encoding}\""));
    }
    if let Some(standalone) = &declaration.standalone {
        line.push_str(&format!(" standalone=\"{standalone}\""));
    }
    line.push_str("?>");
    line
}
