//! In-memory model of a Visual Studio project manifest and the patch that
//! registers generated files in it.
//!
//! The model keeps everything a re-serialisation needs to reproduce the
//! document's content: element order, attribute order, comments, text,
//! CDATA sections, processing instructions, the doctype and the XML
//! declaration. Formatting whitespace is not part of the model.
//!
//! ```text
//! <VisualStudioProject>
//!     <CSHARP ...>
//!         <Files>
//!             <Include>          ← insertion point
//!                 <File RelPath = "..." />
//!                 <File ... />   ← appended entries
//!             </Include>
//!         </Files>
//!     </CSHARP>
//! </VisualStudioProject>
//! ```

use std::fmt;
use std::str::FromStr;

use crate::domain::{
    declaration::FileDeclaration,
    error::DomainError,
    naming::{camelize, to_manifest_path},
};

/// Element path of the file list that receives new entries.
pub const DEFAULT_INSERTION_PATH: &str = "VisualStudioProject/CSHARP/Files/Include";

/// Element name of a manifest file entry.
pub const ENTRY_ELEMENT: &str = "File";

/// Declaration key whose camelised form holds the entry's relative path.
const RELATIVE_PATH_KEY: &str = "rel_path";

// ── Tree ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<ManifestNode>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn with_child(mut self, child: impl Into<ManifestNode>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// Set an attribute, keeping its position if it already exists.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(attr) => attr.value = value,
            None => self.attributes.push(Attribute { name, value }),
        }
    }

    pub fn push_child(&mut self, child: impl Into<ManifestNode>) {
        self.children.push(child.into());
    }

    /// Child elements, skipping text, comments and other node kinds.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(ManifestNode::as_element)
    }

    pub fn first_child(&self, name: &str) -> Option<&Element> {
        self.child_elements().find(|e| e.name == name)
    }

    /// `true` when every child is text or CDATA (and there is at least one).
    pub fn is_text_only(&self) -> bool {
        !self.children.is_empty()
            && self
                .children
                .iter()
                .all(|c| matches!(c, ManifestNode::Text(_) | ManifestNode::CData(_)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestNode {
    Element(Element),
    Text(String),
    CData(String),
    Comment(String),
    ProcessingInstruction(String),
    DocType(String),
}

impl ManifestNode {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(e) => Some(e),
            _ => None,
        }
    }
}

impl From<Element> for ManifestNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// The `<?xml ...?>` prolog line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDeclaration {
    pub version: String,
    pub encoding: Option<String>,
    pub standalone: Option<String>,
}

impl Default for XmlDeclaration {
    fn default() -> Self {
        Self {
            version: "1.0".into(),
            encoding: None,
            standalone: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ManifestDocument {
    pub declaration: Option<XmlDeclaration>,
    pub nodes: Vec<ManifestNode>,
}

impl ManifestDocument {
    pub fn new(root: Element) -> Self {
        Self {
            declaration: None,
            nodes: vec![ManifestNode::Element(root)],
        }
    }

    /// The document element.
    pub fn root(&self) -> Option<&Element> {
        self.nodes.iter().find_map(ManifestNode::as_element)
    }

    pub fn insertion_point(&self, path: &InsertionPath) -> Option<&Element> {
        let indices = locate(&self.nodes, path)?;
        element_at(&self.nodes, &indices)
    }

    pub fn insertion_point_mut(&mut self, path: &InsertionPath) -> Option<&mut Element> {
        let indices = locate(&self.nodes, path)?;
        element_at_mut(&mut self.nodes, &indices)
    }
}

// ── Insertion path ────────────────────────────────────────────────────────────

/// Slash-separated element path to the insertion point.
///
/// The first segment matches an element anywhere in the document; each later
/// segment matches a direct child. Same-named siblings are all tried, so the
/// result is the first match in document order under which the whole path
/// resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionPath {
    segments: Vec<String>,
}

impl InsertionPath {
    pub fn parse(path: &str) -> Result<Self, DomainError> {
        let trimmed = path.trim().trim_start_matches('/');
        if trimmed.is_empty() {
            return Err(DomainError::InvalidInsertionPath {
                path: path.to_owned(),
                reason: "path is empty".into(),
            });
        }

        let segments: Vec<String> = trimmed.split('/').map(|s| s.trim().to_owned()).collect();
        if segments.iter().any(String::is_empty) {
            return Err(DomainError::InvalidInsertionPath {
                path: path.to_owned(),
                reason: "path contains an empty segment".into(),
            });
        }

        Ok(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl Default for InsertionPath {
    fn default() -> Self {
        Self {
            segments: DEFAULT_INSERTION_PATH
                .split('/')
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl FromStr for InsertionPath {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for InsertionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}

/// Index path (child positions from the document's node list) to the
/// insertion point.
fn locate(nodes: &[ManifestNode], path: &InsertionPath) -> Option<Vec<usize>> {
    let (first, rest) = path.segments.split_first()?;

    let mut candidates = Vec::new();
    collect_descendants(nodes, first, &mut Vec::new(), &mut candidates);

    candidates.into_iter().find_map(|mut indices| {
        let tail = descend(element_at(nodes, &indices)?, rest)?;
        indices.extend(tail);
        Some(indices)
    })
}

/// Child positions below `element` along `segments`. Every same-named child
/// is tried, in document order.
fn descend(element: &Element, segments: &[String]) -> Option<Vec<usize>> {
    let Some((segment, rest)) = segments.split_first() else {
        return Some(Vec::new());
    };

    element.children.iter().enumerate().find_map(|(index, node)| {
        let child = node.as_element().filter(|e| e.name == *segment)?;
        let mut tail = descend(child, rest)?;
        tail.insert(0, index);
        Some(tail)
    })
}

/// Pre-order search for every element named `name`.
fn collect_descendants(
    nodes: &[ManifestNode],
    name: &str,
    prefix: &mut Vec<usize>,
    found: &mut Vec<Vec<usize>>,
) {
    for (index, node) in nodes.iter().enumerate() {
        if let ManifestNode::Element(element) = node {
            prefix.push(index);
            if element.name == name {
                found.push(prefix.clone());
            }
            collect_descendants(&element.children, name, prefix, found);
            prefix.pop();
        }
    }
}

fn element_at<'a>(nodes: &'a [ManifestNode], indices: &[usize]) -> Option<&'a Element> {
    let (first, rest) = indices.split_first()?;
    let element = nodes.get(*first)?.as_element()?;
    if rest.is_empty() {
        Some(element)
    } else {
        element_at(&element.children, rest)
    }
}

fn element_at_mut<'a>(nodes: &'a mut [ManifestNode], indices: &[usize]) -> Option<&'a mut Element> {
    let (first, rest) = indices.split_first()?;
    match nodes.get_mut(*first)? {
        ManifestNode::Element(element) => {
            if rest.is_empty() {
                Some(element)
            } else {
                element_at_mut(&mut element.children, rest)
            }
        }
        _ => None,
    }
}

// ── Entries ───────────────────────────────────────────────────────────────────

/// A `File` entry derived from a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    element: Element,
}

impl ManifestEntry {
    /// Every extra attribute, camelised, followed by `RelPath` (the output
    /// path with backslash separators). `RelPath` overrides an extra
    /// `rel_path` attribute in place.
    pub fn from_declaration(declaration: &FileDeclaration) -> Self {
        let mut element = Element::new(ENTRY_ELEMENT);
        for (key, value) in declaration.extra_attributes() {
            element.set_attribute(camelize(key), value.to_string());
        }
        element.set_attribute(
            camelize(RELATIVE_PATH_KEY),
            to_manifest_path(declaration.output_path()),
        );
        Self { element }
    }

    pub fn relative_path(&self) -> Option<&str> {
        self.element.attribute(&camelize(RELATIVE_PATH_KEY))
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.element.attributes
    }

    pub fn into_element(self) -> Element {
        self.element
    }
}

/// Appends entries under a located insertion point.
///
/// Pure append: existing children are never replaced, reordered or
/// deduplicated.
#[derive(Debug)]
pub struct ManifestPatcher<'a> {
    include: &'a mut Element,
    added: usize,
}

impl<'a> ManifestPatcher<'a> {
    /// Resolve the insertion point, failing with
    /// [`DomainError::InsertionPointMissing`] before anything is changed.
    pub fn locate(
        document: &'a mut ManifestDocument,
        path: &InsertionPath,
    ) -> Result<Self, DomainError> {
        let include = document
            .insertion_point_mut(path)
            .ok_or_else(|| DomainError::InsertionPointMissing {
                path: path.to_string(),
            })?;
        Ok(Self { include, added: 0 })
    }

    pub fn append(&mut self, declaration: &FileDeclaration) -> ManifestEntry {
        let entry = ManifestEntry::from_declaration(declaration);
        self.include
            .push_child(ManifestNode::Element(entry.element.clone()));
        self.added += 1;
        entry
    }

    /// Entries appended by this patcher.
    pub fn added(&self) -> usize {
        self.added
    }
}
