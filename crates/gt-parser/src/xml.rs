use gt_core::error::XML_PARSE_ERROR;
use gt_core::{GtError, SourceLocation, SourceSpan};
use roxmltree::{Document, Node, NodeType, ParsingOptions};

#[derive(Debug, Clone, PartialEq)]
pub struct XmlDocument {
    pub root: XmlElementNode,
}

/// Element of an event file, reduced to what the event schema reads.
#[derive(Debug, Clone, PartialEq)]
pub struct XmlElementNode {
    pub name: String,
    /// Namespace URI; `None` for elements outside any namespace.
    pub namespace: Option<String>,
    /// Character data before the first child element, `None` when there is none.
    /// Comments and processing instructions do not split it; CDATA counts as text.
    pub leading_text: Option<String>,
    pub children: Vec<XmlElementNode>,
    pub location: SourceSpan,
}

impl XmlElementNode {
    /// Whether this element is the un-namespaced tag `name`.
    ///
    /// Event files are read with bare tag names, so `{urn:x}event` is not an `event`.
    pub fn is(&self, name: &str) -> bool {
        self.namespace.is_none() && self.name == name
    }

    /// First direct child element called `name`.
    pub fn child(&self, name: &str) -> Option<&XmlElementNode> {
        self.children.iter().find(|element| element.is(name))
    }

    /// All direct child elements called `name`, in document order.
    pub fn children_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a XmlElementNode> + 'a {
        self.children.iter().filter(move |element| element.is(name))
    }

    pub fn text(&self) -> Option<String> {
        self.leading_text.clone()
    }
}

/// Parses an event file source into an element tree.
///
/// Document type declarations are accepted and internal entities expanded;
/// only sources that are not well-formed fail.
pub fn parse_xml_document(source: &str) -> Result<XmlDocument, GtError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let document = Document::parse_with_options(source, options)
        .map_err(|error| GtError::new(XML_PARSE_ERROR, error.to_string()))?;

    let root = document
        .root()
        .children()
        .find(|node| node.is_element())
        .ok_or_else(|| GtError::new(XML_PARSE_ERROR, "Event file has no root element."))?;

    Ok(XmlDocument {
        root: build_element(&document, root),
    })
}

fn build_element(document: &Document<'_>, node: Node<'_, '_>) -> XmlElementNode {
    let mut leading = String::new();
    let mut children = Vec::new();
    for child in node.children() {
        match child.node_type() {
            NodeType::Element => children.push(build_element(document, child)),
            NodeType::Text if children.is_empty() => {
                leading.push_str(child.text().unwrap_or_default());
            }
            _ => {}
        }
    }

    let tag = node.tag_name();
    XmlElementNode {
        name: tag.name().to_string(),
        namespace: tag.namespace().map(str::to_string),
        leading_text: (!leading.is_empty()).then_some(leading),
        children,
        location: span_of(document, node),
    }
}

fn span_of(document: &Document<'_>, node: Node<'_, '_>) -> SourceSpan {
    let range = node.range();
    let location = |offset: usize| {
        let pos = document.text_pos_at(offset);
        SourceLocation {
            line: pos.row as usize,
            column: pos.col as usize,
        }
    };
    SourceSpan {
        start: location(range.start),
        end: location(range.end),
    }
}
