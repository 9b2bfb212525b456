use super::error::ExtractError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::HashMap;
use tracing::trace;

/// Read-only view of one node of a markup tree
pub trait TagTree {
    fn tag_name(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;

    /// Child tags in document order
    fn children(&self) -> impl Iterator<Item = &Self>;

    /// Byte offset of this tag in its source text, if known
    fn source_offset(&self) -> Option<usize> {
        None
    }
}

/// Looks up layouts by name (without the `.xml` extension)
pub trait LayoutResolver {
    type Tree: TagTree;

    /// `None` when no layout of that name exists
    fn resolve(&self, name: &str) -> Option<Self::Tree>;
}

/// An element of a parsed XML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlTag {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<XmlTag>,
    offset: usize,
}

impl XmlTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            offset: 0,
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_child(mut self, child: XmlTag) -> Self {
        self.children.push(child);
        self
    }

    /// Parse XML text and return its root element
    pub fn parse(contents: &str) -> Result<XmlTag, ExtractError> {
        let mut reader = Reader::from_str(contents);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut open: Vec<XmlTag> = Vec::new();
        let mut root = None;

        loop {
            let offset = reader.buffer_position();
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => {
                    open.push(Self::from_start(e, offset)?);
                }
                Ok(Event::Empty(ref e)) => {
                    let tag = Self::from_start(e, offset)?;
                    Self::attach(tag, &mut open, &mut root)?;
                }
                Ok(Event::End(_)) => {
                    let tag = open.pop().ok_or_else(|| ExtractError::Xml {
                        message: format!("unexpected closing tag at byte {}", offset),
                    })?;
                    Self::attach(tag, &mut open, &mut root)?;
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ExtractError::Xml {
                        message: format!("at byte {}: {}", reader.buffer_position(), e),
                    });
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(unclosed) = open.last() {
            return Err(ExtractError::Xml {
                message: format!("<{}> is never closed", unclosed.name),
            });
        }

        root.ok_or_else(|| ExtractError::Xml {
            message: "document has no root element".to_string(),
        })
    }

    fn from_start(e: &BytesStart<'_>, offset: usize) -> Result<Self, ExtractError> {
        let mut tag = XmlTag::new(String::from_utf8_lossy(e.name().as_ref()));
        tag.offset = offset;

        for attr in e.attributes() {
            let attr = attr.map_err(|err| ExtractError::Xml {
                message: format!("bad attribute on <{}>: {}", tag.name, err),
            })?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr
                .unescape_value()
                .map_err(|err| ExtractError::Xml {
                    message: format!("bad value for {} on <{}>: {}", key, tag.name, err),
                })?
                .to_string();
            tag.attributes.push((key, value));
        }

        trace!("Parsed <{}> at byte {}", tag.name, offset);
        Ok(tag)
    }

    /// Hand a finished tag to its parent, or make it the document root
    fn attach(
        tag: XmlTag,
        open: &mut [XmlTag],
        root: &mut Option<XmlTag>,
    ) -> Result<(), ExtractError> {
        match open.last_mut() {
            Some(parent) => {
                parent.children.push(tag);
                Ok(())
            }
            None if root.is_none() => {
                *root = Some(tag);
                Ok(())
            }
            None => Err(ExtractError::Xml {
                message: format!("second root element <{}>", tag.name),
            }),
        }
    }
}

impl TagTree for XmlTag {
    fn tag_name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn children(&self) -> impl Iterator<Item = &Self> {
        self.children.iter()
    }

    fn source_offset(&self) -> Option<usize> {
        Some(self.offset)
    }
}

impl LayoutResolver for HashMap<String, XmlTag> {
    type Tree = XmlTag;

    fn resolve(&self, name: &str) -> Option<XmlTag> {
        self.get(name).cloned()
    }
}
