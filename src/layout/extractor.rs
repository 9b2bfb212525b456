use super::element::{Element, SourceTag};
use super::error::ExtractError;
use super::reference::parse_resource_reference;
use super::tree::{LayoutResolver, TagTree};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

const INCLUDE_TAG: &str = "include";
const LAYOUT_ATTRIBUTE: &str = "layout";
const CLASS_ATTRIBUTE: &str = "class";

/// Knobs for one extraction pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Abort the whole pass on the first malformed id instead of skipping the tag
    pub strict: bool,

    /// Deepest chain of nested includes that will be expanded
    pub max_include_depth: usize,

    /// Attribute holding the view id
    pub id_attribute: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            strict: true,
            max_include_depth: 32,
            id_attribute: "android:id".to_string(),
        }
    }
}

/// Collects the views that carry an id, inlining `<include>`d layouts
pub struct Extractor {
    options: ExtractOptions,
}

/// State of a single pass
#[derive(Default)]
struct Pass {
    elements: Vec<Element>,
    /// Layouts currently being expanded, outermost first
    chain: Vec<String>,
    /// Entries of `chain` that are roots rather than includes
    base: usize,
}

impl Extractor {
    pub fn new() -> Self {
        Self::with_options(ExtractOptions::default())
    }

    pub fn with_options(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Walk `root` in document order and return every view with an id
    pub fn extract<T, R>(&self, root: &T, resolver: &R) -> Result<Vec<Element>, ExtractError>
    where
        T: TagTree,
        R: LayoutResolver,
    {
        self.run(Pass::default(), root, resolver)
    }

    /// Like [`Extractor::extract`], for a root known by name, so a layout
    /// that includes itself is reported as a cycle straight away.
    pub fn extract_named<T, R>(
        &self,
        name: &str,
        root: &T,
        resolver: &R,
    ) -> Result<Vec<Element>, ExtractError>
    where
        T: TagTree,
        R: LayoutResolver,
    {
        let pass = Pass {
            chain: vec![name.to_string()],
            base: 1,
            ..Pass::default()
        };
        self.run(pass, root, resolver)
    }

    fn run<T, R>(&self, mut pass: Pass, root: &T, resolver: &R) -> Result<Vec<Element>, ExtractError>
    where
        T: TagTree,
        R: LayoutResolver,
    {
        self.walk(root, resolver, None, &mut pass)?;
        debug!(
            "Extracted {} elements from <{}>",
            pass.elements.len(),
            root.tag_name()
        );
        Ok(pass.elements)
    }

    fn walk<T, R>(
        &self,
        node: &T,
        resolver: &R,
        layout: Option<&str>,
        pass: &mut Pass,
    ) -> Result<(), ExtractError>
    where
        T: TagTree,
        R: LayoutResolver,
    {
        if node.tag_name().eq_ignore_ascii_case(INCLUDE_TAG) {
            match self.expand_include(node, resolver, pass) {
                Err(err) if err.is_recoverable() => warn!("Skipping <include>: {}", err),
                result => result?,
            }
        } else {
            self.collect(node, layout, pass)?;
        }

        for child in node.children() {
            self.walk(child, resolver, layout, pass)?;
        }

        Ok(())
    }

    fn expand_include<T, R>(&self, node: &T, resolver: &R, pass: &mut Pass) -> Result<(), ExtractError>
    where
        T: TagTree,
        R: LayoutResolver,
    {
        let reference = node.attribute(LAYOUT_ATTRIBUTE);
        let name = reference
            .and_then(parse_resource_reference)
            .map(|r| r.name)
            .ok_or_else(|| ExtractError::MalformedIncludeReference {
                reference: reference.map(str::to_string),
            })?;

        if pass.chain.iter().any(|open| open == name) {
            let mut chain = pass.chain.clone();
            chain.push(name.to_string());
            return Err(ExtractError::IncludeCycle { chain });
        }

        let tree = resolver
            .resolve(name)
            .ok_or_else(|| ExtractError::UnresolvedInclude {
                name: name.to_string(),
            })?;

        if pass.chain.len() - pass.base >= self.options.max_include_depth {
            return Err(ExtractError::IncludeDepthExceeded {
                name: name.to_string(),
                limit: self.options.max_include_depth,
            });
        }

        trace!("Expanding include of {}", name);
        pass.chain.push(name.to_string());
        let result = self.walk(&tree, resolver, Some(name), pass);
        pass.chain.pop();
        result
    }

    fn collect<T: TagTree>(
        &self,
        node: &T,
        layout: Option<&str>,
        pass: &mut Pass,
    ) -> Result<(), ExtractError> {
        let Some(id) = node
            .attribute(&self.options.id_attribute)
            .filter(|value| !value.is_empty())
        else {
            return Ok(());
        };

        let type_name = node.attribute(CLASS_ATTRIBUTE).unwrap_or(node.tag_name());
        let source = SourceTag::new(layout.map(str::to_string), node.source_offset());

        match Element::new(type_name, id, source) {
            Ok(element) => {
                trace!("Found {} {}", element.type_name(), element.raw_id());
                pass.elements.push(element);
            }
            Err(err) if !self.options.strict => warn!("Skipping tag: {}", err),
            Err(err) => return Err(err),
        }

        Ok(())
    }
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract with default (strict) options
pub fn extract<T, R>(root: &T, resolver: &R) -> Result<Vec<Element>, ExtractError>
where
    T: TagTree,
    R: LayoutResolver,
{
    Extractor::new().extract(root, resolver)
}
