use crate::config::Config;
use crate::layout::{LayoutResolver, XmlTag};
use ignore::WalkBuilder;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Index of the layout files under one or more resource roots.
///
/// Layouts live in directories named `layout` or `layout-<qualifier>`; the
/// first file found for a name wins, and the walk is sorted so the
/// unqualified `layout` directory is seen before `layout-land` and friends.
pub struct LayoutDirectory {
    index: BTreeMap<String, PathBuf>,
    parsed: RefCell<HashMap<String, XmlTag>>,
}

impl LayoutDirectory {
    /// Index every layout under `roots`, skipping paths the config excludes.
    /// Exclusion patterns are matched against paths relative to their root.
    pub fn scan(roots: &[PathBuf], config: &Config) -> Self {
        let mut index = BTreeMap::new();

        for root in roots {
            if !root.exists() {
                trace!("Resource directory does not exist: {}", root.display());
                continue;
            }

            let walker = WalkBuilder::new(root)
                .hidden(true)
                .git_ignore(true)
                .parents(true)
                .follow_links(false)
                .sort_by_file_name(|a, b| a.cmp(b))
                .build();

            for entry in walker.filter_map(|entry| entry.ok()) {
                if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
                    continue;
                }

                let path = entry.path();
                if config.should_exclude(path.strip_prefix(root).unwrap_or(path)) {
                    trace!("Excluding: {}", path.display());
                    continue;
                }

                if let Some(name) = layout_name(path) {
                    index.entry(name).or_insert_with(|| {
                        trace!("Found layout: {}", path.display());
                        path.to_path_buf()
                    });
                }
            }
        }

        debug!("Indexed {} layouts", index.len());

        Self {
            index,
            parsed: RefCell::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Names of all indexed layouts, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn path_of(&self, name: &str) -> Option<&Path> {
        self.index.get(name).map(PathBuf::as_path)
    }

    /// Load the layout an extraction starts from; unlike [`LayoutResolver::resolve`]
    /// this reports why a layout could not be loaded.
    pub fn root(&self, name: &str) -> Result<XmlTag> {
        let path = self
            .path_of(name)
            .ok_or_else(|| miette::miette!("No layout named `{}` was found", name))?;
        let tag = load_layout(path)?;
        self.parsed.borrow_mut().insert(name.to_string(), tag.clone());
        Ok(tag)
    }
}

impl LayoutResolver for LayoutDirectory {
    type Tree = XmlTag;

    fn resolve(&self, name: &str) -> Option<XmlTag> {
        if let Some(tag) = self.parsed.borrow().get(name) {
            return Some(tag.clone());
        }

        let path = self.path_of(name)?;
        match load_layout(path) {
            Ok(tag) => {
                self.parsed.borrow_mut().insert(name.to_string(), tag.clone());
                Some(tag)
            }
            Err(e) => {
                warn!("Could not load layout {}: {:?}", path.display(), e);
                None
            }
        }
    }
}

/// Read and parse a layout file
pub fn load_layout(path: &Path) -> Result<XmlTag> {
    let contents = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to read layout: {}", path.display()))?;

    XmlTag::parse(&contents).wrap_err_with(|| format!("Failed to parse layout: {}", path.display()))
}

/// `res/layout-land/main.xml` -> `main`
fn layout_name(path: &Path) -> Option<String> {
    if path.extension()?.to_str()? != "xml" {
        return None;
    }

    let dir = path.parent()?.file_name()?.to_str()?;
    if dir != "layout" && !dir.starts_with("layout-") {
        return None;
    }

    Some(path.file_stem()?.to_str()?.to_string())
}
