/// A resource reference like `@layout/item_header`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRef<'a> {
    pub kind: &'a str,
    pub name: &'a str,
}

/// Parse `@<kind>/<name>`. Anything else (missing `@`, empty parts, more
/// than one `/`) yields `None`.
pub fn parse_resource_reference(value: &str) -> Option<ResourceRef<'_>> {
    let rest = value.trim().strip_prefix('@')?;
    let (kind, name) = rest.split_once('/')?;

    if kind.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }

    Some(ResourceRef { kind, name })
}

/// Find the layout named by `R.layout.<name>` in a line of source code,
/// e.g. `setContentView(R.layout.activity_main);`
pub fn layout_name_in_line(line: &str) -> Option<&str> {
    const MARKER: &str = "R.layout.";

    let start = line.find(MARKER)? + MARKER.len();
    let rest = &line[start..];
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());

    let name = &rest[..end];
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
