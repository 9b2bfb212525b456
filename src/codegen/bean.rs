use crate::layout::capitalize;
use miette::Diagnostic;
use std::collections::HashSet;
use std::fmt::Write;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum BeanError {
    #[error("line {line}: expected `<name> <Type>`, got `{content}`")]
    #[diagnostic(code(layoutbind::bean::malformed_line))]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: `{name}` is not a valid field name")]
    #[diagnostic(code(layoutbind::bean::invalid_name))]
    InvalidName { line: usize, name: String },

    #[error("line {line}: field `{name}` is declared twice")]
    #[diagnostic(code(layoutbind::bean::duplicate_field))]
    DuplicateField { line: usize, name: String },

    #[error("no fields given")]
    #[diagnostic(code(layoutbind::bean::empty))]
    Empty,
}

/// One `name Type` line of a field list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub type_name: String,
}

/// Parse a field list such as
///
/// ```text
/// name String
/// age int
/// tags List<String>
/// ```
///
/// Blank lines are ignored; anything after the type is an error.
pub fn parse_fields(spec: &str) -> Result<Vec<FieldSpec>, BeanError> {
    let mut fields = Vec::new();
    let mut seen = HashSet::new();

    for (index, raw) in spec.lines().enumerate() {
        let line = index + 1;
        let mut tokens = raw.split_whitespace();

        let (name, type_name) = match (tokens.next(), tokens.next(), tokens.next()) {
            (None, _, _) => continue,
            (Some(name), Some(type_name), None) => (name, type_name),
            _ => {
                return Err(BeanError::MalformedLine {
                    line,
                    content: raw.trim().to_string(),
                })
            }
        };

        if !is_java_identifier(name) {
            return Err(BeanError::InvalidName {
                line,
                name: name.to_string(),
            });
        }

        if !seen.insert(name.to_string()) {
            return Err(BeanError::DuplicateField {
                line,
                name: name.to_string(),
            });
        }

        fields.push(FieldSpec {
            name: name.to_string(),
            type_name: type_name.to_string(),
        });
    }

    if fields.is_empty() {
        return Err(BeanError::Empty);
    }

    Ok(fields)
}

fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Header of the generated class
#[derive(Debug, Clone)]
pub struct BeanSpec {
    pub class_name: String,
    pub package: Option<String>,
    pub access: String,
    pub interfaces: Vec<String>,
}

impl BeanSpec {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            package: None,
            access: "public".to_string(),
            interfaces: vec!["Serializable".to_string()],
        }
    }
}

/// Render a data class with a field, getter and setter per [`FieldSpec`]
pub fn render_bean(spec: &BeanSpec, fields: &[FieldSpec]) -> String {
    let access = match spec.access.trim() {
        "" => String::new(),
        access => format!("{} ", access),
    };
    let mut out = String::new();

    if let Some(package) = spec.package.as_deref().filter(|p| !p.is_empty()) {
        let _ = writeln!(out, "package {};\n", package);
    }

    if spec.interfaces.iter().any(|i| i == "Serializable") {
        out.push_str("import java.io.Serializable;\n\n");
    }

    let _ = write!(out, "public class {}", spec.class_name);
    if !spec.interfaces.is_empty() {
        let _ = write!(out, " implements {}", spec.interfaces.join(", "));
    }
    out.push_str(" {\n\n");

    for field in fields {
        let _ = writeln!(out, "    {}{} {};", access, field.type_name, field.name);
    }

    for field in fields {
        let property = capitalize(&field.name);
        let _ = write!(
            out,
            "\n    {access}{ty} get{property}() {{\n        return {name};\n    }}\n",
            access = access,
            ty = field.type_name,
            property = property,
            name = field.name
        );
        let _ = write!(
            out,
            "\n    {access}void set{property}({ty} {name}) {{\n        this.{name} = {name};\n    }}\n",
            access = access,
            ty = field.type_name,
            property = property,
            name = field.name
        );
    }

    out.push_str("}\n");
    out
}
