use crate::layout::{derive_field_name, Element, NamingConvention};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Turns extracted views into Java source text
pub trait Emitter {
    fn emit(&self, elements: &mut [Element], convention: NamingConvention) -> String;
}

/// Which binding boilerplate to generate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingStyle {
    /// `@BindView` fields and `@OnClick` methods
    #[default]
    ButterKnife,
    /// Plain fields assigned from `findViewById` in `initViews`
    FindViewById,
}

impl BindingStyle {
    pub fn emitter(self, access: &str) -> Box<dyn Emitter> {
        match self {
            BindingStyle::ButterKnife => Box::new(ButterKnifeEmitter::new(access)),
            BindingStyle::FindViewById => Box::new(FindViewEmitter::new(access)),
        }
    }
}

/// `public ` for `public`, nothing for an empty modifier
fn modifier(access: &str) -> String {
    let access = access.trim();
    if access.is_empty() {
        String::new()
    } else {
        format!("{} ", access)
    }
}

/// Name of the click handler for a view: `submit_button` -> `submitButtonClick`
fn click_method_name(element: &Element) -> String {
    format!("{}Click", derive_field_name(element.raw_id(), NamingConvention::Camel))
}

pub struct ButterKnifeEmitter {
    modifier: String,
}

impl ButterKnifeEmitter {
    pub fn new(access: &str) -> Self {
        Self {
            modifier: modifier(access),
        }
    }
}

impl Emitter for ButterKnifeEmitter {
    fn emit(&self, elements: &mut [Element], convention: NamingConvention) -> String {
        let mut members = Vec::new();

        for element in elements.iter_mut().filter(|e| e.include_field_declaration) {
            let field = element.field_name(convention).to_string();
            members.push(format!(
                "@BindView({})\n{}{} {};",
                element.full_id(),
                self.modifier,
                element.type_name(),
                field
            ));
        }

        for element in elements.iter_mut().filter(|e| e.include_click_handler) {
            let parameter = derive_field_name(element.raw_id(), NamingConvention::Camel);
            members.push(format!(
                "@OnClick({})\n{}void {}({} {}) {{\n}}",
                element.full_id(),
                self.modifier,
                click_method_name(element),
                element.type_name(),
                parameter
            ));
        }

        join_members(&members)
    }
}

pub struct FindViewEmitter {
    modifier: String,
}

impl FindViewEmitter {
    pub fn new(access: &str) -> Self {
        Self {
            modifier: modifier(access),
        }
    }
}

impl Emitter for FindViewEmitter {
    fn emit(&self, elements: &mut [Element], convention: NamingConvention) -> String {
        let mut members = Vec::new();
        let mut body = String::new();

        let fields: Vec<String> = elements
            .iter_mut()
            .filter(|e| e.include_field_declaration)
            .map(|element| {
                let field = element.field_name(convention).to_string();
                let _ = writeln!(body, "    {} = root.findViewById({});", field, element.full_id());
                format!("{}{} {};", self.modifier, element.type_name(), field)
            })
            .collect();
        if !fields.is_empty() {
            members.push(fields.join("\n"));
        }

        let mut handlers = Vec::new();
        for element in elements.iter_mut().filter(|e| e.include_click_handler) {
            let method = click_method_name(element);
            let target = if element.include_field_declaration {
                element.field_name(convention).to_string()
            } else {
                format!("root.findViewById({})", element.full_id())
            };
            let _ = writeln!(body, "    {}.setOnClickListener(this::{});", target, method);
            handlers.push(format!("{}void {}(View view) {{\n}}", self.modifier, method));
        }

        if !body.is_empty() {
            members.push(format!("{}void initViews(View root) {{\n{}}}", self.modifier, body));
        }
        members.extend(handlers);

        join_members(&members)
    }
}

fn join_members(members: &[String]) -> String {
    if members.is_empty() {
        return String::new();
    }
    let mut out = members.join("\n\n");
    out.push('\n');
    out
}
