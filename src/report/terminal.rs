use crate::layout::{Element, NamingConvention};
use colored::Colorize;
use miette::Result;

/// Terminal reporter with colored output
pub struct TerminalReporter;

impl TerminalReporter {
    pub fn new() -> Self {
        Self
    }

    pub fn report(
        &self,
        layout: &str,
        elements: &mut [Element],
        convention: NamingConvention,
    ) -> Result<()> {
        if elements.is_empty() {
            println!("{}", format!("No views with an id in {}", layout).yellow());
            return Ok(());
        }

        println!();
        println!(
            "{}",
            format!("{} views in {} ({} naming):", elements.len(), layout, convention)
                .bold()
        );
        println!();

        let width = elements
            .iter()
            .map(|e| e.type_name().len())
            .max()
            .unwrap_or(0);

        for element in elements.iter_mut() {
            println!("  {}", self.format_line(element, convention, width));
        }

        println!();
        Ok(())
    }

    fn format_line(&self, element: &mut Element, convention: NamingConvention, width: usize) -> String {
        let field = element.field_name(convention).to_string();
        let mut line = format!(
            "{:<width$}  {}  {}",
            element.type_name().cyan(),
            field.green().bold(),
            element.full_id().dimmed(),
            width = width
        );

        if element.include_click_handler {
            line.push_str(&format!(" {}", "[click]".magenta()));
        }
        if !element.include_field_declaration {
            line.push_str(&format!(" {}", "[no field]".yellow()));
        }
        if let Some(included) = &element.source().layout {
            line.push_str(&format!(" {}", format!("(from {})", included).dimmed()));
        }

        line
    }
}

impl Default for TerminalReporter {
    fn default() -> Self {
        Self::new()
    }
}
