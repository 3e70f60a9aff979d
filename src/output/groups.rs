//! Group output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, output_structured};
use crate::cli::OutputFormat;
use crate::ksc::{Group, InventoryRecord};

/// Output groups in the specified format
pub fn output_groups(groups: &[Group], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => println!("{}", render_table(groups, no_header)),
        OutputFormat::Csv => print!("{}", render_csv(groups, no_header)),
        OutputFormat::Json | OutputFormat::Yaml => output_structured(groups, format),
    }
}

/// Empty when the record carries no id
fn id_cell(group: &Group) -> String {
    group.id().map(|id| id.to_string()).unwrap_or_default()
}

fn render_table(groups: &[Group], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["ID", "NAME"]);
    }

    for group in groups {
        table.add_row(vec![id_cell(group), group.display_name().to_string()]);
    }

    table.to_string()
}

fn render_csv(groups: &[Group], no_header: bool) -> String {
    let mut out = String::new();
    if !no_header {
        out.push_str("ID,NAME\n");
    }
    for group in groups {
        out.push_str(&format!(
            "{},{}\n",
            id_cell(group),
            escape_csv(group.display_name())
        ));
    }
    out
}
