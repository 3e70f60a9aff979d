//! Host output formatter

use comfy_table::{presets::NOTHING, Table};

use super::common::{escape_csv, output_structured};
use crate::cli::OutputFormat;
use crate::ksc::{Host, InventoryRecord};

/// Output hosts in the specified format
pub fn output_hosts(hosts: &[Host], format: OutputFormat, no_header: bool) {
    match format {
        OutputFormat::Table => println!("{}", render_table(hosts, no_header)),
        OutputFormat::Csv => print!("{}", render_csv(hosts, no_header)),
        OutputFormat::Json | OutputFormat::Yaml => output_structured(hosts, format),
    }
}

fn render_table(hosts: &[Host], no_header: bool) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    if !no_header {
        table.set_header(vec!["FQDN", "HOSTNAME"]);
    }

    for host in hosts {
        table.add_row(vec![host.display_name(), host.hostname()]);
    }

    table.to_string()
}

fn render_csv(hosts: &[Host], no_header: bool) -> String {
    let mut out = String::new();
    if !no_header {
        out.push_str("FQDN,HOSTNAME\n");
    }
    for host in hosts {
        out.push_str(&format!(
            "{},{}\n",
            escape_csv(host.display_name()),
            escape_csv(host.hostname())
        ));
    }
    out
}
