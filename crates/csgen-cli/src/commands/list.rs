//! Implementation of the `csgen list` command.

use csgen_adapters::generators::{GeneratorInfo, catalog};

use crate::{
    cli::{ListArgs, ListFormat},
    error::{CliResult, IntoCli},
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let generators = catalog();

    let lines: Vec<String> = match args.format {
        ListFormat::Table => {
            output
                .header("Available Generators:")
                .with_cli_context(|| "writing to stdout")?;
            generators.iter().map(table_row).collect()
        }
        ListFormat::Names => generators.iter().map(|g| g.name.to_string()).collect(),
        ListFormat::Csv => std::iter::once("name,template_dir,required,optional".to_string())
            .chain(generators.iter().map(|g| {
                format!(
                    "{},{},{},{}",
                    g.name,
                    g.slug,
                    g.arguments.required().join(" "),
                    g.arguments.optional().join(" ")
                )
            }))
            .collect(),
    };

    for line in lines {
        output.print(&line).with_cli_context(|| "writing to stdout")?;
    }
    Ok(())
}

fn table_row(info: &GeneratorInfo) -> String {
    let optional = info
        .arguments
        .optional()
        .iter()
        .map(|key| format!("[{key}]"))
        .collect::<Vec<_>>()
        .join(" ");
    format!(
        "  {:<8} {}\n           templates/{}/  args: {} {}",
        info.name,
        info.summary,
        info.slug,
        info.arguments.required().join(" "),
        optional
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_row_shows_arguments() {
        let triad = catalog().into_iter().find(|g| g.name == "triad").unwrap();
        let row = table_row(&triad);
        assert!(row.contains("templates/triad/"));
        assert!(row.contains("args: name [namespace] [folder] [test_folder]"));
    }
}
