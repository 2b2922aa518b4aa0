//! Rendering a [`Table`] into its textual artifact.

use std::fmt::Write;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::assemble::{Table, TableEntry};
use crate::errors::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Go source with three map literals
    #[default]
    Go,
    /// Pretty-printed JSON
    Json,
}

/// Settings for the Go rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoOptions {
    /// Package clause of the generated file
    pub package: String,
    /// First-line comment, without the `// ` prefix
    pub header: String,
}

impl Default for GoOptions {
    fn default() -> Self {
        Self {
            package: "interfacer".to_string(),
            header: "Generated by sigtable".to_string(),
        }
    }
}

pub trait TableWriter {
    fn render(&self, table: &Table) -> Result<String>;
}

pub struct JsonWriter;

impl TableWriter for JsonWriter {
    fn render(&self, table: &Table) -> Result<String> {
        let mut json = serde_json::to_string_pretty(table)?;
        json.push('\n');
        Ok(json)
    }
}

pub struct GoWriter {
    options: GoOptions,
}

impl GoWriter {
    pub fn new(options: GoOptions) -> Self {
        Self { options }
    }

    fn write_packages(&self, out: &mut String, packages: &[String]) -> std::fmt::Result {
        writeln!(out, "var stdPkgs = map[string]struct{{}}{{")?;
        let mut previous: Option<&str> = None;
        for pkg in packages {
            // duplicate keys are a compile error in Go map literals
            if previous == Some(pkg.as_str()) {
                continue;
            }
            previous = Some(pkg.as_str());
            writeln!(out, "\t{}: struct{{}}{{}},", go_quote(pkg))?;
        }
        writeln!(out, "}}")
    }

    fn write_entries(
        &self,
        out: &mut String,
        var: &str,
        entries: &[TableEntry],
    ) -> std::fmt::Result {
        writeln!(out, "var {} = map[string]string{{", var)?;
        for entry in entries {
            writeln!(
                out,
                "\t{}: {},",
                go_quote(&entry.signature),
                go_quote(&entry.name)
            )?;
        }
        writeln!(out, "}}")
    }
}

impl TableWriter for GoWriter {
    fn render(&self, table: &Table) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "// {}", self.options.header)?;
        writeln!(out)?;
        writeln!(out, "package {}", self.options.package)?;
        writeln!(out)?;
        self.write_packages(&mut out, &table.packages)?;
        writeln!(out)?;
        self.write_entries(&mut out, "stdIfaces", &table.interfaces)?;
        writeln!(out)?;
        self.write_entries(&mut out, "stdFuncs", &table.functions)?;
        Ok(out)
    }
}

/// Quote `s` as a Go interpreted string literal.
pub fn go_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('"');
    for c in s.chars() {
        match c {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(quoted, "\\u{:04x}", c as u32);
            }
            c => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

pub fn create_writer(format: OutputFormat, options: GoOptions) -> Box<dyn TableWriter> {
    match format {
        OutputFormat::Go => Box::new(GoWriter::new(options)),
        OutputFormat::Json => Box::new(JsonWriter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn sample_table() -> Table {
        Table {
            packages: vec!["io".to_string(), "os".to_string(), "os".to_string()],
            interfaces: vec![
                TableEntry::new("Error() string", "error"),
                TableEntry::new("Close() error", "io.Closer"),
            ],
            functions: vec![TableEntry::new("func(string) error", "os.WalkFunc")],
        }
    }

    #[test]
    fn test_go_output() {
        let rendered = GoWriter::new(GoOptions::default())
            .render(&sample_table())
            .unwrap();
        let expected = indoc! {r#"
            // Generated by sigtable

            package interfacer

            var stdPkgs = map[string]struct{}{
            	"io": struct{}{},
            	"os": struct{}{},
            }

            var stdIfaces = map[string]string{
            	"Error() string": "error",
            	"Close() error": "io.Closer",
            }

            var stdFuncs = map[string]string{
            	"func(string) error": "os.WalkFunc",
            }
        "#};
        pretty_assertions::assert_eq!(rendered, expected);
    }

    #[test]
    fn test_go_output_custom_package() {
        let writer = GoWriter::new(GoOptions {
            package: "sigs".to_string(),
            header: "Code generated by sigtable. DO NOT EDIT.".to_string(),
        });
        let rendered = writer.render(&Table::default()).unwrap();
        let preamble = "// Code generated by sigtable. DO NOT EDIT.\n\npackage sigs\n";
        assert!(rendered.starts_with(preamble));
        assert!(rendered.contains("var stdFuncs = map[string]string{\n}\n"));
    }

    #[test]
    fn test_json_output() {
        let rendered = JsonWriter.render(&sample_table()).unwrap();
        let parsed: Table = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, sample_table());
        assert!(rendered.contains("\"signature\": \"Close() error\""));
    }

    #[test]
    fn test_go_quote() {
        assert_eq!(go_quote("io.Reader"), "\"io.Reader\"");
        assert_eq!(go_quote(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(go_quote("x\ty"), "\"x\\ty\"");
        assert_eq!(go_quote("\u{1}"), "\"\\u0001\"");
    }

    #[test]
    fn test_create_writer_selects_format() {
        let table = sample_table();
        let go = create_writer(OutputFormat::Go, GoOptions::default())
            .render(&table)
            .unwrap();
        let json = create_writer(OutputFormat::Json, GoOptions::default())
            .render(&table)
            .unwrap();
        assert!(go.starts_with("//"));
        assert!(json.starts_with('{'));
    }
}
