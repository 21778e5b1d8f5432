use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

/// Prints `data` to stdout as YAML (default) or pretty JSON.
pub fn print_data<T: Serialize>(data: &T, format: &str) -> Result<()> {
    let content = serialize_output(data, format)?;
    write_to_stdout(&content)
}

fn serialize_output<T: Serialize>(data: &T, format: &str) -> Result<String> {
    match format.to_lowercase().as_str() {
        "json" => serde_json::to_string_pretty(data).context("Failed to serialize output as JSON"),
        _ => serde_yml::to_string(data).context("Failed to serialize output as YAML"),
    }
}

fn write_to_stdout(content: &str) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle
        .write_all(content.as_bytes())
        .context("Failed to write to stdout")?;
    if !content.ends_with('\n') {
        handle
            .write_all(b"\n")
            .context("Failed to write newline to stdout")?;
    }
    handle.flush().context("Failed to flush stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: &'static str,
        items: Vec<&'static str>,
    }

    #[test]
    fn test_yaml_is_default_format() {
        let sample = Sample { name: "proj", items: vec!["vendor"] };
        let out = serialize_output(&sample, "yaml").unwrap();
        assert!(out.contains("name: proj"));
        assert!(out.contains("vendor"));
    }

    #[test]
    fn test_json_format() {
        let sample = Sample { name: "proj", items: vec![] };
        let out = serialize_output(&sample, "JSON").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["name"], "proj");
    }
}
