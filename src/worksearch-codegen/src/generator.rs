//! Renders one client module per operation in the specification.
//!
//! Output is ordinary Rust source meant to be dropped into the client
//! crate: an `impl Client` block whose single method substitutes its path
//! placeholders and delegates to the pipeline verb helper.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::spec::{ApiSpec, Operation, Schema};

const HEADER: &str = "// Generated by worksearch-codegen. Do not edit by hand.\n";

/// One resolved wrapper argument.
struct Arg {
    /// Identifier used in the generated signature.
    rust_name: String,
    /// Name the service expects on the wire.
    wire_name: String,
    rust_type: &'static str,
    description: String,
    required: bool,
    /// Substituted into the path template instead of the parameter map.
    in_path: bool,
}

/// Generate one source file per operation plus a `mod.rs` index. Returns
/// the number of operations written.
pub fn generate(spec: &ApiSpec, out_dir: &Path) -> Result<usize> {
    fs::create_dir_all(out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let mut modules = Vec::new();
    for (path, operations) in &spec.paths {
        for (method, operation) in operations {
            let name = to_snake_case(&operation.operation_id);
            let rendered = render_operation(spec, path, method, operation)?;
            let file = out_dir.join(format!("{name}.rs"));
            fs::write(&file, rendered).with_context(|| format!("writing {}", file.display()))?;
            tracing::info!(module = %name, "generated");
            modules.push(name);
        }
    }

    modules.sort();
    fs::write(out_dir.join("mod.rs"), render_module_index(&modules))?;
    Ok(modules.len())
}

fn render_operation(
    spec: &ApiSpec,
    path: &str,
    method: &str,
    operation: &Operation,
) -> Result<String> {
    let verb = match method {
        "get" | "post" | "put" | "delete" => method,
        other => bail!(
            "unsupported method `{other}` on {path} ({})",
            operation.operation_id
        ),
    };

    let name = to_snake_case(&operation.operation_id);
    let args = resolve_args(spec, path, operation)?;
    let param_args: Vec<&Arg> = args.iter().filter(|a| !a.in_path).collect();

    let mut out = String::from(HEADER);
    out.push('\n');
    if param_args.is_empty() {
        out.push_str("use crate::{Client, Params, Result};\n");
    } else {
        out.push_str("use serde_json::json;\n\nuse crate::{Client, Params, Result};\n");
    }
    out.push_str("\nimpl Client {\n");

    render_docs(&mut out, operation, &args);

    out.push_str(&format!("    pub async fn {name}(&self"));
    for arg in &args {
        out.push_str(&format!(", {}: {}", arg.rust_name, arg.rust_type));
    }
    out.push_str(") -> Result<Option<serde_json::Value>> {\n");

    if param_args.is_empty() {
        out.push_str("        let params = Params::new();\n");
    } else {
        out.push_str("        let mut params = Params::new();\n");
        for arg in &param_args {
            out.push_str(&format!(
                "        params.insert({:?}.to_string(), json!({}));\n",
                arg.wire_name, arg.rust_name
            ));
        }
    }

    if path.contains('{') {
        out.push_str(&format!(
            "        self.{verb}(&format!({path:?}), params).await\n"
        ));
    } else {
        out.push_str(&format!("        self.{verb}({path:?}, params).await\n"));
    }
    out.push_str("    }\n}\n");
    Ok(out)
}

fn render_docs(out: &mut String, operation: &Operation, args: &[Arg]) {
    let module = operation.tags.first().map(String::as_str).unwrap_or("API");
    out.push_str(&format!("    /// {module} - {}\n", operation.summary));

    let (text, url) = split_doc_link(&operation.description);
    if !text.is_empty() {
        out.push_str(&format!("    ///\n    /// {text}\n"));
    }

    if !args.is_empty() {
        out.push_str("    ///\n");
        for arg in args {
            let required = if arg.required { " (required)" } else { "" };
            out.push_str(&format!(
                "    /// * `{}` - {}{required}\n",
                arg.rust_name, arg.description
            ));
        }
    }

    if let Some(url) = url {
        out.push_str(&format!("    ///\n    /// See {url}\n"));
    }
}

fn render_module_index(modules: &[String]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for name in modules {
        out.push_str(&format!("mod {name};\n"));
    }
    out
}

fn resolve_args(spec: &ApiSpec, path: &str, operation: &Operation) -> Result<Vec<Arg>> {
    operation
        .parameters
        .iter()
        .map(|reference| {
            let rust_name = sanitize_name(&reference.name);
            let component = spec.components.parameters.get(&rust_name).with_context(|| {
                format!(
                    "parameter `{rust_name}` of {} missing from components",
                    operation.operation_id
                )
            })?;
            Ok(Arg {
                in_path: path.contains(&format!("{{{rust_name}}}")),
                wire_name: reference.name.clone(),
                rust_type: rust_type(&component.schema)?,
                description: component.description.clone(),
                required: component.required,
                rust_name,
            })
        })
        .collect()
}

fn rust_type(schema: &Schema) -> Result<&'static str> {
    Ok(match schema.kind.as_str() {
        "string" => "&str",
        "integer" => "u64",
        "number" => "f64",
        "boolean" => "bool",
        "array" => match schema.items.as_deref().map(|s| s.kind.as_str()) {
            Some("object") => "&[serde_json::Value]",
            Some("integer") => "&[u64]",
            None | Some("string") => "&[String]",
            Some(other) => bail!("unsupported array item type `{other}`"),
        },
        other => bail!("unsupported schema type `{other}`"),
    })
}

/// The wire names the service uses do not all make valid identifiers.
pub(crate) fn sanitize_name(name: &str) -> String {
    match name {
        "page[current]" => "current_page".to_string(),
        "page[size]" => "page_size".to_string(),
        other => to_snake_case(other),
    }
}

pub(crate) fn to_snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for (i, ch) in input.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Descriptions in the spec are markdown links: `[text](url)`.
fn split_doc_link(description: &str) -> (String, Option<String>) {
    let link = description.find('[').and_then(|open| {
        let rest = &description[open + 1..];
        let mid = rest.find("](")?;
        let close = rest[mid + 2..].find(')')?;
        Some((
            rest[..mid].to_string(),
            rest[mid + 2..mid + 2 + close].to_string(),
        ))
    });
    match link {
        Some((text, url)) => (text, Some(url)),
        None => (description.trim().to_string(), None),
    }
}
