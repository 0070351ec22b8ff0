use std::collections::HashSet;
use std::path::Path;

// Same key, name and summary rules the library applies when building entries
#[allow(dead_code)]
#[path = "src/utils/validation.rs"]
mod validation;

fn main() {
    let catalog_path = Path::new("catalogs/assembly_params.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the parameter catalog before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or unescaped newlines.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n"
    );

    let parameters = catalog.get("parameters").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'parameters' field\n\
             The catalog must have a top-level 'parameters' array.\n"
        );
    });

    let params = parameters.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'parameters' must be an array\n\
             Got: {parameters}\n"
        );
    });

    let mut seen_keys = HashSet::new();
    let mut seen_names = HashSet::new();
    for (i, param) in params.iter().enumerate() {
        let key = validate_parameter_fields(param, i);
        assert!(
            seen_keys.insert(key.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate parameter key '{key}' (index {i})\n"
        );
        let name = validate_banner(param, key);
        assert!(
            seen_names.insert(name.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate parameter name '{name}' (key '{key}')\n"
        );
    }

    println!(
        "cargo:warning=Validated parameter catalog: {} parameters",
        params.len()
    );
}

fn validate_parameter_fields(param: &serde_json::Value, index: usize) -> &str {
    let key = param
        .get("key")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .unwrap_or_else(|| {
            panic!(
                "\n\nCATALOG BUILD ERROR: Parameter at index {index} missing string 'key' field\n"
            )
        });

    assert!(
        !validation::is_reserved_key(key),
        "\n\nCATALOG BUILD ERROR: Parameter at index {index} uses reserved key '{key}'\n\
         The empty key and '*' select printing modes.\n"
    );

    for field in ["long_description", "short_description"] {
        assert!(
            param.get(field).and_then(|v| v.as_str()).is_some(),
            "\n\nCATALOG BUILD ERROR: Parameter '{key}' (index {index}) missing string '{field}' field\n"
        );
    }

    let short = param
        .get("short_description")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    assert!(
        validation::is_valid_short_description(short),
        "\n\nCATALOG BUILD ERROR: Parameter '{key}' short description must be one non-empty \
         line of at most {} characters\n",
        validation::MAX_SHORT_DESCRIPTION_LEN
    );

    key
}

fn validate_banner<'a>(param: &'a serde_json::Value, key: &str) -> &'a str {
    let long = param
        .get("long_description")
        .and_then(|v| v.as_str())
        .unwrap_or_default();

    let banner = long.lines().map(str::trim).find(|l| !l.is_empty());
    let mut tokens = banner.unwrap_or_default().split_whitespace();
    let expected = format!("({key})");

    assert!(
        tokens.next() == Some(expected.as_str()),
        "\n\nCATALOG BUILD ERROR: Parameter '{key}' long description must open with '{expected} <name> ---'\n"
    );
    let name = tokens.next().unwrap_or_default();
    assert!(
        validation::is_valid_param_name(name),
        "\n\nCATALOG BUILD ERROR: Parameter '{key}' has invalid name '{name}' after '{expected}'\n\
         Names must match [A-Za-z_][A-Za-z0-9_]* and be at most {} characters.\n",
        validation::MAX_PARAM_NAME_LENGTH
    );

    name
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/assembly_params.json");

    // Validation rules are shared with the library
    println!("cargo:rerun-if-changed=src/utils/validation.rs");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
