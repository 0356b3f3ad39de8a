use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/supported_snps.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
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
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let snps = catalog.get("snps").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'snps' field\n\
             The catalog must have a top-level 'snps' array.\n"
        );
    });

    let entries = snps.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'snps' must be an array\n\
             Got: {snps}\n"
        );
    });

    for (i, entry) in entries.iter().enumerate() {
        validate_snp_fields(entry, i);
    }

    println!("cargo:warning=Validated catalog: {} supported SNPs", entries.len());
}

fn validate_snp_fields(entry: &serde_json::Value, index: usize) {
    let snp_id = entry
        .get("id")
        .and_then(|v| v.as_str())
        .unwrap_or("<unknown>");

    assert!(
        entry.get("id").is_some(),
        "\n\nCATALOG BUILD ERROR: SNP at index {index} missing 'id' field\n"
    );
    assert!(
        entry.get("display_name").is_some(),
        "\n\nCATALOG BUILD ERROR: SNP '{snp_id}' (index {index}) missing 'display_name' field\n"
    );
    assert!(
        entry.get("gene").is_some(),
        "\n\nCATALOG BUILD ERROR: SNP '{snp_id}' (index {index}) missing 'gene' field\n"
    );

    // rsIDs must follow the strict dbSNP shape
    let rsid = entry.get("rsid").and_then(|v| v.as_str()).unwrap_or_else(|| {
        panic!("\n\nCATALOG BUILD ERROR: SNP '{snp_id}' (index {index}) missing 'rsid' field\n")
    });
    assert!(
        rsid.starts_with("rs") && rsid[2..].chars().all(|c| c.is_ascii_digit()),
        "\n\nCATALOG BUILD ERROR: SNP '{snp_id}' has malformed rsid '{rsid}'\n\
         Expected 'rs' followed by digits.\n"
    );
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/supported_snps.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
