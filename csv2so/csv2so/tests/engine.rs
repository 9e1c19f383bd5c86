use std::{
    fs,
    path::{Path, PathBuf},
};

use csv2so::{
    EngineError, GenerateOutcome, GenerateRequest, ImportOutcome, ImportRequest, SyncEngine,
    TypeRegistry, UTF8_BOM,
};
use tempfile::TempDir;

const CHARACTER_SHEET: &str = "\
#ID,Name,Age
id,name,age
int,string,int
1,taro,25
2,jiro,30
";

fn write_sheet(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn generate(engine: &SyncEngine, csv_path: &Path, out_dir: &Path) -> GenerateOutcome {
    engine
        .generate(&GenerateRequest {
            csv_path: csv_path.to_path_buf(),
            out_dir: out_dir.to_path_buf(),
            namespace: None,
            implement_identifiable: false,
        })
        .unwrap()
}

fn import(engine: &SyncEngine, csv_path: &Path, out_dir: &Path) -> ImportOutcome {
    engine
        .import(&ImportRequest {
            csv_path: csv_path.to_path_buf(),
            out_dir: out_dir.to_path_buf(),
        })
        .unwrap()
}

fn asset_rows(path: &Path) -> Vec<serde_json::Value> {
    let doc: serde_json::Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
    doc["rows"].as_array().unwrap().clone()
}

#[test]
fn generate_writes_source_with_bom_and_registers_the_type() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", CHARACTER_SHEET);
    let out_dir = dir.path().join("generated");

    let outcome = generate(&SyncEngine::new(), &sheet, &out_dir);
    assert_eq!(outcome.type_name, "CharacterSO");
    assert_eq!(outcome.source_path, out_dir.join("CharacterSO.rs"));
    assert_eq!(outcome.columns, 3);

    let bytes = fs::read(&outcome.source_path).unwrap();
    assert!(bytes.starts_with(UTF8_BOM));
    let source = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
    assert!(source.starts_with("// @generated by csv2so"));
    assert!(source.contains("pub struct CharacterRow"));
    assert!(source.contains("pub struct CharacterSO"));

    let registry = TypeRegistry::load(&out_dir).unwrap();
    let descriptor = registry.lookup("CharacterSO").unwrap();
    assert_eq!(descriptor.base_name, "Character");
    assert_eq!(descriptor.schema.width(), 3);
    assert_eq!(descriptor.source_file, "CharacterSO.rs");
    assert_eq!(descriptor.asset_file, "CharacterSO.json");
    // Lookup is exact-name.
    assert!(registry.lookup("characterso").is_none());
    assert!(registry.lookup("Character").is_none());
}

#[test]
fn generate_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", CHARACTER_SHEET);
    let out_dir = dir.path().join("generated");
    let engine = SyncEngine::new();

    generate(&engine, &sheet, &out_dir);
    let source_first = fs::read(out_dir.join("CharacterSO.rs")).unwrap();
    let manifest_first = fs::read(TypeRegistry::manifest_path(&out_dir)).unwrap();

    generate(&engine, &sheet, &out_dir);
    assert_eq!(fs::read(out_dir.join("CharacterSO.rs")).unwrap(), source_first);
    assert_eq!(
        fs::read(TypeRegistry::manifest_path(&out_dir)).unwrap(),
        manifest_first
    );
}

#[test]
fn generate_registers_types_from_multiple_sheets() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("generated");
    let engine = SyncEngine::new();

    let characters = write_sheet(dir.path(), "Character.csv", CHARACTER_SHEET);
    let items = write_sheet(dir.path(), "Item.csv", "#,\nname,cost\nstring,int\n");
    generate(&engine, &characters, &out_dir);
    generate(&engine, &items, &out_dir);

    let registry = TypeRegistry::load(&out_dir).unwrap();
    assert!(registry.lookup("CharacterSO").is_some());
    assert!(registry.lookup("ItemSO").is_some());
}

#[test]
fn generate_spaces_in_sheet_name_become_underscores() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Enemy Data.csv", CHARACTER_SHEET);
    let out_dir = dir.path().join("generated");

    let outcome = generate(&SyncEngine::new(), &sheet, &out_dir);
    assert_eq!(outcome.type_name, "Enemy_DataSO");
    assert!(out_dir.join("Enemy_DataSO.rs").is_file());
}

#[test]
fn generate_passes_namespace_and_identifiable_through() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", CHARACTER_SHEET);
    let out_dir = dir.path().join("generated");

    SyncEngine::new()
        .generate(&GenerateRequest {
            csv_path: sheet,
            out_dir: out_dir.clone(),
            namespace: Some("game".to_string()),
            implement_identifiable: true,
        })
        .unwrap();

    let bytes = fs::read(out_dir.join("CharacterSO.rs")).unwrap();
    let source = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
    assert!(source.contains("pub mod game {"));
    assert!(source.contains("impl ::csv2so_core::Identifiable for CharacterSO"));
}

#[test]
fn generate_treats_empty_namespace_as_none() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", CHARACTER_SHEET);
    let out_dir = dir.path().join("generated");

    SyncEngine::new()
        .generate(&GenerateRequest {
            csv_path: sheet,
            out_dir: out_dir.clone(),
            namespace: Some(String::new()),
            implement_identifiable: false,
        })
        .unwrap();

    let bytes = fs::read(out_dir.join("CharacterSO.rs")).unwrap();
    let source = String::from_utf8(bytes[UTF8_BOM.len()..].to_vec()).unwrap();
    assert!(!source.contains("pub mod"));
}

#[test]
fn generate_rejects_missing_sheet() {
    let dir = TempDir::new().unwrap();
    let err = SyncEngine::new()
        .generate(&GenerateRequest {
            csv_path: dir.path().join("Missing.csv"),
            out_dir: dir.path().join("generated"),
            namespace: None,
            implement_identifiable: false,
        })
        .unwrap_err();

    assert!(matches!(err, EngineError::CsvNotFound { .. }));
}

#[test]
fn generate_rejects_invalid_schema_without_writing() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Bad.csv", "#A\na\ndate\n");
    let out_dir = dir.path().join("generated");

    let err = SyncEngine::new()
        .generate(&GenerateRequest {
            csv_path: sheet,
            out_dir: out_dir.clone(),
            namespace: None,
            implement_identifiable: false,
        })
        .unwrap_err();

    assert!(matches!(err, EngineError::SchemaInvalid { .. }));
    assert!(err.to_string().contains("unknown column type `date`"));
    assert!(!out_dir.exists());
}

#[test]
fn generate_rejects_corrupt_manifest_before_writing() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", CHARACTER_SHEET);
    let out_dir = dir.path().join("generated");
    fs::create_dir_all(&out_dir).unwrap();
    fs::write(TypeRegistry::manifest_path(&out_dir), "not json").unwrap();

    let err = SyncEngine::new()
        .generate(&GenerateRequest {
            csv_path: sheet,
            out_dir: out_dir.clone(),
            namespace: None,
            implement_identifiable: false,
        })
        .unwrap_err();

    assert!(matches!(err, EngineError::ManifestInvalid { .. }));
    assert!(!out_dir.join("CharacterSO.rs").exists());
}

#[test]
fn import_creates_the_instance_from_data_rows() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", CHARACTER_SHEET);
    let out_dir = dir.path().join("generated");
    let engine = SyncEngine::new();

    generate(&engine, &sheet, &out_dir);
    let outcome = import(&engine, &sheet, &out_dir);
    assert_eq!(outcome.type_name, "CharacterSO");
    assert_eq!(outcome.asset_path, out_dir.join("CharacterSO.json"));
    assert_eq!(outcome.rows, 2);

    let rows = asset_rows(&outcome.asset_path);
    assert_eq!(rows[0]["id"], 1);
    assert_eq!(rows[0]["name"], "taro");
    assert_eq!(rows[0]["age"], 25);
    assert_eq!(rows[1]["name"], "jiro");
}

#[test]
fn import_requires_a_registered_type() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", CHARACTER_SHEET);
    let out_dir = dir.path().join("generated");

    let err = SyncEngine::new()
        .import(&ImportRequest {
            csv_path: sheet,
            out_dir: out_dir.clone(),
        })
        .unwrap_err();

    assert!(matches!(err, EngineError::TypeNotFound { .. }));
    assert!(err.to_string().contains("CharacterSO"));
    assert!(!out_dir.join("CharacterSO.json").exists());
}

#[test]
fn import_requires_three_front_matter_lines() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", CHARACTER_SHEET);
    let out_dir = dir.path().join("generated");
    let engine = SyncEngine::new();

    generate(&engine, &sheet, &out_dir);
    fs::write(&sheet, "#only,two\nlines,here\n").unwrap();

    let err = engine
        .import(&ImportRequest {
            csv_path: sheet,
            out_dir,
        })
        .unwrap_err();

    assert!(matches!(err, EngineError::SchemaInvalid { .. }));
    assert!(err.to_string().contains("3 lines"));
}

#[test]
fn import_skips_blank_and_comment_lines() {
    let sheet_text = "\
#ID,Name,Age
id,name,age
int,string,int
1,taro,25

# a comment row

2,jiro,30
";
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", sheet_text);
    let out_dir = dir.path().join("generated");
    let engine = SyncEngine::new();

    generate(&engine, &sheet, &out_dir);
    let outcome = import(&engine, &sheet, &out_dir);
    assert_eq!(outcome.rows, 2);
}

#[test]
fn import_pads_short_rows_and_truncates_long_rows() {
    let sheet_text = "\
#ID,Name,Age
id,name,age
int,string,int
1,taro
2,jiro,30,extra,cells
";
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", sheet_text);
    let out_dir = dir.path().join("generated");
    let engine = SyncEngine::new();

    generate(&engine, &sheet, &out_dir);
    let outcome = import(&engine, &sheet, &out_dir);

    let rows = asset_rows(&outcome.asset_path);
    assert_eq!(rows[0]["age"], 0);
    assert_eq!(rows[1]["age"], 30);
    assert_eq!(rows[1].as_object().unwrap().len(), 3);
}

#[test]
fn import_converts_malformed_cells_to_defaults() {
    let sheet_text = "\
#ID,Name,Age,Active
id,name,age,active
int,string,int,bool
abc,taro,twenty,TRUE
2, jiro ,30,yes
";
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", sheet_text);
    let out_dir = dir.path().join("generated");
    let engine = SyncEngine::new();

    generate(&engine, &sheet, &out_dir);
    let outcome = import(&engine, &sheet, &out_dir);

    let rows = asset_rows(&outcome.asset_path);
    assert_eq!(rows[0]["id"], 0);
    assert_eq!(rows[0]["age"], 0);
    assert_eq!(rows[0]["active"], true);
    // String cells keep their whitespace; bool accepts only `true`.
    assert_eq!(rows[1]["name"], " jiro ");
    assert_eq!(rows[1]["active"], false);
}

#[test]
fn import_replaces_the_previous_instance() {
    let dir = TempDir::new().unwrap();
    let sheet = write_sheet(dir.path(), "Character.csv", CHARACTER_SHEET);
    let out_dir = dir.path().join("generated");
    let engine = SyncEngine::new();

    generate(&engine, &sheet, &out_dir);
    import(&engine, &sheet, &out_dir);

    fs::write(&sheet, "#ID,Name,Age\nid,name,age\nint,string,int\n9,saburo,19\n").unwrap();
    let outcome = import(&engine, &sheet, &out_dir);
    assert_eq!(outcome.rows, 1);

    let rows = asset_rows(&outcome.asset_path);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "saburo");
}

#[test]
fn import_decodes_shift_jis_sheets() {
    // "タロウ" in Shift_JIS.
    let mut bytes = b"#ID,Name\nid,name\nint,string\n1,".to_vec();
    bytes.extend_from_slice(&[0x83, 0x5E, 0x83, 0x8D, 0x83, 0x45]);
    bytes.push(b'\n');

    let dir = TempDir::new().unwrap();
    let sheet = dir.path().join("Character.csv");
    fs::write(&sheet, bytes).unwrap();
    let out_dir = dir.path().join("generated");
    let engine = SyncEngine::new();

    generate(&engine, &sheet, &out_dir);
    let outcome = import(&engine, &sheet, &out_dir);

    let rows = asset_rows(&outcome.asset_path);
    assert_eq!(rows[0]["name"], "タロウ");
}

#[test]
fn utf8_bom_overrides_the_source_encoding() {
    let mut bytes = UTF8_BOM.to_vec();
    bytes.extend_from_slice("#ID,Name\nid,name\nint,string\n1,タロウ\n".as_bytes());

    let dir = TempDir::new().unwrap();
    let sheet = dir.path().join("Character.csv");
    fs::write(&sheet, bytes).unwrap();
    let out_dir = dir.path().join("generated");
    let engine = SyncEngine::new();

    generate(&engine, &sheet, &out_dir);
    let outcome = import(&engine, &sheet, &out_dir);

    let rows = asset_rows(&outcome.asset_path);
    assert_eq!(rows[0]["name"], "タロウ");
}

#[test]
fn builder_accepts_a_different_source_encoding() {
    let dir = TempDir::new().unwrap();
    let sheet = dir.path().join("Character.csv");
    fs::write(&sheet, "#ID,Name\nid,name\nint,string\n1,タロウ\n").unwrap();
    let out_dir = dir.path().join("generated");

    let engine = SyncEngine::builder()
        .with_source_encoding(encoding_rs::UTF_8)
        .build();
    generate(&engine, &sheet, &out_dir);
    let outcome = import(&engine, &sheet, &out_dir);

    let rows = asset_rows(&outcome.asset_path);
    assert_eq!(rows[0]["name"], "タロウ");
}
