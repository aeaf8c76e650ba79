//! Tests for output module

use super::*;
use crate::table::{tabularize, EmptyReason, Table};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use parquet::basic::{Compression, GzipLevel, ZstdLevel};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::fs::File;
use std::path::Path;
use tempfile::tempdir;
use test_case::test_case;

fn read_back(path: &Path) -> Vec<Value> {
    let file = File::open(path).unwrap();
    let reader = ParquetRecordBatchReaderBuilder::try_new(file)
        .unwrap()
        .build()
        .unwrap();
    reader
        .flat_map(|batch| arrow_to_json(&batch.unwrap()).unwrap())
        .collect()
}

fn field_names(schema: &arrow::datatypes::Schema) -> Vec<String> {
    schema.fields().iter().map(|f| f.name().clone()).collect()
}

// ============================================================================
// Schema Inference Tests
// ============================================================================

#[test]
fn test_infer_schema_empty() {
    let schema = infer_schema(&[]).unwrap();
    assert!(schema.fields().is_empty());
}

#[test]
fn test_infer_schema_keeps_first_seen_order() {
    let records = vec![
        json!({"Id": 63, "Nome": "IPCA - Variação mensal"}),
        json!({"Unidade": "%", "Id": 69, "Nome": "IPCA - Peso mensal"}),
    ];

    let schema = infer_schema(&records).unwrap();
    assert_eq!(field_names(&schema), vec!["Id", "Nome", "Unidade"]);
    assert_eq!(schema.field(0).data_type(), &DataType::Int64);
    assert_eq!(schema.field(1).data_type(), &DataType::Utf8);
}

#[test]
fn test_infer_schema_with_nulls() {
    let records = vec![
        json!({"Nome": "IPCA", "Nota": null}),
        json!({"Nome": "Peso", "Nota": "Fonte: IBGE"}),
    ];

    let schema = infer_schema(&records).unwrap();
    let field = schema.field_with_name("Nota").unwrap();
    assert_eq!(field.data_type(), &DataType::Utf8);
    assert!(field.is_nullable());
}

#[test]
fn test_infer_schema_mixed_numbers() {
    let records = vec![json!({"Decimais": 2}), json!({"Decimais": 2.5})];

    let schema = infer_schema(&records).unwrap();
    let field = schema.field_with_name("Decimais").unwrap();
    assert_eq!(field.data_type(), &DataType::Float64);
}

#[test]
fn test_infer_schema_conflicting_types_fall_back_to_string() {
    let records = vec![json!({"Codigo": 202401}), json!({"Codigo": "202402"})];

    let schema = infer_schema(&records).unwrap();
    let field = schema.field_with_name("Codigo").unwrap();
    assert_eq!(field.data_type(), &DataType::Utf8);
}

#[test]
fn test_infer_schema_nested_object_merges_fields() {
    let records = vec![
        json!({"Nivel": {"Id": 1}}),
        json!({"Nivel": {"Id": 6, "Nome": "Município"}}),
    ];

    let schema = infer_schema(&records).unwrap();
    let field = schema.field_with_name("Nivel").unwrap();

    if let DataType::Struct(fields) = field.data_type() {
        let names: Vec<&str> = fields.iter().map(|f| f.name().as_str()).collect();
        assert_eq!(names, vec!["Id", "Nome"]);
    } else {
        panic!("Expected Struct type");
    }
}

#[test]
fn test_infer_schema_array() {
    let records = vec![json!({"Literais": ["janeiro 2024", "jan 2024"]})];

    let schema = infer_schema(&records).unwrap();
    let field = schema.field_with_name("Literais").unwrap();

    if let DataType::List(inner) = field.data_type() {
        assert_eq!(inner.data_type(), &DataType::Utf8);
    } else {
        panic!("Expected List type");
    }
}

#[test]
fn test_infer_schema_empty_object_is_null() {
    let records = vec![json!({"Extra": {}})];
    let schema = infer_schema(&records).unwrap();
    assert_eq!(
        schema.field_with_name("Extra").unwrap().data_type(),
        &DataType::Null
    );
}

// ============================================================================
// JSON to Arrow Tests
// ============================================================================

#[test]
fn test_json_to_arrow_missing_keys_become_null() {
    let records = vec![
        json!({"Id": 1, "Literal": "Jan"}),
        json!({"Id": 2}),
        json!({"Id": 3, "Literal": null}),
    ];

    let batch = json_to_arrow(&records, None).unwrap();
    assert_eq!(batch.num_rows(), 3);

    let back = arrow_to_json(&batch).unwrap();
    assert_eq!(back[0]["Literal"], "Jan");
    assert!(back[1]["Literal"].is_null());
    assert!(back[2]["Literal"].is_null());
}

#[test]
fn test_json_to_arrow_empty() {
    let batch = json_to_arrow(&[], None).unwrap();
    assert_eq!(batch.num_rows(), 0);
}

#[test]
fn test_json_to_arrow_provided_schema() {
    let records = vec![json!({"Id": 1, "Nome": "IPCA", "extra": "ignored"})];

    let schema = infer_schema(&[json!({"Id": 0, "Nome": ""})]).unwrap();
    let batch = json_to_arrow(&records, Some(&schema)).unwrap();

    assert_eq!(batch.num_columns(), 2);
}

#[test]
fn test_json_to_arrow_nested_and_lists() {
    let records = vec![
        json!({
            "Id": 202401,
            "Literals": ["janeiro 2024"],
            "Nivel": {"Id": 1, "Nome": "Brasil"},
            "Disponivel": true
        }),
        json!({
            "Id": 202402,
            "Literals": [],
            "Nivel": {"Id": 1, "Nome": "Brasil"},
            "Disponivel": false
        }),
    ];

    let batch = json_to_arrow(&records, None).unwrap();
    let back = arrow_to_json(&batch).unwrap();

    assert_eq!(back[0]["Literals"], json!(["janeiro 2024"]));
    assert_eq!(back[1]["Literals"], json!([]));
    assert_eq!(back[0]["Nivel"]["Nome"], "Brasil");
    assert_eq!(back[1]["Disponivel"], false);
}

// ============================================================================
// Parquet Writer Tests
// ============================================================================

fn compression_of(path: &Path) -> Compression {
    let file = File::open(path).unwrap();
    let builder = ParquetRecordBatchReaderBuilder::try_new(file).unwrap();
    builder.metadata().row_group(0).column(0).compression()
}

#[test]
fn test_write_batch_to_parquet() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("variaveis.parquet");

    let records = vec![json!({"Id": 63, "Nome": "IPCA"}), json!({"Id": 69, "Nome": "Peso"})];
    let batch = json_to_arrow(&records, None).unwrap();

    let rows = write_batch_to_parquet(&path, &batch, ParquetCompression::default()).unwrap();
    assert_eq!(rows, 2);
    assert_eq!(read_back(&path), records);
    assert_eq!(compression_of(&path), Compression::SNAPPY);
}

#[test_case(ParquetCompression::Snappy, Compression::SNAPPY ; "snappy")]
#[test_case(ParquetCompression::Zstd, Compression::ZSTD(ZstdLevel::default()) ; "zstd")]
#[test_case(ParquetCompression::Gzip, Compression::GZIP(GzipLevel::default()) ; "gzip")]
#[test_case(ParquetCompression::Uncompressed, Compression::UNCOMPRESSED ; "uncompressed")]
fn test_write_batch_to_parquet_compression(
    compression: ParquetCompression,
    expected: Compression,
) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notas.parquet");

    let batch = json_to_arrow(&[json!({"Nota": "Nota 1"})], None).unwrap();
    write_batch_to_parquet(&path, &batch, compression).unwrap();

    assert_eq!(compression_of(&path), expected);
    assert_eq!(read_back(&path), vec![json!({"Nota": "Nota 1"})]);
}

#[test]
fn test_write_batch_to_parquet_replaces_existing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notas.parquet");
    std::fs::write(&path, b"stale").unwrap();

    let batch = json_to_arrow(&[json!({"Nota": "Nota 1"})], None).unwrap();
    write_batch_to_parquet(&path, &batch, ParquetCompression::Snappy).unwrap();

    assert_eq!(read_back(&path), vec![json!({"Nota": "Nota 1"})]);
}

#[test]
fn test_parquet_writer_missing_directory() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope").join("x.parquet");

    let batch = json_to_arrow(&[json!({"Id": 1})], None).unwrap();
    let err = write_batch_to_parquet(&path, &batch, ParquetCompression::Snappy).unwrap_err();
    assert!(err.to_string().contains("Failed to create file"));
}

// ============================================================================
// TableWriter Tests
// ============================================================================

#[test]
fn test_parquet_table_writer_string_list() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("notas.parquet");

    let value = json!(["Nota 1", "Nota 2"]);
    let table = tabularize(Some(&value), "Notas");

    let writer = ParquetTableWriter::default();
    assert_eq!(writer.extension(), "parquet");
    assert_eq!(writer.write_table(&table, &path).unwrap(), 2);

    assert_eq!(
        read_back(&path),
        vec![json!({"Nota": "Nota 1"}), json!({"Nota": "Nota 2"})]
    );
}

#[test]
fn test_parquet_table_writer_refuses_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("vazio.parquet");

    let writer = ParquetTableWriter::default();
    let result = writer.write_table(&Table::empty(EmptyReason::Absent), &path);

    assert!(result.is_err());
    assert!(!path.exists());
}

#[test]
fn test_parquet_table_writer_is_deterministic() {
    let dir = tempdir().unwrap();
    let first = dir.path().join("a.parquet");
    let second = dir.path().join("b.parquet");

    let value = json!([
        {"Id": "1", "Literal": "Jan", "Ordem": 1},
        {"Id": "2", "Literal": "Fev", "Ordem": 2}
    ]);
    let table = tabularize(Some(&value), "Periodos");

    let writer = ParquetTableWriter::new(ParquetCompression::Uncompressed);
    writer.write_table(&table, &first).unwrap();
    writer.write_table(&table, &second).unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}
