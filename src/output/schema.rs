//! Arrow schema inference and JSON to Arrow conversion
//!
//! Field order follows the order keys are first seen across records, so
//! the same document always produces the same schema.

use crate::error::{Error, Result};
use arrow::array::{
    Array, ArrayRef, BooleanArray, Float64Array, Int64Array, ListArray, NullArray, StringArray,
    StructArray,
};
use arrow::buffer::OffsetBuffer;
use arrow::datatypes::{DataType, Field, Fields, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::display::array_value_to_string;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Ordered name -> type accumulator
#[derive(Default)]
struct FieldTypes {
    order: Vec<String>,
    types: HashMap<String, DataType>,
}

impl FieldTypes {
    fn observe(&mut self, name: &str, data_type: DataType) {
        match self.types.get_mut(name) {
            Some(existing) => *existing = merge_types(existing, &data_type),
            None => {
                self.order.push(name.to_string());
                self.types.insert(name.to_string(), data_type);
            }
        }
    }

    fn into_fields(mut self) -> Vec<Field> {
        self.order
            .into_iter()
            .filter_map(|name| {
                let dtype = self.types.remove(&name)?;
                Some(Field::new(name, dtype, true)) // All fields nullable
            })
            .collect()
    }
}

/// Infer an Arrow schema from a set of JSON records
///
/// Non-object records are ignored. Types seen for the same key across
/// records are merged (see `merge_types`).
pub fn infer_schema(records: &[Value]) -> Result<Schema> {
    let mut fields = FieldTypes::default();

    for record in records {
        if let Value::Object(obj) = record {
            for (key, value) in obj {
                fields.observe(key, infer_type(value));
            }
        }
    }

    Ok(Schema::new(fields.into_fields()))
}

/// Convert JSON records to an Arrow RecordBatch
///
/// Uses the provided schema or infers one from the data.
pub fn json_to_arrow(records: &[Value], schema: Option<&Schema>) -> Result<RecordBatch> {
    let schema = match schema {
        Some(schema) => schema.clone(),
        None => infer_schema(records)?,
    };

    if records.is_empty() {
        return Ok(RecordBatch::new_empty(Arc::new(schema)));
    }

    let mut columns: Vec<ArrayRef> = Vec::with_capacity(schema.fields().len());

    for field in schema.fields() {
        let values: Vec<Option<&Value>> = records
            .iter()
            .map(|record| record.as_object().and_then(|obj| obj.get(field.name())))
            .collect();

        columns.push(build_array(&values, field.data_type())?);
    }

    RecordBatch::try_new(Arc::new(schema), columns)
        .map_err(|e| Error::output(format!("Failed to create RecordBatch: {e}")))
}

/// Infer Arrow DataType from a JSON value
fn infer_type(value: &Value) -> DataType {
    match value {
        Value::Null => DataType::Null,
        Value::Bool(_) => DataType::Boolean,
        Value::Number(n) => {
            if n.is_i64() {
                DataType::Int64
            } else {
                DataType::Float64
            }
        }
        Value::String(_) => DataType::Utf8,
        Value::Array(arr) => {
            let element_type = arr
                .iter()
                .map(infer_type)
                .reduce(|a, b| merge_types(&a, &b))
                .unwrap_or(DataType::Null);
            DataType::List(Arc::new(Field::new("item", element_type, true)))
        }
        // A struct needs at least one child; treat `{}` as missing
        Value::Object(obj) if obj.is_empty() => DataType::Null,
        Value::Object(obj) => {
            let fields: Vec<Field> = obj
                .iter()
                .map(|(k, v)| Field::new(k, infer_type(v), true))
                .collect();
            DataType::Struct(Fields::from(fields))
        }
    }
}

/// Merge two data types into a compatible type
fn merge_types(type1: &DataType, type2: &DataType) -> DataType {
    match (type1, type2) {
        (a, b) if a == b => a.clone(),

        // Null can merge with anything
        (DataType::Null, other) | (other, DataType::Null) => other.clone(),

        // Numbers can merge (prefer Float64 for mixed)
        (DataType::Int64, DataType::Float64) | (DataType::Float64, DataType::Int64) => {
            DataType::Float64
        }

        (DataType::List(a), DataType::List(b)) => {
            let item = merge_types(a.data_type(), b.data_type());
            DataType::List(Arc::new(Field::new("item", item, true)))
        }

        (DataType::Struct(a), DataType::Struct(b)) => {
            let mut fields = FieldTypes::default();
            for field in a.iter().chain(b.iter()) {
                fields.observe(field.name(), field.data_type().clone());
            }
            DataType::Struct(Fields::from(fields.into_fields()))
        }

        // Different types -> fall back to String (most flexible)
        _ => DataType::Utf8,
    }
}

/// Build an Arrow array from JSON values
fn build_array(values: &[Option<&Value>], data_type: &DataType) -> Result<ArrayRef> {
    match data_type {
        DataType::Null => Ok(Arc::new(NullArray::new(values.len()))),

        DataType::Boolean => {
            let arr: BooleanArray = values.iter().map(|v| v.and_then(Value::as_bool)).collect();
            Ok(Arc::new(arr))
        }

        DataType::Int64 => {
            let arr: Int64Array = values.iter().map(|v| v.and_then(Value::as_i64)).collect();
            Ok(Arc::new(arr))
        }

        DataType::Float64 => {
            let arr: Float64Array = values.iter().map(|v| v.and_then(Value::as_f64)).collect();
            Ok(Arc::new(arr))
        }

        DataType::List(field) => build_list_array(values, field),

        DataType::Struct(fields) => build_struct_array(values, fields),

        // Utf8 and anything unexpected: string representation
        _ => {
            let arr: StringArray = values
                .iter()
                .map(|v| match v {
                    None | Some(Value::Null) => None,
                    Some(Value::String(s)) => Some(s.clone()),
                    Some(other) => Some(other.to_string()),
                })
                .collect();
            Ok(Arc::new(arr))
        }
    }
}

/// Build a list array from JSON arrays
fn build_list_array(values: &[Option<&Value>], field: &Arc<Field>) -> Result<ArrayRef> {
    let mut all_items: Vec<Option<&Value>> = Vec::new();
    let mut offsets: Vec<i32> = vec![0];

    for value in values {
        if let Some(Value::Array(arr)) = value {
            all_items.extend(arr.iter().map(Some));
        }
        let offset = i32::try_from(all_items.len())
            .map_err(|_| Error::output("Array too large for i32 offset"))?;
        offsets.push(offset);
    }

    let items_array = build_array(&all_items, field.data_type())?;
    let offset_buffer = OffsetBuffer::new(offsets.into());

    let list_array = ListArray::try_new(Arc::clone(field), offset_buffer, items_array, None)?;
    Ok(Arc::new(list_array))
}

/// Build a struct array from JSON objects
fn build_struct_array(values: &[Option<&Value>], fields: &Fields) -> Result<ArrayRef> {
    let mut child_arrays: Vec<ArrayRef> = Vec::with_capacity(fields.len());

    for field in fields {
        let child_values: Vec<Option<&Value>> = values
            .iter()
            .map(|v| v.and_then(Value::as_object).and_then(|obj| obj.get(field.name())))
            .collect();

        child_arrays.push(build_array(&child_values, field.data_type())?);
    }

    let struct_array = StructArray::try_new(fields.clone(), child_arrays, None)?;
    Ok(Arc::new(struct_array))
}

/// Convert an Arrow RecordBatch to JSON records
///
/// Returns a vector of JSON objects, one per row in the batch. Used to read
/// written files back.
pub fn arrow_to_json(batch: &RecordBatch) -> Result<Vec<Value>> {
    let schema = batch.schema();
    let mut records = Vec::with_capacity(batch.num_rows());

    for row in 0..batch.num_rows() {
        let mut record = serde_json::Map::new();
        for (field, column) in schema.fields().iter().zip(batch.columns()) {
            record.insert(field.name().clone(), array_value_to_json(column.as_ref(), row)?);
        }
        records.push(Value::Object(record));
    }

    Ok(records)
}

/// Convert a single array element to JSON
fn array_value_to_json(array: &dyn Array, row: usize) -> Result<Value> {
    if array.is_null(row) {
        return Ok(Value::Null);
    }

    let downcast_failed = || Error::output(format!("Failed to downcast {}", array.data_type()));

    match array.data_type() {
        DataType::Null => Ok(Value::Null),

        DataType::Boolean => {
            let arr = array
                .as_any()
                .downcast_ref::<BooleanArray>()
                .ok_or_else(downcast_failed)?;
            Ok(Value::Bool(arr.value(row)))
        }

        DataType::Int64 => {
            let arr = array
                .as_any()
                .downcast_ref::<Int64Array>()
                .ok_or_else(downcast_failed)?;
            Ok(Value::Number(arr.value(row).into()))
        }

        DataType::Float64 => {
            let arr = array
                .as_any()
                .downcast_ref::<Float64Array>()
                .ok_or_else(downcast_failed)?;
            Ok(serde_json::Number::from_f64(arr.value(row)).map_or(Value::Null, Value::Number))
        }

        DataType::Utf8 => {
            let arr = array
                .as_any()
                .downcast_ref::<StringArray>()
                .ok_or_else(downcast_failed)?;
            Ok(Value::String(arr.value(row).to_string()))
        }

        DataType::List(_) => {
            let arr = array
                .as_any()
                .downcast_ref::<ListArray>()
                .ok_or_else(downcast_failed)?;
            let values = arr.value(row);
            let items = (0..values.len())
                .map(|i| array_value_to_json(values.as_ref(), i))
                .collect::<Result<Vec<_>>>()?;
            Ok(Value::Array(items))
        }

        DataType::Struct(_) => {
            let arr = array
                .as_any()
                .downcast_ref::<StructArray>()
                .ok_or_else(downcast_failed)?;
            let mut obj = serde_json::Map::new();
            for (field, column) in arr.fields().iter().zip(arr.columns()) {
                obj.insert(field.name().clone(), array_value_to_json(column.as_ref(), row)?);
            }
            Ok(Value::Object(obj))
        }

        _ => Ok(Value::String(array_value_to_string(array, row)?)),
    }
}
