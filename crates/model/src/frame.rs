use serde_json::Value;

/// One caller-supplied feature record. Keys keep their insertion order.
pub type Record = serde_json::Map<String, Value>;

/// A small table of untyped cells.
///
/// Columns are kept in the order callers first mentioned them; no typing
/// happens here, that is deferred to [`crate::Model`] at scoring time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Frame {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    /// Position of a named column.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// A single record becomes a single row.
impl From<Record> for Frame {
    fn from(record: Record) -> Self {
        let (columns, row) = record.into_iter().unzip();
        Self {
            columns,
            rows: vec![row],
        }
    }
}

/// Several records share the union of their columns; absent cells are null.
impl FromIterator<Record> for Frame {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let records = iter.into_iter().collect::<Vec<Record>>();
        let mut columns = Vec::<String>::new();
        for key in records.iter().flat_map(|r| r.keys()) {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
        let rows = records
            .into_iter()
            .map(|mut record| {
                columns
                    .iter()
                    .map(|c| record.remove(c).unwrap_or(Value::Null))
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn single_record_keeps_caller_order() {
        let frame = Frame::from(record(json!({ "zeta": 1, "alpha": "x", "mid": true })));
        assert_eq!(frame.columns(), ["zeta", "alpha", "mid"]);
        assert_eq!(frame.len(), 1);
        assert_eq!(frame.rows()[0], vec![json!(1), json!("x"), json!(true)]);
    }
    #[test]
    fn empty_record_is_one_empty_row() {
        let frame = Frame::from(Record::new());
        assert!(frame.columns().is_empty());
        assert_eq!(frame.len(), 1);
    }
    #[test]
    fn records_union_columns_with_nulls() {
        let frame = [
            record(json!({ "a": 1, "b": 2 })),
            record(json!({ "c": 3, "a": 4 })),
        ]
        .into_iter()
        .collect::<Frame>();
        assert_eq!(frame.columns(), ["a", "b", "c"]);
        assert_eq!(frame.rows()[0], vec![json!(1), json!(2), Value::Null]);
        assert_eq!(frame.rows()[1], vec![json!(4), Value::Null, json!(3)]);
        assert_eq!(frame.column("c"), Some(2));
        assert_eq!(frame.column("d"), None);
    }
}
