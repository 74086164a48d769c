//! Statement execution on an open MySQL connection and row → JSON decoding.

use crate::error::StoreError;
use crate::sql::QueryBuf;
use serde_json::Value;
use sqlx::mysql::{MySqlConnection, MySqlRow};
use sqlx::{Column, Row, TypeInfo, ValueRef};

pub(crate) async fn query_many(
    conn: &mut MySqlConnection,
    q: &QueryBuf,
) -> Result<Vec<Value>, StoreError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query(q.sql);
    for p in &q.params {
        query = query.bind(*p);
    }
    let rows = query.fetch_all(&mut *conn).await.map_err(StoreError::Query)?;
    Ok(rows.iter().map(row_to_json).collect())
}

pub(crate) fn row_to_json(row: &MySqlRow) -> Value {
    let mut map = serde_json::Map::new();
    for col in row.columns() {
        let name = col.name();
        map.insert(name.to_string(), cell_to_value(row, name));
    }
    Value::Object(map)
}

/// Decode one cell. SQL NULL is `null`; a non-null cell of an unsupported type is logged and becomes `null`.
fn cell_to_value(row: &MySqlRow, name: &str) -> Value {
    let type_name = match row.try_get_raw(name) {
        Ok(raw) if raw.is_null() => return Value::Null,
        Ok(raw) => raw.type_info().name().to_string(),
        Err(_) => return Value::Null,
    };
    // DECIMAL arrives as its exact text form on the wire.
    if type_name.starts_with("DECIMAL") {
        if let Ok(s) = row.try_get_unchecked::<String, _>(name) {
            return Value::String(s);
        }
    }
    if let Ok(n) = row.try_get::<i64, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(n) = row.try_get::<u64, _>(name) {
        return Value::Number(n.into());
    }
    if let Ok(n) = row.try_get::<f64, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n) {
            return Value::Number(n);
        }
    }
    if let Ok(n) = row.try_get::<f32, _>(name) {
        if let Some(n) = serde_json::Number::from_f64(n as f64) {
            return Value::Number(n);
        }
    }
    if let Ok(s) = row.try_get::<String, _>(name) {
        return Value::String(s);
    }
    if let Ok(d) = row.try_get::<chrono::DateTime<chrono::Utc>, _>(name) {
        return Value::String(d.to_rfc3339());
    }
    if let Ok(d) = row.try_get::<chrono::NaiveDateTime, _>(name) {
        return Value::String(d.format("%Y-%m-%dT%H:%M:%S%.f").to_string());
    }
    if let Ok(d) = row.try_get::<chrono::NaiveDate, _>(name) {
        return Value::String(d.format("%Y-%m-%d").to_string());
    }
    if let Ok(t) = row.try_get::<chrono::NaiveTime, _>(name) {
        return Value::String(t.format("%H:%M:%S%.f").to_string());
    }
    if let Ok(bytes) = row.try_get::<Vec<u8>, _>(name) {
        return Value::String(String::from_utf8_lossy(&bytes).into_owned());
    }
    tracing::debug!(column = %name, sql_type = %type_name, "undecodable cell returned as null");
    Value::Null
}
