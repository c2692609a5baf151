//! Builds the table model from a schema source.

use dbstruct_core::{Column, Filter, Key, Result, Table, map_type};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::{ColumnRow, SchemaSource, TableRow};

/// A listed table and the prefix of the filter that selected it.
struct Selected {
    row: TableRow,
    prefix: Option<String>,
}

/// Read every selected table and its columns.
///
/// Without filters the whole schema is listed once. With filters, each one
/// is listed separately and the union is deduplicated by table name, the
/// first filter to select a table deciding its prefix. Excluded names are
/// dropped by exact match.
///
/// A failing create-table statement degrades to an empty DDL; any other
/// failure, including a column type without mapping, aborts the run.
pub fn introspect<S>(source: &S, filters: &[Filter], exclude: &[String]) -> Result<Vec<Table>>
where
    S: SchemaSource + ?Sized,
{
    let selected = select_tables(source, filters, exclude)?;
    let mut tables = Vec::with_capacity(selected.len());

    for Selected { row, prefix } in selected {
        debug!(table = %row.name, ?prefix, "reading table");

        let ddl = match source.create_table(&row.name) {
            Ok(ddl) => ddl,
            Err(err) => {
                debug!(table = %row.name, error = %err, "create statement unavailable");
                String::new()
            }
        };

        let columns = source
            .columns(&row.name)?
            .into_iter()
            .map(|column| build_column(&row.name, column))
            .collect::<Result<Vec<_>>>()?;

        tables.push(Table {
            name: row.name,
            comment: non_empty(row.comment),
            prefix,
            ddl,
            columns,
        });
    }

    info!(tables = tables.len(), "schema read");
    Ok(tables)
}

fn select_tables<S>(source: &S, filters: &[Filter], exclude: &[String]) -> Result<Vec<Selected>>
where
    S: SchemaSource + ?Sized,
{
    let mut selected: IndexMap<String, Selected> = IndexMap::new();

    if filters.is_empty() {
        for row in source.tables(None)? {
            selected.insert(row.name.clone(), Selected { row, prefix: None });
        }
    } else {
        for filter in filters {
            for row in source.tables(Some(&filter.pattern))? {
                selected.entry(row.name.clone()).or_insert_with(|| Selected {
                    row,
                    prefix: filter.tag().map(str::to_string),
                });
            }
        }
    }

    selected.retain(|name, _| !exclude.contains(name));
    Ok(selected.into_values().collect())
}

fn build_column(table: &str, row: ColumnRow) -> Result<Column> {
    let native_type = row.column_type.to_lowercase();
    let semantic = map_type(&native_type).map_err(|e| e.at_column(table, &row.name))?;

    Ok(Column {
        name: row.name,
        native_type,
        nullable: row.is_nullable.eq_ignore_ascii_case("YES"),
        key: Key::from_column_key(&row.column_key),
        default: row.default,
        comment: non_empty(row.comment),
        extra: row.extra,
        semantic,
    })
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}
