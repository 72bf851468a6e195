//! Explicit table layout for persisted entities.
//!
//! The Postgres store builds every statement it issues from a [`TableSchema`],
//! so column order here is also the bind order used by the repositories.

/// Postgres storage type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SqlType {
    BigSerial,
    Text,
    DoublePrecision,
}

impl SqlType {
    pub fn as_sql(self) -> &'static str {
        match self {
            SqlType::BigSerial => "BIGSERIAL",
            SqlType::Text => "TEXT",
            SqlType::DoublePrecision => "DOUBLE PRECISION",
        }
    }
}

/// One column: name, storage type, nullability.
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub nullable: bool,
}

/// A table keyed by a server-generated integer id plus scalar columns.
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub table: &'static str,
    pub key: ColumnDef,
    /// Client-writable columns, in bind order.
    pub columns: &'static [ColumnDef],
}

/// Layout of the `brinquedos` table.
pub const TOY_SCHEMA: TableSchema = TableSchema {
    table: "brinquedos",
    key: ColumnDef {
        name: "id",
        sql_type: SqlType::BigSerial,
        nullable: false,
    },
    columns: &[
        ColumnDef {
            name: "name",
            sql_type: SqlType::Text,
            nullable: true,
        },
        ColumnDef {
            name: "toy_type",
            sql_type: SqlType::Text,
            nullable: true,
        },
        ColumnDef {
            name: "classification",
            sql_type: SqlType::Text,
            nullable: true,
        },
        ColumnDef {
            name: "size",
            sql_type: SqlType::Text,
            nullable: true,
        },
        ColumnDef {
            name: "price",
            sql_type: SqlType::DoublePrecision,
            nullable: true,
        },
    ],
};

impl TableSchema {
    /// `id, col1, col2, ...`
    pub fn select_list(&self) -> String {
        std::iter::once(self.key.name)
            .chain(self.columns.iter().map(|c| c.name))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn select_all_sql(&self) -> String {
        format!(
            "SELECT {} FROM {} ORDER BY {}",
            self.select_list(),
            self.table,
            self.key.name
        )
    }

    pub fn select_by_id_sql(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE {} = $1",
            self.select_list(),
            self.table,
            self.key.name
        )
    }

    pub fn exists_sql(&self) -> String {
        format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE {} = $1)",
            self.table, self.key.name
        )
    }

    /// Insert binding every column as `$1..$n`; the key is generated.
    pub fn insert_sql(&self) -> String {
        let names: Vec<_> = self.columns.iter().map(|c| c.name).collect();
        let params: Vec<_> = (1..=self.columns.len()).map(|i| format!("${i}")).collect();
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            self.table,
            names.join(", "),
            params.join(", "),
            self.select_list()
        )
    }

    /// Full overwrite of every column. The key binds as `$1`, columns follow.
    pub fn update_sql(&self) -> String {
        let assignments: Vec<_> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} = ${}", c.name, i + 2))
            .collect();
        format!(
            "UPDATE {} SET {} WHERE {} = $1 RETURNING {}",
            self.table,
            assignments.join(", "),
            self.key.name,
            self.select_list()
        )
    }

    pub fn delete_sql(&self) -> String {
        format!("DELETE FROM {} WHERE {} = $1", self.table, self.key.name)
    }
}
