mod common;
mod data_type;
mod stmt;

pub use crate::{
    common::{ColumnName, DatabaseName, IndexName, TableName},
    data_type::{DataType, NotDataTypeError, Shape},
    stmt::*,
};

use {
    common::display_separated,
    std::fmt::{Display, Formatter, Result},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement {
    DropTable { table_names: Vec<TableName> },
    DropDatabase { name: DatabaseName },
    CreateDatabase { name: DatabaseName },
    CreateTable(CreateTableStmt),
    AlterTable(AlterTableStmt),
    /// A block comment; `content` is everything between `/*` and `*/`.
    Comment { content: String },
}

impl Statement {
    /// Short upper-case label of the statement kind, e.g. `CREATE TABLE`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DropTable { .. } => "DROP TABLE",
            Self::DropDatabase { .. } => "DROP DATABASE",
            Self::CreateDatabase { .. } => "CREATE DATABASE",
            Self::CreateTable(_) => "CREATE TABLE",
            Self::AlterTable(_) => "ALTER TABLE",
            Self::Comment { .. } => "COMMENT",
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DropTable { table_names } => {
                write!(f, "DROP TABLE {}", display_separated(table_names, ", "))
            }
            Self::DropDatabase { name } => write!(f, "DROP DATABASE {}", name),
            Self::CreateDatabase { name } => write!(f, "CREATE DATABASE {}", name),
            Self::CreateTable(stmt) => stmt.fmt(f),
            Self::AlterTable(stmt) => stmt.fmt(f),
            Self::Comment { content } => write!(f, "/*{}*/", content),
        }
    }
}

/// Renders a script: every statement followed by `;` and a line break.
pub fn render_statements(statements: &[Statement]) -> String {
    statements
        .iter()
        .map(|statement| format!("{};\n", statement))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_table() {
        let cases = [
            ("DROP TABLE `hoge`", vec![TableName::new("hoge")]),
            (
                "DROP TABLE `fuga`, `hoge`",
                vec![TableName::new("fuga"), TableName::new("hoge")],
            ),
            ("DROP TABLE `TABLE`", vec![TableName::new("TABLE")]),
            ("DROP TABLE `hoge`.`fuga`", vec![TableName::qualified("hoge", "fuga")]),
        ];

        for (expected, table_names) in cases {
            assert_eq!(Statement::DropTable { table_names }.to_string(), expected);
        }
    }

    #[test]
    fn database_statements() {
        let name = DatabaseName::new("hoge");

        assert_eq!(
            Statement::DropDatabase { name: name.clone() }.to_string(),
            "DROP DATABASE `hoge`"
        );
        assert_eq!(
            Statement::CreateDatabase { name }.to_string(),
            "CREATE DATABASE `hoge`"
        );
    }

    #[test]
    fn comment() {
        let stmt = Statement::Comment {
            content: " ほげ ".to_string(),
        };

        assert_eq!(stmt.to_string(), "/* ほげ */");
        assert_eq!(stmt.name(), "COMMENT");
    }

    #[test]
    fn render_script() {
        let statements = [
            Statement::Comment {
                content: " dump ".to_string(),
            },
            Statement::DropDatabase {
                name: DatabaseName::new("a"),
            },
        ];

        assert_eq!(render_statements(&statements), "/* dump */;\nDROP DATABASE `a`;\n");
        assert_eq!(render_statements(&[]), "");
    }
}
