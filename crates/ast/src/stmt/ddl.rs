use {
    crate::{
        common::{display_separated, ColumnName, IndexName, TableName},
        data_type::{DataType, Shape},
    },
    std::fmt::{Display, Formatter, Result},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateTableStmt {
    pub name: TableName,
    pub definitions: Vec<CreateDefinition>,
    pub options: Vec<TableOption>,
}

impl Display for CreateTableStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "CREATE TABLE {} (\n\t{}\n)",
            self.name,
            display_separated(&self.definitions, ",\n\t")
        )?;
        if !self.options.is_empty() {
            write!(f, " {}", display_separated(&self.options, " "))?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlterTableStmt {
    pub name: TableName,
    pub specs: Vec<AlterSpecification>,
}

impl Display for AlterTableStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "ALTER TABLE {}", self.name)?;
        if !self.specs.is_empty() {
            write!(f, " {}", display_separated(&self.specs, ", "))?;
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AlterSpecification {
    DropColumn {
        name: ColumnName,
    },
    DropIndex {
        name: IndexName,
    },
    AddColumn {
        name: ColumnName,
        definition: ColumnDefinition,
    },
}

impl Display for AlterSpecification {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DropColumn { name } => write!(f, "DROP {}", name),
            Self::DropIndex { name } => write!(f, "DROP INDEX {}", name),
            Self::AddColumn { name, definition } => write!(f, "ADD {} {}", name, definition),
        }
    }
}

/// One entry of the parenthesized list of a `CREATE TABLE` statement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateDefinition {
    Column {
        name: ColumnName,
        definition: ColumnDefinition,
    },
    PrimaryIndex {
        columns: Vec<ColumnName>,
    },
    UniqueIndex {
        name: Option<IndexName>,
        columns: Vec<ColumnName>,
    },
    Index {
        name: Option<IndexName>,
        columns: Vec<ColumnName>,
    },
}

impl Display for CreateDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let (prefix, name, columns) = match self {
            Self::Column { name, definition } => return write!(f, "{} {}", name, definition),
            Self::PrimaryIndex { columns } => ("PRIMARY KEY", None, columns),
            Self::UniqueIndex { name, columns } => ("UNIQUE KEY", name.as_ref(), columns),
            Self::Index { name, columns } => ("INDEX", name.as_ref(), columns),
        };

        f.write_str(prefix)?;
        if let Some(name) = name {
            write!(f, " {}", name)?;
        }
        write!(f, " ( {} )", display_separated(columns, ","))
    }
}

/// The type and attributes of a column.
///
/// The rendered form always keeps a space between the type attributes and the
/// default clause, so a column without `DEFAULT` renders with a trailing space
/// (`DATE `).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDefinition {
    pub data_type: DataTypeDefinition,
    pub nullable: bool,
    pub auto_increment: bool,
    pub default: DefaultDefinition,
}

impl ColumnDefinition {
    /// A nullable column of the given type without further attributes.
    pub fn new(data_type: DataTypeDefinition) -> Self {
        Self {
            data_type,
            nullable: true,
            auto_increment: false,
            default: DefaultDefinition::Empty,
        }
    }
}

impl From<DataTypeDefinition> for ColumnDefinition {
    fn from(data_type: DataTypeDefinition) -> Self {
        Self::new(data_type)
    }
}

impl Display for ColumnDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.data_type.fmt(f)?;
        if !self.nullable {
            f.write_str(" NOT NULL")?;
        }
        if self.auto_increment {
            f.write_str(" AUTO_INCREMENT")?;
        }
        write!(f, " {}", self.default)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataTypeDefinition {
    Simple {
        data_type: DataType,
    },
    Number {
        data_type: DataType,
        length: u32,
        unsigned: bool,
        zerofill: bool,
    },
    Fraction {
        data_type: DataType,
        length: u32,
        decimals: u32,
        unsigned: bool,
        zerofill: bool,
    },
    String {
        data_type: DataType,
        length: u32,
        charset: Option<String>,
        collation: Option<String>,
    },
    TextBlob {
        data_type: DataType,
        binary: bool,
        charset: Option<String>,
        collation: Option<String>,
    },
}

impl DataTypeDefinition {
    /// The definition of `data_type` in its shape, with every attribute unset.
    pub fn bare(data_type: DataType) -> Self {
        match data_type.shape() {
            Shape::Simple => Self::Simple { data_type },
            Shape::Number => Self::Number {
                data_type,
                length: 0,
                unsigned: false,
                zerofill: false,
            },
            Shape::Fraction => Self::Fraction {
                data_type,
                length: 0,
                decimals: 0,
                unsigned: false,
                zerofill: false,
            },
            Shape::String => Self::String {
                data_type,
                length: 0,
                charset: None,
                collation: None,
            },
            Shape::TextBlob => Self::TextBlob {
                data_type,
                binary: false,
                charset: None,
                collation: None,
            },
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Self::Simple { data_type }
            | Self::Number { data_type, .. }
            | Self::Fraction { data_type, .. }
            | Self::String { data_type, .. }
            | Self::TextBlob { data_type, .. } => *data_type,
        }
    }
}

fn write_sign(f: &mut Formatter<'_>, unsigned: bool, zerofill: bool) -> Result {
    if unsigned {
        f.write_str(" UNSIGNED")?;
    }
    if zerofill {
        f.write_str(" ZEROFILL")?;
    }
    Ok(())
}

/// Names are written as stored; a quoted name keeps its delimiters.
fn write_charset(
    f: &mut Formatter<'_>,
    charset: &Option<String>,
    collation: &Option<String>,
) -> Result {
    if let Some(charset) = charset {
        write!(f, " CHARACTER SET {}", charset)?;
    }
    if let Some(collation) = collation {
        write!(f, " COLLATE {}", collation)?;
    }
    Ok(())
}

impl Display for DataTypeDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Simple { data_type } => data_type.fmt(f),
            Self::Number {
                data_type,
                length,
                unsigned,
                zerofill,
            } => {
                data_type.fmt(f)?;
                if *length != 0 {
                    write!(f, "({})", length)?;
                }
                write_sign(f, *unsigned, *zerofill)
            }
            Self::Fraction {
                data_type,
                length,
                decimals,
                unsigned,
                zerofill,
            } => {
                data_type.fmt(f)?;
                match (length, decimals) {
                    (0, 0) => {}
                    (length, 0) => write!(f, "({})", length)?,
                    (length, decimals) => write!(f, "({}, {})", length, decimals)?,
                }
                write_sign(f, *unsigned, *zerofill)
            }
            Self::String {
                data_type,
                length,
                charset,
                collation,
            } => {
                data_type.fmt(f)?;
                if *length != 0 {
                    write!(f, "({})", length)?;
                }
                write_charset(f, charset, collation)
            }
            Self::TextBlob {
                data_type,
                binary,
                charset,
                collation,
            } => {
                data_type.fmt(f)?;
                if *binary {
                    f.write_str(" BINARY")?;
                }
                write_charset(f, charset, collation)
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DefaultDefinition {
    /// No `DEFAULT` clause; renders as nothing.
    #[default]
    Empty,
    Null,
    StringLiteral {
        value: String,
    },
    CurrentTimestamp {
        on_update: bool,
    },
}

impl Display for DefaultDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Empty => Ok(()),
            Self::Null => f.write_str("DEFAULT NULL"),
            // a value holding a double quote can only have come from a single-quoted literal
            Self::StringLiteral { value } if value.contains('"') && !value.contains('\'') => {
                write!(f, "DEFAULT '{}'", value)
            }
            Self::StringLiteral { value } => write!(f, "DEFAULT \"{}\"", value),
            Self::CurrentTimestamp { on_update: false } => f.write_str("DEFAULT CURRENT_TIMESTAMP"),
            Self::CurrentTimestamp { on_update: true } => {
                f.write_str("DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP")
            }
        }
    }
}

/// A trailing `KEY=VALUE` option of `CREATE TABLE`, such as `ENGINE=InnoDB`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableOption {
    pub key: String,
    pub value: String,
}

impl TableOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl Display for TableOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
