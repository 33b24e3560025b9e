use std::fmt::{Display, Formatter, Result};

/// Writes `name` wrapped in backticks, the only quoting the renderer emits for identifiers.
fn write_quoted(f: &mut Formatter<'_>, name: &str) -> Result {
    write!(f, "`{}`", name)
}

macro_rules! define_names {
    ( $( $(#[$attr:meta])* $name:ident, )* ) => {
        $(
            $(#[$attr])*
            #[derive(Clone, Debug, PartialEq, Eq, Hash)]
            pub struct $name {
                pub name: String,
            }

            impl $name {
                pub fn new(name: impl Into<String>) -> Self {
                    Self { name: name.into() }
                }
            }

            impl Display for $name {
                fn fmt(&self, f: &mut Formatter<'_>) -> Result {
                    write_quoted(f, &self.name)
                }
            }
        )*
    };
}

define_names! {
    DatabaseName,
    ColumnName,
    IndexName,
}

/// A table name, optionally qualified by its database (`db.table`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TableName {
    pub name: String,
    pub database: Option<String>,
}

impl TableName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database: None,
        }
    }

    pub fn qualified(database: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            database: Some(database.into()),
        }
    }
}

impl Display for TableName {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(database) = &self.database {
            write_quoted(f, database)?;
            f.write_str(".")?;
        }
        write_quoted(f, &self.name)
    }
}

pub(crate) struct DisplaySeparated<'a, T> {
    items: &'a [T],
    sep: &'static str,
}

impl<T: Display> Display for DisplaySeparated<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(self.sep)?;
            }
            item.fmt(f)?;
        }
        Ok(())
    }
}

pub(crate) fn display_separated<'a, T: Display>(
    items: &'a [T],
    sep: &'static str,
) -> DisplaySeparated<'a, T> {
    DisplaySeparated { items, sep }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name() {
        assert_eq!(TableName::new("hoge").to_string(), "`hoge`");
        assert_eq!(TableName::qualified("hoge", "fuga").to_string(), "`hoge`.`fuga`");
        // keywords stay usable as names once quoted
        assert_eq!(TableName::new("TABLE").to_string(), "`TABLE`");
    }

    #[test]
    fn separated() {
        let names = [ColumnName::new("a"), ColumnName::new("b")];

        assert_eq!(display_separated(&names, ",").to_string(), "`a`,`b`");
        assert_eq!(display_separated::<ColumnName>(&[], ",").to_string(), "");
    }
}
