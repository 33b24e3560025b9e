use std::{
    fmt::{Display, Formatter, Result},
    str::FromStr,
};

/// Groups of column types that accept the same optional attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// No attributes at all.
    Simple,
    /// `(length)`, `UNSIGNED`, `ZEROFILL`.
    Number,
    /// `(length, decimals)`, `UNSIGNED`, `ZEROFILL`.
    Fraction,
    /// `(length)`, `CHARACTER SET`, `COLLATE`.
    String,
    /// `BINARY`, `CHARACTER SET`, `COLLATE`.
    TextBlob,
}

macro_rules! define_data_types {
    ( $( $shape:ident => [ $( $var:ident = $keyword:literal, )* ], )* ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum DataType {
            $( $( $var, )* )*
        }

        impl DataType {
            /// Every supported type, in declaration order.
            pub const ALL: &'static [DataType] = &[ $( $( Self::$var, )* )* ];

            pub fn shape(self) -> Shape {
                match self {
                    $( $( Self::$var => Shape::$shape, )* )*
                }
            }

            pub fn keyword(self) -> &'static str {
                match self {
                    $( $( Self::$var => $keyword, )* )*
                }
            }
        }

        impl FromStr for DataType {
            type Err = NotDataTypeError;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s.to_ascii_uppercase().as_str() {
                    $( $( $keyword => Ok(Self::$var), )* )*
                    _ => Err(NotDataTypeError {}),
                }
            }
        }
    };
}

#[derive(Debug, PartialEq, Eq)]
pub struct NotDataTypeError {}

impl Display for NotDataTypeError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "not a data type")
    }
}

impl std::error::Error for NotDataTypeError {}

define_data_types! {
    Simple => [
        Bit = "BIT",
        Date = "DATE",
        Time = "TIME",
        Timestamp = "TIMESTAMP",
        DateTime = "DATETIME",
        Year = "YEAR",
        Binary = "BINARY",
        VarBinary = "VARBINARY",
        TinyBlob = "TINYBLOB",
        Blob = "BLOB",
        MediumBlob = "MEDIUMBLOB",
        LongBlob = "LONGBLOB",
    ],
    Number => [
        TinyInt = "TINYINT",
        SmallInt = "SMALLINT",
        MediumInt = "MEDIUMINT",
        Int = "INT",
        Integer = "INTEGER",
        BigInt = "BIGINT",
    ],
    Fraction => [
        Real = "REAL",
        Double = "DOUBLE",
        Float = "FLOAT",
        Decimal = "DECIMAL",
        Numeric = "NUMERIC",
    ],
    String => [
        Char = "CHAR",
        VarChar = "VARCHAR",
    ],
    TextBlob => [
        TinyText = "TINYTEXT",
        Text = "TEXT",
        MediumText = "MEDIUMTEXT",
        LongText = "LONGTEXT",
    ],
}

impl Display for DataType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_ignores_case() {
        assert_eq!("varchar".parse(), Ok(DataType::VarChar));
        assert_eq!("MediumText".parse(), Ok(DataType::MediumText));
        assert_eq!("VARCHAR2".parse::<DataType>(), Err(NotDataTypeError {}));
    }

    #[test]
    fn keyword_round_trips() {
        for &data_type in DataType::ALL {
            assert_eq!(data_type.keyword().parse(), Ok(data_type));
        }
    }

    #[test]
    fn shapes() {
        assert_eq!(DataType::Blob.shape(), Shape::Simple);
        assert_eq!(DataType::Integer.shape(), Shape::Number);
        assert_eq!(DataType::Numeric.shape(), Shape::Fraction);
        assert_eq!(DataType::Char.shape(), Shape::String);
        assert_eq!(DataType::LongText.shape(), Shape::TextBlob);
    }
}
