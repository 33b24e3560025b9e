mod ddl;

pub use self::ddl::*;
