use {snafu::prelude::*, std::io};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)))]
pub enum Error {
    #[snafu(display("Failed to read {}: {}", path, source))]
    ReadInput { path: String, source: io::Error },

    #[snafu(display("Failed to parse {}: {}", path, source))]
    Parse {
        path: String,
        source: parser::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
