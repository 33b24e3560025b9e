mod error;

#[cfg(test)]
mod tests;

pub use self::error::{Error, Result};

use {
    self::error::{ParseSnafu, ReadInputSnafu},
    parser::{Lexer, Parser},
    snafu::prelude::*,
    std::{
        fs,
        io::{self, Read},
        path::PathBuf,
    },
    tracing::{debug, info},
};

/// Where a script comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Name used in messages, `<stdin>` for standard input.
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    pub fn read(&self) -> Result<String> {
        let buf = match self {
            Self::Stdin => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf).map(|_| buf)
            }
            Self::File(path) => fs::read_to_string(path),
        }
        .context(ReadInputSnafu { path: self.name() })?;

        debug!(input = %self.name(), bytes = buf.len(), "read input");

        Ok(buf)
    }
}

/// Parses `sql` and renders every statement in canonical form.
pub fn format(name: &str, sql: &str) -> Result<String> {
    let statements = Parser::parse(sql).context(ParseSnafu { path: name })?;

    info!(input = name, statements = statements.len(), "formatted");

    Ok(ast::render_statements(&statements))
}

/// Lists the tokens of `sql`, one `line:column KIND literal` line each.
pub fn tokens(name: &str, sql: &str) -> Result<String> {
    let mut out = String::new();

    for token in Lexer::new(sql) {
        let token = token
            .map_err(parser::Error::from)
            .context(ParseSnafu { path: name })?;

        out.push_str(&format!(
            "{} {:?} {}\n",
            token.position, token.kind, token.literal
        ));
    }

    Ok(out)
}

/// Runs `format` or `tokens` over every input in order, stopping at the first failure.
pub fn run(inputs: &[Input], tokens_only: bool) -> Result<String> {
    let mut out = String::new();

    for input in inputs {
        let sql = input.read()?;
        let name = input.name();

        out += &match tokens_only {
            true => tokens(&name, &sql)?,
            false => format(&name, &sql)?,
        };
    }

    Ok(out)
}
