mod format;
mod tokens;
