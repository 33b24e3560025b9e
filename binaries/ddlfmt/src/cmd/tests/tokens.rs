use crate::cmd::{tokens, Error};

#[test]
fn lists_tokens() {
    let out = tokens("inline", "DROP TABLE `a`;").unwrap();

    assert_eq!(
        out,
        "1:1 Keyword(DROP) DROP\n\
         1:6 Keyword(TABLE) TABLE\n\
         1:12 Backtick `\n\
         1:13 Raw a\n\
         1:14 Backtick `\n\
         1:15 Semicolon ;\n"
    );
}

#[test]
fn unterminated_comment() {
    let err = tokens("inline", "DROP /* x").unwrap_err();

    assert!(matches!(
        err,
        Error::Parse {
            source: parser::Error::Lexing { .. },
            ..
        }
    ));
}
