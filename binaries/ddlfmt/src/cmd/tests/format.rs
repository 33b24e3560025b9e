use {
    crate::cmd::{format, run, Error, Input},
    std::fs,
    tempfile::tempdir,
};

#[test]
fn formats_files_in_order() {
    let temp_dir = tempdir().unwrap();
    let first = temp_dir.path().join("first.sql");
    let second = temp_dir.path().join("second.sql");

    fs::write(&first, "create database hoge;\n/* tables */").unwrap();
    fs::write(
        &second,
        "CREATE TABLE hoge.fuga (id int(10) unsigned not null, primary key (id)) engine=InnoDB",
    )
    .unwrap();

    let out = run(&[Input::File(first), Input::File(second)], false).unwrap();

    assert_eq!(
        out,
        "CREATE DATABASE `hoge`;\n\
         /* tables */;\n\
         CREATE TABLE `hoge`.`fuga` (\n\
         \t`id` INT(10) UNSIGNED NOT NULL ,\n\
         \tPRIMARY KEY ( `id` )\n\
         ) ENGINE=InnoDB;\n"
    );

    temp_dir.close().unwrap();
}

#[test]
fn formatted_output_parses_back() {
    let sql = "
        ALTER TABLE t ADD COLUMN created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP, DROP INDEX idx;
        DROP TABLE a, b;
    ";

    let once = format("inline", sql).unwrap();
    let twice = format("inline", &once).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn missing_file() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("missing.sql");

    let err = run(&[Input::File(path.clone())], false).unwrap_err();

    assert!(matches!(&err, Error::ReadInput { path: p, .. } if *p == path.display().to_string()));

    temp_dir.close().unwrap();
}

#[test]
fn parse_error_names_the_input() {
    let temp_dir = tempdir().unwrap();
    let path = temp_dir.path().join("broken.sql");
    fs::write(&path, "DROP TABLE a;\nDROP hoge").unwrap();

    let err = run(&[Input::File(path.clone())], false).unwrap_err();

    match &err {
        Error::Parse { path: p, source } => {
            assert_eq!(*p, path.display().to_string());
            assert_eq!(source.position(), parser::Position::new(2, 6));
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("2:6"));

    temp_dir.close().unwrap();
}
