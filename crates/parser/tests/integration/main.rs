use {
    ast::{
        AlterSpecification, CreateDefinition, DataType, DataTypeDefinition, DefaultDefinition,
        Shape, Statement,
    },
    parser::{Error, Lexer, Parser, Position},
};

const DUMP: &str = r#"
/* generated by mysqldump */
DROP TABLE legacy_users;
CREATE DATABASE shop;

CREATE TABLE `shop`.`users` (
  `id` BIGINT(20) UNSIGNED NOT NULL AUTO_INCREMENT,
  `name` VARCHAR(255) CHARACTER SET utf8mb4 COLLATE utf8mb4_bin NOT NULL DEFAULT '',
  `bio` TEXT,
  `score` DECIMAL(10, 2) UNSIGNED DEFAULT NULL,
  `created_at` TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
  `updated_at` TIMESTAMP DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP,
  PRIMARY KEY (`id`),
  UNIQUE KEY `uniq_name` (`name`),
  INDEX (`created_at`, `updated_at`)
) ENGINE=InnoDB AUTO_INCREMENT=42 DEFAULT CHARSET=utf8mb4;

ALTER TABLE users ADD COLUMN `deleted` TINYINT(1) NOT NULL DEFAULT 0, DROP INDEX uniq_name;
DROP TABLE users, sessions;
"#;

#[test]
fn parse_dump() {
    let statements = Parser::parse(DUMP).unwrap();

    assert_eq!(
        statements.iter().map(Statement::name).collect::<Vec<_>>(),
        [
            "COMMENT",
            "DROP TABLE",
            "CREATE DATABASE",
            "CREATE TABLE",
            "ALTER TABLE",
            "DROP TABLE",
        ]
    );

    let Statement::CreateTable(stmt) = &statements[3] else {
        panic!("expected CREATE TABLE, got {:?}", statements[3]);
    };

    assert_eq!(stmt.name.database.as_deref(), Some("shop"));
    assert_eq!(stmt.definitions.len(), 9);
    assert_eq!(stmt.options.len(), 3);

    let CreateDefinition::Column { definition, .. } = &stmt.definitions[5] else {
        panic!("expected a column, got {:?}", stmt.definitions[5]);
    };
    assert_eq!(definition.data_type.data_type(), DataType::Timestamp);
    assert_eq!(
        definition.default,
        DefaultDefinition::CurrentTimestamp { on_update: true }
    );

    let Statement::AlterTable(stmt) = &statements[4] else {
        panic!("expected ALTER TABLE, got {:?}", statements[4]);
    };
    assert!(matches!(
        &stmt.specs[..],
        [
            AlterSpecification::AddColumn {
                definition: ast::ColumnDefinition {
                    data_type: DataTypeDefinition::Number { length: 1, .. },
                    nullable: false,
                    ..
                },
                ..
            },
            AlterSpecification::DropIndex { .. },
        ]
    ));
}

#[test]
fn rendering_round_trips() {
    let statements = Parser::parse(DUMP).unwrap();
    let rendered = ast::render_statements(&statements);

    let reparsed = Parser::parse(&rendered).unwrap();

    assert_eq!(reparsed, statements);
    assert_eq!(ast::render_statements(&reparsed), rendered);
}

fn assert_round_trip(sql: &str) {
    let statements = Parser::parse(sql).unwrap();
    let rendered = ast::render_statements(&statements);

    let reparsed = Parser::parse(&rendered)
        .unwrap_or_else(|err| panic!("`{}` rendered as `{}`: {}", sql, rendered, err));

    assert_eq!(reparsed, statements, "{}", sql);
    assert_eq!(ast::render_statements(&reparsed), rendered, "{}", sql);
}

#[test]
fn every_column_definition_round_trips() {
    let attributes = [
        "",
        " NOT NULL",
        " NULL AUTO_INCREMENT",
        " DEFAULT NULL",
        " AUTO_INCREMENT NOT NULL DEFAULT 'it\"s'",
        " DEFAULT \"x\" NULL",
        " DEFAULT ''",
        " DEFAULT 0",
        " DEFAULT CURRENT_TIMESTAMP",
        " DEFAULT CURRENT_TIMESTAMP ON UPDATE CURRENT_TIMESTAMP",
    ];

    for &data_type in DataType::ALL {
        let clauses: &[&str] = match data_type.shape() {
            Shape::Simple => &[""],
            Shape::Number => &["", "(3)", "(3) UNSIGNED", " ZEROFILL", "(11) UNSIGNED ZEROFILL"],
            Shape::Fraction => &[
                "",
                "(7)",
                "(10, 2)",
                " UNSIGNED",
                "(10, 2) UNSIGNED ZEROFILL",
            ],
            Shape::String => &[
                "",
                "(255)",
                "(10) CHARACTER SET utf8mb4",
                " CHARACTER SET '8bit' COLLATE \"utf8-bin\"",
                "(1) COLLATE `bin`",
            ],
            Shape::TextBlob => &[
                "",
                " BINARY",
                " BINARY CHARACTER SET latin1 COLLATE latin1_bin",
                " COLLATE 'utf8-bin'",
            ],
        };

        for clause in clauses {
            for attribute in attributes {
                assert_round_trip(&format!(
                    "ALTER TABLE t ADD c {}{}{}",
                    data_type, clause, attribute
                ));
            }
        }
    }
}

#[test]
fn every_create_definition_round_trips() {
    assert_round_trip(
        "CREATE TABLE db.t (
            a INT,
            `b c` VARCHAR(2),
            PRIMARY KEY (a, `b c`),
            UNIQUE (a),
            UNIQUE INDEX u1 (a, `b c`),
            UNIQUE KEY `u2` (a),
            INDEX i1 (a),
            KEY (`b c`, a)
        ) ENGINE=InnoDB COMMENT='x y' DEFAULT CHARSET=utf8",
    );
    assert_round_trip("ALTER TABLE t DROP a, DROP COLUMN b, DROP KEY k, DROP INDEX `i`");
    assert_round_trip("ALTER TABLE `db`.`t`");
    assert_round_trip("DROP TABLE a, db.b; DROP DATABASE d; /* ほげ */");
}

#[test]
fn error_positions_across_lines() {
    let sql = "CREATE TABLE t (\n  a INT,\n  b STRING\n);";

    assert_eq!(
        Parser::parse(sql),
        Err(Error::UnknownTypeKeyword {
            position: Position::new(3, 5),
            found: "STRING".to_string(),
        })
    );
}

#[test]
fn parser_is_an_iterator() {
    let parser = Parser::new(Lexer::new("DROP DATABASE a; DROP DATABASE b; DROP DATABASE c"));

    assert_eq!(parser.count(), 3);
}
