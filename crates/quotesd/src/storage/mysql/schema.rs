//! MySQL schema definition and SQL statement constants.
//!
//! This module contains all SQL statements used by the MySQL repository,
//! following the Functional Core pattern - pure data, no I/O. The database
//! itself is created with an interpolated name in the repository, since its
//! identifier comes from configuration.

/// SQL statement to create the quotes table.
pub const CREATE_QUOTES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS quotes (
    id BIGINT NOT NULL AUTO_INCREMENT,
    quote TEXT NOT NULL,
    author VARCHAR(255) DEFAULT NULL,
    PRIMARY KEY (id)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4
"#;

/// SQL statement to list every quote in storage order.
pub const SELECT_QUOTES: &str = r#"
SELECT id, quote, author
FROM quotes
"#;

/// SQL statement to insert a quote.
pub const INSERT_QUOTE: &str = r#"
INSERT INTO quotes (quote, author)
VALUES (?, ?)
"#;
