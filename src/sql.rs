/// A value position inside a generated statement. `Var` and `Func` exist so
/// session-variable references and SQL function calls render as bare SQL
/// rather than quoted literals; only `Text` gets quoting and escaping.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Text(String),
    Var(&'static str),
    Func {
        name: &'static str,
        args: Vec<SqlValue>,
    },
    Null,
}

impl SqlValue {
    pub fn text(text: impl Into<String>) -> Self {
        SqlValue::Text(text.into())
    }

    fn render(&self) -> String {
        match self {
            SqlValue::Text(text) => format!("'{}'", text.replace('\'', "''")),
            SqlValue::Var(name) => format!("@{name}"),
            SqlValue::Func { name, args } => format!("{name}({})", render_list(args)),
            SqlValue::Null => "NULL".to_string(),
        }
    }
}

fn render_list(values: &[SqlValue]) -> String {
    values
        .iter()
        .map(SqlValue::render)
        .collect::<Vec<_>>()
        .join(",")
}

/// One terminated `INSERT` statement, MySQL-flavoured: backticked
/// identifiers, comma-joined lists without spaces.
pub fn insert_into(table: &str, columns: &[&str], values: &[SqlValue]) -> String {
    debug_assert_eq!(columns.len(), values.len());
    let columns = columns
        .iter()
        .map(|column| format!("`{column}`"))
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "INSERT INTO `{table}` ({columns}) VALUES ({});",
        render_list(values)
    )
}

/// Captures the auto-generated id of the preceding insert into a session
/// variable, as its own terminated statement.
pub fn set_var(name: &str) -> String {
    format!("SET @{name} = LAST_INSERT_ID();")
}
