//! Forum Query Builder
//!
//! Read-only queries against the `forums` table, rendered as PostgREST
//! query parameters.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::fmt;

pub const FORUMS_TABLE: &str = "forums";
pub const CREATED_AT: &str = "created_at";

/// Characters escaped in query values. `*`, `,` and `.` stay readable since
/// PostgREST uses them as operators.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'<')
    .add(b'>')
    .add(b'=')
    .add(b'?');

/// How many forums the dashboard previews
pub const RECENT_FORUM_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForumQuery {
    table: &'static str,
    columns: &'static str,
    /// Column and whether it sorts ascending
    order: Option<(String, bool)>,
    limit: Option<usize>,
}

impl ForumQuery {
    /// `select *` over forums, no order, no limit
    pub fn forums() -> Self {
        Self {
            table: FORUMS_TABLE,
            columns: "*",
            order: None,
            limit: None,
        }
    }

    pub fn order_by(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some((column.to_string(), ascending));
        self
    }

    pub fn limit(mut self, count: usize) -> Self {
        self.limit = Some(count);
        self
    }

    pub fn to_query_string(&self) -> String {
        let mut params = vec![format!("select={}", encode(self.columns))];
        if let Some((column, ascending)) = &self.order {
            let direction = if *ascending { "asc" } else { "desc" };
            params.push(format!("order={}.{}", encode(column), direction));
        }
        if let Some(limit) = self.limit {
            params.push(format!("limit={}", limit));
        }
        params.join("&")
    }
}

impl fmt::Display for ForumQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}?{}", self.table, self.to_query_string())
    }
}

/// Every forum, oldest first, unbounded
pub fn all_forums_query() -> ForumQuery {
    ForumQuery::forums().order_by(CREATED_AT, true)
}

/// Dashboard preview: the first few rows in whatever order the service picks
pub fn recent_forums_query() -> ForumQuery {
    ForumQuery::forums().limit(RECENT_FORUM_LIMIT)
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
