use super::client::Query;

/// Pagination for the v3 listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number.
    pub page: u32,
    pub limit: u32,
}

impl Page {
    pub const DEFAULT_LIMIT: u32 = 25;

    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    pub(crate) fn push_onto(self, query: &mut Query) {
        query.push(("page", self.page.to_string()));
        query.push(("limit", self.limit.to_string()));
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_LIMIT)
    }
}

/// Builds the query for an endpoint taking an optional field selector.
/// `fields` is only added when at least one field is requested.
pub(crate) fn fields_query(fields: &[&str]) -> Query {
    let mut query = Query::new();
    if !fields.is_empty() {
        query.push(("fields", fields.join(",")));
    }
    query
}
