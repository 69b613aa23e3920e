use serde::{Deserialize, Serialize};

/// Paginated list of issues. `edges` accumulates across pages (oldest fetched
/// page first) while `total_count` and `page_info` always describe the most
/// recent fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueConnection {
    pub edges: Vec<IssueEdge>,
    pub total_count: i64,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub end_cursor: Option<String>,
    pub has_next_page: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueEdge {
    pub node: Issue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub url: String,
    pub reactions: ReactionConnection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionConnection {
    pub edges: Vec<ReactionEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionEdge {
    pub node: Reaction,
}

/// A single reaction, `content` being GitHub's enum name (`THUMBS_UP`,
/// `HEART`, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reaction {
    pub id: String,
    pub content: String,
}
