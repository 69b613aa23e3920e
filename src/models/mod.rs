pub mod graphql;
pub mod issue;
pub mod organization;

// Re-export commonly used types
pub use graphql::{
    AddStarData, GraphQLError, GraphQLResponse, QueryData, RemoveStarData, StarMutationPayload,
    Starrable,
};
pub use issue::{Issue, IssueConnection, IssueEdge, PageInfo, Reaction, ReactionConnection, ReactionEdge};
pub use organization::{Organization, OrganizationProfile, Repository, StargazerCount};
