pub const GITHUB_API_URL: &str = "https://api.github.com/graphql";
pub const CONFIG_FILE: &str = ".gh-issues-config.json";

/// Fallback `organization/repository` path used when none is configured.
pub const DEFAULT_PATH: &str = "the-road-to-learn-react/the-road-to-learn-react";

// GraphQL documents. The field shapes are part of the CLI's contract with the
// GitHub API; issue and reaction page sizes are fixed in the query text.

pub const GET_ORGANIZATION: &str = r#"
    query ($organization: String!) {
        organization(login: $organization) {
            name
            url
        }
    }
"#;

pub const GET_ISSUES_OF_REPOSITORY: &str = r#"
    query (
        $organization: String!,
        $repository: String!,
        $cursor: String
    ) {
        organization(login: $organization) {
            name
            url
            repository(name: $repository) {
                id
                name
                url
                stargazers {
                    totalCount
                }
                viewerHasStarred
                issues(first: 5, after: $cursor, states: [OPEN]) {
                    edges {
                        node {
                            id
                            title
                            url
                            reactions(last: 3) {
                                edges {
                                    node {
                                        id
                                        content
                                    }
                                }
                            }
                        }
                    }
                    totalCount
                    pageInfo {
                        endCursor
                        hasNextPage
                    }
                }
            }
        }
    }
"#;

pub const ADD_STAR: &str = r#"
    mutation ($repositoryId: ID!) {
        addStar(input: {starrableId: $repositoryId}) {
            starrable {
                viewerHasStarred
            }
        }
    }
"#;

pub const REMOVE_STAR: &str = r#"
    mutation ($repositoryId: ID!) {
        removeStar(input: {starrableId: $repositoryId}) {
            starrable {
                viewerHasStarred
            }
        }
    }
"#;
