//! Pure folding functions that turn a raw server result plus the previous
//! view state into the next view state. Nothing in here performs I/O; the
//! browser layer owns the network round trips and calls these afterwards.

use crate::models::{GraphQLResponse, QueryData, Starrable};

use super::ViewState;

/// Fold an issues-query result into the view state.
///
/// With no cursor this is a full replacement: whatever the server returned
/// becomes the new organization and any previously accumulated issue pages
/// are discarded. With a cursor the old issue edges are kept and the new
/// page's edges are appended behind them, while `totalCount` and `pageInfo`
/// are taken from the new page so the cursor always reflects the latest
/// fetch. Edges are never de-duplicated; an issue id delivered on two pages
/// yields two entries.
///
/// A continuation whose envelope carries no organization (total failure,
/// `data: null`) keeps the previous organization untouched and only swaps in
/// the errors, so accumulated pages survive a failed "more" click. A
/// continuation arriving while nothing is loaded degrades to a full
/// replacement.
pub fn resolve_issues_query(
    raw: GraphQLResponse<QueryData>,
    cursor: Option<&str>,
    prev: &ViewState,
) -> ViewState {
    let GraphQLResponse { data, errors } = raw;
    let fetched = data.and_then(|d| d.organization);

    if cursor.is_none() {
        return ViewState {
            path: prev.path.clone(),
            organization: fetched,
            errors,
        };
    }

    let organization = match (fetched, prev.organization.as_ref()) {
        (Some(mut organization), Some(previous)) => {
            let mut edges = previous.repository.issues.edges.clone();
            edges.append(&mut organization.repository.issues.edges);
            organization.repository.issues.edges = edges;
            Some(organization)
        }
        (Some(organization), None) => Some(organization),
        (None, _) => prev.organization.clone(),
    };

    ViewState {
        path: prev.path.clone(),
        organization,
        errors,
    }
}

/// Fold a successful `addStar` mutation into the view state: the starred
/// flag is forced to `true` and the local stargazer count incremented, with
/// everything else (issues included) carried over unchanged.
///
/// The server's echoed `viewerHasStarred` is deliberately not consulted, and
/// there is no already-starred guard: applying this twice increments twice,
/// a local count that can drift from server truth.
pub fn resolve_add_star_mutation(_outcome: &Starrable, prev: &ViewState) -> ViewState {
    let mut next = prev.clone();
    if let Some(organization) = next.organization.as_mut() {
        organization.repository.viewer_has_starred = true;
        organization.repository.stargazers.total_count += 1;
    }
    next
}

/// Symmetric to [`resolve_add_star_mutation`]: flag forced to `false`, count
/// decremented. The count is not clamped at zero.
pub fn resolve_remove_star_mutation(_outcome: &Starrable, prev: &ViewState) -> ViewState {
    let mut next = prev.clone();
    if let Some(organization) = next.organization.as_mut() {
        organization.repository.viewer_has_starred = false;
        organization.repository.stargazers.total_count -= 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        GraphQLError, Issue, IssueConnection, IssueEdge, Organization, PageInfo, Reaction,
        ReactionConnection, ReactionEdge, Repository, StargazerCount,
    };

    fn issue_edge(id: &str) -> IssueEdge {
        IssueEdge {
            node: Issue {
                id: id.to_string(),
                title: format!("Issue {}", id),
                url: format!("https://github.com/facebook/react/issues/{}", id),
                reactions: ReactionConnection {
                    edges: vec![ReactionEdge {
                        node: Reaction {
                            id: format!("reaction-{}", id),
                            content: "THUMBS_UP".to_string(),
                        },
                    }],
                },
            },
        }
    }

    fn organization(edge_ids: &[&str], end_cursor: Option<&str>, has_next_page: bool) -> Organization {
        Organization {
            name: "Facebook".to_string(),
            url: "https://github.com/facebook".to_string(),
            repository: Repository {
                id: "repo-1".to_string(),
                name: "react".to_string(),
                url: "https://github.com/facebook/react".to_string(),
                stargazers: StargazerCount { total_count: 100 },
                viewer_has_starred: false,
                issues: IssueConnection {
                    edges: edge_ids.iter().map(|id| issue_edge(id)).collect(),
                    total_count: 42,
                    page_info: PageInfo {
                        end_cursor: end_cursor.map(String::from),
                        has_next_page,
                    },
                },
            },
        }
    }

    fn raw_page(
        edge_ids: &[&str],
        end_cursor: Option<&str>,
        has_next_page: bool,
    ) -> GraphQLResponse<QueryData> {
        GraphQLResponse {
            data: Some(QueryData {
                organization: Some(organization(edge_ids, end_cursor, has_next_page)),
            }),
            errors: None,
        }
    }

    fn loaded_state(edge_ids: &[&str], end_cursor: Option<&str>) -> ViewState {
        ViewState {
            path: "facebook/react".to_string(),
            organization: Some(organization(edge_ids, end_cursor, true)),
            errors: None,
        }
    }

    fn edge_ids(state: &ViewState) -> Vec<String> {
        state
            .organization
            .as_ref()
            .unwrap()
            .repository
            .issues
            .edges
            .iter()
            .map(|e| e.node.id.clone())
            .collect()
    }

    #[test]
    fn first_page_replaces_previous_state_wholesale() {
        let prev = loaded_state(&["1", "2", "3", "4", "5"], Some("abc"));
        let raw = raw_page(&["9"], Some("xyz"), false);

        let next = resolve_issues_query(raw, None, &prev);

        assert_eq!(edge_ids(&next), vec!["9"]);
        assert_eq!(next.end_cursor(), Some("xyz"));
        assert_eq!(next.path, "facebook/react");
        assert!(next.errors.is_none());
    }

    #[test]
    fn continuation_appends_new_page_behind_old_edges() {
        let prev = loaded_state(&["1", "2", "3", "4", "5"], Some("abc"));
        let raw = raw_page(&["6", "7", "8"], Some("def"), false);

        let next = resolve_issues_query(raw, Some("abc"), &prev);

        assert_eq!(
            edge_ids(&next),
            vec!["1", "2", "3", "4", "5", "6", "7", "8"]
        );
        // cursor and hasNextPage reflect the latest fetch
        assert_eq!(next.end_cursor(), Some("def"));
        assert!(!next.has_next_page());
    }

    #[test]
    fn continuation_does_not_deduplicate_issue_ids() {
        let prev = loaded_state(&["1", "2"], Some("abc"));
        let raw = raw_page(&["2", "3"], Some("def"), true);

        let next = resolve_issues_query(raw, Some("abc"), &prev);

        assert_eq!(edge_ids(&next), vec!["1", "2", "2", "3"]);
    }

    #[test]
    fn continuation_total_count_comes_from_new_page() {
        let prev = loaded_state(&["1"], Some("abc"));
        let mut raw = raw_page(&["2"], Some("def"), true);
        raw.data
            .as_mut()
            .unwrap()
            .organization
            .as_mut()
            .unwrap()
            .repository
            .issues
            .total_count = 99;

        let next = resolve_issues_query(raw, Some("abc"), &prev);

        let issues = &next.organization.unwrap().repository.issues;
        assert_eq!(issues.total_count, 99);
    }

    #[test]
    fn failed_continuation_keeps_accumulated_pages() {
        let prev = loaded_state(&["1", "2", "3"], Some("abc"));
        let raw = GraphQLResponse {
            data: None,
            errors: Some(vec![GraphQLError {
                message: "Something went wrong".to_string(),
            }]),
        };

        let next = resolve_issues_query(raw, Some("abc"), &prev);

        assert_eq!(edge_ids(&next), vec!["1", "2", "3"]);
        assert_eq!(next.error_summary().as_deref(), Some("Something went wrong"));
    }

    #[test]
    fn continuation_without_loaded_state_degrades_to_replacement() {
        let prev = ViewState::new("facebook/react");
        let raw = raw_page(&["6", "7"], Some("def"), false);

        let next = resolve_issues_query(raw, Some("abc"), &prev);

        assert_eq!(edge_ids(&next), vec!["6", "7"]);
    }

    #[test]
    fn first_page_errors_surface_with_null_organization() {
        let prev = ViewState::new("nope");
        let message = "Could not resolve to an Organization with the login of 'nope'.";
        let raw = GraphQLResponse {
            data: None,
            errors: Some(vec![GraphQLError {
                message: message.to_string(),
            }]),
        };

        let next = resolve_issues_query(raw, None, &prev);

        assert!(!next.is_loaded());
        assert_eq!(next.error_summary().as_deref(), Some(message));
    }

    #[test]
    fn add_star_increments_count_and_sets_flag() {
        let prev = loaded_state(&["1"], Some("abc"));
        let outcome = Starrable {
            viewer_has_starred: true,
        };

        let next = resolve_add_star_mutation(&outcome, &prev);

        let repository = &next.organization.as_ref().unwrap().repository;
        assert!(repository.viewer_has_starred);
        assert_eq!(repository.stargazers.total_count, 101);
        // issues are carried over untouched
        assert_eq!(edge_ids(&next), vec!["1"]);
    }

    #[test]
    fn remove_star_decrements_count_and_clears_flag() {
        let mut prev = loaded_state(&["1"], Some("abc"));
        prev.organization
            .as_mut()
            .unwrap()
            .repository
            .viewer_has_starred = true;
        let outcome = Starrable {
            viewer_has_starred: false,
        };

        let next = resolve_remove_star_mutation(&outcome, &prev);

        let repository = &next.organization.as_ref().unwrap().repository;
        assert!(!repository.viewer_has_starred);
        assert_eq!(repository.stargazers.total_count, 99);
    }

    #[test]
    fn star_round_trip_restores_count_regardless_of_server_echo() {
        let prev = loaded_state(&["1"], Some("abc"));
        // a lying echo must not influence the local fold
        let lying_echo = Starrable {
            viewer_has_starred: false,
        };

        let starred = resolve_add_star_mutation(&lying_echo, &prev);
        let unstarred = resolve_remove_star_mutation(&lying_echo, &starred);

        let before = &prev.organization.as_ref().unwrap().repository;
        let after = &unstarred.organization.as_ref().unwrap().repository;
        assert_eq!(after.stargazers.total_count, before.stargazers.total_count);
        assert_eq!(after.viewer_has_starred, before.viewer_has_starred);
        assert!(starred
            .organization
            .as_ref()
            .unwrap()
            .repository
            .viewer_has_starred);
    }

    #[test]
    fn double_add_star_double_increments() {
        // Documents the absence of an already-starred guard: the local count
        // drifts to N+2 even though the server would no-op the second call.
        let prev = loaded_state(&["1"], Some("abc"));
        let outcome = Starrable {
            viewer_has_starred: true,
        };

        let once = resolve_add_star_mutation(&outcome, &prev);
        let twice = resolve_add_star_mutation(&outcome, &once);

        assert_eq!(
            twice
                .organization
                .unwrap()
                .repository
                .stargazers
                .total_count,
            102
        );
    }

    #[test]
    fn remove_star_is_not_clamped_at_zero() {
        let mut prev = loaded_state(&["1"], Some("abc"));
        prev.organization
            .as_mut()
            .unwrap()
            .repository
            .stargazers
            .total_count = 0;
        let outcome = Starrable {
            viewer_has_starred: false,
        };

        let next = resolve_remove_star_mutation(&outcome, &prev);

        assert_eq!(
            next.organization.unwrap().repository.stargazers.total_count,
            -1
        );
    }

    #[test]
    fn star_mutations_on_unloaded_state_are_no_ops() {
        let prev = ViewState::new("facebook/react");
        let outcome = Starrable {
            viewer_has_starred: true,
        };

        let next = resolve_add_star_mutation(&outcome, &prev);

        assert!(!next.is_loaded());
        assert!(next.errors.is_none());
    }
}
