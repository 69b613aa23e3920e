use serde::{Deserialize, Serialize};

use super::Organization;

/// Raw result envelope of a GraphQL round trip. GitHub can return partial
/// `data` alongside `errors`, or no `data` at all; both fields are kept as
/// the server sent them so the state layer can decide what to do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
}

/// `data` shape of the issues query. The organization is absent when the
/// login could not be resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryData {
    pub organization: Option<Organization>,
}

// Star mutation data structures

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStarData {
    pub add_star: StarMutationPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveStarData {
    pub remove_star: StarMutationPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StarMutationPayload {
    pub starrable: Starrable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Starrable {
    pub viewer_has_starred: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_with_errors_and_null_data_deserializes() {
        let raw = json!({
            "data": null,
            "errors": [
                {"message": "Could not resolve to an Organization with the login of 'nope'."}
            ]
        });

        let response: GraphQLResponse<QueryData> = serde_json::from_value(raw).unwrap();
        assert!(response.data.is_none());
        let errors = response.errors.unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.starts_with("Could not resolve"));
    }

    #[test]
    fn add_star_payload_deserializes_from_wire_shape() {
        let raw = json!({
            "addStar": {
                "starrable": {"viewerHasStarred": true}
            }
        });

        let data: AddStarData = serde_json::from_value(raw).unwrap();
        assert!(data.add_star.starrable.viewer_has_starred);
    }

    #[test]
    fn missing_errors_field_is_none() {
        let raw = json!({"data": {"organization": null}});

        let response: GraphQLResponse<QueryData> = serde_json::from_value(raw).unwrap();
        assert!(response.errors.is_none());
        assert!(response.data.unwrap().organization.is_none());
    }
}
