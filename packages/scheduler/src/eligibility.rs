use serde_json::Value;

/// Wildcard accepted-value: a requirement containing it matches everyone.
pub const WILDCARD: &str = "All";

/// Check a contributor's profile attributes against a contest's requirement
/// map.
///
/// Requirements are `attribute name -> array of accepted values`. An empty
/// or non-object map accepts everyone. A requirement is skipped when its
/// value list is empty or contains the wildcard. A contributor with no value
/// recorded for an attribute is not excluded by it; a recorded value must be
/// among the accepted ones.
pub fn is_eligible(profile_attributes: &Value, requirements: &Value) -> bool {
    let Some(requirements) = requirements.as_object() else {
        return true;
    };

    for (name, accepted) in requirements {
        let Some(accepted) = accepted.as_array() else {
            continue;
        };
        if accepted.is_empty() {
            continue;
        }
        if accepted.iter().any(|v| v.as_str() == Some(WILDCARD)) {
            continue;
        }

        let Some(value) = profile_attributes.get(name) else {
            continue;
        };
        if value.is_null() {
            continue;
        }
        if !accepted.contains(value) {
            return false;
        }
    }

    true
}
