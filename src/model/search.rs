use serde::{Deserialize, Serialize};

/// Optional search criteria for one member query.
///
/// Every field is optional and an absent field never constrains the query. Blank strings
/// (empty or whitespace only) count as absent, see [`has_text`].
///
/// Deserializes from request parameters named `username`, `teamName`, `ageGoe` and
/// `ageLoe`; missing parameters are `None`.
///
/// ```
/// use query_recipe::model::MemberSearch;
///
/// let search = MemberSearch::default().team_name("TeamB").age_goe(30).age_loe(40);
/// assert_eq!(search.team_name.as_deref(), Some("TeamB"));
/// assert!(search.username.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemberSearch {
    pub username: Option<String>,
    pub team_name: Option<String>,
    /// Inclusive lower bound on age.
    pub age_goe: Option<i32>,
    /// Inclusive upper bound on age.
    pub age_loe: Option<i32>,
}

impl MemberSearch {
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn team_name(mut self, team_name: impl Into<String>) -> Self {
        self.team_name = Some(team_name.into());
        self
    }

    pub fn age_goe(mut self, age: i32) -> Self {
        self.age_goe = Some(age);
        self
    }

    pub fn age_loe(mut self, age: i32) -> Self {
        self.age_loe = Some(age);
        self
    }

    /// True when no criterion would constrain a query.
    pub fn is_empty(&self) -> bool {
        !has_text(self.username.as_deref())
            && !has_text(self.team_name.as_deref())
            && self.age_goe.is_none()
            && self.age_loe.is_none()
    }
}

/// A string criterion is present only if it holds at least one non-whitespace character.
pub fn has_text(value: Option<&str>) -> bool {
    value.is_some_and(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_strings_are_absent() {
        assert!(!has_text(None));
        assert!(!has_text(Some("")));
        assert!(!has_text(Some("  \t")));
        assert!(has_text(Some(" a ")));
    }

    #[test]
    fn test_is_empty_ignores_blank_criteria() {
        let search = MemberSearch::default().username("   ");
        assert!(search.is_empty());
        assert!(!search.age_loe(40).is_empty());
    }

    #[test]
    fn test_deserialize_from_request_parameters() {
        let search: MemberSearch =
            serde_json::from_str(r#"{"teamName":"TeamB","ageGoe":30}"#).unwrap();
        assert_eq!(search, MemberSearch::default().team_name("TeamB").age_goe(30));
    }
}
