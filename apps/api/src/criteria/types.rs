use serde::{Deserialize, Serialize};

/// Which aspect of a job description to extract criteria for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriteriaType {
    #[default]
    Overall,
    Skills,
    Experience,
    Certifications,
    Qualifications,
    Education,
    Tools,
    Languages,
    Responsibilities,
    Benefits,
    #[serde(rename = "company culture", alias = "culture")]
    Culture,
}

impl CriteriaType {
    /// Wire value, also used verbatim inside prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            CriteriaType::Overall => "overall",
            CriteriaType::Skills => "skills",
            CriteriaType::Experience => "experience",
            CriteriaType::Certifications => "certifications",
            CriteriaType::Qualifications => "qualifications",
            CriteriaType::Education => "education",
            CriteriaType::Tools => "tools",
            CriteriaType::Languages => "languages",
            CriteriaType::Responsibilities => "responsibilities",
            CriteriaType::Benefits => "benefits",
            CriteriaType::Culture => "company culture",
        }
    }
}

impl std::fmt::Display for CriteriaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_overall() {
        assert_eq!(CriteriaType::default(), CriteriaType::Overall);
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let parsed: CriteriaType = serde_json::from_str(r#""skills""#).unwrap();
        assert_eq!(parsed, CriteriaType::Skills);
        assert_eq!(
            serde_json::to_string(&CriteriaType::Responsibilities).unwrap(),
            r#""responsibilities""#
        );
    }

    #[test]
    fn test_culture_wire_value_and_alias() {
        assert_eq!(
            serde_json::to_string(&CriteriaType::Culture).unwrap(),
            r#""company culture""#
        );
        let from_wire: CriteriaType = serde_json::from_str(r#""company culture""#).unwrap();
        let from_alias: CriteriaType = serde_json::from_str(r#""culture""#).unwrap();
        assert_eq!(from_wire, CriteriaType::Culture);
        assert_eq!(from_alias, CriteriaType::Culture);
    }

    #[test]
    fn test_as_str_matches_serialized_form() {
        for ty in [
            CriteriaType::Overall,
            CriteriaType::Tools,
            CriteriaType::Languages,
            CriteriaType::Culture,
        ] {
            let serialized = serde_json::to_string(&ty).unwrap();
            assert_eq!(serialized, format!("\"{}\"", ty.as_str()));
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(serde_json::from_str::<CriteriaType>(r#""salary""#).is_err());
    }
}
