//! Template validation.
//!
//! Validation never blocks an edit; it reports findings the caller can
//! show the user. Errors mark templates that would misbehave when a
//! character is built from them, warnings mark things worth a look.

use std::collections::HashSet;
use std::fmt;

use crate::template::Template;

/// One finding from a validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// What the finding is about, e.g. an attribute or option name.
    pub subject: String,
    /// Human-readable description.
    pub message: String,
    /// True for errors, false for warnings.
    pub is_error: bool,
}

impl ValidationIssue {
    fn error(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: true,
        }
    }

    fn warning(subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            message: message.into(),
            is_error: false,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_error { "error" } else { "warning" };
        write!(f, "{kind}: {}: {}", self.subject, self.message)
    }
}

/// Check a template for structural problems. Returns all findings in
/// document order; an empty result means the template is clean.
pub fn validate_template(template: &Template) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if template.name.trim().is_empty() {
        issues.push(ValidationIssue::error("template", "name is empty"));
    }

    let mut seen_attributes: HashSet<&str> = HashSet::new();
    for attribute in &template.attributes {
        if attribute.name.trim().is_empty() {
            issues.push(ValidationIssue::error("attribute", "name is empty"));
            continue;
        }
        if !seen_attributes.insert(attribute.name.as_str()) {
            issues.push(ValidationIssue::error(
                &attribute.name,
                "duplicate attribute name",
            ));
        }
        if attribute.skills.is_empty() {
            issues.push(ValidationIssue::warning(&attribute.name, "has no skills"));
        }

        let mut seen_skills: HashSet<&str> = HashSet::new();
        for skill in &attribute.skills {
            if skill.name.trim().is_empty() {
                issues.push(ValidationIssue::error(
                    &attribute.name,
                    "skill name is empty",
                ));
            } else if !seen_skills.insert(skill.name.as_str()) {
                issues.push(ValidationIssue::error(
                    &skill.name,
                    format!("duplicate skill name under {}", attribute.name),
                ));
            }
        }
    }

    for option in &template.options {
        if option.points() <= 0 {
            issues.push(ValidationIssue::warning(
                option.name(),
                format!("{} has non-positive points", option.category()),
            ));
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::TemplateOption;
    use crate::template::Attribute;

    #[test]
    fn clean_template_has_no_issues() {
        let mut t = Template::new("Fantasy");
        t.attributes
            .push(Attribute::new("Physique", "").with_skills(["Lifting"]));
        t.options
            .push(TemplateOption::advantage("Wealth", "", 4));
        assert!(validate_template(&t).is_empty());
    }

    #[test]
    fn empty_template_name_is_error() {
        let t = Template::new("  ");
        let issues = validate_template(&t);
        assert!(issues.iter().any(|i| i.is_error && i.subject == "template"));
    }

    #[test]
    fn duplicate_attribute_names_flagged() {
        let mut t = Template::new("Test");
        t.attributes.push(Attribute::new("Agility", ""));
        t.attributes.push(Attribute::new("Agility", ""));
        let issues = validate_template(&t);
        assert!(
            issues
                .iter()
                .any(|i| i.is_error && i.message == "duplicate attribute name")
        );
    }

    #[test]
    fn duplicate_skill_names_flagged_per_attribute() {
        let mut t = Template::new("Test");
        t.attributes
            .push(Attribute::new("Agility", "").with_skills(["Dodge", "Dodge"]));
        t.attributes
            .push(Attribute::new("Mechanical", "").with_skills(["Dodge"]));
        let issues = validate_template(&t);
        let duplicates: Vec<_> = issues
            .iter()
            .filter(|i| i.message.starts_with("duplicate skill"))
            .collect();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].subject, "Dodge");
    }

    #[test]
    fn skill_free_attribute_is_a_warning() {
        let mut t = Template::new("Test");
        t.attributes.push(Attribute::new("Agility", ""));
        let issues = validate_template(&t);
        assert!(
            issues
                .iter()
                .any(|i| !i.is_error && i.message == "has no skills")
        );
    }

    #[test]
    fn non_positive_option_points_warned() {
        let t = Template::new("Test")
            .add_option(TemplateOption::advantage("Freebie", "", 0))
            .add_option(TemplateOption::complication("Owed", "", -2));
        let issues = validate_template(&t);
        assert_eq!(issues.iter().filter(|i| !i.is_error).count(), 2);
    }

    #[test]
    fn display_formats_kind_and_subject() {
        let issue = ValidationIssue::error("Agility", "duplicate attribute name");
        assert_eq!(
            issue.to_string(),
            "error: Agility: duplicate attribute name"
        );
    }
}
