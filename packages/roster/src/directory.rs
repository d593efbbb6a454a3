//! Organization listing

use std::collections::BTreeMap;

use crate::types::Organization;

/// Organizations grouped under one category heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub organizations: Vec<Organization>,
}

/// Group organizations by category.
///
/// Categories come out alphabetically, organizations by name within each.
/// A blank category is listed under "Other".
pub fn group_by_category(organizations: Vec<Organization>) -> Vec<CategoryGroup> {
    let mut by_category: BTreeMap<String, Vec<Organization>> = BTreeMap::new();

    for org in organizations {
        let category = match org.category.trim() {
            "" => "Other".to_string(),
            category => category.to_string(),
        };
        by_category.entry(category).or_default().push(org);
    }

    by_category
        .into_iter()
        .map(|(category, mut organizations)| {
            organizations.sort_by_key(|o| o.name.to_lowercase());
            CategoryGroup {
                category,
                organizations,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(name: &str, category: &str) -> Organization {
        Organization {
            id: name.to_lowercase(),
            name: name.to_string(),
            category: category.to_string(),
            description: None,
            adviser: None,
        }
    }

    #[test]
    fn test_groups_sorted_by_category_then_name() {
        let groups = group_by_category(vec![
            org("Math Club", "Academic"),
            org("Ang Tanglaw", "Publication"),
            org("chess club", "Academic"),
            org("The Beacon", "Publication"),
        ]);

        let categories: Vec<&str> = groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["Academic", "Publication"]);

        let academic: Vec<&str> = groups[0].organizations.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(academic, vec!["chess club", "Math Club"]);
    }

    #[test]
    fn test_blank_category_is_other() {
        let groups = group_by_category(vec![org("Drama Guild", "  ")]);
        assert_eq!(groups[0].category, "Other");
    }

    #[test]
    fn test_empty_listing() {
        assert!(group_by_category(Vec::new()).is_empty());
    }
}
