//! Client-side filtering for search boxes and category pickers.

use crate::model::Category;

/// A static guide entry on the guides landing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guide {
    /// Stable identifier.
    pub id: &'static str,
    /// Card title.
    pub title: &'static str,
    /// One-line summary shown under the title.
    pub description: &'static str,
    /// Route segment, also the icon file name.
    pub slug: &'static str,
    /// Gradient classes for the icon tile.
    pub icon_color: &'static str,
}

/// Case-insensitive substring match of `query` against any field. A blank
/// query matches everything.
pub fn matches_query<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .into_iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Categories visible for a search query and an optional picked slug.
pub fn filter_categories<'a>(
    categories: &'a [Category],
    query: &str,
    selected_slug: Option<&str>,
) -> Vec<&'a Category> {
    categories
        .iter()
        .filter(|category| selected_slug.map_or(true, |slug| category.slug == slug))
        .filter(|category| {
            matches_query(
                query,
                [category.name.as_str(), category.description.as_deref().unwrap_or("")],
            )
        })
        .collect()
}

/// Guides whose title or description contains `query`.
pub fn filter_guides<'a>(guides: &'a [Guide], query: &str) -> Vec<&'a Guide> {
    guides
        .iter()
        .filter(|guide| matches_query(query, [guide.title, guide.description]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, slug: &str, description: Option<&str>) -> Category {
        Category {
            id: slug.to_string(),
            name: name.to_string(),
            slug: slug.to_string(),
            description: description.map(str::to_string),
            cover_image: None,
            article_count: 0,
            articles: None,
            created_at: None,
            updated_at: None,
        }
    }

    const GUIDES: [Guide; 2] = [
        Guide {
            id: "1",
            title: "The Ultimate Guide to Attio CRM",
            description: "From setup to full automation.",
            slug: "ultimate-guide-attio-crm",
            icon_color: "",
        },
        Guide {
            id: "2",
            title: "How to Migrate Data to Attio CRM",
            description: "Step-by-step data migration.",
            slug: "migrate-data-attio-crm",
            icon_color: "",
        },
    ];

    #[test]
    fn blank_query_matches_everything() {
        assert!(matches_query("   ", ["anything"]));
        assert_eq!(filter_guides(&GUIDES, "").len(), 2);
    }

    #[test]
    fn guides_match_title_or_description_ignoring_case() {
        let hits = filter_guides(&GUIDES, "MIGRATION");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "2");
        assert_eq!(filter_guides(&GUIDES, "attio").len(), 2);
        assert!(filter_guides(&GUIDES, "salesforce").is_empty());
    }

    #[test]
    fn categories_filter_by_slug_and_query() {
        let all = vec![
            category("CRM", "crm", Some("Customer tools")),
            category("Helpdesk", "helpdesk", None),
        ];
        assert_eq!(filter_categories(&all, "", None).len(), 2);
        assert_eq!(filter_categories(&all, "customer", None)[0].slug, "crm");
        assert_eq!(filter_categories(&all, "", Some("helpdesk"))[0].name, "Helpdesk");
        assert!(filter_categories(&all, "crm", Some("helpdesk")).is_empty());
    }
}
