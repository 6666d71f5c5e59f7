//! Common types used throughout the user directory
//!
//! This module contains the data model shared by the fetch client,
//! the pagination controller and the view layer.

use serde::{Deserialize, Serialize};

// ============================================================================
// Items
// ============================================================================

/// A single user record as returned by the API
///
/// Immutable once fetched. The controller never deduplicates users; it relies
/// on the server returning non-overlapping pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Stable unique identifier
    pub id: u64,
    /// Contact address
    pub email: String,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Avatar image URL
    pub avatar: String,
}

impl User {
    /// First and last name joined by a space
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

// ============================================================================
// Page Result
// ============================================================================

/// One page of users, as produced by a single fetch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    /// Page number this result belongs to (1-based)
    #[serde(rename = "page")]
    pub page_number: u32,
    /// Number of users per page
    #[serde(rename = "per_page")]
    pub page_size: u32,
    /// Total number of users across all pages
    #[serde(rename = "total")]
    pub total_items: u64,
    /// Total number of pages
    pub total_pages: u32,
    /// Users on this page, in server order
    #[serde(rename = "data", default)]
    pub items: Vec<User>,
}

impl PageResult {
    /// Whether pages remain after this one
    pub fn has_more(&self) -> bool {
        self.page_number < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn page(page_number: u32, total_pages: u32) -> PageResult {
        PageResult {
            page_number,
            page_size: 6,
            total_items: 12,
            total_pages,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_page_result_wire_format() {
        let body = json!({
            "page": 2,
            "per_page": 6,
            "total": 12,
            "total_pages": 2,
            "data": [{
                "id": 7,
                "email": "michael.lawson@reqres.in",
                "first_name": "Michael",
                "last_name": "Lawson",
                "avatar": "https://reqres.in/img/faces/7-image.jpg"
            }],
            "support": {"url": "https://reqres.in/#support-heading"}
        });

        let result: PageResult = serde_json::from_value(body).unwrap();
        pretty_assertions::assert_eq!(result.page_number, 2);
        pretty_assertions::assert_eq!(result.page_size, 6);
        pretty_assertions::assert_eq!(result.total_items, 12);
        pretty_assertions::assert_eq!(result.total_pages, 2);
        pretty_assertions::assert_eq!(
            result.items,
            vec![User {
                id: 7,
                email: "michael.lawson@reqres.in".to_string(),
                first_name: "Michael".to_string(),
                last_name: "Lawson".to_string(),
                avatar: "https://reqres.in/img/faces/7-image.jpg".to_string(),
            }]
        );
    }

    #[test]
    fn test_page_result_missing_data_is_empty() {
        let result: PageResult = serde_json::from_value(json!({
            "page": 3, "per_page": 6, "total": 12, "total_pages": 2
        }))
        .unwrap();
        assert!(result.items.is_empty());
    }

    #[test_case(1, 2 => true ; "first of two")]
    #[test_case(2, 2 => false ; "last page")]
    #[test_case(3, 2 => false ; "beyond last page")]
    #[test_case(1, 0 => false ; "empty directory")]
    fn test_has_more(page_number: u32, total_pages: u32) -> bool {
        page(page_number, total_pages).has_more()
    }

    #[test]
    fn test_full_name() {
        let user = User {
            id: 1,
            email: "george.bluth@reqres.in".to_string(),
            first_name: "George".to_string(),
            last_name: "Bluth".to_string(),
            avatar: String::new(),
        };
        pretty_assertions::assert_eq!(user.full_name(), "George Bluth");
    }
}
