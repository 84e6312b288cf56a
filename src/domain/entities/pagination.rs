use serde::Serialize;

use crate::errors::AppError;

/// Page position within a listing, 1-based.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total_items: i64,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl Pagination {
    /// Resolves a requested page against the total count.
    ///
    /// An empty listing still has one (empty) first page. Pages below 1 or
    /// past the last page are `NotFound`.
    pub fn resolve(page: u32, per_page: u32, total_items: i64) -> Result<Self, AppError> {
        let per_page = per_page.max(1);
        let total_pages = total_pages(total_items, per_page);

        if page < 1 || page > total_pages {
            return Err(AppError::NotFound(format!("Invalid page ({})", page)));
        }

        Ok(Pagination {
            page,
            per_page,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        })
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.per_page)
    }
}

fn total_pages(total_items: i64, per_page: u32) -> u32 {
    if total_items <= 0 {
        return 1;
    }
    let per_page = i64::from(per_page);
    let pages = (total_items + per_page - 1) / per_page;
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Parses the raw `page` query value. Absent means the first page; anything
/// that is not a positive integer is `NotFound`.
pub fn parse_page_param(raw: Option<&str>) -> Result<u32, AppError> {
    match raw {
        None => Ok(1),
        Some(value) => value
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|p| *p >= 1)
            .ok_or_else(|| AppError::NotFound(format!("Invalid page ({})", value))),
    }
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}
