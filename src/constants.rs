use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Published posts shown per blog list page.
pub const BLOG_PAGE_SIZE: u32 = 10;

/// Upper bound for admin list pages.
pub const ADMIN_MAX_PAGE_SIZE: u32 = 100;
