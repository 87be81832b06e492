pub const QUESTIONS_PER_PAGE: usize = 10;

/// Cuts the requested page out of an already ordered list.
///
/// `page` is 1-indexed and treated as 1 when absent. Pages below 1 or past
/// the end of `items` come back empty instead of failing.
pub fn paginate<T>(page: Option<i64>, items: Vec<T>) -> Vec<T> {
    let page = page.unwrap_or(1);
    if page < 1 {
        return Vec::new()
    }

    let start = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(QUESTIONS_PER_PAGE);

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
