/// Calls `f` for every value, inserting `separator` between the pieces that
/// actually produced output.
pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut len = out.len();
    for v in values {
        if out.len() > len {
            out.push_str(separator);
        }
        len = out.len();
        f(out, v);
    }
}

/// Largest char boundary in `text` not beyond the truncation limit, so
/// [`truncate_long!`] never slices inside a multibyte character.
pub fn truncation_boundary(text: &str) -> usize {
    let mut limit = ::std::cmp::min(text.len(), 497);
    while !text.is_char_boundary(limit) {
        limit -= 1;
    }
    limit
}

#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {
        format_args!(
            "{}{}",
            &$query[..$crate::truncation_boundary(&$query)].trim_end(),
            if $query.len() > 497 { "..." } else { "" },
        )
    };
}
