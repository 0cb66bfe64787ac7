//! The position of the authors in the author list.
//!
//! Lead authors go first, senior authors go last and everyone else sits in the
//! middle. Within each group the authors are sorted by last name. The sort is
//! stable: authors with the same key keep the order of the input.

use crate::model::Role;

/// The priority of a role: 0 for lead authors, 2 for senior authors, 1 otherwise.
pub fn role_priority(role: Option<&Role>) -> u8 {
    match role {
        Some(Role::Lead) => 0,
        Some(Role::Senior) => 2,
        _ => 1,
    }
}

/// The sort key of an author.
///
/// Without `sort_middle`, only the role counts and each group keeps the
/// order of the input.
pub fn sort_key(role: Option<&Role>, surname: &str, sort_middle: bool) -> (u8, String) {
    let priority = role_priority(role);
    if sort_middle {
        (priority, surname.to_string())
    } else {
        (priority, String::new())
    }
}

/// Sorts the items in place (stable sort).
///
/// `get` extracts the role and the surname of an item.
pub fn sort_authors<T, F>(items: &mut [T], sort_middle: bool, get: F)
where
    F: Fn(&T) -> (Option<Role>, String),
{
    items.sort_by_cached_key(|item| {
        let (role, surname) = get(item);
        sort_key(role.as_ref(), &surname, sort_middle)
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(input: &[(&str, &str)], sort_middle: bool) -> Vec<String> {
        let mut items: Vec<(&str, &str)> = input.to_vec();
        sort_authors(&mut items, sort_middle, |(role, last)| {
            (Role::parse(role), last.to_string())
        });
        items.iter().map(|(_, last)| last.to_string()).collect()
    }

    #[test]
    fn leads_first_seniors_last() {
        let res = sorted(
            &[
                ("Senior", "Zed"),
                ("", "Moss"),
                ("Lead", "Young"),
                ("Other", "Abbot"),
                ("", "Cole"),
            ],
            true,
        );
        assert_eq!(res, vec!["Young", "Abbot", "Cole", "Moss", "Zed"]);
    }

    #[test]
    fn stable_within_groups() {
        let res = sorted(
            &[
                ("Senior", "Sb"),
                ("Lead", "Lz"),
                ("", "Kim"),
                ("Senior", "Sa"),
                ("Lead", "La"),
                ("", "Kim"),
                ("", "Ahn"),
            ],
            true,
        );
        assert_eq!(res, vec!["La", "Lz", "Ahn", "Kim", "Kim", "Sa", "Sb"]);
    }

    #[test]
    fn several_leads_and_seniors() {
        let res = sorted(
            &[
                ("Lead", "Zhu"),
                ("Lead", "Abe"),
                ("Senior", "Yu"),
                ("Senior", "Bo"),
            ],
            true,
        );
        assert_eq!(res, vec!["Abe", "Zhu", "Bo", "Yu"]);
    }

    #[test]
    fn same_surname_keeps_input_order() {
        let mut items = vec![("Other", "Kim", 1), ("", "Kim", 2), ("Lead", "Kim", 3)];
        sort_authors(&mut items, true, |(role, last, _)| {
            (Role::parse(role), last.to_string())
        });
        let ids: Vec<i32> = items.iter().map(|(_, _, id)| *id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn no_middle_sorting() {
        let res = sorted(
            &[("", "Moss"), ("Senior", "Zed"), ("", "Cole"), ("Lead", "Young")],
            false,
        );
        assert_eq!(res, vec!["Young", "Moss", "Cole", "Zed"]);
    }

    #[test]
    fn priorities() {
        assert_eq!(role_priority(Some(&Role::Lead)), 0);
        assert_eq!(role_priority(None), 1);
        assert_eq!(role_priority(Some(&Role::Other("x".to_string()))), 1);
        assert_eq!(role_priority(Some(&Role::Senior)), 2);
    }
}
