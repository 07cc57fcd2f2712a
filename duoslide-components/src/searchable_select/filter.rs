//! Case-insensitive substring filtering of select items.

/// An item that matched the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilteredItem<'a> {
    /// Position of the item in the unfiltered list.
    pub index: usize,
    /// Text of the item.
    pub text: &'a str,
}

/// Items whose text contains `query`, ignoring case, in their original order.
///
/// An empty query matches every item.
///
/// ```
/// use duoslide_components::searchable_select::filter_items;
///
/// let items = ["Apple", "Banana", "Grape"];
/// let matches = filter_items(&items, "an");
/// assert_eq!(matches.len(), 1);
/// assert_eq!((matches[0].index, matches[0].text), (1, "Banana"));
/// ```
pub fn filter_items<'a, S: AsRef<str>>(items: &'a [S], query: &str) -> Vec<FilteredItem<'a>> {
    let needle = query.to_lowercase();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| FilteredItem {
            index,
            text: item.as_ref(),
        })
        .filter(|item| needle.is_empty() || item.text.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const FRUIT: [&str; 5] = ["Apple", "Banana", "Grape", "apricot", "Pineapple"];

    #[rstest]
    #[case("", vec![0, 1, 2, 3, 4])]
    #[case("ap", vec![0, 2, 3, 4])]
    #[case("AP", vec![0, 2, 3, 4])]
    #[case("apple", vec![0, 4])]
    #[case("nan", vec![1])]
    #[case("kiwi", vec![])]
    fn matches_substrings_ignoring_case(#[case] query: &str, #[case] expected: Vec<usize>) {
        let indices: Vec<_> = filter_items(&FRUIT, query).iter().map(|m| m.index).collect();
        assert_eq!(indices, expected);
    }

    #[test]
    fn keeps_original_text() {
        let items = vec![String::from("Éclair"), String::from("éclair")];
        let matches = filter_items(&items, "ÉCL");
        assert_eq!(
            matches,
            vec![
                FilteredItem {
                    index: 0,
                    text: "Éclair"
                },
                FilteredItem {
                    index: 1,
                    text: "éclair"
                },
            ]
        );
    }

    #[test]
    fn empty_list() {
        let items: [&str; 0] = [];
        assert!(filter_items(&items, "").is_empty());
    }
}
