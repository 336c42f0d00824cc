//! Line-anchored constructs. Every pattern runs in multi-line mode so `^` and
//! `$` sit on line boundaries.

use super::{ConstructKind, regex_rule::RegexRule};

pub const UNORDERED_LIST_ITEM: &str = r"(?m)^[*+-] (?P<inner>.*)$";
pub const ORDERED_LIST_ITEM: &str = r"(?m)^(?P<marker>[0-9]+\.) (?P<inner>.*)$";
pub const HEADER: &str = r"(?m)^(?P<marker>#{1,6}) (?P<inner>.*)$";
pub const QUOTE: &str = r"(?m)^> (?P<inner>.*)$";
/// Exactly three of the same character. Four or more is not a rule.
pub const RULE: &str = r"(?m)^(?:---|___|\*\*\*)$";

/// Line recognizers in priority order.
pub fn recognizers() -> Vec<RegexRule> {
    vec![
        RegexRule::new(ConstructKind::UnorderedListItem, UNORDERED_LIST_ITEM),
        RegexRule::new(ConstructKind::OrderedListItem, ORDERED_LIST_ITEM),
        RegexRule::new(ConstructKind::Header, HEADER),
        RegexRule::new(ConstructKind::Quote, QUOTE),
        RegexRule::new(ConstructKind::Rule, RULE),
    ]
}
