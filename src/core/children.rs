use crate::core::range::parse_range;
use crate::models::criteria::is_active;
use crate::models::{ChildFilter, ChildProfile};

/// Check whether a candidate's children satisfy one filter slot
///
/// True iff at least one child meets the age constraint and the gender
/// constraint at the same time. Inactive slots always pass, including
/// slots whose only constraint is an unparseable age token.
pub fn matches_child_filter(children: &[ChildProfile], slot: &ChildFilter) -> bool {
    let age_range = parse_range(&slot.age_range);
    let gender = is_active(&slot.gender).then(|| slot.gender.trim());

    if age_range.is_any() && gender.is_none() {
        return true;
    }

    children.iter().any(|child| {
        let age_ok = age_range.is_any()
            || child.age.is_some_and(|age| age_range.contains(i64::from(age)));
        let gender_ok = gender.map_or(true, |g| child.gender.trim().eq_ignore_ascii_case(g));
        age_ok && gender_ok
    })
}

/// True when any candidate child is within `tolerance` years of any requester child
///
/// Children with unknown ages are ignored on both sides.
pub fn has_close_child_age(requester: &[ChildProfile], candidate: &[ChildProfile], tolerance: u8) -> bool {
    requester.iter().filter_map(|c| c.age).any(|mine| {
        candidate
            .iter()
            .filter_map(|c| c.age)
            .any(|theirs| mine.abs_diff(theirs) <= tolerance)
    })
}
