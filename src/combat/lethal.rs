//! Minimum damage needed to destroy a creature

/// Lethal damage requirement for a blocker
///
/// Deathtouch on the damage source makes any single point lethal, regardless
/// of toughness or damage already marked. Unknown toughness yields 0; callers
/// must not treat that as a real requirement (the assignment builder instead
/// sinks all remaining power into such a blocker).
pub fn lethal_requirement(
    toughness: Option<i32>,
    damage_marked: Option<i32>,
    deathtouch: bool,
) -> u32 {
    if deathtouch {
        return 1;
    }
    let Some(toughness) = toughness else {
        return 0;
    };
    let marked = damage_marked.unwrap_or(0);
    (toughness - marked).max(0) as u32
}
