use crate::core::types::CounterTable;

/// Cookies sharing the highest count, sorted ascending.
///
/// An empty table yields an empty list.
pub(crate) fn select_winners(counts: &CounterTable) -> Vec<String> {
    let Some(max) = counts.iter().map(|(_, count)| count).max() else {
        return Vec::new();
    };

    let mut winners: Vec<String> = counts
        .iter()
        .filter(|&(_, count)| count == max)
        .map(|(cookie, _)| cookie.to_string())
        .collect();
    winners.sort_unstable();
    winners
}
