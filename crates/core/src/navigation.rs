//! Index arithmetic for moving the selection around a tab list.

/// Index after `selected`, wrapping to the first tab past the end.
/// An empty list stays at 0.
pub fn next_index(selected: usize, len: usize) -> usize {
    if selected >= len.saturating_sub(1) {
        0
    } else {
        selected + 1
    }
}

/// Index before `selected`; previous from the first tab is the last one.
/// An empty list stays at 0.
pub fn previous_index(selected: usize, len: usize) -> usize {
    let last = len.saturating_sub(1);
    if selected == 0 {
        last
    } else {
        (selected - 1).min(last)
    }
}

/// Whether removing the tab at `removed` should move the selection back by
/// one. `selected` is the index before removal.
///
/// A tab removed in front of the selection shifts the selected tab down, so
/// the index follows it. A removed selected tab hands the selection to its
/// predecessor, unless it was the first tab.
pub fn select_previous_after_removal(removed: usize, selected: usize, was_selected: bool) -> bool {
    if removed < selected {
        return true;
    }
    was_selected && removed != 0
}
