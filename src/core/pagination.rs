//! Windowed page-number sequence for pagination controls.

/// One button in the pagination strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    Ellipsis,
}

/// Up to this many pages are shown without collapsing.
const FULL_WINDOW: u32 = 7;

/// Returns the page numbers to show for `current` out of `total`.
///
/// ```text
/// total <= 7        1 2 3 4 5 6 7
/// near the start    1 2 3 4 5 … N
/// near the end      1 … N-4 N-3 N-2 N-1 N
/// otherwise         1 … c-1 c c+1 … N
/// ```
pub fn window(current: u32, total: u32) -> Vec<PageSlot> {
    use PageSlot::{Ellipsis, Page};

    if total <= FULL_WINDOW {
        return (1..=total).map(Page).collect();
    }
    if current <= 4 {
        return vec![Page(1), Page(2), Page(3), Page(4), Page(5), Ellipsis, Page(total)];
    }
    if current > total - 4 {
        let mut slots = vec![Page(1), Ellipsis];
        slots.extend((total - 4..=total).map(Page));
        return slots;
    }
    vec![
        Page(1),
        Ellipsis,
        Page(current - 1),
        Page(current),
        Page(current + 1),
        Ellipsis,
        Page(total),
    ]
}
