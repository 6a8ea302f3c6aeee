use std::fmt::Write;

use crate::core::pagination::{PageSlot, window};
use crate::shell::component::Component;

/// Prev / numbered / Next buttons. Each enabled button carries `data-page`,
/// which maps to `Action::SelectPage`.
pub struct PaginationControls {
    pub current: u32,
    pub total: u32,
}

impl Component for PaginationControls {
    fn render(&self, out: &mut String) {
        let current = self.current;
        out.push_str(r#"<div class="pagination-controls">"#);

        let prev_disabled = if current <= 1 { " disabled" } else { "" };
        let _ = write!(
            out,
            r#"<button class="pagination-btn" data-page="{}"{}>Prev</button>"#,
            current.saturating_sub(1),
            prev_disabled
        );

        for slot in window(current, self.total) {
            match slot {
                PageSlot::Ellipsis => {
                    out.push_str(r#"<button class="pagination-btn" disabled>...</button>"#)
                }
                PageSlot::Page(page) => {
                    let class = if page == current { " current" } else { "" };
                    let _ = write!(
                        out,
                        r#"<button class="pagination-btn{class}" data-page="{page}">{page}</button>"#
                    );
                }
            }
        }

        let next_disabled = if current >= self.total { " disabled" } else { "" };
        let _ = write!(
            out,
            r#"<button class="pagination-btn" data-page="{}"{}>Next</button>"#,
            current.saturating_add(1),
            next_disabled
        );
        out.push_str("</div>");
    }
}
