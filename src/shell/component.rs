/// A reusable piece of page markup.
///
/// Components follow the same props pattern throughout the shell:
/// - They receive data via props (struct fields, usually borrowed).
/// - They hold no state of their own.
/// - They append HTML to a buffer instead of returning fragments, so a page
///   is built in one allocation.
pub trait Component {
    /// Append this component's markup to `out`.
    fn render(&self, out: &mut String);

    /// Render into a fresh string.
    fn to_html(&self) -> String {
        let mut out = String::new();
        self.render(&mut out);
        out
    }
}
