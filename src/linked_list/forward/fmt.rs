use core::fmt;

use super::list::ForwardList;

/// Renders the elements in order as `{a, b, c}`; an empty list is `{}`.
///
/// Formatter flags apply to every element, so `{:.1}` prints each one with
/// a single decimal.
impl<T: fmt::Display> fmt::Display for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, element) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(element, f)?;
        }
        f.write_str("}")
    }
}

impl<T: fmt::Debug> fmt::Debug for ForwardList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
