//! Route-change side effect behind a trait so state code stays router-agnostic.

/// Something that can move the UI to another route.
pub trait Navigator {
    fn go_to(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str),
{
    fn go_to(&self, path: &str) {
        self(path);
    }
}
