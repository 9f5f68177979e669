// SPDX-License-Identifier: GPL-3.0-only

/// Result of a remote fetch as seen by a page
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Remote<T> {
    #[default]
    Loading,
    Loaded(T),
    /// The request settled without data (not found, empty listing...)
    Empty,
    Failed(String),
}

impl<T> Remote<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Remote::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<Result<Option<T>, String>> for Remote<T> {
    fn from(result: Result<Option<T>, String>) -> Self {
        match result {
            Ok(Some(value)) => Remote::Loaded(value),
            Ok(None) => Remote::Empty,
            Err(err) => Remote::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_into_explicit_variants() {
        assert_eq!(Remote::from(Ok(Some(3))), Remote::Loaded(3));
        assert_eq!(Remote::<i32>::from(Ok(None)), Remote::Empty);
        assert_eq!(
            Remote::<i32>::from(Err(String::from("timeout"))),
            Remote::Failed(String::from("timeout"))
        );
    }

    #[test]
    fn starts_loading() {
        let remote = Remote::<Vec<u8>>::default();
        assert_eq!(remote, Remote::Loading);
        assert!(remote.loaded().is_none());
    }
}
