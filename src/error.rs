// SPDX-License-Identifier: FSL-1.1

/// Errors created by this library
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A removal or peek was attempted on a collection with no values
    #[error("List is empty: cannot {0}")]
    EmptyCollection(&'static str),
}

/// Result alias using the library [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collection_message() {
        let e = Error::EmptyCollection("pop");
        assert_eq!("List is empty: cannot pop", e.to_string());
    }
}
