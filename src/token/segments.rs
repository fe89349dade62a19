use crate::error::{Error, Result};

/// The three dot-separated parts of a compact token
///
/// Parts are borrowed from the input and may be empty; emptiness only
/// surfaces once a part is decoded. The signature is carried but never
/// inspected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSegments<'a> {
    pub header: &'a str,
    pub payload: &'a str,
    pub signature: &'a str,
}

impl<'a> TokenSegments<'a> {
    /// Split a token string on `.`
    ///
    /// # Example
    /// ```
    /// use jwtdecode::TokenSegments;
    ///
    /// let segments = TokenSegments::split("aGVhZGVy.cGF5bG9hZA.c2ln").unwrap();
    /// assert_eq!(segments.payload, "cGF5bG9hZA");
    /// ```
    pub fn split(token: &'a str) -> Result<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        let &[header, payload, signature] = &parts[..] else {
            return Err(Error::FormatInvalid { parts: parts.len() });
        };

        Ok(Self {
            header,
            payload,
            signature,
        })
    }
}
