use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Personal data that must never show up in log output.
///
/// `Debug` and `Display` render a fixed mask, while serialization writes the
/// real value so API responses and upstream request bodies stay intact.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

const MASK: &str = "********";

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(MASK)
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl From<&str> for Masked<String> {
    fn from(value: &str) -> Self {
        Masked(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_output_is_masked() {
        let email = Masked::from("jane@example.com");
        assert_eq!(format!("{:?}", email), MASK);
        assert_eq!(email.to_string(), MASK);
        assert_eq!(email.expose(), "jane@example.com");
    }

    #[test]
    fn test_serializes_real_value() {
        let email = Masked::from("jane@example.com");
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"jane@example.com\"");

        let back: Masked<String> = serde_json::from_str("\"jane@example.com\"").unwrap();
        assert_eq!(back, email);
    }
}
