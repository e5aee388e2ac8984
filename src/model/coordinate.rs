use std::{fmt::Display, str::FromStr, sync::OnceLock};

use regex_lite::Regex;
use serde::{de::Visitor, Deserialize, Deserializer, Serialize, Serializer};

use super::ParseError;

/// Maven style `group:artifact:version` triple identifying one project.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    pub group: String,
    pub artifact: String,
    pub version: String,
}

fn coordinate_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(?P<group>[^:]+):(?P<artifact>[^:]+):(?P<version>[^:]+)$")
            .expect("coordinate pattern is a valid regex")
    })
}

impl Coordinate {
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Coordinate {
        Coordinate {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Parses `group:artifact:version`. Exactly three non-empty parts are accepted.
    pub fn parse(text: &str) -> Result<Coordinate, ParseError> {
        let captures = coordinate_pattern()
            .captures(text)
            .ok_or_else(|| ParseError::MalformedCoordinate(text.to_string()))?;
        let part = |name: &str| {
            captures
                .name(name)
                .map(|m| m.as_str().to_string())
                .ok_or_else(|| ParseError::MalformedCoordinate(text.to_string()))
        };

        Ok(Coordinate {
            group: part("group")?,
            artifact: part("artifact")?,
            version: part("version")?,
        })
    }

    /// Same group and artifact, different version.
    pub fn with_version(&self, version: impl Into<String>) -> Coordinate {
        Coordinate {
            group: self.group.clone(),
            artifact: self.artifact.clone(),
            version: version.into(),
        }
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl FromStr for Coordinate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coordinate::parse(s)
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CoordinateVisitor;

        impl<'de> Visitor<'de> for CoordinateVisitor {
            type Value = Coordinate;

            fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
                formatter.write_str("a group:artifact:version string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Coordinate::parse(v).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(CoordinateVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn parse_coordinate() {
        let coordinate = Coordinate::parse("com.acme:core:1.0-SNAPSHOT").unwrap();
        assert_eq!(coordinate, Coordinate::new("com.acme", "core", "1.0-SNAPSHOT"));
    }

    #[test]
    fn display_is_inverse_of_parse() {
        for text in [
            "com.acme:core:1.0-SNAPSHOT",
            "org.example:with-dash:2.3.4",
            "g:a:v",
        ] {
            let coordinate = Coordinate::parse(text).unwrap();
            assert_eq!(coordinate.to_string(), text);
            assert_eq!(Coordinate::parse(&coordinate.to_string()).unwrap(), coordinate);
        }
    }

    #[test]
    fn reject_wrong_field_count() {
        for text in [
            "not-a-gav",
            "com.acme:core",
            "com.acme:core:1.0:jar",
            "",
        ] {
            assert!(
                matches!(
                    Coordinate::parse(text),
                    Err(ParseError::MalformedCoordinate(ref t)) if t == text
                ),
                "{text} should not parse"
            );
        }
    }

    #[test]
    fn reject_empty_fields() {
        for text in [":core:1.0", "com.acme::1.0", "com.acme:core:", "::"] {
            assert!(Coordinate::parse(text).is_err(), "{text} should not parse");
        }
    }

    #[test]
    fn from_str_matches_parse() {
        let parsed: Coordinate = "a:b:c".parse().unwrap();
        assert_eq!(parsed, Coordinate::new("a", "b", "c"));
    }

    #[test]
    fn deserialize_from_string() {
        #[derive(Deserialize)]
        struct Holder {
            gav: Coordinate,
        }

        let holder: Holder = toml::from_str(r#"gav = "com.acme:core:1.0""#).unwrap();
        assert_eq!(holder.gav, Coordinate::new("com.acme", "core", "1.0"));

        let error = toml::from_str::<Holder>(r#"gav = "com.acme:core""#);
        assert!(error.is_err());
    }
}
