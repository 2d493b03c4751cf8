use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use mongodb::bson::Bson;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub trait TypedIdMarker {
    fn tag() -> &'static str;
}

pub struct TypedId<T: TypedIdMarker>(Uuid, PhantomData<T>);

impl<T: TypedIdMarker> TypedId<T> {
    pub fn new() -> TypedId<T> {
        TypedId(Uuid::new_v4(), PhantomData)
    }
}

impl<T: TypedIdMarker> Copy for TypedId<T> {}

impl<T: TypedIdMarker> Clone for TypedId<T> {
    fn clone(&self) -> TypedId<T> {
        *self
    }
}

impl<T: TypedIdMarker> PartialEq for TypedId<T> {
    fn eq(&self, other: &TypedId<T>) -> bool {
        self.0 == other.0
    }
}

impl<T: TypedIdMarker> Eq for TypedId<T> {}

impl<T: TypedIdMarker> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl<T: TypedIdMarker> Display for TypedId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}-{}", T::tag(), self.0.hyphenated())
    }
}

impl<T: TypedIdMarker> Debug for TypedId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Display::fmt(self, f)
    }
}

impl<T: TypedIdMarker> FromStr for TypedId<T> {
    type Err = TypedIdParseError;

    fn from_str(s: &str) -> Result<TypedId<T>, TypedIdParseError> {
        let rest = s
            .strip_prefix(T::tag())
            .ok_or(TypedIdParseError::WrongTag)?;
        let rest = rest
            .strip_prefix('-')
            .ok_or(TypedIdParseError::MissingSeparator)?;
        let uuid = Uuid::parse_str(rest).map_err(|_| TypedIdParseError::MalformedUuid)?;

        Ok(TypedId(uuid, PhantomData))
    }
}

impl<T: TypedIdMarker> Serialize for TypedId<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, T: TypedIdMarker> Deserialize<'de> for TypedId<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

impl<T: TypedIdMarker> From<TypedId<T>> for Bson {
    fn from(id: TypedId<T>) -> Bson {
        id.to_string().into()
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TypedIdParseError {
    WrongTag,
    MissingSeparator,
    MalformedUuid,
}

impl Display for TypedIdParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        let message = match self {
            TypedIdParseError::WrongTag => "the id does not start with the expected tag",
            TypedIdParseError::MissingSeparator => "the id is missing the tag separator",
            TypedIdParseError::MalformedUuid => "the id does not contain a valid uuid",
        };

        write!(f, "{}", message)
    }
}

impl std::error::Error for TypedIdParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Sample;

    impl TypedIdMarker for Sample {
        fn tag() -> &'static str {
            "SMP"
        }
    }

    #[test]
    fn round_trips_through_display_and_parse() {
        let id = TypedId::<Sample>::new();

        let parsed: TypedId<Sample> = id.to_string().parse().unwrap();

        assert_eq!(parsed, id);
    }

    #[test]
    fn rejects_wrong_tag() {
        let result = "XYZ-67e55044-10b1-426f-9247-bb680e5fe0c8".parse::<TypedId<Sample>>();

        assert_eq!(result.unwrap_err(), TypedIdParseError::WrongTag);
    }

    #[test]
    fn rejects_missing_separator() {
        let result = "SMP67e55044-10b1-426f-9247-bb680e5fe0c8".parse::<TypedId<Sample>>();

        assert_eq!(result.unwrap_err(), TypedIdParseError::MissingSeparator);
    }

    #[test]
    fn rejects_malformed_uuid() {
        let result = "SMP-not-a-uuid".parse::<TypedId<Sample>>();

        assert_eq!(result.unwrap_err(), TypedIdParseError::MalformedUuid);
    }
}
