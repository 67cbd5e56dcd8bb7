#![cfg(test)]

use core::{
    fmt::{
        Debug,
        Display,
    },
    str::FromStr,
};

use serde::{
    Serialize,
    de::DeserializeOwned,
};

#[track_caller]
pub fn test_deserialization<T>(s: &str, expected: T)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    let got = serde_json::from_str::<T>(s).unwrap();
    assert_eq!(got, expected);
}

#[track_caller]
pub fn test_serialization<T, S>(v: T, expected: S)
where
    T: Debug + PartialEq + Serialize + DeserializeOwned,
    S: Display,
{
    let expected_str = format!("{expected}");
    let got = serde_json::to_string(&v).unwrap();
    assert_eq!(got, expected_str);
    test_deserialization(&got, v);
}

#[track_caller]
pub fn test_string_deserialization<T>(s: &str, expected: T)
where
    T: Debug + PartialEq + DeserializeOwned,
{
    test_deserialization(&format!("\"{s}\""), expected)
}

#[track_caller]
pub fn test_string_serialization<T>(v: T, expected: &str)
where
    T: Debug + PartialEq + Serialize + DeserializeOwned,
{
    test_serialization(v, format!("\"{expected}\""))
}

/// Checks that every spelling in `names` parses to `expected` through [`FromStr`], which is how
/// loosely formatted names from external sources reach the engine.
#[track_caller]
pub fn test_parses_all<T>(names: &[&str], expected: T)
where
    T: Debug + PartialEq + FromStr,
{
    for name in names {
        match T::from_str(name) {
            Ok(got) => assert_eq!(got, expected, "{name} parsed to the wrong value"),
            Err(_) => panic!("{name} failed to parse"),
        }
    }
}
