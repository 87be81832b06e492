//! Browser clients tend to send ids taken from `<select>` values, so numeric
//! fields accept both `3` and `"3"`.

use serde::{Deserialize, Deserializer, de::Error};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient {
    Number(i64),
    Text(String)
}

impl Lenient {
    fn into_i32<E: Error>(self) -> Result<i32, E> {
        match self {
            Lenient::Number(n) => i32::try_from(n)
                .map_err(|_| E::custom(format!("integer {} out of range", n))),
            Lenient::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("expected an integer, found {:?}", s)))
        }
    }
}

pub fn int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    Lenient::deserialize(deserializer)?.into_i32()
}

pub fn optional_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i32>, D::Error> {
    Option::<Lenient>::deserialize(deserializer)?
        .map(Lenient::into_i32)
        .transpose()
}
