use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyNumber {
    I64(i64),
    F64(f64),
}

#[allow(clippy::cast_possible_truncation)]
fn integral<E: serde::de::Error>(n: AnyNumber) -> Result<i64, E> {
    match n {
        AnyNumber::I64(i) => Ok(i),
        AnyNumber::F64(f) if f.fract() == 0.0 && f.is_finite() => Ok(f as i64),
        AnyNumber::F64(f) => Err(E::custom(format!("cannot convert float {f} to i64"))),
    }
}

/// The CDN API serializes many integer quantities as `1234.0`; accept both forms.
pub(crate) fn de_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    integral(AnyNumber::deserialize(deserializer)?)
}

pub(crate) fn de_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<AnyNumber>::deserialize(deserializer)?
        .map(integral)
        .transpose()
}

/// Numbers that sometimes arrive as strings (`"12.5"`).
pub(crate) fn de_opt_f64_loose<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Num(f64),
        Str(String),
    }

    match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Num(f)) => Ok(Some(f)),
        Some(Loose::Str(s)) if s.trim().is_empty() => Ok(None),
        Some(Loose::Str(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("not a number: {s:?}"))),
        None => Ok(None),
    }
}

/// Identifiers (`insCode`) are sometimes numbers and sometimes strings.
pub(crate) fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Str(String),
        Num(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Str(s) => s.trim().to_string(),
        Id::Num(n) => n.to_string(),
    })
}
