use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Course data for every branch, keyed `branch -> semester -> [course]` on disk.
///
/// Branch and semester order follows the JSON document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub branches: Vec<BranchCourses>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BranchCourses {
    pub code: String,
    pub semesters: Vec<Semester>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Semester {
    /// Semester label as written in the catalog (usually "1", "2", ...).
    pub label: String,
    pub courses: Vec<Course>,
}

/// A single course offered in a semester.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    #[serde(default)]
    pub name: String,
    /// Credit weight. Accepts a JSON number or a quoted decimal string.
    pub credits: Decimal,
}

/// JSON object read into a `Vec` so key order survives.
struct Ordered<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Ordered<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OrderedVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedVisitor<V> {
            type Value = Ordered<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON object")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, V>()? {
                    entries.push((key, value));
                }
                Ok(Ordered(entries))
            }
        }

        deserializer.deserialize_map(OrderedVisitor(PhantomData))
    }
}

impl<'de> Deserialize<'de> for Catalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Ordered(branches) = Ordered::<Ordered<Vec<Course>>>::deserialize(deserializer)?;
        let branches = branches
            .into_iter()
            .map(|(code, Ordered(semesters))| BranchCourses {
                code,
                semesters: semesters
                    .into_iter()
                    .map(|(label, courses)| Semester { label, courses })
                    .collect(),
            })
            .collect();
        Ok(Catalog { branches })
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.branches.len()))?;
        for branch in &self.branches {
            map.serialize_entry(&branch.code, &SemesterMap(&branch.semesters))?;
        }
        map.end()
    }
}

struct SemesterMap<'a>(&'a [Semester]);

impl Serialize for SemesterMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for semester in self.0 {
            map.serialize_entry(&semester.label, &semester.courses)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_key_order_preserved() {
        let json = r#"{
            "ME": { "2": [], "1": [] },
            "CSE": { "10": [], "9": [] }
        }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let codes: Vec<&str> = catalog.branches.iter().map(|b| b.code.as_str()).collect();
        assert_eq!(codes, vec!["ME", "CSE"]);
        let labels: Vec<&str> = catalog.branches[1]
            .semesters
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["10", "9"]);
    }

    #[test]
    fn test_credits_number_or_string() {
        let json = r#"{ "CSE": { "1": [
            { "code": "CS101", "name": "Intro", "credits": 6 },
            { "code": "MA101", "name": "Maths", "credits": "4.5" }
        ] } }"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let courses = &catalog.branches[0].semesters[0].courses;
        assert_eq!(courses[0].credits, dec!(6));
        assert_eq!(courses[1].credits, dec!(4.5));
    }

    #[test]
    fn test_serialize_keeps_shape() {
        let json = r#"{"EE":{"1":[{"code":"EE101","name":"Circuits","credits":"8"}]}}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        let back = serde_json::to_string(&catalog).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_not_an_object() {
        assert!(serde_json::from_str::<Catalog>("[1, 2]").is_err());
    }
}
