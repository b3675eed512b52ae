//! Minimal Recursion Semantics records.

use crate::lnk::Lnk;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Role holding an EP's intrinsic variable.
pub const INTRINSIC_ROLE: &str = "ARG0";
/// Role holding a quantifier's restriction; its presence marks an EP as a quantifier.
pub const RESTRICTION_ROLE: &str = "RSTR";
/// Role holding a quantifier's body.
pub const BODY_ROLE: &str = "BODY";
/// Role holding a constant argument.
pub const CONSTANT_ROLE: &str = "CARG";
/// EDS role linking a quantifier to the node it binds.
pub const BOUND_VARIABLE_ROLE: &str = "BV";

/// An elementary predication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ep {
    /// Normalized predicate symbol.
    pub predicate: String,
    /// Scope label (a handle variable).
    pub label: String,
    /// Arguments by role, in source order. Values are variables, or a string for `CARG`.
    pub args: IndexMap<String, String>,
    pub lnk: Lnk,
    pub surface: Option<String>,
}

impl Ep {
    pub fn new(predicate: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            label: label.into(),
            args: IndexMap::new(),
            lnk: Lnk::None,
            surface: None,
        }
    }

    /// Builder-style argument insertion.
    pub fn with_arg(mut self, role: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(role.into(), value.into());
        self
    }

    /// The intrinsic variable (`ARG0`).
    pub fn iv(&self) -> Option<&str> {
        self.args.get(INTRINSIC_ROLE).map(String::as_str)
    }

    /// The constant argument (`CARG`).
    pub fn carg(&self) -> Option<&str> {
        self.args.get(CONSTANT_ROLE).map(String::as_str)
    }

    /// Whether this EP is a quantifier (has a `RSTR` argument).
    pub fn is_quantifier(&self) -> bool {
        self.args.contains_key(RESTRICTION_ROLE)
    }
}

/// A handle constraint such as `h0 qeq h1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleConstraint {
    pub hi: String,
    pub relation: String,
    pub lo: String,
}

impl HandleConstraint {
    pub fn qeq(hi: impl Into<String>, lo: impl Into<String>) -> Self {
        Self {
            hi: hi.into(),
            relation: "qeq".to_string(),
            lo: lo.into(),
        }
    }
}

/// An individual constraint such as `e2 topic x4`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndividualConstraint {
    pub left: String,
    pub relation: String,
    pub right: String,
}

/// A Minimal Recursion Semantics structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mrs {
    /// Top handle.
    pub top: Option<String>,
    /// Index variable.
    pub index: Option<String>,
    pub rels: Vec<Ep>,
    pub hcons: Vec<HandleConstraint>,
    pub icons: Vec<IndividualConstraint>,
    /// Properties of every variable that carries any, keyed by variable.
    pub variables: IndexMap<String, IndexMap<String, String>>,
    pub lnk: Lnk,
    pub surface: Option<String>,
}

impl Mrs {
    /// Properties recorded for `var`.
    pub fn properties(&self, var: &str) -> Option<&IndexMap<String, String>> {
        self.variables.get(var)
    }

    /// Merge properties for `var`; earlier values win on conflict.
    pub fn add_properties<I>(&mut self, var: &str, properties: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let entry = self.variables.entry(var.to_string()).or_default();
        for (key, value) in properties {
            entry.entry(key).or_insert(value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantifier_detection() {
        let q = Ep::new("_the_q", "h4")
            .with_arg("ARG0", "x3")
            .with_arg("RSTR", "h5")
            .with_arg("BODY", "h6");
        let dog = Ep::new("_dog_n_1", "h7").with_arg("ARG0", "x3");
        assert!(q.is_quantifier());
        assert!(!dog.is_quantifier());
        assert_eq!(q.iv(), Some("x3"));
        assert_eq!(dog.carg(), None);
    }

    #[test]
    fn test_add_properties_keeps_first_value() {
        let mut mrs = Mrs::default();
        mrs.add_properties("x3", [("NUM".to_string(), "sg".to_string())]);
        mrs.add_properties(
            "x3",
            [
                ("NUM".to_string(), "pl".to_string()),
                ("PERS".to_string(), "3".to_string()),
            ],
        );
        let props = mrs.properties("x3").unwrap();
        assert_eq!(props.get("NUM").map(String::as_str), Some("sg"));
        assert_eq!(props.get("PERS").map(String::as_str), Some("3"));
    }
}
