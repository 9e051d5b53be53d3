//! Embedded sample documents

const SAMPLES: &[(&str, &str)] = &[
    (
        "lean_roles_test.md",
        include_str!("../../../docs/samples/lean_roles_test.md"),
    ),
    (
        "complex_lean_doc.md",
        include_str!("../../../docs/samples/complex_lean_doc.md"),
    ),
    (
        "inline_roles_test.md",
        include_str!("../../../docs/samples/inline_roles_test.md"),
    ),
    (
        "semantic_structure_test.md",
        include_str!("../../../docs/samples/semantic_structure_test.md"),
    ),
];

/// Access to the sample documents by file name
pub struct Samples;

impl Samples {
    pub fn get(name: &str) -> Option<&'static str> {
        SAMPLES
            .iter()
            .find(|(sample, _)| *sample == name)
            .map(|(_, source)| *source)
    }

    pub fn names() -> impl Iterator<Item = &'static str> {
        SAMPLES.iter().map(|(name, _)| *name)
    }

    /// Every sample as `(file name, source)`, in a fixed order
    pub fn all() -> &'static [(&'static str, &'static str)] {
        SAMPLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_embedded() {
        assert_eq!(Samples::names().count(), 4);
        let source = Samples::get("lean_roles_test.md").unwrap();
        assert!(source.starts_with("# Lean Roles Test\n"));
        assert!(Samples::get("missing.md").is_none());
    }
}
