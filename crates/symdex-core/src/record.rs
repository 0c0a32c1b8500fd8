//! Symbol records: one documented entity per record.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A documented entity in the search corpus.
///
/// Serializes with the short keys used by Javadoc search-index files
/// (`p`, `c`, `l`, `url`) and accepts the long names as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolRecord {
    /// Dot-separated namespace path; empty for top-level entities.
    #[serde(rename = "p", alias = "package", default)]
    pub package_name: String,
    /// Enclosing type name.
    #[serde(rename = "c", alias = "container", default)]
    pub container_name: String,
    /// Displayed signature, including parameter types for methods.
    #[serde(rename = "l", alias = "label")]
    pub label: String,
    /// Opaque locator; `None` marks the record as a container itself.
    #[serde(rename = "url", skip_serializing_if = "Option::is_none", default)]
    pub reference: Option<String>,
}

impl SymbolRecord {
    pub fn new(
        package_name: impl Into<String>,
        container_name: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            package_name: package_name.into(),
            container_name: container_name.into(),
            label: label.into(),
            reference: None,
        }
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    pub fn is_container(&self) -> bool {
        self.reference.is_none()
    }

    /// `package.Container.label`, skipping empty parts.
    pub fn qualified_name(&self) -> String {
        [
            self.package_name.as_str(),
            self.container_name.as_str(),
            self.label.as_str(),
        ]
        .iter()
        .filter(|part| !part.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(".")
    }

    /// Documentation-relative link, e.g. `a/b/X.html#foo()`.
    ///
    /// Records without a container (package entries) link to the package
    /// summary page.
    pub fn href(&self) -> String {
        let mut href = String::new();
        if !self.package_name.is_empty() {
            href.push_str(&self.package_name.replace('.', "/"));
            href.push('/');
        }
        if self.container_name.is_empty() {
            href.push_str("package-summary.html");
        } else {
            href.push_str(&self.container_name);
            href.push_str(".html");
        }
        if let Some(reference) = &self.reference {
            href.push('#');
            href.push_str(reference);
        }
        href
    }

    /// Percent-decoded locator: `%3Cinit%3E()` becomes `<init>()`.
    pub fn decoded_reference(&self) -> Option<Cow<'_, str>> {
        self.reference
            .as_deref()
            .map(|raw| urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw)))
    }
}
