//! License catalog and copyright lines
//!
//! License texts are Tera templates rendered with a single `copyright`
//! value. The `none` license has an empty text, which renders to an empty
//! LICENSE file.

use chrono::{Datelike, Local};
use rust_embed::RustEmbed;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Embedded license texts
#[derive(RustEmbed)]
#[folder = "licenses/"]
struct LicenseTexts;

/// A license selected for a project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    /// Display name (e.g. "MIT")
    pub name: String,
    /// Names accepted when looking the license up
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Short notice placed at the top of generated source files
    #[serde(default)]
    pub header: String,
    /// Full license text template; may be empty
    #[serde(default)]
    pub text: String,
}

impl License {
    /// A license with the given name, no header and no text
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the license text template
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set the per-file header
    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = header.into();
        self
    }

    /// Whether `input` names this license (case-insensitive)
    pub fn matches(&self, input: &str) -> bool {
        self.name.eq_ignore_ascii_case(input)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(input))
    }
}

/// Supplies license definitions by name
pub trait LicenseProvider {
    /// Look up a license by name or alias
    fn license(&self, name: &str) -> Result<License>;
}

struct CatalogEntry {
    name: &'static str,
    aliases: &'static [&'static str],
    file: Option<&'static str>,
    header: &'static str,
}

const MIT_HEADER: &str = "Use of this source code is governed by the MIT license\nthat can be found in the LICENSE file.";

const BSD_HEADER: &str = "Use of this source code is governed by a BSD-style license\nthat can be found in the LICENSE file.";

const ISC_HEADER: &str = "Use of this source code is governed by the ISC license\nthat can be found in the LICENSE file.";

const APACHE_HEADER: &str = "Licensed under the Apache License, Version 2.0 (the \"License\");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an \"AS IS\" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.";

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        name: "none",
        aliases: &["", "empty"],
        file: None,
        header: "",
    },
    CatalogEntry {
        name: "MIT",
        aliases: &["mit", "mit-license"],
        file: Some("mit.tera"),
        header: MIT_HEADER,
    },
    CatalogEntry {
        name: "BSD-2-Clause",
        aliases: &["bsd-2", "freebsd", "simplified-bsd", "2-clause-bsd"],
        file: Some("bsd-2-clause.tera"),
        header: BSD_HEADER,
    },
    CatalogEntry {
        name: "BSD-3-Clause",
        aliases: &["bsd", "bsd-3", "newbsd", "new-bsd", "3-clause-bsd"],
        file: Some("bsd-3-clause.tera"),
        header: BSD_HEADER,
    },
    CatalogEntry {
        name: "ISC",
        aliases: &["isc-license"],
        file: Some("isc.tera"),
        header: ISC_HEADER,
    },
    CatalogEntry {
        name: "Apache-2.0",
        aliases: &["apache", "apache2", "apache 2.0", "apache-2", "apache license 2.0"],
        file: Some("apache-2.0.tera"),
        header: APACHE_HEADER,
    },
];

/// Licenses shipped with cligen
#[derive(Debug, Clone)]
pub struct LicenseCatalog {
    licenses: Vec<License>,
}

impl LicenseCatalog {
    /// Load the embedded catalog
    pub fn embedded() -> Result<Self> {
        let licenses = CATALOG
            .iter()
            .map(load_entry)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { licenses })
    }

    /// Find a license by name or alias
    pub fn find(&self, name: &str) -> Option<&License> {
        self.licenses.iter().find(|l| l.matches(name.trim()))
    }

    /// Canonical names of all licenses, in catalog order
    pub fn names(&self) -> Vec<&str> {
        self.licenses.iter().map(|l| l.name.as_str()).collect()
    }

    /// All licenses, in catalog order
    pub fn licenses(&self) -> &[License] {
        &self.licenses
    }
}

impl LicenseProvider for LicenseCatalog {
    fn license(&self, name: &str) -> Result<License> {
        self.find(name)
            .cloned()
            .ok_or_else(|| Error::unknown_license(name, self.names().join(", ")))
    }
}

fn load_entry(entry: &CatalogEntry) -> Result<License> {
    let text = match entry.file {
        Some(file) => {
            let data = LicenseTexts::get(file).ok_or_else(|| Error::template_not_found(file))?;
            String::from_utf8(data.data.into_owned()).map_err(|_| {
                Error::invalid_config(format!("Invalid UTF-8 in license text: {}", file))
            })?
        }
        None => String::new(),
    };

    Ok(License {
        name: entry.name.to_string(),
        aliases: entry.aliases.iter().map(|a| a.to_string()).collect(),
        header: entry.header.to_string(),
        text,
    })
}

/// Build the attribution line placed in LICENSE files and source headers.
///
/// `year` defaults to the current local year.
pub fn copyright_line(author: &str, year: Option<i32>) -> String {
    let year = year.unwrap_or_else(|| Local::now().year());
    let author = author.trim();
    if author.is_empty() {
        format!("Copyright © {}", year)
    } else {
        format!("Copyright © {} {}", year, author)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_loads_all_texts() {
        let catalog = LicenseCatalog::embedded().unwrap();
        assert_eq!(
            catalog.names(),
            vec!["none", "MIT", "BSD-2-Clause", "BSD-3-Clause", "ISC", "Apache-2.0"]
        );
        for license in catalog.licenses() {
            if license.name == "none" {
                assert!(license.text.is_empty());
                assert!(license.header.is_empty());
            } else {
                assert!(
                    license.text.contains("{{ copyright }}"),
                    "{} text lacks copyright placeholder",
                    license.name
                );
            }
        }
    }

    #[test]
    fn test_lookup_by_alias_case_insensitive() {
        let catalog = LicenseCatalog::embedded().unwrap();
        assert_eq!(catalog.license("mit").unwrap().name, "MIT");
        assert_eq!(catalog.license("Apache2").unwrap().name, "Apache-2.0");
        assert_eq!(catalog.license("bsd").unwrap().name, "BSD-3-Clause");
        assert_eq!(catalog.license("FreeBSD").unwrap().name, "BSD-2-Clause");
        assert_eq!(catalog.license(" none ").unwrap().name, "none");
    }

    #[test]
    fn test_unknown_license_lists_available() {
        let catalog = LicenseCatalog::embedded().unwrap();
        let err = catalog.license("wtfpl").unwrap_err();
        match err {
            Error::UnknownLicense { name, available } => {
                assert_eq!(name, "wtfpl");
                assert!(available.contains("MIT"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line("Jane Doe <jane@example.com>", Some(2021)),
            "Copyright © 2021 Jane Doe <jane@example.com>"
        );
        assert_eq!(copyright_line("  ", Some(2021)), "Copyright © 2021");
    }

    #[test]
    fn test_copyright_line_defaults_to_current_year() {
        let year = Local::now().year().to_string();
        assert!(copyright_line("Jane", None).contains(&year));
    }

    #[test]
    fn test_custom_license_builder() {
        let license = License::new("Proprietary")
            .with_text("All rights reserved. {{ copyright }}")
            .with_header("Internal use only.");
        assert!(license.matches("proprietary"));
        assert_eq!(license.header, "Internal use only.");
    }
}
