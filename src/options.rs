use std::ffi::OsString;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Options for temporary file paths.
///
/// `name` and `extension` are mutually exclusive, supplying both makes
/// composing the path fail with `Error::InvalidOptions`.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileOptions {
    /// File extension, a single leading dot is optional.
    pub extension: Option<String>,

    /// File name, used verbatim inside a freshly created directory. An empty
    /// name counts as absent.
    pub name: Option<String>,
}

impl FileOptions {
    pub fn extension(extension: impl Into<String>) -> Self {
        Self {
            extension: Some(extension.into()),
            name: None,
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            extension: None,
            name: Some(name.into()),
        }
    }

    pub(crate) fn kind(&self) -> Result<FileKind<'_>> {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => {
                if self.extension.is_some() {
                    return Err(Error::InvalidOptions);
                }

                Ok(FileKind::Named(name))
            }
            _ => Ok(FileKind::Random(self.extension.as_deref())),
        }
    }
}

/// What a validated `FileOptions` resolves to.
#[derive(Debug, PartialEq)]
pub(crate) enum FileKind<'a> {
    /// A verbatim name inside a new directory.
    Named(&'a str),
    /// A random name plus an optional extension.
    Random(Option<&'a str>),
}

/// Appends `.extension` to `name`, stripping at most one leading dot from the
/// extension first. `..png` keeps one of its dots.
pub(crate) fn push_extension(name: &mut OsString, extension: &str) {
    let extension = extension.strip_prefix('.').unwrap_or(extension);

    name.push(".");
    name.push(extension);
}

/// Options for temporary directories.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DirectoryOptions {
    /// Prepended to the random part of the directory name, handy for spotting
    /// the directories a test created.
    pub prefix: String,
}

impl DirectoryOptions {
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_extension(extension: &str) -> String {
        let mut name = OsString::from("abc");
        push_extension(&mut name, extension);
        name.into_string().unwrap()
    }

    #[test]
    fn extension_normalization() {
        for (input, want) in [
            ("png", "abc.png"),
            (".png", "abc.png"),
            ("tar.gz", "abc.tar.gz"),
            ("", "abc."),
            (".", "abc."),
        ] {
            assert_eq!(with_extension(input), want, "extension {input:?}");
        }
    }

    // Only one leading dot is ever stripped, so a doubled dot survives.
    // Kept for compatibility, nothing should depend on it.
    #[test]
    fn double_leading_dot_quirk() {
        assert_eq!(with_extension("..png"), "abc..png");
    }

    #[test]
    fn kind() {
        assert_eq!(
            FileOptions::default().kind().unwrap(),
            FileKind::Random(None)
        );
        assert_eq!(
            FileOptions::extension("png").kind().unwrap(),
            FileKind::Random(Some("png"))
        );
        assert_eq!(
            FileOptions::name("custom-name.md").kind().unwrap(),
            FileKind::Named("custom-name.md")
        );

        // empty name is no name at all
        let options = FileOptions {
            extension: Some("md".to_string()),
            name: Some(String::new()),
        };
        assert_eq!(options.kind().unwrap(), FileKind::Random(Some("md")));
    }

    #[test]
    fn name_and_extension_conflict() {
        for extension in [".ext", "ext", ""] {
            let options = FileOptions {
                extension: Some(extension.to_string()),
                name: Some("custom-name.md".to_string()),
            };

            assert!(
                matches!(options.kind(), Err(Error::InvalidOptions)),
                "extension {extension:?}"
            );
        }
    }

    #[test]
    fn deserialize() {
        let options: FileOptions = serde_yaml::from_str("extension: .png").unwrap();
        assert_eq!(options, FileOptions::extension(".png"));

        let options: DirectoryOptions = serde_yaml::from_str("prefix: p_").unwrap();
        assert_eq!(options, DirectoryOptions::prefix("p_"));

        assert!(serde_yaml::from_str::<FileOptions>("prefix: p_").is_err());
    }
}
