use std::fmt;

/// A 4-component assembly version (major.minor.build.revision).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyVersion {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

impl AssemblyVersion {
    /// Parses a dotted 4-part non-negative integer version string.
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 4 {
            return None;
        }

        let mut components = [0u32; 4];
        for (i, part) in parts.iter().enumerate() {
            components[i] = part.parse().ok()?;
        }

        Some(Self {
            major: components[0],
            minor: components[1],
            build: components[2],
            revision: components[3],
        })
    }

    pub fn with_next_revision(&self) -> Self {
        Self {
            revision: self.revision + 1,
            ..*self
        }
    }
}

impl fmt::Display for AssemblyVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}

/// Computes the replacement payload for a version attribute.
///
/// A parseable payload keeps major/minor/build and bumps the revision by one.
/// Anything else collapses to the literal default "1.0.0.0" with no
/// increment, matching how unparseable versions have always been handled.
pub fn next_payload(payload: &str) -> String {
    match AssemblyVersion::parse(payload) {
        Some(version) => version.with_next_revision().to_string(),
        None => AssemblyVersion {
            major: 1,
            minor: 0,
            build: 0,
            revision: 0,
        }
        .to_string(),
    }
}
