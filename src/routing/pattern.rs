//! Path patterns: literal segments, `:name` parameters and a trailing `*`.

use std::collections::BTreeMap;
use std::fmt;

use super::RouteError;

/// Parameters captured by a match. A trailing splat is stored under `*`.
pub type Params = BTreeMap<String, String>;

/// Key under which a splat capture is stored.
pub const SPLAT: &str = "*";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
    Splat,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    pub fn parse(raw: &str) -> Result<Self, RouteError> {
        let parts: Vec<&str> = split(raw).collect();
        let mut segments = Vec::with_capacity(parts.len());

        for (i, part) in parts.iter().enumerate() {
            let segment = if *part == SPLAT {
                if i + 1 != parts.len() {
                    return Err(RouteError::InvalidPattern {
                        pattern: raw.to_string(),
                        reason: "`*` must be the last segment".to_string(),
                    });
                }
                Segment::Splat
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(RouteError::InvalidPattern {
                        pattern: raw.to_string(),
                        reason: "parameter without a name".to_string(),
                    });
                }
                if segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(existing) if existing == name))
                {
                    return Err(RouteError::InvalidPattern {
                        pattern: raw.to_string(),
                        reason: format!("parameter `{name}` declared twice"),
                    });
                }
                Segment::Param(name.to_string())
            } else {
                Segment::Literal((*part).to_string())
            };
            segments.push(segment);
        }

        Ok(Self { segments })
    }

    /// `child` resolved under `self`. Child paths are always relative.
    pub fn join(&self, child: &str) -> Result<Self, RouteError> {
        if matches!(self.segments.last(), Some(Segment::Splat)) {
            return Err(RouteError::InvalidPattern {
                pattern: format!("{self}/{child}"),
                reason: "cannot nest under a `*` route".to_string(),
            });
        }
        let joined = format!("{}/{}", self, child.trim_start_matches('/'));
        Self::parse(&joined)
    }

    /// Match a concrete path, capturing parameters.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = split(path).collect();
        let mut params = Params::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Splat => {
                    params.insert(SPLAT.to_string(), parts.get(i..)?.join("/"));
                    return Some(params);
                }
                Segment::Literal(literal) => {
                    if parts.get(i) != Some(&literal.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(i)?;
                    params.insert(name.clone(), (*value).to_string());
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }

    /// The pattern with parameter names erased.
    ///
    /// Two patterns with the same shape match exactly the same paths.
    pub fn shape(&self) -> String {
        let parts: Vec<&str> = self
            .segments
            .iter()
            .map(|s| match s {
                Segment::Literal(literal) => literal.as_str(),
                Segment::Param(_) => ":",
                Segment::Splat => SPLAT,
            })
            .collect();
        format!("/{}", parts.join("/"))
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            match segment {
                Segment::Literal(literal) => write!(f, "/{literal}")?,
                Segment::Param(name) => write!(f, "/:{name}")?,
                Segment::Splat => f.write_str("/*")?,
            }
        }
        Ok(())
    }
}

fn split(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|part| !part.is_empty())
}
