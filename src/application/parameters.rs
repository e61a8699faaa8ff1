//! Parameter Resolver
//!
//! Precedence, lowest to highest: template-context defaults, param file,
//! explicit `-p` flags.

use std::path::Path;

use tracing::debug;

use crate::domain::ports::FileSystem;
use crate::domain::services::parse_param_lines;
use crate::domain::value_objects::{Param, ParameterSet};
use crate::error::{DeckhandError, DeckhandResult};

pub struct ParameterResolver<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> ParameterResolver<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Merge the param file (if any) and explicit params
    ///
    /// An empty path is treated as "no file".
    pub fn resolve(&self, param_file: Option<&Path>, explicit: &[Param]) -> DeckhandResult<ParameterSet> {
        let mut params = ParameterSet::new();

        if let Some(path) = param_file.filter(|p| !p.as_os_str().is_empty()) {
            let content = self.fs.read(path).map_err(|e| DeckhandError::FileRead {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
            let entries = parse_param_lines(&content);
            debug!(path = %path.display(), entries = entries.len(), "loaded param file");
            params = params.layered(entries);
        }

        Ok(params.layered(explicit.iter().map(|p| (p.key.clone(), p.value.clone()))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::MemoryFs;
    use std::path::PathBuf;

    fn param(s: &str) -> Param {
        s.parse().unwrap()
    }

    #[test]
    fn no_sources_is_empty_set() {
        let resolver = ParameterResolver::new(MemoryFs::default());
        let params = resolver.resolve(None, &[]).unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn empty_path_means_no_file() {
        let resolver = ParameterResolver::new(MemoryFs::default());
        let params = resolver.resolve(Some(Path::new("")), &[param("A=1")]).unwrap();
        assert_eq!(params.get("A"), Some("1"));
    }

    #[test]
    fn explicit_params_override_file() {
        let fs = MemoryFs::default().with_file("prod.env", "A=file\nB=file\n");
        let resolver = ParameterResolver::new(fs);

        let params = resolver
            .resolve(Some(Path::new("prod.env")), &[param("A=flag")])
            .unwrap();

        assert_eq!(params.get("A"), Some("flag"));
        assert_eq!(params.get("B"), Some("file"));
    }

    #[test]
    fn unreadable_file_is_file_read_error() {
        let resolver = ParameterResolver::new(MemoryFs::default());
        let err = resolver
            .resolve(Some(Path::new("missing.env")), &[])
            .unwrap_err();
        assert!(matches!(err, DeckhandError::FileRead { ref path, .. } if path == &PathBuf::from("missing.env")));
    }
}
