use roster_models::RosterArtifact;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where an artifact ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Stdout => write!(f, "stdout"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Writes the artifact content unchanged.
///
/// `-` means stdout; no path means the artifact's own filename in the
/// current directory.
pub fn write_artifact(
    artifact: &RosterArtifact,
    output: Option<&Path>,
) -> anyhow::Result<Destination> {
    match output {
        Some(path) if path == Path::new("-") => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(artifact.content.as_bytes())?;
            stdout.flush()?;
            Ok(Destination::Stdout)
        }
        Some(path) => {
            fs::write(path, &artifact.content)?;
            Ok(Destination::File(path.to_path_buf()))
        }
        None => {
            let path = PathBuf::from(&artifact.filename);
            fs::write(&path, &artifact.content)?;
            Ok(Destination::File(path))
        }
    }
}
