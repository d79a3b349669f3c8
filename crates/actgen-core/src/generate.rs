//! End-to-end generation: validate options, discover inputs, render and
//! write (or compare) one file per action group.

use crate::codegen::render_root;
use crate::discover::{discover, Discovery};
use crate::error::{ActgenError, Result};
use crate::io;
use crate::schema::DataRoot;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Write generated files into the output directory.
    #[default]
    Write,
    /// Compare generated files with the output directory without writing.
    Check,
}

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub out_dir: Option<PathBuf>,
    pub inputs: Vec<PathBuf>,
    pub mode: Mode,
}

impl GenerateOptions {
    /// Check the arguments before touching any input. Returns the output directory.
    pub fn validate(&self) -> Result<&Path> {
        let out_dir = self.out_dir.as_deref().ok_or(ActgenError::MissingOutDir)?;
        if out_dir.exists() && !out_dir.is_dir() {
            return Err(ActgenError::OutDirNotDirectory(out_dir.to_path_buf()));
        }
        if self.inputs.is_empty() {
            return Err(ActgenError::NoInputs);
        }
        Ok(out_dir)
    }

    /// Validate the arguments and expand the inputs into definition files.
    ///
    /// Nothing is read or written yet; callers can inspect (and log) the
    /// discovery before committing to [`Plan::execute`].
    pub fn plan(&self) -> Result<Plan> {
        let out_dir = self.validate()?.to_path_buf();
        Ok(Plan {
            out_dir,
            mode: self.mode,
            discovery: discover(&self.inputs),
        })
    }
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    Written,
    UpToDate,
    Stale,
    Missing,
}

impl FileStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FileStatus::Written => "written",
            FileStatus::UpToDate => "up_to_date",
            FileStatus::Stale => "stale",
            FileStatus::Missing => "missing",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FileStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FileOutcome {
    /// Output path (inside the output directory).
    pub path: PathBuf,
    pub group: String,
    /// Definition file the group came from.
    pub source: PathBuf,
    pub status: FileStatus,
    /// Rendered text, kept for diffing in check mode.
    #[serde(skip)]
    pub content: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub mode: Mode,
    pub out_dir: PathBuf,
    pub discovery: Discovery,
    pub files: Vec<FileOutcome>,
}

impl Report {
    /// True when no output is stale or missing.
    pub fn is_clean(&self) -> bool {
        self.files
            .iter()
            .all(|f| matches!(f.status, FileStatus::Written | FileStatus::UpToDate))
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.files.iter().filter(|f| f.status == status).count()
    }
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// Validated options plus the definition files they resolved to.
#[derive(Debug, Clone)]
pub struct Plan {
    pub out_dir: PathBuf,
    pub mode: Mode,
    pub discovery: Discovery,
}

impl Plan {
    /// Render every definition file, one at a time, and write or compare its outputs.
    ///
    /// Stops at the first unreadable or malformed file. Outputs already written
    /// for earlier files are left in place.
    pub fn execute(self) -> Result<Report> {
        if self.discovery.files.is_empty() {
            return Err(ActgenError::NoInputFiles);
        }

        let mut files = Vec::new();
        for source in &self.discovery.files {
            let root = DataRoot::load(source)?;
            for generated in render_root(&root) {
                let path = self.out_dir.join(&generated.path);
                let status = match self.mode {
                    Mode::Write => {
                        io::replace_file(&path, &generated.content)?;
                        FileStatus::Written
                    }
                    Mode::Check => match io::read_existing(&path)? {
                        None => FileStatus::Missing,
                        Some(existing) if existing == generated.content => FileStatus::UpToDate,
                        Some(_) => FileStatus::Stale,
                    },
                };
                files.push(FileOutcome {
                    path,
                    group: generated.group,
                    source: source.clone(),
                    status,
                    content: generated.content,
                });
            }
        }

        Ok(Report {
            mode: self.mode,
            out_dir: self.out_dir,
            discovery: self.discovery,
            files,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn run(opts: &GenerateOptions) -> Result<Report> {
        opts.plan()?.execute()
    }

    const POSTS: &str = r#"
actionGroups:
  post:
    actions:
      publish:
        payload:
          id: string
  comment:
    actions:
      add:
"#;

    fn setup() -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("defs/posts.yaml");
        std::fs::create_dir_all(input.parent().unwrap()).unwrap();
        std::fs::write(&input, POSTS).unwrap();
        (dir, input)
    }

    fn options(dir: &TempDir, input: PathBuf, mode: Mode) -> GenerateOptions {
        GenerateOptions {
            out_dir: Some(dir.path().join("out")),
            inputs: vec![input],
            mode,
        }
    }

    #[test]
    fn validate_requires_out_dir() {
        let opts = GenerateOptions {
            inputs: vec![PathBuf::from("a.yaml")],
            ..Default::default()
        };
        assert!(matches!(opts.validate(), Err(ActgenError::MissingOutDir)));
    }

    #[test]
    fn validate_rejects_file_as_out_dir() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("out");
        std::fs::write(&file, "").unwrap();
        let opts = GenerateOptions {
            out_dir: Some(file),
            inputs: vec![PathBuf::from("a.yaml")],
            ..Default::default()
        };
        assert!(matches!(
            opts.validate(),
            Err(ActgenError::OutDirNotDirectory(_))
        ));
    }

    #[test]
    fn validate_requires_inputs() {
        let opts = GenerateOptions {
            out_dir: Some(PathBuf::from("out")),
            ..Default::default()
        };
        assert!(matches!(opts.validate(), Err(ActgenError::NoInputs)));
    }

    #[test]
    fn no_discovered_files_is_an_error() {
        let dir = TempDir::new().unwrap();
        let opts = options(&dir, dir.path().join("missing.yaml"), Mode::Write);
        assert!(matches!(run(&opts), Err(ActgenError::NoInputFiles)));
    }

    #[test]
    fn plan_exposes_discovery_before_anything_is_written() {
        let (dir, input) = setup();
        let missing = dir.path().join("defs/gone.yaml");
        let opts = GenerateOptions {
            out_dir: Some(dir.path().join("out")),
            inputs: vec![missing.clone(), input.clone()],
            mode: Mode::Write,
        };

        let plan = opts.plan().unwrap();
        assert_eq!(plan.discovery.files, vec![input]);
        assert_eq!(plan.discovery.missing, vec![missing]);
        assert!(!dir.path().join("out").exists());

        let report = plan.execute().unwrap();
        assert_eq!(report.discovery.missing.len(), 1);
        assert_eq!(report.count(FileStatus::Written), 2);
    }

    #[test]
    fn status_names_match_json_report() {
        for status in [
            FileStatus::Written,
            FileStatus::UpToDate,
            FileStatus::Stale,
            FileStatus::Missing,
        ] {
            let json = serde_json::to_value(status).unwrap();
            assert_eq!(json, status.to_string());
        }
        assert_eq!(FileStatus::UpToDate.to_string(), "up_to_date");
    }

    #[test]
    fn write_mode_creates_out_dir_and_one_file_per_group() {
        let (dir, input) = setup();
        let report = run(&options(&dir, input, Mode::Write)).unwrap();

        assert_eq!(report.count(FileStatus::Written), 2);
        let out = dir.path().join("out");
        assert!(out.join("post.actions.ts").exists());
        assert!(out.join("comment.actions.ts").exists());

        let post = std::fs::read_to_string(out.join("post.actions.ts")).unwrap();
        assert!(post.contains("const publishFn = (id: string): IPublishAction"));
        assert!(post.ends_with("};\n"));
    }

    #[test]
    fn check_mode_reports_missing_then_up_to_date_then_stale() {
        let (dir, input) = setup();

        let before = run(&options(&dir, input.clone(), Mode::Check)).unwrap();
        assert_eq!(before.count(FileStatus::Missing), 2);
        assert!(!before.is_clean());
        assert!(!dir.path().join("out").exists(), "check mode must not write");

        run(&options(&dir, input.clone(), Mode::Write)).unwrap();
        let after = run(&options(&dir, input.clone(), Mode::Check)).unwrap();
        assert_eq!(after.count(FileStatus::UpToDate), 2);
        assert!(after.is_clean());

        std::fs::write(dir.path().join("out/post.actions.ts"), "// edited\n").unwrap();
        let edited = run(&options(&dir, input, Mode::Check)).unwrap();
        assert_eq!(edited.count(FileStatus::Stale), 1);
        assert_eq!(edited.count(FileStatus::UpToDate), 1);
    }

    #[test]
    fn malformed_input_stops_the_run() {
        let (dir, input) = setup();
        let broken = dir.path().join("defs/broken.json");
        std::fs::write(&broken, "{").unwrap();

        let opts = GenerateOptions {
            out_dir: Some(dir.path().join("out")),
            inputs: vec![input, broken],
            mode: Mode::Write,
        };
        let err = run(&opts).unwrap_err();
        assert!(matches!(err, ActgenError::Parse { .. }));
        // Earlier file's outputs stay on disk.
        assert!(dir.path().join("out/post.actions.ts").exists());
    }
}
