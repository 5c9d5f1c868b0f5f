pub mod diagnostic;
pub mod file_id;
pub mod host_fs;
pub mod semver;

pub use diagnostic::{Diagnostic, Severity};
pub use file_id::FileId;
pub use host_fs::{HostFs, NativeFs};
pub use semver::SemanticVersion;
