use std::path::PathBuf;

xflags::xflags! {
	src "./src/cli/flags.rs"

	/// Command-line harness for the language front-end core: tokenizes and
	/// runs the directive-driven parser driver over a set of source files,
	/// printing the diagnostics that result.
	cmd langc {
		/// One or more source files to process.
		repeated path: PathBuf

		/// Overrides the initial tab-stop width (default 4).
		optional --tab-stop width: u32

		/// Optional path to a folder where a log file will be written.
		optional --logpath path: PathBuf

		/// Optional log level to apply when writing to the log file. Defaults to 'debug'.
		optional --loglevel level: String
	}
}
// generated start
// The following code is generated by `xflags` macro.
// Run `env UPDATE_XFLAGS=1 cargo build` to regenerate.
#[derive(Debug)]
pub struct Langc {
    pub path: Vec<PathBuf>,
    pub tab_stop: Option<u32>,
    pub logpath: Option<PathBuf>,
    pub loglevel: Option<String>,
}

impl Langc {
    #[allow(dead_code)]
    pub fn from_env_or_exit() -> Self {
        Self::from_env_or_exit_()
    }

    #[allow(dead_code)]
    pub fn from_env() -> xflags::Result<Self> {
        Self::from_env_()
    }

    #[allow(dead_code)]
    pub fn from_vec(args: Vec<std::ffi::OsString>) -> xflags::Result<Self> {
        Self::from_vec_(args)
    }
}
// generated end
