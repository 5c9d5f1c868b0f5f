mod cli;

use std::{
	env::current_exe,
	fs, process,
	rc::Rc,
	sync::{
		atomic::{AtomicU8, Ordering},
		Arc,
	},
};

use cli::flags::Langc;
use lang_abstractions::{file_id::FileTable, host_fs::NativeFs, FileId};
use lang_core::{compile_state::CompileState, context::Context, context::ContextKind, driver::ParserDriver, operator_lut::OperatorLut, source_manager::IncludeSet};
use tracing::{Level, Subscriber};
use tracing_appender::{non_blocking::WorkerGuard, rolling::RollingFileAppender};
use tracing_subscriber::{
	fmt::{layer, writer::MakeWriterExt},
	prelude::*,
	registry::LookupSpan,
	EnvFilter, Layer, Registry,
};

/// Entry point for the language front-end core's CLI harness.
fn main() {
	let cmd = Langc::from_env_or_exit();

	let default_logging_layer = create_default_logging_layer::<Registry>(&cmd);
	let mut layers = if let Some((layer, _guard)) = default_logging_layer { vec![layer] } else { vec![] };
	layers.push(tracing_subscriber::fmt::layer().with_filter(EnvFilter::from_default_env()).boxed());

	let subscriber = Registry::default().with(layers);
	tracing::subscriber::set_global_default(subscriber).expect("unable to set global tracing subscriber");

	install_ctrlc_handler();

	match run(&cmd) {
		Ok(exit_code) => process::exit(exit_code),
		Err(err) => {
			eprintln!("{err:#}");
			process::exit(1);
		}
	}
}

/// Reads and processes every source file named on the command line. Errors
/// reading a file are fatal (CLI-boundary [`anyhow::Error`]); per-file
/// diagnostics are reported but do not abort the remaining files.
fn run(cmd: &Langc) -> anyhow::Result<i32> {
	if cmd.path.is_empty() {
		anyhow::bail!("no source files given");
	}

	let files = FileTable::new();
	let operators = Rc::new(OperatorLut::new());
	let mut root_state = CompileState::new();
	if let Some(width) = cmd.tab_stop {
		let mut next = (*root_state).clone();
		next.tab_stop_width = width;
		root_state = Rc::new(next);
	}

	let fs = NativeFs;
	let mut exit_code = 0;
	for path in &cmd.path {
		let source = fs::read_to_string(path).map_err(|err| anyhow::anyhow!("{}: {err}", path.display()))?;

		let file = files.intern(path);
		let base_dir = path.parent().map(std::path::Path::to_path_buf).unwrap_or_default();
		if !process_source(&source, file, &base_dir, &files, &fs, Rc::clone(&root_state), Rc::clone(&operators)) {
			exit_code = 1;
		}
	}

	Ok(exit_code)
}

/// Runs `source` through [`ParserDriver::run`], which recognizes `[[ ... ]]`
/// directives inline as it tokenizes (splicing any `source`/`asset` effect in
/// immediately), then reports the diagnostics collected along the way.
/// Returns `false` if any error-severity diagnostic was reported.
fn process_source(source: &str, file: FileId, base_dir: &std::path::Path, files: &FileTable, fs: &NativeFs, state: Rc<CompileState>, operators: Rc<OperatorLut>) -> bool {
	let root = Context::new_root(ContextKind::Source, state);
	let mut driver = ParserDriver::new(root);
	let mut includes = IncludeSet::new();

	let tokens = driver.run(source, file, base_dir, files, fs, &operators, &mut includes);
	tracing::info!(token_count = tokens.len(), diagnostic_count = driver.diagnostics.len(), "processed source file");

	let mut had_error = false;
	for diagnostic in &driver.diagnostics {
		println!("{:?} [{}] {}:{}: {}", diagnostic.severity, diagnostic.category, diagnostic.location.line, diagnostic.location.column, diagnostic.message);
		if diagnostic.severity == lang_abstractions::diagnostic::Severity::Error {
			had_error = true;
		}
	}

	!had_error
}

/// Retrieves the default logging layer based on the presence of the '`--logpath`' CLI argument.
fn create_default_logging_layer<S>(cmd: &Langc) -> Option<(Box<dyn Layer<S> + Send + Sync>, WorkerGuard)>
where
	S: Subscriber,
	for<'a> S: LookupSpan<'a>,
{
	let default_level = String::from("debug");
	let logpath = cmd.logpath.as_ref()?;
	let loglevel = cmd.loglevel.as_ref().unwrap_or(&default_level).parse::<Level>().unwrap_or(Level::DEBUG);

	match fs::metadata(logpath) {
		Ok(ref pathinfo) if pathinfo.is_dir() => {
			let file_writer = RollingFileAppender::new(tracing_appender::rolling::Rotation::NEVER, logpath, format!("{}.log", get_logfile_stem()));
			let (non_blocking, guard) = tracing_appender::non_blocking(file_writer);
			let layer = layer().with_writer(non_blocking.with_max_level(loglevel)).boxed();

			Some((layer, guard))
		}
		_ => None,
	}
}

/// Returns a log filename stem (a filename without an extension).
fn get_logfile_stem() -> String {
	let default_name = String::from("langc");
	current_exe().ok().and_then(|path| path.file_stem().map(|s| s.to_os_string()).and_then(|s| s.into_string().ok())).unwrap_or(default_name)
}

/// Installs a handler that cancels cleanly on the first 'Ctrl-C' and forces
/// the process down on a second, matching the teacher's double-press idiom.
fn install_ctrlc_handler() {
	let count = Arc::new(AtomicU8::new(0));

	let result = ctrlc::set_handler(move || {
		let prev_count = count.fetch_add(1, Ordering::Relaxed);
		if prev_count == 0 {
			eprintln!();
			eprintln!("(To forcibly exit, press 'Ctrl+C' again)");
		} else {
			process::exit(-1);
		}
	});

	if let Err(err) = result {
		tracing::debug!(%err, "'Ctrl-C' handling is not available for this platform");
	}
}
