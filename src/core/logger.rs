//! Main logger implementation
//!
//! [`Logger`] takes a tagged call, renders it once and hands the line to every
//! sink whose threshold it clears, in a fixed order: memory, console, file,
//! then the halt check. Everything happens on the calling thread.

use super::{
    arg::{Abbreviation, Arg},
    backend::{BackendLevel, StructuredLogger},
    error::{Conclusion, LoggerError, Result},
    level::Level,
    line::LineKind,
    metrics::LoggerMetrics,
    options::Options,
    sink::{Record, Sink},
    template::interpolate,
    timestamp::DateFormat,
    trace::{BacktraceProbe, Frame, StackProbe},
};
use crate::appenders::{ConsoleAppender, FileAppender, MemoryAppender};
use chrono::{DateTime, Local};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Source of timestamps for rendered lines
pub type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

const HALT_BANNER: &str = " Process halt, triggered by the following path: ";

/// A format template, or several to be dispatched one after another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for Message {
    fn from(format: &str) -> Self {
        Message::One(format.to_string())
    }
}

impl From<String> for Message {
    fn from(format: String) -> Self {
        Message::One(format)
    }
}

impl From<&String> for Message {
    fn from(format: &String) -> Self {
        Message::One(format.clone())
    }
}

impl From<Vec<String>> for Message {
    fn from(formats: Vec<String>) -> Self {
        Message::Many(formats)
    }
}

impl From<Vec<&str>> for Message {
    fn from(formats: Vec<&str>) -> Self {
        Message::Many(formats.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for Message {
    fn from(formats: &[&str]) -> Self {
        Message::Many(formats.iter().map(|f| f.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Message {
    fn from(formats: [&str; N]) -> Self {
        Message::Many(formats.iter().map(|f| f.to_string()).collect())
    }
}

/// Options together with what is derived from them.
#[derive(Debug)]
struct Settings {
    options: Options,
    date_format: DateFormat,
    abbr: Abbreviation,
}

impl Settings {
    fn new(options: Options) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            date_format: DateFormat::new(&options.log_date_format)?,
            abbr: options.abbreviation(),
            options,
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            options: Options::default(),
            date_format: DateFormat::default(),
            abbr: Abbreviation::default(),
        }
    }
}

pub struct Logger {
    settings: RwLock<Arc<Settings>>,
    console: Mutex<Box<dyn Sink>>,
    memory: Mutex<MemoryAppender>,
    backend: Option<Box<dyn StructuredLogger>>,
    probe: Box<dyn StackProbe>,
    clock: Clock,
    metrics: LoggerMetrics,
    /// Set while the halt trail is being written
    halting: AtomicBool,
}

macro_rules! level_methods {
    ($($(#[$doc:meta])* $name:ident => $level:expr;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $name(&self, format: impl Into<Message>, args: &[Arg]) -> Result<Conclusion> {
                self.dispatch(&$level, format, args)
            }
        )*
    };
}

impl Logger {
    /// Logger with default options, writing to stdout and `/var/log/egg.log`.
    #[must_use]
    pub fn new() -> Self {
        Self::from_parts(Settings::default(), LoggerBuilder::new())
    }

    pub fn with_options(options: Options) -> Result<Self> {
        Self::builder().options(options).build()
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use eggshell::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .options(Options::default().print_level(Severity::Debug).file(Some("/tmp/egg.log")))
    ///     .console(ConsoleAppender::with_colors(true))
    ///     .build()
    ///     .unwrap();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    fn from_parts(settings: Settings, builder: LoggerBuilder) -> Self {
        Self {
            settings: RwLock::new(Arc::new(settings)),
            console: Mutex::new(
                builder
                    .console
                    .unwrap_or_else(|| Box::new(ConsoleAppender::new())),
            ),
            memory: Mutex::new(MemoryAppender::new()),
            backend: builder.backend,
            probe: builder.probe.unwrap_or_else(|| Box::new(BacktraceProbe)),
            clock: builder.clock.unwrap_or_else(|| Arc::new(Local::now)),
            metrics: LoggerMetrics::new(),
            halting: AtomicBool::new(false),
        }
    }

    fn settings(&self) -> Arc<Settings> {
        Arc::clone(&self.settings.read())
    }

    /// Snapshot of the effective options
    pub fn options(&self) -> Options {
        self.settings().options.clone()
    }

    /// Apply `change` to a copy of the current options and make the result
    /// effective if it validates. Returns the new effective options.
    ///
    /// ```
    /// use eggshell::prelude::*;
    ///
    /// let logger = Logger::new();
    /// let options = logger
    ///     .reconfigure(|o| o.log_print_level = Severity::Warning)
    ///     .unwrap();
    /// assert_eq!(options.log_print_level, Severity::Warning);
    /// assert_eq!(logger.options(), options);
    /// ```
    pub fn reconfigure(&self, change: impl FnOnce(&mut Options)) -> Result<Options> {
        let mut options = self.options();
        change(&mut options);
        let settings = Settings::new(options.clone())?;
        *self.settings.write() = Arc::new(settings);
        Ok(options)
    }

    /// Attach the structured backend that receives every message.
    pub fn set_backend(&mut self, backend: impl StructuredLogger + 'static) {
        self.backend = Some(Box::new(backend));
    }

    /// Log under any tag, e.g. one read from a command line.
    pub fn log(
        &self,
        level: impl Into<Level>,
        format: impl Into<Message>,
        args: &[Arg],
    ) -> Result<Conclusion> {
        self.dispatch(&level.into(), format, args)
    }

    /// Dispatch one call.
    ///
    /// Returns [`Conclusion::Fail`] for a single line and [`Conclusion::Skip`]
    /// when `format` held several lines. Errors are the unknown tag, a file
    /// sink without a path, and [`LoggerError::Halt`] once the halt threshold
    /// was reached and the trace written.
    ///
    /// ```
    /// use eggshell::prelude::*;
    ///
    /// let logger = Logger::with_options(Options::default().file(None::<String>).file_level(Severity::Emerg))
    ///     .unwrap();
    /// assert_eq!(logger.dispatch(&Level::Info, "hello %s", &[Arg::from("world")]).unwrap(), Conclusion::Fail);
    /// assert_eq!(logger.dispatch(&Level::Info, ["a", "b"], &[]).unwrap(), Conclusion::Skip);
    /// assert!(logger.dispatch(&Level::from("shout"), "?", &[]).is_err());
    /// ```
    pub fn dispatch(
        &self,
        level: &Level,
        format: impl Into<Message>,
        args: &[Arg],
    ) -> Result<Conclusion> {
        self.dispatch_message(level.as_str(), format.into(), args)
    }

    fn dispatch_message(&self, tag: &str, message: Message, args: &[Arg]) -> Result<Conclusion> {
        let settings = self.settings();
        let resolved = settings.options.resolve_alias(tag);
        let kind = LineKind::classify(resolved, &settings.options)?;

        match message {
            Message::Many(formats) => {
                for format in formats {
                    self.dispatch_message(tag, Message::One(format), args)?;
                }
                Ok(Conclusion::Skip)
            }
            Message::One(format) => self.emit(&settings, tag, resolved, kind, &format, args),
        }
    }

    fn emit(
        &self,
        settings: &Settings,
        tag: &str,
        resolved: &str,
        kind: LineKind,
        format: &str,
        args: &[Arg],
    ) -> Result<Conclusion> {
        let options = &settings.options;
        let message = if args.is_empty() {
            format.to_string()
        } else {
            let sanitized: Vec<String> = args.iter().map(|arg| arg.sanitize(&settings.abbr)).collect();
            interpolate(format, &sanitized)
        };
        self.metrics.record_dispatched();

        let severity = kind.effective();
        if let Some(ref backend) = self.backend {
            backend.log(BackendLevel::from(severity), &message);
            self.metrics.record_backend();
        }

        let timestamp = settings.date_format.format(&(self.clock)());
        let line = kind.shape().render(resolved, &timestamp, &message);
        let record = Record::new(tag, severity, &line);

        if severity.passes(options.log_memory_level) {
            let mut memory = self.memory.lock();
            match memory.append(&record) {
                Ok(()) => {
                    self.metrics.record_memory();
                }
                Err(e) => self.report_failure(memory.name(), &e),
            }
        }

        if severity.passes(options.log_print_level) {
            self.write_console(&record);
        }

        if severity.passes(options.log_file_level) {
            let path = options
                .log_file()
                .ok_or_else(|| LoggerError::missing_log_file(line.as_str()))?;
            self.write_file(path, &record);
        }

        if severity.passes(options.log_break_level) && !self.halting.swap(true, Ordering::SeqCst) {
            self.metrics.record_halt();
            let dumped = self.dump_halt_trail(settings);
            self.halting.store(false, Ordering::SeqCst);
            dumped?;
            return Err(LoggerError::halt(message));
        }

        Ok(Conclusion::Fail)
    }

    fn dump_halt_trail(&self, settings: &Settings) -> Result<()> {
        let trail = settings.options.log_trail_level.as_str();
        let path = self.trace(0, false);

        self.dispatch_message(trail, Message::from(""), &[])?;
        self.dispatch_message(trail, Message::from(HALT_BANNER), &[])?;
        self.dispatch_message(trail, Message::from(""), &[])?;
        self.dispatch_message(trail, Message::Many(path), &[])?;
        self.dispatch_message(trail, Message::from(""), &[])?;
        Ok(())
    }

    fn write_console(&self, record: &Record<'_>) {
        let mut console = self.console.lock();
        match console.append(record) {
            Ok(()) => {
                self.metrics.record_printed();
            }
            Err(e) => self.report_failure(console.name(), &e),
        }
    }

    fn write_file(&self, path: &Path, record: &Record<'_>) {
        let mut file = FileAppender::new(path);
        match file.append(record) {
            Ok(()) => {
                self.metrics.record_file();
            }
            Err(e) => self.report_failure(file.name(), &e),
        }
    }

    fn report_failure(&self, sink: &str, error: &LoggerError) {
        self.metrics.record_failure();
        eprintln!("[EGGSHELL ERROR] {} sink failed: {}", sink, error);
    }

    level_methods! {
        /// System is unusable
        emerg => Level::Emerg;
        alert => Level::Alert;
        crit => Level::Crit;
        err => Level::Err;
        /// Same as [`err`](Self::err) under the default alias table
        error => Level::Error;
        warning => Level::Warning;
        notice => Level::Notice;
        info => Level::Info;
        debug => Level::Debug;
        /// Verbose debugging
        debugv => Level::Debugv;
        trail => Level::Trail;
        /// Output captured from a child process
        stdout => Level::Stdout;
        /// Error output captured from a child process
        stderr => Level::Stderr;
        /// Heading line, preceded by a blank line
        section_open => Level::SectionOpen;
        section_close => Level::SectionClose;
    }

    /// Print a line on the console, bypassing every threshold. Arguments are
    /// interpolated unquoted, and only when there are any.
    pub fn out(&self, format: &str, args: &[Arg]) {
        let text = if args.is_empty() {
            format.to_string()
        } else {
            let abbr = self.settings().abbr.clone();
            let plain: Vec<String> = args.iter().map(|arg| arg.plain(&abbr)).collect();
            interpolate(format, &plain)
        };
        self.write_console(&Record::raw(&text));
    }

    /// Frames of the caller's stack, oldest call first, file names relative
    /// to `app-root`. `strip` hides that many of the innermost caller frames.
    pub fn trace_frames(&self, strip: usize) -> Vec<Frame> {
        let settings = self.settings();
        let mut frames: Vec<Frame> = self
            .probe
            .frames(strip)
            .into_iter()
            .map(|mut frame| {
                frame.file = frame
                    .file
                    .map(|file| settings.options.in_path(&file).to_string());
                frame
            })
            .collect();
        frames.reverse();
        frames
    }

    /// Rendered trace, oldest call first; printed on the console when `dump`.
    pub fn trace(&self, strip: usize, dump: bool) -> Vec<String> {
        let lines: Vec<String> = self.trace_frames(strip).iter().map(Frame::render).collect();
        if dump {
            for line in &lines {
                self.out(line, &[]);
            }
        }
        lines
    }

    /// Leave a breadcrumb naming the function that called `mark`.
    ///
    /// Does nothing unless `log-mark-trace` is enabled.
    pub fn mark(&self, level: impl Into<Level>) -> Result<Conclusion> {
        let settings = self.settings();
        if !settings.options.log_mark_trace {
            return Ok(Conclusion::Skip);
        }

        let frames = self.trace_frames(0);
        let Some(caller) = frames.last() else {
            return Ok(Conclusion::Skip);
        };

        let first_arg = caller
            .args
            .first()
            .cloned()
            .unwrap_or(Arg::Null)
            .sanitize(&settings.abbr);
        let message = format!(
            "=Fired: {}->{}({})",
            caller.class.as_deref().unwrap_or(""),
            caller.function,
            first_arg
        );
        self.dispatch(&level.into(), message, &[])
    }

    /// Strip `app-root` from a file name
    pub fn in_path(&self, file: &str) -> String {
        self.settings().options.in_path(file).to_string()
    }

    /// Retained lines grouped by the tag they were logged under
    pub fn memory(&self) -> BTreeMap<String, Vec<String>> {
        self.memory.lock().grouped()
    }

    /// Retained lines logged under `tag`, oldest first
    pub fn memory_for(&self, tag: &str) -> Vec<String> {
        self.memory.lock().lines_for(tag)
    }

    /// Every retained (tag, line) pair in insertion order
    pub fn memory_entries(&self) -> Vec<(String, String)> {
        self.memory.lock().entries().to_vec()
    }

    pub fn clear_memory(&self) {
        self.memory.lock().clear();
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use eggshell::prelude::*;
    ///
    /// let logger = Logger::with_options(Options::default().file_level(Severity::Emerg)).unwrap();
    /// let _ = logger.debug("not printed", &[]);
    /// assert_eq!(logger.metrics().dispatched(), 1);
    /// assert_eq!(logger.metrics().printed(), 0);
    /// assert_eq!(logger.metrics().memory_appended(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.console.lock().flush()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use eggshell::prelude::*;
///
/// let logger = Logger::builder()
///     .options(Options::default().file_level(Severity::Emerg))
///     .console(CaptureAppender::new())
///     .backend(|level: BackendLevel, message: &str| eprintln!("{}: {}", level, message))
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    options: Options,
    console: Option<Box<dyn Sink>>,
    backend: Option<Box<dyn StructuredLogger>>,
    probe: Option<Box<dyn StackProbe>>,
    clock: Option<Clock>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            options: Options::default(),
            console: None,
            backend: None,
            probe: None,
            clock: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Replace stdout as the console sink
    #[must_use = "builder methods return a new value"]
    pub fn console<S: Sink + 'static>(mut self, console: S) -> Self {
        self.console = Some(Box::new(console));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn backend<B: StructuredLogger + 'static>(mut self, backend: B) -> Self {
        self.backend = Some(Box::new(backend));
        self
    }

    /// Replace the call-stack probe used for traces
    #[must_use = "builder methods return a new value"]
    pub fn probe<P: StackProbe + 'static>(mut self, probe: P) -> Self {
        self.probe = Some(Box::new(probe));
        self
    }

    /// Replace the local wall clock used for timestamps
    #[must_use = "builder methods return a new value"]
    pub fn clock<F>(mut self, clock: F) -> Self
    where
        F: Fn() -> DateTime<Local> + Send + Sync + 'static,
    {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Build the Logger, validating the options
    pub fn build(self) -> Result<Logger> {
        let settings = Settings::new(self.options.clone())?;
        Ok(Logger::from_parts(settings, self))
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
