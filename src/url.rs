//! Dispatch a URL to stdout, the clipboard, or a browser.
//!
//! The three sinks are injected into [`UrlHandler`] so tests can record calls
//! instead of touching the clipboard or spawning a browser. Production code
//! uses [`UrlHandler::system`].

use std::{
    fmt,
    io::{self, Write},
    str::FromStr,
};

use copypasta::{ClipboardContext, ClipboardProvider};
use tracing::{debug, info};

use crate::error::{Error, Result};

/// What to do with a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrlAction {
    Print,
    Clip,
    #[default]
    Open,
}

impl UrlAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Print => "print",
            Self::Clip => "clip",
            Self::Open => "open",
        }
    }
}

impl fmt::Display for UrlAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UrlAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "print" => Ok(Self::Print),
            "clip" => Ok(Self::Clip),
            "open" => Ok(Self::Open),
            other => Err(Error::UnsupportedAction(other.to_string())),
        }
    }
}

/// Copies text to a clipboard
pub trait ClipboardWriter {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Opens URLs in a browser
pub trait UrlOpener {
    /// Open with the user's default browser
    fn open(&self, url: &str) -> Result<()>;

    /// Open with the named browser executable
    fn open_with(&self, url: &str, browser: &str) -> Result<()>;
}

/// Routes URLs to one of three sinks selected by action keyword
#[derive(Debug)]
pub struct UrlHandler<W, C, O> {
    printer: W,
    clipboard: C,
    opener: O,
}

impl UrlHandler<io::Stdout, SystemClipboard, SystemBrowser> {
    /// Handler backed by stdout, the OS clipboard and the OS browser launcher
    pub fn system() -> Self {
        Self::new(io::stdout(), SystemClipboard, SystemBrowser)
    }
}

impl<W: Write, C: ClipboardWriter, O: UrlOpener> UrlHandler<W, C, O> {
    pub fn new(printer: W, clipboard: C, opener: O) -> Self {
        Self {
            printer,
            clipboard,
            opener,
        }
    }

    /// Handle `url` according to `action` (`print`, `clip` or `open`).
    ///
    /// `pre` and `post` wrap the URL for `print` only. An empty `browser` means
    /// the system default for `open`. Unknown actions fail before any sink is
    /// touched.
    pub fn handle(
        &mut self,
        action: &str,
        browser: &str,
        url: &str,
        pre: &str,
        post: &str,
    ) -> Result<()> {
        let action: UrlAction = action.parse()?;
        self.dispatch(action, browser, url, pre, post)
    }

    /// Same as [`handle`](Self::handle) with an already parsed action
    pub fn dispatch(
        &mut self,
        action: UrlAction,
        browser: &str,
        url: &str,
        pre: &str,
        post: &str,
    ) -> Result<()> {
        debug!("Handling url with action '{}'", action);

        match action {
            UrlAction::Print => self.print(url, pre, post),
            UrlAction::Clip => {
                self.clipboard.write_text(url)?;
                info!("Copied URL to clipboard");
                Ok(())
            }
            UrlAction::Open if browser.is_empty() => self.opener.open(url),
            UrlAction::Open => self.opener.open_with(url, browser),
        }
    }

    fn print(&mut self, url: &str, pre: &str, post: &str) -> Result<()> {
        write!(self.printer, "{pre}{url}{post}")
            .and_then(|()| self.printer.flush())
            .map_err(|e| Error::sink("print", e))
    }

    /// Consume the handler and return the print sink
    pub fn into_printer(self) -> W {
        self.printer
    }
}

/// Clipboard access through the OS clipboard provider
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        let mut ctx = ClipboardContext::new().map_err(|e| Error::sink("clipboard", e))?;
        ctx.set_contents(text.to_string())
            .map_err(|e| Error::sink("clipboard", e))
    }
}

/// Browser launching through the platform's "open" mechanism
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        open::that(url).map_err(|e| Error::sink("browser", e))?;
        info!("Opened URL in default browser");
        Ok(())
    }

    fn open_with(&self, url: &str, browser: &str) -> Result<()> {
        open::with(url, browser)
            .map_err(|e| Error::sink("browser", format!("failed to launch {browser}: {e}")))?;
        info!("Opened URL in {}", browser);
        Ok(())
    }
}
