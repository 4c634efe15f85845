pub mod config;
pub mod diagnostics;
pub mod error;
pub mod event;
pub mod memory;
pub mod platform;
pub mod registrar;

pub use config::RegistrarConfig;
pub use diagnostics::{Diagnostics, LogDiagnostics};
pub use error::{ConfigError, ListenerError};
pub use event::{InputEventKind, ListenerOptions, ListenerTarget};
pub use memory::{AttachedListener, MemoryCanvas, MemoryDiagnostics};
pub use platform::is_web_assembly;
pub use registrar::{PassiveRegistrar, init_passive_listeners};
