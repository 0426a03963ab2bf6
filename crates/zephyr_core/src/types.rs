pub use self::code_frame::*;
pub use self::code_highlight::*;
pub use self::diagnostic::*;
pub use self::error_kind::*;
pub use self::file::*;

mod code_frame;
mod code_highlight;
mod diagnostic;
mod error_kind;
mod file;
