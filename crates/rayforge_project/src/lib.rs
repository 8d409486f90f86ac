#![forbid(unsafe_code)]

pub mod codec;
pub mod files;
pub mod presets;
pub mod session;

pub use codec::{CodecError, decode, encode};
pub use files::{ProjectError, SCRIPT_FILE_NAME, load_project, project_file_name, save_project, write_script};
pub use presets::{PRESETS, Preset};
pub use session::{ProjectSession, SessionError};
