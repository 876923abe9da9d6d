pub mod storage;
pub mod types;

pub use storage::{
    clear_session, find_session, get_session_path, load_session, save_report, save_session,
};
pub use types::{SessionSnapshot, SESSION_VERSION};
