//! Filesystem path constants.

/// Directory under the user config dir that holds kdeck files.
pub const CONFIG_DIR_NAME: &str = "kdeck";

/// Config file name inside `CONFIG_DIR_NAME`.
pub const CONFIG_FILE_NAME: &str = "config.yaml";
