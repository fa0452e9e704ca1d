//! Default configuration constants.

/// Title used by `print_title` until one is set.
pub(super) const DEFAULT_TITLE: &str = "Untitled";
/// Prompt shown by `input` when the caller does not supply one.
pub(super) const DEFAULT_INPUT_PROMPT: &str = " > ";
/// Config file name searched for locally and under the config root.
pub(super) const CONFIG_FILE_NAME: &str = "screenkit.toml";
/// Directory under the config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "screenkit";
