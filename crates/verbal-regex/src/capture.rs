//! Capture-group collection shared by the engine adapters.

/// Collect capture groups into owned strings.
///
/// Callers pass the groups after group 0 (the full match). Groups that did
/// not participate yield empty strings to keep positional alignment.
pub(crate) fn collect_groups<'t>(groups: impl Iterator<Item = Option<&'t str>>) -> Vec<String> {
    groups
        .map(|group| group.map_or_else(String::new, str::to_owned))
        .collect()
}
