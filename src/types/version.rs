//! DXF version code handling
//!
//! The `$ACADVER` header variable carries an internal version code such as
//! `AC1027`. Reports present the matching AutoCAD release label instead.

/// Prefix shared by every DXF version code.
pub const VERSION_CODE_PREFIX: &str = "AC";

/// Map a version code to its release label.
///
/// Returns `None` for codes outside the known set.
pub fn release_label(code: &str) -> Option<&'static str> {
    match code {
        "AC1014" => Some("R14"),
        "AC1015" => Some("2000"),
        "AC1018" => Some("2004"),
        "AC1021" => Some("2007"),
        "AC1024" => Some("2010"),
        "AC1027" => Some("2013"),
        "AC1032" => Some("2018"),
        _ => None,
    }
}

/// Resolve a version code to its release label, keeping unrecognized codes
/// verbatim so newer formats still surface in reports.
pub fn resolve_version(code: &str) -> String {
    match release_label(code) {
        Some(label) => label.to_string(),
        None => code.to_string(),
    }
}
