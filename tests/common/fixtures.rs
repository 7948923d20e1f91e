//! Test fixtures and constants.

/// Request files covering the supported input shapes
pub mod requests {
    /// Wrap-around hue region, five colors
    pub const HSL_REGION: &str = r#"
n: 5
input:
  colorspace:
    mode: hsl
    hue: [-170, 60]
    saturation: [0, 0.7]
    lightness: [0.2, 0.8]
colorspace_size: 400
"#;

    /// LCHab region scored for deuteranomaly against a white background
    pub const LCHAB_CVD: &str = r##"
n: 4
input:
  colorspace:
    mode: lchab
    chroma: [20, 70]
    lightness: [35, 80]
background: "#ffffff"
cvd: { deutan: 0.7 }
metric: din99d
colorspace_size: 300
"##;

    /// Two brewer colors extended from four candidates
    pub const EXTEND_COLORS: &str = r##"
n: 4
input:
  colors: ["#4daf4a", "#984ea3", "#ff7f00", "#ffff33"]
fixed: ["#e41a1c", "#377eb8"]
"##;

    /// More colors than candidates
    pub const INFEASIBLE: &str = r##"
n: 10
input:
  colors: ["#ff0000", "#00ff00", "#0000ff"]
"##;

    /// Not a mapping
    pub const MALFORMED: &str = "n: [5\ninput: {";
}

/// Brewer "Set1" colors used by the extend scenario
pub mod colors {
    pub const FIXED: [&str; 2] = ["#e41a1c", "#377eb8"];
    pub const CANDIDATES: [&str; 4] = ["#4daf4a", "#984ea3", "#ff7f00", "#ffff33"];
}
