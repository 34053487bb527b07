/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiOptions {
    /// ASCII-only glyphs, borders and scene art.
    pub ascii_only: bool,
    pub high_contrast: bool,
    /// Skip the dialog pop-in animation.
    pub reduced_motion: bool,
}
